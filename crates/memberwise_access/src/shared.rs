//! Shared, reference-semantics record handles.
//!
//! A [`SharedRecord`] is many handles onto one record. Merge and delta
//! between two handles onto the same record short-circuit, which plain
//! `&mut` borrows cannot express.

use std::fmt;
use std::sync::Arc;

use memberwise_foundation::{Result, Value};
use parking_lot::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use crate::descriptor::MemberDescriptor;
use crate::ops::{self, Changes};
use crate::table::Record;

/// A record behind `Arc<RwLock<_>>`.
///
/// Every operation holds at most one lock at a time. Operations between two
/// handles copy one side out first.
pub struct SharedRecord<T>(Arc<RwLock<T>>);

impl<T: Record> SharedRecord<T> {
    /// Wraps a record.
    #[must_use]
    pub fn new(record: T) -> Self {
        Self(Arc::new(RwLock::new(record)))
    }

    /// Locks the record for reading.
    pub fn read(&self) -> RwLockReadGuard<'_, T> {
        self.0.read()
    }

    /// Locks the record for writing.
    pub fn write(&self) -> RwLockWriteGuard<'_, T> {
        self.0.write()
    }

    /// Returns true if both handles refer to the same record.
    #[must_use]
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }

    /// Returns a shallow copy of the current record.
    #[must_use]
    pub fn snapshot(&self) -> T {
        self.read().clone()
    }

    /// Reads a member by name. See [`ops::get`].
    ///
    /// # Errors
    ///
    /// Returns an unsupported shape error if `T` cannot be described.
    pub fn get(&self, name: &str) -> Result<Option<Value>> {
        ops::get(&*self.read(), name)
    }

    /// Writes a member by name. See [`ops::set`].
    ///
    /// # Errors
    ///
    /// Returns a type mismatch if `value` is not assignable to the member.
    pub fn set(&self, name: &str, value: impl Into<Value>) -> Result<()> {
        ops::set(&mut *self.write(), name, value.into())
    }

    /// Returns a handle with the given changes applied to a copy.
    ///
    /// With no changes this returns another handle onto the same record.
    ///
    /// # Errors
    ///
    /// Returns a type mismatch if a value is not assignable to its member.
    pub fn with_changes(&self, changes: Option<&Changes>) -> Result<Self> {
        if changes.is_none_or(Changes::is_empty) {
            return Ok(self.clone());
        }
        let patched = ops::with_changes(&*self.read(), changes)?.into_owned();
        Ok(Self::new(patched))
    }

    /// Returns the names of members that differ between the two records.
    ///
    /// # Errors
    ///
    /// Returns an unsupported shape error if `T` cannot be described.
    pub fn delta(&self, other: &Self) -> Result<Vec<&'static str>> {
        if self.ptr_eq(other) {
            return Ok(Vec::new());
        }
        // Release the other record before locking this one.
        let other = other.snapshot();
        Ok(ops::delta(&*self.read(), &other)?.iter().collect())
    }
}

impl<T: Record + Default> SharedRecord<T> {
    /// Copies every member of `source` into this record. See [`ops::merge`].
    ///
    /// Merging a record into itself does nothing.
    ///
    /// # Errors
    ///
    /// Returns an unsupported shape error if `T` cannot be described.
    pub fn merge_from(&self, source: &Self) -> Result<&Self> {
        self.merge_from_where(source, |_| true)
    }

    /// Copies the members of `source` selected by `predicate`. See [`ops::merge_where`].
    ///
    /// # Errors
    ///
    /// Returns an unsupported shape error if `T` cannot be described.
    pub fn merge_from_where<P>(&self, source: &Self, predicate: P) -> Result<&Self>
    where
        P: FnMut(&MemberDescriptor) -> bool,
    {
        if self.ptr_eq(source) {
            return Ok(self);
        }
        // Release the source before locking the target.
        let source = source.snapshot();
        ops::merge_where(&mut *self.write(), &source, predicate)?;
        Ok(self)
    }
}

impl<T: Record + Default> Default for SharedRecord<T> {
    fn default() -> Self {
        Self::new(T::default())
    }
}

impl<T> Clone for SharedRecord<T> {
    fn clone(&self) -> Self {
        Self(Arc::clone(&self.0))
    }
}

impl<T: Record> From<T> for SharedRecord<T> {
    fn from(record: T) -> Self {
        Self::new(record)
    }
}

impl<T: fmt::Debug> fmt::Debug for SharedRecord<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("SharedRecord").field(&*self.0.read()).finish()
    }
}
