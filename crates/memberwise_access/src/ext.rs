//! Method-call syntax for the operations in [`ops`](crate::ops).

use std::borrow::Cow;

use memberwise_foundation::{Result, Value};

use crate::descriptor::MemberDescriptor;
use crate::ops::{self, Changes, Delta};
use crate::table::Record;

/// Extension methods available on every [`Record`].
pub trait RecordExt: Record {
    /// See [`ops::get`].
    ///
    /// # Errors
    ///
    /// Returns an unsupported shape error if `Self` cannot be described.
    fn get_member(&self, name: &str) -> Result<Option<Value>> {
        ops::get(self, name)
    }

    /// See [`ops::set`].
    ///
    /// # Errors
    ///
    /// Returns a type mismatch if `value` is not assignable to the member.
    fn set_member(&mut self, name: &str, value: impl Into<Value>) -> Result<()> {
        ops::set(self, name, value.into())
    }

    /// See [`ops::with`].
    ///
    /// # Errors
    ///
    /// Returns an unsupported shape error if `Self` cannot be described.
    fn with_member(&self, source: &Self, name: &str) -> Result<Self> {
        ops::with(self, source, name)
    }

    /// See [`ops::with_names`].
    ///
    /// # Errors
    ///
    /// Returns an unsupported shape error if `Self` cannot be described.
    fn with_members(&self, source: &Self, first: &str, rest: &[&str]) -> Result<Self> {
        ops::with_names(self, source, first, rest)
    }

    /// See [`ops::with_all`].
    ///
    /// # Errors
    ///
    /// Returns an unsupported shape error if `Self` cannot be described.
    fn with_all_members<I, S>(&self, source: &Self, names: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        ops::with_all(self, source, names)
    }

    /// See [`ops::with_changes`].
    ///
    /// # Errors
    ///
    /// Returns a type mismatch if a value is not assignable to its member.
    fn with_changes(&self, changes: Option<&Changes>) -> Result<Cow<'_, Self>> {
        ops::with_changes(self, changes)
    }

    /// See [`ops::merge`].
    ///
    /// # Errors
    ///
    /// Returns an unsupported shape error if `Self` cannot be described.
    fn merge_from(&mut self, source: &Self) -> Result<&mut Self>
    where
        Self: Default,
    {
        ops::merge(self, source)
    }

    /// See [`ops::merge_where`].
    ///
    /// # Errors
    ///
    /// Returns an unsupported shape error if `Self` cannot be described.
    fn merge_from_where<P>(&mut self, source: &Self, predicate: P) -> Result<&mut Self>
    where
        Self: Default,
        P: FnMut(&MemberDescriptor) -> bool,
    {
        ops::merge_where(self, source, predicate)
    }

    /// See [`ops::delta`].
    ///
    /// # Errors
    ///
    /// Returns an unsupported shape error if `Self` cannot be described.
    fn delta<'a>(&'a self, other: &'a Self) -> Result<Delta<'a, Self>> {
        ops::delta(self, other)
    }
}

impl<T: Record> RecordExt for T {}
