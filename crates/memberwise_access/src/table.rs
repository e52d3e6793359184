//! Record descriptions and accessor tables.

use std::fmt;
use std::iter::Chain;
use std::slice;

use memberwise_foundation::Result;

use crate::accessor::Accessor;
use crate::descriptor::{MemberDescriptor, MemberKind};

/// A record-shaped type whose named members can be accessed by name.
///
/// `Clone` is the shallow copy used by patch operations: it duplicates the
/// record's own slots, and anything held behind `Arc` stays shared.
///
/// Usually implemented with `#[derive(Record)]`.
pub trait Record: Clone + Send + Sync + 'static {
    /// Registers the record's members.
    ///
    /// Called at most a few times per process (once per cache miss).
    ///
    /// # Errors
    ///
    /// Returns an unsupported shape error if the type cannot be described
    /// as a record.
    fn describe(table: &mut TableBuilder<Self>) -> Result<()>;
}

/// Collects accessors while a record describes itself.
pub struct TableBuilder<T> {
    properties: Vec<Accessor<T>>,
    fields: Vec<Accessor<T>>,
}

impl<T: Record> TableBuilder<T> {
    fn new() -> Self {
        Self {
            properties: Vec::new(),
            fields: Vec::new(),
        }
    }

    /// Adds a member.
    ///
    /// A member whose name is already taken is excluded; the first
    /// registration wins.
    pub fn add(&mut self, accessor: Accessor<T>) -> &mut Self {
        if self.contains(accessor.name()) {
            tracing::trace!(
                record = std::any::type_name::<T>(),
                member = accessor.name(),
                "excluding duplicate member"
            );
            return self;
        }

        match accessor.descriptor().kind() {
            MemberKind::Property => self.properties.push(accessor),
            MemberKind::Field => self.fields.push(accessor),
        }
        self
    }

    /// Notes a property that has a getter but no setter.
    ///
    /// Read-only properties are not members; this only records the exclusion.
    pub fn read_only(&mut self, name: &'static str) -> &mut Self {
        tracing::trace!(
            record = std::any::type_name::<T>(),
            member = name,
            "excluding read-only property"
        );
        self
    }

    /// Splices in the members of an embedded base record.
    ///
    /// # Errors
    ///
    /// Propagates a failure of the base record to describe itself.
    pub fn base<B: Record>(
        &mut self,
        outer: fn(&T) -> &B,
        outer_mut: fn(&mut T) -> &mut B,
    ) -> Result<&mut Self> {
        let mut base = TableBuilder::<B>::new();
        B::describe(&mut base)?;

        for accessor in base.properties.into_iter().chain(base.fields) {
            self.add(accessor.project(outer, outer_mut));
        }
        Ok(self)
    }

    /// Returns true if a member with this name is registered.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.properties
            .iter()
            .chain(&self.fields)
            .any(|a| a.name() == name)
    }
}

/// Iterator over a table's accessors, properties first.
pub type Members<'a, T> = Chain<slice::Iter<'a, Accessor<T>>, slice::Iter<'a, Accessor<T>>>;

/// The immutable accessor table of a record type.
///
/// Properties come before fields. Within each list a record's own members
/// keep declaration order and are followed by those of its base record.
pub struct AccessorTable<T> {
    record: &'static str,
    properties: Vec<Accessor<T>>,
    fields: Vec<Accessor<T>>,
}

impl<T: Record> AccessorTable<T> {
    /// Builds the table for `T` without consulting the cache.
    ///
    /// The result is a pure function of `T`'s shape.
    ///
    /// # Errors
    ///
    /// Returns an unsupported shape error if `T` rejects description.
    pub fn build() -> Result<Self> {
        let mut builder = TableBuilder::<T>::new();
        T::describe(&mut builder)?;

        let table = Self {
            record: std::any::type_name::<T>(),
            properties: builder.properties,
            fields: builder.fields,
        };

        tracing::debug!(
            record = table.record,
            properties = table.properties.len(),
            fields = table.fields.len(),
            "built accessor table"
        );
        Ok(table)
    }
}

impl<T> AccessorTable<T> {
    /// Type name of the record.
    #[must_use]
    pub const fn record(&self) -> &'static str {
        self.record
    }

    /// Property accessors in table order.
    #[must_use]
    pub fn properties(&self) -> &[Accessor<T>] {
        &self.properties
    }

    /// Field accessors in table order.
    #[must_use]
    pub fn fields(&self) -> &[Accessor<T>] {
        &self.fields
    }

    /// All accessors, properties first.
    pub fn iter(&self) -> Members<'_, T> {
        self.properties.iter().chain(self.fields.iter())
    }

    /// All member descriptors, properties first.
    pub fn descriptors(&self) -> impl Iterator<Item = &MemberDescriptor> {
        self.iter().map(Accessor::descriptor)
    }

    /// Finds a member by exact name, searching properties before fields.
    #[must_use]
    pub fn find(&self, name: &str) -> Option<&Accessor<T>> {
        self.iter().find(|a| a.name() == name)
    }

    /// Number of members.
    #[must_use]
    pub fn len(&self) -> usize {
        self.properties.len() + self.fields.len()
    }

    /// Returns true if the record has no members.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl<'a, T> IntoIterator for &'a AccessorTable<T> {
    type Item = &'a Accessor<T>;
    type IntoIter = Members<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T> fmt::Debug for AccessorTable<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AccessorTable")
            .field("record", &self.record)
            .field("members", &self.descriptors().collect::<Vec<_>>())
            .finish()
    }
}
