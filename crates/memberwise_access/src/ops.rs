//! Name-driven operations over records.
//!
//! Lookups are lenient throughout: a name that matches no member reads as
//! absent and is skipped by every write. Only a value that cannot be
//! assigned to its member is an error.

use std::borrow::Cow;
use std::collections::BTreeMap;
use std::fmt;
use std::iter::FusedIterator;

use memberwise_foundation::{ErrorContext, Result, Value};

use crate::accessor::Accessor;
use crate::cache::accessors;
use crate::descriptor::MemberDescriptor;
use crate::table::{AccessorTable, Members, Record};

/// A set of member writes keyed by member name, applied in key order.
pub type Changes = BTreeMap<String, Value>;

fn member_context<T>(table: &AccessorTable<T>, name: &str) -> ErrorContext {
    ErrorContext::new()
        .with_record(table.record())
        .with_member(name)
}

/// Reads a member by name.
///
/// Returns `Ok(None)` when `T` has no member called `name`.
///
/// # Errors
///
/// Returns an unsupported shape error if `T` cannot be described.
pub fn get<T: Record>(target: &T, name: &str) -> Result<Option<Value>> {
    Ok(accessors::<T>()?.find(name).map(|a| a.get(target)))
}

/// Writes a member by name.
///
/// Writing to a name that matches no member does nothing.
///
/// # Errors
///
/// Returns a type mismatch if `value` is not assignable to the member;
/// `target` is left unchanged.
pub fn set<T: Record>(target: &mut T, name: &str, value: Value) -> Result<()> {
    let table = accessors::<T>()?;
    match table.find(name) {
        Some(accessor) => accessor
            .set(target, value)
            .map_err(|e| e.with_context(member_context(table, name))),
        None => {
            tracing::trace!(record = table.record(), member = name, "set on unknown member ignored");
            Ok(())
        }
    }
}

/// Returns a copy of `target` with one member taken from `source`.
///
/// # Errors
///
/// Returns an unsupported shape error if `T` cannot be described.
pub fn with<T: Record>(target: &T, source: &T, name: &str) -> Result<T> {
    with_all(target, source, [name])
}

/// Returns a copy of `target` with `first` and every name in `rest` taken from `source`.
///
/// # Errors
///
/// Returns an unsupported shape error if `T` cannot be described.
pub fn with_names<T: Record>(target: &T, source: &T, first: &str, rest: &[&str]) -> Result<T> {
    with_all(
        target,
        source,
        std::iter::once(first).chain(rest.iter().copied()),
    )
}

/// Returns a copy of `target` with each named member taken from `source`.
///
/// Names are applied in order; unknown names are skipped. `target` itself
/// is never modified.
///
/// # Errors
///
/// Returns an unsupported shape error if `T` cannot be described.
pub fn with_all<T, I, S>(target: &T, source: &T, names: I) -> Result<T>
where
    T: Record,
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let table = accessors::<T>()?;
    let mut result = target.clone();

    for name in names {
        if let Some(accessor) = table.find(name.as_ref()) {
            accessor.copy(source, &mut result);
        }
    }
    Ok(result)
}

/// Returns `target` with the given member values applied.
///
/// With no changes (`None` or an empty map) this borrows `target` itself
/// instead of copying it. Otherwise the changes are written into a copy.
///
/// # Errors
///
/// Returns a type mismatch if a value is not assignable to its member. The
/// partially written copy is discarded, so nothing is applied.
pub fn with_changes<'a, T: Record>(target: &'a T, changes: Option<&Changes>) -> Result<Cow<'a, T>> {
    let Some(changes) = changes.filter(|c| !c.is_empty()) else {
        return Ok(Cow::Borrowed(target));
    };

    let table = accessors::<T>()?;
    let mut result = target.clone();

    for (name, value) in changes {
        if let Some(accessor) = table.find(name) {
            accessor
                .set(&mut result, value.clone())
                .map_err(|e| e.with_context(member_context(table, name)))?;
        }
    }
    Ok(Cow::Owned(result))
}

/// Copies every member of `source` into `target`.
///
/// # Errors
///
/// Returns an unsupported shape error if `T` cannot be described.
pub fn merge<'t, T: Record + Default>(target: &'t mut T, source: &T) -> Result<&'t mut T> {
    merge_where(target, source, |_| true)
}

/// Copies the members of `source` selected by `predicate` into `target`.
///
/// Members are visited in table order.
///
/// # Errors
///
/// Returns an unsupported shape error if `T` cannot be described.
pub fn merge_where<'t, T, P>(target: &'t mut T, source: &T, mut predicate: P) -> Result<&'t mut T>
where
    T: Record + Default,
    P: FnMut(&MemberDescriptor) -> bool,
{
    let table = accessors::<T>()?;
    for accessor in table {
        if predicate(accessor.descriptor()) {
            accessor.copy(source, target);
        }
    }
    Ok(target)
}

/// Returns the names of the members whose values differ between `a` and `b`.
///
/// The result is lazy: nothing is compared until it is iterated, and each
/// iteration compares afresh.
///
/// # Errors
///
/// Returns an unsupported shape error if `T` cannot be described.
pub fn delta<'a, T: Record>(a: &'a T, b: &'a T) -> Result<Delta<'a, T>> {
    Ok(Delta {
        table: accessors::<T>()?,
        a,
        b,
    })
}

/// The differing members of two records. See [`delta`].
pub struct Delta<'a, T: 'static> {
    table: &'static AccessorTable<T>,
    a: &'a T,
    b: &'a T,
}

impl<'a, T: 'static> Delta<'a, T> {
    /// Starts a new pass over the members.
    #[must_use]
    pub fn iter(&self) -> DeltaIter<'a, T> {
        DeltaIter {
            // The same instance never differs from itself.
            members: (!std::ptr::eq(self.a, self.b)).then(|| self.table.iter()),
            a: self.a,
            b: self.b,
        }
    }

    /// Returns true if no member differs.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.iter().next().is_none()
    }
}

impl<T: 'static> Clone for Delta<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T: 'static> Copy for Delta<'_, T> {}

impl<T: 'static> fmt::Debug for Delta<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<'a, T: 'static> IntoIterator for Delta<'a, T> {
    type Item = &'static str;
    type IntoIter = DeltaIter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a, T: 'static> IntoIterator for &Delta<'a, T> {
    type Item = &'static str;
    type IntoIter = DeltaIter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Iterator over differing member names.
pub struct DeltaIter<'a, T: 'static> {
    members: Option<Members<'static, T>>,
    a: &'a T,
    b: &'a T,
}

impl<T: 'static> Iterator for DeltaIter<'_, T> {
    type Item = &'static str;

    fn next(&mut self) -> Option<Self::Item> {
        let (a, b) = (self.a, self.b);
        self.members
            .as_mut()?
            .find(|accessor| !accessor.equals(a, b))
            .map(Accessor::name)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let upper = self.members.as_ref().map_or(0, |m| m.size_hint().1.unwrap_or(0));
        (0, Some(upper))
    }
}

impl<T: 'static> FusedIterator for DeltaIter<'_, T> {}

/// Returns a shallow copy of `target`, or `None` when there is no target.
#[must_use]
pub fn shallow_copy<T: Record>(target: Option<&T>) -> Option<T> {
    target.cloned()
}
