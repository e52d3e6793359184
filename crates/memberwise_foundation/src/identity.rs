//! Identity comparison for members without structural equality.

use std::rc::Rc;
use std::sync::Arc;

/// Compares two values by identity rather than by content.
///
/// Used for members whose type has no meaningful `PartialEq`, or where
/// sharing the same allocation is what matters.
pub trait Identity {
    /// Returns true if `self` and `other` are the same object.
    fn same(&self, other: &Self) -> bool;
}

impl<T: ?Sized> Identity for Arc<T> {
    fn same(&self, other: &Self) -> bool {
        Arc::ptr_eq(self, other)
    }
}

impl<T: ?Sized> Identity for Rc<T> {
    fn same(&self, other: &Self) -> bool {
        Rc::ptr_eq(self, other)
    }
}

impl<T: Identity> Identity for Option<T> {
    fn same(&self, other: &Self) -> bool {
        match (self, other) {
            (Some(a), Some(b)) => a.same(b),
            (None, None) => true,
            _ => false,
        }
    }
}
