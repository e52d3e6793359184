//! Process-wide accessor table cache.
//!
//! Tables are keyed by `TypeId`, built on first request, and live for the
//! rest of the process. Builds run outside the lock: concurrent first
//! requests may each build a table, and the first insert wins. Every build
//! of a type yields an equal table, so it does not matter which one wins.

use std::any::{Any, TypeId};
use std::collections::HashMap;
use std::collections::hash_map::Entry;
use std::sync::LazyLock;

use memberwise_foundation::{Error, Result};
use parking_lot::RwLock;

use crate::descriptor::MemberDescriptor;
use crate::table::{AccessorTable, Record};

type CachedTable = &'static (dyn Any + Send + Sync);

static TABLES: LazyLock<RwLock<HashMap<TypeId, CachedTable>>> =
    LazyLock::new(|| RwLock::new(HashMap::new()));

/// Returns the accessor table for `T`, building it on first use.
///
/// # Errors
///
/// Returns an unsupported shape error if `T` rejects description. Failed
/// builds are not cached.
pub fn accessors<T: Record>() -> Result<&'static AccessorTable<T>> {
    let id = TypeId::of::<T>();

    let cached = TABLES.read().get(&id).copied();
    let entry = match cached {
        Some(entry) => entry,
        None => {
            let table = AccessorTable::<T>::build()?;
            match TABLES.write().entry(id) {
                Entry::Occupied(existing) => {
                    tracing::trace!(
                        record = std::any::type_name::<T>(),
                        "accessor table already cached; dropping duplicate build"
                    );
                    *existing.get()
                }
                Entry::Vacant(slot) => {
                    let leaked: CachedTable = Box::leak(Box::new(table));
                    *slot.insert(leaked)
                }
            }
        }
    };

    entry.downcast_ref::<AccessorTable<T>>().ok_or_else(|| {
        Error::internal(format!(
            "cached accessor table for {} has the wrong type",
            std::any::type_name::<T>()
        ))
    })
}

/// Returns the member descriptors of `T`, properties first.
///
/// # Errors
///
/// Returns an unsupported shape error if `T` rejects description.
pub fn descriptors<T: Record>() -> Result<Vec<MemberDescriptor>> {
    Ok(accessors::<T>()?.descriptors().cloned().collect())
}

/// Returns true if a table for `T` has already been cached.
#[must_use]
pub fn is_cached<T: Record>() -> bool {
    TABLES.read().contains_key(&TypeId::of::<T>())
}
