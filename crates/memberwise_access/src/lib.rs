//! Name-driven member access for memberwise.
//!
//! This crate provides:
//! - [`Record`] - Records that describe their members, usually via `#[derive(Record)]`
//! - [`accessors`] - The process-wide cache of per-type [`AccessorTable`]s
//! - [`get`] / [`set`] - Read and write a member by name
//! - [`with`], [`with_changes`] - Copy-on-write patches
//! - [`merge`] / [`delta`] - Bulk copy and member-wise comparison
//! - [`SharedRecord`] - Handles onto one shared record
//!
//! # Example
//!
//! ```
//! use memberwise_access::{Record, RecordExt, Value};
//!
//! #[derive(Clone, Default, Record)]
//! pub struct Point {
//!     pub x: i64,
//!     pub y: i64,
//! }
//!
//! let a = Point { x: 1, y: 2 };
//! let b = Point { x: 1, y: 5 };
//!
//! assert_eq!(a.get_member("y").unwrap(), Some(Value::Int(2)));
//! assert_eq!(a.delta(&b).unwrap().iter().collect::<Vec<_>>(), vec!["y"]);
//! assert_eq!(a.with_member(&b, "y").unwrap().y, 5);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

// Lets `#[derive(Record)]` expand to `::memberwise_access` paths inside this crate.
extern crate self as memberwise_access;

pub mod accessor;
pub mod cache;
pub mod descriptor;
pub mod ext;
pub mod ops;
pub mod shared;
pub mod table;

pub use accessor::{Accessor, ValueOps};
pub use cache::{accessors, descriptors, is_cached};
pub use descriptor::{MemberDescriptor, MemberKind};
pub use ext::RecordExt;
pub use ops::{
    Changes, Delta, DeltaIter, delta, get, merge, merge_where, set, shallow_copy, with, with_all,
    with_changes, with_names,
};
pub use shared::SharedRecord;
pub use table::{AccessorTable, Members, Record, TableBuilder};

pub use memberwise_derive::Record;
pub use memberwise_foundation::{
    Error, ErrorContext, ErrorKind, Identity, MemberValue, Result, Type, Value,
};
