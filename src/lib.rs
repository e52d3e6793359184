//! Memberwise - Name-driven member access, patching, merging and deltas
//!
//! This crate re-exports all layers of the memberwise system for convenient access.
//! For detailed documentation, see the individual layer crates.
//!
//! # Architecture
//!
//! ```text
//! Layer 2: memberwise_access     - Accessor cache, get/set, with, merge, delta
//! Layer 1: memberwise_derive     - #[derive(Record)]
//! Layer 0: memberwise_foundation - Core types (Value, Type, Error)
//! ```

pub use memberwise_access as access;
pub use memberwise_foundation as foundation;

pub use memberwise_access::{Record, RecordExt, SharedRecord};
pub use memberwise_foundation::{Error, Result, Value};
