//! Dynamic values, declared types, and errors for memberwise.
//!
//! This crate provides:
//! - [`Value`] - The dynamic value moved through name-driven member access
//! - [`Type`] - Declared member types and assignability checks
//! - [`MemberValue`] - Conversion between Rust member types and [`Value`]
//! - [`Identity`] - Identity comparison for members without structural equality
//! - [`Error`] - Rich error types with context

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod error;
pub mod identity;
pub mod member_value;
pub mod types;
pub mod value;

pub use error::{Error, ErrorContext, ErrorKind, Result};
pub use identity::Identity;
pub use member_value::MemberValue;
pub use types::Type;
pub use value::{OpaqueValue, Value};
