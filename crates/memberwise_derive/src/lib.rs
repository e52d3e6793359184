//! Derive macro for the memberwise `Record` trait.
//!
//! This crate provides the `#[derive(Record)]` macro that generates
//! `impl Record for {Name}`, registering one accessor per member.
//!
//! # Usage
//!
//! ```ignore
//! use memberwise_access::Record;
//!
//! #[derive(Clone, Default, Record)]
//! struct Config {
//!     pub timeout: u32,
//!     pub retries: u32,
//!     secret: String, // not public, not a member
//! }
//! ```

use proc_macro::TokenStream;
use syn::{DeriveInput, parse_macro_input};

mod codegen;
mod parse;

/// Derive the `Record` trait for a struct with named fields.
///
/// Every `pub` field becomes a field member named after the field.
/// Non-public fields are not members.
///
/// # Attributes
///
/// ## Field Attributes
///
/// - `#[record(rename = "name")]`: Use a different member name
/// - `#[record(skip)]`: Hide a public field
/// - `#[record(identity)]`: Compare with `Identity::same` instead of `PartialEq`
/// - `#[record(compare = "path")]`: Compare with a custom `fn(&T, &T) -> bool`
/// - `#[record(opaque)]`: Carry the value as `Value::Opaque` instead of converting it
///   through `MemberValue`
/// - `#[record(base)]`: The field holds a base record whose members are spliced
///   into this record, after its own members
///
/// ## Struct Attributes
///
/// - `#[record(property(name = "n", ty = "T", get = "path", set = "path"))]`:
///   A member backed by accessor functions `fn(&Self) -> T` and `fn(&mut Self, T)`.
///   A property without `set` is read-only and is not a member.
///   Accepts `identity`, `compare` and `opaque` like fields.
/// - `#[record(crate = "path")]`: Path to the runtime crate
///   (default `::memberwise_access`)
///
/// # Examples
///
/// ```ignore
/// #[derive(Clone, Record)]
/// #[record(property(name = "area", ty = "f64", get = "Self::area", set = "Self::set_area"))]
/// struct Square {
///     pub side: f64,
/// }
///
/// impl Square {
///     fn area(&self) -> f64 { self.side * self.side }
///     fn set_area(&mut self, area: f64) { self.side = area.sqrt() }
/// }
/// ```
#[proc_macro_derive(Record, attributes(record))]
pub fn derive_record(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);

    match codegen::expand(&input) {
        Ok(tokens) => tokens.into(),
        Err(err) => err.to_compile_error().into(),
    }
}
