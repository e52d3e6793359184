//! Declared member types and assignability checks.

use std::any::TypeId;
use std::fmt;

/// Type descriptor for a record member.
///
/// Every member declares the type of value it holds. Writes through a
/// member check the incoming [`Value`](crate::Value) against this type.
#[derive(Clone, PartialEq, Eq, Hash)]
pub enum Type {
    /// The nil type (only value: nil).
    Nil,
    /// Boolean type.
    Bool,
    /// Integer type (every Rust integer width maps here).
    Int,
    /// Floating point type.
    Float,
    /// String type.
    String,
    /// Homogeneous sequence type.
    Vec(Box<Type>),
    /// String-keyed map type with homogeneous values.
    Map(Box<Type>),
    /// Optional type (value or nil).
    Option(Box<Type>),
    /// Any type (accepts any value).
    Any,
    /// A Rust type carried without conversion.
    Opaque {
        /// Type name for diagnostics.
        name: &'static str,
        /// Identity used for assignability.
        id: TypeId,
    },
}

impl Type {
    /// Creates a sequence type with the given element type.
    #[must_use]
    pub fn vec(element: Type) -> Self {
        Self::Vec(Box::new(element))
    }

    /// Creates a map type with the given value type.
    #[must_use]
    pub fn map(value: Type) -> Self {
        Self::Map(Box::new(value))
    }

    /// Creates an optional type.
    #[must_use]
    pub fn option(inner: Type) -> Self {
        Self::Option(Box::new(inner))
    }

    /// Creates the opaque type for `T`.
    #[must_use]
    pub fn opaque<T: 'static>() -> Self {
        Self::Opaque {
            name: std::any::type_name::<T>(),
            id: TypeId::of::<T>(),
        }
    }

    /// Returns true if this type is `Any`.
    #[must_use]
    pub const fn is_any(&self) -> bool {
        matches!(self, Self::Any)
    }

    /// Returns true if this type can hold nil.
    #[must_use]
    pub const fn is_nullable(&self) -> bool {
        matches!(self, Self::Nil | Self::Option(_) | Self::Any)
    }

    /// Checks if a value of type `value_type` may be assigned to a member of this type.
    ///
    /// - `Any` accepts all types
    /// - `Option(T)` accepts `Nil` and any type that `T` accepts
    /// - `Float` accepts `Int` (numeric promotion), never the reverse
    /// - Collection types check element types recursively
    /// - Opaque types match by `TypeId`
    #[must_use]
    pub fn accepts(&self, value_type: &Type) -> bool {
        if matches!(self, Self::Any) {
            return true;
        }

        if let Self::Option(inner) = self {
            return matches!(value_type, Self::Nil) || inner.accepts(value_type);
        }

        match (self, value_type) {
            (Self::Nil, Self::Nil)
            | (Self::Bool, Self::Bool)
            | (Self::Int | Self::Float, Self::Int)
            | (Self::Float, Self::Float)
            | (Self::String, Self::String) => true,

            // Runtime collections report `Any` elements; element checks
            // happen again when the collection is converted.
            (Self::Vec(expected), Self::Vec(actual)) | (Self::Map(expected), Self::Map(actual)) => {
                actual.is_any() || expected.accepts(actual)
            }

            (Self::Opaque { id: expected, .. }, Self::Opaque { id: actual, .. }) => {
                expected == actual
            }

            _ => false,
        }
    }
}

impl fmt::Debug for Type {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Nil => write!(f, "nil"),
            Self::Bool => write!(f, "bool"),
            Self::Int => write!(f, "int"),
            Self::Float => write!(f, "float"),
            Self::String => write!(f, "string"),
            Self::Vec(t) => write!(f, "vec<{t:?}>"),
            Self::Map(t) => write!(f, "map<string, {t:?}>"),
            Self::Option(t) => write!(f, "option<{t:?}>"),
            Self::Any => write!(f, "any"),
            Self::Opaque { name, .. } => write!(f, "opaque<{name}>"),
        }
    }
}

impl fmt::Display for Type {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self, f)
    }
}
