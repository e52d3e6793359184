//! Conversion between Rust member types and [`Value`].

use std::collections::{BTreeMap, HashMap};
use std::sync::Arc;

use crate::error::{Error, Result};
use crate::types::Type;
use crate::value::Value;

/// A Rust type that can be stored in a record member and moved through [`Value`].
///
/// `from_value` must reject any value whose type is not accepted by
/// [`member_type`](MemberValue::member_type), and must accept every value
/// produced by `into_value`.
pub trait MemberValue: Sized {
    /// The declared type of members holding `Self`.
    fn member_type() -> Type;

    /// Converts into a dynamic value.
    fn into_value(self) -> Value;

    /// Converts from a dynamic value.
    ///
    /// # Errors
    ///
    /// Returns a type mismatch if `value` is not assignable to `Self`.
    fn from_value(value: Value) -> Result<Self>;
}

fn mismatch<T: MemberValue>(value: &Value) -> Error {
    Error::type_mismatch(T::member_type(), value.value_type())
}

impl MemberValue for Value {
    fn member_type() -> Type {
        Type::Any
    }

    fn into_value(self) -> Value {
        self
    }

    fn from_value(value: Value) -> Result<Self> {
        Ok(value)
    }
}

impl MemberValue for bool {
    fn member_type() -> Type {
        Type::Bool
    }

    fn into_value(self) -> Value {
        Value::Bool(self)
    }

    fn from_value(value: Value) -> Result<Self> {
        value.as_bool().ok_or_else(|| mismatch::<Self>(&value))
    }
}

fn integer_from_value<T: MemberValue + TryFrom<i128>>(value: Value) -> Result<T> {
    let n = value.as_integer().ok_or_else(|| mismatch::<T>(&value))?;
    T::try_from(n).map_err(|_| Error::out_of_range(n, std::any::type_name::<T>()))
}

macro_rules! integer_member_value {
    ($wide:ty => $($ty:ty),* $(,)?) => {
        $(
            impl MemberValue for $ty {
                fn member_type() -> Type {
                    Type::Int
                }

                // Lossless: every listed type fits in the wide type.
                #[allow(clippy::cast_lossless, clippy::unnecessary_cast)]
                fn into_value(self) -> Value {
                    Value::from(self as $wide)
                }

                fn from_value(value: Value) -> Result<Self> {
                    integer_from_value(value)
                }
            }
        )*
    };
}

integer_member_value!(i64 => i8, i16, i32, i64, isize);
integer_member_value!(u64 => u8, u16, u32, u64, usize);

impl MemberValue for f64 {
    fn member_type() -> Type {
        Type::Float
    }

    fn into_value(self) -> Value {
        Value::Float(self)
    }

    fn from_value(value: Value) -> Result<Self> {
        value.as_number().ok_or_else(|| mismatch::<Self>(&value))
    }
}

impl MemberValue for f32 {
    fn member_type() -> Type {
        Type::Float
    }

    fn into_value(self) -> Value {
        Value::Float(f64::from(self))
    }

    #[allow(clippy::cast_possible_truncation)]
    fn from_value(value: Value) -> Result<Self> {
        let n = value.as_number().ok_or_else(|| mismatch::<Self>(&value))?;
        if n.is_finite() && n.abs() > f64::from(f32::MAX) {
            return Err(Error::out_of_range(n, "f32"));
        }
        Ok(n as f32)
    }
}

impl MemberValue for String {
    fn member_type() -> Type {
        Type::String
    }

    fn into_value(self) -> Value {
        Value::String(self.into())
    }

    fn from_value(value: Value) -> Result<Self> {
        match value {
            Value::String(s) => Ok(s.to_string()),
            other => Err(mismatch::<Self>(&other)),
        }
    }
}

impl MemberValue for Arc<str> {
    fn member_type() -> Type {
        Type::String
    }

    fn into_value(self) -> Value {
        Value::String(self)
    }

    fn from_value(value: Value) -> Result<Self> {
        match value {
            Value::String(s) => Ok(s),
            other => Err(mismatch::<Self>(&other)),
        }
    }
}

impl<T: MemberValue> MemberValue for Option<T> {
    fn member_type() -> Type {
        Type::option(T::member_type())
    }

    fn into_value(self) -> Value {
        self.map_or(Value::Nil, MemberValue::into_value)
    }

    fn from_value(value: Value) -> Result<Self> {
        match value {
            Value::Nil => Ok(None),
            other => T::from_value(other).map(Some),
        }
    }
}

impl<T: MemberValue> MemberValue for Vec<T> {
    fn member_type() -> Type {
        Type::vec(T::member_type())
    }

    fn into_value(self) -> Value {
        Value::Vec(self.into_iter().map(MemberValue::into_value).collect())
    }

    fn from_value(value: Value) -> Result<Self> {
        match value {
            Value::Vec(items) => items.into_iter().map(T::from_value).collect(),
            other => Err(mismatch::<Self>(&other)),
        }
    }
}

impl<T: MemberValue> MemberValue for BTreeMap<String, T> {
    fn member_type() -> Type {
        Type::map(T::member_type())
    }

    fn into_value(self) -> Value {
        Value::Map(
            self.into_iter()
                .map(|(k, v)| (Arc::from(k), v.into_value()))
                .collect(),
        )
    }

    fn from_value(value: Value) -> Result<Self> {
        match value {
            Value::Map(entries) => entries
                .into_iter()
                .map(|(k, v)| Ok((k.to_string(), T::from_value(v)?)))
                .collect(),
            other => Err(mismatch::<Self>(&other)),
        }
    }
}

impl<T: MemberValue, S: std::hash::BuildHasher + Default> MemberValue for HashMap<String, T, S> {
    fn member_type() -> Type {
        Type::map(T::member_type())
    }

    fn into_value(self) -> Value {
        Value::Map(
            self.into_iter()
                .map(|(k, v)| (Arc::from(k), v.into_value()))
                .collect(),
        )
    }

    fn from_value(value: Value) -> Result<Self> {
        match value {
            Value::Map(entries) => entries
                .into_iter()
                .map(|(k, v)| Ok((k.to_string(), T::from_value(v)?)))
                .collect(),
            other => Err(mismatch::<Self>(&other)),
        }
    }
}
