//! Pre-bound member accessors.
//!
//! An [`Accessor`] owns the four operations every member supports: read,
//! write, copy from one instance to another, and compare two instances.
//! They are resolved once when a record's table is built.

use std::any::Any;
use std::fmt;

use memberwise_foundation::{Error, ErrorKind, MemberValue, Result, Type, Value};

use crate::descriptor::{MemberDescriptor, MemberKind};

type Getter<T> = Box<dyn Fn(&T) -> Value + Send + Sync>;
type Setter<T> = Box<dyn Fn(&mut T, Value) -> Result<()> + Send + Sync>;
type Copier<T> = Box<dyn Fn(&T, &mut T) + Send + Sync>;
type Comparer<T> = Box<dyn Fn(&T, &T) -> bool + Send + Sync>;

/// How a member's Rust value moves through [`Value`] and how two of them compare.
pub struct ValueOps<V> {
    member_type: Type,
    to_value: fn(&V) -> Value,
    from_value: fn(Value) -> Result<V>,
    eq: fn(&V, &V) -> bool,
}

impl<V: MemberValue + Clone + PartialEq> ValueOps<V> {
    /// Converts through [`MemberValue`] and compares with `PartialEq`.
    #[must_use]
    pub fn standard() -> Self {
        Self::converted(PartialEq::eq)
    }
}

impl<V: MemberValue + Clone> ValueOps<V> {
    /// Converts through [`MemberValue`] and compares with `eq`.
    #[must_use]
    pub fn converted(eq: fn(&V, &V) -> bool) -> Self {
        Self {
            member_type: V::member_type(),
            to_value: |v: &V| v.clone().into_value(),
            from_value: V::from_value,
            eq,
        }
    }
}

impl<V: Any + Send + Sync + Clone + PartialEq> ValueOps<V> {
    /// Carries the value as [`Value::Opaque`] and compares with `PartialEq`.
    #[must_use]
    pub fn opaque() -> Self {
        Self::opaque_with(PartialEq::eq)
    }
}

impl<V: Any + Send + Sync + Clone> ValueOps<V> {
    /// Carries the value as [`Value::Opaque`] and compares with `eq`.
    #[must_use]
    pub fn opaque_with(eq: fn(&V, &V) -> bool) -> Self {
        Self {
            member_type: Type::opaque::<V>(),
            to_value: |v: &V| Value::opaque(v.clone()),
            from_value: Value::into_opaque::<V>,
            eq,
        }
    }
}

/// Converts `value` for a member declared as `declared`.
///
/// A mismatch anywhere inside the value is reported against the member's
/// declared type.
fn convert<V>(declared: &Type, from_value: fn(Value) -> Result<V>, value: Value) -> Result<V> {
    let actual = value.value_type();
    if !declared.accepts(&actual) {
        return Err(Error::type_mismatch(declared.clone(), actual));
    }
    from_value(value).map_err(|e| {
        if matches!(e.kind, ErrorKind::TypeMismatch { .. }) {
            Error::type_mismatch(declared.clone(), actual)
        } else {
            e
        }
    })
}

/// The bound operations for one member of `T`.
pub struct Accessor<T> {
    descriptor: MemberDescriptor,
    get: Getter<T>,
    set: Setter<T>,
    copy: Copier<T>,
    compare: Comparer<T>,
}

impl<T: 'static> Accessor<T> {
    /// Binds a struct field through its slot projections.
    #[must_use]
    pub fn field<V: Clone + 'static>(
        name: &'static str,
        slot: fn(&T) -> &V,
        slot_mut: fn(&mut T) -> &mut V,
        ops: ValueOps<V>,
    ) -> Self {
        let ValueOps {
            member_type,
            to_value,
            from_value,
            eq,
        } = ops;
        let declared = member_type.clone();

        Self {
            descriptor: MemberDescriptor::new(
                name,
                member_type,
                MemberKind::Field,
                std::any::type_name::<T>(),
            ),
            get: Box::new(move |t: &T| to_value(slot(t))),
            set: Box::new(move |t: &mut T, value: Value| {
                *slot_mut(t) = convert(&declared, from_value, value)?;
                Ok(())
            }),
            copy: Box::new(move |source: &T, target: &mut T| {
                *slot_mut(target) = slot(source).clone();
            }),
            compare: Box::new(move |a: &T, b: &T| eq(slot(a), slot(b))),
        }
    }

    /// Binds a property through its getter and setter.
    #[must_use]
    pub fn property<V: 'static>(
        name: &'static str,
        getter: fn(&T) -> V,
        setter: fn(&mut T, V),
        ops: ValueOps<V>,
    ) -> Self {
        let ValueOps {
            member_type,
            to_value,
            from_value,
            eq,
        } = ops;
        let declared = member_type.clone();

        Self {
            descriptor: MemberDescriptor::new(
                name,
                member_type,
                MemberKind::Property,
                std::any::type_name::<T>(),
            ),
            get: Box::new(move |t: &T| to_value(&getter(t))),
            set: Box::new(move |t: &mut T, value: Value| {
                setter(t, convert(&declared, from_value, value)?);
                Ok(())
            }),
            copy: Box::new(move |source: &T, target: &mut T| setter(target, getter(source))),
            compare: Box::new(move |a: &T, b: &T| eq(&getter(a), &getter(b))),
        }
    }

    /// Re-binds this accessor onto a record `U` that embeds `T`.
    #[must_use]
    pub fn project<U: 'static>(
        self,
        outer: fn(&U) -> &T,
        outer_mut: fn(&mut U) -> &mut T,
    ) -> Accessor<U> {
        let Self {
            descriptor,
            get,
            set,
            copy,
            compare,
        } = self;

        Accessor {
            descriptor,
            get: Box::new(move |u: &U| get(outer(u))),
            set: Box::new(move |u: &mut U, value: Value| set(outer_mut(u), value)),
            copy: Box::new(move |source: &U, target: &mut U| {
                copy(outer(source), outer_mut(target));
            }),
            compare: Box::new(move |a: &U, b: &U| compare(outer(a), outer(b))),
        }
    }
}

impl<T> Accessor<T> {
    /// The member this accessor is bound to.
    #[must_use]
    pub const fn descriptor(&self) -> &MemberDescriptor {
        &self.descriptor
    }

    /// The member name.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        self.descriptor.name()
    }

    /// Reads the member.
    #[must_use]
    pub fn get(&self, target: &T) -> Value {
        (self.get)(target)
    }

    /// Writes the member, coercing `value` to the declared type.
    ///
    /// # Errors
    ///
    /// Returns a type mismatch if `value` is not assignable to the member.
    pub fn set(&self, target: &mut T, value: Value) -> Result<()> {
        (self.set)(target, value)
    }

    /// Copies the member from `source` into `target`.
    pub fn copy(&self, source: &T, target: &mut T) {
        (self.copy)(source, target);
    }

    /// Returns true if the member holds equal values in `a` and `b`.
    #[must_use]
    pub fn equals(&self, a: &T, b: &T) -> bool {
        (self.compare)(a, b)
    }
}

impl<T> fmt::Debug for Accessor<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Accessor")
            .field("descriptor", &self.descriptor)
            .finish_non_exhaustive()
    }
}
