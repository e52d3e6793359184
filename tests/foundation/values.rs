//! Integration tests for Value types
//!
//! Tests Value variants, equality, display, conversion, and opaque values.

use std::collections::{BTreeMap, HashMap};
use std::sync::Arc;

use memberwise_foundation::{MemberValue, Type, Value};
use proptest::prelude::*;

// =============================================================================
// Value Construction
// =============================================================================

#[test]
fn value_nil() {
    let v = Value::Nil;
    assert!(v.is_nil());
    assert_eq!(v.value_type(), Type::Nil);
}

#[test]
fn value_from_scalars() {
    assert_eq!(Value::from(true).as_bool(), Some(true));
    assert_eq!(Value::from(7i32).as_int(), Some(7));
    assert_eq!(Value::from(2.5).as_number(), Some(2.5));
    assert_eq!(Value::from("hi").as_str(), Some("hi"));
    assert_eq!(Value::from(String::from("hi")), Value::from("hi"));
}

#[test]
fn value_from_option() {
    assert!(Value::from(None::<i64>).is_nil());
    assert_eq!(Value::from(Some(3i64)), Value::Int(3));
}

#[test]
fn int_reads_as_number() {
    assert_eq!(Value::Int(4).as_number(), Some(4.0));
    assert_eq!(Value::Float(4.0).as_int(), None);
}

// =============================================================================
// Equality
// =============================================================================

#[test]
fn int_and_float_are_distinct_values() {
    assert_ne!(Value::Int(1), Value::Float(1.0));
}

#[test]
fn nan_equals_itself() {
    assert_eq!(Value::Float(f64::NAN), Value::Float(f64::NAN));
}

#[test]
fn collections_compare_structurally() {
    let a = Value::from(vec!["a", "b"]);
    let b = Value::from(vec!["a", "b"]);
    assert_eq!(a, b);
    assert_ne!(a, Value::from(vec!["b", "a"]));
}

#[test]
fn opaque_values_compare_by_allocation() {
    let a = Value::opaque(Arc::new(5u32));
    let b = a.clone();
    let c = Value::opaque(Arc::new(5u32));
    assert_eq!(a, b);
    assert_ne!(a, c);
}

// =============================================================================
// Opaque Values
// =============================================================================

#[test]
fn opaque_downcast() {
    let v = Value::opaque(vec![1u8, 2, 3]);
    assert_eq!(v.downcast_ref::<Vec<u8>>(), Some(&vec![1, 2, 3]));
    assert!(v.downcast_ref::<String>().is_none());
    assert_eq!(v.value_type(), Type::opaque::<Vec<u8>>());
}

#[test]
fn into_opaque_checks_type() {
    let v = Value::opaque(String::from("x"));
    assert_eq!(v.clone().into_opaque::<String>().unwrap(), "x");
    assert!(v.into_opaque::<u32>().unwrap_err().is_type_mismatch());
    assert!(Value::Int(1).into_opaque::<u32>().is_err());
}

// =============================================================================
// Display
// =============================================================================

#[test]
fn value_display() {
    assert_eq!(Value::Nil.to_string(), "nil");
    assert_eq!(Value::from("a b").to_string(), "a b");
    assert_eq!(Value::from(vec![1i64, 2, 3]).to_string(), "[1 2 3]");

    let map: BTreeMap<String, i64> = [("a".to_string(), 1)].into_iter().collect();
    assert_eq!(map.into_value().to_string(), "{a 1}");
}

#[test]
fn value_debug_quotes_strings() {
    assert_eq!(format!("{:?}", Value::from("a")), "\"a\"");
}

// =============================================================================
// MemberValue Conversion
// =============================================================================

#[test]
fn float_members_accept_ints() {
    assert_eq!(f64::from_value(Value::Int(3)).unwrap(), 3.0);
    assert!(i64::from_value(Value::Float(3.0)).is_err());
}

#[test]
fn option_members_accept_nil() {
    assert_eq!(Option::<String>::from_value(Value::Nil).unwrap(), None);
    assert_eq!(
        Option::<String>::from_value(Value::from("x")).unwrap(),
        Some("x".to_string())
    );
    assert!(String::from_value(Value::Nil).is_err());
}

#[test]
fn vec_members_convert_elementwise() {
    let v = Value::from(vec![1i64, 2]);
    assert_eq!(Vec::<u8>::from_value(v).unwrap(), vec![1, 2]);
    assert!(Vec::<u8>::from_value(Value::from(vec!["x"])).is_err());
}

#[test]
fn hash_map_members() {
    let mut m = HashMap::new();
    m.insert("k".to_string(), 2.5);
    let v = m.clone().into_value();
    assert_eq!(HashMap::<String, f64>::from_value(v).unwrap(), m);
}

#[test]
fn unsigned_members_keep_their_full_range() {
    let v = u64::MAX.into_value();
    assert_eq!(v, Value::UInt(u64::MAX));
    assert_eq!(v.value_type(), Type::Int);
    assert_eq!(u64::from_value(v.clone()).unwrap(), u64::MAX);
    assert!(i64::from_value(v).unwrap_err().is_type_mismatch());

    assert_eq!(7u64.into_value(), Value::Int(7));
    assert_eq!(usize::from_value(Value::Int(7)).unwrap(), 7);
}

// =============================================================================
// Property Tests
// =============================================================================

proptest! {
    #[test]
    fn int_conversion_preserves_value(n in any::<i64>()) {
        prop_assert_eq!(i64::from_value(n.into_value()).unwrap(), n);
    }

    #[test]
    fn string_conversion_preserves_value(s in ".*") {
        prop_assert_eq!(String::from_value(s.clone().into_value()).unwrap(), s);
    }

    #[test]
    fn narrow_conversion_is_exact(n in any::<i64>()) {
        let narrowed = i16::from_value(Value::Int(n));
        prop_assert_eq!(narrowed.is_ok(), i16::try_from(n).is_ok());
    }

    #[test]
    fn value_equality_is_reflexive(n in any::<f64>()) {
        let v = Value::Float(n);
        prop_assert_eq!(v.clone(), v);
    }
}
