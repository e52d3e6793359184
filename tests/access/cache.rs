//! Integration tests for the accessor cache
//!
//! Tests table contents, ordering, exclusion rules, and concurrent builds.

use std::thread;

use memberwise_access::{
    AccessorTable, MemberKind, Type, accessors, descriptors, is_cached,
};

use crate::records::{Employee, NotARecord, Point, Rect, Session, Shadowing};

fn names<T: memberwise_access::Record>() -> Vec<&'static str> {
    descriptors::<T>()
        .unwrap()
        .iter()
        .map(|d| d.name())
        .collect()
}

// =============================================================================
// Table Contents
// =============================================================================

#[test]
fn public_fields_in_declaration_order() {
    assert_eq!(names::<Point>(), vec!["x", "y"]);
}

#[test]
fn properties_come_first_then_own_fields_then_base_fields() {
    assert_eq!(
        names::<Employee>(),
        vec!["label", "salary", "tags", "manager", "dept", "name", "id"]
    );
}

#[test]
fn read_only_properties_are_excluded() {
    assert_eq!(names::<Rect>(), vec!["width", "height"]);
    assert!(accessors::<Rect>().unwrap().find("area").is_none());
}

#[test]
fn own_members_shadow_base_members() {
    let table = accessors::<Shadowing>().unwrap();
    assert_eq!(names::<Shadowing>(), vec!["id", "name"]);
    assert_eq!(table.find("id").unwrap().descriptor().declared_type(), &Type::String);
}

#[test]
fn descriptors_carry_kind_type_and_declaring_record() {
    let all = descriptors::<Employee>().unwrap();

    let label = &all[0];
    assert_eq!(label.kind(), MemberKind::Property);
    assert_eq!(label.declared_type(), &Type::String);

    let tags = all.iter().find(|d| d.name() == "tags").unwrap();
    assert_eq!(tags.declared_type(), &Type::vec(Type::String));
    assert!(tags.declaring_record().ends_with("Employee"));

    let name = all.iter().find(|d| d.name() == "name").unwrap();
    assert!(name.is_field());
    assert!(name.declaring_record().ends_with("Named"));

    let manager = all.iter().find(|d| d.name() == "manager").unwrap();
    assert!(manager.declared_type().is_nullable());
}

#[test]
fn opaque_members_declare_their_rust_type() {
    let table = accessors::<Session>().unwrap();
    let connection = table.find("connection").unwrap();
    assert!(matches!(
        connection.descriptor().declared_type(),
        Type::Opaque { .. }
    ));
}

// =============================================================================
// Caching
// =============================================================================

#[test]
fn repeated_requests_share_one_table() {
    let a = accessors::<Point>().unwrap();
    let b = accessors::<Point>().unwrap();
    assert!(std::ptr::eq(a, b));
    assert!(is_cached::<Point>());
}

#[test]
fn uncached_builds_match_the_cached_table() {
    let fresh = AccessorTable::<Employee>::build().unwrap();
    let cached = accessors::<Employee>().unwrap();
    assert!(fresh.descriptors().eq(cached.descriptors()));
}

#[test]
fn concurrent_first_use_yields_equal_tables() {
    let workers: Vec<_> = (0..8)
        .map(|_| {
            thread::spawn(|| {
                let table = accessors::<Shadowing>().unwrap();
                (
                    std::ptr::from_ref(table) as usize,
                    table.descriptors().cloned().collect::<Vec<_>>(),
                )
            })
        })
        .collect();

    let results: Vec<_> = workers.into_iter().map(|w| w.join().unwrap()).collect();
    assert!(results.windows(2).all(|w| w[0] == w[1]));
}

#[test]
fn unsupported_shapes_are_errors_and_not_cached() {
    let err = accessors::<NotARecord>().unwrap_err();
    assert!(err.is_unsupported_shape());
    assert!(format!("{err}").contains("NotARecord"));
    assert!(!is_cached::<NotARecord>());
}
