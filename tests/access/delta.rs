//! Integration tests for delta
//!
//! Tests member-wise comparison over properties, fields, base members,
//! custom comparisons, and identity.

use std::sync::Arc;

use memberwise_access::{RecordExt, delta};

use crate::records::{Connection, Employee, Named, Point, Rect, Session};

fn names<T: memberwise_access::Record>(a: &T, b: &T) -> Vec<&'static str> {
    delta(a, b).unwrap().into_iter().collect()
}

#[test]
fn equal_records_have_no_delta() {
    assert!(names(&Point::new(1, 2), &Point::new(1, 2)).is_empty());
}

#[test]
fn same_instance_has_no_delta() {
    let p = Point::new(1, 2);
    assert!(p.delta(&p).unwrap().is_empty());
}

#[test]
fn differing_fields_are_reported() {
    assert_eq!(names(&Point::new(1, 2), &Point::new(1, 5)), vec!["y"]);
    assert_eq!(names(&Point::new(0, 2), &Point::new(1, 5)), vec!["x", "y"]);
}

#[test]
fn field_delta_compares_both_records() {
    // Every field difference is visible, in either direction.
    let a = Point::new(3, 4);
    let b = Point::new(4, 4);
    assert_eq!(names(&a, &b), vec!["x"]);
    assert_eq!(names(&b, &a), vec!["x"]);
}

#[test]
fn properties_are_reported_before_fields() {
    let a = Employee {
        salary: 1.0,
        department: "a".into(),
        ..Employee::default()
    };
    let b = Employee {
        salary: 2.0,
        department: "b".into(),
        ..Employee::default()
    };
    assert_eq!(names(&a, &b), vec!["label", "salary", "dept"]);
}

#[test]
fn base_member_differences_are_reported() {
    let a = Employee::default();
    let b = Employee {
        person: Named {
            name: String::new(),
            id: 2,
        },
        ..Employee::default()
    };
    assert_eq!(names(&a, &b), vec!["id"]);
}

#[test]
fn hidden_members_do_not_count() {
    let a = Employee::default();
    let b = Employee {
        scratch: 5,
        ..Employee::default()
    };
    assert!(names(&a, &b).is_empty());
}

#[test]
fn property_only_record_matches_get() {
    let a = Rect::new(1.0, 2.0);
    let b = Rect::new(1.0, 3.0);
    assert_eq!(names(&a, &b), vec!["height"]);
}

#[test]
fn custom_comparison_is_used() {
    let a = Session {
        locale: "EN".into(),
        ..Session::default()
    };
    let b = Session {
        connection: Arc::clone(&a.connection),
        locale: "en".into(),
        ..Session::default()
    };
    assert!(names(&a, &b).is_empty());
}

#[test]
fn identity_comparison_ignores_content() {
    let a = Session::default();
    let b = Session {
        connection: Arc::new(Connection::default()),
        ..Session::default()
    };
    assert_eq!(names(&a, &b), vec!["connection"]);

    let c = a.clone();
    assert!(names(&a, &c).is_empty());
}

#[test]
fn delta_is_restartable_and_reflects_current_values() {
    let a = Point::new(1, 2);
    let b = Point::new(1, 2);

    let d = delta(&a, &b).unwrap();
    assert_eq!(d.iter().count(), 0);
    assert_eq!(d.iter().count(), 0);

    let c = Point::new(9, 9);
    let d = delta(&a, &c).unwrap();
    let mut first = d.iter();
    assert_eq!(first.next(), Some("x"));
    assert_eq!(d.iter().collect::<Vec<_>>(), vec!["x", "y"]);
    assert_eq!(first.next(), Some("y"));
    assert_eq!(first.next(), None);
    assert_eq!(first.next(), None);
}
