//! End-to-end usage scenarios.

use memberwise_access::{Changes, RecordExt, Value, delta, merge_where, with};

use crate::records::{Config, Point};

#[test]
fn point_delta_and_patch() {
    let a = Point::new(1, 2);
    let b = Point::new(1, 5);

    assert_eq!(delta(&a, &b).unwrap().iter().collect::<Vec<_>>(), vec!["y"]);
    assert_eq!(with(&a, &b, "y").unwrap(), Point::new(1, 5));
    assert_eq!(a, Point::new(1, 2));
}

#[test]
fn config_selective_merge() {
    let mut target = Config::new(5, 1);
    let source = Config::new(9, 1);

    merge_where(&mut target, &source, |m| m.name() == "timeout").unwrap();

    assert_eq!(target.retries, 1);
    assert_eq!(target.timeout, 9);
}

#[test]
fn apply_untyped_settings_map() {
    // Typical string-driven use: stray keys are ignored, known keys applied.
    let settings: Changes = [
        ("timeout", Value::Int(30)),
        ("retries", Value::Int(5)),
        ("verbose", Value::Bool(true)),
    ]
    .into_iter()
    .map(|(k, v)| (k.to_string(), v))
    .collect();

    let defaults = Config::default();
    let applied = defaults.with_changes(Some(&settings)).unwrap().into_owned();

    assert_eq!(applied, Config::new(30, 5));
    assert_eq!(
        defaults.delta(&applied).unwrap().iter().collect::<Vec<_>>(),
        vec!["timeout", "retries"]
    );
}

#[test]
fn copy_only_what_changed() {
    let saved = Config::new(5, 1);
    let mut edited = saved.clone();
    edited.set_member("retries", 4).unwrap();

    let changed: Vec<_> = saved.delta(&edited).unwrap().iter().collect();
    let synced = saved.with_all_members(&edited, &changed).unwrap();
    assert_eq!(synced, edited);
}
