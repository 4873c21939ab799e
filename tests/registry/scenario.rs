//! End-to-end scenarios through the public facade

use crate::common::*;
use roster::{Error, Limits};

#[test]
fn insert_three_then_count_and_snapshot() {
    let registry = Registry::new();
    for name in ["A", "B", "C"] {
        registry.insert(Record::new(name)).unwrap();
    }

    assert_eq!(registry.count(), 3);

    let snapshot = registry.snapshot();
    assert_eq!(
        serde_json::to_value(&snapshot).unwrap(),
        serde_json::json!([
            {"id": 0, "name": "A"},
            {"id": 1, "name": "B"},
            {"id": 2, "name": "C"},
        ])
    );
}

#[test]
fn caller_keeps_read_only_handle() {
    let registry = Registry::new();
    let handle = registry.insert(Record::new("kept")).unwrap();

    assert_eq!(handle.id(), Some(RecordId::new(0)));
    assert_eq!(handle.name(), "kept");
    assert_eq!(&*handle, &registry.snapshot()[0]);
}

#[test]
fn contract_violation_does_not_corrupt_later_calls() {
    let registry = Registry::with_limits(Limits::with_small_limits());

    registry.insert(Record::new("ok")).unwrap();
    assert_eq!(registry.insert(Record::new("")), Err(Error::EmptyName));
    assert!(matches!(
        registry.insert(Record::new("far too long for the limit")),
        Err(Error::NameTooLong { .. })
    ));
    let again = registry.insert(Record::new("ok again")).unwrap();

    assert_eq!(again.id(), Some(RecordId::new(1)));
    assert_eq!(registry.count(), 2);
    assert_eq!(registry.snapshot().ids(), vec![RecordId::new(0), RecordId::new(1)]);
}
