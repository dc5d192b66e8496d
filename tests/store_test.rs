//! Integration tests for the record store query core

use ludoteca::catalog::{Record, RecordStore};

fn nineties_shelf() -> RecordStore {
    RecordStore::new(vec![
        Record::new("Chrono Trigger", 1995),
        Record::new("Doom", 1993),
        Record::new("Doom II", 1994),
    ])
}

#[test]
fn test_find_by_metric_worked_example() {
    let store = nineties_shelf();
    assert_eq!(
        store.find_by_metric(1994),
        vec![Record::new("Doom II", 1994)]
    );
}

#[test]
fn test_find_older_than_worked_example() {
    let store = nineties_shelf();
    assert_eq!(store.find_older_than(1994), vec![Record::new("Doom", 1993)]);
}

#[test]
fn test_find_newer_than_worked_example() {
    let store = nineties_shelf();
    assert_eq!(
        store.find_newer_than(1993),
        vec![
            Record::new("Chrono Trigger", 1995),
            Record::new("Doom II", 1994),
        ]
    );
}

#[test]
fn test_find_by_name_worked_example() {
    let store = nineties_shelf();
    assert_eq!(store.find_by_name("Doom"), vec![Record::new("Doom", 1993)]);
}

#[test]
fn test_empty_store_all_queries_total() {
    let store = RecordStore::new(Vec::new());
    assert!(store.find_by_metric(0).is_empty());
    assert!(store.find_by_name("").is_empty());
    assert!(store.find_older_than(i64::MAX).is_empty());
    assert!(store.find_newer_than(i64::MIN).is_empty());
}

#[test]
fn test_threshold_partition_on_fixed_data() {
    let store = nineties_shelf();
    for threshold in [1992, 1993, 1994, 1995, 1996] {
        let older = store.find_older_than(threshold);
        let equal = store.find_by_metric(threshold);
        let newer = store.find_newer_than(threshold);
        assert_eq!(
            older.len() + equal.len() + newer.len(),
            store.len(),
            "buckets must partition the shelf at threshold {threshold}"
        );
    }
}

#[test]
fn test_queries_are_idempotent() {
    let store = nineties_shelf();
    assert_eq!(store.find_newer_than(1993), store.find_newer_than(1993));
    assert_eq!(store.find_by_name("Doom"), store.find_by_name("Doom"));
}

#[test]
fn test_extreme_arguments_match_nothing() {
    let store = nineties_shelf();
    assert!(store.find_by_metric(i64::MIN).is_empty());
    assert!(store.find_newer_than(i64::MAX).is_empty());
    // Every metric is above i64::MIN
    assert_eq!(store.find_newer_than(i64::MIN).len(), store.len());
}
