//! Snapshot Consistency Tests
//!
//! A snapshot taken during concurrent inserts has a length between the
//! inserts completed before it started and those completed before it
//! returned, contains only assigned ids, and is a prefix of the final
//! sequence.

use crate::common::*;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::{Arc, Barrier};
use std::thread;

#[test]
fn snapshot_bounded_by_completed_inserts() {
    const PRODUCERS: usize = 8;
    const PER_PRODUCER: usize = 1_000;

    let registry = Arc::new(Registry::new());
    let completed = Arc::new(AtomicUsize::new(0));
    let done = Arc::new(AtomicBool::new(false));
    let barrier = Arc::new(Barrier::new(PRODUCERS + 1));

    let producers: Vec<_> = (0..PRODUCERS)
        .map(|_| {
            let registry = Arc::clone(&registry);
            let completed = Arc::clone(&completed);
            let barrier = Arc::clone(&barrier);
            thread::spawn(move || {
                barrier.wait();
                for _ in 0..PER_PRODUCER {
                    registry.insert(Record::new("p")).unwrap();
                    completed.fetch_add(1, Ordering::SeqCst);
                }
            })
        })
        .collect();

    let reader = {
        let registry = Arc::clone(&registry);
        let completed = Arc::clone(&completed);
        let done = Arc::clone(&done);
        let barrier = Arc::clone(&barrier);
        thread::spawn(move || {
            barrier.wait();
            let mut snapshots = Vec::new();
            while !done.load(Ordering::SeqCst) {
                let before = completed.load(Ordering::SeqCst);
                let snapshot = registry.snapshot();
                let after = completed.load(Ordering::SeqCst);

                // Inserts bump `completed` after returning, so the upper
                // bound allows for inserts that landed but are not counted yet
                assert!(snapshot.len() >= before, "{} < {}", snapshot.len(), before);
                assert!(
                    snapshot.len() <= after + PRODUCERS,
                    "{} > {} + {}",
                    snapshot.len(),
                    after,
                    PRODUCERS
                );
                assert!(snapshot.iter().all(Record::is_assigned));
                snapshots.push(snapshot);
            }
            snapshots
        })
    };

    for p in producers {
        p.join().unwrap();
    }
    done.store(true, Ordering::SeqCst);
    let snapshots = reader.join().unwrap();

    let last = registry.snapshot();
    assert_eq!(last.len(), PRODUCERS * PER_PRODUCER);

    // Every snapshot is a prefix of the final sequence
    for snapshot in &snapshots {
        assert_eq!(snapshot.ids()[..], last.ids()[..snapshot.len()]);
    }
}

#[test]
fn snapshot_twice_without_insert_is_identical() {
    let registry = Arc::new(Registry::new());
    insert_concurrently(&registry, 4, 400);

    let first = registry.snapshot();
    let second = registry.snapshot();
    assert_eq!(first.len(), second.len());
    assert_eq!(first, second);
    assert_eq!(first.records(), second.records());
}

#[test]
fn snapshot_never_sees_later_inserts() {
    let registry = Arc::new(Registry::new());
    insert_concurrently(&registry, 2, 100);

    let snapshot = registry.snapshot();
    insert_concurrently(&registry, 2, 100);

    assert_eq!(snapshot.len(), 100);
    assert!(snapshot.ids().iter().all(|id| id.as_u64() < 100));
    assert_eq!(registry.count(), 200);
}
