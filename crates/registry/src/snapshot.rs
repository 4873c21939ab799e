//! RegistrySnapshot: point-in-time copy of the record sequence
//!
//! A snapshot is taken by cloning the sequence of `Arc<Record>` under the
//! registry's read lock. Records themselves are never copied and never
//! mutated after insertion, so the copy is O(n) pointer clones and the lock
//! is held only for that long.
//!
//! # Design Notes
//!
//! - **Immutable**: Once created, the snapshot never changes
//! - **Point-in-time**: Inserts that complete after the snapshot are not visible
//! - **Cheap to share**: Cloning a snapshot clones one `Arc`

use std::ops::Index;
use std::slice;
use std::sync::Arc;

use roster_core::RecordId;
use serde::{Serialize, Serializer};

use crate::record::Record;

/// An immutable point-in-time view of a registry
///
/// # Example
///
/// ```ignore
/// let registry = Registry::new();
/// registry.insert(Record::new("A"))?;
///
/// let snapshot = registry.snapshot();
///
/// // Inserts after snapshot creation are not visible
/// registry.insert(Record::new("B"))?;
/// assert_eq!(snapshot.len(), 1);
/// ```
#[derive(Debug, Clone)]
pub struct RegistrySnapshot {
    records: Arc<[Arc<Record>]>,
}

impl RegistrySnapshot {
    /// Wrap records copied out of a registry
    ///
    /// Called by `Registry::snapshot()`; every record must already be assigned.
    pub(crate) fn new(records: Vec<Arc<Record>>) -> Self {
        debug_assert!(records.iter().all(|r| r.is_assigned()));
        Self {
            records: records.into(),
        }
    }

    /// Number of records in the snapshot
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the snapshot holds no records
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Iterate records in insertion order
    pub fn iter(&self) -> Iter<'_> {
        Iter {
            inner: self.records.iter(),
        }
    }

    /// Record at `index` in insertion order
    pub fn get(&self, index: usize) -> Option<&Record> {
        self.records.get(index).map(|r| r.as_ref())
    }

    /// Shared handles to the records, in insertion order
    pub fn as_slice(&self) -> &[Arc<Record>] {
        &self.records
    }

    /// Owned copies of the records
    pub fn records(&self) -> Vec<Record> {
        self.iter().cloned().collect()
    }

    /// Ids in snapshot order
    pub fn ids(&self) -> Vec<RecordId> {
        self.iter().filter_map(Record::id).collect()
    }
}

impl Default for RegistrySnapshot {
    fn default() -> Self {
        Self::new(Vec::new())
    }
}

impl PartialEq for RegistrySnapshot {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.iter().eq(other.iter())
    }
}

impl Eq for RegistrySnapshot {}

impl Index<usize> for RegistrySnapshot {
    type Output = Record;

    fn index(&self, index: usize) -> &Record {
        &self.records[index]
    }
}

impl Serialize for RegistrySnapshot {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(self.iter())
    }
}

/// Iterator over the records of a snapshot
#[derive(Debug, Clone)]
pub struct Iter<'a> {
    inner: slice::Iter<'a, Arc<Record>>,
}

impl<'a> Iterator for Iter<'a> {
    type Item = &'a Record;

    fn next(&mut self) -> Option<&'a Record> {
        self.inner.next().map(|r| r.as_ref())
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl DoubleEndedIterator for Iter<'_> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.inner.next_back().map(|r| r.as_ref())
    }
}

impl ExactSizeIterator for Iter<'_> {}

impl<'a> IntoIterator for &'a RegistrySnapshot {
    type Item = &'a Record;
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Iter<'a> {
        self.iter()
    }
}
