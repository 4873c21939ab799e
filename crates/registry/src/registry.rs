//! Registry: concurrent append-only record store
//!
//! This module implements the registry using:
//! - `Vec<Arc<Record>>` for the insertion-ordered sequence
//! - a `RecordId` counter stored next to the sequence
//! - one `parking_lot::RwLock` guarding both
//!
//! # Design Notes
//!
//! - **One lock for counter and sequence**: an id is never handed out without
//!   its record being appended in the same critical section, so ids are
//!   gapless, unique, and match sequence order
//! - **Validation before the write lock**: rejected inserts never touch shared
//!   state and never consume an id
//! - **Copy-before-iterate**: traversal walks a `RegistrySnapshot`, never the
//!   live sequence; visitors run with no lock held
//!
//! ## Insert Sequence
//!
//! ```text
//! 1. validate name against limits      (no lock)
//! 2. reject records that already carry an id (no lock)
//! 3. acquire write lock
//! 4. assign next_id, push, bump next_id
//! 5. release write lock
//! ```

use std::fmt;
use std::sync::Arc;

use parking_lot::RwLock;
use tracing::{trace, warn};

use roster_core::{Error, Limits, RecordId, Result};

use crate::record::Record;
use crate::snapshot::RegistrySnapshot;

/// State shared by all callers; only ever touched under `Registry::inner`
#[derive(Debug, Default)]
struct Inner {
    /// Id the next accepted insert receives; always equals `records.len()`
    next_id: RecordId,
    /// Accepted records in insertion order
    records: Vec<Arc<Record>>,
}

/// Concurrency-safe store of records plus the id generator
///
/// Share it between threads with `Arc<Registry>`. All methods take `&self`.
///
/// # Example
///
/// ```ignore
/// let registry = Arc::new(Registry::new());
///
/// let record = registry.insert(Record::new("A"))?;
/// assert_eq!(record.id(), Some(RecordId::new(0)));
///
/// registry.for_each(|r| println!("{r}"));
/// ```
pub struct Registry {
    inner: RwLock<Inner>,
    limits: Limits,
}

impl Registry {
    /// Create an empty registry with default limits
    pub fn new() -> Self {
        Self::with_limits(Limits::default())
    }

    /// Create an empty registry with custom validation limits
    pub fn with_limits(limits: Limits) -> Self {
        Self {
            inner: RwLock::new(Inner::default()),
            limits,
        }
    }

    /// Create an empty registry with room for `capacity` records
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            inner: RwLock::new(Inner {
                next_id: RecordId::FIRST,
                records: Vec::with_capacity(capacity),
            }),
            limits: Limits::default(),
        }
    }

    /// Limits enforced on insert
    pub fn limits(&self) -> &Limits {
        &self.limits
    }

    /// Insert a record, assigning it the next sequential id
    ///
    /// Under any number of concurrent callers, the ids handed out are exactly
    /// `k..k+n` with no gaps and no duplicates. The record is appended in the
    /// same critical section, so it is either fully visible to readers with its
    /// id set, or not visible at all.
    ///
    /// Returns the caller's shared, read-only handle to the inserted record.
    /// Callers that only want fire-and-forget semantics can ignore it.
    ///
    /// # Errors
    ///
    /// - `Error::EmptyName` / `Error::NameTooLong` if the name violates limits
    /// - `Error::IdAlreadyAssigned` if the record was already inserted somewhere
    ///
    /// A rejected insert leaves the registry unchanged.
    pub fn insert(&self, mut record: Record) -> Result<Arc<Record>> {
        if let Err(e) = self.check_insertable(&record) {
            warn!(name = record.name(), error = %e, "Rejected insert");
            return Err(e);
        }

        let record = {
            let mut inner = self.inner.write();
            let id = inner.next_id;
            record.assign_id(id)?;
            let record = Arc::new(record);
            inner.records.push(Arc::clone(&record));
            inner.next_id = id.next();
            record
        };

        trace!(id = %record.id().unwrap_or_default(), name = record.name(), "Inserted record");
        Ok(record)
    }

    fn check_insertable(&self, record: &Record) -> Result<()> {
        self.limits.validate_name(record.name())?;
        if let Some(existing) = record.id() {
            return Err(Error::IdAlreadyAssigned { existing });
        }
        Ok(())
    }

    /// Number of inserts completed at the moment of the call
    ///
    /// The value may already be stale when the caller looks at it if other
    /// threads are inserting; it is never a value no history could produce.
    pub fn count(&self) -> usize {
        self.inner.read().records.len()
    }

    /// Whether no record has been inserted yet
    pub fn is_empty(&self) -> bool {
        self.count() == 0
    }

    /// Id the next accepted insert will receive
    ///
    /// Always equal to `count()` observed at the same instant.
    pub fn next_id(&self) -> RecordId {
        self.inner.read().next_id
    }

    /// Take a point-in-time copy of the record sequence
    ///
    /// The read lock is held only while the `Arc` handles are cloned.
    /// Inserts that complete after this returns are not visible in the
    /// snapshot; every insert that completed before it was called is.
    pub fn snapshot(&self) -> RegistrySnapshot {
        let records = self.inner.read().records.clone();
        RegistrySnapshot::new(records)
    }

    /// Visit every record of a fresh snapshot in insertion order
    ///
    /// The visitor runs with no lock held, so it may be slow, perform I/O,
    /// or call back into the registry (including `insert`) without blocking
    /// producers or deadlocking.
    pub fn for_each<F>(&self, mut visitor: F)
    where
        F: FnMut(&Record),
    {
        for record in &self.snapshot() {
            visitor(record);
        }
    }

    /// Like `for_each`, but stops at the first error returned by the visitor
    pub fn try_for_each<E, F>(&self, mut visitor: F) -> std::result::Result<(), E>
    where
        F: FnMut(&Record) -> std::result::Result<(), E>,
    {
        for record in &self.snapshot() {
            visitor(record)?;
        }
        Ok(())
    }
}

impl Default for Registry {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Registry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Registry")
            .field("count", &self.count())
            .field("limits", &self.limits)
            .finish()
    }
}
