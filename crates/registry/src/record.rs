//! Record: a named entry whose id is assigned by the registry
//!
//! Records are built by callers with no id. The registry assigns the id
//! exactly once while inserting; afterwards the record is only reachable
//! through `Arc<Record>`, so nothing can mutate it again.

use std::fmt;

use roster_core::{Error, RecordId, Result};
use serde::Serialize;

/// A single registered entity
///
/// Serializes as `{"id":0,"name":"A"}`. An unassigned id serializes as
/// `null`. There is intentionally no `Deserialize`: ids only come from a
/// registry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Record {
    id: Option<RecordId>,
    name: String,
}

impl Record {
    /// Create a record that has not been inserted yet
    ///
    /// The name is validated on insert, not here, so that rejection is
    /// reported by the registry that enforces the limits.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: None,
            name: name.into(),
        }
    }

    /// Assigned id, or `None` before insertion
    pub fn id(&self) -> Option<RecordId> {
        self.id
    }

    /// Record name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Whether a registry has assigned an id to this record
    pub fn is_assigned(&self) -> bool {
        self.id.is_some()
    }

    /// Assign the id
    ///
    /// Only the registry calls this. A second call fails and leaves the
    /// existing id in place.
    pub(crate) fn assign_id(&mut self, id: RecordId) -> Result<()> {
        if let Some(existing) = self.id {
            return Err(Error::IdAlreadyAssigned { existing });
        }
        self.id = Some(id);
        Ok(())
    }
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.id {
            Some(id) => write!(f, "Record [id={}, name={}]", id, self.name),
            None => write!(f, "Record [id=unassigned, name={}]", self.name),
        }
    }
}
