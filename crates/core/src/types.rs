//! Identifier types
//!
//! A `RecordId` is handed out by exactly one registry, starting at 0 and
//! increasing by one per accepted insert. An unassigned record carries
//! `Option::<RecordId>::None` rather than a sentinel value.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Sequential identifier of a record within one registry
#[derive(
    Debug, Default, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct RecordId(u64);

impl RecordId {
    /// The first id a registry hands out
    pub const FIRST: RecordId = RecordId(0);

    /// Wrap a raw id
    pub const fn new(id: u64) -> Self {
        RecordId(id)
    }

    /// Raw id value
    pub const fn as_u64(&self) -> u64 {
        self.0
    }

    /// The id following this one
    pub fn next(&self) -> RecordId {
        RecordId(self.0 + 1)
    }
}

impl From<u64> for RecordId {
    fn from(id: u64) -> Self {
        RecordId(id)
    }
}

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
