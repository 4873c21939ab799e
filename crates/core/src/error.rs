//! Error types for roster
//!
//! This module defines all error types used by the registry.
//! We use `thiserror` for automatic `Display` and `Error` trait implementations.
//!
//! Every variant is a contract violation: the caller handed the registry
//! something it must not accept. Lost ids, duplicate ids and faults during
//! iteration have no variant here because the registry rules them out by
//! construction.

use crate::types::RecordId;
use thiserror::Error;

/// Result type alias for roster operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for the registry
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// Record name is empty or whitespace only
    #[error("Contract violation: record name must not be empty")]
    EmptyName,

    /// Record name exceeds the configured limit
    #[error("Contract violation: record name is {len} bytes, limit is {max}")]
    NameTooLong {
        /// Actual name length in bytes
        len: usize,
        /// Maximum allowed length in bytes
        max: usize,
    },

    /// An id was assigned to a record that already carries one
    #[error("Contract violation: record already has id {existing}")]
    IdAlreadyAssigned {
        /// The id the record already carries
        existing: RecordId,
    },
}

impl Error {
    /// Whether this error is a caller contract violation
    ///
    /// All current variants are. A contract violation never leaves the
    /// registry in a modified state.
    pub fn is_contract_violation(&self) -> bool {
        matches!(
            self,
            Error::EmptyName | Error::NameTooLong { .. } | Error::IdAlreadyAssigned { .. }
        )
    }
}
