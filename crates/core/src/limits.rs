//! Validation limits for records
//!
//! These limits are checked by the registry before an insert enters its
//! critical section. Violations are rejected with a contract-violation
//! error and consume no id.

use crate::error::{Error, Result};

/// Validation limits applied on insert
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Limits {
    /// Maximum name length in bytes (default: 1024)
    pub max_name_bytes: usize,
}

impl Default for Limits {
    fn default() -> Self {
        Limits {
            max_name_bytes: 1024,
        }
    }
}

impl Limits {
    /// Create limits with small values for testing
    pub fn with_small_limits() -> Self {
        Limits { max_name_bytes: 16 }
    }

    /// Validate a record name
    ///
    /// Returns `Err(Error::EmptyName)` for empty or whitespace-only names and
    /// `Err(Error::NameTooLong)` when the name exceeds `max_name_bytes`.
    pub fn validate_name(&self, name: &str) -> Result<()> {
        if name.trim().is_empty() {
            return Err(Error::EmptyName);
        }
        if name.len() > self.max_name_bytes {
            return Err(Error::NameTooLong {
                len: name.len(),
                max: self.max_name_bytes,
            });
        }
        Ok(())
    }
}
