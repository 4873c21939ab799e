//! Error types for workload drivers

use std::io;
use thiserror::Error;

/// Result type alias for workload operations
pub type WorkloadResult<T> = std::result::Result<T, WorkloadError>;

/// Errors raised while configuring or running a workload
#[derive(Debug, Error)]
pub enum WorkloadError {
    /// Config file could not be read or written
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Config content is malformed or out of range
    #[error("Invalid config: {0}")]
    InvalidConfig(String),

    /// A record was rejected by the registry
    #[error(transparent)]
    Registry(#[from] roster_core::Error),
}

impl WorkloadError {
    /// Create an invalid-config error
    pub fn invalid_config(msg: impl Into<String>) -> Self {
        WorkloadError::InvalidConfig(msg.into())
    }
}
