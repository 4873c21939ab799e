//! Core types for Roster
//!
//! This crate defines the foundational types used throughout the system:
//! - RecordId: Sequential identifier handed out by a registry
//! - Limits: Validation limits applied to records at insert time
//! - Error: Error type hierarchy

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod error;
pub mod limits;
pub mod types;

pub use error::{Error, Result};
pub use limits::Limits;
pub use types::RecordId;
