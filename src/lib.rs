//! Roster - concurrent append-only record registry
//!
//! Many producer threads insert records while other threads count and
//! enumerate them. Every accepted record gets a unique id from a gapless
//! sequence starting at 0, and readers never observe a half-inserted record.
//!
//! # Quick Start
//!
//! ```ignore
//! use roster::{Record, Registry};
//! use std::sync::Arc;
//!
//! let registry = Arc::new(Registry::new());
//!
//! let record = registry.insert(Record::new("Alice"))?;
//! assert_eq!(record.id().map(|id| id.as_u64()), Some(0));
//!
//! for record in &registry.snapshot() {
//!     println!("{record}");
//! }
//! ```
//!
//! # Architecture
//!
//! - `roster-core`: ids, limits, errors
//! - `roster-registry`: the registry and its snapshots
//! - `roster-workload`: producer threads, reporting, `roster.toml`

pub use roster_core::{Error, Limits, RecordId, Result};
pub use roster_registry::{Record, Registry, RegistrySnapshot};
pub use roster_workload::{
    spawn_many, CountReport, Producer, ProducerHandle, Reporter, WorkloadConfig, WorkloadError,
    WorkloadResult, CONFIG_FILE_NAME,
};
