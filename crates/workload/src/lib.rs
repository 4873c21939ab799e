//! Workload drivers for roster
//!
//! Collaborators that sit outside the registry and call into it:
//! - Producer: paced insert loop on its own thread
//! - Reporter: count reports and paced display of a snapshot
//! - WorkloadConfig: `roster.toml` settings for both
//!
//! Pacing sleeps and output happen here, never inside a registry lock.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod config;
pub mod error;
pub mod producer;
pub mod reporter;

pub use config::{WorkloadConfig, CONFIG_FILE_NAME};
pub use error::{WorkloadError, WorkloadResult};
pub use producer::{spawn_many, Producer, ProducerHandle};
pub use reporter::{CountReport, Reporter};
