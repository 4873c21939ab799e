//! Registry layer for roster
//!
//! This crate implements the concurrent record store:
//! - Record: a name plus an id assigned exactly once, on insert
//! - Registry: id counter and append-only record sequence behind one `RwLock`
//! - RegistrySnapshot: immutable point-in-time copy used for all traversal
//!
//! # Concurrency
//!
//! Id assignment and append happen in one short write-locked section, so
//! ids are gapless and the sequence order matches id order. Readers never
//! iterate the live sequence: they copy it under a read lock and walk the
//! copy, so producers are not blocked by slow visitors.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod record;
pub mod registry;
pub mod snapshot;

pub use record::Record;
pub use registry::Registry;
pub use snapshot::RegistrySnapshot;
