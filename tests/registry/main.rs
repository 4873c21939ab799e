//! Registry Integration Tests
//!
//! Concurrency properties of the registry: id uniqueness and gaplessness,
//! count and snapshot linearizability, and traversal under heavy insert load.

#[path = "../common/mod.rs"]
mod common;

mod scenario;
mod snapshot_consistency;
mod workload;
