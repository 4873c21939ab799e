//! Reporter: count reports and paced display of registry contents
//!
//! Display walks a snapshot, so the per-line pacing never holds a
//! registry lock and producers keep inserting while output is written.
//! Records inserted after the snapshot was taken are not shown.

use std::fmt;
use std::io::{self, Write};
use std::sync::Arc;
use std::thread;
use std::time::Duration;

use chrono::{DateTime, SecondsFormat, Utc};
use tracing::debug;

use roster_registry::Registry;

use crate::config::WorkloadConfig;

/// Registry size observed at a point in time
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CountReport {
    /// When the count was taken
    pub at: DateTime<Utc>,
    /// Completed inserts at that instant
    pub count: usize,
}

impl fmt::Display for CountReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} : {} records created",
            self.at.to_rfc3339_opts(SecondsFormat::Millis, true),
            self.count
        )
    }
}

/// Reads a registry and formats what it finds
#[derive(Debug, Clone)]
pub struct Reporter {
    registry: Arc<Registry>,
    display_pacing: Duration,
}

impl Reporter {
    /// Create a reporter with an explicit delay between displayed lines
    pub fn new(registry: Arc<Registry>, display_pacing: Duration) -> Self {
        Self {
            registry,
            display_pacing,
        }
    }

    /// Create a reporter using `display_pacing_ms` from config
    pub fn from_config(registry: Arc<Registry>, config: &WorkloadConfig) -> Self {
        Self::new(registry, config.display_pacing())
    }

    /// Current count, timestamped
    ///
    /// The count may be stale by the time it is printed if producers are
    /// running.
    pub fn count_report(&self) -> CountReport {
        CountReport {
            at: Utc::now(),
            count: self.registry.count(),
        }
    }

    /// Write one line per record, pausing `display_pacing` between lines
    ///
    /// Returns the number of lines written. Stops at the first write error.
    pub fn display<W: Write>(&self, out: &mut W) -> io::Result<usize> {
        let mut written = 0usize;
        self.registry.try_for_each(|record| {
            if written > 0 && !self.display_pacing.is_zero() {
                thread::sleep(self.display_pacing);
            }
            writeln!(out, "{}", record)?;
            written += 1;
            Ok::<(), io::Error>(())
        })?;
        out.flush()?;
        debug!(lines = written, "Displayed registry snapshot");
        Ok(written)
    }
}
