//! Workload configuration via `roster.toml`
//!
//! A missing file means defaults. `write_default_if_missing` drops a
//! commented template that can be edited and reloaded.

use std::path::Path;
use std::time::Duration;

use roster_core::Limits;
use serde::{Deserialize, Serialize};

use crate::error::{WorkloadError, WorkloadResult};

/// Config file name.
pub const CONFIG_FILE_NAME: &str = "roster.toml";

/// Workload configuration loaded from `roster.toml`.
///
/// # Example
///
/// ```toml
/// record_name = "Test record"
/// max_pacing_ms = 500
/// display_pacing_ms = 500
/// producers = 1
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkloadConfig {
    /// Name given to every record a producer creates.
    #[serde(default = "default_record_name")]
    pub record_name: String,
    /// Upper bound (exclusive) of the random delay before each insert.
    #[serde(default = "default_max_pacing_ms")]
    pub max_pacing_ms: u64,
    /// Delay between lines when displaying records.
    #[serde(default = "default_display_pacing_ms")]
    pub display_pacing_ms: u64,
    /// Number of producer threads.
    #[serde(default = "default_producers")]
    pub producers: usize,
}

fn default_record_name() -> String {
    "Test record".to_string()
}

fn default_max_pacing_ms() -> u64 {
    500
}

fn default_display_pacing_ms() -> u64 {
    500
}

fn default_producers() -> usize {
    1
}

impl Default for WorkloadConfig {
    fn default() -> Self {
        Self {
            record_name: default_record_name(),
            max_pacing_ms: default_max_pacing_ms(),
            display_pacing_ms: default_display_pacing_ms(),
            producers: default_producers(),
        }
    }
}

impl WorkloadConfig {
    /// Random-delay bound as a `Duration`.
    pub fn max_pacing(&self) -> Duration {
        Duration::from_millis(self.max_pacing_ms)
    }

    /// Display delay as a `Duration`.
    pub fn display_pacing(&self) -> Duration {
        Duration::from_millis(self.display_pacing_ms)
    }

    /// Check values that serde cannot.
    ///
    /// # Errors
    ///
    /// Returns an error if `producers` is zero or `record_name` would be
    /// rejected by a registry with default limits.
    pub fn validate(&self) -> WorkloadResult<()> {
        if self.producers == 0 {
            return Err(WorkloadError::invalid_config(
                "producers must be at least 1",
            ));
        }
        Limits::default()
            .validate_name(&self.record_name)
            .map_err(|e| WorkloadError::invalid_config(format!("record_name: {}", e)))
    }

    /// Returns the default config file content with comments.
    pub fn default_toml() -> &'static str {
        r#"# Roster workload configuration
#
# Name given to every generated record
record_name = "Test record"

# Each producer sleeps a random 0..max_pacing_ms before every insert
max_pacing_ms = 500

# Delay between records when displaying the registry
display_pacing_ms = 500

# Number of producer threads
producers = 1
"#
    }

    /// Parse and validate config from TOML text.
    pub fn from_toml_str(content: &str) -> WorkloadResult<Self> {
        let config: WorkloadConfig = toml::from_str(content)
            .map_err(|e| WorkloadError::invalid_config(format!("parse error: {}", e)))?;
        config.validate()?;
        Ok(config)
    }

    /// Read and parse config from a file path.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, parsed, or validated.
    pub fn from_file(path: &Path) -> WorkloadResult<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml_str(&content).map_err(|e| match e {
            WorkloadError::InvalidConfig(msg) => {
                WorkloadError::invalid_config(format!("{}: {}", path.display(), msg))
            }
            other => other,
        })
    }

    /// Write the default config file if it does not already exist.
    pub fn write_default_if_missing(path: &Path) -> WorkloadResult<()> {
        if !path.exists() {
            std::fs::write(path, Self::default_toml())?;
        }
        Ok(())
    }

    /// Serialize this config to TOML and write it to the given path.
    pub fn write_to_file(&self, path: &Path) -> WorkloadResult<()> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| WorkloadError::invalid_config(format!("serialize error: {}", e)))?;
        std::fs::write(path, content)?;
        Ok(())
    }
}
