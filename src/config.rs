//! Library configuration
//!
//! Defaults for identifier generation and deferred callbacks. Embedding
//! applications can deserialize this from any serde format.

use crate::error::{Result, UtilsError};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Upper bound for generated identifier bodies
pub const MAX_ID_LENGTH: usize = 32;

/// Configuration shared by the identifier and timer helpers
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UtilsConfig {
    /// Prefix prepended to every generated identifier
    #[serde(default = "default_id_prefix")]
    pub id_prefix: String,

    /// Number of random base-36 characters after the prefix
    #[serde(default = "default_id_length")]
    pub id_length: usize,

    /// Delay used by `wait_with_config`
    #[serde(with = "humantime_serde", default = "default_delay")]
    pub default_delay: Duration,
}

impl Default for UtilsConfig {
    fn default() -> Self {
        Self {
            id_prefix: default_id_prefix(),
            id_length: default_id_length(),
            default_delay: default_delay(),
        }
    }
}

impl UtilsConfig {
    /// Set the identifier prefix
    pub fn with_id_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.id_prefix = prefix.into();
        self
    }

    /// Set the identifier body length
    pub fn with_id_length(mut self, length: usize) -> Self {
        self.id_length = length;
        self
    }

    /// Set the default deferred-callback delay
    pub fn with_default_delay(mut self, delay: Duration) -> Self {
        self.default_delay = delay;
        self
    }

    /// Reject identifier lengths that are empty or unreasonably long
    pub fn validate(&self) -> Result<()> {
        if self.id_length == 0 {
            return Err(UtilsError::Config(
                "id_length must be greater than zero".to_string(),
            ));
        }
        if self.id_length > MAX_ID_LENGTH {
            return Err(UtilsError::Config(format!(
                "id_length {} exceeds maximum of {}",
                self.id_length, MAX_ID_LENGTH
            )));
        }
        Ok(())
    }
}

fn default_id_prefix() -> String {
    "_".to_string()
}

fn default_id_length() -> usize {
    9
}

fn default_delay() -> Duration {
    Duration::from_millis(1)
}
