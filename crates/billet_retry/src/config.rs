//! TOML-backed retry configuration.
//!
//! Configuration loads with a precedence chain: bundled defaults
//! (include_str! from billet.toml), then ~/.config/billet/billet.toml, then
//! ./billet.toml. Later sources override earlier ones; user files are
//! optional.

use crate::RetryPolicy;
use billet_error::{BilletError, BilletResult, ConfigError};
use config::{Config, File, FileFormat};
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::{debug, instrument};

/// Retry tunables as they appear in the `[retry]` table.
///
/// # Example
///
/// ```toml
/// [retry]
/// max_attempts = 3
/// backoff_step_secs = 5
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
pub struct RetryConfig {
    /// Maximum provider invocations per generation call
    pub max_attempts: u32,
    /// Linear backoff step in seconds
    pub backoff_step_secs: u64,
}

impl Default for RetryConfig {
    fn default() -> Self {
        Self {
            max_attempts: 3,
            backoff_step_secs: 5,
        }
    }
}

impl RetryConfig {
    /// Build the policy this configuration describes.
    pub fn policy(&self) -> RetryPolicy {
        RetryPolicy::new(self.max_attempts, Duration::from_secs(self.backoff_step_secs))
    }
}

/// Top-level billet configuration.
///
/// # Example
///
/// ```no_run
/// use billet_retry::BilletConfig;
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let config = BilletConfig::load()?;
/// let policy = config.retry.policy();
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize, Default)]
pub struct BilletConfig {
    /// Retry tunables
    #[serde(default)]
    pub retry: RetryConfig,
}

impl BilletConfig {
    /// Load configuration from a specific file path.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<std::path::Path>) -> BilletResult<Self> {
        debug!("Loading configuration from file");

        Config::builder()
            .add_source(File::from(path.as_ref()))
            .build()
            .map_err(|e| {
                BilletError::from(ConfigError::new(format!(
                    "Failed to read configuration from {}: {}",
                    path.as_ref().display(),
                    e
                )))
            })?
            .try_deserialize()
            .map_err(|e| {
                BilletError::from(ConfigError::new(format!(
                    "Failed to parse configuration: {}",
                    e
                )))
            })
    }

    /// Load configuration with precedence: user override > bundled default.
    ///
    /// # Errors
    ///
    /// Returns an error if a source cannot be read or the merged result
    /// fails to deserialize.
    #[instrument]
    pub fn load() -> BilletResult<Self> {
        debug!("Loading configuration: current dir > home dir > bundled defaults");

        const DEFAULT_CONFIG: &str = include_str!("../billet.toml");

        let mut builder =
            Config::builder().add_source(File::from_str(DEFAULT_CONFIG, FileFormat::Toml));

        if let Some(home) = dirs::home_dir() {
            let home_config = home.join(".config/billet/billet.toml");
            builder = builder.add_source(File::from(home_config).required(false));
        }

        builder = builder.add_source(File::with_name("billet").required(false));

        builder
            .build()
            .map_err(|e| {
                BilletError::from(ConfigError::new(format!(
                    "Failed to build configuration: {}",
                    e
                )))
            })?
            .try_deserialize()
            .map_err(|e| {
                BilletError::from(ConfigError::new(format!(
                    "Failed to parse configuration: {}",
                    e
                )))
            })
    }
}
