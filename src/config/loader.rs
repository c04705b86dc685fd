// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use crate::config::consts::{DEFAULT_ATTEMPT_DELAY_SECONDS, DEFAULT_MAX_ATTEMPTS};
use crate::errors::ConfigError;
use crate::observability::messages::{config::ConfigLoaded, StructuredLog};
use serde::{Deserialize, Deserializer};
use std::fs;
use std::path::Path;
use std::time::Duration;

/// Top-level configuration for record processing.
///
/// Every field is optional; a missing section or an empty file yields the
/// built-in defaults.
///
/// # Example
/// ```yaml
/// processing:
///   ready: true
///   max_attempts: 3
///   attempt_delay_seconds: 30
/// ```
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub processing: ProcessingOptions,
}

impl Config {
    /// Check that the configuration holds values the processor can run with.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.processing.max_attempts == 0 {
            return Err(ConfigError::Invalid(
                "processing.max_attempts must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}

/// Options controlling `Record::process`.
///
/// # Fields
/// * `ready` - Readiness flag; when false, `process` rejects every input
/// * `max_attempts` - Number of iterations of the attempt loop (defaults to 3)
/// * `attempt_delay` - Wait after each iteration (defaults to 30 seconds),
///   read from `attempt_delay_seconds`
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct ProcessingOptions {
    pub ready: bool,
    pub max_attempts: u32,
    #[serde(rename = "attempt_delay_seconds", deserialize_with = "deserialize_seconds")]
    pub attempt_delay: Duration,
}

impl Default for ProcessingOptions {
    fn default() -> Self {
        Self {
            ready: true,
            max_attempts: DEFAULT_MAX_ATTEMPTS,
            attempt_delay: Duration::from_secs(DEFAULT_ATTEMPT_DELAY_SECONDS),
        }
    }
}

impl ProcessingOptions {
    /// Same options with a different readiness flag.
    pub fn with_ready(mut self, ready: bool) -> Self {
        self.ready = ready;
        self
    }

    /// Same options with a different attempt count.
    pub fn with_max_attempts(mut self, max_attempts: u32) -> Self {
        self.max_attempts = max_attempts;
        self
    }

    /// Same options with a different wait after each attempt.
    pub fn with_attempt_delay(mut self, attempt_delay: Duration) -> Self {
        self.attempt_delay = attempt_delay;
        self
    }
}

fn deserialize_seconds<'de, D>(deserializer: D) -> Result<Duration, D::Error>
where
    D: Deserializer<'de>,
{
    u64::deserialize(deserializer).map(Duration::from_secs)
}

/// Load a config from a YAML file
pub fn load_config<P: AsRef<Path>>(path: P) -> Result<Config, ConfigError> {
    let path = path.as_ref();
    let content = fs::read_to_string(path).map_err(|source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    // serde_yaml rejects an empty document for a struct
    if content.trim().is_empty() {
        return Ok(Config::default());
    }

    let cfg: Config = serde_yaml::from_str(&content)?;
    Ok(cfg)
}

/// Load and validate a config from a YAML file
pub fn load_and_validate_config<P: AsRef<Path>>(path: P) -> Result<Config, ConfigError> {
    let path = path.as_ref();
    let cfg = load_config(path)?;
    cfg.validate()?;

    ConfigLoaded {
        path,
        ready: cfg.processing.ready,
        max_attempts: cfg.processing.max_attempts,
        attempt_delay: cfg.processing.attempt_delay,
    }
    .log();

    Ok(cfg)
}
