// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Message types for configuration loading.

use std::fmt::{Display, Formatter};
use std::path::Path;
use std::time::Duration;

use tracing::Span;

use crate::observability::messages::StructuredLog;

/// A configuration file was loaded and validated.
///
/// # Log Level
/// `info!` - Important operational event
///
/// # Example
/// ```
/// use record_processor::observability::messages::config::ConfigLoaded;
/// use std::path::Path;
/// use std::time::Duration;
///
/// let msg = ConfigLoaded {
///     path: Path::new("processing.yaml"),
///     ready: true,
///     max_attempts: 3,
///     attempt_delay: Duration::from_secs(30),
/// };
///
/// assert_eq!(
///     msg.to_string(),
///     "Loaded config 'processing.yaml': ready=true, max_attempts=3, attempt_delay=30s"
/// );
/// ```
pub struct ConfigLoaded<'a> {
    pub path: &'a Path,
    pub ready: bool,
    pub max_attempts: u32,
    pub attempt_delay: Duration,
}

impl Display for ConfigLoaded<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "Loaded config '{}': ready={}, max_attempts={}, attempt_delay={:?}",
            self.path.display(),
            self.ready,
            self.max_attempts,
            self.attempt_delay
        )
    }
}

impl StructuredLog for ConfigLoaded<'_> {
    fn log(&self) {
        tracing::info!(
            path = %self.path.display(),
            ready = self.ready,
            max_attempts = self.max_attempts,
            attempt_delay_ms = self.attempt_delay.as_millis() as u64,
            "{}", self
        );
    }

    fn span(&self, name: &str) -> Span {
        tracing::info_span!(
            "config_loaded",
            span_name = name,
            path = %self.path.display(),
        )
    }
}
