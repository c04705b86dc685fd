// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Observability module for structured logging and tracing.
//!
//! Diagnostic and operational events are described by message structs under
//! [`messages`]. Each one implements `Display` for the human-readable line and
//! [`messages::StructuredLog`] to emit itself with structured fields at its
//! own level, so call sites never carry format strings.
//!
//! Progress notifications meant for the user (`Attempt 1 of 3`, the final
//! status line) are not logs; they go through
//! [`ProgressSink`](crate::traits::ProgressSink).
//!
//! # Usage
//!
//! ```rust
//! use record_processor::observability::messages::processor::ProcessingCompleted;
//! use record_processor::observability::messages::StructuredLog;
//! use std::time::Duration;
//!
//! let msg = ProcessingCompleted {
//!     label: "example",
//!     attempts: 3,
//!     duration: Duration::from_millis(90),
//! };
//!
//! msg.log();
//! ```

pub mod messages;

use tracing_subscriber::EnvFilter;

/// Default filter used when `RUST_LOG` is not set
pub const DEFAULT_LOG_FILTER: &str = "info";

/// Install the global `tracing` subscriber.
///
/// Logs go to stderr so they never interleave with the line-oriented progress
/// output on stdout. Calling this more than once is harmless; only the first
/// call installs a subscriber.
pub fn init_logging() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn init_logging_is_idempotent() {
        init_logging();
        init_logging();
        tracing::info!("logging initialized twice without panicking");
    }
}
