// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Message types for record processing events.
//!
//! This module contains message types for logging events related to:
//! * Processing lifecycle (start, completion, failure)
//! * Individual attempts of the bounded attempt loop
//! * Validation rejections

use std::fmt::{Display, Formatter};
use std::time::Duration;

use tracing::Span;

use crate::errors::ValidationReason;
use crate::observability::messages::StructuredLog;

/// Processing of an input started.
///
/// # Log Level
/// `info!` - Important operational event
///
/// # Example
/// ```
/// use record_processor::observability::messages::processor::ProcessingStarted;
///
/// let msg = ProcessingStarted {
///     label: "example",
///     input_size: 4,
///     doubled_counter: 0,
/// };
///
/// assert_eq!(msg.to_string(), "Record 'example' processing started: input_size=4 bytes");
/// ```
pub struct ProcessingStarted<'a> {
    pub label: &'a str,
    pub input_size: usize,
    pub doubled_counter: u64,
}

impl Display for ProcessingStarted<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "Record '{}' processing started: input_size={} bytes",
            self.label, self.input_size
        )
    }
}

impl StructuredLog for ProcessingStarted<'_> {
    fn log(&self) {
        tracing::info!(
            label = self.label,
            input_size = self.input_size,
            doubled_counter = self.doubled_counter,
            "{}", self
        );
    }

    fn span(&self, name: &str) -> Span {
        tracing::info_span!(
            "record_processing",
            span_name = name,
            label = self.label,
            input_size = self.input_size,
        )
    }
}

/// One attempt of the attempt loop is about to run.
///
/// # Log Level
/// `debug!` - Per-iteration detail
///
/// # Example
/// ```
/// use record_processor::observability::messages::processor::AttemptStarted;
/// use std::time::Duration;
///
/// let msg = AttemptStarted {
///     attempt: 1,
///     max_attempts: 3,
///     delay: Duration::from_secs(30),
/// };
///
/// tracing::debug!("{}", msg);
/// ```
pub struct AttemptStarted {
    pub attempt: u32,
    pub max_attempts: u32,
    pub delay: Duration,
}

impl Display for AttemptStarted {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "Attempt {} of {} started, waiting {:?} afterwards",
            self.attempt, self.max_attempts, self.delay
        )
    }
}

impl StructuredLog for AttemptStarted {
    fn log(&self) {
        tracing::debug!(
            attempt = self.attempt,
            max_attempts = self.max_attempts,
            delay_ms = self.delay.as_millis() as u64,
            "{}", self
        );
    }

    fn span(&self, name: &str) -> Span {
        tracing::debug_span!(
            "attempt",
            span_name = name,
            attempt = self.attempt,
            max_attempts = self.max_attempts,
        )
    }
}

/// Processing finished all attempts and delivered the final notification.
///
/// # Log Level
/// `info!` - Important operational event
pub struct ProcessingCompleted<'a> {
    pub label: &'a str,
    pub attempts: u32,
    pub duration: Duration,
}

impl Display for ProcessingCompleted<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "Record '{}' processing completed: attempts={}, duration={:?}",
            self.label, self.attempts, self.duration
        )
    }
}

impl StructuredLog for ProcessingCompleted<'_> {
    fn log(&self) {
        tracing::info!(
            label = self.label,
            attempts = self.attempts,
            duration_ms = self.duration.as_millis() as u64,
            "{}", self
        );
    }

    fn span(&self, name: &str) -> Span {
        tracing::info_span!(
            "record_processing_completed",
            span_name = name,
            label = self.label,
            attempts = self.attempts,
            duration = ?self.duration,
        )
    }
}

/// Validation declined the input, no attempt ran.
///
/// # Log Level
/// `warn!` - Rejected request, caller receives an error
///
/// # Example
/// ```
/// use record_processor::errors::ValidationReason;
/// use record_processor::observability::messages::processor::ValidationRejected;
///
/// let msg = ValidationRejected {
///     label: "example",
///     reason: ValidationReason::EmptyInput,
/// };
///
/// assert_eq!(msg.to_string(), "Record 'example' rejected input: input is empty");
/// ```
pub struct ValidationRejected<'a> {
    pub label: &'a str,
    pub reason: ValidationReason,
}

impl Display for ValidationRejected<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(f, "Record '{}' rejected input: {}", self.label, self.reason)
    }
}

impl StructuredLog for ValidationRejected<'_> {
    fn log(&self) {
        tracing::warn!(label = self.label, reason = %self.reason, "{}", self);
    }

    fn span(&self, name: &str) -> Span {
        tracing::warn_span!(
            "validation_rejected",
            span_name = name,
            label = self.label,
            reason = %self.reason,
        )
    }
}

/// Processing failed after validation passed.
///
/// # Log Level
/// `error!` - Failure requiring attention
///
/// # Example
/// ```
/// use record_processor::observability::messages::processor::ProcessingFailed;
///
/// let error = std::io::Error::new(std::io::ErrorKind::BrokenPipe, "stdout closed");
/// let msg = ProcessingFailed {
///     label: "example",
///     error: &error,
/// };
///
/// tracing::error!("{}", msg);
/// ```
pub struct ProcessingFailed<'a> {
    pub label: &'a str,
    pub error: &'a dyn std::error::Error,
}

impl Display for ProcessingFailed<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(f, "Record '{}' processing failed: {}", self.label, self.error)
    }
}

impl StructuredLog for ProcessingFailed<'_> {
    fn log(&self) {
        tracing::error!(label = self.label, error = %self.error, "{}", self);
    }

    fn span(&self, name: &str) -> Span {
        tracing::error_span!(
            "record_processing_failed",
            span_name = name,
            label = self.label,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn attempt_started_mentions_position() {
        let msg = AttemptStarted {
            attempt: 2,
            max_attempts: 3,
            delay: Duration::from_secs(30),
        };

        assert_eq!(msg.to_string(), "Attempt 2 of 3 started, waiting 30s afterwards");
    }

    #[test]
    fn completed_reports_attempt_count() {
        let msg = ProcessingCompleted {
            label: "example",
            attempts: 3,
            duration: Duration::from_millis(5),
        };

        assert!(msg.to_string().starts_with("Record 'example' processing completed: attempts=3"));
    }
}
