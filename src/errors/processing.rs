// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Errors returned by `Processor::process`.

use std::fmt;
use std::io;

use thiserror::Error;

/// Why a record declined to run its attempt loop
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationReason {
    /// The readiness flag was false
    NotReady,
    /// The input was an empty string
    EmptyInput,
    /// The attempt count was configured as zero
    NoAttempts,
}

impl fmt::Display for ValidationReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidationReason::NotReady => write!(f, "processor is not ready"),
            ValidationReason::EmptyInput => write!(f, "input is empty"),
            ValidationReason::NoAttempts => write!(f, "max_attempts must be at least 1"),
        }
    }
}

/// Errors that can occur while processing an input
#[derive(Debug, Error)]
pub enum ProcessError {
    /// Validation rejected the input before any attempt ran
    #[error("validation failed for '{label}': {reason}")]
    ValidationFailure {
        label: String,
        reason: ValidationReason,
    },

    /// A progress notification could not be delivered during an attempt
    #[error("attempt {attempt} of {max_attempts} failed: {source}")]
    AttemptFailed {
        attempt: u32,
        max_attempts: u32,
        #[source]
        source: io::Error,
    },

    /// The final status notification could not be delivered
    #[error("failed to deliver completion notification: {source}")]
    NotificationFailed {
        #[source]
        source: io::Error,
    },
}

impl ProcessError {
    /// The validation reason, if this is a validation failure.
    pub fn validation_reason(&self) -> Option<ValidationReason> {
        match self {
            ProcessError::ValidationFailure { reason, .. } => Some(*reason),
            _ => None,
        }
    }
}
