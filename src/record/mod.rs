// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! The `Record` entity and its `Processor` implementation.

mod runtime;

pub use runtime::ProcessingRuntime;

use std::fmt;

use async_trait::async_trait;
use tokio::time::Instant;
use tracing::Instrument;

use crate::config::consts::PROCESSING_MESSAGE_PREFIX;
use crate::errors::{ProcessError, ValidationReason};
use crate::observability::messages::processor::{
    AttemptStarted, ProcessingCompleted, ProcessingFailed, ProcessingStarted, ValidationRejected,
};
use crate::observability::messages::StructuredLog;
use crate::traits::{ProgressEvent, Processor};

/// A labelled record with a private counter and a byte buffer.
///
/// `counter` is only ever read, through `doubled_counter`; nothing outside
/// this module can reach it.
#[derive(Debug, Clone)]
pub struct Record {
    pub label: String,
    counter: u64,
    pub buffer: Vec<u8>,
    runtime: ProcessingRuntime,
}

impl Record {
    /// Create a record with the default runtime (tokio timer, stdout progress).
    ///
    /// ```
    /// use record_processor::record::Record;
    /// use record_processor::traits::Processor;
    ///
    /// let record = Record::new("example");
    /// assert_eq!(record.identity(), "example");
    /// assert!(record.buffer.is_empty());
    /// ```
    pub fn new(label: impl Into<String>) -> Self {
        Self::with_runtime(label, ProcessingRuntime::default())
    }

    pub fn with_runtime(label: impl Into<String>, runtime: ProcessingRuntime) -> Self {
        Self {
            label: label.into(),
            counter: 0,
            buffer: Vec::new(),
            runtime,
        }
    }

    pub fn update_label(&mut self, value: impl Into<String>) {
        self.label = value.into();
    }

    pub fn runtime(&self) -> &ProcessingRuntime {
        &self.runtime
    }

    fn doubled_counter(&self) -> u64 {
        self.counter * 2
    }

    fn validate(&self, input: &str) -> Result<(), ValidationReason> {
        if !self.runtime.options.ready {
            return Err(ValidationReason::NotReady);
        }
        if self.runtime.options.max_attempts == 0 {
            return Err(ValidationReason::NoAttempts);
        }
        if input.is_empty() {
            return Err(ValidationReason::EmptyInput);
        }
        Ok(())
    }

    async fn run_attempts(&self, input: &str) -> Result<(), ProcessError> {
        let options = &self.runtime.options;

        if let Err(reason) = self.validate(input) {
            ValidationRejected {
                label: &self.label,
                reason,
            }
            .log();
            return Err(ProcessError::ValidationFailure {
                label: self.label.clone(),
                reason,
            });
        }

        ProcessingStarted {
            label: &self.label,
            input_size: input.len(),
            doubled_counter: self.doubled_counter(),
        }
        .log();

        let start_time = Instant::now();

        for attempt in 1..=options.max_attempts {
            AttemptStarted {
                attempt,
                max_attempts: options.max_attempts,
                delay: options.attempt_delay,
            }
            .log();

            let event = ProgressEvent::Attempt {
                attempt,
                max_attempts: options.max_attempts,
            };
            if let Err(source) = self.runtime.sink().emit(&event) {
                return Err(ProcessError::AttemptFailed {
                    attempt,
                    max_attempts: options.max_attempts,
                    source,
                });
            }

            self.runtime.sleeper().sleep(options.attempt_delay).await;
        }

        let completed = ProgressEvent::Completed {
            message: format!("{}{}", PROCESSING_MESSAGE_PREFIX, input),
        };
        self.runtime
            .sink()
            .emit(&completed)
            .map_err(|source| ProcessError::NotificationFailed { source })?;

        ProcessingCompleted {
            label: &self.label,
            attempts: options.max_attempts,
            duration: start_time.elapsed(),
        }
        .log();

        Ok(())
    }
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Record {{ label: {} }}", self.label)
    }
}

#[async_trait]
impl Processor for Record {
    fn identity(&self) -> String {
        self.label.clone()
    }

    async fn process(&self, input: &str) -> Result<(), ProcessError> {
        let start_msg = ProcessingStarted {
            label: &self.label,
            input_size: input.len(),
            doubled_counter: self.doubled_counter(),
        };
        let span = start_msg.span("record_processing");

        let result = self.run_attempts(input).instrument(span).await;

        if let Err(error) = &result {
            if error.validation_reason().is_none() {
                ProcessingFailed {
                    label: &self.label,
                    error,
                }
                .log();
            }
        }

        result
    }
}
