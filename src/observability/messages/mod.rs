// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Centralized message types for structured logging.
//!
//! # Organization
//!
//! * `processor` - record processing lifecycle (start, attempts, completion, failure)
//! * `config` - configuration loading
//!
//! # Usage Pattern
//!
//! ```rust
//! use record_processor::observability::messages::processor::ProcessingStarted;
//! use record_processor::observability::messages::StructuredLog;
//!
//! let msg = ProcessingStarted {
//!     label: "example",
//!     input_size: 4,
//!     doubled_counter: 0,
//! };
//!
//! let span = msg.span("record_processing");
//! let _guard = span.enter();
//! msg.log();
//! ```

use std::fmt::Display;

use tracing::Span;

pub mod config;
pub mod processor;

/// A log message that knows its own level and structured fields.
pub trait StructuredLog: Display {
    /// Emit this message at its level with its fields attached.
    fn log(&self);

    /// Build a span carrying this message's fields.
    fn span(&self, name: &str) -> Span;
}
