// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use std::sync::Arc;

use crate::config::ProcessingOptions;
use crate::traits::{ProgressSink, Sleeper, StdoutProgressSink, TokioSleeper};

/// Everything a record needs to run `process` besides its own data.
///
/// The default runtime waits with tokio's timer and prints progress to stdout.
/// Swap the sleeper or sink to run without wall-clock delays.
#[derive(Clone)]
pub struct ProcessingRuntime {
    pub options: ProcessingOptions,
    sleeper: Arc<dyn Sleeper>,
    sink: Arc<dyn ProgressSink>,
}

impl ProcessingRuntime {
    pub fn new(options: ProcessingOptions) -> Self {
        Self {
            options,
            sleeper: Arc::new(TokioSleeper),
            sink: Arc::new(StdoutProgressSink),
        }
    }

    pub fn with_sleeper(mut self, sleeper: Arc<dyn Sleeper>) -> Self {
        self.sleeper = sleeper;
        self
    }

    pub fn with_sink(mut self, sink: Arc<dyn ProgressSink>) -> Self {
        self.sink = sink;
        self
    }

    pub fn sleeper(&self) -> &dyn Sleeper {
        self.sleeper.as_ref()
    }

    pub fn sink(&self) -> &dyn ProgressSink {
        self.sink.as_ref()
    }
}

impl Default for ProcessingRuntime {
    fn default() -> Self {
        Self::new(ProcessingOptions::default())
    }
}

impl std::fmt::Debug for ProcessingRuntime {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ProcessingRuntime")
            .field("options", &self.options)
            .finish_non_exhaustive()
    }
}
