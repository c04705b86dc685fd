// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Stand-in sleepers and sinks for tests.
//!
//! Only compiled for `cfg(test)`; not available in production builds.

use std::io;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Mutex, PoisonError};
use std::time::Duration;

use async_trait::async_trait;

use crate::traits::{ProgressEvent, ProgressSink, Sleeper};

/// A sleeper that returns immediately
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopSleeper;

#[async_trait]
impl Sleeper for NoopSleeper {
    async fn sleep(&self, _duration: Duration) {}
}

/// One observed step of a processing run
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TimelineEntry {
    Emitted(ProgressEvent),
    Slept(Duration),
}

/// Records emissions and sleeps in the order they happen, without waiting.
///
/// Share one recorder (behind an `Arc`) as both the sleeper and the sink of a
/// record to check how attempts and delays interleave.
#[derive(Debug, Default)]
pub struct TimelineRecorder {
    entries: Mutex<Vec<TimelineEntry>>,
}

impl TimelineRecorder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of everything recorded so far
    pub fn entries(&self) -> Vec<TimelineEntry> {
        self.entries
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Only the emitted events, in order
    pub fn events(&self) -> Vec<ProgressEvent> {
        self.entries()
            .into_iter()
            .filter_map(|entry| match entry {
                TimelineEntry::Emitted(event) => Some(event),
                TimelineEntry::Slept(_) => None,
            })
            .collect()
    }

    /// Only the sleep durations, in order
    pub fn sleeps(&self) -> Vec<Duration> {
        self.entries()
            .into_iter()
            .filter_map(|entry| match entry {
                TimelineEntry::Slept(duration) => Some(duration),
                TimelineEntry::Emitted(_) => None,
            })
            .collect()
    }

    fn push(&self, entry: TimelineEntry) {
        self.entries
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(entry);
    }
}

#[async_trait]
impl Sleeper for TimelineRecorder {
    async fn sleep(&self, duration: Duration) {
        self.push(TimelineEntry::Slept(duration));
    }
}

impl ProgressSink for TimelineRecorder {
    fn emit(&self, event: &ProgressEvent) -> io::Result<()> {
        self.push(TimelineEntry::Emitted(event.clone()));
        Ok(())
    }
}

/// A sink that accepts the first `succeed_count` emissions and fails every one after
#[derive(Debug)]
pub struct FailingProgressSink {
    succeed_count: usize,
    emitted: AtomicUsize,
}

impl FailingProgressSink {
    pub fn new(succeed_count: usize) -> Self {
        Self {
            succeed_count,
            emitted: AtomicUsize::new(0),
        }
    }

    /// Number of emissions attempted so far, successful or not
    pub fn emitted(&self) -> usize {
        self.emitted.load(Ordering::SeqCst)
    }
}

impl ProgressSink for FailingProgressSink {
    fn emit(&self, _event: &ProgressEvent) -> io::Result<()> {
        let previous = self.emitted.fetch_add(1, Ordering::SeqCst);
        if previous < self.succeed_count {
            Ok(())
        } else {
            Err(io::Error::new(
                io::ErrorKind::BrokenPipe,
                "simulated progress sink failure",
            ))
        }
    }
}
