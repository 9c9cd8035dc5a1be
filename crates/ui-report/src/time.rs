// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Time abstraction for deterministic artifact names.
//!
//! A run reads the clock exactly once through [`RunTimestamp::capture`] and
//! threads that value through every filename and the report metadata, so all
//! artifacts of one run share a timestamp. Tests swap in [`FakeClock`] to
//! pin it.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Duration;

use chrono::{DateTime, SecondsFormat, Timelike, Utc};

/// Clock trait for time abstraction
pub trait Clock: Send + Sync {
    /// Get current time as microseconds since epoch
    fn now_micros(&self) -> u64;
}

/// Real clock using system time
#[derive(Clone, Debug, Default)]
pub struct SystemClock;

impl SystemClock {
    /// Create a new system clock
    pub fn new() -> Self {
        Self
    }
}

impl Clock for SystemClock {
    fn now_micros(&self) -> u64 {
        Utc::now().timestamp_micros().max(0) as u64
    }
}

/// Fake clock for testing with controllable time
#[derive(Clone, Debug)]
pub struct FakeClock {
    current_micros: Arc<AtomicU64>,
}

impl FakeClock {
    /// Create a new fake clock starting at a given time
    pub fn new(start_micros: u64) -> Self {
        Self {
            current_micros: Arc::new(AtomicU64::new(start_micros)),
        }
    }

    /// Create a fake clock at a UTC instant
    pub fn at(instant: DateTime<Utc>) -> Self {
        Self::new(instant.timestamp_micros().max(0) as u64)
    }

    /// Advance time by a duration
    pub fn advance(&self, duration: Duration) {
        self.current_micros
            .fetch_add(duration.as_micros() as u64, Ordering::SeqCst);
    }
}

impl Clock for FakeClock {
    fn now_micros(&self) -> u64 {
        self.current_micros.load(Ordering::SeqCst)
    }
}

/// The single instant a report run is stamped with.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RunTimestamp {
    at: DateTime<Utc>,
}

impl RunTimestamp {
    /// Read the clock once.
    pub fn capture(clock: &dyn Clock) -> Self {
        let micros = i64::try_from(clock.now_micros()).unwrap_or(i64::MAX);
        Self {
            at: DateTime::from_timestamp_micros(micros).unwrap_or_default(),
        }
    }

    pub fn from_datetime(at: DateTime<Utc>) -> Self {
        Self { at }
    }

    pub fn datetime(&self) -> DateTime<Utc> {
        self.at
    }

    /// Compact stamp used in artifact filenames, e.g. `20261016T083005Z`.
    pub fn file_stamp(&self) -> String {
        self.at.format("%Y%m%dT%H%M%SZ").to_string()
    }

    /// ISO-8601 form for report metadata, e.g.
    /// `2026-10-16T08:30:05.250000+00:00`.
    ///
    /// The fraction is omitted on a whole second.
    pub fn iso8601(&self) -> String {
        let format = if self.at.nanosecond() / 1_000 == 0 {
            SecondsFormat::Secs
        } else {
            SecondsFormat::Micros
        };
        self.at.to_rfc3339_opts(format, false)
    }
}

#[cfg(test)]
#[path = "time_tests.rs"]
mod tests;
