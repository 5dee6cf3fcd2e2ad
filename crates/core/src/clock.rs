// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Clock abstraction for testable time handling
//!
//! Events are stamped with wall-clock seconds since the Unix epoch, so the
//! clock reports `i64` seconds rather than a monotonic `Instant`.

use std::sync::{Arc, Mutex};

/// A clock that provides the current wall-clock time
pub trait Clock: Clone + Send + Sync {
    /// Seconds since the Unix epoch
    fn now_secs(&self) -> i64;
}

/// Real system clock
#[derive(Clone, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now_secs(&self) -> i64 {
        chrono::Utc::now().timestamp()
    }
}

/// Fake clock for testing with controllable time
#[derive(Clone)]
pub struct FakeClock {
    current: Arc<Mutex<i64>>,
}

impl FakeClock {
    /// 2023-11-14 22:13:20 UTC
    pub const DEFAULT_START: i64 = 1_700_000_000;

    pub fn new() -> Self {
        Self::at(Self::DEFAULT_START)
    }

    /// Create a clock frozen at the given epoch seconds
    pub fn at(secs: i64) -> Self {
        Self {
            current: Arc::new(Mutex::new(secs)),
        }
    }

    /// Advance the clock by the given number of seconds
    pub fn advance(&self, secs: i64) {
        let mut current = self.current.lock().unwrap_or_else(|e| e.into_inner());
        *current += secs;
    }

    /// Set the clock to a specific time
    pub fn set(&self, secs: i64) {
        let mut current = self.current.lock().unwrap_or_else(|e| e.into_inner());
        *current = secs;
    }
}

impl Default for FakeClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for FakeClock {
    fn now_secs(&self) -> i64 {
        *self.current.lock().unwrap_or_else(|e| e.into_inner())
    }
}

#[cfg(test)]
#[path = "clock_tests.rs"]
mod tests;
