// Copyright 2025 eraflo
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Lightweight CPU timing primitives.

use std::time::{Duration, Instant};

/// A simple stopwatch started on creation.
#[derive(Debug, Clone, Copy)]
pub struct Stopwatch {
    start_time: Instant,
}

impl Stopwatch {
    /// Creates a new, running Stopwatch.
    #[inline]
    pub fn new() -> Self {
        Self {
            start_time: Instant::now(),
        }
    }

    /// Returns the elapsed time since the stopwatch was started.
    #[inline]
    pub fn elapsed(&self) -> Duration {
        self.start_time.elapsed()
    }

    /// Returns the elapsed time in fractional milliseconds.
    #[inline]
    pub fn elapsed_ms_f32(&self) -> f32 {
        self.elapsed().as_secs_f32() * 1000.0
    }
}

impl Default for Stopwatch {
    fn default() -> Self {
        Self::new()
    }
}

/// Schedules fixed-interval ticks against a monotonic clock.
///
/// The clock never sleeps itself: the event loop asks for the next
/// [`deadline`](Self::deadline), waits until then, and calls
/// [`poll`](Self::poll) to learn how many ticks became due.
#[derive(Debug, Clone)]
pub struct TickClock {
    interval: Duration,
    next_deadline: Instant,
}

impl TickClock {
    /// Upper bound on the ticks reported by a single `poll`.
    ///
    /// When the loop stalls for longer than this many intervals, the clock
    /// resynchronises to `now` instead of replaying every missed tick.
    pub const MAX_CATCH_UP: u32 = 4;

    /// Smallest interval the clock accepts.
    pub const MIN_INTERVAL: Duration = Duration::from_millis(1);

    /// Creates a clock whose first tick is due one `interval` after `now`.
    pub fn new(interval: Duration, now: Instant) -> Self {
        let interval = interval.max(Self::MIN_INTERVAL);
        Self {
            interval,
            next_deadline: now + interval,
        }
    }

    /// Returns the tick interval.
    #[inline]
    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// Returns the instant the next tick becomes due.
    #[inline]
    pub fn deadline(&self) -> Instant {
        self.next_deadline
    }

    /// Returns how many ticks are due at `now` and advances the deadline past them.
    pub fn poll(&mut self, now: Instant) -> u32 {
        if now < self.next_deadline {
            return 0;
        }

        let late = now - self.next_deadline;
        let due = 1 + late.as_nanos() / self.interval.as_nanos();

        if due > u128::from(Self::MAX_CATCH_UP) {
            log::debug!("TickClock: {due} ticks overdue, resynchronising.");
            self.next_deadline = now + self.interval;
            return Self::MAX_CATCH_UP;
        }

        let due = due as u32;
        self.next_deadline += self.interval * due;
        due
    }

    /// Changes the interval. The next tick is rescheduled one new interval after `now`.
    pub fn set_interval(&mut self, interval: Duration, now: Instant) {
        self.interval = interval.max(Self::MIN_INTERVAL);
        self.next_deadline = now + self.interval;
    }

    /// Restarts the schedule so the next tick is one interval after `now`.
    pub fn reset(&mut self, now: Instant) {
        self.next_deadline = now + self.interval;
    }
}
