// SPDX-License-Identifier: MPL-2.0
//! Count-up animation state for numeric statistics.
//!
//! A counter runs from zero to its target in linear steps once its section
//! reveals. The displayed value floors the interpolation while in flight
//! and lands exactly on the target.

use std::time::{Duration, Instant};

/// Default flight time for a count-up animation.
pub const DEFAULT_COUNT_DURATION: Duration = Duration::from_millis(2000);

/// Tick-driven count-up from 0 to `target`.
#[derive(Debug, Clone)]
pub struct CountUp {
    target: u64,
    duration: Duration,
    started: Option<Instant>,
    value: u64,
}

impl CountUp {
    #[must_use]
    pub fn new(target: u64, duration: Duration) -> Self {
        Self {
            target,
            duration,
            started: None,
            value: 0,
        }
    }

    /// Starts the animation. Starting an already-running or finished
    /// counter is a no-op, so a section revealing twice cannot restart it.
    pub fn start(&mut self, now: Instant) {
        if self.started.is_none() {
            self.started = Some(now);
        }
    }

    /// Advances the displayed value. Returns `true` when it changed.
    pub fn tick(&mut self, now: Instant) -> bool {
        let Some(started) = self.started else {
            return false;
        };

        let next = if self.duration.is_zero() {
            self.target
        } else {
            let progress =
                (now.duration_since(started).as_secs_f64() / self.duration.as_secs_f64()).min(1.0);
            if progress >= 1.0 {
                self.target
            } else {
                (self.target as f64 * progress).floor() as u64
            }
        };

        if next == self.value {
            return false;
        }
        self.value = next;
        true
    }

    /// Snaps straight to the target (reduced-motion path).
    pub fn finish(&mut self) {
        self.started.get_or_insert_with(Instant::now);
        self.value = self.target;
    }

    #[must_use]
    pub fn value(&self) -> u64 {
        self.value
    }

    #[must_use]
    pub fn target(&self) -> u64 {
        self.target
    }

    #[must_use]
    pub fn is_animating(&self) -> bool {
        self.started.is_some() && self.value < self.target
    }
}
