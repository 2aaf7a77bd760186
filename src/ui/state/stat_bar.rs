// SPDX-License-Identifier: MPL-2.0
//! Fill animation state for statistic bars.
//!
//! Each bar animates its fill from zero to a target fraction once its
//! (staggered) reveal fires. The fill eases out and clamps at the target,
//! so it is monotonic in time.

use std::time::{Duration, Instant};

/// Flight time for a bar fill.
pub const FILL_DURATION: Duration = Duration::from_millis(800);

/// Tick-driven bar fill from 0 to a target fraction.
#[derive(Debug, Clone)]
pub struct BarFill {
    target: f32,
    duration: Duration,
    started: Option<Instant>,
    fraction: f32,
}

impl BarFill {
    /// Creates a fill toward `target`, clamped into 0–1.
    #[must_use]
    pub fn new(target: f32, duration: Duration) -> Self {
        Self {
            target: target.clamp(0.0, 1.0),
            duration,
            started: None,
            fraction: 0.0,
        }
    }

    /// Starts the animation; restarting is a no-op.
    pub fn start(&mut self, now: Instant) {
        if self.started.is_none() {
            self.started = Some(now);
        }
    }

    /// Advances the fill. Returns `true` when the fraction changed.
    pub fn tick(&mut self, now: Instant) -> bool {
        let Some(started) = self.started else {
            return false;
        };

        let progress = if self.duration.is_zero() {
            1.0
        } else {
            (now.duration_since(started).as_secs_f32() / self.duration.as_secs_f32()).min(1.0)
        };
        let next = self.target * ease_out_cubic(progress);

        if (next - self.fraction).abs() < f32::EPSILON {
            return false;
        }
        self.fraction = next;
        true
    }

    /// Snaps straight to the target (reduced-motion path).
    pub fn finish(&mut self) {
        self.started.get_or_insert_with(Instant::now);
        self.fraction = self.target;
    }

    /// Current fill fraction, 0–1.
    #[must_use]
    pub fn fraction(&self) -> f32 {
        self.fraction
    }

    #[must_use]
    pub fn target(&self) -> f32 {
        self.target
    }

    #[must_use]
    pub fn is_animating(&self) -> bool {
        self.started.is_some() && self.fraction < self.target
    }
}

fn ease_out_cubic(t: f32) -> f32 {
    let inverse = 1.0 - t.clamp(0.0, 1.0);
    1.0 - inverse * inverse * inverse
}
