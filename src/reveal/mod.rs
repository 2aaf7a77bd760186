// SPDX-License-Identifier: MPL-2.0
//! One-shot scroll-reveal coordination.
//!
//! Page elements register once and are observed until they enter the
//! viewport. A positive intersection signal either reveals the element
//! immediately or, if the element declared a stagger delay, schedules the
//! reveal on the shared tick. `Revealed` is terminal: an element leaves
//! observation with its first transition and can never flicker back on
//! re-scroll.

pub mod observer;

pub use observer::{IntersectionObserver, ObserverOptions};

use std::collections::HashMap;
use std::time::{Duration, Instant};

/// Identity of a watchable page element.
///
/// Ids are allocated by the content model when the document is built and
/// stay stable for the lifetime of the process.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ElementId(u32);

impl ElementId {
    #[must_use]
    pub const fn new(raw: u32) -> Self {
        Self(raw)
    }

    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }
}

/// Per-element reveal phase. `Revealed` is terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Phase {
    /// Registered, waiting for an intersection signal.
    Pending,
    /// Signaled with a non-zero delay; fires once `due` has passed.
    Scheduled { due: Instant, seq: u64 },
    Revealed,
}

#[derive(Debug, Clone)]
struct Entry {
    delay: Duration,
    phase: Phase,
}

/// Converts viewport-intersection signals into one-shot, optionally delayed
/// reveal transitions.
///
/// The coordinator owns no clock and no geometry: callers feed it signals
/// through [`on_intersect`](Self::on_intersect) and advance scheduled
/// reveals through [`tick`](Self::tick), both with an explicit `Instant`.
/// This keeps ordering and idempotence testable without simulating real
/// scrolling.
#[derive(Debug, Default)]
pub struct RevealCoordinator {
    entries: HashMap<ElementId, Entry>,
    next_seq: u64,
}

impl RevealCoordinator {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds `id` to the observation set with the given stagger delay.
    ///
    /// Re-registering a known id is a silent no-op; the first
    /// registration's delay wins and the element can never double-fire.
    pub fn register(&mut self, id: ElementId, delay: Duration) {
        self.entries.entry(id).or_insert(Entry {
            delay,
            phase: Phase::Pending,
        });
    }

    /// Signals that `id` is sufficiently visible at `now`.
    ///
    /// A pending element with zero delay reveals in this call (the return
    /// value is `true`); one with a non-zero delay moves to `Scheduled`
    /// and fires from a later [`tick`](Self::tick). Signals for scheduled,
    /// revealed, or unknown ids change nothing — a missing element is
    /// "feature not present", never an error.
    pub fn on_intersect(&mut self, id: ElementId, now: Instant) -> bool {
        let Some(entry) = self.entries.get_mut(&id) else {
            return false;
        };

        if entry.phase != Phase::Pending {
            return false;
        }

        if entry.delay.is_zero() {
            entry.phase = Phase::Revealed;
            true
        } else {
            entry.phase = Phase::Scheduled {
                due: now + entry.delay,
                seq: self.next_seq,
            };
            self.next_seq += 1;
            false
        }
    }

    /// Fires every scheduled element whose due time has passed, in
    /// schedule order. Returns the ids that revealed during this call.
    pub fn tick(&mut self, now: Instant) -> Vec<ElementId> {
        let mut fired: Vec<(u64, ElementId)> = self
            .entries
            .iter()
            .filter_map(|(id, entry)| match entry.phase {
                Phase::Scheduled { due, seq } if due <= now => Some((seq, *id)),
                _ => None,
            })
            .collect();
        fired.sort_unstable_by_key(|(seq, _)| *seq);

        for (_, id) in &fired {
            if let Some(entry) = self.entries.get_mut(id) {
                entry.phase = Phase::Revealed;
            }
        }

        fired.into_iter().map(|(_, id)| id).collect()
    }

    /// Marks every registered element revealed, bypassing observation.
    /// Used when the user asked for reduced motion.
    pub fn reveal_all(&mut self) {
        for entry in self.entries.values_mut() {
            entry.phase = Phase::Revealed;
        }
    }

    /// Whether `id` still wants intersection signals. Scheduled and
    /// revealed elements have left observation.
    #[must_use]
    pub fn is_observing(&self, id: ElementId) -> bool {
        matches!(
            self.entries.get(&id).map(|entry| entry.phase),
            Some(Phase::Pending)
        )
    }

    #[must_use]
    pub fn is_revealed(&self, id: ElementId) -> bool {
        matches!(
            self.entries.get(&id).map(|entry| entry.phase),
            Some(Phase::Revealed)
        )
    }

    /// Whether any element is waiting on its delay timer. Drives the
    /// application's tick subscription gating.
    #[must_use]
    pub fn has_scheduled(&self) -> bool {
        self.entries
            .values()
            .any(|entry| matches!(entry.phase, Phase::Scheduled { .. }))
    }

    /// Number of elements that still want intersection signals.
    #[must_use]
    pub fn observing_len(&self) -> usize {
        self.entries
            .values()
            .filter(|entry| entry.phase == Phase::Pending)
            .count()
    }
}
