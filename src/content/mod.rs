// SPDX-License-Identifier: MPL-2.0
//! Static page content.
//!
//! The document is a fixed sequence of sections whose strings resolve
//! through i18n keys, so a language change re-renders the whole page.
//! Every element that animates on entry carries an [`ElementId`] and a
//! stagger delay; the app registers these with the reveal coordinator at
//! boot.

pub mod layout;

pub use layout::PageLayout;

use crate::reveal::ElementId;
use std::time::Duration;

/// Stagger between sibling timeline entries.
pub const TIMELINE_STAGGER: Duration = Duration::from_millis(150);

/// Stagger between sibling stat bars.
pub const BAR_STAGGER: Duration = Duration::from_millis(200);

/// Fluent message key.
pub type Key = &'static str;

#[derive(Debug, Clone)]
pub struct Document {
    pub hero: Hero,
    pub sections: Vec<Section>,
}

#[derive(Debug, Clone)]
pub struct Hero {
    pub title: Key,
    pub subtitle: Key,
}

#[derive(Debug, Clone)]
pub struct Section {
    pub title: Key,
    pub body: SectionBody,
}

#[derive(Debug, Clone)]
pub enum SectionBody {
    /// A column of reveal-on-entry cards.
    Cards(Vec<Card>),
    /// The statistics block: counters plus staggered bars.
    Stats(StatsBlock),
}

#[derive(Debug, Clone)]
pub struct Card {
    pub id: ElementId,
    pub title: Key,
    pub body: Key,
    pub delay: Duration,
}

#[derive(Debug, Clone)]
pub struct StatsBlock {
    /// Watchable for the block itself; its reveal starts the counters.
    pub id: ElementId,
    pub counters: Vec<CounterSpec>,
    pub bars: Vec<BarSpec>,
}

#[derive(Debug, Clone)]
pub struct CounterSpec {
    pub label: Key,
    pub target: u64,
}

#[derive(Debug, Clone)]
pub struct BarSpec {
    pub id: ElementId,
    pub label: Key,
    /// Fill target as a fraction of the track, 0–1.
    pub target: f32,
    pub delay: Duration,
}

impl Document {
    /// The built-in research-brief document.
    #[must_use]
    pub fn sample() -> Self {
        let mut ids = IdAllocator::default();

        let overview = Section {
            title: "section-overview-title",
            body: SectionBody::Cards(vec![
                ids.card("card-overview-context-title", "card-overview-context-body", 0),
                ids.card("card-overview-method-title", "card-overview-method-body", 0),
            ]),
        };

        let applications = Section {
            title: "section-applications-title",
            body: SectionBody::Cards(vec![
                ids.card("card-app-grid-title", "card-app-grid-body", 0),
                ids.card("card-app-transport-title", "card-app-transport-body", 0),
                ids.card("card-app-industry-title", "card-app-industry-body", 0),
            ]),
        };

        let statistics = Section {
            title: "section-statistics-title",
            body: SectionBody::Stats(StatsBlock {
                id: ids.next(),
                counters: vec![
                    CounterSpec {
                        label: "stat-projects-label",
                        target: 142,
                    },
                    CounterSpec {
                        label: "stat-capacity-label",
                        target: 389,
                    },
                    CounterSpec {
                        label: "stat-countries-label",
                        target: 64,
                    },
                ],
                bars: (0..3)
                    .map(|index| BarSpec {
                        id: ids.next(),
                        label: ["bar-solar-label", "bar-wind-label", "bar-storage-label"][index],
                        target: [0.72, 0.58, 0.31][index],
                        delay: BAR_STAGGER * index as u32,
                    })
                    .collect(),
            }),
        };

        let timeline = Section {
            title: "section-timeline-title",
            body: SectionBody::Cards(
                (0..3)
                    .map(|index| {
                        let (title, body) = [
                            ("timeline-2015-title", "timeline-2015-body"),
                            ("timeline-2020-title", "timeline-2020-body"),
                            ("timeline-2025-title", "timeline-2025-body"),
                        ][index];
                        ids.card_with_delay(title, body, TIMELINE_STAGGER * index as u32)
                    })
                    .collect(),
            ),
        };

        let outlook = Section {
            title: "section-outlook-title",
            body: SectionBody::Cards(vec![
                ids.card("card-outlook-policy-title", "card-outlook-policy-body", 0),
                ids.card("card-outlook-research-title", "card-outlook-research-body", 0),
            ]),
        };

        Self {
            hero: Hero {
                title: "hero-title",
                subtitle: "hero-subtitle",
            },
            sections: vec![overview, applications, statistics, timeline, outlook],
        }
    }

    /// Every watchable element with its stagger delay, in document order.
    pub fn watchables(&self) -> impl Iterator<Item = (ElementId, Duration)> + '_ {
        self.sections.iter().flat_map(|section| {
            let items: Vec<(ElementId, Duration)> = match &section.body {
                SectionBody::Cards(cards) => {
                    cards.iter().map(|card| (card.id, card.delay)).collect()
                }
                SectionBody::Stats(stats) => std::iter::once((stats.id, Duration::ZERO))
                    .chain(stats.bars.iter().map(|bar| (bar.id, bar.delay)))
                    .collect(),
            };
            items
        })
    }

    /// The statistics block, if the document has one.
    #[must_use]
    pub fn stats(&self) -> Option<&StatsBlock> {
        self.sections.iter().find_map(|section| match &section.body {
            SectionBody::Stats(stats) => Some(stats),
            SectionBody::Cards(_) => None,
        })
    }
}

#[derive(Debug, Default)]
struct IdAllocator {
    next: u32,
}

impl IdAllocator {
    fn next(&mut self) -> ElementId {
        let id = ElementId::new(self.next);
        self.next += 1;
        id
    }

    fn card(&mut self, title: Key, body: Key, delay_ms: u64) -> Card {
        self.card_with_delay(title, body, Duration::from_millis(delay_ms))
    }

    fn card_with_delay(&mut self, title: Key, body: Key, delay: Duration) -> Card {
        Card {
            id: self.next(),
            title,
            body,
            delay,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn sample_ids_are_unique() {
        let document = Document::sample();
        let ids: Vec<_> = document.watchables().map(|(id, _)| id).collect();
        let unique: HashSet<_> = ids.iter().copied().collect();
        assert_eq!(ids.len(), unique.len());
    }

    #[test]
    fn bars_carry_staggered_delays() {
        let document = Document::sample();
        let stats = document.stats().expect("sample has a stats block");

        let delays: Vec<_> = stats.bars.iter().map(|bar| bar.delay).collect();
        assert_eq!(
            delays,
            vec![
                Duration::ZERO,
                Duration::from_millis(200),
                Duration::from_millis(400)
            ]
        );
    }

    #[test]
    fn bar_targets_are_fractions() {
        let document = Document::sample();
        let stats = document.stats().expect("sample has a stats block");
        assert!(stats
            .bars
            .iter()
            .all(|bar| (0.0..=1.0).contains(&bar.target)));
    }

    #[test]
    fn watchables_cover_cards_stats_and_bars() {
        let document = Document::sample();
        let card_count: usize = document
            .sections
            .iter()
            .map(|section| match &section.body {
                SectionBody::Cards(cards) => cards.len(),
                SectionBody::Stats(_) => 0,
            })
            .sum();
        let stats = document.stats().expect("sample has a stats block");

        assert_eq!(
            document.watchables().count(),
            card_count + 1 + stats.bars.len()
        );
    }
}
