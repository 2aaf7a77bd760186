// SPDX-License-Identifier: MPL-2.0
//! Nominal page layout metrics.
//!
//! The page renders fixed-height rows, so element rectangles can be
//! computed from the document structure alone. The view and the
//! intersection sweep share these constants; if a row height changes
//! here, both stay in agreement.

use super::{Document, SectionBody};
use crate::reveal::ElementId;
use iced::Rectangle;

/// Height of the hero block at the top of the page.
pub const HERO_HEIGHT: f32 = 600.0;

/// Vertical gap between sections.
pub const SECTION_GAP: f32 = 64.0;

/// Height reserved for a section title row.
pub const SECTION_HEADER_HEIGHT: f32 = 90.0;

/// Fixed height of a content card.
pub const CARD_HEIGHT: f32 = 180.0;

/// Vertical gap between sibling cards.
pub const CARD_GAP: f32 = 24.0;

/// Height of the counters row inside the statistics block.
pub const COUNTER_ROW_HEIGHT: f32 = 140.0;

/// Height of one labelled stat bar row.
pub const BAR_ROW_HEIGHT: f32 = 56.0;

/// Horizontal page margin.
pub const PAGE_MARGIN: f32 = 48.0;

/// Bottom padding after the last section.
pub const PAGE_FOOTER: f32 = 120.0;

/// Element rectangles and section anchors in content coordinates.
#[derive(Debug, Clone)]
pub struct PageLayout {
    rects: Vec<(ElementId, Rectangle)>,
    anchors: Vec<f32>,
    content_height: f32,
}

impl PageLayout {
    /// Computes the layout for `document` at the given page width.
    #[must_use]
    pub fn compute(document: &Document, width: f32) -> Self {
        let column_x = PAGE_MARGIN;
        let column_width = (width - 2.0 * PAGE_MARGIN).max(0.0);
        let row = |y: f32, height: f32| Rectangle {
            x: column_x,
            y,
            width: column_width,
            height,
        };

        let mut rects = Vec::new();
        let mut anchors = Vec::new();
        let mut y = HERO_HEIGHT;

        for section in &document.sections {
            y += SECTION_GAP;
            anchors.push(y);
            y += SECTION_HEADER_HEIGHT;

            match &section.body {
                SectionBody::Cards(cards) => {
                    for card in cards {
                        rects.push((card.id, row(y, CARD_HEIGHT)));
                        y += CARD_HEIGHT + CARD_GAP;
                    }
                }
                SectionBody::Stats(stats) => {
                    let block_top = y;
                    y += COUNTER_ROW_HEIGHT;
                    for bar in &stats.bars {
                        rects.push((bar.id, row(y, BAR_ROW_HEIGHT)));
                        y += BAR_ROW_HEIGHT;
                    }
                    rects.push((stats.id, row(block_top, y - block_top)));
                }
            }
        }

        Self {
            rects,
            anchors,
            content_height: y + PAGE_FOOTER,
        }
    }

    /// Rectangles of every watchable element, in document order.
    #[must_use]
    pub fn watch_rects(&self) -> &[(ElementId, Rectangle)] {
        &self.rects
    }

    /// Content-space y of a section's anchor, if the index exists.
    #[must_use]
    pub fn anchor_of(&self, section: usize) -> Option<f32> {
        self.anchors.get(section).copied()
    }

    #[must_use]
    pub fn content_height(&self) -> f32 {
        self.content_height
    }

    /// Largest reachable scroll offset for a viewport of `height`.
    #[must_use]
    pub fn max_scroll(&self, height: f32) -> f32 {
        (self.content_height - height).max(0.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_watchable_gets_a_rect() {
        let document = Document::sample();
        let layout = PageLayout::compute(&document, 800.0);

        for (id, _) in document.watchables() {
            assert!(
                layout.watch_rects().iter().any(|(rect_id, _)| *rect_id == id),
                "missing rect for {id:?}"
            );
        }
    }

    #[test]
    fn rects_are_ordered_top_to_bottom_per_section() {
        let document = Document::sample();
        let layout = PageLayout::compute(&document, 800.0);

        // All rects sit below the hero.
        assert!(layout
            .watch_rects()
            .iter()
            .all(|(_, rect)| rect.y >= HERO_HEIGHT));
    }

    #[test]
    fn anchors_match_section_count_and_increase() {
        let document = Document::sample();
        let layout = PageLayout::compute(&document, 800.0);

        let anchors: Vec<_> = (0..document.sections.len())
            .map(|index| layout.anchor_of(index).expect("anchor exists"))
            .collect();
        assert_eq!(anchors.len(), document.sections.len());
        assert!(anchors.windows(2).all(|pair| pair[0] < pair[1]));
        assert!(layout.anchor_of(document.sections.len()).is_none());
    }

    #[test]
    fn stats_block_rect_spans_its_bars() {
        let document = Document::sample();
        let stats = document.stats().expect("sample has a stats block");
        let layout = PageLayout::compute(&document, 800.0);

        let block = layout
            .watch_rects()
            .iter()
            .find(|(id, _)| *id == stats.id)
            .map(|(_, rect)| *rect)
            .expect("stats rect");

        for bar in &stats.bars {
            let bar_rect = layout
                .watch_rects()
                .iter()
                .find(|(id, _)| *id == bar.id)
                .map(|(_, rect)| *rect)
                .expect("bar rect");
            assert!(bar_rect.y >= block.y);
            assert!(bar_rect.y + bar_rect.height <= block.y + block.height + 0.1);
        }
    }

    #[test]
    fn max_scroll_clamps_at_zero_for_tall_viewports() {
        let document = Document::sample();
        let layout = PageLayout::compute(&document, 800.0);

        assert_eq!(layout.max_scroll(layout.content_height() + 100.0), 0.0);
        assert!(layout.max_scroll(650.0) > 0.0);
    }
}
