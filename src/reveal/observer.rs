// SPDX-License-Identifier: MPL-2.0
//! Viewport-intersection geometry.
//!
//! The page scrolls on a single axis, so intersection is computed on
//! vertical extents only: an element counts as intersecting once the
//! visible fraction of its height crosses the configured threshold, with
//! the viewport's lower edge pulled up by a margin so reveals fire a
//! little before the element truly enters the frame.

use iced::Rectangle;

/// Knobs for the intersection test.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ObserverOptions {
    /// Fraction of the element's height (0–1) that must be visible.
    pub threshold: f32,
    /// Pixels subtracted from the viewport's lower edge before testing.
    pub bottom_margin: f32,
}

impl Default for ObserverOptions {
    fn default() -> Self {
        Self {
            threshold: DEFAULT_THRESHOLD,
            bottom_margin: DEFAULT_BOTTOM_MARGIN,
        }
    }
}

/// 10% of the element must be visible before a reveal fires.
pub const DEFAULT_THRESHOLD: f32 = 0.1;

/// Reveals fire ~50px before the element's true viewport entry.
pub const DEFAULT_BOTTOM_MARGIN: f32 = 50.0;

/// Pure intersection test between element rectangles (in content
/// coordinates) and the current viewport rectangle.
#[derive(Debug, Clone, Copy, Default)]
pub struct IntersectionObserver {
    options: ObserverOptions,
}

impl IntersectionObserver {
    #[must_use]
    pub fn new(options: ObserverOptions) -> Self {
        Self { options }
    }

    #[must_use]
    pub fn options(&self) -> ObserverOptions {
        self.options
    }

    /// Whether `element` is sufficiently visible inside `viewport`.
    ///
    /// Both rectangles live in content coordinates: the viewport's `y` is
    /// the scrollable's absolute vertical offset. Zero-height elements
    /// count as intersecting while they sit inside the adjusted viewport.
    #[must_use]
    pub fn is_intersecting(&self, element: Rectangle, viewport: Rectangle) -> bool {
        let top = viewport.y;
        let bottom = viewport.y + (viewport.height - self.options.bottom_margin).max(0.0);

        if element.height <= 0.0 {
            return element.y >= top && element.y <= bottom;
        }

        let visible_top = element.y.max(top);
        let visible_bottom = (element.y + element.height).min(bottom);
        let visible = (visible_bottom - visible_top).max(0.0);

        if visible <= 0.0 {
            return false;
        }

        visible / element.height >= self.options.threshold
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use iced::{Point, Size};

    fn rect(y: f32, height: f32) -> Rectangle {
        Rectangle::new(Point::new(0.0, y), Size::new(800.0, height))
    }

    fn observer() -> IntersectionObserver {
        IntersectionObserver::new(ObserverOptions::default())
    }

    #[test]
    fn element_below_viewport_does_not_intersect() {
        let viewport = rect(0.0, 650.0);
        assert!(!observer().is_intersecting(rect(1000.0, 200.0), viewport));
    }

    #[test]
    fn element_crossing_threshold_intersects() {
        let viewport = rect(0.0, 650.0);
        // Adjusted bottom edge: 600. Element top at 580 shows 20 of 200px
        // (10%), exactly the threshold.
        assert!(observer().is_intersecting(rect(580.0, 200.0), viewport));
        // One pixel lower stays under the threshold.
        assert!(!observer().is_intersecting(rect(590.0, 200.0), viewport));
    }

    #[test]
    fn bottom_margin_delays_entry_at_the_lower_edge() {
        let no_margin = IntersectionObserver::new(ObserverOptions {
            threshold: DEFAULT_THRESHOLD,
            bottom_margin: 0.0,
        });
        let viewport = rect(0.0, 650.0);
        let element = rect(620.0, 200.0);

        assert!(no_margin.is_intersecting(element, viewport));
        assert!(!observer().is_intersecting(element, viewport));
    }

    #[test]
    fn scrolling_brings_elements_into_intersection() {
        let element = rect(1000.0, 200.0);

        assert!(!observer().is_intersecting(element, rect(0.0, 650.0)));
        // Scrolled down 500px: element top sits 100px above the adjusted
        // bottom edge, so half the threshold requirement is well met.
        assert!(observer().is_intersecting(element, rect(500.0, 650.0)));
    }

    #[test]
    fn element_above_viewport_does_not_intersect() {
        let viewport = rect(2000.0, 650.0);
        assert!(!observer().is_intersecting(rect(100.0, 200.0), viewport));
    }

    #[test]
    fn fully_contained_element_intersects() {
        let viewport = rect(0.0, 650.0);
        assert!(observer().is_intersecting(rect(100.0, 200.0), viewport));
    }

    #[test]
    fn zero_height_element_uses_containment() {
        let viewport = rect(0.0, 650.0);
        assert!(observer().is_intersecting(rect(300.0, 0.0), viewport));
        assert!(!observer().is_intersecting(rect(640.0, 0.0), viewport));
    }
}
