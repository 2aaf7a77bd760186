// SPDX-License-Identifier: MPL-2.0
//! Viewport state management
//!
//! Tracks the page scrollable's bounds and scroll offset, and exposes the
//! content-space rectangle the intersection observer tests against.

use iced::widget::scrollable::AbsoluteOffset;
use iced::{Rectangle, Size};

/// Manages viewport and scroll state for the page scrollable.
#[derive(Debug, Clone)]
pub struct ViewportState {
    /// Current scroll offset
    pub offset: AbsoluteOffset,

    /// Previous scroll offset (for delta tracking)
    pub previous_offset: AbsoluteOffset,

    /// Current viewport bounds
    pub bounds: Option<Rectangle>,
}

impl Default for ViewportState {
    fn default() -> Self {
        Self {
            offset: AbsoluteOffset { x: 0.0, y: 0.0 },
            previous_offset: AbsoluteOffset { x: 0.0, y: 0.0 },
            bounds: None,
        }
    }
}

impl ViewportState {
    /// Updates the viewport state with new bounds and offset.
    pub fn update(&mut self, bounds: Rectangle, offset: AbsoluteOffset) {
        self.previous_offset = self.offset;
        self.offset = offset;
        self.bounds = Some(bounds);
    }

    /// Current vertical scroll offset in pixels from the page top.
    #[must_use]
    pub fn scroll_y(&self) -> f32 {
        self.offset.y
    }

    /// The visible region in content coordinates: `y` is the scroll
    /// offset, the size is the scrollable's bounds. Falls back to
    /// `fallback_size` before the first scroll event arrives.
    #[must_use]
    pub fn content_viewport(&self, fallback_size: Size) -> Rectangle {
        let size = self
            .bounds
            .map_or(fallback_size, |bounds| Size::new(bounds.width, bounds.height));
        Rectangle {
            x: 0.0,
            y: self.offset.y,
            width: size.width,
            height: size.height,
        }
    }
}
