// SPDX-License-Identifier: MPL-2.0
//! UI state management modules
//!
//! This module contains tick-driven animation state separated from the
//! main App struct, following the principle of separation of concerns.

pub mod counter;
pub mod indicator;
pub mod scroll;
pub mod stat_bar;
pub mod viewport;

// Re-export commonly used types for convenience
pub use counter::CountUp;
pub use indicator::IndicatorState;
pub use scroll::SmoothScroll;
pub use stat_bar::BarFill;
pub use viewport::ViewportState;
