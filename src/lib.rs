// SPDX-License-Identifier: MPL-2.0
//! `iced_reveal` is a scroll-animated infographic page built with the Iced
//! GUI framework.
//!
//! Sections reveal once as they enter the viewport, statistics count up
//! and fill in with staggered delays, and the page demonstrates
//! internationalization with Fluent, user preference management, and
//! modular UI design.

pub mod app;
pub mod config;
pub mod content;
pub mod error;
pub mod i18n;
pub mod reveal;
pub mod ui;
