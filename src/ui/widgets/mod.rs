// SPDX-License-Identifier: MPL-2.0
//! Custom widgets.

pub mod stat_bar;

pub use stat_bar::StatBar;
