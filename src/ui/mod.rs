// SPDX-License-Identifier: MPL-2.0
//! UI components and styling for the page.

pub mod design_tokens;
pub mod navbar;
pub mod page;
pub mod state;
pub mod styles;
pub mod theming;
pub mod widgets;
