// SPDX-License-Identifier: MPL-2.0
//! View rendering for the application.
//!
//! The window is a navbar strip pinned above the page scrollable; both
//! render purely from application state.

use super::{App, Message};
use crate::ui::navbar;
use crate::ui::page;
use iced::{widget::Column, Element, Length};

/// Renders the application view.
pub fn view(app: &App) -> Element<'_, Message> {
    let navbar = navbar::view(navbar::ViewContext { i18n: &app.i18n }).map(Message::Navbar);

    let page = page::view(page::ViewContext {
        i18n: &app.i18n,
        document: &app.document,
        coordinator: &app.coordinator,
        counters: &app.counters,
        bars: &app.bars,
        indicator: app.indicator,
        scheme: &app.scheme,
    })
    .map(Message::Page);

    Column::new()
        .push(navbar)
        .push(page)
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}
