// SPDX-License-Identifier: MPL-2.0
//! Navigation bar module for page-level navigation.
//!
//! The navbar offers one link per section (smooth-scrolled, never jumped)
//! and the language toggle that flips between the two shipped locales.

use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{spacing, typography};
use crate::ui::styles;
use iced::{
    alignment::Vertical,
    widget::{button, Container, Row, Space, Text},
    Element, Length,
};

/// Section link labels, in document order.
pub const NAV_KEYS: [&str; 5] = [
    "nav-overview",
    "nav-applications",
    "nav-statistics",
    "nav-timeline",
    "nav-outlook",
];

/// Contextual data needed to render the navbar.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
}

/// Messages emitted by the navbar.
#[derive(Debug, Clone)]
pub enum Message {
    SectionPressed(usize),
    ToggleLanguage,
}

/// Events propagated to the parent application.
#[derive(Debug, Clone)]
pub enum Event {
    NavigateTo(usize),
    ToggleLanguage,
}

/// Process a navbar message and return the corresponding event.
pub fn update(message: Message) -> Event {
    match message {
        Message::SectionPressed(index) => Event::NavigateTo(index),
        Message::ToggleLanguage => Event::ToggleLanguage,
    }
}

/// Render the navigation bar.
pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let mut row = Row::new()
        .spacing(spacing::XS)
        .align_y(Vertical::Center)
        .push(Text::new(ctx.i18n.tr("app-title")).size(typography::TITLE_MD))
        .push(Space::new().width(spacing::LG));

    for (index, key) in NAV_KEYS.iter().enumerate() {
        row = row.push(
            button(Text::new(ctx.i18n.tr(key)).size(typography::BODY))
                .style(styles::button::nav_link)
                .padding([spacing::XXS, spacing::SM])
                .on_press(Message::SectionPressed(index)),
        );
    }

    row = row.push(Space::new().width(Length::Fill)).push(
        button(Text::new(ctx.i18n.tr("language-toggle-label")).size(typography::BODY))
            .style(styles::button::language_toggle)
            .padding([spacing::XXS, spacing::SM])
            .on_press(Message::ToggleLanguage),
    );

    Container::new(row)
        .style(styles::container::navbar)
        .width(Length::Fill)
        .padding([spacing::SM, spacing::LG])
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::Document;

    #[test]
    fn nav_links_cover_every_section() {
        assert_eq!(NAV_KEYS.len(), Document::sample().sections.len());
    }

    #[test]
    fn update_maps_messages_to_events() {
        assert!(matches!(
            update(Message::SectionPressed(2)),
            Event::NavigateTo(2)
        ));
        assert!(matches!(
            update(Message::ToggleLanguage),
            Event::ToggleLanguage
        ));
    }
}
