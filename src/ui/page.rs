// SPDX-License-Identifier: MPL-2.0
//! The scrollable document view.
//!
//! Rendering mirrors the nominal metrics in [`crate::content::layout`]
//! row for row: fixed-height hero, section gaps, headers, cards, counter
//! row, and bar rows. The intersection sweep trusts those metrics, so the
//! view must not invent heights of its own.
//!
//! Reveal styling is a pure function of the coordinator's `revealed`
//! flag: hidden cards render fully transparent and shifted down inside
//! their fixed-height slot; revealed cards get the card surface. Calling
//! it twice for the same state yields the same element tree.

use crate::content::layout::{
    BAR_ROW_HEIGHT, CARD_GAP, CARD_HEIGHT, COUNTER_ROW_HEIGHT, HERO_HEIGHT, PAGE_FOOTER,
    PAGE_MARGIN, SECTION_GAP, SECTION_HEADER_HEIGHT,
};
use crate::content::{Card, Document, Section, SectionBody, StatsBlock};
use crate::i18n::fluent::I18n;
use crate::reveal::RevealCoordinator;
use crate::ui::design_tokens::{spacing, typography};
use crate::ui::state::{BarFill, CountUp, IndicatorState};
use crate::ui::styles;
use crate::ui::theming::ColorScheme;
use crate::ui::widgets::StatBar;
use iced::{
    alignment::{Horizontal, Vertical},
    widget::{button, container, scrollable, Column, Container, Id, Row, Space, Text},
    Element, Length, Padding, Theme,
};

/// Vertical offset applied to a card before its reveal fires.
const HIDDEN_OFFSET: f32 = 30.0;

/// Id of the page scrollable, shared with `scroll_to` tasks.
pub fn scroll_id() -> Id {
    Id::new("page")
}

/// Contextual data needed to render the page.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub document: &'a Document,
    pub coordinator: &'a RevealCoordinator,
    pub counters: &'a [CountUp],
    pub bars: &'a [BarFill],
    pub indicator: IndicatorState,
    pub scheme: &'a ColorScheme,
}

/// Messages emitted by the page.
#[derive(Debug, Clone)]
pub enum Message {
    /// The scrollable moved or was laid out.
    Scrolled(scrollable::Viewport),
    /// The hero scroll indicator was pressed.
    IndicatorPressed,
}

/// Render the whole document inside the page scrollable.
pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let mut column = Column::new().push(hero(&ctx));

    for section in &ctx.document.sections {
        column = column.push(Space::new().height(SECTION_GAP));
        column = column.push(section_header(&ctx, section));
        column = match &section.body {
            SectionBody::Cards(cards) => {
                let mut body = column;
                for card in cards {
                    body = body
                        .push(card_view(&ctx, card))
                        .push(Space::new().height(CARD_GAP));
                }
                body
            }
            SectionBody::Stats(stats) => stats_view(column, &ctx, stats),
        };
    }

    let content = Container::new(column.push(Space::new().height(PAGE_FOOTER)))
        .width(Length::Fill)
        .padding(Padding {
            left: PAGE_MARGIN,
            right: PAGE_MARGIN,
            ..Padding::ZERO
        });

    scrollable(content)
        .id(scroll_id())
        .on_scroll(Message::Scrolled)
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}

fn hero(ctx: &ViewContext<'_>) -> Element<'static, Message> {
    let indicator: Element<'static, Message> = if ctx.indicator.is_visible() {
        button(
            Text::new(format!("{} ↓", ctx.i18n.tr("hero-indicator"))).size(typography::CAPTION),
        )
        .style(styles::button::indicator)
        .on_press(Message::IndicatorPressed)
        .into()
    } else {
        Space::new().height(Length::Shrink).into()
    };

    let column = Column::new()
        .align_x(Horizontal::Center)
        .spacing(spacing::MD)
        .push(Space::new().height(Length::Fill))
        .push(Text::new(ctx.i18n.tr("hero-title")).size(typography::TITLE_XL))
        .push(Text::new(ctx.i18n.tr("hero-subtitle")).size(typography::BODY_LG))
        .push(Space::new().height(Length::Fill))
        .push(indicator)
        .push(Space::new().height(spacing::XL));

    Container::new(column)
        .width(Length::Fill)
        .height(HERO_HEIGHT)
        .align_x(Horizontal::Center)
        .into()
}

fn section_header<'a>(ctx: &ViewContext<'a>, section: &Section) -> Element<'a, Message> {
    Container::new(Text::new(ctx.i18n.tr(section.title)).size(typography::TITLE_LG))
        .height(SECTION_HEADER_HEIGHT)
        .align_y(Vertical::Center)
        .into()
}

fn card_view<'a>(ctx: &ViewContext<'a>, card: &Card) -> Element<'a, Message> {
    let revealed = ctx.coordinator.is_revealed(card.id);

    let body = Column::new()
        .spacing(spacing::XS)
        .push(Text::new(ctx.i18n.tr(card.title)).size(typography::TITLE_MD))
        .push(Text::new(ctx.i18n.tr(card.body)).size(typography::BODY));

    let style: fn(&Theme) -> container::Style = if revealed {
        styles::container::card
    } else {
        styles::container::card_hidden
    };
    let surface = Container::new(body)
        .width(Length::Fill)
        .height(Length::Fill)
        .padding(spacing::LG)
        .style(style);

    let offset = if revealed { 0.0 } else { HIDDEN_OFFSET };
    Container::new(surface)
        .width(Length::Fill)
        .height(CARD_HEIGHT)
        .padding(Padding {
            top: offset,
            ..Padding::ZERO
        })
        .clip(true)
        .into()
}

fn stats_view<'a>(
    mut column: Column<'a, Message>,
    ctx: &ViewContext<'a>,
    stats: &StatsBlock,
) -> Column<'a, Message> {
    let mut counters = Row::new().spacing(spacing::XL).width(Length::Fill);
    for (spec, counter) in stats.counters.iter().zip(ctx.counters) {
        counters = counters.push(
            Column::new()
                .align_x(Horizontal::Center)
                .spacing(spacing::XXS)
                .width(Length::Fill)
                .push(Text::new(counter.value().to_string()).size(typography::TITLE_LG))
                .push(Text::new(ctx.i18n.tr(spec.label)).size(typography::BODY_SM)),
        );
    }
    column = column.push(
        Container::new(counters)
            .height(COUNTER_ROW_HEIGHT)
            .align_y(Vertical::Center)
            .width(Length::Fill),
    );

    for (spec, fill) in stats.bars.iter().zip(ctx.bars) {
        let row = Row::new()
            .spacing(spacing::MD)
            .align_y(Vertical::Center)
            .push(
                Container::new(Text::new(ctx.i18n.tr(spec.label)).size(typography::BODY_SM))
                    .width(Length::FillPortion(2)),
            )
            .push(
                Container::new(
                    StatBar::new(fill.fraction(), ctx.scheme.track, ctx.scheme.fill)
                        .into_element(),
                )
                .width(Length::FillPortion(3)),
            );
        column = column.push(
            Container::new(row)
                .height(BAR_ROW_HEIGHT)
                .align_y(Vertical::Center)
                .width(Length::Fill),
        );
    }

    column
}
