// SPDX-License-Identifier: MPL-2.0
//! Update logic and message handlers for the application.
//!
//! All state changes funnel through [`update`]: scroll events feed the
//! intersection sweep, navbar events start smooth scrolls or toggle the
//! language, and the shared tick advances every pending animation.

use super::{persistence, App, Message};
use crate::reveal::ElementId;
use crate::ui::navbar::{self, Event as NavbarEvent};
use crate::ui::page;
use crate::ui::state::SmoothScroll;
use iced::advanced::widget::operation::scrollable::scroll_to;
use iced::advanced::widget::operate;
use iced::widget::scrollable::AbsoluteOffset;
use iced::Task;
use std::time::Instant;

pub fn update(app: &mut App, message: Message) -> Task<Message> {
    match message {
        Message::Page(page::Message::Scrolled(viewport)) => {
            app.viewport
                .update(viewport.bounds(), viewport.absolute_offset());
            app.indicator.update(app.viewport.scroll_y());
            sweep(app, Instant::now());
            Task::none()
        }
        Message::Page(page::Message::IndicatorPressed) => {
            // The indicator leads to the first section.
            start_section_scroll(app, 0, Instant::now());
            Task::none()
        }
        Message::Navbar(message) => match navbar::update(message) {
            NavbarEvent::NavigateTo(section) => {
                start_section_scroll(app, section, Instant::now());
                Task::none()
            }
            NavbarEvent::ToggleLanguage => persistence::apply_language_toggle(&mut app.i18n),
        },
        Message::Tick(now) => tick(app, now),
    }
}

/// Advances every pending animation by one tick.
fn tick(app: &mut App, now: Instant) -> Task<Message> {
    for id in app.coordinator.tick(now) {
        on_revealed(app, id, now);
    }

    for counter in &mut app.counters {
        counter.tick(now);
    }
    for fill in &mut app.bars {
        fill.tick(now);
    }

    if let Some(scroll) = app.smooth_scroll {
        let offset = AbsoluteOffset {
            x: 0.0,
            y: scroll.offset_at(now),
        };
        if scroll.is_finished(now) {
            app.smooth_scroll = None;
        }
        return operate(scroll_to(page::scroll_id(), offset.into()));
    }

    Task::none()
}

/// Feeds intersection signals for every element still under observation.
///
/// This is the only reveal mechanism: the scroll handler always goes
/// through the observer geometry, never through a coarser shortcut.
pub(super) fn sweep(app: &mut App, now: Instant) {
    let viewport = app.viewport.content_viewport(App::fallback_viewport());

    let hits: Vec<ElementId> = app
        .layout
        .watch_rects()
        .iter()
        .filter(|(id, rect)| {
            app.coordinator.is_observing(*id) && app.observer.is_intersecting(*rect, viewport)
        })
        .map(|(id, _)| *id)
        .collect();

    for id in hits {
        if app.coordinator.on_intersect(id, now) {
            on_revealed(app, id, now);
        }
    }
}

/// Side effects attached to a reveal: the stats block starts its
/// counters, each bar starts its own fill.
fn on_revealed(app: &mut App, id: ElementId, now: Instant) {
    if let Some(stats) = app.document.stats() {
        if stats.id == id {
            for counter in &mut app.counters {
                counter.start(now);
            }
        } else if let Some(index) = stats.bars.iter().position(|bar| bar.id == id) {
            if let Some(fill) = app.bars.get_mut(index) {
                fill.start(now);
            }
        }
    }
}

fn start_section_scroll(app: &mut App, section: usize, now: Instant) {
    let Some(anchor) = app.layout.anchor_of(section) else {
        return;
    };

    let viewport = app.viewport.content_viewport(App::fallback_viewport());
    let target = anchor.min(app.layout.max_scroll(viewport.height));
    app.smooth_scroll = Some(SmoothScroll::new(app.viewport.scroll_y(), target, now));
}
