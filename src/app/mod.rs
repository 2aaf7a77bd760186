// SPDX-License-Identifier: MPL-2.0
//! Application root state and orchestration.
//!
//! The `App` struct wires together the document, the reveal coordinator,
//! localization, and the animation states, and translates messages into
//! side effects like config persistence and scroll tasks. Policy
//! decisions (window sizing, tick gating, observer options) stay close to
//! the main update loop so user-facing behavior is easy to audit.

pub mod message;
mod persistence;
mod subscription;
mod update;
mod view;

pub use message::{Flags, Message};

use crate::config;
use crate::content::{Document, PageLayout};
use crate::i18n::fluent::I18n;
use crate::reveal::{IntersectionObserver, ObserverOptions, RevealCoordinator};
use crate::ui::state::{
    counter::DEFAULT_COUNT_DURATION, stat_bar::FILL_DURATION, BarFill, CountUp, IndicatorState,
    SmoothScroll, ViewportState,
};
use crate::ui::theming::{ColorScheme, ThemeMode};
use iced::{window, Element, Size, Subscription, Task, Theme};
use std::fmt;
use std::time::Instant;

/// Root Iced application state that bridges the page, localization, and
/// persisted preferences.
pub struct App {
    pub i18n: I18n,
    document: Document,
    layout: PageLayout,
    coordinator: RevealCoordinator,
    observer: IntersectionObserver,
    viewport: ViewportState,
    counters: Vec<CountUp>,
    bars: Vec<BarFill>,
    indicator: IndicatorState,
    smooth_scroll: Option<SmoothScroll>,
    theme_mode: ThemeMode,
    scheme: ColorScheme,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("locale", &self.i18n.current_locale().to_string())
            .field("observing", &self.coordinator.observing_len())
            .finish()
    }
}

pub const WINDOW_DEFAULT_WIDTH: u32 = 800;
pub const WINDOW_DEFAULT_HEIGHT: u32 = 900;
pub const MIN_WINDOW_WIDTH: u32 = 600;
pub const MIN_WINDOW_HEIGHT: u32 = 500;

/// Builds the window settings
pub fn window_settings() -> window::Settings {
    window::Settings {
        size: Size::new(WINDOW_DEFAULT_WIDTH as f32, WINDOW_DEFAULT_HEIGHT as f32),
        min_size: Some(Size::new(MIN_WINDOW_WIDTH as f32, MIN_WINDOW_HEIGHT as f32)),
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    // Wrap flags in RefCell<Option<_>> to satisfy Fn trait requirement
    // while only consuming flags once (iced 0.14 requires Fn, not FnOnce)
    let boot_state = RefCell::new(Some(flags));
    let boot = move || {
        let flags = boot_state
            .borrow_mut()
            .take()
            .expect("Boot function called more than once");
        App::new(flags)
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

impl App {
    fn new(flags: Flags) -> (Self, Task<Message>) {
        // Tests never touch the real config directory.
        let config = if cfg!(test) {
            config::Config::default()
        } else {
            config::load().unwrap_or_else(|error| {
                eprintln!("Failed to load config: {:?}", error);
                config::Config::default()
            })
        };
        let i18n = I18n::new(flags.lang, &config);
        let reduce_motion = flags.reduce_motion || config.reduce_motion();

        let document = Document::sample();
        let layout = PageLayout::compute(&document, WINDOW_DEFAULT_WIDTH as f32);

        let mut coordinator = RevealCoordinator::new();
        for (id, delay) in document.watchables() {
            coordinator.register(id, delay);
        }

        let stats = document.stats();
        let mut counters: Vec<CountUp> = stats
            .map(|stats| {
                stats
                    .counters
                    .iter()
                    .map(|spec| CountUp::new(spec.target, DEFAULT_COUNT_DURATION))
                    .collect()
            })
            .unwrap_or_default();
        let mut bars: Vec<BarFill> = stats
            .map(|stats| {
                stats
                    .bars
                    .iter()
                    .map(|spec| BarFill::new(spec.target, FILL_DURATION))
                    .collect()
            })
            .unwrap_or_default();

        if reduce_motion {
            coordinator.reveal_all();
            for counter in &mut counters {
                counter.finish();
            }
            for fill in &mut bars {
                fill.finish();
            }
        }

        let theme_mode = ThemeMode::System;
        let scheme = theme_mode.scheme();

        let mut app = App {
            i18n,
            document,
            layout,
            coordinator,
            observer: IntersectionObserver::new(ObserverOptions::default()),
            viewport: ViewportState::default(),
            counters,
            bars,
            indicator: IndicatorState::default(),
            smooth_scroll: None,
            theme_mode,
            scheme,
        };

        // Elements sitting above the fold reveal without waiting for a
        // scroll event.
        if !reduce_motion {
            update::sweep(&mut app, Instant::now());
        }

        (app, Task::none())
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        update::update(self, message)
    }

    fn view(&self) -> Element<'_, Message> {
        view::view(self)
    }

    fn subscription(&self) -> Subscription<Message> {
        subscription::create_tick_subscription(self)
    }

    fn title(&self) -> String {
        self.i18n.tr("app-title")
    }

    fn theme(&self) -> Theme {
        if self.theme_mode.is_dark() {
            Theme::Dark
        } else {
            Theme::Light
        }
    }

    /// Whether any animation still needs the shared tick.
    fn needs_tick(&self) -> bool {
        self.coordinator.has_scheduled()
            || self.smooth_scroll.is_some()
            || self.counters.iter().any(CountUp::is_animating)
            || self.bars.iter().any(BarFill::is_animating)
    }

    /// Viewport size assumed before the first scroll event arrives.
    fn fallback_viewport() -> Size {
        Size::new(WINDOW_DEFAULT_WIDTH as f32, WINDOW_DEFAULT_HEIGHT as f32)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::navbar;
    use crate::ui::page;
    use iced::widget::scrollable::AbsoluteOffset;
    use iced::{Point, Rectangle};
    use std::time::Duration;

    fn boot() -> App {
        let (app, _) = App::new(Flags {
            lang: Some("en-US".to_string()),
            reduce_motion: false,
        });
        app
    }

    fn scrolled(app: &mut App, y: f32) {
        let bounds = Rectangle::new(
            Point::new(0.0, 0.0),
            Size::new(
                WINDOW_DEFAULT_WIDTH as f32,
                WINDOW_DEFAULT_HEIGHT as f32 - 60.0,
            ),
        );
        app.viewport.update(bounds, AbsoluteOffset { x: 0.0, y });
        app.indicator.update(app.viewport.scroll_y());
        update::sweep(app, Instant::now());
    }

    #[test]
    fn boot_registers_every_watchable() {
        let app = boot();
        let total = app.document.watchables().count();
        let observing = app.coordinator.observing_len();
        assert!(observing <= total);
        // The boot sweep already revealed above-the-fold content.
        assert!(observing < total);
    }

    #[test]
    fn scrolling_to_the_bottom_reveals_or_schedules_everything() {
        let mut app = boot();
        let viewport_height = WINDOW_DEFAULT_HEIGHT as f32 - 60.0;
        let max = app.layout.max_scroll(viewport_height);

        let mut y = 0.0;
        while y < max {
            scrolled(&mut app, y);
            y += 120.0;
        }
        scrolled(&mut app, max);

        // Delayed elements may still be scheduled; run the tick well past
        // the longest stagger.
        let later = Instant::now() + Duration::from_secs(2);
        let _ = app.coordinator.tick(later);

        assert_eq!(app.coordinator.observing_len(), 0);
        for (id, _) in app.document.watchables() {
            assert!(app.coordinator.is_revealed(id), "unrevealed {id:?}");
        }
    }

    #[test]
    fn indicator_hides_after_scrolling() {
        let mut app = boot();
        assert!(app.indicator.is_visible());

        scrolled(&mut app, 400.0);
        assert!(!app.indicator.is_visible());
    }

    #[test]
    fn navigation_starts_a_smooth_scroll() {
        let mut app = boot();
        let _ = update::update(
            &mut app,
            Message::Navbar(navbar::Message::SectionPressed(2)),
        );

        let scroll = app.smooth_scroll.expect("smooth scroll started");
        let anchor = app.layout.anchor_of(2).expect("anchor exists");
        assert!(scroll.target() <= anchor);
        assert!(scroll.target() > 0.0);
    }

    #[test]
    fn indicator_press_targets_the_first_section() {
        let mut app = boot();
        let _ = update::update(
            &mut app,
            Message::Page(page::Message::IndicatorPressed),
        );

        let scroll = app.smooth_scroll.expect("smooth scroll started");
        assert_eq!(
            scroll.target(),
            app.layout.anchor_of(0).expect("anchor exists")
        );
    }

    #[test]
    fn language_toggle_flips_locale() {
        let mut app = boot();
        assert_eq!(app.i18n.current_locale().to_string(), "en-US");

        let _ = update::update(&mut app, Message::Navbar(navbar::Message::ToggleLanguage));
        assert_eq!(app.i18n.current_locale().to_string(), "ja");

        let _ = update::update(&mut app, Message::Navbar(navbar::Message::ToggleLanguage));
        assert_eq!(app.i18n.current_locale().to_string(), "en-US");
    }

    #[test]
    fn reduce_motion_boots_fully_revealed() {
        let (app, _) = App::new(Flags {
            lang: Some("en-US".to_string()),
            reduce_motion: true,
        });

        for (id, _) in app.document.watchables() {
            assert!(app.coordinator.is_revealed(id));
        }
        assert!(!app.needs_tick());
        for (counter, spec) in app
            .counters
            .iter()
            .zip(&app.document.stats().expect("stats block").counters)
        {
            assert_eq!(counter.value(), spec.target);
        }
    }

    #[test]
    fn idle_app_needs_no_tick_after_animations_finish() {
        let mut app = boot();
        // Finish whatever the boot sweep started.
        let later = Instant::now() + Duration::from_secs(5);
        let _ = update::update(&mut app, Message::Tick(later));
        let _ = update::update(&mut app, Message::Tick(later + Duration::from_secs(5)));

        assert!(!app.needs_tick());
    }
}
