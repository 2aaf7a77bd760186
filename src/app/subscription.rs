// SPDX-License-Identifier: MPL-2.0
//! Event subscriptions for the application.
//!
//! The page only needs the shared animation tick, and only while
//! something is actually pending: delayed reveals, counters, bar fills,
//! or an in-flight smooth scroll. Idle pages subscribe to nothing.

use super::{App, Message};
use iced::{time, Subscription};
use std::time::Duration;

/// Tick interval while animations are pending (~60 Hz).
pub const TICK_INTERVAL: Duration = Duration::from_millis(16);

/// Creates the animation tick subscription, gated on pending work.
pub fn create_tick_subscription(app: &App) -> Subscription<Message> {
    if app.needs_tick() {
        time::every(TICK_INTERVAL).map(Message::Tick)
    } else {
        Subscription::none()
    }
}
