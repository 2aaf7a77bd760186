// SPDX-License-Identifier: MPL-2.0
//! Configuration persistence logic.
//!
//! The language preference is read once at startup and written back the
//! moment the user toggles it. A failed save is reported and otherwise
//! ignored; it must never interrupt the page.

use super::Message;
use crate::config;
use crate::i18n::fluent::I18n;
use iced::Task;

/// Switches to the other shipped locale and persists the choice.
///
/// Guarded during tests to keep isolation: unit tests exercise the logic
/// by calling the function directly rather than touching the real config
/// directory.
pub fn apply_language_toggle(i18n: &mut I18n) -> Task<Message> {
    let Some(target) = i18n.toggle_target() else {
        return Task::none();
    };
    i18n.set_locale(target.clone());

    if cfg!(test) {
        return Task::none();
    }

    let mut cfg = config::load().unwrap_or_default();
    cfg.language = Some(target.to_string());

    if let Err(error) = config::save(&cfg) {
        eprintln!("Failed to save config: {:?}", error);
    }

    Task::none()
}
