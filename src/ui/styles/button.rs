// SPDX-License-Identifier: MPL-2.0
//! Centralized button styles.

use crate::ui::design_tokens::{opacity, palette, radius, shadow};
use iced::widget::button;
use iced::{Background, Border, Color, Theme};

/// Navbar section link: quiet until hovered.
pub fn nav_link(theme: &Theme, status: button::Status) -> button::Style {
    let palette_ext = theme.extended_palette();
    let text = palette_ext.background.base.text;

    match status {
        button::Status::Hovered | button::Status::Pressed => button::Style {
            background: Some(Background::Color(Color {
                a: opacity::OVERLAY_SUBTLE,
                ..palette::PRIMARY_500
            })),
            text_color: text,
            border: Border {
                radius: radius::SM.into(),
                ..Border::default()
            },
            shadow: shadow::NONE,
            snap: true,
        },
        _ => button::Style {
            background: None,
            text_color: text,
            border: Border {
                radius: radius::SM.into(),
                ..Border::default()
            },
            shadow: shadow::NONE,
            snap: true,
        },
    }
}

/// Language toggle: filled brand button.
pub fn language_toggle(_theme: &Theme, status: button::Status) -> button::Style {
    let background = match status {
        button::Status::Hovered => palette::PRIMARY_400,
        _ => palette::PRIMARY_500,
    };

    button::Style {
        background: Some(Background::Color(background)),
        text_color: palette::WHITE,
        border: Border {
            color: palette::PRIMARY_600,
            width: 1.0,
            radius: radius::SM.into(),
        },
        shadow: shadow::SM,
        snap: true,
    }
}

/// The hero scroll indicator: borderless, fades with its container.
pub fn indicator(theme: &Theme, status: button::Status) -> button::Style {
    let palette_ext = theme.extended_palette();
    let alpha = match status {
        button::Status::Hovered | button::Status::Pressed => opacity::OPAQUE,
        _ => opacity::OVERLAY_STRONG,
    };

    button::Style {
        background: None,
        text_color: Color {
            a: alpha,
            ..palette_ext.background.base.text
        },
        border: Border::default(),
        shadow: shadow::NONE,
        snap: true,
    }
}
