// SPDX-License-Identifier: MPL-2.0
//! Centralized button styles.

use crate::ui::design_tokens::{
    opacity,
    palette::{BLACK, WHITE},
    radius, shadow,
};
use iced::widget::button;
use iced::{Background, Border, Color, Theme};

/// Style for overlay buttons (navigation arrows, floating controls).
pub fn overlay(
    text_color: Color,
    alpha_normal: f32,
    alpha_hover: f32,
) -> impl Fn(&Theme, button::Status) -> button::Style {
    move |_theme: &Theme, status: button::Status| {
        let alpha = match status {
            button::Status::Hovered => alpha_hover,
            button::Status::Pressed => opacity::OVERLAY_PRESSED,
            _ => alpha_normal,
        };

        button::Style {
            background: Some(Background::Color(Color { a: alpha, ..BLACK })),
            text_color,
            border: Border {
                radius: radius::FULL.into(),
                ..Border::default()
            },
            shadow: shadow::MD,
            snap: true,
        }
    }
}

/// Style for thumbnail rail entries. The active thumbnail is fully opaque
/// while the others are dimmed; hovering an inactive thumbnail brightens it.
pub fn thumbnail(active: bool) -> impl Fn(&Theme, button::Status) -> button::Style {
    move |_theme: &Theme, status: button::Status| {
        let alpha = if active {
            opacity::OPAQUE
        } else {
            match status {
                button::Status::Hovered => opacity::OVERLAY_STRONG,
                _ => opacity::THUMBNAIL_INACTIVE,
            }
        };

        button::Style {
            background: None,
            text_color: Color { a: alpha, ..WHITE },
            border: Border {
                color: Color {
                    a: if active { opacity::OPAQUE } else { alpha },
                    ..WHITE
                },
                width: if active { 2.0 } else { 1.0 },
                radius: radius::SM.into(),
            },
            shadow: shadow::NONE,
            snap: true,
        }
    }
}
