// SPDX-License-Identifier: MPL-2.0
//! Centralized button styles.

use crate::ui::design_tokens::{
    palette::{self, WHITE},
    radius, shadow,
};
use iced::widget::button;
use iced::{Background, Border, Theme};

/// Primary action button (save, edit, logout).
pub fn primary(_theme: &Theme, status: button::Status) -> button::Style {
    match status {
        button::Status::Active | button::Status::Pressed => button::Style {
            background: Some(Background::Color(palette::PRIMARY_500)),
            text_color: WHITE,
            border: Border {
                color: palette::PRIMARY_600,
                width: 1.0,
                radius: radius::FULL.into(),
            },
            shadow: shadow::SM,
            snap: true,
        },
        button::Status::Hovered => button::Style {
            background: Some(Background::Color(palette::PRIMARY_400)),
            text_color: WHITE,
            border: Border {
                color: palette::PRIMARY_500,
                width: 1.0,
                radius: radius::FULL.into(),
            },
            shadow: shadow::MD,
            snap: true,
        },
        button::Status::Disabled => disabled_style(),
    }
}

/// Destructive variant for the logout action.
pub fn danger(_theme: &Theme, status: button::Status) -> button::Style {
    let background = match status {
        button::Status::Hovered => iced::Color {
            a: 0.85,
            ..palette::ERROR_500
        },
        _ => palette::ERROR_500,
    };

    match status {
        button::Status::Disabled => disabled_style(),
        _ => button::Style {
            background: Some(Background::Color(background)),
            text_color: WHITE,
            border: Border {
                color: palette::ERROR_500,
                width: 1.0,
                radius: radius::FULL.into(),
            },
            shadow: shadow::SM,
            snap: true,
        },
    }
}

/// Quiet inline button (dismiss, send-verification link).
pub fn text_link(theme: &Theme, status: button::Status) -> button::Style {
    let palette_ext = theme.extended_palette();
    let text_color = match status {
        button::Status::Hovered | button::Status::Pressed => palette::PRIMARY_400,
        button::Status::Disabled => palette::GRAY_400,
        _ => palette_ext.primary.base.color,
    };

    button::Style {
        background: None,
        text_color,
        border: Border::default(),
        shadow: iced::Shadow::default(),
        snap: true,
    }
}

fn disabled_style() -> button::Style {
    button::Style {
        background: Some(Background::Color(palette::GRAY_200)),
        text_color: palette::GRAY_400,
        border: Border {
            color: palette::GRAY_400,
            width: 1.0,
            radius: radius::FULL.into(),
        },
        shadow: iced::Shadow::default(),
        snap: true,
    }
}
