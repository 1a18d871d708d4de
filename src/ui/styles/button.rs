// SPDX-License-Identifier: MPL-2.0
//! Button styles for the toolbar and the contact form.

use crate::ui::design_tokens::{
    palette::{self, WHITE},
    radius, shadow,
};
use iced::widget::button;
use iced::{Background, Border, Color, Theme};

/// Primary action: download and submit.
pub fn primary(theme: &Theme, status: button::Status) -> button::Style {
    let (background, border_color, shadow) = match status {
        button::Status::Active | button::Status::Pressed => {
            (palette::ACCENT_500, palette::ACCENT_600, shadow::SM)
        }
        button::Status::Hovered => (palette::ACCENT_400, palette::ACCENT_500, shadow::SM),
        button::Status::Disabled => return disabled(theme),
    };

    button::Style {
        background: Some(Background::Color(background)),
        text_color: WHITE,
        border: Border {
            color: border_color,
            width: 1.0,
            radius: radius::SM.into(),
        },
        shadow,
        snap: true,
    }
}

/// Overlay toggle: the active choice renders like a primary button, the
/// other one as a neutral outline.
pub fn toggle(active: bool) -> impl Fn(&Theme, button::Status) -> button::Style {
    move |theme: &Theme, status: button::Status| {
        if active {
            return primary(theme, status);
        }

        let is_light = !theme.extended_palette().is_dark;
        let (background, text_color) = if is_light {
            (palette::GRAY_100, palette::GRAY_900)
        } else {
            (palette::GRAY_700, WHITE)
        };
        let border_color = match status {
            button::Status::Hovered => palette::ACCENT_500,
            _ => palette::GRAY_400,
        };

        button::Style {
            background: Some(Background::Color(background)),
            text_color,
            border: Border {
                color: border_color,
                width: 1.0,
                radius: radius::SM.into(),
            },
            shadow: shadow::NONE,
            snap: true,
        }
    }
}

fn disabled(theme: &Theme) -> button::Style {
    let background = if theme.extended_palette().is_dark {
        palette::GRAY_700
    } else {
        palette::GRAY_200
    };

    button::Style {
        background: Some(Background::Color(background)),
        text_color: palette::GRAY_400,
        border: Border {
            color: Color {
                a: 0.5,
                ..palette::GRAY_400
            },
            width: 1.0,
            radius: radius::SM.into(),
        },
        shadow: shadow::NONE,
        snap: true,
    }
}
