// SPDX-License-Identifier: MPL-2.0
//! Centralized button styles.

use crate::ui::design_tokens::{
    opacity,
    palette::{self, WHITE},
    radius, shadow,
};
use iced::widget::button;
use iced::{Background, Border, Color, Theme};

fn filled(base: Color, hover: Color, edge: Color, status: button::Status) -> button::Style {
    let (background, shadow) = match status {
        button::Status::Hovered => (hover, shadow::MD),
        button::Status::Disabled => (
            Color {
                a: opacity::DISABLED,
                ..base
            },
            shadow::NONE,
        ),
        button::Status::Active | button::Status::Pressed => (base, shadow::SM),
    };
    button::Style {
        background: Some(Background::Color(background)),
        text_color: WHITE,
        border: Border {
            color: edge,
            width: 1.0,
            radius: radius::SM.into(),
        },
        shadow,
        snap: true,
    }
}

/// Main call to action.
pub fn primary(_theme: &Theme, status: button::Status) -> button::Style {
    filled(
        palette::PRIMARY_500,
        palette::PRIMARY_400,
        palette::PRIMARY_600,
        status,
    )
}

/// Destructive confirmation.
pub fn danger(_theme: &Theme, status: button::Status) -> button::Style {
    filled(
        palette::ERROR_600,
        palette::ERROR_500,
        palette::ERROR_600,
        status,
    )
}

/// Outlined secondary action (Cancel and similar).
/// Adapts to light/dark theme.
pub fn outline(theme: &Theme, status: button::Status) -> button::Style {
    let is_light = matches!(theme, Theme::Light);
    let text_color = if is_light { palette::GRAY_900 } else { WHITE };

    let background = match status {
        button::Status::Hovered if is_light => Some(Background::Color(palette::GRAY_50)),
        button::Status::Hovered => Some(Background::Color(palette::GRAY_700)),
        _ => None,
    };
    let text_color = if status == button::Status::Disabled {
        palette::GRAY_400
    } else {
        text_color
    };

    button::Style {
        background,
        text_color,
        border: Border {
            color: palette::GRAY_200,
            width: 1.0,
            radius: radius::SM.into(),
        },
        shadow: shadow::NONE,
        snap: true,
    }
}

/// Borderless button with a hover tint, for icons and menu rows.
pub fn ghost(theme: &Theme, status: button::Status) -> button::Style {
    let base = theme.extended_palette().background.base.text;
    let background = match status {
        button::Status::Hovered | button::Status::Pressed => Some(Background::Color(Color {
            a: opacity::OVERLAY_SUBTLE,
            ..palette::GRAY_200
        })),
        _ => None,
    };
    button::Style {
        background,
        text_color: if status == button::Status::Disabled {
            palette::GRAY_400
        } else {
            base
        },
        border: Border {
            radius: radius::MD.into(),
            ..Border::default()
        },
        shadow: shadow::NONE,
        snap: true,
    }
}

/// Row inside an open dropdown menu; `selected` rows use the brand color.
pub fn menu_option(selected: bool) -> impl Fn(&Theme, button::Status) -> button::Style {
    move |theme: &Theme, status: button::Status| {
        let mut style = ghost(theme, status);
        style.border.radius = 0.0.into();
        if selected {
            style.text_color = palette::PRIMARY_600;
            style.background = Some(Background::Color(Color {
                a: opacity::OVERLAY_MEDIUM,
                ..palette::GRAY_100
            }));
        }
        style
    }
}

/// Sidebar entry; the active entry is filled with the brand color.
pub fn nav_item(active: bool) -> impl Fn(&Theme, button::Status) -> button::Style {
    move |theme: &Theme, status: button::Status| {
        if active {
            primary(theme, status)
        } else {
            ghost(theme, status)
        }
    }
}
