// SPDX-License-Identifier: MPL-2.0
//! Container styles.

use crate::ui::design_tokens::{border, opacity, palette, radius, shadow};
use iced::widget::container;
use iced::{Background, Border, Color, Theme};

/// Generic panel surface (sidebar, page sections).
///
/// Derived from the active theme background with a slight opacity so panels
/// stay readable in both light and dark modes.
pub fn panel(theme: &Theme) -> container::Style {
    let base = theme.extended_palette().background.base.color;

    container::Style {
        background: Some(Background::Color(Color {
            a: opacity::SURFACE,
            ..base
        })),
        border: Border {
            radius: radius::LG.into(),
            ..Default::default()
        },
        ..Default::default()
    }
}

/// Trigger box of a dropdown or the frame of a text field.
pub fn field(has_error: bool, disabled: bool) -> impl Fn(&Theme) -> container::Style {
    move |theme: &Theme| {
        let base = theme.extended_palette().background.base;
        let (edge, fill) = if has_error {
            (palette::ERROR_500, palette::ERROR_100)
        } else {
            (palette::GRAY_200, base.color)
        };
        let fill = if disabled {
            Color {
                a: opacity::DISABLED,
                ..fill
            }
        } else {
            fill
        };
        container::Style {
            background: Some(Background::Color(fill)),
            text_color: Some(base.text),
            border: Border {
                color: edge,
                width: border::WIDTH_SM,
                radius: radius::MD.into(),
            },
            ..Default::default()
        }
    }
}

/// Floating menu below an open dropdown.
pub fn menu(theme: &Theme) -> container::Style {
    let base = theme.extended_palette().background.base;
    container::Style {
        background: Some(Background::Color(base.color)),
        text_color: Some(base.text),
        border: Border {
            color: palette::GRAY_200,
            width: border::WIDTH_SM,
            radius: radius::MD.into(),
        },
        shadow: shadow::LG,
        ..Default::default()
    }
}

/// Selected value chip inside a multi-select trigger.
pub fn chip(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(palette::GRAY_100)),
        text_color: Some(palette::GRAY_700),
        border: Border {
            radius: radius::SM.into(),
            ..Default::default()
        },
        ..Default::default()
    }
}

/// Dimmed layer behind a modal dialog.
pub fn backdrop(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(Color {
            a: opacity::OVERLAY_MEDIUM,
            ..palette::BLACK
        })),
        ..Default::default()
    }
}

/// Modal dialog card.
pub fn dialog(theme: &Theme) -> container::Style {
    let base = theme.extended_palette().background.base;
    container::Style {
        background: Some(Background::Color(base.color)),
        text_color: Some(base.text),
        border: Border {
            color: palette::GRAY_200,
            width: border::WIDTH_SM,
            radius: radius::LG.into(),
        },
        shadow: shadow::LG,
        ..Default::default()
    }
}

/// Round badge holding the dialog icon.
pub fn dialog_badge(danger: bool) -> impl Fn(&Theme) -> container::Style {
    move |_theme: &Theme| {
        let (fill, text) = if danger {
            (palette::ERROR_100, palette::ERROR_600)
        } else {
            (palette::PRIMARY_100, palette::PRIMARY_600)
        };
        container::Style {
            background: Some(Background::Color(fill)),
            text_color: Some(text),
            border: Border {
                radius: radius::FULL.into(),
                ..Default::default()
            },
            ..Default::default()
        }
    }
}
