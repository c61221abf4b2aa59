// SPDX-License-Identifier: MPL-2.0
//! Text styles.

use crate::ui::design_tokens::palette;
use iced::widget::text;
use iced::Theme;

/// Transient validation message below a field.
pub fn error(_theme: &Theme) -> text::Style {
    text::Style {
        color: Some(palette::ERROR_500),
    }
}

/// Placeholder and hint text.
pub fn muted(_theme: &Theme) -> text::Style {
    text::Style {
        color: Some(palette::GRAY_400),
    }
}
