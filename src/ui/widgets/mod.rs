// SPDX-License-Identifier: MPL-2.0
//! Interaction-state components.
//!
//! Each component owns plain state plus a `Message` enum and exposes
//! `update` and `view`, so hosts embed them the usual Elm way. The state
//! methods (`toggle`, `select`, `confirm`...) are usable without iced for tests
//! and headless hosts.

pub mod confirm_dialog;
pub mod dropdown;
pub mod sidebar;
pub mod text_field;

pub use confirm_dialog::{ConfirmDialog, Phase as DialogPhase, Variant as DialogVariant};
pub use dropdown::{MultiSelect, SelectOption, SingleSelect};
pub use hit_test::{Bounds, HitTest, Hover};
pub use sidebar::{Sidebar, SidebarItem, SidebarState};
pub use text_field::{Kind as TextFieldKind, TextField};

use crate::ui::design_tokens::{spacing, typography};
use crate::ui::styles;
use iced::widget::{Column, Text};
use iced::Element;

/// Stacks an optional label, a control and its transient message.
fn labelled<'a, M: 'a>(
    label: Option<&'a str>,
    control: Element<'a, M>,
    message: Option<String>,
) -> Element<'a, M> {
    let mut column = Column::new().spacing(spacing::XXS);
    if let Some(label) = label {
        column = column.push(Text::new(label).size(typography::BODY));
    }
    column = column.push(control);
    if let Some(message) = message {
        column = column.push(
            Text::new(message)
                .size(typography::CAPTION)
                .style(styles::text::error),
        );
    }
    column.into()
}
