// SPDX-License-Identifier: MPL-2.0
//! Toast widget for rendering notifications.
//!
//! Toasts are the visual representation of notifications, appearing as
//! small cards with kind-colored accents and a dismiss button. Each anchor
//! partition is rendered in its own screen corner.

use super::center::NotificationCenter;
use super::notification::{Anchor, Kind, Notification, NotificationId};
use crate::ui::design_tokens::{border, opacity, palette, radius, shadow, sizing, spacing, typography};
use iced::widget::{button, container, text, Column, Container, Row, Stack, Text};
use iced::{alignment, Color, Element, Length, Theme};

/// Messages emitted by rendered toasts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Message {
    /// The dismiss button of a toast was pressed.
    Dismiss(NotificationId),
}

impl Message {
    /// Applies the message to the center it was rendered from.
    pub fn apply(self, center: &NotificationCenter) {
        match self {
            Message::Dismiss(id) => {
                center.dismiss(id);
            }
        }
    }
}

/// Toast widget configuration.
pub struct Toast;

impl Toast {
    /// Renders a single toast notification.
    pub fn view<'a>(notification: &Notification) -> Element<'a, Message> {
        let kind = notification.kind();
        let accent_color = kind.color();

        let icon = Text::new(kind_glyph(kind))
            .size(typography::BODY_LG)
            .style(move |_theme: &Theme| text::Style {
                color: Some(accent_color),
            });

        let message_widget = Text::new(notification.message().to_owned())
            .size(typography::BODY)
            .style(|theme: &Theme| text::Style {
                color: Some(theme.palette().text),
            });

        let dismiss_button = button(Text::new("×").size(typography::BODY))
            .on_press(Message::Dismiss(notification.id()))
            .padding(spacing::XXS)
            .style(dismiss_button_style);

        // Layout: [icon] [message] [dismiss]
        let content = Row::new()
            .spacing(spacing::SM)
            .align_y(alignment::Vertical::Center)
            .push(Container::new(icon).padding(spacing::XXS))
            .push(
                Container::new(message_widget)
                    .width(Length::Fill)
                    .align_x(alignment::Horizontal::Left),
            )
            .push(dismiss_button);

        Container::new(content)
            .width(Length::Fixed(sizing::TOAST_WIDTH))
            .padding(spacing::SM)
            .style(move |theme: &Theme| toast_container_style(theme, accent_color))
            .into()
    }

    /// Renders one anchor partition pinned to its screen corner.
    ///
    /// Bottom-anchored partitions stack upward so the oldest toast always sits
    /// nearest its screen edge.
    pub fn view_partition<'a>(anchor: Anchor, notifications: &[Notification]) -> Element<'a, Message> {
        let toasts: Vec<Element<'a, Message>> = stacking_order(anchor, notifications)
            .into_iter()
            .map(Self::view)
            .collect();

        let horizontal = if anchor.is_left() {
            alignment::Horizontal::Left
        } else {
            alignment::Horizontal::Right
        };
        let vertical = if anchor.is_top() {
            alignment::Vertical::Top
        } else {
            alignment::Vertical::Bottom
        };

        let toast_column = Column::with_children(toasts)
            .spacing(spacing::SM)
            .align_x(horizontal);

        Container::new(toast_column)
            .width(Length::Fill)
            .height(Length::Fill)
            .align_x(horizontal)
            .align_y(vertical)
            .padding(spacing::MD)
            .into()
    }

    /// Renders every non-empty partition of `center` as a full-window overlay.
    pub fn view_overlay<'a>(center: &NotificationCenter) -> Element<'a, Message> {
        Anchor::ALL
            .into_iter()
            .map(|anchor| (anchor, center.snapshot(anchor)))
            .filter(|(_, notifications)| !notifications.is_empty())
            .fold(Stack::new(), |stack, (anchor, notifications)| {
                stack.push(Self::view_partition(anchor, &notifications))
            })
            .width(Length::Fill)
            .height(Length::Fill)
            .into()
    }
}

/// Returns the partition in top-to-bottom screen order.
fn stacking_order(anchor: Anchor, notifications: &[Notification]) -> Vec<&Notification> {
    if anchor.is_top() {
        notifications.iter().collect()
    } else {
        notifications.iter().rev().collect()
    }
}

fn kind_glyph(kind: Kind) -> &'static str {
    match kind {
        Kind::Success => "✓",
        Kind::Error => "✕",
        Kind::Info => "i",
        Kind::Warning => "!",
    }
}

/// Style function for the toast container.
fn toast_container_style(theme: &Theme, accent_color: Color) -> container::Style {
    let bg_color = theme.extended_palette().background.base.color;

    container::Style {
        background: Some(iced::Background::Color(bg_color)),
        border: iced::Border {
            color: accent_color,
            width: border::WIDTH_MD,
            radius: radius::MD.into(),
        },
        shadow: shadow::MD,
        text_color: Some(theme.palette().text),
        ..Default::default()
    }
}

/// Style function for the dismiss button.
fn dismiss_button_style(theme: &Theme, status: button::Status) -> button::Style {
    let base = theme.extended_palette().background.base;

    let (background, text_alpha) = match status {
        button::Status::Active => (None, opacity::OVERLAY_STRONG),
        button::Status::Hovered => (Some(opacity::OVERLAY_SUBTLE), opacity::OPAQUE),
        button::Status::Pressed => (Some(opacity::OVERLAY_MEDIUM), opacity::OPAQUE),
        button::Status::Disabled => (None, opacity::OVERLAY_MEDIUM),
    };

    button::Style {
        background: background.map(|a| {
            iced::Background::Color(Color {
                a,
                ..palette::GRAY_400
            })
        }),
        text_color: Color {
            a: text_alpha,
            ..base.text
        },
        border: iced::Border {
            radius: radius::SM.into(),
            ..Default::default()
        },
        shadow: shadow::NONE,
        snap: true,
    }
}
