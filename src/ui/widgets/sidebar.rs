// SPDX-License-Identifier: MPL-2.0
//! Navigation sidebar that remembers its active item and width.
//!
//! The state lives in the [`StateStore`] under a caller-chosen key as
//! `{ active_item_key, behaviour }`, so two sidebars with different keys never
//! share it.
//!
//! An optional footer shows inline while expanded. While collapsed it hides
//! behind a trigger and opens as a popover that closes on a press outside.

use crate::app::persisted_state::StateStore;
use super::hit_test::{HitTest, Hover};
use crate::error::Result;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::styles;
use iced::widget::{button, container, mouse_area, Column, Row, Text, Tooltip};
use iced::widget::tooltip::Position;
use iced::{alignment::Horizontal, Element, Length, Padding, Point};
use serde::{Deserialize, Serialize};
use tracing::warn;

pub const DEFAULT_STORAGE_KEY: &str = "sidebar-state";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SidebarItem {
    pub key: String,
    pub label: String,
    /// Short glyph shown alone while collapsed.
    pub glyph: Option<String>,
}

impl SidebarItem {
    pub fn new(key: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            label: label.into(),
            glyph: None,
        }
    }

    #[must_use]
    pub fn glyph(mut self, glyph: impl Into<String>) -> Self {
        self.glyph = Some(glyph.into());
        self
    }

    fn collapsed_text(&self) -> String {
        self.glyph
            .clone()
            .or_else(|| self.label.chars().next().map(String::from))
            .unwrap_or_default()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Behaviour {
    Expanded,
    Collapsed,
}

/// What gets written to the state store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SidebarState {
    pub active_item_key: Option<String>,
    pub behaviour: Behaviour,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Message {
    Select(String),
    Toggle,
    ToggleFooter,
    /// Pointer entered or left the footer trigger or popover.
    FooterHovered(bool),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sidebar {
    items: Vec<SidebarItem>,
    active_key: Option<String>,
    expanded: bool,
    collapsible: bool,
    storage_key: String,
    footer: Option<String>,
    footer_open: bool,
    footer_hover: Hover,
}

impl Sidebar {
    /// A sidebar with the first item active, expanded and collapsible.
    pub fn new(items: Vec<SidebarItem>) -> Self {
        let active_key = items.first().map(|item| item.key.clone());
        Self {
            items,
            active_key,
            expanded: true,
            collapsible: true,
            storage_key: DEFAULT_STORAGE_KEY.to_owned(),
            footer: None,
            footer_open: false,
            footer_hover: Hover::default(),
        }
    }

    #[must_use]
    pub fn storage_key(mut self, key: impl Into<String>) -> Self {
        self.storage_key = key.into();
        self
    }

    #[must_use]
    pub fn collapsible(mut self, collapsible: bool) -> Self {
        self.collapsible = collapsible;
        self
    }

    #[must_use]
    pub fn footer(mut self, footer: impl Into<String>) -> Self {
        self.footer = Some(footer.into());
        self
    }

    /// Width used when nothing has been stored yet.
    #[must_use]
    pub fn default_expanded(mut self, expanded: bool) -> Self {
        self.expanded = expanded;
        self
    }

    /// Applies whatever `store` holds under this sidebar's key.
    ///
    /// A missing entry keeps the defaults. A corrupt entry is logged and
    /// ignored. A stored key that no longer names an item falls back to the
    /// first item.
    #[must_use]
    pub fn restore(mut self, store: &StateStore) -> Self {
        match store.get::<SidebarState>(&self.storage_key) {
            Ok(Some(state)) => {
                self.expanded = state.behaviour == Behaviour::Expanded;
                if let Some(key) = state.active_item_key.filter(|key| self.has_item(key)) {
                    self.active_key = Some(key);
                }
            }
            Ok(None) => {}
            Err(err) => {
                warn!(key = %self.storage_key, error = %err, "ignoring corrupt sidebar state");
            }
        }
        self
    }

    /// Writes the current state into `store`. The caller decides when to save the file.
    pub fn persist(&self, store: &mut StateStore) -> Result<()> {
        store.set(self.storage_key.clone(), &self.state())
    }

    #[must_use]
    pub fn state(&self) -> SidebarState {
        SidebarState {
            active_item_key: self.active_key.clone(),
            behaviour: if self.expanded {
                Behaviour::Expanded
            } else {
                Behaviour::Collapsed
            },
        }
    }

    #[must_use]
    pub fn items(&self) -> &[SidebarItem] {
        &self.items
    }

    #[must_use]
    pub fn active_key(&self) -> Option<&str> {
        self.active_key.as_deref()
    }

    #[must_use]
    pub fn is_expanded(&self) -> bool {
        self.expanded
    }

    #[must_use]
    pub fn is_collapsible(&self) -> bool {
        self.collapsible
    }

    /// Whether the collapsed footer popover is showing.
    #[must_use]
    pub fn is_footer_open(&self) -> bool {
        self.footer_open
    }

    /// Hover over the footer trigger or popover, for [`Sidebar::pointer_pressed`].
    #[must_use]
    pub fn footer_hover(&self) -> Hover {
        self.footer_hover
    }

    fn has_item(&self, key: &str) -> bool {
        self.items.iter().any(|item| item.key == key)
    }

    /// Marks `key` active. Unknown keys are ignored.
    pub fn select(&mut self, key: &str) -> bool {
        if !self.has_item(key) || self.active_key.as_deref() == Some(key) {
            return false;
        }
        self.active_key = Some(key.to_owned());
        true
    }

    /// Expands or collapses. Does nothing when not collapsible.
    pub fn toggle(&mut self) -> bool {
        if !self.collapsible {
            return false;
        }
        self.expanded = !self.expanded;
        self.footer_open = false;
        true
    }

    /// Opens or closes the footer popover. Only a collapsed sidebar with a
    /// footer has one.
    pub fn toggle_footer(&mut self) -> bool {
        if self.expanded || self.footer.is_none() {
            return false;
        }
        self.footer_open = !self.footer_open;
        true
    }

    /// Closes the footer popover when a press lands outside `root`.
    /// Returns `true` when it closed.
    pub fn pointer_pressed(&mut self, point: Point, root: &impl HitTest) -> bool {
        if self.footer_open && !root.contains(point) {
            self.footer_open = false;
            return true;
        }
        false
    }

    /// Applies a message. Returns `true` when the persisted state changed.
    pub fn update(&mut self, message: Message) -> bool {
        match message {
            Message::Select(key) => self.select(&key),
            Message::Toggle => self.toggle(),
            Message::ToggleFooter => {
                self.toggle_footer();
                false
            }
            Message::FooterHovered(hovered) => {
                self.footer_hover = Hover(hovered);
                false
            }
        }
    }

    pub fn view(&self) -> Element<'_, Message> {
        let width = if self.expanded {
            sizing::SIDEBAR_WIDTH
        } else {
            sizing::SIDEBAR_COLLAPSED_WIDTH
        };

        let mut header = Row::new().width(Length::Fill);
        if self.collapsible {
            let chevron = if self.expanded { "«" } else { "»" };
            header = header.push(
                container(
                    button(Text::new(chevron).size(typography::BODY_LG))
                        .padding(spacing::XXS)
                        .style(styles::button::ghost)
                        .on_press(Message::Toggle),
                )
                .align_right(Length::Fill),
            );
        }

        let nav = self.items.iter().fold(
            Column::new().spacing(spacing::XXS),
            |column, item| column.push(self.item_view(item)),
        );

        let mut body = Column::new()
            .spacing(spacing::MD)
            .push(header)
            .push(container(nav).height(Length::Fill));
        if let Some(footer) = self.footer_view() {
            body = body.push(footer);
        }

        container(body)
        .width(width)
        .height(Length::Fill)
        .padding(spacing::SM)
        .style(styles::container::panel)
        .into()
    }

    fn footer_view(&self) -> Option<Element<'_, Message>> {
        let footer = self.footer.as_deref()?;
        if self.expanded {
            return Some(
                Text::new(footer)
                    .size(typography::CAPTION)
                    .style(styles::text::muted)
                    .into(),
            );
        }

        let trigger = button(Text::new("⋯").size(typography::BODY_LG))
            .padding(spacing::XXS)
            .style(styles::button::ghost)
            .on_press(Message::ToggleFooter);
        Some(
            container(hover_root(trigger.into()))
                .center_x(Length::Fill)
                .into(),
        )
    }

    /// The collapsed footer popover, placed next to the sidebar's bottom
    /// edge. The host stacks it above its content.
    pub fn footer_popover(&self) -> Option<Element<'_, Message>> {
        if !self.footer_open || self.expanded {
            return None;
        }
        let footer = self.footer.as_deref()?;

        let card = container(Text::new(footer).size(typography::BODY))
            .padding(spacing::SM)
            .style(styles::container::menu);

        Some(
            container(hover_root(card.into()))
                .align_bottom(Length::Fill)
                .padding(Padding {
                    left: sizing::SIDEBAR_COLLAPSED_WIDTH + spacing::SM,
                    bottom: spacing::SM,
                    ..Padding::ZERO
                })
                .into(),
        )
    }

    fn item_view<'a>(&'a self, item: &'a SidebarItem) -> Element<'a, Message> {
        let active = self.active_key.as_deref() == Some(item.key.as_str());
        let caption = if self.expanded {
            Text::new(item.label.as_str())
        } else {
            Text::new(item.collapsed_text())
        };

        let entry = button(
            container(caption.size(typography::BODY)).align_x(if self.expanded {
                Horizontal::Left
            } else {
                Horizontal::Center
            }),
        )
        .width(Length::Fill)
        .padding([spacing::XS, spacing::SM])
        .style(styles::button::nav_item(active))
        .on_press(Message::Select(item.key.clone()));

        if self.expanded {
            entry.into()
        } else {
            Tooltip::new(
                entry,
                Text::new(item.label.as_str()).size(typography::CAPTION),
                Position::Right,
            )
            .into()
        }
    }
}

fn hover_root(content: Element<'_, Message>) -> Element<'_, Message> {
    mouse_area(content)
        .on_enter(Message::FooterHovered(true))
        .on_exit(Message::FooterHovered(false))
        .into()
}
