// SPDX-License-Identifier: MPL-2.0
//! View rendering for the application.
//!
//! The active sidebar page is drawn next to the sidebar, the confirmation
//! dialog goes above that, then the collapsed sidebar's footer popover, and
//! the toast partitions sit on top of everything.

use super::{App, Message, Page};
use crate::ui::design_tokens::{spacing, typography};
use crate::ui::notifications::{Anchor, Kind, Toast};
use crate::ui::styles;
use iced::widget::{button, container, mouse_area, scrollable, Column, Row, Stack, Text};
use iced::{Element, Length};

impl App {
    pub(super) fn view(&self) -> Element<'_, Message> {
        let page = match self.page() {
            Page::Toasts => self.view_toasts_page(),
            Page::Forms => self.view_forms_page(),
            Page::Dialog => self.view_dialog_page(),
        };

        let content = container(scrollable(
            Column::new()
                .spacing(spacing::LG)
                .padding(spacing::XL)
                .push(Text::new(self.page().title()).size(typography::TITLE_LG))
                .push(page),
        ))
        .width(Length::Fill)
        .height(Length::Fill);

        let base: Element<'_, Message> = Row::new()
            .push(self.sidebar.view().map(Message::Sidebar))
            .push(content)
            .into();

        let mut layers = Stack::new().push(self.dialog.overlay(base, Message::Dialog));
        if let Some(popover) = self.sidebar.footer_popover() {
            layers = layers.push(popover.map(Message::Sidebar));
        }

        layers
            .push(Toast::view_overlay(&self.center).map(Message::Toast))
            .width(Length::Fill)
            .height(Length::Fill)
            .into()
    }

    fn view_toasts_page(&self) -> Element<'_, Message> {
        let defaults = self.center.defaults();
        let summary = Text::new(format!(
            "Default corner: {}, default duration: {} ms",
            defaults.anchor.as_str(),
            defaults.duration.as_millis()
        ))
        .size(typography::BODY)
        .style(styles::text::muted);

        let corners = Anchor::ALL.into_iter().fold(
            Column::new().spacing(spacing::SM),
            |column, anchor| {
                let buttons = Kind::ALL.into_iter().fold(
                    Row::new().spacing(spacing::XS),
                    |row, kind| {
                        row.push(
                            button(Text::new(kind_label(kind)).size(typography::BODY))
                                .padding([spacing::XS, spacing::SM])
                                .style(styles::button::outline)
                                .on_press(Message::ShowToast { kind, anchor }),
                        )
                    },
                );
                let sticky = button(Text::new("Sticky").size(typography::BODY))
                    .padding([spacing::XS, spacing::SM])
                    .style(styles::button::ghost)
                    .on_press(Message::ShowStickyToast(anchor));

                column.push(
                    Column::new()
                        .spacing(spacing::XXS)
                        .push(Text::new(anchor.as_str()).size(typography::TITLE_SM))
                        .push(buttons.push(sticky)),
                )
            },
        );

        let actions = Row::new()
            .spacing(spacing::SM)
            .push(
                button(Text::new("Show with defaults").size(typography::BODY))
                    .padding([spacing::XS, spacing::MD])
                    .style(styles::button::primary)
                    .on_press(Message::ShowDefaultToast),
            )
            .push(
                button(Text::new("Clear all").size(typography::BODY))
                    .padding([spacing::XS, spacing::MD])
                    .style(styles::button::outline)
                    .on_press_maybe(self.center.has_notifications().then_some(Message::ClearToasts)),
            );

        Column::new()
            .spacing(spacing::LG)
            .push(summary)
            .push(corners)
            .push(actions)
            .into()
    }

    fn view_forms_page(&self) -> Element<'_, Message> {
        let role = mouse_area(self.role.view().map(Message::Role))
            .on_enter(Message::RoleHovered(true))
            .on_exit(Message::RoleHovered(false));
        let tags = mouse_area(self.tags.view().map(Message::Tags))
            .on_enter(Message::TagsHovered(true))
            .on_exit(Message::TagsHovered(false));

        let delay = self.config.fields.message_delay();
        let hint = Text::new(format!(
            "Validation messages hide after {} ms",
            delay.value()
        ))
        .size(typography::CAPTION)
        .style(styles::text::muted);

        Column::new()
            .spacing(spacing::MD)
            .max_width(480.0)
            .push(self.name.view().map(Message::Name))
            .push(self.password.view().map(Message::Password))
            .push(self.bio.view().map(Message::Bio))
            .push(role)
            .push(tags)
            .push(hint)
            .push(
                button(Text::new("Validate").size(typography::BODY))
                    .padding([spacing::XS, spacing::MD])
                    .style(styles::button::primary)
                    .on_press(Message::Validate),
            )
            .into()
    }

    fn view_dialog_page(&self) -> Element<'_, Message> {
        let status = match self.deleted {
            0 => "No project deleted yet".to_owned(),
            1 => "1 project deleted".to_owned(),
            n => format!("{n} projects deleted"),
        };

        Column::new()
            .spacing(spacing::MD)
            .push(
                Text::new("Deleting asks for confirmation and blocks the dialog until it is done.")
                    .size(typography::BODY),
            )
            .push(
                button(Text::new("Delete project").size(typography::BODY))
                    .padding([spacing::XS, spacing::MD])
                    .style(styles::button::danger)
                    .on_press_maybe((!self.dialog.is_open()).then_some(Message::OpenDialog)),
            )
            .push(
                Text::new(status)
                    .size(typography::CAPTION)
                    .style(styles::text::muted),
            )
            .into()
    }
}

fn kind_label(kind: Kind) -> &'static str {
    match kind {
        Kind::Success => "Success",
        Kind::Error => "Error",
        Kind::Info => "Info",
        Kind::Warning => "Warning",
    }
}
