// SPDX-License-Identifier: MPL-2.0
//! Modal confirmation dialog.
//!
//! The dialog never closes itself after a confirmation: the caller runs its
//! action, then calls [`ConfirmDialog::finish`]. Close requests are ignored
//! while that action is in flight.

use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::styles;
use iced::widget::{button, container, opaque, Column, Row, Stack, Text};
use iced::{alignment::Horizontal, Element, Length};

pub const DEFAULT_TITLE: &str = "Are you sure?";
pub const DEFAULT_DESCRIPTION: &str = "This action cannot be undone.";
pub const DEFAULT_CONFIRM_LABEL: &str = "Confirm";
pub const DEFAULT_CANCEL_LABEL: &str = "Cancel";
pub const PROCESSING_LABEL: &str = "Processing...";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Phase {
    #[default]
    Closed,
    Open,
    /// The confirmed action is running.
    Processing,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Variant {
    #[default]
    Danger,
    Info,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Message {
    Confirm,
    Cancel,
}

/// What the parent should do after [`ConfirmDialog::update`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    None,
    /// Start the action, then call [`ConfirmDialog::finish`].
    Confirmed,
    Closed,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfirmDialog {
    phase: Phase,
    variant: Variant,
    title: String,
    description: String,
    confirm_label: String,
    cancel_label: String,
}

impl Default for ConfirmDialog {
    fn default() -> Self {
        Self {
            phase: Phase::Closed,
            variant: Variant::Danger,
            title: DEFAULT_TITLE.to_owned(),
            description: DEFAULT_DESCRIPTION.to_owned(),
            confirm_label: DEFAULT_CONFIRM_LABEL.to_owned(),
            cancel_label: DEFAULT_CANCEL_LABEL.to_owned(),
        }
    }
}

impl ConfirmDialog {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn variant(mut self, variant: Variant) -> Self {
        self.variant = variant;
        self
    }

    #[must_use]
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    #[must_use]
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    #[must_use]
    pub fn confirm_label(mut self, label: impl Into<String>) -> Self {
        self.confirm_label = label.into();
        self
    }

    #[must_use]
    pub fn cancel_label(mut self, label: impl Into<String>) -> Self {
        self.cancel_label = label.into();
        self
    }

    #[must_use]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Open or processing.
    #[must_use]
    pub fn is_open(&self) -> bool {
        self.phase != Phase::Closed
    }

    #[must_use]
    pub fn is_processing(&self) -> bool {
        self.phase == Phase::Processing
    }

    /// Shows the dialog. No effect while processing.
    pub fn open(&mut self) {
        if self.phase == Phase::Closed {
            self.phase = Phase::Open;
        }
    }

    /// Closes the dialog unless an action is running. Returns whether it closed.
    pub fn request_close(&mut self) -> bool {
        if self.phase == Phase::Open {
            self.phase = Phase::Closed;
            return true;
        }
        false
    }

    /// `Open -> Processing`. Returns `false` in any other phase.
    pub fn confirm(&mut self) -> bool {
        if self.phase == Phase::Open {
            self.phase = Phase::Processing;
            return true;
        }
        false
    }

    /// Ends a running action and closes the dialog.
    pub fn finish(&mut self) {
        if self.phase == Phase::Processing {
            self.phase = Phase::Closed;
        }
    }

    /// Label of the confirm button for the current phase.
    #[must_use]
    pub fn confirm_button_label(&self) -> &str {
        if self.is_processing() {
            PROCESSING_LABEL
        } else {
            &self.confirm_label
        }
    }

    pub fn update(&mut self, message: Message) -> Event {
        match message {
            Message::Confirm if self.confirm() => Event::Confirmed,
            Message::Cancel if self.request_close() => Event::Closed,
            Message::Confirm | Message::Cancel => Event::None,
        }
    }

    /// The modal card, or nothing while closed.
    pub fn view(&self) -> Option<Element<'_, Message>> {
        if !self.is_open() {
            return None;
        }
        let processing = self.is_processing();
        let danger = self.variant == Variant::Danger;

        let badge = container(Text::new(if danger { "⚠" } else { "ℹ" }).size(typography::TITLE_SM))
            .center(sizing::ICON_XL)
            .style(styles::container::dialog_badge(danger));

        let cancel = button(Text::new(self.cancel_label.as_str()).size(typography::BODY))
            .padding([spacing::XS, spacing::MD])
            .style(styles::button::outline)
            .on_press_maybe((!processing).then_some(Message::Cancel));

        let confirm = button(Text::new(self.confirm_button_label()).size(typography::BODY))
            .padding([spacing::XS, spacing::MD])
            .style(if danger {
                styles::button::danger
            } else {
                styles::button::primary
            })
            .on_press_maybe((!processing).then_some(Message::Confirm));

        let close = button(Text::new("×").size(typography::BODY_LG))
            .padding(spacing::XXS)
            .style(styles::button::ghost)
            .on_press_maybe((!processing).then_some(Message::Cancel));

        let body = Column::new()
            .spacing(spacing::XS)
            .align_x(Horizontal::Center)
            .push(badge)
            .push(Text::new(self.title.as_str()).size(typography::TITLE_SM))
            .push(
                Text::new(self.description.as_str())
                    .size(typography::BODY)
                    .style(styles::text::muted),
            )
            .push(
                Row::new()
                    .spacing(spacing::SM)
                    .padding([spacing::LG, 0.0])
                    .push(cancel)
                    .push(confirm),
            );

        let card = Column::new()
            .push(container(close).align_right(Length::Fill))
            .push(body);

        Some(
            container(card)
                .width(sizing::DIALOG_WIDTH)
                .padding(spacing::LG)
                .style(styles::container::dialog)
                .into(),
        )
    }

    /// Draws the dialog above `base`, blocking interaction with it.
    pub fn overlay<'a, M: 'a>(
        &'a self,
        base: Element<'a, M>,
        on_message: impl Fn(Message) -> M + 'a,
    ) -> Element<'a, M> {
        match self.view() {
            Some(card) => Stack::new()
                .push(base)
                .push(opaque(
                    container(card.map(on_message))
                        .center(Length::Fill)
                        .padding(spacing::MD)
                        .style(styles::container::backdrop),
                ))
                .into(),
            None => base,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_closed_with_default_copy() {
        let dialog = ConfirmDialog::new();
        assert_eq!(dialog.phase(), Phase::Closed);
        assert_eq!(dialog.confirm_button_label(), DEFAULT_CONFIRM_LABEL);
        assert!(dialog.view().is_none());
    }

    #[test]
    fn confirm_moves_to_processing_and_waits_for_finish() {
        let mut dialog = ConfirmDialog::new();
        dialog.open();
        assert_eq!(dialog.update(Message::Confirm), Event::Confirmed);
        assert!(dialog.is_processing());
        assert_eq!(dialog.confirm_button_label(), PROCESSING_LABEL);

        dialog.finish();
        assert_eq!(dialog.phase(), Phase::Closed);
    }

    #[test]
    fn close_is_ignored_while_processing() {
        let mut dialog = ConfirmDialog::new();
        dialog.open();
        dialog.confirm();

        assert!(!dialog.request_close());
        assert_eq!(dialog.update(Message::Cancel), Event::None);
        assert!(dialog.is_processing());
    }

    #[test]
    fn cancel_closes_an_open_dialog() {
        let mut dialog = ConfirmDialog::new().variant(Variant::Info);
        dialog.open();
        assert_eq!(dialog.update(Message::Cancel), Event::Closed);
        assert!(!dialog.is_open());
    }

    #[test]
    fn confirm_outside_open_phase_is_ignored() {
        let mut dialog = ConfirmDialog::new();
        assert!(!dialog.confirm());
        dialog.finish();
        assert_eq!(dialog.phase(), Phase::Closed);
    }

    #[test]
    fn open_does_not_interrupt_processing() {
        let mut dialog = ConfirmDialog::new();
        dialog.open();
        dialog.confirm();
        dialog.open();
        assert!(dialog.is_processing());
    }

    #[test]
    fn custom_labels_are_kept() {
        let dialog = ConfirmDialog::new()
            .title("Delete project?")
            .confirm_label("Delete")
            .cancel_label("Keep");
        assert_eq!(dialog.confirm_button_label(), "Delete");
        assert_eq!(dialog.cancel_label, "Keep");
        assert_eq!(dialog.title, "Delete project?");
    }
}
