// SPDX-License-Identifier: MPL-2.0
//! Text input, password input and textarea sharing one state type.

use super::labelled;
use crate::timer::Scheduler;
use crate::ui::design_tokens::{palette, sizing, spacing, typography};
use crate::ui::fields::{FieldMessage, MessageDelay, TransientMessageField};
use crate::ui::styles;
use iced::widget::{button, text_editor, text_input, Row, Text};
use iced::{alignment::Vertical, Element, Length, Theme};
use std::fmt;
use std::sync::Arc;

/// Character shown in place of each masked character.
pub const MASK_CHAR: char = '•';

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Kind {
    #[default]
    Text,
    /// Masked until the user reveals it.
    Password,
    /// Multi-line textarea.
    Multiline,
}

#[derive(Debug, Clone)]
pub enum Message {
    /// Single-line content changed.
    Input(String),
    /// Textarea edit.
    Edit(text_editor::Action),
    /// Show/hide a password.
    ToggleReveal,
}

pub struct TextField {
    kind: Kind,
    label: Option<String>,
    placeholder: String,
    value: String,
    revealed: bool,
    disabled: bool,
    editor: Option<text_editor::Content>,
    error: TransientMessageField,
}

impl TextField {
    pub fn new(kind: Kind, scheduler: Arc<dyn Scheduler>) -> Self {
        Self {
            kind,
            label: None,
            placeholder: String::new(),
            value: String::new(),
            revealed: false,
            disabled: false,
            editor: (kind == Kind::Multiline).then(text_editor::Content::new),
            error: TransientMessageField::new(scheduler),
        }
    }

    pub fn text(scheduler: Arc<dyn Scheduler>) -> Self {
        Self::new(Kind::Text, scheduler)
    }

    pub fn password(scheduler: Arc<dyn Scheduler>) -> Self {
        Self::new(Kind::Password, scheduler)
    }

    pub fn multiline(scheduler: Arc<dyn Scheduler>) -> Self {
        Self::new(Kind::Multiline, scheduler)
    }

    #[must_use]
    pub fn label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    #[must_use]
    pub fn placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = placeholder.into();
        self
    }

    #[must_use]
    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    #[must_use]
    pub fn message_delay(mut self, delay: MessageDelay) -> Self {
        self.error.set_delay(delay);
        self
    }

    #[must_use]
    pub fn kind(&self) -> Kind {
        self.kind
    }

    #[must_use]
    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn set_value(&mut self, value: impl Into<String>) {
        self.value = value.into();
        if let Some(editor) = self.editor.as_mut() {
            *editor = text_editor::Content::with_text(&self.value);
        }
    }

    #[must_use]
    pub fn is_disabled(&self) -> bool {
        self.disabled
    }

    pub fn set_disabled(&mut self, disabled: bool) {
        self.disabled = disabled;
    }

    /// Whether the value is currently hidden behind [`MASK_CHAR`].
    #[must_use]
    pub fn is_masked(&self) -> bool {
        self.kind == Kind::Password && !self.revealed
    }

    /// Reveals or hides a password. Other kinds ignore it.
    pub fn toggle_reveal(&mut self) {
        if self.kind == Kind::Password {
            self.revealed = !self.revealed;
        }
    }

    /// The value as it should be displayed.
    #[must_use]
    pub fn display_value(&self) -> String {
        if self.is_masked() {
            self.value.chars().map(|_| MASK_CHAR).collect()
        } else {
            self.value.clone()
        }
    }

    pub fn set_error<M: Into<FieldMessage>>(&mut self, message: Option<M>) {
        self.error.set_message(message);
    }

    #[must_use]
    pub fn error(&self) -> Option<String> {
        self.error.current_value()
    }

    /// Applies a message. Returns `true` when the value changed.
    pub fn update(&mut self, message: Message) -> bool {
        if self.disabled {
            return false;
        }
        match message {
            Message::Input(value) => {
                let changed = value != self.value;
                self.value = value;
                changed
            }
            Message::Edit(action) => {
                let Some(editor) = self.editor.as_mut() else {
                    return false;
                };
                let is_edit = action.is_edit();
                editor.perform(action);
                if is_edit {
                    self.value = editor.text();
                }
                is_edit
            }
            Message::ToggleReveal => {
                self.toggle_reveal();
                false
            }
        }
    }

    pub fn view(&self) -> Element<'_, Message> {
        let has_error = self.error.is_visible();

        let input: Element<'_, Message> = match (&self.editor, self.kind) {
            (Some(content), Kind::Multiline) => {
                let mut editor = text_editor(content)
                    .placeholder(self.placeholder.as_str())
                    .height(sizing::TEXTAREA_HEIGHT)
                    .size(typography::BODY)
                    .padding(spacing::XS)
                    .style(move |theme: &Theme, status| {
                        let mut style = text_editor::default(theme, status);
                        if has_error {
                            style.border.color = palette::ERROR_500;
                        }
                        style
                    });
                if !self.disabled {
                    editor = editor.on_action(Message::Edit);
                }
                editor.into()
            }
            _ => {
                let mut input = text_input(&self.placeholder, &self.value)
                    .secure(self.is_masked())
                    .size(typography::BODY)
                    .padding([spacing::XS, spacing::MD])
                    .width(Length::Fill)
                    .style(move |theme: &Theme, status| {
                        let mut style = text_input::default(theme, status);
                        if has_error {
                            style.border.color = palette::ERROR_500;
                        }
                        style
                    });
                if !self.disabled {
                    input = input.on_input(Message::Input);
                }

                if self.kind == Kind::Password {
                    let reveal = button(
                        Text::new(if self.revealed { "Hide" } else { "Show" })
                            .size(typography::CAPTION),
                    )
                    .padding(spacing::XS)
                    .style(styles::button::ghost)
                    .on_press_maybe((!self.disabled).then_some(Message::ToggleReveal));

                    Row::new()
                        .spacing(spacing::XXS)
                        .align_y(Vertical::Center)
                        .push(input)
                        .push(reveal)
                        .into()
                } else {
                    input.into()
                }
            }
        };

        labelled(self.label.as_deref(), input, self.error())
    }
}

impl fmt::Debug for TextField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TextField")
            .field("kind", &self.kind)
            .field("label", &self.label)
            .field("value", &self.display_value())
            .field("disabled", &self.disabled)
            .field("error", &self.error)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::timer::ManualScheduler;
    use std::time::Duration;

    fn clock() -> Arc<ManualScheduler> {
        Arc::new(ManualScheduler::new())
    }

    #[test]
    fn input_updates_value() {
        let mut field = TextField::text(clock());
        assert!(field.update(Message::Input("ada".into())));
        assert!(!field.update(Message::Input("ada".into())));
        assert_eq!(field.value(), "ada");
    }

    #[test]
    fn password_is_masked_until_revealed() {
        let mut field = TextField::password(clock());
        field.set_value("hunter2");
        assert!(field.is_masked());
        assert_eq!(field.display_value(), "•••••••");

        field.update(Message::ToggleReveal);
        assert!(!field.is_masked());
        assert_eq!(field.display_value(), "hunter2");
    }

    #[test]
    fn reveal_is_ignored_for_plain_text() {
        let mut field = TextField::text(clock());
        field.toggle_reveal();
        assert!(!field.is_masked());
    }

    #[test]
    fn disabled_field_ignores_input() {
        let mut field = TextField::text(clock()).disabled(true);
        assert!(!field.update(Message::Input("x".into())));
        assert_eq!(field.value(), "");
    }

    #[test]
    fn multiline_set_value_reaches_editor() {
        let mut field = TextField::multiline(clock());
        field.set_value("line one\nline two");
        assert_eq!(field.value(), "line one\nline two");
        assert!(field.editor.is_some());
    }

    #[test]
    fn error_message_auto_hides() {
        let scheduler = clock();
        let mut field = TextField::text(scheduler.clone());
        field.set_error(Some("Required"));
        assert_eq!(field.error().as_deref(), Some("Required"));

        scheduler.advance(Duration::from_millis(1500));
        field.set_error(Some("Still required"));
        scheduler.advance(Duration::from_millis(2999));
        assert_eq!(field.error().as_deref(), Some("Still required"));

        scheduler.advance(Duration::from_millis(1));
        assert_eq!(field.error(), None);
    }
}
