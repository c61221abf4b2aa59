// SPDX-License-Identifier: MPL-2.0
//! Message handling for the demo application.

use super::{notify, App, Message, MIN_PASSWORD_LEN};
use crate::ui::fields::FieldMessage;
use crate::ui::notifications::{Kind, ToastOptions};
use crate::ui::widgets::confirm_dialog::Event as DialogEvent;
use crate::ui::widgets::Hover;
use iced::Task;
use std::time::Duration;
use tracing::{debug, info, warn};

/// How long the simulated delete takes.
const SIMULATED_WORK: Duration = Duration::from_millis(1500);

impl App {
    pub(super) fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::Tick(_) => {
                // Redraw only; timers already changed the state.
            }
            Message::Toast(toast_message) => toast_message.apply(&self.center),
            Message::ShowToast { kind, anchor } => {
                self.center.enqueue(
                    sample_text(kind),
                    kind,
                    ToastOptions::new().anchor(anchor),
                );
            }
            Message::ShowDefaultToast => {
                notify(Kind::Info, "Shown with the configured anchor and duration");
            }
            Message::ShowStickyToast(anchor) => {
                self.center.enqueue(
                    "This one stays until you close it",
                    Kind::Info,
                    ToastOptions::new().anchor(anchor).sticky(),
                );
            }
            Message::ClearToasts => self.center.clear(),
            Message::Sidebar(sidebar_message) => {
                if self.sidebar.update(sidebar_message) {
                    self.persist_sidebar();
                }
            }
            Message::Name(field_message) => {
                self.name.update(field_message);
            }
            Message::Password(field_message) => {
                self.password.update(field_message);
            }
            Message::Bio(field_message) => {
                self.bio.update(field_message);
            }
            Message::Role(select_message) => {
                self.role.update(select_message);
            }
            Message::Tags(select_message) => {
                self.tags.update(select_message);
            }
            Message::RoleHovered(hovered) => self.role_hover = Hover(hovered),
            Message::TagsHovered(hovered) => self.tags_hover = Hover(hovered),
            Message::CursorMoved(position) => self.cursor = position,
            Message::PointerPressed => {
                self.role.pointer_pressed(self.cursor, &self.role_hover);
                self.tags.pointer_pressed(self.cursor, &self.tags_hover);
                let footer = self.sidebar.footer_hover();
                self.sidebar.pointer_pressed(self.cursor, &footer);
            }
            Message::Validate => self.validate(),
            Message::OpenDialog => self.dialog.open(),
            Message::Dialog(dialog_message) => match self.dialog.update(dialog_message) {
                DialogEvent::Confirmed => {
                    info!("delete confirmed");
                    return Task::perform(tokio::time::sleep(SIMULATED_WORK), |()| {
                        Message::DeleteFinished
                    });
                }
                DialogEvent::Closed => notify(Kind::Info, "Nothing was deleted"),
                DialogEvent::None => {}
            },
            Message::DeleteFinished => {
                self.dialog.finish();
                self.deleted += 1;
                notify(Kind::Success, "Project deleted");
            }
        }
        Task::none()
    }

    /// Writes the sidebar into the state store and saves it.
    fn persist_sidebar(&mut self) {
        if let Err(err) = self.sidebar.persist(&mut self.store) {
            warn!(error = %err, "could not encode sidebar state");
            notify(Kind::Warning, err.to_string());
            return;
        }
        if let Some(warning) = self.store.save() {
            notify(Kind::Warning, warning);
        }
    }

    /// Checks the form. Problems show next to their field and hide on their own.
    fn validate(&mut self) {
        let mut problems = 0;

        if self.name.value().trim().is_empty() {
            self.name.set_error(Some("Name is required"));
            problems += 1;
        } else {
            self.name.set_error(None::<FieldMessage>);
        }

        if self.password.value().chars().count() < MIN_PASSWORD_LEN {
            self.password.set_error(Some(FieldMessage::Structured {
                message: format!("Use at least {MIN_PASSWORD_LEN} characters"),
            }));
            problems += 1;
        } else {
            self.password.set_error(None::<FieldMessage>);
        }

        if self.role.value().is_none() {
            self.role.set_error(Some("Pick a role"));
            problems += 1;
        } else {
            self.role.set_error(None::<FieldMessage>);
        }

        if self.tags.values().is_empty() {
            self.tags.set_error(Some("Choose at least one tag"));
            problems += 1;
        } else {
            self.tags.set_error(None::<FieldMessage>);
        }

        debug!(problems, "form validated");
        if problems == 0 {
            notify(Kind::Success, "Profile saved");
        }
    }
}

fn sample_text(kind: Kind) -> &'static str {
    match kind {
        Kind::Success => "Changes saved",
        Kind::Error => "Something went wrong",
        Kind::Info => "A new version is available",
        Kind::Warning => "Disk space is running low",
    }
}
