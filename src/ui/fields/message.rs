// SPDX-License-Identifier: MPL-2.0
//! Validation messages handed to form controls.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A message a form control is asked to display.
///
/// Validation layers report either bare text or a structured error carrying a
/// `message` field; both render the same way.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FieldMessage {
    PlainText(String),
    Structured { message: String },
}

impl FieldMessage {
    /// The text to display.
    #[must_use]
    pub fn text(&self) -> &str {
        match self {
            FieldMessage::PlainText(text) => text,
            FieldMessage::Structured { message } => message,
        }
    }

    #[must_use]
    pub fn into_text(self) -> String {
        match self {
            FieldMessage::PlainText(text) => text,
            FieldMessage::Structured { message } => message,
        }
    }

    /// Empty messages mean "nothing to show".
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.text().is_empty()
    }
}

impl From<String> for FieldMessage {
    fn from(text: String) -> Self {
        FieldMessage::PlainText(text)
    }
}

impl From<&str> for FieldMessage {
    fn from(text: &str) -> Self {
        FieldMessage::PlainText(text.to_owned())
    }
}

impl fmt::Display for FieldMessage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.text())
    }
}
