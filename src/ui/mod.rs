// SPDX-License-Identifier: MPL-2.0
//! User interface components and state management.
//!
//! Components follow the Elm-style "state down, messages up" pattern: plain
//! state, a `Message` enum, `update` and `view`.
//!
//! - [`notifications`] - Toast notification system for user feedback
//! - [`fields`] - Messages that hide themselves after a delay
//! - [`widgets`] - Dropdowns, confirmation dialog, text fields, sidebar
//! - [`styles`] - Centralized styling (buttons, containers, text)
//! - [`design_tokens`] - Design system constants (colors, spacing, sizing)

pub mod design_tokens;
pub mod fields;
pub mod notifications;
pub mod styles;
pub mod widgets;
