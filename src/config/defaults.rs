// SPDX-License-Identifier: MPL-2.0
//! Default values for every configurable setting.
//!
//! # Categories
//!
//! - **Toasts**: default anchor and lifetime of notifications
//! - **Fields**: hide delay of transient field messages
//! - **Logging**: default tracing filter

use crate::ui::notifications::Anchor;

// ==========================================================================
// Toast Defaults
// ==========================================================================

/// Corner used when a caller does not pick one.
pub const DEFAULT_TOAST_ANCHOR: Anchor = Anchor::TopLeft;

/// Lifetime of a toast when the caller does not pick one (in milliseconds).
pub const DEFAULT_TOAST_DURATION_MS: u64 = 3500;

/// Upper bound accepted from `settings.toml` (in milliseconds).
///
/// A duration of zero is always accepted and means "until dismissed".
pub const MAX_TOAST_DURATION_MS: u64 = 600_000;

// ==========================================================================
// Field Message Defaults
// ==========================================================================

/// How long a validation message stays beside its field (in milliseconds).
pub const DEFAULT_FIELD_MESSAGE_DELAY_MS: u32 = 3000;

pub const MIN_FIELD_MESSAGE_DELAY_MS: u32 = 100;

pub const MAX_FIELD_MESSAGE_DELAY_MS: u32 = 60_000;

// ==========================================================================
// Logging Defaults
// ==========================================================================

/// Filter used when neither the CLI, `RUST_LOG` nor the config set one.
pub const DEFAULT_LOG_LEVEL: &str = "info";
