// SPDX-License-Identifier: MPL-2.0
//! Core notification data structures.
//!
//! This module defines the `Notification` struct together with the `Kind`
//! and `Anchor` enums and the per-call `ToastOptions`.

use crate::ui::design_tokens::palette;
use iced::Color;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::time::{Duration, Instant};

/// Unique identifier for a notification.
///
/// Ids are assigned by the owning center in creation order and never reused,
/// so they also order notifications created at the same instant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NotificationId(u64);

impl NotificationId {
    pub(crate) fn new(raw: u64) -> Self {
        Self(raw)
    }

    /// Returns the raw id value.
    #[must_use]
    pub fn value(self) -> u64 {
        self.0
    }
}

impl fmt::Display for NotificationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "toast#{}", self.0)
    }
}

/// What a notification reports. Drives presentation only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Kind {
    /// Operation completed successfully (green).
    Success,
    /// Operation failed (red).
    Error,
    /// Informational message (blue).
    #[default]
    Info,
    /// Something needs attention but nothing failed (orange).
    Warning,
}

impl Kind {
    pub const ALL: [Kind; 4] = [Kind::Success, Kind::Error, Kind::Info, Kind::Warning];

    /// Parses a kind name, falling back to [`Kind::Info`] for anything unknown.
    #[must_use]
    pub fn parse_lossy(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "success" => Kind::Success,
            "error" => Kind::Error,
            "warning" => Kind::Warning,
            _ => Kind::Info,
        }
    }

    /// Returns the accent color for this kind.
    #[must_use]
    pub fn color(&self) -> Color {
        match self {
            Kind::Success => palette::SUCCESS_500,
            Kind::Error => palette::ERROR_500,
            Kind::Info => palette::INFO_500,
            Kind::Warning => palette::WARNING_500,
        }
    }

    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Kind::Success => "success",
            Kind::Error => "error",
            Kind::Info => "info",
            Kind::Warning => "warning",
        }
    }
}

/// Screen corner a notification is attached to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Anchor {
    #[default]
    TopLeft,
    TopRight,
    BottomLeft,
    BottomRight,
}

impl Anchor {
    pub const ALL: [Anchor; 4] = [
        Anchor::TopLeft,
        Anchor::TopRight,
        Anchor::BottomLeft,
        Anchor::BottomRight,
    ];

    /// Parses `top-left`, `top_right`, `BottomLeft`... Returns `None` for
    /// anything else.
    #[must_use]
    pub fn parse(value: &str) -> Option<Self> {
        let normalized: String = value
            .trim()
            .chars()
            .filter(|c| c.is_ascii_alphanumeric())
            .map(|c| c.to_ascii_lowercase())
            .collect();
        match normalized.as_str() {
            "topleft" => Some(Anchor::TopLeft),
            "topright" => Some(Anchor::TopRight),
            "bottomleft" => Some(Anchor::BottomLeft),
            "bottomright" => Some(Anchor::BottomRight),
            _ => None,
        }
    }

    /// Like [`parse`](Self::parse) but falls back to `default`.
    #[must_use]
    pub fn parse_lossy(value: &str, default: Anchor) -> Self {
        Self::parse(value).unwrap_or(default)
    }

    /// Position of this anchor in [`Anchor::ALL`].
    #[must_use]
    pub fn index(self) -> usize {
        match self {
            Anchor::TopLeft => 0,
            Anchor::TopRight => 1,
            Anchor::BottomLeft => 2,
            Anchor::BottomRight => 3,
        }
    }

    #[must_use]
    pub fn is_top(self) -> bool {
        matches!(self, Anchor::TopLeft | Anchor::TopRight)
    }

    #[must_use]
    pub fn is_left(self) -> bool {
        matches!(self, Anchor::TopLeft | Anchor::BottomLeft)
    }

    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Anchor::TopLeft => "top-left",
            Anchor::TopRight => "top-right",
            Anchor::BottomLeft => "bottom-left",
            Anchor::BottomRight => "bottom-right",
        }
    }
}

impl fmt::Display for Anchor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Per-call overrides for [`enqueue`](super::NotificationCenter::enqueue).
///
/// Fields left as `None` use the center defaults.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ToastOptions {
    pub anchor: Option<Anchor>,
    /// Zero keeps the notification until it is dismissed.
    pub duration: Option<Duration>,
}

impl ToastOptions {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn anchor(mut self, anchor: Anchor) -> Self {
        self.anchor = Some(anchor);
        self
    }

    #[must_use]
    pub fn duration(mut self, duration: Duration) -> Self {
        self.duration = Some(duration);
        self
    }

    /// Keeps the notification on screen until dismissed.
    #[must_use]
    pub fn sticky(self) -> Self {
        self.duration(Duration::ZERO)
    }
}

/// A notification currently held by a center.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    id: NotificationId,
    message: String,
    kind: Kind,
    anchor: Anchor,
    duration: Duration,
    created_at: Instant,
}

impl Notification {
    pub(crate) fn new(
        id: NotificationId,
        message: String,
        kind: Kind,
        anchor: Anchor,
        duration: Duration,
        created_at: Instant,
    ) -> Self {
        Self {
            id,
            message,
            kind,
            anchor,
            duration,
            created_at,
        }
    }

    #[must_use]
    pub fn id(&self) -> NotificationId {
        self.id
    }

    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }

    #[must_use]
    pub fn kind(&self) -> Kind {
        self.kind
    }

    #[must_use]
    pub fn anchor(&self) -> Anchor {
        self.anchor
    }

    /// Configured lifetime; zero when the notification never expires.
    #[must_use]
    pub fn duration(&self) -> Duration {
        self.duration
    }

    #[must_use]
    pub fn created_at(&self) -> Instant {
        self.created_at
    }

    /// Returns whether this notification removes itself.
    #[must_use]
    pub fn auto_expires(&self) -> bool {
        !self.duration.is_zero()
    }

    /// When the expiry timer fires, if there is one.
    #[must_use]
    pub fn expires_at(&self) -> Option<Instant> {
        self.auto_expires().then(|| self.created_at + self.duration)
    }
}
