// SPDX-License-Identifier: MPL-2.0
//! Toast notification system for user feedback.
//!
//! This module provides a non-intrusive notification system following
//! toast/snackbar UX patterns. Notifications appear temporarily in one of four
//! screen corners to inform users about actions without blocking interaction.
//!
//! # Components
//!
//! - [`notification`] - `Notification` data plus `Kind`, `Anchor`, `ToastOptions`
//! - [`center`] - `NotificationCenter`, the single owner of active notifications
//! - [`feed`] - `PartitionFeed`, a live view of one anchor partition
//! - [`context`] - thread-scoped lookup of the current center
//! - [`toast`] - iced widgets rendering partitions
//!
//! # Usage
//!
//! ```
//! use grimoire::timer::ManualScheduler;
//! use grimoire::ui::notifications::{Anchor, Kind, NotificationCenter, ToastOptions};
//! use std::sync::Arc;
//! use std::time::Duration;
//!
//! let scheduler = Arc::new(ManualScheduler::new());
//! let center = NotificationCenter::new(scheduler.clone());
//!
//! center.enqueue(
//!     "Saved",
//!     Kind::Success,
//!     ToastOptions::new().anchor(Anchor::TopRight).duration(Duration::from_millis(1000)),
//! );
//! assert_eq!(center.snapshot(Anchor::TopRight).len(), 1);
//!
//! scheduler.advance(Duration::from_millis(1000));
//! assert!(center.snapshot(Anchor::TopRight).is_empty());
//! ```
//!
//! # Design Considerations
//!
//! - Default duration: 3.5s; a zero duration means manual dismiss only
//! - Default anchor: top-left
//! - One expiry timer per notification, no polling loop
//! - Ordering inside a partition is insertion order

pub mod center;
pub mod context;
pub mod feed;
pub mod notification;
pub mod toast;

pub use center::{CenterDefaults, NotificationCenter, Toasts};
pub use context::{current, EnterGuard};
pub use feed::PartitionFeed;
pub use notification::{Anchor, Kind, Notification, NotificationId, ToastOptions};
pub use toast::{Message as ToastMessage, Toast};
