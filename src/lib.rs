// SPDX-License-Identifier: MPL-2.0
//! `grimoire` keeps the interaction state of common screen components for
//! iced applications.
//!
//! - [`ui::notifications`] queues transient toasts in four screen corners and
//!   expires each one with its own timer.
//! - [`ui::fields`] holds validation messages that hide themselves after a
//!   delay.
//! - [`ui::widgets`] provides dropdowns, a confirmation dialog, text fields
//!   and a sidebar whose state survives restarts through
//!   [`app::persisted_state::StateStore`].
//!
//! All timing goes through [`timer::Scheduler`], so the same components run
//! against tokio in the application and against a virtual clock in tests.

pub mod app;
pub mod config;
pub mod error;
pub mod logging;
pub mod timer;
pub mod ui;
