// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the demo application.

use crate::config::Config;
use crate::timer::Scheduler;
use crate::ui::notifications::{Anchor, Kind, ToastMessage};
use crate::ui::widgets::{confirm_dialog, dropdown, sidebar, text_field};
use iced::Point;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Instant;

use super::{Role, Tag};

/// Top-level messages consumed by `App::update`. The variants forward
/// component messages while keeping a single update entrypoint.
#[derive(Debug, Clone)]
pub enum Message {
    /// Periodic redraw while something is about to hide itself.
    Tick(Instant),
    Toast(ToastMessage),
    ShowToast {
        kind: Kind,
        anchor: Anchor,
    },
    /// Toast with the configured default anchor and duration.
    ShowDefaultToast,
    /// Toast that stays until dismissed.
    ShowStickyToast(Anchor),
    ClearToasts,
    Sidebar(sidebar::Message),
    Name(text_field::Message),
    Password(text_field::Message),
    Bio(text_field::Message),
    Role(dropdown::Message<Role>),
    Tags(dropdown::Message<Tag>),
    /// Pointer entered or left a dropdown root.
    RoleHovered(bool),
    TagsHovered(bool),
    CursorMoved(Point),
    /// Left button pressed anywhere in the window.
    PointerPressed,
    Validate,
    OpenDialog,
    Dialog(confirm_dialog::Message),
    /// The confirmed action completed.
    DeleteFinished,
}

/// Runtime values prepared by `main` before the window opens.
#[derive(Debug)]
pub struct Flags {
    pub config: Config,
    /// Problem met while reading `settings.toml`, shown as a warning toast.
    pub config_warning: Option<String>,
    /// Clock driving toast expiry and field messages.
    pub scheduler: Arc<dyn Scheduler>,
    /// Explicit data directory for `state.cbor`; `None` uses the usual resolution.
    pub data_dir: Option<PathBuf>,
}
