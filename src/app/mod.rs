// SPDX-License-Identifier: MPL-2.0
//! Demo application wiring the notification center and the form components.
//!
//! The `App` struct owns the one [`NotificationCenter`] of the process and
//! makes it current for the UI thread, so any code reached from `update` can
//! raise a toast through [`notifications::current`].

mod message;
pub mod paths;
pub mod persisted_state;
mod subscription;
mod update;
mod view;

pub use message::{Flags, Message};

use crate::config::Config;
use crate::timer::Scheduler;
use crate::ui::notifications::{self, EnterGuard, Kind, NotificationCenter, ToastOptions};
use crate::ui::widgets::{
    ConfirmDialog, Hover, MultiSelect, SelectOption, Sidebar, SidebarItem, SingleSelect, TextField,
};
use iced::{window, Point, Subscription, Task, Theme};
use persisted_state::StateStore;
use std::fmt;
use std::sync::Arc;
use tracing::{info, warn};

pub const WINDOW_DEFAULT_WIDTH: u32 = 1120;
pub const WINDOW_DEFAULT_HEIGHT: u32 = 760;
pub const MIN_WINDOW_WIDTH: u32 = 720;
pub const MIN_WINDOW_HEIGHT: u32 = 520;

const APP_TITLE: &str = "Grimoire";
const MIN_PASSWORD_LEN: usize = 8;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    Viewer,
    Editor,
    Admin,
}

impl Role {
    pub const ALL: [Role; 3] = [Role::Viewer, Role::Editor, Role::Admin];

    fn label(self) -> &'static str {
        match self {
            Role::Viewer => "Viewer",
            Role::Editor => "Editor",
            Role::Admin => "Administrator",
        }
    }

    fn options() -> Vec<SelectOption<Role>> {
        Self::ALL
            .into_iter()
            .map(|role| SelectOption::new(role, role.label()))
            .collect()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tag {
    Frontend,
    Backend,
    Design,
    Docs,
    Ops,
}

impl Tag {
    pub const ALL: [Tag; 5] = [Tag::Frontend, Tag::Backend, Tag::Design, Tag::Docs, Tag::Ops];

    fn label(self) -> &'static str {
        match self {
            Tag::Frontend => "Frontend",
            Tag::Backend => "Backend",
            Tag::Design => "Design",
            Tag::Docs => "Documentation",
            Tag::Ops => "Operations",
        }
    }

    fn options() -> Vec<SelectOption<Tag>> {
        Self::ALL
            .into_iter()
            .map(|tag| SelectOption::new(tag, tag.label()))
            .collect()
    }
}

/// Pages reachable from the sidebar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Page {
    Toasts,
    Forms,
    Dialog,
}

impl Page {
    pub const ALL: [Page; 3] = [Page::Toasts, Page::Forms, Page::Dialog];

    #[must_use]
    pub fn key(self) -> &'static str {
        match self {
            Page::Toasts => "toasts",
            Page::Forms => "forms",
            Page::Dialog => "dialog",
        }
    }

    #[must_use]
    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|page| page.key() == key)
    }

    #[must_use]
    pub fn title(self) -> &'static str {
        match self {
            Page::Toasts => "Notifications",
            Page::Forms => "Forms",
            Page::Dialog => "Confirmation",
        }
    }

    fn glyph(self) -> &'static str {
        match self {
            Page::Toasts => "🔔",
            Page::Forms => "✎",
            Page::Dialog => "⚠",
        }
    }

    fn sidebar_items() -> Vec<SidebarItem> {
        Self::ALL
            .into_iter()
            .map(|page| SidebarItem::new(page.key(), page.title()).glyph(page.glyph()))
            .collect()
    }
}

/// Root iced state for the demo window.
pub struct App {
    center: NotificationCenter,
    config: Config,
    store: StateStore,
    sidebar: Sidebar,
    name: TextField,
    password: TextField,
    bio: TextField,
    role: SingleSelect<Role>,
    tags: MultiSelect<Tag>,
    role_hover: Hover,
    tags_hover: Hover,
    cursor: Point,
    dialog: ConfirmDialog,
    deleted: u32,
    /// Keeps `center` current for the UI thread. Declared last so it is
    /// released after the components that might still raise toasts.
    _scope: EnterGuard,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("page", &self.page())
            .field("active_toasts", &self.center.active_count())
            .field("sidebar", &self.sidebar.state())
            .field("dialog", &self.dialog.phase())
            .finish_non_exhaustive()
    }
}

/// Builds the window settings.
pub fn window_settings() -> window::Settings {
    window::Settings {
        size: iced::Size::new(WINDOW_DEFAULT_WIDTH as f32, WINDOW_DEFAULT_HEIGHT as f32),
        min_size: Some(iced::Size::new(
            MIN_WINDOW_WIDTH as f32,
            MIN_WINDOW_HEIGHT as f32,
        )),
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    // iced 0.14 wants an `Fn` boot closure; the flags are consumed once.
    let boot_state = RefCell::new(Some(flags));
    let boot = move || {
        let flags = boot_state
            .borrow_mut()
            .take()
            .expect("Boot function called more than once");
        App::new(flags)
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

impl App {
    /// Builds the state and raises a warning toast for every startup problem.
    fn new(flags: Flags) -> (Self, Task<Message>) {
        let Flags {
            config,
            config_warning,
            scheduler,
            data_dir,
        } = flags;

        let (store, state_warning) = StateStore::load_from(data_dir);
        let app = Self::with_store(config, scheduler, store);
        for warning in [config_warning, state_warning].into_iter().flatten() {
            warn!(%warning, "startup problem");
            app.center
                .enqueue(warning, Kind::Warning, ToastOptions::new());
        }
        info!(page = ?app.page(), "application ready");
        (app, Task::none())
    }

    fn with_store(
        config: Config,
        scheduler: Arc<dyn Scheduler>,
        store: StateStore,
    ) -> Self {
        let center =
            NotificationCenter::with_defaults(scheduler.clone(), config.toasts.center_defaults());
        let scope = center.enter();
        let delay = config.fields.message_delay();

        let sidebar = Sidebar::new(Page::sidebar_items())
            .footer(format!("{APP_TITLE} {}", env!("CARGO_PKG_VERSION")))
            .restore(&store);

        Self {
            center,
            config,
            store,
            sidebar,
            name: TextField::text(scheduler.clone())
                .label("Name")
                .placeholder("Ada Lovelace")
                .message_delay(delay),
            password: TextField::password(scheduler.clone())
                .label("Password")
                .placeholder("At least 8 characters")
                .message_delay(delay),
            bio: TextField::multiline(scheduler.clone())
                .label("Bio")
                .placeholder("A few words about yourself")
                .message_delay(delay),
            role: SingleSelect::new(Role::options(), scheduler.clone())
                .label("Role")
                .message_delay(delay),
            tags: MultiSelect::new(Tag::options(), scheduler)
                .label("Tags")
                .message_delay(delay),
            role_hover: Hover::default(),
            tags_hover: Hover::default(),
            cursor: Point::ORIGIN,
            dialog: ConfirmDialog::new()
                .title("Delete this project?")
                .description("The project and all of its drafts will be removed.")
                .confirm_label("Delete"),
            deleted: 0,
            _scope: scope,
        }
    }

    fn title(&self) -> String {
        format!("{APP_TITLE} - {}", self.page().title())
    }

    fn theme(&self) -> Theme {
        Theme::Light
    }

    fn subscription(&self) -> Subscription<Message> {
        Subscription::batch([
            subscription::create_event_subscription(),
            subscription::create_tick_subscription(self.has_pending_timers()),
        ])
    }

    fn page(&self) -> Page {
        self.sidebar
            .active_key()
            .and_then(Page::from_key)
            .unwrap_or(Page::Toasts)
    }

    /// Whether something on screen will change without user input.
    fn has_pending_timers(&self) -> bool {
        self.center.has_notifications()
            || self.dialog.is_processing()
            || self.name.error().is_some()
            || self.password.error().is_some()
            || self.bio.error().is_some()
            || self.role.error().is_some()
            || self.tags.error().is_some()
    }
}

/// Raises a toast through whichever center is current on this thread.
fn notify(kind: Kind, message: impl Into<String>) {
    if let Err(err) = notifications::current()
        .and_then(|toasts| toasts.enqueue(message, kind, ToastOptions::new()))
    {
        warn!(error = %err, "toast dropped");
    }
}
