// SPDX-License-Identifier: MPL-2.0
//! Notification lifecycle management.
//!
//! The `NotificationCenter` is the single owner of active notifications. It
//! assigns ids, keeps one partition per [`Anchor`], schedules one expiry timer
//! per notification and publishes a fresh snapshot of a partition every time
//! its membership changes. Application code talks to it through the center
//! itself or through cloneable [`Toasts`] handles.

use super::context::{self, EnterGuard};
use super::feed::PartitionFeed;
use super::notification::{Anchor, Kind, Notification, NotificationId, ToastOptions};
use crate::config::{DEFAULT_TOAST_ANCHOR, DEFAULT_TOAST_DURATION_MS};
use crate::error::{Error, Result};
use crate::timer::{Scheduler, TimerToken};
use parking_lot::Mutex;
use std::collections::HashMap;
use std::fmt;
use std::sync::{Arc, Weak};
use std::time::Duration;
use tokio::sync::watch;
use tracing::debug;

/// Values used when `ToastOptions` leaves a field unset.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CenterDefaults {
    pub anchor: Anchor,
    pub duration: Duration,
}

impl Default for CenterDefaults {
    fn default() -> Self {
        Self {
            anchor: DEFAULT_TOAST_ANCHOR,
            duration: Duration::from_millis(DEFAULT_TOAST_DURATION_MS),
        }
    }
}

/// Process-wide registry of transient notifications.
///
/// Dropping the center cancels every pending expiry timer and closes all
/// partition feeds; outstanding [`Toasts`] handles start returning
/// [`Error::CenterUnavailable`].
pub struct NotificationCenter {
    shared: Arc<Shared>,
}

struct Shared {
    registry: Mutex<Registry>,
    scheduler: Arc<dyn Scheduler>,
    defaults: CenterDefaults,
    feeds: [watch::Sender<Vec<Notification>>; 4],
}

#[derive(Default)]
struct Registry {
    next_id: u64,
    partitions: [Vec<Notification>; 4],
    locations: HashMap<NotificationId, Anchor>,
    timers: HashMap<NotificationId, TimerToken>,
}

impl NotificationCenter {
    /// Creates a center with the default anchor (top-left) and duration (3.5s).
    #[must_use]
    pub fn new(scheduler: Arc<dyn Scheduler>) -> Self {
        Self::with_defaults(scheduler, CenterDefaults::default())
    }

    #[must_use]
    pub fn with_defaults(scheduler: Arc<dyn Scheduler>, defaults: CenterDefaults) -> Self {
        Self {
            shared: Arc::new(Shared {
                registry: Mutex::new(Registry::default()),
                scheduler,
                defaults,
                feeds: std::array::from_fn(|_| watch::channel(Vec::new()).0),
            }),
        }
    }

    #[must_use]
    pub fn defaults(&self) -> CenterDefaults {
        self.shared.defaults
    }

    /// Adds a notification to the tail of its anchor partition.
    ///
    /// Unset options fall back to the center defaults. A non-zero duration
    /// schedules exactly one expiry timer; a zero duration keeps the
    /// notification until [`dismiss`](Self::dismiss) is called.
    pub fn enqueue(
        &self,
        message: impl Into<String>,
        kind: Kind,
        options: ToastOptions,
    ) -> NotificationId {
        self.shared.enqueue(message.into(), kind, options)
    }

    /// Removes a notification and cancels its expiry timer.
    ///
    /// Returns `true` if the notification was still active. Dismissing an
    /// unknown or already removed id does nothing.
    pub fn dismiss(&self, id: NotificationId) -> bool {
        self.shared.dismiss(id)
    }

    /// Subscribes to the live contents of one partition.
    #[must_use]
    pub fn subscribe(&self, anchor: Anchor) -> PartitionFeed {
        self.shared.subscribe(anchor)
    }

    /// Returns the notifications currently in `anchor`'s partition, oldest first.
    #[must_use]
    pub fn snapshot(&self, anchor: Anchor) -> Vec<Notification> {
        self.shared.registry.lock().partitions[anchor.index()].clone()
    }

    /// Looks up an active notification by id.
    #[must_use]
    pub fn get(&self, id: NotificationId) -> Option<Notification> {
        let registry = self.shared.registry.lock();
        let anchor = registry.locations.get(&id)?;
        registry.partitions[anchor.index()]
            .iter()
            .find(|n| n.id() == id)
            .cloned()
    }

    /// Number of active notifications across all partitions.
    #[must_use]
    pub fn active_count(&self) -> usize {
        self.shared.registry.lock().locations.len()
    }

    /// Number of expiry timers still pending.
    #[must_use]
    pub fn pending_timers(&self) -> usize {
        self.shared.registry.lock().timers.len()
    }

    #[must_use]
    pub fn has_notifications(&self) -> bool {
        self.active_count() > 0
    }

    /// Dismisses every notification and cancels every pending timer.
    pub fn clear(&self) {
        self.shared.clear();
    }

    /// Returns a cloneable handle for application code.
    #[must_use]
    pub fn toasts(&self) -> Toasts {
        Toasts {
            shared: Arc::downgrade(&self.shared),
        }
    }

    /// Makes this center the current one for the calling thread until the
    /// returned guard is dropped. See [`current`](super::current).
    #[must_use = "the center stops being current when the guard is dropped"]
    pub fn enter(&self) -> EnterGuard {
        context::enter(self.toasts())
    }
}

impl fmt::Debug for NotificationCenter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NotificationCenter")
            .field("defaults", &self.shared.defaults)
            .field("active", &self.active_count())
            .field("scheduler", &self.shared.scheduler)
            .finish()
    }
}

impl Shared {
    fn enqueue(self: &Arc<Self>, message: String, kind: Kind, options: ToastOptions) -> NotificationId {
        let anchor = options.anchor.unwrap_or(self.defaults.anchor);
        let duration = options.duration.unwrap_or(self.defaults.duration);

        if message.is_empty() {
            debug!("enqueueing a notification with an empty message");
        }

        let mut registry = self.registry.lock();
        let id = NotificationId::new(registry.next_id);
        registry.next_id += 1;

        let notification = Notification::new(
            id,
            message,
            kind,
            anchor,
            duration,
            self.scheduler.now(),
        );
        registry.partitions[anchor.index()].push(notification);
        registry.locations.insert(id, anchor);

        if !duration.is_zero() {
            let center = Arc::downgrade(self);
            let token = self.scheduler.schedule_once(
                duration,
                Box::new(move || {
                    if let Some(shared) = center.upgrade() {
                        shared.expire(id);
                    }
                }),
            );
            registry.timers.insert(id, token);
        }

        self.publish(&registry, anchor);
        debug!(%id, %anchor, kind = kind.as_str(), ?duration, "notification enqueued");
        id
    }

    fn dismiss(&self, id: NotificationId) -> bool {
        let mut registry = self.registry.lock();
        let Some(anchor) = Self::remove(&mut registry, id) else {
            return false;
        };

        if let Some(token) = registry.timers.remove(&id) {
            self.scheduler.cancel(token);
        }

        self.publish(&registry, anchor);
        debug!(%id, %anchor, "notification dismissed");
        true
    }

    /// Timer path: the timer has already fired, so there is nothing to cancel.
    fn expire(&self, id: NotificationId) {
        let mut registry = self.registry.lock();
        registry.timers.remove(&id);
        if let Some(anchor) = Self::remove(&mut registry, id) {
            self.publish(&registry, anchor);
            debug!(%id, %anchor, "notification expired");
        }
    }

    fn clear(&self) {
        let mut registry = self.registry.lock();
        for (_, token) in registry.timers.drain() {
            self.scheduler.cancel(token);
        }
        registry.locations.clear();

        for anchor in Anchor::ALL {
            let partition = &mut registry.partitions[anchor.index()];
            if !partition.is_empty() {
                partition.clear();
                self.publish(&registry, anchor);
            }
        }
        debug!("all notifications cleared");
    }

    fn subscribe(&self, anchor: Anchor) -> PartitionFeed {
        PartitionFeed::new(anchor, self.feeds[anchor.index()].subscribe())
    }

    fn remove(registry: &mut Registry, id: NotificationId) -> Option<Anchor> {
        let anchor = registry.locations.remove(&id)?;
        let partition = &mut registry.partitions[anchor.index()];
        if let Some(position) = partition.iter().position(|n| n.id() == id) {
            partition.remove(position);
        }
        Some(anchor)
    }

    /// Called with the registry locked so feeds observe mutations in order.
    fn publish(&self, registry: &Registry, anchor: Anchor) {
        self.feeds[anchor.index()].send_replace(registry.partitions[anchor.index()].clone());
    }
}

impl Drop for Shared {
    fn drop(&mut self) {
        let registry = self.registry.get_mut();
        for (_, token) in registry.timers.drain() {
            self.scheduler.cancel(token);
        }
    }
}

/// Cloneable handle to a [`NotificationCenter`].
///
/// The handle does not keep the center alive. Every operation fails with
/// [`Error::CenterUnavailable`] once the center has been dropped.
#[derive(Clone)]
pub struct Toasts {
    shared: Weak<Shared>,
}

impl Toasts {
    fn center(&self) -> Result<Arc<Shared>> {
        self.shared.upgrade().ok_or(Error::CenterUnavailable)
    }

    /// See [`NotificationCenter::enqueue`].
    pub fn enqueue(
        &self,
        message: impl Into<String>,
        kind: Kind,
        options: ToastOptions,
    ) -> Result<NotificationId> {
        Ok(self.center()?.enqueue(message.into(), kind, options))
    }

    /// See [`NotificationCenter::dismiss`].
    pub fn dismiss(&self, id: NotificationId) -> Result<bool> {
        Ok(self.center()?.dismiss(id))
    }

    /// See [`NotificationCenter::subscribe`].
    pub fn subscribe(&self, anchor: Anchor) -> Result<PartitionFeed> {
        Ok(self.center()?.subscribe(anchor))
    }

    pub fn success(&self, message: impl Into<String>) -> Result<NotificationId> {
        self.enqueue(message, Kind::Success, ToastOptions::default())
    }

    pub fn error(&self, message: impl Into<String>) -> Result<NotificationId> {
        self.enqueue(message, Kind::Error, ToastOptions::default())
    }

    pub fn info(&self, message: impl Into<String>) -> Result<NotificationId> {
        self.enqueue(message, Kind::Info, ToastOptions::default())
    }

    pub fn warning(&self, message: impl Into<String>) -> Result<NotificationId> {
        self.enqueue(message, Kind::Warning, ToastOptions::default())
    }

    /// Returns whether the center behind this handle still exists.
    #[must_use]
    pub fn is_available(&self) -> bool {
        self.shared.strong_count() > 0
    }
}

impl fmt::Debug for Toasts {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Toasts")
            .field("available", &self.is_available())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::timer::ManualScheduler;

    fn center() -> (Arc<ManualScheduler>, NotificationCenter) {
        let scheduler = Arc::new(ManualScheduler::new());
        let center = NotificationCenter::new(scheduler.clone());
        (scheduler, center)
    }

    fn messages(center: &NotificationCenter, anchor: Anchor) -> Vec<String> {
        center
            .snapshot(anchor)
            .iter()
            .map(|n| n.message().to_string())
            .collect()
    }

    #[test]
    fn new_center_is_empty() {
        let (_, center) = center();
        assert_eq!(center.active_count(), 0);
        assert!(!center.has_notifications());
        for anchor in Anchor::ALL {
            assert!(center.snapshot(anchor).is_empty());
        }
    }

    #[test]
    fn ids_increase_and_are_never_reused() {
        let (_, center) = center();
        let first = center.enqueue("a", Kind::Info, ToastOptions::default());
        center.dismiss(first);
        let second = center.enqueue("b", Kind::Info, ToastOptions::default());
        assert!(second > first);
    }

    #[test]
    fn defaults_apply_to_unset_options() {
        let (_, center) = center();
        let id = center.enqueue("hello", Kind::default(), ToastOptions::default());
        let notification = center.get(id).expect("active");

        assert_eq!(notification.anchor(), Anchor::TopLeft);
        assert_eq!(notification.kind(), Kind::Info);
        assert_eq!(notification.duration(), Duration::from_millis(3500));
    }

    #[test]
    fn custom_defaults_are_used() {
        let scheduler = Arc::new(ManualScheduler::new());
        let center = NotificationCenter::with_defaults(
            scheduler.clone(),
            CenterDefaults {
                anchor: Anchor::BottomRight,
                duration: Duration::from_millis(250),
            },
        );
        center.enqueue("x", Kind::Info, ToastOptions::default());
        assert_eq!(messages(&center, Anchor::BottomRight), vec!["x"]);

        scheduler.advance(Duration::from_millis(250));
        assert!(!center.has_notifications());
    }

    #[test]
    fn dismiss_cancels_pending_timer() {
        let (scheduler, center) = center();
        let id = center.enqueue("x", Kind::Info, ToastOptions::default());
        assert_eq!(scheduler.pending_count(), 1);

        assert!(center.dismiss(id));
        assert_eq!(scheduler.pending_count(), 0);
        assert_eq!(center.pending_timers(), 0);
    }

    #[test]
    fn dismiss_unknown_id_is_noop() {
        let (_, center) = center();
        let id = center.enqueue("x", Kind::Info, ToastOptions::default().sticky());
        assert!(center.dismiss(id));
        assert!(!center.dismiss(id));
        assert!(!center.dismiss(NotificationId::new(999)));
    }

    #[test]
    fn sticky_notifications_schedule_no_timer() {
        let (scheduler, center) = center();
        center.enqueue("pinned", Kind::Warning, ToastOptions::new().sticky());
        assert_eq!(scheduler.pending_count(), 0);

        scheduler.advance(Duration::from_secs(3600));
        assert_eq!(center.active_count(), 1);
    }

    #[test]
    fn clear_removes_all_and_cancels_timers() {
        let (scheduler, center) = center();
        for anchor in Anchor::ALL {
            center.enqueue("x", Kind::Info, ToastOptions::new().anchor(anchor));
        }
        center.enqueue("pinned", Kind::Info, ToastOptions::new().sticky());

        center.clear();
        assert_eq!(center.active_count(), 0);
        assert_eq!(scheduler.pending_count(), 0);

        scheduler.advance(Duration::from_secs(10));
        assert_eq!(center.active_count(), 0);
    }

    #[test]
    fn dropping_center_cancels_timers() {
        let (scheduler, center) = center();
        let toasts = center.toasts();
        center.enqueue("x", Kind::Info, ToastOptions::default());
        assert_eq!(scheduler.pending_count(), 1);

        drop(center);
        assert_eq!(scheduler.pending_count(), 0);
        assert!(!toasts.is_available());
        assert_eq!(toasts.info("late"), Err(Error::CenterUnavailable));
    }

    #[test]
    fn toasts_handle_shares_the_registry() {
        let (_, center) = center();
        let toasts = center.toasts();

        let id = toasts.success("Saved").expect("center alive");
        assert_eq!(center.get(id).map(|n| n.kind()), Some(Kind::Success));
        assert_eq!(toasts.dismiss(id), Ok(true));
        assert_eq!(toasts.dismiss(id), Ok(false));
    }

    #[test]
    fn feed_sees_enqueue_and_removal() {
        let (scheduler, center) = center();
        let feed = center.subscribe(Anchor::TopRight);
        assert!(feed.current().is_empty());

        center.enqueue(
            "Saved",
            Kind::Success,
            ToastOptions::new()
                .anchor(Anchor::TopRight)
                .duration(Duration::from_millis(1000)),
        );
        assert!(feed.has_changed());
        assert_eq!(feed.current().len(), 1);

        scheduler.advance(Duration::from_millis(1000));
        assert!(feed.current().is_empty());
    }
}
