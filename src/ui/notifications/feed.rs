// SPDX-License-Identifier: MPL-2.0
//! Live per-partition views of the notification registry.

use super::notification::{Anchor, Notification};
use futures_util::stream::{self, Stream, StreamExt};
use tokio::sync::watch;

/// Subscription to one anchor partition.
///
/// Every membership change (enqueue, expiry, dismissal) publishes a new
/// snapshot. A subscriber that falls behind only sees the latest snapshot,
/// which is all a renderer needs. Dropping the feed unsubscribes.
#[derive(Debug)]
pub struct PartitionFeed {
    anchor: Anchor,
    receiver: watch::Receiver<Vec<Notification>>,
}

impl PartitionFeed {
    pub(crate) fn new(anchor: Anchor, receiver: watch::Receiver<Vec<Notification>>) -> Self {
        Self { anchor, receiver }
    }

    #[must_use]
    pub fn anchor(&self) -> Anchor {
        self.anchor
    }

    /// Latest snapshot, oldest notification first.
    #[must_use]
    pub fn current(&self) -> Vec<Notification> {
        self.receiver.borrow().clone()
    }

    /// Returns whether a snapshot newer than the last one taken through
    /// [`changed`](Self::changed) is available.
    #[must_use]
    pub fn has_changed(&self) -> bool {
        self.receiver.has_changed().unwrap_or(false)
    }

    /// Waits for the next membership change and returns the new snapshot.
    ///
    /// Returns `None` once the center has been dropped.
    pub async fn changed(&mut self) -> Option<Vec<Notification>> {
        self.receiver.changed().await.ok()?;
        Some(self.receiver.borrow_and_update().clone())
    }

    /// Starts an independent subscriber on the same partition, positioned at
    /// the current snapshot.
    #[must_use]
    pub fn restart(&self) -> Self {
        let mut receiver = self.receiver.clone();
        receiver.borrow_and_update();
        Self::new(self.anchor, receiver)
    }

    /// Turns the feed into a stream that yields the current snapshot first and
    /// then one snapshot per change, ending when the center is dropped.
    pub fn into_stream(mut self) -> impl Stream<Item = Vec<Notification>> + Send {
        let first = self.receiver.borrow_and_update().clone();
        stream::once(async move { first }).chain(stream::unfold(self, |mut feed| async move {
            let snapshot = feed.changed().await?;
            Some((snapshot, feed))
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::timer::ManualScheduler;
    use crate::ui::notifications::{Kind, NotificationCenter, ToastOptions};
    use std::sync::Arc;
    use std::time::Duration;

    fn messages(snapshot: &[Notification]) -> Vec<&str> {
        snapshot.iter().map(Notification::message).collect()
    }

    #[tokio::test]
    async fn changed_yields_each_mutation() {
        let scheduler = Arc::new(ManualScheduler::new());
        let center = NotificationCenter::new(scheduler.clone());
        let mut feed = center.subscribe(Anchor::TopLeft);

        let id = center.enqueue("A", Kind::Info, ToastOptions::default());
        assert_eq!(messages(&feed.changed().await.expect("open")), vec!["A"]);

        center.dismiss(id);
        assert!(feed.changed().await.expect("open").is_empty());
    }

    #[tokio::test]
    async fn changed_returns_none_after_center_drop() {
        let scheduler = Arc::new(ManualScheduler::new());
        let center = NotificationCenter::new(scheduler);
        let mut feed = center.subscribe(Anchor::BottomLeft);

        drop(center);
        assert!(feed.changed().await.is_none());
    }

    #[tokio::test]
    async fn stream_starts_with_current_snapshot() {
        let scheduler = Arc::new(ManualScheduler::new());
        let center = NotificationCenter::new(scheduler.clone());
        center.enqueue(
            "first",
            Kind::Info,
            ToastOptions::new().duration(Duration::from_millis(100)),
        );

        let mut stream = Box::pin(center.subscribe(Anchor::TopLeft).into_stream());
        assert_eq!(messages(&stream.next().await.expect("snapshot")), vec!["first"]);

        scheduler.advance(Duration::from_millis(100));
        assert!(stream.next().await.expect("snapshot").is_empty());

        drop(center);
        assert!(stream.next().await.is_none());
    }

    #[test]
    fn restart_is_positioned_at_latest_snapshot() {
        let scheduler = Arc::new(ManualScheduler::new());
        let center = NotificationCenter::new(scheduler);
        let feed = center.subscribe(Anchor::TopLeft);

        center.enqueue("A", Kind::Info, ToastOptions::default());
        assert!(feed.has_changed());

        let fresh = feed.restart();
        assert!(!fresh.has_changed());
        assert_eq!(messages(&fresh.current()), vec!["A"]);
        assert_eq!(fresh.anchor(), Anchor::TopLeft);
    }
}
