// SPDX-License-Identifier: MPL-2.0
use grimoire::timer::{RuntimeScheduler, Scheduler};
use grimoire::ui::fields::TransientMessageField;
use grimoire::ui::notifications::{Anchor, Kind, NotificationCenter, ToastOptions};
use std::sync::Arc;
use std::time::Duration;

fn scheduler() -> Arc<RuntimeScheduler> {
    Arc::new(RuntimeScheduler::current().expect("inside a tokio runtime"))
}

/// Lets spawned timer tasks run after the paused clock moved.
async fn settle() {
    for _ in 0..4 {
        tokio::task::yield_now().await;
    }
}

#[tokio::test(start_paused = true)]
async fn toast_expires_on_the_tokio_clock() {
    let scheduler = scheduler();
    let center = NotificationCenter::new(scheduler.clone());
    center.enqueue(
        "Saved",
        Kind::Success,
        ToastOptions::new()
            .anchor(Anchor::TopRight)
            .duration(Duration::from_millis(1000)),
    );

    tokio::time::sleep(Duration::from_millis(999)).await;
    settle().await;
    assert_eq!(center.snapshot(Anchor::TopRight).len(), 1);

    tokio::time::sleep(Duration::from_millis(2)).await;
    settle().await;
    assert!(center.snapshot(Anchor::TopRight).is_empty());
    assert_eq!(scheduler.pending_count(), 0);
}

#[tokio::test(start_paused = true)]
async fn dismissed_toast_timer_is_aborted() {
    let scheduler = scheduler();
    let center = NotificationCenter::new(scheduler.clone());
    let id = center.enqueue("bye", Kind::Info, ToastOptions::new());
    assert_eq!(scheduler.pending_count(), 1);

    center.dismiss(id);
    assert_eq!(scheduler.pending_count(), 0);

    let survivor = center.enqueue("stay", Kind::Info, ToastOptions::new().sticky());
    tokio::time::sleep(Duration::from_secs(10)).await;
    settle().await;
    assert!(center.get(survivor).is_some());
}

#[tokio::test(start_paused = true)]
async fn cancelled_timer_never_fires() {
    let scheduler = scheduler();
    let fired = Arc::new(std::sync::atomic::AtomicBool::new(false));
    let flag = Arc::clone(&fired);

    let token = scheduler.schedule_once(
        Duration::from_millis(50),
        Box::new(move || flag.store(true, std::sync::atomic::Ordering::SeqCst)),
    );
    scheduler.cancel(token);

    tokio::time::sleep(Duration::from_millis(100)).await;
    settle().await;
    assert!(!fired.load(std::sync::atomic::Ordering::SeqCst));
}

#[tokio::test(start_paused = true)]
async fn field_message_hides_on_the_tokio_clock() {
    let mut field = TransientMessageField::new(scheduler());
    field.set_message(Some("Required field"));

    tokio::time::sleep(Duration::from_millis(2999)).await;
    settle().await;
    assert_eq!(field.current_value().as_deref(), Some("Required field"));

    tokio::time::sleep(Duration::from_millis(2)).await;
    settle().await;
    assert_eq!(field.current_value(), None);
}
