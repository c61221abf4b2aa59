// SPDX-License-Identifier: MPL-2.0
use grimoire::config::MIN_FIELD_MESSAGE_DELAY_MS;
use grimoire::timer::ManualScheduler;
use grimoire::ui::fields::{FieldMessage, MessageDelay, TransientMessageField, Visibility};
use std::sync::Arc;
use std::time::Duration;

fn field() -> (TransientMessageField, Arc<ManualScheduler>) {
    let scheduler = Arc::new(ManualScheduler::new());
    (TransientMessageField::new(scheduler.clone()), scheduler)
}

#[test]
fn required_field_message_hides_after_default_delay() {
    let (mut field, scheduler) = field();
    field.set_message(Some("Required field"));

    scheduler.advance(Duration::from_millis(2999));
    assert_eq!(field.current_value().as_deref(), Some("Required field"));

    scheduler.advance(Duration::from_millis(2));
    assert_eq!(field.current_value(), None);
    assert_eq!(field.visibility(), Visibility::Hidden);
}

#[test]
fn second_message_restarts_the_window() {
    let (mut field, scheduler) = field();
    field.set_message(Some("A"));
    scheduler.advance(Duration::from_millis(1200));
    field.set_message(Some("B"));
    assert_eq!(field.current_value().as_deref(), Some("B"));

    // Hidden exactly one delay after the second call.
    scheduler.advance(Duration::from_millis(2999));
    assert!(field.is_visible());
    scheduler.advance(Duration::from_millis(1));
    assert!(!field.is_visible());
    assert_eq!(scheduler.pending_count(), 0);
}

#[test]
fn structured_messages_display_their_text() {
    let (mut field, _) = field();
    field.set_message(Some(FieldMessage::Structured {
        message: "Too short".into(),
    }));
    assert_eq!(field.current_value().as_deref(), Some("Too short"));
}

#[test]
fn none_and_empty_hide_immediately_and_cancel_the_timer() {
    let (mut field, scheduler) = field();
    field.set_message(Some("visible"));
    field.set_message(None::<FieldMessage>);
    assert_eq!(field.visibility(), Visibility::Hidden);
    assert_eq!(scheduler.pending_count(), 0);

    field.set_message(Some("visible"));
    field.set_message(Some(""));
    assert_eq!(field.current_value(), None);
    assert_eq!(scheduler.pending_count(), 0);
}

#[test]
fn custom_delay_is_clamped_and_used() {
    let scheduler = Arc::new(ManualScheduler::new());
    let mut field = TransientMessageField::with_delay(scheduler.clone(), MessageDelay::new(10));
    assert_eq!(field.delay().value(), MIN_FIELD_MESSAGE_DELAY_MS);

    field.show("quick");
    scheduler.advance(Duration::from_millis(u64::from(MIN_FIELD_MESSAGE_DELAY_MS)));
    assert_eq!(field.current_value(), None);
}

#[test]
fn dropping_the_field_cancels_its_timer() {
    let (mut field, scheduler) = field();
    field.show("bye");
    drop(field);
    assert_eq!(scheduler.pending_count(), 0);
    scheduler.advance(Duration::from_secs(5));
}
