// SPDX-License-Identifier: MPL-2.0
//! Event subscriptions for the application.
//!
//! Pointer events feed the dropdown outside-press check. The tick keeps the
//! window redrawing while a timer is about to hide something.

use super::Message;
use iced::{event, mouse, time, Subscription};
use std::time::Duration;

/// Redraw interval while toasts or field messages are pending.
const TICK_INTERVAL: Duration = Duration::from_millis(100);

/// Routes cursor moves and left presses, including presses already captured
/// by a widget, so a press on another control still closes an open menu.
pub fn create_event_subscription() -> Subscription<Message> {
    event::listen_with(|event, _status, _window_id| match event {
        event::Event::Mouse(mouse::Event::CursorMoved { position }) => {
            Some(Message::CursorMoved(position))
        }
        event::Event::Mouse(mouse::Event::ButtonPressed(mouse::Button::Left)) => {
            Some(Message::PointerPressed)
        }
        _ => None,
    })
}

/// Creates a periodic tick only while something will change on its own.
pub fn create_tick_subscription(has_pending_timers: bool) -> Subscription<Message> {
    if has_pending_timers {
        time::every(TICK_INTERVAL).map(Message::Tick)
    } else {
        Subscription::none()
    }
}
