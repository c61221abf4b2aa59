// SPDX-License-Identifier: MPL-2.0
//! Auto-hiding message slot shared by every input-like control.

use super::delay::MessageDelay;
use super::message::FieldMessage;
use crate::timer::{Scheduler, TimerToken};
use parking_lot::Mutex;
use std::fmt;
use std::sync::{Arc, Weak};
use std::time::Instant;
use tracing::trace;

/// Whether a field currently shows a message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Visibility {
    #[default]
    Hidden,
    Visible,
}

/// Shows a message, then hides it after a fixed delay.
///
/// Every new non-empty message restarts the delay window; it never stacks.
/// An empty message (or `None`) hides immediately. The hide timer captures
/// only a weak reference and the generation of the message it was scheduled
/// for, so it cannot clear a newer message or outlive the field.
pub struct TransientMessageField {
    state: Arc<Mutex<State>>,
    scheduler: Arc<dyn Scheduler>,
    delay: MessageDelay,
}

#[derive(Debug, Default)]
struct State {
    current: Option<String>,
    expires_at: Option<Instant>,
    /// Bumped on every assignment.
    generation: u64,
    timer: Option<TimerToken>,
}

impl TransientMessageField {
    #[must_use]
    pub fn new(scheduler: Arc<dyn Scheduler>) -> Self {
        Self::with_delay(scheduler, MessageDelay::default())
    }

    #[must_use]
    pub fn with_delay(scheduler: Arc<dyn Scheduler>, delay: MessageDelay) -> Self {
        Self {
            state: Arc::new(Mutex::new(State::default())),
            scheduler,
            delay,
        }
    }

    #[must_use]
    pub fn delay(&self) -> MessageDelay {
        self.delay
    }

    /// Changes the delay used by the next message; a visible one keeps its deadline.
    pub fn set_delay(&mut self, delay: MessageDelay) {
        self.delay = delay;
    }

    /// Replaces the displayed message.
    pub fn set_message<M: Into<FieldMessage>>(&mut self, message: Option<M>) {
        self.assign(message.map(Into::into));
    }

    fn assign(&mut self, message: Option<FieldMessage>) {
        let text = message
            .map(FieldMessage::into_text)
            .filter(|text| !text.is_empty());

        let mut state = self.state.lock();
        if let Some(token) = state.timer.take() {
            self.scheduler.cancel(token);
        }
        state.generation += 1;

        let Some(text) = text else {
            state.current = None;
            state.expires_at = None;
            return;
        };

        let delay = self.delay.as_duration();
        let generation = state.generation;
        let slot = Arc::downgrade(&self.state);

        state.current = Some(text);
        state.expires_at = Some(self.scheduler.now() + delay);
        state.timer = Some(
            self.scheduler
                .schedule_once(delay, Box::new(move || hide(&slot, generation))),
        );
    }

    /// Shorthand for `set_message(Some(message.into()))`.
    pub fn show(&mut self, message: impl Into<FieldMessage>) {
        self.assign(Some(message.into()));
    }

    /// Hides the current message right away.
    pub fn clear(&mut self) {
        self.assign(None);
    }

    /// The message that should be rendered right now.
    #[must_use]
    pub fn current_value(&self) -> Option<String> {
        self.state.lock().current.clone()
    }

    #[must_use]
    pub fn visibility(&self) -> Visibility {
        if self.state.lock().current.is_some() {
            Visibility::Visible
        } else {
            Visibility::Hidden
        }
    }

    #[must_use]
    pub fn is_visible(&self) -> bool {
        self.visibility() == Visibility::Visible
    }

    /// When the current message will hide itself.
    #[must_use]
    pub fn expires_at(&self) -> Option<Instant> {
        self.state.lock().expires_at
    }
}

fn hide(slot: &Weak<Mutex<State>>, generation: u64) {
    let Some(state) = slot.upgrade() else {
        return;
    };
    let mut state = state.lock();
    if state.generation == generation {
        state.current = None;
        state.expires_at = None;
        state.timer = None;
        trace!(generation, "field message hidden");
    }
}

impl Drop for TransientMessageField {
    fn drop(&mut self) {
        if let Some(token) = self.state.lock().timer.take() {
            self.scheduler.cancel(token);
        }
    }
}

impl fmt::Debug for TransientMessageField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let state = self.state.lock();
        f.debug_struct("TransientMessageField")
            .field("current", &state.current)
            .field("expires_at", &state.expires_at)
            .field("delay", &self.delay)
            .finish()
    }
}
