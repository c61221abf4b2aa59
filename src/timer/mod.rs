// SPDX-License-Identifier: MPL-2.0
//! One-shot timer scheduling shared by every auto-expiring component.
//!
//! Components never sleep or poll. They hand a callback to a [`Scheduler`],
//! keep the returned [`TimerToken`] next to the entity it belongs to, and cancel
//! it on any state transition that should preempt the expiry. Callbacks must
//! capture the entity's identity (an id, a generation) and a weak reference to
//! its owner, never the entity itself, so a callback that races a cancel is a
//! no-op rather than a stale write.
//!
//! Two schedulers are provided:
//!
//! - [`RuntimeScheduler`] runs each timer as a tokio task.
//! - [`ManualScheduler`] keeps a virtual clock that tests (or deterministic
//!   hosts) advance explicitly.

mod manual;
mod runtime;

pub use manual::ManualScheduler;
pub use runtime::RuntimeScheduler;

use std::fmt;
use std::time::{Duration, Instant};

/// Work executed when a timer fires.
pub type Callback = Box<dyn FnOnce() + Send + 'static>;

/// Identifies a scheduled timer so it can be cancelled.
///
/// Tokens are unique per scheduler and increase in scheduling order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TimerToken(u64);

impl TimerToken {
    pub(crate) fn new(raw: u64) -> Self {
        Self(raw)
    }

    /// Returns the raw token value.
    #[must_use]
    pub fn value(self) -> u64 {
        self.0
    }
}

impl fmt::Display for TimerToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "timer#{}", self.0)
    }
}

/// Monotonic clock plus one-shot timer scheduling.
pub trait Scheduler: Send + Sync + fmt::Debug {
    /// Current time on this scheduler's clock.
    fn now(&self) -> Instant;

    /// Runs `callback` once, `delay` from now, unless cancelled first.
    fn schedule_once(&self, delay: Duration, callback: Callback) -> TimerToken;

    /// Cancels a pending timer. Unknown or already fired tokens are ignored.
    fn cancel(&self, token: TimerToken);
}
