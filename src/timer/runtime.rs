// SPDX-License-Identifier: MPL-2.0
//! Tokio-backed scheduler: one sleeping task per timer.

use super::{Callback, Scheduler, TimerToken};
use parking_lot::Mutex;
use std::collections::HashMap;
use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio::runtime::Handle;
use tokio::task::AbortHandle;

/// Schedules timers as tasks on a tokio runtime.
///
/// The scheduler holds a runtime [`Handle`] rather than relying on an ambient
/// runtime context, so it can be used from threads that are not runtime
/// workers (the iced event loop, for instance).
#[derive(Clone)]
pub struct RuntimeScheduler {
    handle: Handle,
    next_token: Arc<AtomicU64>,
    tasks: Arc<Mutex<HashMap<TimerToken, AbortHandle>>>,
}

impl RuntimeScheduler {
    /// Creates a scheduler that spawns its timers on `handle`.
    #[must_use]
    pub fn new(handle: Handle) -> Self {
        Self {
            handle,
            next_token: Arc::new(AtomicU64::new(0)),
            tasks: Arc::new(Mutex::new(HashMap::new())),
        }
    }

    /// Creates a scheduler on the runtime the caller is currently running in.
    ///
    /// Returns `None` outside of a tokio runtime context.
    #[must_use]
    pub fn current() -> Option<Self> {
        Handle::try_current().ok().map(Self::new)
    }

    /// Number of timers that have neither fired nor been cancelled.
    #[must_use]
    pub fn pending_count(&self) -> usize {
        self.tasks.lock().len()
    }
}

impl fmt::Debug for RuntimeScheduler {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RuntimeScheduler")
            .field("pending", &self.tasks.lock().len())
            .finish()
    }
}

impl Scheduler for RuntimeScheduler {
    fn now(&self) -> Instant {
        tokio::time::Instant::now().into_std()
    }

    fn schedule_once(&self, delay: Duration, callback: Callback) -> TimerToken {
        let token = TimerToken::new(self.next_token.fetch_add(1, Ordering::Relaxed));
        let tasks = Arc::clone(&self.tasks);

        // Hold the map while spawning so the task cannot deregister itself
        // before its abort handle is recorded.
        let mut map = self.tasks.lock();
        let join = self.handle.spawn(async move {
            tokio::time::sleep(delay).await;
            let still_scheduled = tasks.lock().remove(&token).is_some();
            if still_scheduled {
                callback();
            }
        });
        map.insert(token, join.abort_handle());
        token
    }

    fn cancel(&self, token: TimerToken) {
        if let Some(task) = self.tasks.lock().remove(&token) {
            task.abort();
        }
    }
}
