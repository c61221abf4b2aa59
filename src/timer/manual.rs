// SPDX-License-Identifier: MPL-2.0
//! Virtual-clock scheduler.

use super::{Callback, Scheduler, TimerToken};
use parking_lot::Mutex;
use std::collections::{BTreeMap, HashMap};
use std::fmt;
use std::time::{Duration, Instant};

/// Scheduler whose clock only moves when [`advance`](Self::advance) is called.
///
/// Due timers fire in deadline order; timers sharing a deadline fire in the
/// order they were scheduled. The clock is moved to each timer's deadline
/// before its callback runs, so callbacks observe the exact firing time.
///
/// # Example
///
/// ```
/// use grimoire::timer::{ManualScheduler, Scheduler};
/// use std::sync::atomic::{AtomicBool, Ordering};
/// use std::sync::Arc;
/// use std::time::Duration;
///
/// let scheduler = ManualScheduler::new();
/// let fired = Arc::new(AtomicBool::new(false));
/// let flag = Arc::clone(&fired);
/// scheduler.schedule_once(Duration::from_millis(10), Box::new(move || {
///     flag.store(true, Ordering::SeqCst);
/// }));
///
/// scheduler.advance(Duration::from_millis(9));
/// assert!(!fired.load(Ordering::SeqCst));
/// scheduler.advance(Duration::from_millis(1));
/// assert!(fired.load(Ordering::SeqCst));
/// ```
pub struct ManualScheduler {
    inner: Mutex<Inner>,
}

struct Inner {
    origin: Instant,
    elapsed: Duration,
    next_token: u64,
    /// Pending callbacks keyed by (deadline, token) so iteration order is firing order.
    pending: BTreeMap<(Duration, TimerToken), Callback>,
    deadlines: HashMap<TimerToken, Duration>,
}

impl ManualScheduler {
    /// Creates a scheduler whose clock starts at the current instant.
    #[must_use]
    pub fn new() -> Self {
        Self {
            inner: Mutex::new(Inner {
                origin: Instant::now(),
                elapsed: Duration::ZERO,
                next_token: 0,
                pending: BTreeMap::new(),
                deadlines: HashMap::new(),
            }),
        }
    }

    /// Time elapsed on the virtual clock since creation.
    #[must_use]
    pub fn elapsed(&self) -> Duration {
        self.inner.lock().elapsed
    }

    /// Number of timers still waiting to fire.
    #[must_use]
    pub fn pending_count(&self) -> usize {
        self.inner.lock().pending.len()
    }

    /// Moves the clock forward by `by`, firing every timer that falls due.
    ///
    /// Callbacks run without the scheduler lock held, so they may schedule or
    /// cancel further timers. A timer scheduled by a callback fires within the
    /// same call if its deadline is still inside the advanced window.
    pub fn advance(&self, by: Duration) {
        let target = self.inner.lock().elapsed + by;

        loop {
            let due = {
                let mut inner = self.inner.lock();
                let next = inner
                    .pending
                    .keys()
                    .next()
                    .copied()
                    .filter(|(deadline, _)| *deadline <= target);

                next.and_then(|key| {
                    let callback = inner.pending.remove(&key)?;
                    inner.deadlines.remove(&key.1);
                    inner.elapsed = inner.elapsed.max(key.0);
                    Some(callback)
                })
            };

            match due {
                Some(callback) => callback(),
                None => break,
            }
        }

        let mut inner = self.inner.lock();
        inner.elapsed = inner.elapsed.max(target);
    }
}

impl Default for ManualScheduler {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for ManualScheduler {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let inner = self.inner.lock();
        f.debug_struct("ManualScheduler")
            .field("elapsed", &inner.elapsed)
            .field("pending", &inner.pending.len())
            .finish()
    }
}

impl Scheduler for ManualScheduler {
    fn now(&self) -> Instant {
        let inner = self.inner.lock();
        inner.origin + inner.elapsed
    }

    fn schedule_once(&self, delay: Duration, callback: Callback) -> TimerToken {
        let mut inner = self.inner.lock();
        let token = TimerToken::new(inner.next_token);
        inner.next_token += 1;

        let deadline = inner.elapsed + delay;
        inner.pending.insert((deadline, token), callback);
        inner.deadlines.insert(token, deadline);
        token
    }

    fn cancel(&self, token: TimerToken) {
        let mut inner = self.inner.lock();
        if let Some(deadline) = inner.deadlines.remove(&token) {
            inner.pending.remove(&(deadline, token));
        }
    }
}
