// SPDX-License-Identifier: MPL-2.0
//! Thread-scoped "current center" lookup.
//!
//! Components deep in a view tree can reach the active center without having
//! a handle threaded through every constructor. Looking it up outside an
//! [`enter`](super::NotificationCenter::enter) scope is a wiring bug and fails
//! loudly with [`Error::NoActiveCenter`].

use super::center::Toasts;
use crate::error::{Error, Result};
use std::cell::{Cell, RefCell};
use std::marker::PhantomData;

thread_local! {
    static CURRENT: RefCell<Vec<(u64, Toasts)>> = const { RefCell::new(Vec::new()) };
    static NEXT_SLOT: Cell<u64> = const { Cell::new(0) };
}

/// Keeps a center current for the thread it was created on.
///
/// Guards nest: dropping one removes only the entry it pushed, so the
/// innermost guard still alive decides the current center regardless of the
/// order guards are dropped in.
#[derive(Debug)]
pub struct EnterGuard {
    slot: u64,
    _not_send: PhantomData<*const ()>,
}

pub(crate) fn enter(toasts: Toasts) -> EnterGuard {
    let slot = NEXT_SLOT.with(|next| {
        let slot = next.get();
        next.set(slot.wrapping_add(1));
        slot
    });
    CURRENT.with(|stack| stack.borrow_mut().push((slot, toasts)));
    EnterGuard {
        slot,
        _not_send: PhantomData,
    }
}

impl Drop for EnterGuard {
    fn drop(&mut self) {
        CURRENT.with(|stack| {
            stack.borrow_mut().retain(|(slot, _)| *slot != self.slot);
        });
    }
}

/// Returns a handle to the center made current by the innermost live
/// [`EnterGuard`] on this thread.
pub fn current() -> Result<Toasts> {
    CURRENT
        .with(|stack| stack.borrow().last().map(|(_, toasts)| toasts.clone()))
        .ok_or(Error::NoActiveCenter)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::timer::ManualScheduler;
    use crate::ui::notifications::{Anchor, Kind, NotificationCenter, ToastOptions};
    use std::sync::Arc;

    #[test]
    fn lookup_outside_scope_fails() {
        assert!(matches!(current(), Err(Error::NoActiveCenter)));
    }

    #[test]
    fn lookup_inside_scope_reaches_center() {
        let center = NotificationCenter::new(Arc::new(ManualScheduler::new()));
        let _guard = center.enter();

        let toasts = current().expect("center entered");
        toasts
            .enqueue("hi", Kind::Info, ToastOptions::new().anchor(Anchor::TopRight))
            .expect("center alive");
        assert_eq!(center.snapshot(Anchor::TopRight).len(), 1);
    }

    #[test]
    fn guards_nest_and_restore() {
        let outer = NotificationCenter::new(Arc::new(ManualScheduler::new()));
        let inner = NotificationCenter::new(Arc::new(ManualScheduler::new()));

        let _outer_guard = outer.enter();
        {
            let _inner_guard = inner.enter();
            current().and_then(|t| t.info("inner")).expect("inner current");
        }
        current().and_then(|t| t.info("outer")).expect("outer current");

        assert_eq!(inner.active_count(), 1);
        assert_eq!(outer.active_count(), 1);
    }

    #[test]
    fn dropping_outer_guard_first_keeps_inner_current() {
        let outer = NotificationCenter::new(Arc::new(ManualScheduler::new()));
        let inner = NotificationCenter::new(Arc::new(ManualScheduler::new()));

        let outer_guard = outer.enter();
        let inner_guard = inner.enter();
        drop(outer_guard);

        current().and_then(|t| t.info("still inner")).expect("inner current");
        assert_eq!(inner.active_count(), 1);
        assert_eq!(outer.active_count(), 0);

        drop(inner_guard);
        assert!(matches!(current(), Err(Error::NoActiveCenter)));
    }

    #[test]
    fn dropping_inner_guard_restores_outer_after_reentry() {
        let first = NotificationCenter::new(Arc::new(ManualScheduler::new()));
        let second = NotificationCenter::new(Arc::new(ManualScheduler::new()));

        let _first_guard = first.enter();
        let second_guard = second.enter();
        let again = first.enter();
        drop(second_guard);

        current().and_then(|t| t.info("first")).expect("first current");
        drop(again);
        current().and_then(|t| t.info("first again")).expect("first current");

        assert_eq!(first.active_count(), 2);
        assert_eq!(second.active_count(), 0);
    }

    #[test]
    fn scope_ends_with_guard() {
        let center = NotificationCenter::new(Arc::new(ManualScheduler::new()));
        drop(center.enter());
        assert!(matches!(current(), Err(Error::NoActiveCenter)));
    }
}
