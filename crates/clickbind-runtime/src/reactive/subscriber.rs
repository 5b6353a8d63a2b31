#![forbid(unsafe_code)]

//! Per-subscription observer handle and emitter.
//!
//! A [`Subscriber`] exists only while [`OnSubscribe::call`] runs. It hands out
//! [`Emitter`]s (cheap clones that can be parked in foreign callback slots)
//! and collects the teardown work the guard will run later.
//!
//! [`OnSubscribe::call`]: super::OnSubscribe::call

use std::cell::Cell;
use std::rc::Rc;

use super::subscription::{Subscription, Teardown};
use crate::release::ConfinedRelease;

/// Pushes values to one subscription's observer.
///
/// Cloning shares the observer and the "ended" flag.
pub struct Emitter<T> {
    on_next: Rc<dyn Fn(T)>,
    closed: Rc<Cell<bool>>,
}

impl<T> Clone for Emitter<T> {
    fn clone(&self) -> Self {
        Self {
            on_next: Rc::clone(&self.on_next),
            closed: Rc::clone(&self.closed),
        }
    }
}

impl<T> Emitter<T> {
    /// Deliver `value` to the observer, synchronously.
    ///
    /// Returns `false` (and drops `value`) when the subscription has ended.
    pub fn emit(&self, value: T) -> bool {
        if self.closed.get() {
            return false;
        }
        (self.on_next)(value);
        true
    }

    /// Whether the subscription has ended.
    #[inline]
    #[must_use]
    pub fn is_unsubscribed(&self) -> bool {
        self.closed.get()
    }
}

impl<T> std::fmt::Debug for Emitter<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Emitter")
            .field("unsubscribed", &self.closed.get())
            .finish_non_exhaustive()
    }
}

/// The subscriber side of one `subscribe()` call.
pub struct Subscriber<T> {
    emitter: Emitter<T>,
    teardowns: Vec<Teardown>,
}

impl<T> Subscriber<T> {
    pub(crate) fn new(on_next: Rc<dyn Fn(T)>) -> Self {
        Self {
            emitter: Emitter {
                on_next,
                closed: Rc::new(Cell::new(false)),
            },
            teardowns: Vec::new(),
        }
    }

    /// An emitter bound to this subscription's observer.
    #[must_use]
    pub fn emitter(&self) -> Emitter<T> {
        self.emitter.clone()
    }

    /// Register a release hook to run on unsubscribe.
    pub fn add(&mut self, release: ConfinedRelease) {
        self.teardowns.push(Teardown::Release(release));
    }

    /// Register an upstream subscription to end together with this one.
    pub fn add_subscription(&mut self, subscription: Subscription) {
        self.teardowns.push(Teardown::Inner(subscription));
    }

    /// Whether the subscription has already ended.
    #[inline]
    #[must_use]
    pub fn is_unsubscribed(&self) -> bool {
        self.emitter.is_unsubscribed()
    }

    pub(crate) fn into_subscription(self) -> Subscription {
        Subscription::new(self.emitter.closed, self.teardowns)
    }
}

impl<T> std::fmt::Debug for Subscriber<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Subscriber")
            .field("unsubscribed", &self.is_unsubscribed())
            .field("teardowns", &self.teardowns.len())
            .finish()
    }
}
