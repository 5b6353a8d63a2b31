#![forbid(unsafe_code)]

//! RAII guard for a live subscription.
//!
//! # Failure Modes
//!
//! - **Off-thread unsubscribe**: [`Subscription::unsubscribe`] returns
//!   [`BindError::ThreadViolation`] and changes nothing; the subscription
//!   stays live and can be ended later from the right thread.
//! - **Off-thread drop**: `Drop` cannot report an error, so a violation there
//!   panics. Confinement violations are programming defects, never swallowed.

use std::cell::Cell;
use std::rc::Rc;

use clickbind_core::error::BindError;
use tracing::trace;

use crate::release::ConfinedRelease;

/// Work registered on a subscriber, run on unsubscribe.
pub(crate) enum Teardown {
    Release(ConfinedRelease),
    Inner(Subscription),
}

impl Teardown {
    fn check(&self) -> Result<(), BindError> {
        match self {
            Self::Release(release) => release.check(),
            Self::Inner(subscription) => subscription.check(),
        }
    }

    fn run(self) -> Result<(), BindError> {
        match self {
            Self::Release(mut release) => release.release().map(|_| ()),
            Self::Inner(mut subscription) => subscription.unsubscribe(),
        }
    }

    fn disarm(self) {
        if let Self::Inner(subscription) = self {
            subscription.disarm();
        }
    }
}

/// Guard for one subscription. Dropping it unsubscribes.
#[must_use = "dropping a Subscription unsubscribes immediately"]
pub struct Subscription {
    closed: Rc<Cell<bool>>,
    teardowns: Vec<Teardown>,
}

impl Subscription {
    pub(crate) fn new(closed: Rc<Cell<bool>>, teardowns: Vec<Teardown>) -> Self {
        Self { closed, teardowns }
    }

    /// Whether the subscription has ended.
    #[inline]
    #[must_use]
    pub fn is_unsubscribed(&self) -> bool {
        self.closed.get()
    }

    /// End the subscription: silence its emitters, then run every release
    /// hook in registration order.
    ///
    /// Calling it again after success is a no-op.
    ///
    /// # Errors
    ///
    /// [`BindError::ThreadViolation`] if any hook's confinement rejects the
    /// current thread. Nothing is changed in that case.
    pub fn unsubscribe(&mut self) -> Result<(), BindError> {
        if self.is_unsubscribed() {
            return Ok(());
        }
        self.check()?;
        self.closed.set(true);
        let teardowns = std::mem::take(&mut self.teardowns);
        trace!(teardowns = teardowns.len(), "subscription ending");
        for teardown in teardowns {
            teardown.run()?;
        }
        Ok(())
    }

    fn check(&self) -> Result<(), BindError> {
        if self.is_unsubscribed() {
            return Ok(());
        }
        self.teardowns.iter().try_for_each(Teardown::check)
    }

    /// Mark ended and forget the hooks without running them.
    pub(crate) fn disarm(mut self) {
        self.closed.set(true);
        for teardown in std::mem::take(&mut self.teardowns) {
            teardown.disarm();
        }
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        if let Err(err) = self.unsubscribe() {
            if !std::thread::panicking() {
                panic!("live subscription dropped off the UI thread: {err}");
            }
        }
    }
}

impl std::fmt::Debug for Subscription {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Subscription")
            .field("unsubscribed", &self.is_unsubscribed())
            .field("pending_teardowns", &self.teardowns.len())
            .finish()
    }
}
