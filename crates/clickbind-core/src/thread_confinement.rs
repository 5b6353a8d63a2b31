#![forbid(unsafe_code)]

//! UI-thread confinement.
//!
//! Every bridge operation that touches shared UI state (install, uninstall,
//! attach, detach) first asks a [`ThreadConfinement`] whether it may run.
//! The check is passed explicitly as a value rather than assumed from a
//! single-threaded runtime, because nothing in the type system pins a widget
//! to the thread its toolkit drives.
//!
//! # Invariants
//!
//! 1. `check` never mutates anything; a failed check leaves all state intact.
//! 2. A [`UiThread`] token is `Copy + Send + Sync` and always designates the
//!    same thread.
//!
//! # Example
//!
//! ```
//! use clickbind_core::thread_confinement::{ThreadConfinement, UiThread};
//!
//! let ui = UiThread::current();
//! assert!(ui.check("subscribe").is_ok());
//!
//! let other = std::thread::spawn(move || ui.check("subscribe").is_err())
//!     .join()
//!     .unwrap();
//! assert!(other);
//! ```

use std::rc::Rc;
use std::thread::ThreadId;

use crate::error::BindError;

// Import tracing macros (no-op when tracing feature is disabled).
#[cfg(feature = "tracing")]
use crate::logging::warn;
#[cfg(not(feature = "tracing"))]
use crate::warn;

/// The confinement assertion run at every attach/detach boundary.
pub trait ThreadConfinement {
    /// Return `Ok(())` when `operation` may run on the current thread.
    ///
    /// # Errors
    ///
    /// [`BindError::ThreadViolation`] when called off the confined thread.
    fn check(&self, operation: &'static str) -> Result<(), BindError>;
}

impl<C: ThreadConfinement + ?Sized> ThreadConfinement for Rc<C> {
    fn check(&self, operation: &'static str) -> Result<(), BindError> {
        (**self).check(operation)
    }
}

impl<C: ThreadConfinement + ?Sized> ThreadConfinement for &C {
    fn check(&self, operation: &'static str) -> Result<(), BindError> {
        (**self).check(operation)
    }
}

/// Token designating the UI thread by its [`ThreadId`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct UiThread {
    id: ThreadId,
}

impl UiThread {
    /// Designate the calling thread as the UI thread.
    #[must_use]
    pub fn current() -> Self {
        Self {
            id: std::thread::current().id(),
        }
    }

    /// Designate an arbitrary thread as the UI thread.
    #[must_use]
    pub const fn from_id(id: ThreadId) -> Self {
        Self { id }
    }

    /// The designated thread.
    #[inline]
    #[must_use]
    pub const fn id(&self) -> ThreadId {
        self.id
    }

    /// Whether the calling thread is the designated one.
    #[inline]
    #[must_use]
    pub fn is_current(&self) -> bool {
        std::thread::current().id() == self.id
    }
}

impl ThreadConfinement for UiThread {
    fn check(&self, operation: &'static str) -> Result<(), BindError> {
        if self.is_current() {
            return Ok(());
        }
        let err = BindError::thread_violation(operation, Some(self.id));
        warn!(operation, ui_thread = ?self.id, "ui thread confinement violated");
        Err(err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn foreign_thread_id() -> ThreadId {
        std::thread::spawn(|| std::thread::current().id())
            .join()
            .expect("spawned thread")
    }

    #[test]
    fn current_thread_passes() {
        let ui = UiThread::current();
        assert!(ui.is_current());
        assert_eq!(ui.check("subscribe"), Ok(()));
    }

    #[test]
    fn foreign_thread_fails() {
        let ui = UiThread::from_id(foreign_thread_id());
        assert!(!ui.is_current());
        let err = ui.check("unsubscribe").expect_err("off-thread");
        assert_eq!(
            err,
            BindError::ThreadViolation {
                operation: "unsubscribe",
                expected: Some(ui.id()),
                actual: std::thread::current().id(),
            }
        );
    }

    #[test]
    fn token_is_portable_across_threads() {
        let ui = UiThread::current();
        let passed = std::thread::spawn(move || ui.check("subscribe").is_ok())
            .join()
            .expect("spawned thread");
        assert!(!passed);
        assert!(ui.check("subscribe").is_ok());
    }

    fn passes<C: ThreadConfinement>(confinement: C) -> bool {
        confinement.check("subscribe").is_ok()
    }

    #[test]
    fn rc_and_ref_delegate() {
        let ui = UiThread::current();
        let shared: Rc<dyn ThreadConfinement> = Rc::new(ui);
        assert!(passes(Rc::clone(&shared)));
        assert!(passes(&ui));

        let foreign: Rc<dyn ThreadConfinement> = Rc::new(UiThread::from_id(foreign_thread_id()));
        assert!(foreign.check("subscribe").is_err());
    }
}
