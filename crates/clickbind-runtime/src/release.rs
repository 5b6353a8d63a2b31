#![forbid(unsafe_code)]

//! Teardown hook confined to the UI thread.
//!
//! [`ConfinedRelease`] wraps a `FnOnce` teardown closure together with the
//! [`ThreadConfinement`] that guards it. The closure runs at most once, and
//! only after the confinement check passes.
//!
//! # Invariants
//!
//! 1. The closure never runs off the confined thread.
//! 2. A failed check leaves the hook armed; a later on-thread `release` still
//!    runs it.
//! 3. After the closure has run, `release` is a no-op returning `Ok(false)`
//!    without consulting the confinement again.
//! 4. Dropping an unreleased hook does **not** run it; release is explicit.

use std::rc::Rc;

use clickbind_core::error::BindError;
use clickbind_core::thread_confinement::ThreadConfinement;

/// A teardown closure that runs exactly once, on the confined thread.
pub struct ConfinedRelease {
    confinement: Rc<dyn ThreadConfinement>,
    on_release: Option<Box<dyn FnOnce()>>,
}

impl ConfinedRelease {
    /// Arm a release hook.
    pub fn new(confinement: Rc<dyn ThreadConfinement>, on_release: impl FnOnce() + 'static) -> Self {
        Self {
            confinement,
            on_release: Some(Box::new(on_release)),
        }
    }

    /// Whether the closure has already run.
    #[inline]
    #[must_use]
    pub fn is_released(&self) -> bool {
        self.on_release.is_none()
    }

    /// Run the confinement check for `"unsubscribe"` without releasing.
    ///
    /// Already-released hooks always pass.
    pub fn check(&self) -> Result<(), BindError> {
        if self.is_released() {
            return Ok(());
        }
        self.confinement.check("unsubscribe")
    }

    /// Run the closure if it has not run yet.
    ///
    /// Returns `Ok(true)` when this call ran it and `Ok(false)` when it had
    /// already run.
    ///
    /// # Errors
    ///
    /// [`BindError::ThreadViolation`] when called off the confined thread; the
    /// hook stays armed.
    pub fn release(&mut self) -> Result<bool, BindError> {
        if self.is_released() {
            return Ok(false);
        }
        self.check()?;
        match self.on_release.take() {
            Some(on_release) => {
                on_release();
                Ok(true)
            }
            None => Ok(false),
        }
    }
}

impl std::fmt::Debug for ConfinedRelease {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ConfinedRelease")
            .field("released", &self.is_released())
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clickbind_core::thread_confinement::UiThread;
    use std::cell::Cell;

    /// Confinement whose verdict the test flips by hand.
    #[derive(Clone, Default)]
    struct Switch {
        off_thread: Rc<Cell<bool>>,
    }

    impl ThreadConfinement for Switch {
        fn check(&self, operation: &'static str) -> Result<(), BindError> {
            if self.off_thread.get() {
                Err(BindError::thread_violation(operation, None))
            } else {
                Ok(())
            }
        }
    }

    fn counting_release(confinement: Rc<dyn ThreadConfinement>) -> (ConfinedRelease, Rc<Cell<u32>>) {
        let runs = Rc::new(Cell::new(0u32));
        let counter = Rc::clone(&runs);
        let release = ConfinedRelease::new(confinement, move || counter.set(counter.get() + 1));
        (release, runs)
    }

    #[test]
    fn runs_exactly_once() {
        let (mut release, runs) = counting_release(Rc::new(UiThread::current()));
        assert!(!release.is_released());
        assert_eq!(release.release(), Ok(true));
        assert_eq!(release.release(), Ok(false));
        assert_eq!(runs.get(), 1);
        assert!(release.is_released());
    }

    #[test]
    fn off_thread_release_keeps_hook_armed() {
        let switch = Switch::default();
        let (mut release, runs) = counting_release(Rc::new(switch.clone()));

        switch.off_thread.set(true);
        let err = release.release().expect_err("off-thread");
        assert!(err.is_thread_violation());
        assert_eq!(err.operation(), "unsubscribe");
        assert_eq!(runs.get(), 0);
        assert!(!release.is_released());

        switch.off_thread.set(false);
        assert_eq!(release.release(), Ok(true));
        assert_eq!(runs.get(), 1);
    }

    #[test]
    fn released_hook_ignores_confinement() {
        let switch = Switch::default();
        let (mut release, runs) = counting_release(Rc::new(switch.clone()));
        assert_eq!(release.release(), Ok(true));

        switch.off_thread.set(true);
        assert_eq!(release.check(), Ok(()));
        assert_eq!(release.release(), Ok(false));
        assert_eq!(runs.get(), 1);
    }

    #[test]
    fn drop_does_not_run() {
        let (release, runs) = counting_release(Rc::new(UiThread::current()));
        drop(release);
        assert_eq!(runs.get(), 0);
    }

    #[test]
    fn debug_reports_state() {
        let (mut release, _runs) = counting_release(Rc::new(UiThread::current()));
        assert!(format!("{release:?}").contains("released: false"));
        release.release().expect("on thread");
        assert!(format!("{release:?}").contains("released: true"));
    }
}
