#![forbid(unsafe_code)]

//! Error taxonomy for the click bridge.
//!
//! The bridge performs no I/O and cannot fail because of the event source, so
//! the only observable error is misuse: touching UI state off the confined
//! thread.
//!
//! # Failure Modes
//!
//! | Failure | Cause | Behavior |
//! |---------|-------|----------|
//! | Thread violation | subscribe/unsubscribe off the UI thread | `Err(BindError::ThreadViolation)`, no state touched |
//! | Thread violation in `Drop` | live subscription dropped off-thread | panic (cannot be returned) |
//! | Second teardown | release hook invoked twice | silent no-op, never an error |

use std::thread::ThreadId;

/// Errors from bridge operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BindError {
    /// An operation that mutates UI state ran off the confined thread.
    ///
    /// This is a programming defect. It is never retried.
    ThreadViolation {
        /// Name of the rejected operation (`"subscribe"`, `"unsubscribe"`, ...).
        operation: &'static str,
        /// The confined thread, when the confinement knows it.
        expected: Option<ThreadId>,
        /// The thread the operation actually ran on.
        actual: ThreadId,
    },
}

impl BindError {
    /// Build a thread violation for `operation` observed on the current thread.
    #[must_use]
    pub fn thread_violation(operation: &'static str, expected: Option<ThreadId>) -> Self {
        Self::ThreadViolation {
            operation,
            expected,
            actual: std::thread::current().id(),
        }
    }

    /// Whether this error is a confinement violation.
    #[must_use]
    pub const fn is_thread_violation(&self) -> bool {
        matches!(self, Self::ThreadViolation { .. })
    }

    /// The operation that was rejected.
    #[must_use]
    pub const fn operation(&self) -> &'static str {
        match self {
            Self::ThreadViolation { operation, .. } => *operation,
        }
    }
}

impl std::fmt::Display for BindError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::ThreadViolation {
                operation,
                expected: Some(expected),
                actual,
            } => write!(
                f,
                "{operation} must run on the UI thread ({expected:?}), called from {actual:?}"
            ),
            Self::ThreadViolation {
                operation,
                expected: None,
                actual,
            } => write!(
                f,
                "{operation} must run on the UI thread, called from {actual:?}"
            ),
        }
    }
}

impl std::error::Error for BindError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn thread_violation_captures_current_thread() {
        let err = BindError::thread_violation("subscribe", None);
        match err {
            BindError::ThreadViolation { actual, .. } => {
                assert_eq!(actual, std::thread::current().id());
            }
        }
    }

    #[test]
    fn accessors() {
        let err = BindError::thread_violation("unsubscribe", None);
        assert!(err.is_thread_violation());
        assert_eq!(err.operation(), "unsubscribe");
    }

    #[test]
    fn display_with_expected_thread() {
        let ui = std::thread::spawn(|| std::thread::current().id())
            .join()
            .expect("spawned thread");
        let err = BindError::thread_violation("subscribe", Some(ui));
        let msg = err.to_string();
        assert!(msg.starts_with("subscribe must run on the UI thread ("));
        assert!(msg.contains("called from"));
    }

    #[test]
    fn display_without_expected_thread() {
        let msg = BindError::thread_violation("unsubscribe", None).to_string();
        assert!(msg.starts_with("unsubscribe must run on the UI thread, called from"));
    }
}
