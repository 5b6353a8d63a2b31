#![forbid(unsafe_code)]

//! Listener-to-stream click bridge.
//!
//! # Data flow
//!
//! ```text
//! widget click ─▶ BindableListener::on_click ─▶ attached ActionCallback
//!              ─▶ Emitter::emit(Clicked) ─▶ observer
//! ```
//!
//! Subscribing attaches the callback (installing a bridge-owned listener
//! first when the caller supplied none); unsubscribing detaches it and, for a
//! bridge-owned listener only, clears the widget's slot again.
//!
//! # Invariants
//!
//! 1. One native click produces exactly one [`Clicked`] per active
//!    subscription whose callback is attached.
//! 2. A caller-supplied listener is never installed or uninstalled by the
//!    bridge; only its callback slot changes.
//! 3. A bridge-owned listener is installed on first subscribe and removed on
//!    teardown, leaving the slot empty.
//! 4. Off-thread subscribe/unsubscribe is rejected before any mutation.
//!
//! # Failure Modes
//!
//! | Failure | Cause | Behavior |
//! |---------|-------|----------|
//! | Thread violation | subscribe/unsubscribe off the UI thread | `BindError::ThreadViolation`, nothing changed |
//! | Silent override | two live subscriptions on one listener | the later attach wins; the earlier one stops receiving clicks |
//! | Slot clobbering | a second bridge-owned stream on the same widget | the later install wins (one stream per widget) |

pub mod click;
pub mod listener;
pub mod streams;

pub use click::{ClickBridge, Clicked};
pub use listener::{ActionCallback, BindableClickListener, BindableListener};
pub use streams::{ClickEvent, ClickStreams};
