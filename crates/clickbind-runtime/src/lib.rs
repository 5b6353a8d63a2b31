#![forbid(unsafe_code)]

//! Runtime: cold event streams and confined release hooks.
//!
//! - [`reactive`]: [`EventStream`], [`Subscriber`], [`Emitter`], and the
//!   [`Subscription`] RAII guard.
//! - [`release`]: [`ConfinedRelease`], a teardown closure that runs at most
//!   once and only on the confined thread.
//!
//! Everything here is single-threaded (`Rc`/`RefCell`/`Cell`) and synchronous:
//! emitting, subscribing, and unsubscribing never block or yield.

pub mod reactive;
pub mod release;

pub use reactive::{Emitter, EventStream, OnSubscribe, Subscriber, Subscription};
pub use release::ConfinedRelease;
