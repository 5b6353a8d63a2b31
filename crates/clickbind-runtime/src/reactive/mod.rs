#![forbid(unsafe_code)]

//! Cold event streams for clickbind.
//!
//! This module provides the small reactive engine the click bridge plugs into:
//!
//! - [`EventStream`]: a cold stream. Every `subscribe()` runs its
//!   [`OnSubscribe`] logic afresh against a new [`Subscriber`].
//! - [`Emitter`]: pushes values to one subscription's observer; a no-op once
//!   that subscription has ended.
//! - [`Subscription`]: RAII guard that tears the subscription down on drop.
//!
//! # Architecture
//!
//! Observers are stored as `Rc<dyn Fn(T)>` and shared between the emitters of
//! one subscription. The "ended" flag is an `Rc<Cell<bool>>` shared by the
//! emitters and the guard, so emitters left behind in foreign callback slots
//! go quiet the moment the guard unsubscribes.
//!
//! # Invariants
//!
//! 1. An emitter delivers nothing after its subscription ended.
//! 2. Unsubscribe is all-or-nothing: every registered release passes its
//!    confinement check before any of them runs.
//! 3. Releases run once, in registration order.
//! 4. A second unsubscribe is a no-op.

pub mod stream;
pub mod subscriber;
pub mod subscription;

pub use stream::{EventStream, OnSubscribe};
pub use subscriber::{Emitter, Subscriber};
pub use subscription::Subscription;
