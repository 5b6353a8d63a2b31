#![forbid(unsafe_code)]

//! Cold event stream.
//!
//! # Design
//!
//! [`EventStream<T>`] owns nothing but its [`OnSubscribe`] logic. Each call to
//! [`EventStream::subscribe`] builds a fresh [`Subscriber`], lets the logic
//! wire it to a source (attach callbacks, register release hooks), and turns
//! it into a [`Subscription`] guard. Two subscriptions share whatever state
//! the `OnSubscribe` implementation itself shares; the stream adds none.
//!
//! # Performance
//!
//! | Operation     | Complexity                          |
//! |---------------|-------------------------------------|
//! | `subscribe()` | O(1) + cost of `OnSubscribe::call`  |
//! | `emit()`      | O(1), one indirect call             |
//! | `unsubscribe()` | O(R) where R = registered releases |
//!
//! # Failure Modes
//!
//! - **Rejected subscribe**: when `call` returns an error, whatever it had
//!   registered is torn down (or, if that is itself rejected, discarded
//!   unrun) and the error is returned. No guard is produced.
//! - **Re-entrant emission**: an observer may emit into or unsubscribe from
//!   its own stream; the engine holds no borrows while calling observers.

use std::rc::Rc;

use clickbind_core::error::BindError;
use tracing::debug;

use super::subscriber::Subscriber;
use super::subscription::Subscription;

/// Subscription logic of a cold stream.
pub trait OnSubscribe<T> {
    /// Connect `subscriber` to the underlying source.
    ///
    /// # Errors
    ///
    /// Any error aborts the subscription and is returned from
    /// [`EventStream::subscribe`].
    fn call(&self, subscriber: &mut Subscriber<T>) -> Result<(), BindError>;
}

impl<T, F> OnSubscribe<T> for F
where
    F: Fn(&mut Subscriber<T>) -> Result<(), BindError>,
{
    fn call(&self, subscriber: &mut Subscriber<T>) -> Result<(), BindError> {
        self(subscriber)
    }
}

/// A cold stream of `T` values.
///
/// Cloning yields a handle to the same subscription logic.
pub struct EventStream<T> {
    on_subscribe: Rc<dyn OnSubscribe<T>>,
}

impl<T> Clone for EventStream<T> {
    fn clone(&self) -> Self {
        Self {
            on_subscribe: Rc::clone(&self.on_subscribe),
        }
    }
}

impl<T> std::fmt::Debug for EventStream<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EventStream").finish_non_exhaustive()
    }
}

impl<T: 'static> EventStream<T> {
    /// Create a stream from its subscription logic.
    #[must_use]
    pub fn create(on_subscribe: impl OnSubscribe<T> + 'static) -> Self {
        Self {
            on_subscribe: Rc::new(on_subscribe),
        }
    }

    /// Create a stream from a closure.
    ///
    /// Equivalent to [`EventStream::create`], but lets the compiler infer the
    /// closure signature.
    #[must_use]
    pub fn from_fn(
        on_subscribe: impl Fn(&mut Subscriber<T>) -> Result<(), BindError> + 'static,
    ) -> Self {
        Self::create(on_subscribe)
    }

    /// Subscribe `on_next` to this stream.
    ///
    /// # Errors
    ///
    /// Whatever the subscription logic rejects, typically
    /// [`BindError::ThreadViolation`] when called off the UI thread.
    pub fn subscribe(&self, on_next: impl Fn(T) + 'static) -> Result<Subscription, BindError> {
        let mut subscriber = Subscriber::new(Rc::new(on_next));
        if let Err(err) = self.on_subscribe.call(&mut subscriber) {
            debug!(error = %err, "subscribe rejected");
            let mut partial = subscriber.into_subscription();
            if partial.unsubscribe().is_err() {
                partial.disarm();
            }
            return Err(err);
        }
        Ok(subscriber.into_subscription())
    }

    /// A stream applying `f` to every value of this one.
    ///
    /// Each downstream subscription owns one upstream subscription and ends it
    /// on unsubscribe.
    #[must_use]
    pub fn map<U: 'static>(&self, f: impl Fn(T) -> U + 'static) -> EventStream<U> {
        let upstream = self.clone();
        let f = Rc::new(f);
        EventStream::from_fn(move |downstream: &mut Subscriber<U>| {
            let emitter = downstream.emitter();
            let f = Rc::clone(&f);
            let inner = upstream.subscribe(move |value| {
                emitter.emit(f(value));
            })?;
            downstream.add_subscription(inner);
            Ok(())
        })
    }
}
