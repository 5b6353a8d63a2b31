#![forbid(unsafe_code)]

//! Click bridge: one widget, one listener, a stream of [`Clicked`].
//!
//! # Ownership
//!
//! The bridge fixes at construction who owns the native listener:
//!
//! - **Caller-owned** ([`ClickBridge::with_listener`]): the caller installed
//!   (or will install) the listener on the widget. Subscribing only attaches
//!   a callback; teardown only detaches it. The widget slot is never touched.
//! - **Bridge-owned** ([`ClickBridge::new`]): the first subscribe creates a
//!   [`BindableListener`] and installs it; teardown detaches and clears the
//!   widget slot.
//!
//! The ownership tag never changes after construction, so a caller-owned
//! bridge keeps its listener across resubscribes.
//!
//! # Limitations
//!
//! Subscriptions on one bridge share one listener. A second live subscription
//! re-attaches the callback and the first silently stops receiving clicks
//! (last attach wins). Tearing down either one detaches the shared callback.
//!
//! Teardown hooks are not tied to the listener they attached to. A hook left
//! over from an older subscription tears down whatever a newer one is using:
//! after subscribe A, subscribe B, unsubscribe B, subscribe C, unsubscribe A,
//! subscription C receives nothing, and a bridge-owned listener is gone from
//! the widget. End older subscriptions before subscribing again.
//!
//! The bridge holds a strong reference to the widget until every
//! subscription and stream handle is gone.

use std::cell::RefCell;
use std::rc::Rc;

use clickbind_core::error::BindError;
use clickbind_core::target::{ClickListener, ClickTarget};
use clickbind_core::thread_confinement::ThreadConfinement;
use clickbind_runtime::reactive::{Emitter, EventStream, OnSubscribe, Subscriber};
use clickbind_runtime::release::ConfinedRelease;
use tracing::{debug, trace};

use super::listener::{ActionCallback, BindableClickListener, BindableListener};

/// Value emitted once per click. Carries no payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Clicked;

/// Who installed the listener on the widget.
enum ListenerOwnership {
    Caller(Rc<dyn BindableClickListener>),
    Bridge,
}

impl ListenerOwnership {
    fn is_caller(&self) -> bool {
        matches!(self, Self::Caller(_))
    }
}

struct BridgeState<W> {
    widget: Rc<W>,
    ownership: ListenerOwnership,
    /// Listener in use by the current subscription, cleared on teardown.
    listener: Option<Rc<dyn BindableClickListener>>,
}

impl<W: ClickTarget> BridgeState<W> {
    fn acquire_listener(&mut self) -> Rc<dyn BindableClickListener> {
        let listener: Rc<dyn BindableClickListener> = match &self.ownership {
            ListenerOwnership::Caller(listener) => Rc::clone(listener),
            ListenerOwnership::Bridge => match &self.listener {
                Some(existing) => Rc::clone(existing),
                None => {
                    let created = Rc::new(BindableListener::new());
                    let native: Rc<dyn ClickListener> = created.clone();
                    self.widget.set_click_listener(Some(native));
                    debug!("bridge listener installed on widget");
                    created
                }
            },
        };
        self.listener = Some(Rc::clone(&listener));
        listener
    }

    fn teardown(&mut self) {
        let Some(listener) = self.listener.take() else {
            debug!("click bridge teardown with no listener in use");
            return;
        };
        listener.bindable().detach();
        if !self.ownership.is_caller() {
            self.widget.set_click_listener(None);
            debug!("bridge listener removed from widget");
        }
    }
}

/// Forwards each click into one subscription's emitter.
struct ForwardingCallback {
    emitter: Emitter<Clicked>,
}

impl ActionCallback for ForwardingCallback {
    fn on_action_occurred(&self) {
        let delivered = self.emitter.emit(Clicked);
        trace!(delivered, "click forwarded");
    }
}

/// Subscription logic bridging a widget's listener slot to a stream.
///
/// Usually consumed through [`ClickBridge::into_stream`] or the
/// [`ClickStreams`](super::ClickStreams) extension.
pub struct ClickBridge<W> {
    state: Rc<RefCell<BridgeState<W>>>,
    confinement: Rc<dyn ThreadConfinement>,
}

impl<W: ClickTarget + 'static> ClickBridge<W> {
    /// Bridge-owned listener: installed on subscribe, removed on teardown.
    pub fn new(widget: Rc<W>, confinement: impl ThreadConfinement + 'static) -> Self {
        Self::with_ownership(widget, ListenerOwnership::Bridge, confinement)
    }

    /// Caller-owned listener: only its callback slot is managed.
    ///
    /// The caller is responsible for installing `listener` on `widget`.
    pub fn with_listener(
        widget: Rc<W>,
        listener: Rc<dyn BindableClickListener>,
        confinement: impl ThreadConfinement + 'static,
    ) -> Self {
        Self::with_ownership(widget, ListenerOwnership::Caller(listener), confinement)
    }

    fn with_ownership(
        widget: Rc<W>,
        ownership: ListenerOwnership,
        confinement: impl ThreadConfinement + 'static,
    ) -> Self {
        Self {
            state: Rc::new(RefCell::new(BridgeState {
                widget,
                ownership,
                listener: None,
            })),
            confinement: Rc::new(confinement),
        }
    }

    /// Whether the listener was supplied by the caller.
    #[must_use]
    pub fn is_caller_owned(&self) -> bool {
        self.state.borrow().ownership.is_caller()
    }

    /// Whether a subscription currently holds the listener.
    #[must_use]
    pub fn has_listener(&self) -> bool {
        self.state.borrow().listener.is_some()
    }

    /// The bridged widget.
    #[must_use]
    pub fn widget(&self) -> Rc<W> {
        Rc::clone(&self.state.borrow().widget)
    }

    /// Wrap the bridge in a cold stream.
    #[must_use]
    pub fn into_stream(self) -> EventStream<Clicked> {
        EventStream::create(self)
    }
}

impl<W: ClickTarget + 'static> OnSubscribe<Clicked> for ClickBridge<W> {
    fn call(&self, subscriber: &mut Subscriber<Clicked>) -> Result<(), BindError> {
        self.confinement.check("subscribe")?;

        let listener = self.state.borrow_mut().acquire_listener();
        listener.bindable().attach(Rc::new(ForwardingCallback {
            emitter: subscriber.emitter(),
        }));

        let state = Rc::clone(&self.state);
        subscriber.add(ConfinedRelease::new(Rc::clone(&self.confinement), move || {
            state.borrow_mut().teardown();
        }));
        debug!(caller_owned = self.is_caller_owned(), "click bridge subscribed");
        Ok(())
    }
}

impl<W> std::fmt::Debug for ClickBridge<W> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let state = self.state.borrow();
        f.debug_struct("ClickBridge")
            .field("caller_owned", &state.ownership.is_caller())
            .field("has_listener", &state.listener.is_some())
            .finish_non_exhaustive()
    }
}
