#![forbid(unsafe_code)]

//! Extension trait turning clickable widgets into streams.

use std::rc::Rc;

use clickbind_core::target::ClickTarget;
use clickbind_core::thread_confinement::ThreadConfinement;
use clickbind_runtime::reactive::EventStream;

use super::click::{ClickBridge, Clicked};
use super::listener::BindableClickListener;

/// A click tagged with the widget it came from.
pub struct ClickEvent<W> {
    target: Rc<W>,
}

impl<W> ClickEvent<W> {
    /// The widget that was clicked.
    #[must_use]
    pub fn target(&self) -> &Rc<W> {
        &self.target
    }
}

impl<W> Clone for ClickEvent<W> {
    fn clone(&self) -> Self {
        Self {
            target: Rc::clone(&self.target),
        }
    }
}

impl<W: std::fmt::Debug> std::fmt::Debug for ClickEvent<W> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ClickEvent")
            .field("target", &self.target)
            .finish()
    }
}

/// Click streams for any shared [`ClickTarget`].
///
/// # Caveats
///
/// - The returned stream holds a strong reference to the widget. Unsubscribe
///   and drop the stream to release it.
/// - Use one stream per widget. A second bridge-owned stream installs its own
///   listener and replaces the first one's.
/// - Subscribing twice to the same stream shares one listener; the later
///   subscription wins.
pub trait ClickStreams<W> {
    /// Stream of clicks through a bridge-owned listener.
    fn clicks(&self, confinement: impl ThreadConfinement + 'static) -> EventStream<Clicked>;

    /// Stream of clicks through `listener`, which the caller installs.
    fn clicks_with(
        &self,
        listener: Rc<dyn BindableClickListener>,
        confinement: impl ThreadConfinement + 'static,
    ) -> EventStream<Clicked>;

    /// Like [`ClickStreams::clicks`], with each click carrying its widget.
    fn click_events(&self, confinement: impl ThreadConfinement + 'static)
    -> EventStream<ClickEvent<W>>;
}

impl<W: ClickTarget + 'static> ClickStreams<W> for Rc<W> {
    fn clicks(&self, confinement: impl ThreadConfinement + 'static) -> EventStream<Clicked> {
        ClickBridge::new(Rc::clone(self), confinement).into_stream()
    }

    fn clicks_with(
        &self,
        listener: Rc<dyn BindableClickListener>,
        confinement: impl ThreadConfinement + 'static,
    ) -> EventStream<Clicked> {
        ClickBridge::with_listener(Rc::clone(self), listener, confinement).into_stream()
    }

    fn click_events(
        &self,
        confinement: impl ThreadConfinement + 'static,
    ) -> EventStream<ClickEvent<W>> {
        let target = Rc::clone(self);
        self.clicks(confinement).map(move |Clicked| ClickEvent {
            target: Rc::clone(&target),
        })
    }
}
