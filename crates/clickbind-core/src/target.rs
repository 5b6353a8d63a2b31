#![forbid(unsafe_code)]

//! Click-target contracts.
//!
//! A [`ClickTarget`] is any widget exposing a single click-listener slot.
//! Installing a listener silently replaces whatever was there; installing
//! `None` clears the slot. A [`ClickListener`] is the native callback the
//! toolkit invokes, on the UI thread, once per click.
//!
//! Plain closures are listeners too, which keeps the traditional callback
//! style available next to the stream bindings:
//!
//! ```
//! use std::cell::Cell;
//! use std::rc::Rc;
//! use clickbind_core::target::ClickListener;
//!
//! let hits = Rc::new(Cell::new(0));
//! let counter = Rc::clone(&hits);
//! let listener: Rc<dyn ClickListener> = Rc::new(move || counter.set(counter.get() + 1));
//! listener.on_click();
//! assert_eq!(hits.get(), 1);
//! ```

use std::rc::Rc;

/// Native click callback installed in a widget's listener slot.
pub trait ClickListener {
    /// Invoked by the toolkit once per click, on the UI thread.
    fn on_click(&self);
}

impl<F: Fn()> ClickListener for F {
    fn on_click(&self) {
        self()
    }
}

/// A widget with exactly one click-listener slot.
pub trait ClickTarget {
    /// Replace the installed listener. `None` uninstalls it.
    fn set_click_listener(&self, listener: Option<Rc<dyn ClickListener>>);
}

impl<W: ClickTarget + ?Sized> ClickTarget for Rc<W> {
    fn set_click_listener(&self, listener: Option<Rc<dyn ClickListener>>) {
        (**self).set_click_listener(listener);
    }
}

/// Whether two listener handles point at the same allocation.
///
/// Works across concrete and trait-object handles, so a slot's
/// `Rc<dyn ClickListener>` can be compared with the `Rc<L>` that was installed.
#[inline]
#[must_use]
pub fn same_listener<A: ?Sized, B: ?Sized>(a: &Rc<A>, b: &Rc<B>) -> bool {
    std::ptr::addr_eq(Rc::as_ptr(a), Rc::as_ptr(b))
}
