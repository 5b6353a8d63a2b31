#![forbid(unsafe_code)]

//! Click listener with a bindable callback slot.
//!
//! [`BindableListener`] is the native listener the click bridge installs (or
//! borrows from the caller). It forwards each click to at most one attached
//! [`ActionCallback`] and does nothing when none is attached.
//!
//! # Layering imperative behavior
//!
//! To keep a traditional callback next to the stream, embed a
//! `BindableListener` and implement [`BindableClickListener`]. The base
//! `on_click` **must** be called from the outer `on_click`, otherwise the
//! stream stops seeing clicks:
//!
//! ```
//! use std::cell::Cell;
//! use clickbind_core::ClickListener;
//! use clickbind_widgets::{BindableClickListener, BindableListener};
//!
//! #[derive(Default)]
//! struct CountingListener {
//!     base: BindableListener,
//!     count: Cell<u32>,
//! }
//!
//! impl ClickListener for CountingListener {
//!     fn on_click(&self) {
//!         self.count.set(self.count.get() + 1);
//!         self.base.on_click();
//!     }
//! }
//!
//! impl BindableClickListener for CountingListener {
//!     fn bindable(&self) -> &BindableListener {
//!         &self.base
//!     }
//! }
//! ```

use std::cell::RefCell;
use std::rc::Rc;

use clickbind_core::target::ClickListener;
use tracing::debug;

/// The "action occurred" capability a listener forwards clicks to.
pub trait ActionCallback {
    /// Called once per forwarded click.
    fn on_action_occurred(&self);
}

impl<F: Fn()> ActionCallback for F {
    fn on_action_occurred(&self) {
        self()
    }
}

/// Native click listener forwarding to one attached callback.
#[derive(Default)]
pub struct BindableListener {
    callback: RefCell<Option<Rc<dyn ActionCallback>>>,
}

impl BindableListener {
    /// Create a listener with no callback attached.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Attach `callback`, replacing any attached one (last attach wins).
    pub fn attach(&self, callback: Rc<dyn ActionCallback>) {
        let replaced = self.callback.borrow_mut().replace(callback).is_some();
        debug!(replaced, "binding callback attached");
    }

    /// Detach the callback. Later clicks are no-ops.
    pub fn detach(&self) {
        let had_callback = self.callback.borrow_mut().take().is_some();
        debug!(had_callback, "binding callback detached");
    }

    /// Whether a callback is attached.
    #[must_use]
    pub fn has_callback(&self) -> bool {
        self.callback.borrow().is_some()
    }
}

impl ClickListener for BindableListener {
    /// Forward the click to the attached callback, if any.
    ///
    /// The callback is cloned out of the slot before it runs, so it may detach
    /// or re-attach from inside.
    fn on_click(&self) {
        let callback = self.callback.borrow().clone();
        if let Some(callback) = callback {
            callback.on_action_occurred();
        }
    }
}

impl std::fmt::Debug for BindableListener {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BindableListener")
            .field("has_callback", &self.has_callback())
            .finish()
    }
}

/// A click listener that embeds a [`BindableListener`].
///
/// Implementors must call `self.bindable().on_click()` (or the embedded
/// field's `on_click`) from their own `on_click`.
pub trait BindableClickListener: ClickListener {
    /// The embedded forwarding slot.
    fn bindable(&self) -> &BindableListener;
}

impl BindableClickListener for BindableListener {
    fn bindable(&self) -> &BindableListener {
        self
    }
}
