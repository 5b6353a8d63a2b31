#![forbid(unsafe_code)]

//! Push button widget.
//!
//! [`Button`] models the toolkit side of the click bridge: a labelled widget
//! with a single click-listener slot. `perform_click` plays the role of the
//! toolkit's input dispatch and invokes whatever listener is installed.

use std::cell::RefCell;
use std::rc::Rc;

use clickbind_core::target::{ClickListener, ClickTarget};

/// A clickable button with one listener slot.
pub struct Button {
    label: String,
    listener: RefCell<Option<Rc<dyn ClickListener>>>,
}

impl Button {
    /// Create a button with no listener installed.
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            listener: RefCell::new(None),
        }
    }

    /// The button label.
    #[must_use]
    pub fn label(&self) -> &str {
        &self.label
    }

    /// The currently installed listener, if any.
    #[must_use]
    pub fn click_listener(&self) -> Option<Rc<dyn ClickListener>> {
        self.listener.borrow().clone()
    }

    /// Whether a listener is installed.
    #[must_use]
    pub fn has_click_listener(&self) -> bool {
        self.listener.borrow().is_some()
    }

    /// Dispatch one click to the installed listener.
    ///
    /// Returns `true` when a listener handled the click. The listener may
    /// replace or clear the slot from inside its callback.
    pub fn perform_click(&self) -> bool {
        let listener = self.listener.borrow().clone();
        match listener {
            Some(listener) => {
                listener.on_click();
                true
            }
            None => false,
        }
    }
}

impl ClickTarget for Button {
    fn set_click_listener(&self, listener: Option<Rc<dyn ClickListener>>) {
        *self.listener.borrow_mut() = listener;
    }
}

impl std::fmt::Debug for Button {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Button")
            .field("label", &self.label)
            .field("has_click_listener", &self.has_click_listener())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clickbind_core::target::same_listener;
    use std::cell::Cell;

    #[test]
    fn new_button_has_no_listener() {
        let button = Button::new("OK");
        assert_eq!(button.label(), "OK");
        assert!(!button.has_click_listener());
        assert!(!button.perform_click());
    }

    #[test]
    fn installed_listener_receives_clicks() {
        let button = Button::new("OK");
        let hits = Rc::new(Cell::new(0u32));
        let counter = Rc::clone(&hits);
        button.set_click_listener(Some(Rc::new(move || counter.set(counter.get() + 1))));

        assert!(button.perform_click());
        assert!(button.perform_click());
        assert_eq!(hits.get(), 2);
    }

    #[test]
    fn installing_replaces_previous_listener() {
        let button = Button::new("OK");
        let first: Rc<dyn ClickListener> = Rc::new(|| {});
        let second: Rc<dyn ClickListener> = Rc::new(|| {});
        button.set_click_listener(Some(Rc::clone(&first)));
        button.set_click_listener(Some(Rc::clone(&second)));

        let installed = button.click_listener().expect("installed");
        assert!(same_listener(&installed, &second));
        assert!(!same_listener(&installed, &first));

        button.set_click_listener(None);
        assert!(button.click_listener().is_none());
    }

    #[test]
    fn listener_may_clear_slot_during_click() {
        let button = Rc::new(Button::new("once"));
        let weak = Rc::downgrade(&button);
        let hits = Rc::new(Cell::new(0u32));
        let counter = Rc::clone(&hits);
        button.set_click_listener(Some(Rc::new(move || {
            counter.set(counter.get() + 1);
            if let Some(button) = weak.upgrade() {
                button.set_click_listener(None);
            }
        })));

        assert!(button.perform_click());
        assert!(!button.perform_click());
        assert_eq!(hits.get(), 1);
    }

    #[test]
    fn debug_shows_label_and_slot() {
        let button = Button::new("Save");
        let dbg = format!("{button:?}");
        assert!(dbg.contains("Save"));
        assert!(dbg.contains("has_click_listener: false"));
    }
}
