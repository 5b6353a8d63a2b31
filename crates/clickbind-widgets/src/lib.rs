#![forbid(unsafe_code)]

//! Widgets and the click bridge.
//!
//! - [`button`]: [`Button`], a concrete [`ClickTarget`] with one listener slot.
//! - [`bind`]: [`BindableListener`], [`ClickBridge`], and the [`ClickStreams`]
//!   extension that turns any `Rc<impl ClickTarget>` into a stream of
//!   [`Clicked`] values.
//!
//! # Example
//!
//! ```
//! use std::cell::Cell;
//! use std::rc::Rc;
//! use clickbind_core::UiThread;
//! use clickbind_widgets::{Button, ClickStreams};
//!
//! let button = Rc::new(Button::new("OK"));
//! let count = Rc::new(Cell::new(0));
//! let seen = Rc::clone(&count);
//!
//! let mut sub = button
//!     .clicks(UiThread::current())
//!     .subscribe(move |_| seen.set(seen.get() + 1))
//!     .unwrap();
//!
//! button.perform_click();
//! button.perform_click();
//! sub.unsubscribe().unwrap();
//! button.perform_click();
//!
//! assert_eq!(count.get(), 2);
//! assert!(!button.has_click_listener());
//! ```
//!
//! [`ClickTarget`]: clickbind_core::ClickTarget

pub mod bind;
pub mod button;

pub use bind::{
    ActionCallback, BindableClickListener, BindableListener, ClickBridge, ClickEvent,
    ClickStreams, Clicked,
};
pub use button::Button;
