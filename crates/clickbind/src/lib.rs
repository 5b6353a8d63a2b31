#![forbid(unsafe_code)]

//! clickbind public facade crate.
//!
//! Bridges single-listener click widgets to cold event streams, with
//! subscribe and unsubscribe confined to the UI thread.
//!
//! ```
//! use std::rc::Rc;
//! use clickbind::prelude::*;
//!
//! let button = Rc::new(Button::new("OK"));
//! let mut sub = button
//!     .clicks(UiThread::current())
//!     .map(|_| "ok")
//!     .subscribe(|label| assert_eq!(label, "ok"))
//!     .unwrap();
//! button.perform_click();
//! sub.unsubscribe().unwrap();
//! ```

pub use clickbind_core::logging;

pub mod prelude {
    pub use clickbind_core as core;
    pub use clickbind_runtime as runtime;
    pub use clickbind_widgets as widgets;

    pub use clickbind_core::{BindError, ClickListener, ClickTarget, ThreadConfinement, UiThread};
    pub use clickbind_runtime::{EventStream, Subscription};
    pub use clickbind_widgets::{
        BindableClickListener, BindableListener, Button, ClickBridge, ClickEvent, ClickStreams,
        Clicked,
    };
}
