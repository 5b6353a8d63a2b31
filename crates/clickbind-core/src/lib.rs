#![forbid(unsafe_code)]

//! Core: click-target contracts, UI-thread confinement, and errors.
//!
//! # Role in clickbind
//! `clickbind-core` is the contract layer. It names the collaborators the
//! event bridge talks to without knowing any concrete toolkit:
//!
//! - **ClickTarget / ClickListener**: a widget with exactly one click-listener
//!   slot, and the native callback installed in it.
//! - **ThreadConfinement / UiThread**: the assertion run at every boundary
//!   that touches shared UI state.
//! - **BindError**: the (small) error taxonomy shared by every crate.
//!
//! # How it fits in the system
//! The runtime (`clickbind-runtime`) builds cold event streams and
//! confinement-checked release hooks on top of these types. The widgets crate
//! (`clickbind-widgets`) implements the bridge between a `ClickTarget` and an
//! `EventStream`.

pub mod error;
pub mod logging;
pub mod target;
pub mod thread_confinement;

// Re-export tracing macros at crate root for ergonomic use.
#[cfg(feature = "tracing")]
pub use logging::{debug, info, trace, warn};

pub use error::BindError;
pub use target::{ClickListener, ClickTarget, same_listener};
pub use thread_confinement::{ThreadConfinement, UiThread};
