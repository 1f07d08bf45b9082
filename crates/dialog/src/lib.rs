//! Modal dialog lifecycle controller.
//!
//! A dialog's open flag is owned by the screen that renders it; this crate
//! only reacts to flag transitions. [`DialogController`] guarantees that
//! while the flag is up, keyboard focus cycles inside the dialog subtree and
//! background scroll is suspended, and that both are restored when the flag
//! drops or the owning component unmounts.
//!
//! # Architecture
//!
//! ```text
//! DialogController               FocusHost (the screen implements)
//! ┌──────────────────┐           ┌────────────────────────────┐
//! │ sync()           │           │ nodes()                    │
//! │ handle_key()     │◄─────────►│ focused() / set_focus()    │
//! │ overlay_click()  │           │ is_attached()              │
//! │ teardown()       │           │ container()                │
//! └────────┬─────────┘           └────────────────────────────┘
//!          │ acquire/release
//!          ▼
//!    ScrollLock (shared, reference-counted)
//! ```
//!
//! Close triggers (Escape, backdrop click, close button) never flip any
//! state here; they surface as [`DialogResponse::CloseRequested`] and the
//! owner flips its own flag, which the controller observes on the next
//! [`DialogController::sync`].

mod controller;
mod focus;
mod options;
mod scroll_lock;

pub use controller::{DialogController, DialogResponse, Key};
pub use focus::{FocusHost, FocusNode, NodeId, Widget, focus_order};
pub use options::{DialogOptions, DialogSize};
pub use scroll_lock::ScrollLock;

#[cfg(test)]
mod invariants;
