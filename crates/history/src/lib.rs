//! Linear undo/redo over a single text buffer.
//!
//! Recording every keystroke makes an undo stack useless, so snapshots are
//! committed only after a quiet period: each buffer change schedules the
//! pre-change value on a cancel-and-reschedule debounce, and only the last
//! value standing when the window settles is pushed. The stacks are
//! bounded; the oldest snapshot is evicted past [`MAX_UNDO_DEPTH`].
//!
//! # Architecture
//!
//! ```text
//! EditHistory                    HistoryHost (the editor implements)
//! ┌──────────────────┐           ┌────────────────────────────┐
//! │ undo_stack       │           │ buffer()                   │
//! │ redo_stack       │◄─────────►│ set_buffer()               │
//! │ note_change()    │           └────────────────────────────┘
//! │ poll()           │
//! │ undo() / redo()  │
//! └──────────────────┘
//! ```
//!
//! The buffer itself stays with the owning editor; the controller reads it
//! to snapshot and writes it back through [`HistoryHost::set_buffer`] when
//! replaying. Everything is clock-explicit (`Instant` parameters), so the
//! same code runs under a UI event loop and under tests with synthetic
//! time.

mod debounce;
mod history;

pub use debounce::Debounce;
pub use history::{COMMIT_DEBOUNCE, EditHistory, HistoryHost, MAX_UNDO_DEPTH};
