//! Bounded undo/redo stacks with debounced snapshot commits.

use std::collections::VecDeque;
use std::time::{Duration, Instant};

use tracing::trace;

use crate::debounce::Debounce;

/// Maximum retained undo snapshots; the oldest is evicted past this.
pub const MAX_UNDO_DEPTH: usize = 50;

/// Quiet period after the last buffer change before a snapshot commits.
pub const COMMIT_DEBOUNCE: Duration = Duration::from_millis(500);

/// Access to the externally owned buffer.
///
/// `set_buffer` is the replay channel: every write through it originates
/// from [`EditHistory`] applying an undo or redo step. The owner must
/// still propagate such writes to downstream consumers (live validation
/// and the like) exactly as it would a typed edit, but must not report
/// them back through [`EditHistory::note_change`] — suppression affects
/// recording only, never propagation.
pub trait HistoryHost {
	/// Current buffer contents.
	fn buffer(&self) -> &str;

	/// Replaces the buffer contents.
	fn set_buffer(&mut self, value: String);
}

/// Linear undo/redo controller for one text buffer.
///
/// The buffer lives with the owning editor. On every change the owner
/// calls [`note_change`] with the pre-change value and drives [`poll`]
/// from its event loop; a snapshot commits once 500 ms pass without
/// further changes, so one stack entry corresponds to one pause in
/// typing rather than one keystroke.
///
/// [`note_change`]: EditHistory::note_change
/// [`poll`]: EditHistory::poll
#[derive(Debug)]
pub struct EditHistory {
	undo_stack: VecDeque<String>,
	redo_stack: Vec<String>,
	/// Held for the synchronous duration of an undo/redo apply, so the
	/// resulting change notification is not recorded as a new edit. Never
	/// spans an await or timer boundary.
	suppress_recording: bool,
	pending: Debounce<String>,
}

impl Default for EditHistory {
	fn default() -> Self {
		Self::new()
	}
}

impl EditHistory {
	pub fn new() -> Self {
		Self {
			undo_stack: VecDeque::new(),
			redo_stack: Vec::new(),
			suppress_recording: false,
			pending: Debounce::new(COMMIT_DEBOUNCE),
		}
	}

	/// Reports one buffer change.
	///
	/// `previous` is the value the buffer held before this change. The
	/// snapshot is only scheduled; it commits via [`poll`] once the
	/// debounce window settles, and a later change within the window
	/// replaces it. Ignored while an undo/redo apply is in flight.
	///
	/// [`poll`]: EditHistory::poll
	pub fn note_change(&mut self, now: Instant, previous: &str) {
		if self.suppress_recording {
			trace!("change during replay, not recording");
			return;
		}
		self.pending.schedule(now, previous.to_owned());
	}

	/// Drives the pending commit; call from the owner's event loop.
	///
	/// Returns `true` if a snapshot was committed.
	pub fn poll(&mut self, now: Instant) -> bool {
		match self.pending.take_due(now) {
			Some(previous) => self.commit(previous),
			None => false,
		}
	}

	/// Commits any pending snapshot immediately.
	pub fn flush(&mut self) {
		if let Some(previous) = self.pending.cancel() {
			self.commit(previous);
		}
	}

	/// Wakeup hint for owners that sleep between events.
	pub fn next_deadline(&self) -> Option<Instant> {
		self.pending.deadline()
	}

	fn commit(&mut self, previous: String) -> bool {
		if self.undo_stack.back() == Some(&previous) {
			trace!("snapshot identical to stack top, skipping");
			return false;
		}
		self.push_undo(previous);
		if !self.redo_stack.is_empty() {
			trace!(cleared = self.redo_stack.len(), "redo stack cleared");
		}
		self.redo_stack.clear();
		trace!(undo = self.undo_stack.len(), "snapshot committed");
		true
	}

	fn push_undo(&mut self, snapshot: String) {
		self.undo_stack.push_back(snapshot);
		if self.undo_stack.len() > MAX_UNDO_DEPTH {
			self.undo_stack.pop_front();
			trace!("undo stack full, evicted oldest snapshot");
		}
	}

	/// Steps the buffer back one snapshot.
	///
	/// A pending snapshot is flushed first, so an in-flight typing burst
	/// becomes undoable instead of resurfacing as a stale commit after
	/// the stacks have moved. No-op returning `false` on an empty stack.
	pub fn undo(&mut self, host: &mut impl HistoryHost) -> bool {
		self.flush();
		let Some(snapshot) = self.undo_stack.pop_back() else {
			trace!("nothing to undo");
			return false;
		};
		self.redo_stack.push(host.buffer().to_owned());
		trace!(
			undo = self.undo_stack.len(),
			redo = self.redo_stack.len(),
			"undo"
		);
		self.apply(host, snapshot);
		true
	}

	/// Steps the buffer forward one snapshot. Symmetric to [`undo`].
	///
	/// [`undo`]: EditHistory::undo
	pub fn redo(&mut self, host: &mut impl HistoryHost) -> bool {
		self.flush();
		let Some(snapshot) = self.redo_stack.pop() else {
			trace!("nothing to redo");
			return false;
		};
		self.push_undo(host.buffer().to_owned());
		trace!(
			undo = self.undo_stack.len(),
			redo = self.redo_stack.len(),
			"redo"
		);
		self.apply(host, snapshot);
		true
	}

	fn apply(&mut self, host: &mut impl HistoryHost, value: String) {
		self.suppress_recording = true;
		host.set_buffer(value);
		self.suppress_recording = false;
	}

	pub fn can_undo(&self) -> bool {
		!self.undo_stack.is_empty()
	}

	pub fn can_redo(&self) -> bool {
		!self.redo_stack.is_empty()
	}

	pub fn undo_len(&self) -> usize {
		self.undo_stack.len()
	}

	pub fn redo_len(&self) -> usize {
		self.redo_stack.len()
	}

	/// New-document boundary: drops both stacks and any pending commit.
	///
	/// The owning screen invokes this when it loads a different document;
	/// the controller never infers a reload from buffer content.
	pub fn reset(&mut self) {
		let dropped_pending = self.pending.cancel().is_some();
		if dropped_pending || !self.undo_stack.is_empty() || !self.redo_stack.is_empty() {
			trace!(
				undo = self.undo_stack.len(),
				redo = self.redo_stack.len(),
				dropped_pending,
				"history reset"
			);
		}
		self.undo_stack.clear();
		self.redo_stack.clear();
		self.suppress_recording = false;
	}
}
