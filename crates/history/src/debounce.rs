//! Cancel-and-reschedule debounce with a single pending slot.

use std::time::{Duration, Instant};

/// Coalesces a burst of events into the last one scheduled.
///
/// At most one payload is pending at a time; every [`schedule`] replaces
/// it and pushes the deadline out to a full quiet window from `now`
/// (last-write-wins, not a queue). The owner drives delivery by calling
/// [`take_due`] from its event loop; nothing fires on its own, which is
/// what makes teardown trivial and the policy testable with synthetic
/// instants.
///
/// [`schedule`]: Debounce::schedule
/// [`take_due`]: Debounce::take_due
#[derive(Debug)]
pub struct Debounce<T> {
	window: Duration,
	pending: Option<(Instant, T)>,
}

impl<T> Debounce<T> {
	pub fn new(window: Duration) -> Self {
		Self {
			window,
			pending: None,
		}
	}

	/// Replaces the pending payload and restarts the quiet window.
	pub fn schedule(&mut self, now: Instant, value: T) {
		self.pending = Some((now + self.window, value));
	}

	/// Drops the pending payload, returning it.
	pub fn cancel(&mut self) -> Option<T> {
		self.pending.take().map(|(_, value)| value)
	}

	/// Delivers the payload if the quiet window has settled.
	///
	/// Fires at most once per settled window.
	pub fn take_due(&mut self, now: Instant) -> Option<T> {
		match &self.pending {
			Some((deadline, _)) if now >= *deadline => self.cancel(),
			_ => None,
		}
	}

	pub fn is_pending(&self) -> bool {
		self.pending.is_some()
	}

	/// Deadline of the pending payload, for owners that schedule wakeups.
	pub fn deadline(&self) -> Option<Instant> {
		self.pending.as_ref().map(|(deadline, _)| *deadline)
	}
}
