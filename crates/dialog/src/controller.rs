//! Dialog lifecycle and keyboard trap.

use tracing::trace;

use crate::focus::{FocusHost, NodeId, focus_order};
use crate::options::DialogOptions;
use crate::scroll_lock::ScrollLock;

/// The subset of keyboard input the dialog reacts to.
///
/// Everything else maps to [`Key::Other`] and is left to default
/// processing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
	Escape,
	Tab,
	/// Shift+Tab.
	BackTab,
	Other,
}

/// Outcome of feeding an input event to the controller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DialogResponse {
	/// Not handled; default processing proceeds.
	Ignored,
	/// Handled; default processing must be suppressed.
	Consumed,
	/// The owner should flip its open flag to false; the triggering event
	/// is consumed. The controller never flips any open state itself.
	CloseRequested,
}

/// Drives one dialog's open/close transitions, focus trap, and scroll
/// lock against a caller-owned open flag.
///
/// The flag stays with the owning screen; the controller only remembers
/// the last value it observed, for edge detection. Feed every flag change
/// through [`sync`], every key through [`handle_key`], and call
/// [`teardown`] when the owning component unmounts, whatever the flag
/// says at that point.
///
/// [`sync`]: DialogController::sync
/// [`handle_key`]: DialogController::handle_key
/// [`teardown`]: DialogController::teardown
#[derive(Debug)]
pub struct DialogController {
	options: DialogOptions,
	was_open: bool,
	holds_lock: bool,
	previously_focused: Option<NodeId>,
}

impl DialogController {
	pub fn new(options: DialogOptions) -> Self {
		Self {
			options,
			was_open: false,
			holds_lock: false,
			previously_focused: None,
		}
	}

	pub fn options(&self) -> &DialogOptions {
		&self.options
	}

	/// The open flag as of the last [`sync`] call.
	///
	/// [`sync`]: DialogController::sync
	pub fn is_open(&self) -> bool {
		self.was_open
	}

	/// Reconciles the controller with the caller-owned open flag.
	///
	/// Call on every flag change (calling redundantly is a no-op). Each
	/// false→true edge re-captures the focused element synchronously, so a
	/// rapid open/close/open sequence cannot leave a stale restoration
	/// target behind.
	pub fn sync(&mut self, is_open: bool, host: &mut impl FocusHost, lock: &mut ScrollLock) {
		self.sync_with_hint(is_open, None, host, lock);
	}

	/// [`sync`] with a preferred initial focus target for the open edge.
	///
	/// The hint is honored only if it is in the dialog's tab order;
	/// otherwise focus falls back to the first focusable as usual.
	///
	/// [`sync`]: DialogController::sync
	pub fn sync_with_hint(
		&mut self,
		is_open: bool,
		initial_focus: Option<NodeId>,
		host: &mut impl FocusHost,
		lock: &mut ScrollLock,
	) {
		match (self.was_open, is_open) {
			(false, true) => self.open(initial_focus, host, lock),
			(true, false) => self.close(host, lock),
			_ => {}
		}
		self.was_open = is_open;
	}

	fn open(&mut self, hint: Option<NodeId>, host: &mut impl FocusHost, lock: &mut ScrollLock) {
		self.previously_focused = host.focused();
		if !self.holds_lock {
			lock.acquire();
			self.holds_lock = true;
		}
		let order = focus_order(&host.nodes());
		let target = hint
			.filter(|id| order.contains(id))
			.or_else(|| order.first().copied());
		match target {
			Some(id) => host.set_focus(id),
			// No focusable descendant: park focus on the container so
			// keyboard users are not stranded outside the trap.
			None => host.set_focus(host.container()),
		}
		trace!(
			restore_to = ?self.previously_focused,
			focusables = order.len(),
			"dialog opened"
		);
	}

	fn close(&mut self, host: &mut impl FocusHost, lock: &mut ScrollLock) {
		if self.holds_lock {
			lock.release();
			self.holds_lock = false;
		}
		if let Some(prev) = self.previously_focused.take() {
			if host.is_attached(prev) {
				host.set_focus(prev);
			} else {
				trace!(target = ?prev, "restore target detached, skipping");
			}
		}
		trace!("dialog closed");
	}

	/// Feeds one keyboard event through the trap.
	///
	/// Mounted for the component's lifetime; a strict no-op while the
	/// dialog is closed. The focusable set is re-queried on every Tab so
	/// content that changed after open stays trapped.
	pub fn handle_key(&mut self, key: Key, host: &mut impl FocusHost) -> DialogResponse {
		if !self.was_open {
			return DialogResponse::Ignored;
		}
		match key {
			Key::Escape if self.options.close_on_escape => DialogResponse::CloseRequested,
			Key::Escape | Key::Other => DialogResponse::Ignored,
			Key::Tab => self.trap_tab(host, false),
			Key::BackTab => self.trap_tab(host, true),
		}
	}

	fn trap_tab(&mut self, host: &mut impl FocusHost, backward: bool) -> DialogResponse {
		let order = focus_order(&host.nodes());
		let (Some(&first), Some(&last)) = (order.first(), order.last()) else {
			host.set_focus(host.container());
			return DialogResponse::Consumed;
		};
		let focused = host.focused();
		let inside = focused.is_some_and(|f| order.contains(&f));
		let (boundary, wrap_to) = if backward { (first, last) } else { (last, first) };
		if !inside || focused == Some(boundary) {
			host.set_focus(wrap_to);
			trace!(to = ?wrap_to, backward, "focus wrapped");
			return DialogResponse::Consumed;
		}
		DialogResponse::Ignored
	}

	/// A click landing on the backdrop rather than the dialog surface.
	pub fn handle_overlay_click(&self) -> DialogResponse {
		if self.was_open && self.options.close_on_overlay {
			DialogResponse::CloseRequested
		} else {
			DialogResponse::Ignored
		}
	}

	/// The explicit close affordance. Rendered only when
	/// [`DialogOptions::show_close_button`] is set; always honored while
	/// open.
	pub fn request_close(&self) -> DialogResponse {
		if self.was_open {
			DialogResponse::CloseRequested
		} else {
			DialogResponse::Ignored
		}
	}

	/// Unmount path: releases held resources regardless of the current
	/// flag value. Safe on a controller that never opened.
	pub fn teardown(&mut self, lock: &mut ScrollLock) {
		if self.holds_lock {
			lock.release();
			self.holds_lock = false;
		}
		self.previously_focused = None;
		self.was_open = false;
	}
}
