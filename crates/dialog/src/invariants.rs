use crate::{DialogController, DialogOptions, FocusHost, FocusNode, NodeId, ScrollLock};

struct BareHost {
	focused: Option<NodeId>,
}

impl FocusHost for BareHost {
	fn nodes(&self) -> Vec<FocusNode> {
		Vec::new()
	}

	fn container(&self) -> NodeId {
		NodeId(0)
	}

	fn focused(&self) -> Option<NodeId> {
		self.focused
	}

	fn set_focus(&mut self, id: NodeId) {
		self.focused = Some(id);
	}

	fn is_attached(&self, _id: NodeId) -> bool {
		true
	}
}

/// Must hold the scroll lock exactly while the observed flag is up.
///
/// - Enforced in: `DialogController::sync`
/// - Failure symptom: page scroll stays frozen after the dialog closes,
///   or the background scrolls behind an open dialog.
#[test]
fn lock_held_iff_open() {
	let mut host = BareHost { focused: None };
	let mut lock = ScrollLock::new();
	let mut ctl = DialogController::new(DialogOptions::default());

	assert!(!lock.is_locked());
	ctl.sync(true, &mut host, &mut lock);
	assert!(lock.is_locked());
	ctl.sync(false, &mut host, &mut lock);
	assert!(!lock.is_locked());
}

/// Must capture the restoration target synchronously on every open edge.
///
/// - Enforced in: `DialogController::open`
/// - Failure symptom: after rapid open/close/open, closing returns focus
///   to an element from two generations ago.
#[test]
fn capture_is_per_open_edge() {
	let mut host = BareHost {
		focused: Some(NodeId(1)),
	};
	let mut lock = ScrollLock::new();
	let mut ctl = DialogController::new(DialogOptions::default());

	ctl.sync(true, &mut host, &mut lock);
	ctl.sync(false, &mut host, &mut lock);
	host.focused = Some(NodeId(2));
	ctl.sync(true, &mut host, &mut lock);
	ctl.sync(false, &mut host, &mut lock);
	assert_eq!(host.focused, Some(NodeId(2)));
}

/// Must never panic on a dialog with zero focusable descendants.
///
/// - Enforced in: `DialogController::open`, `DialogController::trap_tab`
/// - Failure symptom: opening an empty confirmation dialog crashes the
///   screen instead of parking focus on the container.
#[test]
fn empty_dialog_degrades_to_container_focus() {
	let mut host = BareHost { focused: None };
	let mut lock = ScrollLock::new();
	let mut ctl = DialogController::new(DialogOptions::default());

	ctl.sync(true, &mut host, &mut lock);
	assert_eq!(host.focused, Some(NodeId(0)));
}
