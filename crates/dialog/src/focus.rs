//! Focus-tree abstraction and tab-order computation.
//!
//! The controller never touches a real widget tree. The owning screen
//! reports its dialog subtree as a flat, document-ordered list of
//! [`FocusNode`]s and performs focus moves on request. Which of those nodes
//! participate in the tab order is decided here, so the trap behaves the
//! same across frontends.

/// Opaque identity of an element in the owner's focus tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId(pub u64);

/// Classification of a dialog descendant, as far as focusability cares.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Widget {
	Button,
	Input,
	Select,
	TextArea,
	/// A link; only links with a target participate in the tab order.
	Link { has_href: bool },
	/// Anything else. Focusable only via an explicit tab index.
	Other,
}

/// A descendant of the dialog subtree as reported by the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FocusNode {
	pub id: NodeId,
	pub widget: Widget,
	pub enabled: bool,
	/// Explicit tab index, if the element carries one. Negative values
	/// remove the element from the tab order.
	pub tab_index: Option<i32>,
}

impl FocusNode {
	/// Whether this node participates in the dialog's tab order.
	///
	/// Criteria: enabled buttons, inputs, selects, and text areas; any
	/// enabled element with an explicit non-negative tab index; links with
	/// a target.
	pub fn is_focusable(&self) -> bool {
		if !self.enabled {
			return false;
		}
		match self.tab_index {
			Some(idx) if idx < 0 => false,
			Some(_) => true,
			None => match self.widget {
				Widget::Button | Widget::Input | Widget::Select | Widget::TextArea => true,
				Widget::Link { has_href } => has_href,
				Widget::Other => false,
			},
		}
	}
}

/// Environment the dialog controller operates against.
///
/// The screen that owns the dialog implements this over its widget tree.
/// Focus moves requested through [`set_focus`] must land synchronously;
/// the controller re-queries [`nodes`] on every Tab keypress rather than
/// caching the set at open time, so dialogs whose content changes while
/// open keep a correct trap.
///
/// [`set_focus`]: FocusHost::set_focus
/// [`nodes`]: FocusHost::nodes
pub trait FocusHost {
	/// Dialog-subtree descendants in document order.
	fn nodes(&self) -> Vec<FocusNode>;

	/// The dialog container itself.
	///
	/// Must accept programmatic focus even when no descendant does (a
	/// programmatic-only tab stop), so the trap always has somewhere to
	/// send focus.
	fn container(&self) -> NodeId;

	/// The element currently holding focus anywhere in the document.
	fn focused(&self) -> Option<NodeId>;

	/// Moves focus to the given element.
	fn set_focus(&mut self, id: NodeId);

	/// Whether an element is still part of the live document.
	///
	/// Used to skip focus restoration when the pre-open element was
	/// removed while the dialog was up.
	fn is_attached(&self, id: NodeId) -> bool;
}

/// Computes the dialog's tab order from a document-ordered node list.
pub fn focus_order(nodes: &[FocusNode]) -> Vec<NodeId> {
	nodes.iter().filter(|n| n.is_focusable()).map(|n| n.id).collect()
}
