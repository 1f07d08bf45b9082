//! Dialog configuration.

use serde::{Deserialize, Serialize};

/// Layout size hint for the dialog surface.
///
/// Purely presentational; the controller carries it for the renderer but
/// attaches no behavior to it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DialogSize {
	Small,
	#[default]
	Medium,
	Large,
	Full,
}

/// Behavior switches for a dialog instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DialogOptions {
	pub size: DialogSize,
	/// Clicking the backdrop requests a close.
	pub close_on_overlay: bool,
	/// Escape requests a close.
	pub close_on_escape: bool,
	/// Whether the renderer should show an explicit close affordance
	/// wired to [`DialogController::request_close`].
	///
	/// [`DialogController::request_close`]: crate::DialogController::request_close
	pub show_close_button: bool,
}

impl Default for DialogOptions {
	fn default() -> Self {
		Self {
			size: DialogSize::default(),
			close_on_overlay: true,
			close_on_escape: true,
			show_close_button: true,
		}
	}
}
