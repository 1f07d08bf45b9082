//! Reference-counted background scroll lock.
//!
//! Suspending background scroll is process-wide state shared by every
//! overlay surface, so it is modeled as an explicit injected collaborator
//! rather than an ambient global. The count lets nested or sequential
//! dialogs compose: scroll resumes only when the last holder releases.

use tracing::trace;

/// Shared scroll-suspension service.
///
/// The renderer consults [`is_locked`] each frame; controllers pair
/// `acquire` with `release` and track their own held bit so a double
/// close releases exactly once.
///
/// [`is_locked`]: ScrollLock::is_locked
#[derive(Debug, Default)]
pub struct ScrollLock {
	depth: usize,
}

impl ScrollLock {
	pub fn new() -> Self {
		Self::default()
	}

	/// Suspends background scroll for one more holder.
	pub fn acquire(&mut self) {
		self.depth += 1;
		trace!(depth = self.depth, "scroll lock acquired");
	}

	/// Releases one holder. An unpaired release is ignored rather than
	/// underflowing.
	pub fn release(&mut self) {
		match self.depth.checked_sub(1) {
			Some(depth) => {
				self.depth = depth;
				trace!(depth = self.depth, "scroll lock released");
			}
			None => trace!("scroll lock release without acquire, ignoring"),
		}
	}

	/// Whether background scroll is currently suspended.
	pub fn is_locked(&self) -> bool {
		self.depth > 0
	}

	/// Number of active holders.
	pub fn depth(&self) -> usize {
		self.depth
	}
}
