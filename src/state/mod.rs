//! State management modules for the GIF browser.
//!
//! This module contains state-only logic (no UI concerns):
//! - Viewport state (scroll offset tracking, scroll reset)
//! - Animation state (paused flag, animation clock)
//! - Search state (search box text)
//! - Toast state (copy acknowledgment)

mod viewport;
mod animation;
mod search;
mod toast;

pub use viewport::ViewportState;
pub use animation::AnimationState;
pub use search::SearchState;
pub use toast::ToastState;
