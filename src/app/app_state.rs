//! Centralized application state for the GIF browser.
//!
//! Composes focused state components that each manage one aspect of the
//! window: the active feed and its layout, scroll tracking, the animation
//! flag, the search box and the copy toast.

use crate::state::{AnimationState, SearchState, ToastState, ViewportState};
use gifwall::{Feed, MasonryLayout, Route};

/// Where pages and images come from, shown in the status bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceMode {
    Giphy,
    Demo,
}

impl SourceMode {
    pub fn label(&self) -> &'static str {
        match self {
            SourceMode::Giphy => "GIPHY",
            SourceMode::Demo => "Demo",
        }
    }
}

/// Main application state composed of focused state components.
pub struct AppState {
    // ===== Focused State Components =====
    /// Active query, accumulated results and paging state
    pub feed: Feed,

    /// Masonry placement of the feed's items
    pub layout: MasonryLayout,

    /// Scroll tracking for the feed
    pub viewport: ViewportState,

    /// Global "animations paused" flag
    pub animation: AnimationState,

    /// Search box text
    pub search: SearchState,

    /// Copy acknowledgment
    pub toast: ToastState,

    // ===== Top-Level State =====
    /// Current location
    pub route: Route,

    pub source_mode: SourceMode,

    /// Whether the system clipboard could be opened
    pub clipboard_available: bool,
}

impl AppState {
    /// Creates a new application state. Nothing is loaded until the first
    /// navigation.
    pub fn new(page_size: u32, animations_paused: bool, source_mode: SourceMode) -> Self {
        Self {
            feed: Feed::new(page_size),
            layout: MasonryLayout::default(),
            viewport: ViewportState::new(),
            animation: AnimationState::new(animations_paused),
            search: SearchState::new(),
            toast: ToastState::new(),
            route: Route::Trending,
            source_mode,
            clipboard_available: true,
        }
    }
}
