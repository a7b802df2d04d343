//! Scroll position tracking for the feed.
//!
//! egui has no scroll events, so a scroll is detected as a change of the
//! scroll area's offset between frames. The offset is only recorded once the
//! coordinator has handled the scroll, so an observation that loses out to a
//! click in the same frame is seen again on the next one.

/// State related to the feed scroll area.
#[derive(Debug, Clone, Default)]
pub struct ViewportState {
    /// Offset at the last handled scroll
    last_offset: Option<f32>,
    /// Set when the feed switched query and the scroll area must jump back up
    pending_scroll_reset: bool,
    /// Height of the visible part of the scroll area at the last frame
    viewport_height: f32,
}

impl ViewportState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Forgets the scroll position and scrolls to the top on the next frame.
    pub fn reset(&mut self) {
        self.last_offset = None;
        self.pending_scroll_reset = true;
    }

    // ===== Scroll Queries =====

    /// True when `offset` differs from the last handled offset.
    pub fn has_moved(&self, offset: f32) -> bool {
        self.last_offset != Some(offset)
    }

    pub fn last_offset(&self) -> Option<f32> {
        self.last_offset
    }

    pub fn viewport_height(&self) -> f32 {
        self.viewport_height
    }

    // ===== Scroll Mutations =====

    pub fn record(&mut self, offset: f32) {
        self.last_offset = Some(offset);
    }

    pub fn set_viewport_height(&mut self, height: f32) {
        self.viewport_height = height.max(0.0);
    }

    /// Returns `true` once after [`ViewportState::reset`].
    pub fn take_scroll_reset(&mut self) -> bool {
        std::mem::take(&mut self.pending_scroll_reset)
    }
}
