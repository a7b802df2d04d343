//! Process-wide "animations paused" flag and the animation clock.

use std::time::{Duration, Instant};

/// All animated cells share one clock so they stay in step after a resume.
#[derive(Debug, Clone)]
pub struct AnimationState {
    paused: bool,
    started: Instant,
}

impl Default for AnimationState {
    fn default() -> Self {
        Self::new(false)
    }
}

impl AnimationState {
    pub fn new(paused: bool) -> Self {
        Self {
            paused,
            started: Instant::now(),
        }
    }

    pub fn is_paused(&self) -> bool {
        self.paused
    }

    pub fn toggle(&mut self) {
        self.paused = !self.paused;
    }

    /// Time since the clock started; drives frame selection.
    pub fn elapsed(&self) -> Duration {
        self.started.elapsed()
    }

    pub fn toggle_label(&self) -> &'static str {
        if self.paused {
            "▶ Play GIFs"
        } else {
            "⏸ Pause GIFs"
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle() {
        let mut animation = AnimationState::default();
        assert!(!animation.is_paused());
        animation.toggle();
        assert!(animation.is_paused());
        assert_eq!(animation.toggle_label(), "▶ Play GIFs");
        animation.toggle();
        assert_eq!(animation.toggle_label(), "⏸ Pause GIFs");
    }
}
