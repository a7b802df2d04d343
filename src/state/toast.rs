//! Short-lived notification shown at the top of the window.

use std::time::{Duration, Instant};

pub const TOAST_DURATION: Duration = Duration::from_secs(1);

#[derive(Debug, Clone, Default)]
pub struct ToastState {
    current: Option<(String, Instant)>,
}

impl ToastState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Shows `message`, replacing any toast still on screen.
    pub fn show(&mut self, message: impl Into<String>, now: Instant) {
        self.current = Some((message.into(), now));
    }

    /// Message to draw at `now`, if any.
    pub fn active(&self, now: Instant) -> Option<&str> {
        match &self.current {
            Some((message, shown)) if now.duration_since(*shown) < TOAST_DURATION => {
                Some(message.as_str())
            }
            _ => None,
        }
    }

    /// Time left before the toast hides.
    pub fn remaining(&self, now: Instant) -> Option<Duration> {
        self.current
            .as_ref()
            .and_then(|(_, shown)| TOAST_DURATION.checked_sub(now.duration_since(*shown)))
            .filter(|left| !left.is_zero())
    }
}
