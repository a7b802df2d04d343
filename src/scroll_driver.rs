//! Scroll-position driven pagination state machine.
//!
//! ```text
//!   Idle --[fraction > 0.8]--> FetchingNextPage
//!   FetchingNextPage --[page ok, more pages]--> Idle
//!   FetchingNextPage --[page ok, no more pages]--> Exhausted
//!   FetchingNextPage --[page failed]--> Idle
//! ```
//!
//! While fetching, further threshold crossings are no-ops. Once exhausted,
//! nothing fetches until the query changes and the driver is reset.

/// Scroll fraction above which the next page is requested.
pub const SCROLL_THRESHOLD: f32 = 0.8;

/// Fraction of the document that has been scrolled into view:
/// `(scroll_y + viewport_height) / document_height`.
///
/// A document with no height reports 0.0.
pub fn scroll_fraction(scroll_y: f32, viewport_height: f32, document_height: f32) -> f32 {
    if document_height <= 0.0 {
        return 0.0;
    }
    (scroll_y + viewport_height) / document_height
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ScrollDriver {
    /// A further page is known to exist and nothing is in flight.
    #[default]
    Idle,
    /// A page request is in flight.
    FetchingNextPage,
    /// The server reported no further page.
    Exhausted,
}

impl ScrollDriver {
    /// Feeds one scroll observation. Returns `true` exactly when the caller
    /// must start a page fetch.
    pub fn on_scroll(&mut self, fraction: f32) -> bool {
        if fraction > SCROLL_THRESHOLD {
            self.begin()
        } else {
            false
        }
    }

    /// Starts a fetch if idle. Returns whether the fetch was started.
    pub fn begin(&mut self) -> bool {
        match self {
            ScrollDriver::Idle => {
                *self = ScrollDriver::FetchingNextPage;
                true
            }
            ScrollDriver::FetchingNextPage | ScrollDriver::Exhausted => false,
        }
    }

    /// A page arrived. `has_next_page` is the server's verdict.
    pub fn settle(&mut self, has_next_page: bool) {
        *self = if has_next_page {
            ScrollDriver::Idle
        } else {
            ScrollDriver::Exhausted
        };
    }

    /// A page request failed. The next threshold crossing retries.
    pub fn fail(&mut self) {
        if *self == ScrollDriver::FetchingNextPage {
            *self = ScrollDriver::Idle;
        }
    }

    pub fn reset(&mut self) {
        *self = ScrollDriver::Idle;
    }

    pub fn is_fetching(&self) -> bool {
        *self == ScrollDriver::FetchingNextPage
    }

    pub fn is_exhausted(&self) -> bool {
        *self == ScrollDriver::Exhausted
    }

    pub fn label(&self) -> &'static str {
        match self {
            ScrollDriver::Idle => "idle",
            ScrollDriver::FetchingNextPage => "fetching",
            ScrollDriver::Exhausted => "exhausted",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scroll_fraction() {
        assert_eq!(scroll_fraction(0.0, 500.0, 1000.0), 0.5);
        assert_eq!(scroll_fraction(500.0, 500.0, 1000.0), 1.0);
        assert_eq!(scroll_fraction(100.0, 500.0, 0.0), 0.0);
    }

    #[test]
    fn test_crossing_threshold_fetches_once() {
        let mut driver = ScrollDriver::Idle;
        assert!(!driver.on_scroll(0.5));
        assert!(!driver.on_scroll(0.8));
        assert!(driver.on_scroll(0.81));
        assert_eq!(driver, ScrollDriver::FetchingNextPage);

        // single-flight
        assert!(!driver.on_scroll(0.9));
        assert!(!driver.on_scroll(1.0));
    }

    #[test]
    fn test_settle_returns_to_idle() {
        let mut driver = ScrollDriver::Idle;
        assert!(driver.on_scroll(0.95));
        driver.settle(true);
        assert_eq!(driver, ScrollDriver::Idle);
        assert!(driver.on_scroll(0.95));
    }

    #[test]
    fn test_exhausted_never_fetches() {
        let mut driver = ScrollDriver::Idle;
        assert!(driver.on_scroll(0.95));
        driver.settle(false);
        assert!(driver.is_exhausted());
        for fraction in [0.5, 0.81, 1.0, 5.0] {
            assert!(!driver.on_scroll(fraction));
        }
        assert!(!driver.begin());
    }

    #[test]
    fn test_failure_allows_retry() {
        let mut driver = ScrollDriver::Idle;
        assert!(driver.on_scroll(0.95));
        driver.fail();
        assert_eq!(driver, ScrollDriver::Idle);
        assert!(driver.on_scroll(0.95));
    }

    #[test]
    fn test_fail_does_not_revive_exhausted() {
        let mut driver = ScrollDriver::Exhausted;
        driver.fail();
        assert!(driver.is_exhausted());
        driver.reset();
        assert_eq!(driver, ScrollDriver::Idle);
    }
}
