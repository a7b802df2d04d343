//! Feed controller: one active query, its accumulated results, and the
//! scroll driver that pages through them.
//!
//! The feed does no I/O. It hands out [`PageRequest`]s for the caller to
//! execute and takes the results back through [`Feed::apply`]. Every request
//! carries the feed generation at the time it was issued; a result from an
//! older generation belongs to a query that is no longer active and is
//! dropped without touching state.

use log::{debug, info, warn};

use crate::error::FetchError;
use crate::model::{DisplayItem, GiphyResponse};
use crate::query::{PageParams, Query, DEFAULT_PAGE_SIZE};
use crate::result_set::ResultSet;
use crate::scroll_driver::ScrollDriver;
use crate::source::PageSource;

/// A page fetch the caller must perform.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageRequest {
    pub generation: u64,
    pub params: PageParams,
}

impl PageRequest {
    /// Runs the request on the calling thread.
    pub fn execute<S: PageSource + ?Sized>(&self, source: &S) -> Result<GiphyResponse, FetchError> {
        source.fetch_page(&self.params)
    }
}

/// What [`Feed::apply`] did with a result.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApplyOutcome {
    /// The page was appended with this many items.
    Appended(usize),
    /// The fetch failed; state is back to idle.
    Failed,
    /// The result belonged to an older query and was ignored.
    Stale,
}

#[derive(Debug)]
pub struct Feed {
    query: Option<Query>,
    generation: u64,
    page_size: u32,
    results: ResultSet,
    driver: ScrollDriver,
    last_error: Option<String>,
}

impl Default for Feed {
    fn default() -> Self {
        Self::new(DEFAULT_PAGE_SIZE)
    }
}

impl Feed {
    pub fn new(page_size: u32) -> Self {
        Self {
            query: None,
            generation: 0,
            page_size: page_size.max(1),
            results: ResultSet::new(),
            driver: ScrollDriver::Idle,
            last_error: None,
        }
    }

    /// Makes `query` the active query.
    ///
    /// Re-activating the current query is a no-op. Otherwise the accumulated
    /// results are discarded, any in-flight request is orphaned, and the
    /// first page is requested.
    pub fn activate(&mut self, query: Query) -> Option<PageRequest> {
        if self.query.as_ref() == Some(&query) {
            return None;
        }

        info!("Activating {}", query);
        self.generation += 1;
        self.query = Some(query);
        self.results.clear();
        self.driver.reset();
        self.last_error = None;
        self.next_page_request()
    }

    /// Drops the active query. Late results are treated as stale.
    pub fn deactivate(&mut self) {
        self.generation += 1;
        self.query = None;
        self.results.clear();
        self.driver.reset();
        self.last_error = None;
    }

    /// Feeds a scroll observation; returns a request when the threshold is
    /// crossed while idle.
    pub fn on_scroll(&mut self, fraction: f32) -> Option<PageRequest> {
        if self.query.is_none() || !self.driver.on_scroll(fraction) {
            return None;
        }
        self.request_for_current()
    }

    /// Explicit "load more": same guards as a threshold crossing.
    pub fn load_more(&mut self) -> Option<PageRequest> {
        self.next_page_request()
    }

    fn next_page_request(&mut self) -> Option<PageRequest> {
        if self.query.is_none() || !self.driver.begin() {
            return None;
        }
        self.request_for_current()
    }

    fn request_for_current(&self) -> Option<PageRequest> {
        let query = self.query.clone()?;
        let offset = self.results.next_offset();
        debug!("Requesting {} offset={} limit={}", query, offset, self.page_size);
        Some(PageRequest {
            generation: self.generation,
            params: PageParams::new(query, offset, self.page_size),
        })
    }

    /// Applies the result of a request issued at `generation`.
    pub fn apply(
        &mut self,
        generation: u64,
        result: Result<GiphyResponse, FetchError>,
    ) -> ApplyOutcome {
        if generation != self.generation || !self.driver.is_fetching() {
            debug!(
                "Dropping stale page result (generation {} != {})",
                generation, self.generation
            );
            return ApplyOutcome::Stale;
        }

        match result {
            Ok(response) => {
                let added = self.results.append(&response);
                self.driver.settle(self.results.has_next_page());
                self.last_error = None;
                debug!(
                    "Appended {} items ({} total, next offset {})",
                    added,
                    self.results.len(),
                    self.results.next_offset()
                );
                ApplyOutcome::Appended(added)
            }
            Err(error) => {
                warn!("Page fetch failed: {}", error);
                self.driver.fail();
                self.last_error = Some(error.to_string());
                ApplyOutcome::Failed
            }
        }
    }

    // ===== Queries =====

    pub fn query(&self) -> Option<&Query> {
        self.query.as_ref()
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn items(&self) -> &[DisplayItem] {
        self.results.items()
    }

    pub fn results(&self) -> &ResultSet {
        &self.results
    }

    pub fn driver(&self) -> ScrollDriver {
        self.driver
    }

    pub fn has_next_page(&self) -> bool {
        !self.driver.is_exhausted() && self.results.has_next_page()
    }

    /// First page still in flight: nothing to show yet.
    pub fn is_pending(&self) -> bool {
        self.driver.is_fetching() && self.results.page_count() == 0
    }

    /// A page after the first is in flight.
    pub fn is_fetching_next_page(&self) -> bool {
        self.driver.is_fetching() && self.results.page_count() > 0
    }

    pub fn last_error(&self) -> Option<&str> {
        self.last_error.as_deref()
    }
}
