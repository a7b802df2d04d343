//! Short-lived page cache.
//!
//! Rapid re-activation of the same query (navigating back and forth, or a
//! route reload) would otherwise refetch identical pages. Entries are keyed by
//! the full [`PageParams`] tuple and expire after a fixed time-to-live; there
//! is no explicit invalidation.

use std::collections::HashMap;
use std::sync::Mutex;
use std::time::{Duration, Instant};

use log::debug;

use crate::error::FetchError;
use crate::model::GiphyResponse;
use crate::query::PageParams;
use crate::source::PageSource;

/// Time-stamped cache entries with a fixed TTL.
///
/// The clock is passed in by the caller so expiry can be tested without
/// sleeping.
#[derive(Debug)]
pub struct PageCache {
    ttl: Duration,
    entries: HashMap<PageParams, (Instant, GiphyResponse)>,
}

impl PageCache {
    pub fn new(ttl: Duration) -> Self {
        Self {
            ttl,
            entries: HashMap::new(),
        }
    }

    pub fn ttl(&self) -> Duration {
        self.ttl
    }

    /// Returns a fresh entry for `params`, if any.
    pub fn get(&self, params: &PageParams, now: Instant) -> Option<&GiphyResponse> {
        self.entries
            .get(params)
            .filter(|(stored_at, _)| now.saturating_duration_since(*stored_at) < self.ttl)
            .map(|(_, response)| response)
    }

    /// Stores a response and drops every expired entry.
    pub fn insert(&mut self, params: PageParams, response: GiphyResponse, now: Instant) {
        let ttl = self.ttl;
        self.entries
            .retain(|_, (stored_at, _)| now.saturating_duration_since(*stored_at) < ttl);
        self.entries.insert(params, (now, response));
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// A [`PageSource`] wrapper that answers repeated requests from a [`PageCache`].
///
/// Only successful pages are cached.
pub struct CachedSource<S> {
    inner: S,
    cache: Mutex<PageCache>,
}

impl<S: PageSource> CachedSource<S> {
    pub fn new(inner: S, ttl: Duration) -> Self {
        Self {
            inner,
            cache: Mutex::new(PageCache::new(ttl)),
        }
    }

    pub fn inner(&self) -> &S {
        &self.inner
    }
}

impl<S: PageSource> PageSource for CachedSource<S> {
    fn fetch_page(&self, params: &PageParams) -> Result<GiphyResponse, FetchError> {
        // A poisoned lock only means another fetch panicked mid-insert; the
        // map itself is still usable.
        {
            let cache = self.cache.lock().unwrap_or_else(|e| e.into_inner());
            if let Some(hit) = cache.get(params, Instant::now()) {
                debug!("Page cache hit for {} offset={}", params.query, params.offset);
                return Ok(hit.clone());
            }
        }

        let response = self.inner.fetch_page(params)?;

        let mut cache = self.cache.lock().unwrap_or_else(|e| e.into_inner());
        cache.insert(params.clone(), response.clone(), Instant::now());
        Ok(response)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Pagination;
    use crate::query::Query;
    use std::sync::atomic::{AtomicUsize, Ordering};

    struct CountingSource {
        calls: AtomicUsize,
        fail: bool,
    }

    impl PageSource for CountingSource {
        fn fetch_page(&self, params: &PageParams) -> Result<GiphyResponse, FetchError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            if self.fail {
                return Err(FetchError::Status { status: 500, reason: "Internal Server Error".into() });
            }
            Ok(GiphyResponse {
                pagination: Pagination { offset: params.offset, count: 0, total_count: 0 },
                ..Default::default()
            })
        }
    }

    fn params(offset: u32) -> PageParams {
        PageParams::new(Query::Search("cats".to_string()), offset, 25)
    }

    #[test]
    fn test_entry_expires_after_ttl() {
        let mut cache = PageCache::new(Duration::from_secs(30));
        let t0 = Instant::now();
        cache.insert(params(0), GiphyResponse::default(), t0);

        assert!(cache.get(&params(0), t0 + Duration::from_secs(29)).is_some());
        assert!(cache.get(&params(0), t0 + Duration::from_secs(30)).is_none());
    }

    #[test]
    fn test_key_is_full_tuple() {
        let mut cache = PageCache::new(Duration::from_secs(30));
        let t0 = Instant::now();
        cache.insert(params(0), GiphyResponse::default(), t0);

        assert!(cache.get(&params(25), t0).is_none());
        assert!(cache.get(&PageParams::new(Query::Trending, 0, 25), t0).is_none());
        assert!(cache
            .get(&PageParams::new(Query::Search("cats".to_string()), 0, 10), t0)
            .is_none());
    }

    #[test]
    fn test_insert_purges_expired() {
        let mut cache = PageCache::new(Duration::from_secs(10));
        let t0 = Instant::now();
        cache.insert(params(0), GiphyResponse::default(), t0);
        cache.insert(params(25), GiphyResponse::default(), t0 + Duration::from_secs(11));
        assert_eq!(cache.len(), 1);
    }

    #[test]
    fn test_cached_source_dedups_identical_requests() {
        let source = CachedSource::new(
            CountingSource { calls: AtomicUsize::new(0), fail: false },
            Duration::from_secs(60),
        );
        source.fetch_page(&params(0)).unwrap();
        source.fetch_page(&params(0)).unwrap();
        source.fetch_page(&params(25)).unwrap();
        assert_eq!(source.inner().calls.load(Ordering::SeqCst), 2);
    }

    #[test]
    fn test_failures_are_not_cached() {
        let source = CachedSource::new(
            CountingSource { calls: AtomicUsize::new(0), fail: true },
            Duration::from_secs(60),
        );
        assert!(source.fetch_page(&params(0)).is_err());
        assert!(source.fetch_page(&params(0)).is_err());
        assert_eq!(source.inner().calls.load(Ordering::SeqCst), 2);
    }
}
