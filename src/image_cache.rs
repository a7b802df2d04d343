//! Byte-budgeted LRU of image load slots, keyed by URL.

use lru::LruCache;

/// Default decoded-image budget.
pub const DEFAULT_IMAGE_BUDGET: usize = 256 * 1024 * 1024;

/// Anything whose memory footprint the cache should account for.
pub trait ByteSize {
    fn byte_size(&self) -> usize;
}

impl ByteSize for crate::decode::DecodedImage {
    fn byte_size(&self) -> usize {
        crate::decode::DecodedImage::byte_size(self)
    }
}

/// Load state of one URL.
#[derive(Debug, Clone, PartialEq)]
pub enum ImageSlot<T> {
    Loading,
    Ready(T),
    Failed(String),
}

impl<T> ImageSlot<T> {
    pub fn ready(&self) -> Option<&T> {
        match self {
            ImageSlot::Ready(value) => Some(value),
            _ => None,
        }
    }
}

struct Entry<T> {
    slot: ImageSlot<T>,
    size: usize,
    /// Frame of the last `get` or `request`
    last_used: u64,
}

/// Load slots keyed by URL.
///
/// The budget only applies to entries that were not drawn in the current or
/// the previous frame. Whatever is on screen stays, even over budget, and is
/// evicted once it scrolls out of view.
pub struct ImageCache<T> {
    max_bytes: usize,
    bytes: usize,
    frame: u64,
    entries: LruCache<String, Entry<T>>,
}

impl<T: ByteSize> ImageCache<T> {
    pub fn new(max_bytes: usize) -> Self {
        Self {
            max_bytes,
            bytes: 0,
            frame: 0,
            entries: LruCache::unbounded(),
        }
    }

    /// Starts a new frame and trims entries that went off screen.
    pub fn begin_frame(&mut self) {
        self.frame += 1;
        self.evict_over_budget();
    }

    /// Looks up `url` and marks it as drawn this frame.
    pub fn get(&mut self, url: &str) -> Option<&ImageSlot<T>> {
        let frame = self.frame;
        self.entries.get_mut(url).map(|entry| {
            entry.last_used = frame;
            &entry.slot
        })
    }

    /// Looks up `url` without touching recency.
    pub fn peek(&self, url: &str) -> Option<&ImageSlot<T>> {
        self.entries.peek(url).map(|entry| &entry.slot)
    }

    /// Marks `url` as loading. Returns `true` if the caller should start a
    /// load, `false` if the URL is already loading or finished.
    pub fn request(&mut self, url: &str) -> bool {
        if let Some(entry) = self.entries.get_mut(url) {
            entry.last_used = self.frame;
            return false;
        }
        self.entries.put(
            url.to_string(),
            Entry {
                slot: ImageSlot::Loading,
                size: 0,
                last_used: self.frame,
            },
        );
        true
    }

    /// Stores the outcome of a load started with [`ImageCache::request`].
    ///
    /// Results for URLs that were evicted meanwhile are dropped; returns
    /// whether the result was kept.
    pub fn complete(&mut self, url: &str, result: Result<T, String>) -> bool {
        let Some(entry) = self.entries.peek_mut(url) else {
            return false;
        };
        if !matches!(entry.slot, ImageSlot::Loading) {
            return false;
        }

        let (slot, size) = match result {
            Ok(value) => {
                let size = value.byte_size();
                (ImageSlot::Ready(value), size)
            }
            Err(error) => (ImageSlot::Failed(error), 0),
        };
        entry.slot = slot;
        entry.size = size;
        self.bytes = self.bytes.saturating_add(size);
        self.evict_over_budget();
        true
    }

    fn is_pinned(&self, entry: &Entry<T>) -> bool {
        entry.last_used + 1 >= self.frame
    }

    fn evict_over_budget(&mut self) {
        while self.bytes > self.max_bytes {
            // the LRU entry is the least recently drawn; once it is pinned, all are
            match self.entries.peek_lru() {
                Some((_, entry)) if !self.is_pinned(entry) => {}
                _ => break,
            }
            if let Some((url, entry)) = self.entries.pop_lru() {
                log::debug!("Evicting image {} ({} bytes)", url, entry.size);
                self.bytes = self.bytes.saturating_sub(entry.size);
            }
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Bytes held by ready entries.
    pub fn bytes(&self) -> usize {
        self.bytes
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, PartialEq)]
    struct Blob(usize);

    impl ByteSize for Blob {
        fn byte_size(&self) -> usize {
            self.0
        }
    }

    #[test]
    fn test_request_once() {
        let mut cache: ImageCache<Blob> = ImageCache::new(100);
        assert!(cache.request("a"));
        assert!(!cache.request("a"));
        assert_eq!(cache.peek("a"), Some(&ImageSlot::Loading));
    }

    #[test]
    fn test_complete_ready_and_failed() {
        let mut cache: ImageCache<Blob> = ImageCache::new(100);
        cache.request("a");
        cache.request("b");
        assert!(cache.complete("a", Ok(Blob(10))));
        assert!(cache.complete("b", Err("404".to_string())));

        assert_eq!(cache.get("a").and_then(ImageSlot::ready), Some(&Blob(10)));
        assert_eq!(cache.get("b"), Some(&ImageSlot::Failed("404".to_string())));
        assert_eq!(cache.bytes(), 10);
    }

    #[test]
    fn test_unrequested_result_is_dropped() {
        let mut cache: ImageCache<Blob> = ImageCache::new(100);
        assert!(!cache.complete("ghost", Ok(Blob(10))));
        assert!(cache.is_empty());
    }

    #[test]
    fn test_evicts_least_recently_drawn() {
        let mut cache: ImageCache<Blob> = ImageCache::new(100);
        for url in ["a", "b"] {
            cache.request(url);
            cache.complete(url, Ok(Blob(40)));
        }

        // two frames later only "a" is still drawn
        cache.begin_frame();
        cache.begin_frame();
        cache.get("a");
        cache.request("c");
        cache.complete("c", Ok(Blob(40)));

        assert!(cache.peek("b").is_none());
        assert!(cache.peek("a").is_some());
        assert!(cache.peek("c").is_some());
        assert_eq!(cache.bytes(), 80);
    }

    #[test]
    fn test_oversized_entry_kept_while_drawn() {
        let mut cache: ImageCache<Blob> = ImageCache::new(10);
        cache.request("big");
        cache.complete("big", Ok(Blob(50)));
        assert_eq!(cache.len(), 1);
        assert_eq!(cache.bytes(), 50);

        cache.begin_frame();
        assert_eq!(cache.len(), 1);
        cache.begin_frame();
        assert!(cache.is_empty());
        assert_eq!(cache.bytes(), 0);
    }

    #[test]
    fn test_static_view_over_budget_loads_each_url_once() {
        const ENTRY: usize = 16 * 1024 * 1024;
        let mut cache: ImageCache<Blob> = ImageCache::new(DEFAULT_IMAGE_BUDGET);
        let urls: Vec<String> = (0..20).map(|i| format!("https://media.example/{}.gif", i)).collect();
        let mut loads = 0;
        let mut pending: Vec<String> = Vec::new();

        // same order as the GUI loop: new frame, finished loads, then drawing
        for _ in 0..50 {
            cache.begin_frame();
            for url in pending.drain(..) {
                cache.complete(&url, Ok(Blob(ENTRY)));
            }
            for url in &urls {
                if cache.request(url) {
                    loads += 1;
                    pending.push(url.clone());
                }
                assert!(cache.get(url).is_some());
            }
        }

        assert_eq!(loads, urls.len());
        assert_eq!(cache.bytes(), urls.len() * ENTRY);
        assert!(urls.iter().all(|url| cache.peek(url).and_then(ImageSlot::ready).is_some()));

        // scrolled away: trimmed back under budget
        cache.begin_frame();
        cache.begin_frame();
        assert!(cache.bytes() <= DEFAULT_IMAGE_BUDGET);
    }
}
