//! Accumulated results of one query.

use crate::model::{DisplayItem, GiphyResponse, Pagination};
use crate::transform::transform_gifs;

/// All pages fetched so far for the active query, in fetch order.
///
/// Items are transformed once when their page is appended and are never
/// reordered or deduplicated afterwards.
#[derive(Debug, Clone, Default)]
pub struct ResultSet {
    items: Vec<DisplayItem>,
    pages: Vec<Pagination>,
}

impl ResultSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends one page. Returns the number of items added.
    pub fn append(&mut self, response: &GiphyResponse) -> usize {
        let items = transform_gifs(&response.data);
        let added = items.len();
        self.items.extend(items);
        self.pages.push(response.pagination);
        added
    }

    pub fn clear(&mut self) {
        self.items.clear();
        self.pages.clear();
    }

    pub fn items(&self) -> &[DisplayItem] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn page_count(&self) -> usize {
        self.pages.len()
    }

    /// Offset of the next page to request; 0 before the first page.
    pub fn next_offset(&self) -> u32 {
        self.pages.last().map(Pagination::next_offset).unwrap_or(0)
    }

    /// Whether a further page exists. True before the first page arrives.
    pub fn has_next_page(&self) -> bool {
        self.pages.last().map(Pagination::has_next_page).unwrap_or(true)
    }

    /// Server-reported total from the most recent page.
    pub fn total_count(&self) -> Option<u32> {
        self.pages.last().map(|p| p.total_count)
    }
}
