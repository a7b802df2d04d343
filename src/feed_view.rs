//! What the feed page shows, independent of how it is drawn.
//!
//! The GUI renders exactly what these functions return, so the user-visible
//! texts and the grid/empty/loading decision can be tested without a window.

use crate::feed::Feed;
use crate::model::DisplayItem;
use crate::query::Query;

/// Page title block above the grid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageHeader {
    pub title: String,
    /// Quoted keyword for searches.
    pub subtitle: Option<String>,
}

/// Body of the feed page.
#[derive(Debug, Clone, PartialEq)]
pub enum FeedBody<'a> {
    /// First page still loading: progress indicator plus this message.
    Pending { message: String },
    /// Query finished with no results.
    Empty { message: String, hint: &'static str },
    /// Masonry grid over the accumulated items.
    Grid {
        items: &'a [DisplayItem],
        loading_more: bool,
        /// Last page error, shown under the grid with a retry action.
        error: Option<&'a str>,
    },
    /// First page failed and nothing is loaded.
    Failed { message: String, error: &'a str },
}

pub fn page_header(query: &Query) -> PageHeader {
    match query {
        Query::Trending => PageHeader {
            title: "Trending GIFs".to_string(),
            subtitle: None,
        },
        Query::Search(keyword) => PageHeader {
            title: "Search Results".to_string(),
            subtitle: Some(format!("\"{}\"", keyword)),
        },
    }
}

pub fn feed_body(feed: &Feed) -> FeedBody<'_> {
    let query = feed.query();

    if feed.is_pending() {
        let message = match query {
            Some(Query::Search(keyword)) => format!("Searching for \"{}\"...", keyword),
            _ => "Loading trending GIFs...".to_string(),
        };
        return FeedBody::Pending { message };
    }

    if feed.items().is_empty() {
        if let Some(error) = feed.last_error() {
            let message = match query {
                Some(Query::Search(keyword)) => format!("Could not load GIFs for \"{}\"", keyword),
                _ => "Could not load trending GIFs".to_string(),
            };
            return FeedBody::Failed { message, error };
        }

        let message = match query {
            Some(Query::Search(keyword)) => format!("No GIFs found for \"{}\"", keyword),
            _ => "No trending GIFs right now".to_string(),
        };
        return FeedBody::Empty {
            message,
            hint: "Try searching for something else",
        };
    }

    FeedBody::Grid {
        items: feed.items(),
        loading_more: feed.is_fetching_next_page(),
        error: feed.last_error(),
    }
}

/// Hint line under the grid.
pub fn footer_hint(feed: &Feed) -> Option<&'static str> {
    if feed.items().is_empty() {
        return None;
    }
    match feed.query() {
        Some(Query::Search(_)) if feed.has_next_page() => {
            Some("💡 Scroll down to load more search results")
        }
        Some(_) if feed.has_next_page() => Some("💡 Scroll down to load more GIFs automatically"),
        Some(_) => Some("🎉 You're all caught up"),
        None => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{GiphyGif, GiphyResponse, Pagination};

    fn page(count: u32, total: u32) -> GiphyResponse {
        GiphyResponse {
            data: (0..count)
                .map(|i| GiphyGif { id: format!("g{}", i), ..Default::default() })
                .collect(),
            pagination: Pagination { offset: 0, count, total_count: total },
            ..Default::default()
        }
    }

    #[test]
    fn test_headers() {
        assert_eq!(page_header(&Query::Trending).title, "Trending GIFs");
        let header = page_header(&Query::Search("cats".to_string()));
        assert_eq!(header.title, "Search Results");
        assert_eq!(header.subtitle.as_deref(), Some("\"cats\""));
    }

    #[test]
    fn test_trending_pending_and_footer() {
        let mut feed = Feed::new(25);
        let request = feed.activate(Query::Trending).unwrap();
        assert!(matches!(feed_body(&feed), FeedBody::Pending { .. }));
        assert_eq!(footer_hint(&feed), None);

        feed.apply(request.generation, Ok(page(25, 100)));
        assert_eq!(footer_hint(&feed), Some("💡 Scroll down to load more GIFs automatically"));
    }

    #[test]
    fn test_caught_up_footer() {
        let mut feed = Feed::new(25);
        let request = feed.activate(Query::Trending).unwrap();
        feed.apply(request.generation, Ok(page(3, 3)));
        assert_eq!(footer_hint(&feed), Some("🎉 You're all caught up"));
    }

    #[test]
    fn test_failed_first_page() {
        let mut feed = Feed::new(25);
        let request = feed.activate(Query::Search("cats".to_string())).unwrap();
        feed.apply(
            request.generation,
            Err(crate::error::FetchError::Status { status: 429, reason: "Too Many Requests".into() }),
        );
        match feed_body(&feed) {
            FeedBody::Failed { message, error } => {
                assert_eq!(message, "Could not load GIFs for \"cats\"");
                assert!(error.contains("429"));
            }
            other => panic!("unexpected body {:?}", other),
        }
    }
}
