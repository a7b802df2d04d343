//! Query identity and routes.
//!
//! A [`Query`] is the identity of an accumulated result set: changing it
//! discards everything fetched so far. A [`Route`] is the navigable location
//! that selects a query, written as a path (`/` or `/search/{keyword}`).

use std::fmt;

/// Default number of items per page request.
pub const DEFAULT_PAGE_SIZE: u32 = 25;

/// What the feed is listing.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Query {
    /// The no-keyword default listing.
    Trending,
    /// Keyword search. The keyword is never blank.
    Search(String),
}

impl Query {
    /// Builds a query from user input. Blank input means trending.
    pub fn from_keyword(keyword: &str) -> Self {
        if keyword.trim().is_empty() {
            Query::Trending
        } else {
            Query::Search(keyword.to_string())
        }
    }

    /// Returns the keyword for search queries.
    pub fn keyword(&self) -> Option<&str> {
        match self {
            Query::Trending => None,
            Query::Search(keyword) => Some(keyword),
        }
    }

    pub fn is_trending(&self) -> bool {
        matches!(self, Query::Trending)
    }
}

impl fmt::Display for Query {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Query::Trending => write!(f, "trending"),
            Query::Search(keyword) => write!(f, "search \"{}\"", keyword),
        }
    }
}

/// Parameters of a single page fetch. Also the page cache key.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PageParams {
    pub query: Query,
    pub offset: u32,
    pub limit: u32,
}

impl PageParams {
    pub fn new(query: Query, offset: u32, limit: u32) -> Self {
        Self { query, offset, limit }
    }
}

const SEARCH_PREFIX: &str = "/search/";

/// Navigable location of the application.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    /// `/`
    Trending,
    /// `/search/{keyword}` with the keyword already decoded.
    Search(String),
    /// Anything else, kept verbatim.
    NotFound(String),
}

impl Route {
    /// Parses a path. The keyword segment is percent-decoded; a segment that
    /// does not decode to UTF-8 or decodes to blank text is not found.
    pub fn parse(path: &str) -> Self {
        let trimmed = path.trim();
        if trimmed.is_empty() || trimmed == "/" {
            return Route::Trending;
        }

        if let Some(encoded) = trimmed.strip_prefix(SEARCH_PREFIX) {
            let encoded = encoded.trim_end_matches('/');
            if !encoded.is_empty() && !encoded.contains('/') {
                if let Ok(keyword) = urlencoding::decode(encoded) {
                    if !keyword.trim().is_empty() {
                        return Route::Search(keyword.into_owned());
                    }
                }
            }
        }

        Route::NotFound(trimmed.to_string())
    }

    /// Route for a search box submission. Blank input routes home.
    pub fn search(keyword: &str) -> Self {
        match Query::from_keyword(keyword) {
            Query::Trending => Route::Trending,
            Query::Search(keyword) => Route::Search(keyword),
        }
    }

    /// Formats the route as a path, percent-encoding the keyword.
    pub fn to_path(&self) -> String {
        match self {
            Route::Trending => "/".to_string(),
            Route::Search(keyword) => format!("{}{}", SEARCH_PREFIX, urlencoding::encode(keyword)),
            Route::NotFound(path) => path.clone(),
        }
    }

    /// The query this route activates, if any.
    pub fn query(&self) -> Option<Query> {
        match self {
            Route::Trending => Some(Query::Trending),
            Route::Search(keyword) => Some(Query::from_keyword(keyword)),
            Route::NotFound(_) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_keyword_is_trending() {
        assert_eq!(Query::from_keyword(""), Query::Trending);
        assert_eq!(Query::from_keyword("   "), Query::Trending);
        assert_eq!(Query::from_keyword("cats"), Query::Search("cats".to_string()));
    }

    #[test]
    fn test_parse_routes() {
        assert_eq!(Route::parse("/"), Route::Trending);
        assert_eq!(Route::parse(""), Route::Trending);
        assert_eq!(Route::parse("/search/cats"), Route::Search("cats".to_string()));
        assert_eq!(Route::parse("/search/cats/"), Route::Search("cats".to_string()));
        assert_eq!(Route::parse("/nowhere"), Route::NotFound("/nowhere".to_string()));
        assert_eq!(Route::parse("/search/"), Route::NotFound("/search/".to_string()));
    }

    #[test]
    fn test_keyword_round_trip() {
        let keyword = "cats & dogs";
        let path = Route::Search(keyword.to_string()).to_path();
        assert!(!path.contains(' '));
        assert!(!path.contains('&'));
        assert_eq!(Route::parse(&path), Route::Search(keyword.to_string()));
    }

    #[test]
    fn test_round_trip_slash_and_unicode() {
        for keyword in ["a/b", "100% happy", "ねこ", "?q=1#x"] {
            let route = Route::Search(keyword.to_string());
            assert_eq!(Route::parse(&route.to_path()), route, "keyword {:?}", keyword);
        }
    }

    #[test]
    fn test_invalid_utf8_segment_is_not_found() {
        assert!(matches!(Route::parse("/search/%FF%FE"), Route::NotFound(_)));
    }

    #[test]
    fn test_route_query() {
        assert_eq!(Route::Trending.query(), Some(Query::Trending));
        assert_eq!(
            Route::search("cats").query(),
            Some(Query::Search("cats".to_string()))
        );
        assert_eq!(Route::search("  "), Route::Trending);
        assert_eq!(Route::NotFound("/x".to_string()).query(), None);
    }
}
