//! Seams between the feed and the outside world.
//!
//! The feed never talks HTTP directly. It asks a [`PageSource`] for pages and
//! the image loader asks an [`ImageFetcher`] for decoded images, so both can
//! be swapped for the offline demo generator or a test stub.

use crate::decode::DecodedImage;
use crate::error::FetchError;
use crate::model::GiphyResponse;
use crate::query::PageParams;

/// Remote listing behind a page-cursor abstraction.
///
/// Trending mode and keyword mode differ only in how the implementation
/// reaches the server; both return the same page shape. A page either fully
/// succeeds or fully fails.
pub trait PageSource: Send + Sync {
    fn fetch_page(&self, params: &PageParams) -> Result<GiphyResponse, FetchError>;
}

/// Fetches and decodes one image resource.
pub trait ImageFetcher: Send + Sync {
    fn fetch_image(&self, url: &str) -> Result<DecodedImage, FetchError>;
}

impl<T: PageSource + ?Sized> PageSource for std::sync::Arc<T> {
    fn fetch_page(&self, params: &PageParams) -> Result<GiphyResponse, FetchError> {
        (**self).fetch_page(params)
    }
}

impl<T: ImageFetcher + ?Sized> ImageFetcher for std::sync::Arc<T> {
    fn fetch_image(&self, url: &str) -> Result<DecodedImage, FetchError> {
        (**self).fetch_image(url)
    }
}
