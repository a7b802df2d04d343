pub mod error;
pub mod model;
pub mod transform;
pub mod query;
pub mod source;
pub mod client;
pub mod cache;
pub mod config;
pub mod demo_source;
pub mod decode;
pub mod masonry;
pub mod scroll_driver;
pub mod result_set;
pub mod feed;
pub mod feed_view;
pub mod image_cache;
pub mod image_cell;
pub mod clipboard;

// Export errors
pub use error::{ClipboardError, ConfigError, DecodeError, FetchError};

// Export wire and display types
pub use model::{DisplayItem, GiphyGif, GiphyImage, GiphyImages, GiphyResponse, Pagination};
pub use transform::{transform_gif, transform_gifs};

// Export query sources
pub use query::{PageParams, Query, Route, DEFAULT_PAGE_SIZE};
pub use source::{ImageFetcher, PageSource};
pub use client::{GiphyClient, HttpImageFetcher};
pub use cache::{CachedSource, PageCache};
pub use config::GiphyConfig;
pub use demo_source::DemoSource;

// Export layout and paging
pub use masonry::{column_count, MasonryConfig, MasonryLayout, Placement, VisibleWindow};
pub use scroll_driver::{scroll_fraction, ScrollDriver, SCROLL_THRESHOLD};
pub use feed::{ApplyOutcome, Feed, PageRequest};
pub use feed_view::{feed_body, footer_hint, page_header, FeedBody, PageHeader};

// Export image handling
pub use decode::{decode_image, DecodedImage};
pub use image_cache::{ImageCache, ImageSlot};
pub use image_cell::{cover_uv, display_url, CellPhase};
pub use clipboard::{copy_with_fallback, ClipboardSink, CopyOutcome, SystemClipboard};
