//! Wire types of the GIPHY API and the normalized display item.
//!
//! Only the fields this client reads are modelled. Every field carries a
//! serde default so a response with missing optional data still deserializes.

use serde::{Deserialize, Serialize};

/// One rendition of a GIF (`fixed_width`, `fixed_width_still`, ...).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GiphyImage {
    pub url: String,
    /// Pixel width as a decimal string.
    pub width: String,
    /// Pixel height as a decimal string.
    pub height: String,
    pub size: Option<String>,
    pub frames: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GiphyImages {
    pub original: GiphyImage,
    pub fixed_width: GiphyImage,
    pub fixed_width_still: GiphyImage,
    pub fixed_height: GiphyImage,
    pub fixed_height_still: GiphyImage,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GiphyUser {
    pub username: String,
    pub display_name: String,
    pub avatar_url: String,
}

/// A raw search result record.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GiphyGif {
    pub id: String,
    pub url: String,
    pub slug: String,
    pub title: String,
    pub username: String,
    pub rating: String,
    pub images: GiphyImages,
    pub user: Option<GiphyUser>,
}

/// Pagination block of a response.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Pagination {
    /// Index of the first item of this page in the full result set.
    pub offset: u32,
    /// Number of items in this page.
    pub count: u32,
    /// Size of the full result set as known by the server at fetch time.
    pub total_count: u32,
}

impl Pagination {
    /// Offset of the page following this one.
    pub fn next_offset(&self) -> u32 {
        self.offset.saturating_add(self.count)
    }

    /// A further page exists iff `next_offset < total_count`.
    pub fn has_next_page(&self) -> bool {
        self.next_offset() < self.total_count
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Meta {
    pub status: u16,
    pub msg: String,
    pub response_id: String,
}

/// One page of results: `{data, pagination, meta}`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GiphyResponse {
    pub data: Vec<GiphyGif>,
    pub pagination: Pagination,
    pub meta: Meta,
}

/// Normalized unit of rendering, produced once per raw record.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DisplayItem {
    pub id: String,
    pub image_url: String,
    pub static_image_url: String,
    pub width: u32,
    pub height: u32,
    /// Never empty.
    pub title: String,
}
