//! Conversion of raw GIPHY records into [`DisplayItem`]s.

use crate::model::{DisplayItem, GiphyGif};

/// Parses a dimension string the way `parseInt(s, 10)` does: optional leading
/// whitespace, then the longest run of decimal digits. No digits yields 0.
pub fn parse_dimension(raw: &str) -> u32 {
    raw.trim_start()
        .chars()
        .take_while(|c| c.is_ascii_digit())
        .fold(0u32, |acc, c| {
            acc.saturating_mul(10).saturating_add(c as u32 - '0' as u32)
        })
}

/// Picks the display title: source title, then the uploader, then anonymous.
pub fn display_title(gif: &GiphyGif) -> String {
    if !gif.title.is_empty() {
        return gif.title.clone();
    }
    let username = if gif.username.is_empty() { "Anonymous" } else { gif.username.as_str() };
    format!("GIF by {}", username)
}

/// Maps one raw record to a display item.
///
/// Uses the `fixed_width` rendition and its still counterpart so every item
/// shares the same column width basis.
pub fn transform_gif(gif: &GiphyGif) -> DisplayItem {
    let image = &gif.images.fixed_width;

    DisplayItem {
        id: gif.id.clone(),
        image_url: image.url.clone(),
        static_image_url: gif.images.fixed_width_still.url.clone(),
        width: parse_dimension(&image.width),
        height: parse_dimension(&image.height),
        title: display_title(gif),
    }
}

/// Maps a slice of raw records, preserving order.
pub fn transform_gifs(gifs: &[GiphyGif]) -> Vec<DisplayItem> {
    gifs.iter().map(transform_gif).collect()
}
