//! Text rendering utilities
//!
//! Text measurement and truncation for overlays drawn with the painter.

use eframe::egui;

const ELLIPSIS: &str = "…";

fn text_width(text: &str, font_id: &egui::FontId, painter: &egui::Painter) -> f32 {
    painter
        .layout_no_wrap(text.to_string(), font_id.clone(), egui::Color32::WHITE)
        .size()
        .x
}

/// Truncates text to fit within `max_width`, ending it with "…" when cut.
///
/// # Arguments
/// * `text` - The text to potentially truncate
/// * `max_width` - Maximum width available for the text
/// * `font_id` - Font to use for measuring text
/// * `painter` - Painter for text measurement
///
/// # Returns
/// * The text itself, a truncated prefix plus "…", or an empty string when
///   not even the ellipsis fits
pub fn truncate_text_to_fit(
    text: &str,
    max_width: f32,
    font_id: &egui::FontId,
    painter: &egui::Painter,
) -> String {
    if max_width <= 0.0 {
        return String::new();
    }
    if text_width(text, font_id, painter) <= max_width {
        return text.to_string();
    }

    let available = max_width - text_width(ELLIPSIS, font_id, painter);
    if available <= 0.0 {
        return String::new();
    }

    // Binary search for the longest prefix that fits
    let char_count = text.chars().count();
    let (mut low, mut high) = (0, char_count);
    while low < high {
        let mid = (low + high + 1) / 2;
        let prefix: String = text.chars().take(mid).collect();
        if text_width(&prefix, font_id, painter) <= available {
            low = mid;
        } else {
            high = mid - 1;
        }
    }

    let mut result: String = text.chars().take(low).collect::<String>().trim_end().to_string();
    result.push_str(ELLIPSIS);
    result
}
