//! Status bar UI rendering
//!
//! Handles the bottom status bar displaying feed and cache state.

use eframe::egui;
use egui::RichText;
use crate::app::AppState;
use crate::io::{ImageLoader, PageLoader};
use crate::utils::{format_bytes, format_memory_mb, get_current_memory_mb};

/// Renders the status panel at the bottom of the window
///
/// # Arguments
/// * `ui` - The egui UI context for drawing
/// * `state` - Reference to application state
/// * `pages` - Page loader, for the request indicator
/// * `images` - Image loader, for cache statistics
pub fn render_status_bar(ui: &mut egui::Ui, state: &AppState, pages: &PageLoader, images: &ImageLoader) {
    ui.horizontal(|ui| {
        // Always show memory usage first
        let memory_text = format_memory_mb(get_current_memory_mb());
        ui.label(RichText::new(&memory_text).strong());
        ui.label(RichText::new("|").strong());
        ui.label(RichText::new(format!("Source: {}", state.source_mode.label())).strong());

        match state.feed.query() {
            Some(query) => {
                let results = state.feed.results();
                let total = results
                    .total_count()
                    .map(|n| n.to_string())
                    .unwrap_or_else(|| "?".to_string());
                ui.label(RichText::new("|").strong());
                ui.label(RichText::new(format!(
                    "{} | GIFs: {} / {} | Pages: {} | Paging: {}",
                    query,
                    results.len(),
                    total,
                    results.page_count(),
                    state.feed.driver().label()
                )).strong());
            }
            None => {
                ui.label(RichText::new("| No feed").strong());
            }
        }

        if pages.is_loading() {
            ui.spinner();
        }

        ui.label(RichText::new("|").strong());
        ui.label(RichText::new(format!(
            "Images: {} ({})",
            images.cached_images(),
            format_bytes(images.cached_bytes())
        )).strong());

        if !state.clipboard_available {
            ui.label(RichText::new("|").strong());
            ui.label(RichText::new("Clipboard unavailable").strong().color(egui::Color32::YELLOW));
        }
    });
}
