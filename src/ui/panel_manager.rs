//! Panel orchestration and layout management.
//!
//! Coordinates all UI panels (header, feed or not-found page, status, toast)
//! and funnels their interactions into a single result for the application
//! coordinator.

use crate::app::AppState;
use crate::io::{ImageLoader, PageLoader};
use crate::ui::{feed_panel, header, not_found, status_bar, toast};
use gifwall::Route;

/// Result of panel interactions that need to be handled by the application coordinator.
#[derive(Debug, Clone, PartialEq)]
pub enum PanelInteraction {
    /// Home link, search submission or "Back to Home"
    Navigate(Route),
    /// Pause/play toggle clicked
    ToggleAnimations,
    /// "Load more" or "Retry" clicked
    LoadMore,
    /// The feed's scroll offset changed
    Scrolled { offset: f32, fraction: f32 },
    /// A grid cell was clicked
    CopyRequested(usize),
}

/// Manages the layout and rendering of all UI panels.
pub struct PanelManager;

impl PanelManager {
    /// Renders all panels in the application window.
    ///
    /// This is the main entry point for rendering the entire UI, called from
    /// the eframe::App::update() implementation.
    pub fn render_all_panels(
        ctx: &egui::Context,
        state: &mut AppState,
        pages: &PageLoader,
        images: &mut ImageLoader,
    ) -> Option<PanelInteraction> {
        let mut interaction: Option<PanelInteraction> = None;

        // Header panel at the top
        egui::TopBottomPanel::top("header").show(ctx, |ui| {
            ui.add_space(4.0);
            if let Some(header_interaction) = header::render_header(ui, state) {
                interaction = Some(match header_interaction {
                    header::HeaderInteraction::Navigate(route) => PanelInteraction::Navigate(route),
                    header::HeaderInteraction::ToggleAnimations => PanelInteraction::ToggleAnimations,
                });
            }
            ui.add_space(4.0);
        });

        // Status panel at the very bottom
        egui::TopBottomPanel::bottom("status_panel").show(ctx, |ui| {
            status_bar::render_status_bar(ui, state, pages, images);
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            if let Route::NotFound(path) = &state.route {
                if not_found::render_not_found(ui, path) {
                    interaction = Some(PanelInteraction::Navigate(Route::Trending));
                }
                return;
            }

            if let Some(feed_interaction) = feed_panel::render_feed_panel(ui, state, images) {
                // Header clicks win over scroll observations from the same frame
                let feed_interaction = match feed_interaction {
                    feed_panel::FeedInteraction::Scrolled { offset, fraction } => {
                        PanelInteraction::Scrolled { offset, fraction }
                    }
                    feed_panel::FeedInteraction::LoadMore => PanelInteraction::LoadMore,
                    feed_panel::FeedInteraction::CopyRequested(index) => {
                        PanelInteraction::CopyRequested(index)
                    }
                };
                if interaction.is_none() {
                    interaction = Some(feed_interaction);
                }
            }
        });

        toast::render_toast(ctx, &state.toast);

        interaction
    }
}
