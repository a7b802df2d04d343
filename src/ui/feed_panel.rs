//! Central feed panel: page header, masonry grid and paging controls.

use eframe::egui;
use egui::RichText;
use gifwall::{feed_body, footer_hint, page_header, scroll_fraction, FeedBody};
use std::time::Duration;

use crate::app::AppState;
use crate::io::ImageLoader;
use crate::ui::masonry_grid::render_masonry_grid;

/// Repaint interval while skeletons pulse or GIFs play.
const ANIMATION_REPAINT: Duration = Duration::from_millis(33);

/// Result of user interaction with the feed panel
pub enum FeedInteraction {
    /// Scroll offset changed since the last handled scroll
    Scrolled { offset: f32, fraction: f32 },
    /// "Load more" or "Retry" clicked
    LoadMore,
    /// A cell was clicked
    CopyRequested(usize),
}

/// Renders the feed of the active query.
///
/// # Arguments
/// * `ui` - The egui UI context for drawing
/// * `state` - Application state; the layout is synced to the feed here
/// * `images` - Image loader; visible cells queue their loads through it
///
/// # Returns
/// * `Option<FeedInteraction>` - Clicks take precedence over scroll changes
pub fn render_feed_panel(
    ui: &mut egui::Ui,
    state: &mut AppState,
    images: &mut ImageLoader,
) -> Option<FeedInteraction> {
    let Some(query) = state.feed.query().cloned() else {
        return None;
    };
    let mut interaction = None;
    let mut repaint = false;

    let mut scroll_area = egui::ScrollArea::vertical()
        .id_salt("feed_scroll")
        .auto_shrink([false, false]);
    if state.viewport.take_scroll_reset() {
        scroll_area = scroll_area.vertical_scroll_offset(0.0);
    }

    let previous_viewport_height = state.viewport.viewport_height();
    let output = scroll_area.show_viewport(ui, |ui, viewport| {
        let width = ui.available_width();
        state.layout.sync(state.feed.items(), width);

        let header = page_header(&query);
        ui.add_space(12.0);
        ui.vertical_centered(|ui| {
            ui.heading(&header.title);
            if let Some(subtitle) = &header.subtitle {
                ui.label(RichText::new(subtitle).italics().weak());
            }
        });
        ui.add_space(12.0);

        match feed_body(&state.feed) {
            FeedBody::Pending { message } => {
                ui.vertical_centered(|ui| {
                    ui.add_space(40.0);
                    ui.spinner();
                    ui.label(message);
                });
            }
            FeedBody::Empty { message, hint } => {
                ui.vertical_centered(|ui| {
                    ui.add_space(40.0);
                    ui.label(RichText::new(message).size(18.0));
                    ui.label(RichText::new(hint).weak());
                });
            }
            FeedBody::Failed { message, error } => {
                ui.vertical_centered(|ui| {
                    ui.add_space(40.0);
                    ui.label(RichText::new(message).size(18.0));
                    ui.colored_label(ui.visuals().error_fg_color, error);
                    if ui.button("Retry").clicked() {
                        interaction = Some(FeedInteraction::LoadMore);
                    }
                });
            }
            FeedBody::Grid { items, loading_more, error } => {
                let grid = render_masonry_grid(
                    ui,
                    viewport,
                    items,
                    &state.layout,
                    images,
                    &state.animation,
                );
                if let Some(index) = grid.clicked {
                    interaction = Some(FeedInteraction::CopyRequested(index));
                }
                repaint |= grid.any_loading || (grid.any_animating && !state.animation.is_paused());

                ui.vertical_centered(|ui| {
                    if loading_more {
                        ui.add_space(8.0);
                        ui.horizontal(|ui| {
                            ui.spinner();
                            ui.label("Loading more GIFs...");
                        });
                    }
                    if let Some(error) = error {
                        ui.add_space(8.0);
                        ui.colored_label(ui.visuals().error_fg_color, error);
                        if ui.button("Retry").clicked() {
                            interaction = Some(FeedInteraction::LoadMore);
                        }
                    }
                });
            }
        }

        if let Some(hint) = footer_hint(&state.feed) {
            // Short feeds cannot be scrolled past the threshold
            let fills_viewport = ui.min_rect().height() > previous_viewport_height;
            ui.add_space(12.0);
            ui.vertical_centered(|ui| {
                if state.feed.has_next_page()
                    && !state.feed.is_fetching_next_page()
                    && !fills_viewport
                    && ui.button("Load more").clicked()
                {
                    interaction = Some(FeedInteraction::LoadMore);
                }
                ui.label(RichText::new(hint).weak());
            });
            ui.add_space(12.0);
        }
    });

    state.viewport.set_viewport_height(output.inner_rect.height());

    let offset = output.state.offset.y;
    if interaction.is_none() && state.viewport.has_moved(offset) {
        let fraction = scroll_fraction(offset, output.inner_rect.height(), output.content_size.y);
        interaction = Some(FeedInteraction::Scrolled { offset, fraction });
    }

    if repaint {
        ui.ctx().request_repaint_after(ANIMATION_REPAINT);
    }

    interaction
}
