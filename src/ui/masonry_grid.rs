//! Virtualized masonry grid.
//!
//! Reserves the full grid height in the scroll area so the scrollbar reflects
//! the whole feed, then instantiates only the cells in the visible window.

use eframe::egui;
use egui::{pos2, vec2, Rect, Sense};
use gifwall::{DisplayItem, MasonryLayout};

use crate::io::ImageLoader;
use crate::state::AnimationState;
use crate::ui::image_cell::render_image_cell;

#[derive(Debug, Default)]
pub struct GridOutput {
    /// Index of the clicked item
    pub clicked: Option<usize>,
    pub any_loading: bool,
    pub any_animating: bool,
}

/// Renders the grid for `items` inside a scroll area's viewport.
///
/// # Arguments
/// * `ui` - UI of the scroll area content
/// * `viewport` - Visible rect in content coordinates, as passed to `show_viewport`
/// * `layout` - Layout already synced to `items` and the current width
pub fn render_masonry_grid(
    ui: &mut egui::Ui,
    viewport: Rect,
    items: &[DisplayItem],
    layout: &MasonryLayout,
    images: &mut ImageLoader,
    animation: &AnimationState,
) -> GridOutput {
    let content_top = ui.max_rect().min.y;
    let available_width = ui.available_width();
    let (grid_rect, _) =
        ui.allocate_exact_size(vec2(available_width, layout.total_height()), Sense::hover());

    // Viewport relative to the grid's top edge
    let grid_offset = grid_rect.min.y - content_top;
    let window = layout.visible_window(viewport.min.y - grid_offset, viewport.height());

    let left_pad = ((available_width - layout.container_width()) / 2.0).max(0.0);
    // Lanes already include the gap vertically; split it between neighbours horizontally
    let half_gap = layout.config().gap / 2.0;
    let mut output = GridOutput::default();

    for index in window.indices() {
        let (Some(placement), Some(item)) = (layout.placement(index), items.get(index)) else {
            continue;
        };
        let item_box = layout.item_box(placement);
        let rect = Rect::from_min_size(
            pos2(grid_rect.min.x + left_pad + item_box.x, grid_rect.min.y + item_box.y),
            vec2(item_box.width, item_box.height),
        )
        .shrink2(vec2(half_gap, 0.0));

        let cell = render_image_cell(ui, rect, index, item, images, animation);
        if cell.clicked {
            output.clicked = Some(index);
        }
        output.any_loading |= cell.loading;
        output.any_animating |= cell.animating;
    }

    output
}
