//! One grid cell: skeleton, image or error placeholder, plus the click that
//! copies the GIF.

use eframe::egui;
use egui::{Rect, Sense};
use gifwall::{cover_uv, display_url, CellPhase, DisplayItem, ImageSlot};

use crate::io::ImageLoader;
use crate::rendering::cell_renderer::{self, CELL_ROUNDING};
use crate::state::AnimationState;

/// Hover zoom factor.
const HOVER_SCALE: f32 = 1.02;

pub struct CellOutput {
    pub clicked: bool,
    /// Still waiting for its image; the skeleton needs repaints
    pub loading: bool,
    /// Showing an animated image
    pub animating: bool,
}

/// Renders `item` into `rect`.
///
/// The static rendition is shown while animations are paused.
pub fn render_image_cell(
    ui: &mut egui::Ui,
    rect: Rect,
    index: usize,
    item: &DisplayItem,
    images: &mut ImageLoader,
    animation: &AnimationState,
) -> CellOutput {
    let response = ui
        .interact(rect, ui.id().with(("gif_cell", index)), Sense::click())
        .on_hover_cursor(egui::CursorIcon::PointingHand);

    let rect = if response.hovered() {
        Rect::from_center_size(rect.center(), rect.size() * HOVER_SCALE)
    } else {
        rect
    };

    let painter = ui.painter();
    let url = display_url(item, animation.is_paused());
    let slot = images.slot(url);
    let phase = CellPhase::of(slot);
    let mut animating = false;

    match (phase, slot.and_then(ImageSlot::ready)) {
        (CellPhase::Loaded, Some(loaded)) => {
            let texture = loaded.texture_at(animation.elapsed());
            egui::Image::new((texture.id(), rect.size()))
                .uv(cover_uv(loaded.decoded().size(), rect.size()))
                .corner_radius(CELL_ROUNDING)
                .paint_at(ui, rect);
            if phase.shows_title() {
                cell_renderer::paint_title_overlay(painter, rect, &item.title);
            }
            animating = loaded.is_animated();
        }
        (CellPhase::Error, _) => cell_renderer::paint_error_placeholder(painter, rect),
        _ => {
            let time = ui.input(|i| i.time);
            cell_renderer::paint_skeleton(painter, rect, time, ui.visuals().dark_mode);
        }
    }

    CellOutput {
        clicked: response.clicked(),
        loading: phase.is_loading(),
        animating,
    }
}
