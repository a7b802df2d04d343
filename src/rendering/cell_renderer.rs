//! Painting of the non-image parts of a grid cell: the loading skeleton, the
//! error placeholder and the title overlay.

use eframe::egui;
use egui::epaint::Mesh;
use egui::{Align2, Color32, CornerRadius, FontId, Painter, Rect};

use crate::rendering::text_utils::truncate_text_to_fit;

pub const CELL_ROUNDING: u8 = 8;
const TITLE_FONT_SIZE: f32 = 14.0;
const TITLE_PADDING: f32 = 8.0;
const OVERLAY_HEIGHT: f32 = 40.0;
/// Period of the skeleton pulse, in seconds.
const PULSE_PERIOD: f64 = 1.6;

/// Rectangular skeleton whose brightness pulses with `time` (seconds).
pub fn paint_skeleton(painter: &Painter, rect: Rect, time: f64, dark_mode: bool) {
    let phase = (time / PULSE_PERIOD * std::f64::consts::TAU).sin() as f32 * 0.5 + 0.5;
    let (low, high) = if dark_mode { (38.0, 58.0) } else { (214.0, 232.0) };
    let level = (low + (high - low) * phase) as u8;
    painter.rect_filled(rect, CornerRadius::same(CELL_ROUNDING), Color32::from_gray(level));
}

/// Grey box with "Image not found", shown when a load failed.
pub fn paint_error_placeholder(painter: &Painter, rect: Rect) {
    painter.rect_filled(rect, CornerRadius::same(CELL_ROUNDING), Color32::from_gray(221));
    painter.text(
        rect.center(),
        Align2::CENTER_CENTER,
        "Image not found",
        FontId::proportional(TITLE_FONT_SIZE + 2.0),
        Color32::from_gray(153),
    );
}

/// Title on a transparent-to-dark gradient along the bottom edge.
pub fn paint_title_overlay(painter: &Painter, rect: Rect, title: &str) {
    let overlay = Rect::from_min_max(
        egui::pos2(rect.min.x, (rect.max.y - OVERLAY_HEIGHT).max(rect.min.y)),
        rect.max,
    );

    let clear = Color32::from_black_alpha(0);
    let shade = Color32::from_black_alpha(178);
    let mut mesh = Mesh::default();
    mesh.colored_vertex(overlay.left_top(), clear);
    mesh.colored_vertex(overlay.right_top(), clear);
    mesh.colored_vertex(overlay.right_bottom(), shade);
    mesh.colored_vertex(overlay.left_bottom(), shade);
    mesh.add_triangle(0, 1, 2);
    mesh.add_triangle(0, 2, 3);
    painter.add(egui::Shape::mesh(mesh));

    let font = FontId::proportional(TITLE_FONT_SIZE);
    let text = truncate_text_to_fit(title, overlay.width() - 2.0 * TITLE_PADDING, &font, painter);
    if text.is_empty() {
        return;
    }
    painter.text(
        egui::pos2(overlay.min.x + TITLE_PADDING, overlay.max.y - TITLE_PADDING),
        Align2::LEFT_BOTTOM,
        text,
        font,
        Color32::WHITE,
    );
}
