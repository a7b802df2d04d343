//! Copy acknowledgment, floating at the top center of the window.

use eframe::egui;
use std::time::Instant;

use crate::state::ToastState;

pub fn render_toast(ctx: &egui::Context, toast: &ToastState) {
    let now = Instant::now();
    let Some(message) = toast.active(now) else {
        return;
    };

    egui::Area::new(egui::Id::new("copy_toast"))
        .anchor(egui::Align2::CENTER_TOP, egui::vec2(0.0, 56.0))
        .order(egui::Order::Foreground)
        .interactable(false)
        .show(ctx, |ui| {
            egui::Frame::popup(ui.style()).show(ui, |ui| {
                ui.label(message);
            });
        });

    // Wake up again to hide it
    if let Some(remaining) = toast.remaining(now) {
        ctx.request_repaint_after(remaining);
    }
}
