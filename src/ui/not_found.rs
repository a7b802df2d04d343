//! Page shown for paths that match no route.

use eframe::egui;
use egui::RichText;

/// Renders the not-found page. Returns `true` when "Back to Home" was clicked.
pub fn render_not_found(ui: &mut egui::Ui, path: &str) -> bool {
    let mut go_home = false;
    ui.vertical_centered(|ui| {
        ui.add_space(ui.available_height() * 0.25);
        ui.label(RichText::new("Oops! GIF Not Found").size(32.0).strong());
        ui.add_space(8.0);
        ui.label(RichText::new(format!("Nothing lives at {}", path)).weak());
        ui.add_space(16.0);
        go_home = ui.button("Back to Home").clicked();
    });
    go_home
}
