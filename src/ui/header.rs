//! Header panel UI rendering
//!
//! Handles the top bar with the home link, the search box and the animation
//! toggle.

use eframe::egui;
use gifwall::Route;
use crate::app::AppState;

/// Result of user interaction with the header panel
pub enum HeaderInteraction {
    /// Home link, search submission or clear
    Navigate(Route),
    /// User clicked the pause/play toggle
    ToggleAnimations,
}

/// Renders the application header
///
/// # Arguments
/// * `ui` - The egui UI context for drawing
/// * `state` - Mutable reference to application state (search text)
///
/// # Returns
/// * `Option<HeaderInteraction>` - User interaction result
pub fn render_header(ui: &mut egui::Ui, state: &mut AppState) -> Option<HeaderInteraction> {
    let mut interaction = None;

    ui.horizontal(|ui| {
        let home = ui.add(egui::Button::new(egui::RichText::new("🎞 GIF Wall").heading()).frame(false));
        if home.on_hover_text("Trending GIFs").clicked() {
            interaction = Some(HeaderInteraction::Navigate(Route::Trending));
        }

        ui.separator();

        let search_response = egui::TextEdit::singleline(state.search.text_mut())
            .hint_text("Search for GIFs...")
            .desired_width(360.0)
            .show(ui)
            .response;

        let enter_pressed = ui.input(|i| i.key_pressed(egui::Key::Enter));
        if search_response.lost_focus() && enter_pressed {
            interaction = Some(HeaderInteraction::Navigate(state.search.submit()));
        }

        let is_dirty = !state.search.text().is_empty();
        if is_dirty && ui.small_button("✖").on_hover_text("Clear").clicked() {
            state.search.clear();
        }

        if ui.add_enabled(is_dirty, egui::Button::new("🔍 Search")).clicked() {
            interaction = Some(HeaderInteraction::Navigate(state.search.submit()));
        }

        // Push the animation toggle to the right
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            if ui.button(state.animation.toggle_label()).clicked() {
                interaction = Some(HeaderInteraction::ToggleAnimations);
            }
        });
    });

    interaction
}
