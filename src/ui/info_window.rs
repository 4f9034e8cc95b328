//! Info-Fenster zum ausgewählten Ort auf der Karte.

use crate::app::{AppIntent, AppState};
use crate::core::SelectedPlace;

/// Rendert das Info-Fenster neben der ausgewählten Position.
pub fn render(ctx: &egui::Context, state: &AppState, map_rect: egui::Rect) -> Vec<AppIntent> {
    let mut events = Vec::new();

    let Some(selected) = &state.ui.selected else {
        return events;
    };

    let viewport = [map_rect.width(), map_rect.height()];
    let screen = state
        .view
        .camera
        .geo_to_screen(selected.position(), viewport);
    let anchor = map_rect.min + egui::vec2(screen.x + 12.0, screen.y - 12.0);

    egui::Window::new("info_window")
        .title_bar(false)
        .collapsible(false)
        .resizable(false)
        .fixed_pos(anchor)
        .show(ctx, |ui| {
            ui.set_max_width(240.0);

            ui.horizontal(|ui| {
                ui.strong(selected.heading());
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    if ui.small_button("✕").clicked() {
                        events.push(AppIntent::InfoWindowClosed);
                    }
                });
            });

            if let SelectedPlace::Marker { category, .. } = selected {
                ui.label(
                    egui::RichText::new(category)
                        .small()
                        .color(egui::Color32::GRAY),
                );
            }

            ui.label(selected.body());
        });

    events
}
