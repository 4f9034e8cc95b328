//! Fehler-Banner und Lade-Overlay.

use crate::app::{AppIntent, AppState};

/// Rendert das Fehler-Banner und das Lade-Overlay.
pub fn render_banner(ctx: &egui::Context, state: &AppState) -> Vec<AppIntent> {
    let mut events = Vec::new();

    if let Some(message) = &state.ui.banner {
        egui::TopBottomPanel::top("error_banner").show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.label(
                    egui::RichText::new(message)
                        .color(egui::Color32::WHITE)
                        .background_color(egui::Color32::from_rgb(0xC0, 0x39, 0x2B)),
                );
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    if ui.small_button("✕").clicked() {
                        events.push(AppIntent::BannerDismissed);
                    }
                });
            });
        });
    }

    if state.ui.loading_overlay_active() {
        egui::Area::new(egui::Id::new("loading_overlay"))
            .order(egui::Order::Foreground)
            .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
            .show(ctx, |ui| {
                egui::Frame::popup(ui.style()).show(ui, |ui| {
                    ui.horizontal(|ui| {
                        ui.spinner();
                        ui.label("Cargando mapa...");
                    });
                });
            });
        // Solange das Overlay steht, weiterzeichnen
        ctx.request_repaint();
    }

    events
}
