//! Status-Bar am unteren Bildschirmrand.

use crate::app::AppState;

/// Rendert die Status-Bar
pub fn render_status_bar(ctx: &egui::Context, state: &AppState) {
    egui::TopBottomPanel::bottom("status_bar").show(ctx, |ui| {
        ui.horizontal(|ui| {
            ui.label(format!("Reportes: {}", state.marker_count()));

            ui.separator();

            ui.label(format!(
                "Zoom: {} | Centro: ({:.5}, {:.5})",
                state.view.camera.zoom,
                state.view.camera.center.lat,
                state.view.camera.center.lng
            ));

            if state.data.fetching {
                ui.separator();
                ui.label("Cargando reportes…");
            }

            if state.ui.locating {
                ui.separator();
                ui.label("Ubicando…");
            }

            if state.view.route.is_some() {
                ui.separator();
                ui.label("Ruta activa");
            }

            // FPS-Anzeige (rechts)
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                ui.label(format!("FPS: {:.0}", ctx.input(|i| 1.0 / i.stable_dt)));
            });
        });
    });
}
