//! Handler für Kamera, Viewport und Standortermittlung.

use std::time::{Duration, Instant};

use glam::Vec2;

use crate::app::state::{AppState, RequestKind};
use crate::core::LatLng;
use crate::net::{NetError, NetRequest, Seq};

/// Schaltet das Lade-Overlay für die Mindestanzeigedauer scharf.
pub fn arm_loading_gate(state: &mut AppState) {
    let hold = Duration::from_millis(state.options.min_loading_ms);
    state.ui.loading_until = Some(Instant::now() + hold);
}

/// Startet die Standortermittlung über den Provider.
pub fn begin_locate(state: &mut AppState) {
    state.ui.locating = true;
    let seq = state.session.issue(RequestKind::Locate);
    state.session.push(NetRequest::Locate { seq });
}

/// Wendet das Standort-Ergebnis an. Bei Fehlern bleibt die Kamera auf
/// dem Default-Mittelpunkt, ohne Meldung an den Nutzer.
pub fn apply_locate(state: &mut AppState, seq: Seq, result: Result<LatLng, NetError>) {
    if !state.session.admit(RequestKind::Locate, seq) {
        log::debug!("Veraltetes Standort-Ergebnis verworfen (seq {seq})");
        return;
    }
    state.ui.locating = false;
    match result {
        Ok(position) => {
            state.view.camera.set_center(position);
            log::info!(
                "Standort ermittelt: {:.5}, {:.5}",
                position.lat,
                position.lng
            );
        }
        Err(e) => {
            log::warn!("Standort nicht ermittelbar ({e}), Default-Mittelpunkt bleibt");
        }
    }
}

/// Verschiebt die Kamera um ein Pixel-Delta, begrenzt auf die Region.
pub fn pan(state: &mut AppState, delta_px: Vec2) {
    state.view.camera.pan_pixels(delta_px);
}

/// Zoomt schrittweise, optional um einen Fokuspunkt herum.
pub fn zoom(state: &mut AppState, steps: i8, focus_px: Option<Vec2>) {
    let viewport = state.view.viewport_size;
    state
        .view
        .camera
        .zoom_steps(steps, focus_px.map(|f| (f, viewport)));
}

/// Übernimmt die neue Viewport-Größe.
pub fn set_viewport_size(state: &mut AppState, size: [f32; 2]) {
    state.view.viewport_size = size;
}

/// Setzt die Kamera auf den Startzustand zurück.
pub fn reset_camera(state: &mut AppState) {
    state.view.camera.reset();
}
