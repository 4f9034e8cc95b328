//! Handler für Meldungen, Banner und das Beenden.

use crate::app::state::AppState;

/// Zeigt eine lokale Validierungsmeldung im Banner an.
pub fn show_form_error(state: &mut AppState, message: String) {
    state.ui.banner = Some(message);
}

/// Schließt das Banner.
pub fn dismiss_banner(state: &mut AppState) {
    state.ui.banner = None;
}

/// Markiert die Anwendung zum Beenden; die Hauptschleife schließt
/// daraufhin das Fenster.
pub fn request_exit(state: &mut AppState) {
    log::info!("Beenden angefordert");
    state.should_exit = true;
}
