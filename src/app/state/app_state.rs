use crate::app::command_log::CommandLog;
use crate::shared::AppOptions;

use super::{DataState, SessionState, UiState, ViewState};

/// Gesamtzustand der Anwendung.
///
/// Wird ausschließlich von Command-Handlern mutiert; UI-Code liest den
/// Zustand und erzeugt Intents.
pub struct AppState {
    /// Kamera, Viewport und Karten-Overlays
    pub view: ViewState,
    /// Formulare, Dialoge, Auswahl und Meldungen
    pub ui: UiState,
    /// Persistierte Marker aus dem Store
    pub data: DataState,
    /// Sequenznummern und ausstehende Netzwerk-Requests
    pub session: SessionState,
    /// Log der ausgeführten Commands
    pub command_log: CommandLog,
    /// Laufzeit-Optionen
    pub options: AppOptions,
    /// true sobald die Anwendung beendet werden soll
    pub should_exit: bool,
}

impl AppState {
    pub fn new() -> Self {
        Self {
            view: ViewState::new(),
            ui: UiState::new(),
            data: DataState::new(),
            session: SessionState::new(),
            command_log: CommandLog::new(),
            options: AppOptions::default(),
            should_exit: false,
        }
    }

    /// Anzahl der aktuell bekannten Marker.
    pub fn marker_count(&self) -> usize {
        self.data.markers.len()
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
