//! Übersetzt UI- und Netzwerk-Intents in mutierende Commands.
//!
//! Hier liegt die Policy-Schicht: Validierung von Eingaben, Schwellen
//! für Vorschläge und die 1:1-Weiterleitung der Netzwerk-Abschlüsse an
//! ihre Apply-Commands. Die Handler selbst bleiben mechanisch.

use crate::app::events::{AppCommand, AppIntent};
use crate::app::state::AppState;

/// Meldung bei unvollständigem Marker-Entwurf.
pub const MSG_DRAFT_INCOMPLETE: &str = "Por favor ingrese un título y un comentario";

/// Erzeugt aus einem Intent die auszuführenden Commands.
pub fn map_intent_to_commands(state: &AppState, intent: AppIntent) -> Vec<AppCommand> {
    match intent {
        AppIntent::StartupRequested => vec![
            AppCommand::ArmLoadingGate,
            AppCommand::BeginLocate,
            AppCommand::RefreshMarkers,
        ],

        AppIntent::SearchSubmitted { text } => {
            if text.trim().is_empty() {
                vec![]
            } else {
                vec![AppCommand::BeginSearch { text }]
            }
        }
        AppIntent::DirectionsSubmitted {
            origin,
            destination,
        } => {
            if origin.trim().is_empty() || destination.trim().is_empty() {
                vec![]
            } else {
                vec![AppCommand::BeginDirections {
                    origin,
                    destination,
                }]
            }
        }
        AppIntent::SuggestionsRequested { field, text } => {
            if text.trim().chars().count() < state.options.suggest_min_chars {
                vec![AppCommand::ClearSuggestions]
            } else {
                vec![AppCommand::BeginSuggest { field, text }]
            }
        }
        AppIntent::SuggestionPicked { field, index } => {
            vec![AppCommand::ApplySuggestion { field, index }]
        }
        AppIntent::SuggestionsDismissed => vec![AppCommand::ClearSuggestions],

        AppIntent::MapDoubleClicked { position } => vec![AppCommand::OpenDraft { position }],
        AppIntent::MarkerClicked { index } => vec![AppCommand::SelectMarker { index }],
        AppIntent::SearchMarkerClicked => vec![AppCommand::SelectSearchResult],
        AppIntent::InfoWindowClosed => vec![AppCommand::ClearSelection],

        AppIntent::CameraPanned { delta_px } => vec![AppCommand::PanCamera { delta_px }],
        AppIntent::CameraZoomed { steps, focus_px } => {
            vec![AppCommand::ZoomCamera { steps, focus_px }]
        }
        AppIntent::ViewportResized { size } => vec![AppCommand::SetViewportSize { size }],
        AppIntent::ZoomInRequested => vec![AppCommand::ZoomIn],
        AppIntent::ZoomOutRequested => vec![AppCommand::ZoomOut],
        AppIntent::ResetCameraRequested => vec![AppCommand::ResetCamera],

        AppIntent::RefreshRequested => vec![AppCommand::RefreshMarkers],
        AppIntent::BannerDismissed => vec![AppCommand::DismissBanner],
        AppIntent::ExitRequested => vec![AppCommand::RequestExit],

        AppIntent::DraftConfirmed {
            title,
            comment,
            category,
        } => {
            if title.trim().is_empty() || comment.trim().is_empty() {
                vec![AppCommand::ShowFormError {
                    message: MSG_DRAFT_INCOMPLETE.to_string(),
                }]
            } else {
                vec![AppCommand::SubmitDraft {
                    title,
                    comment,
                    category,
                }]
            }
        }
        AppIntent::DraftCancelled => vec![AppCommand::CancelDraft],

        AppIntent::LocateResolved { seq, result } => {
            vec![AppCommand::ApplyLocate { seq, result }]
        }
        AppIntent::GeocodeResolved { seq, result } => {
            vec![AppCommand::ApplySearchResult { seq, result }]
        }
        AppIntent::DirectionsResolved { seq, result } => {
            vec![AppCommand::ApplyRoute { seq, result }]
        }
        AppIntent::SuggestionsResolved { seq, field, result } => {
            vec![AppCommand::ApplySuggestions { seq, field, result }]
        }
        AppIntent::MarkersListed { seq, result } => {
            vec![AppCommand::ApplyMarkerList { seq, result }]
        }
        AppIntent::MarkerCreated { seq, result } => {
            vec![AppCommand::ApplyCreateResult { seq, result }]
        }
    }
}

#[cfg(test)]
mod tests;
