//! Handler für Marker-Entwürfe, Speichern und Auswahl.

use crate::app::state::{AppState, RequestKind};
use crate::core::{DraftMarker, LatLng, Marker, MarkerCategory, SelectedPlace};
use crate::net::{NetError, NetRequest, Seq};

/// Meldung, wenn das Speichern eines Markers fehlschlägt.
pub const MSG_CREATE_FAILED: &str = "Hubo un error. Intenta de nuevo.";

/// Öffnet einen Entwurf an der Position. Ist bereits ein Entwurf offen,
/// wird nur die Position ersetzt, Eingaben bleiben erhalten.
pub fn open_draft(state: &mut AppState, position: LatLng) {
    match &mut state.ui.draft {
        Some(draft) => draft.position = position,
        None => {
            state.ui.draft = Some(DraftMarker::new(position, state.ui.last_category));
        }
    }
}

/// Verwirft den Entwurf ohne Netzwerkaufruf.
pub fn cancel_draft(state: &mut AppState) {
    state.ui.draft = None;
}

/// Übernimmt die Dialog-Eingaben in den Entwurf und gibt den
/// Create-Request aus. Läuft bereits ein Speichern, passiert nichts.
pub fn submit_draft(
    state: &mut AppState,
    title: String,
    comment: String,
    category: MarkerCategory,
) {
    let Some(draft) = &mut state.ui.draft else {
        return;
    };
    if draft.submitting {
        log::debug!("Speichern läuft bereits, Eingabe ignoriert");
        return;
    }

    draft.title = title;
    draft.comment = comment;
    draft.category = category;
    if !draft.is_complete() {
        return;
    }
    draft.submitting = true;

    let seq = state.session.issue(RequestKind::Create);
    let draft = draft.clone();
    state.session.push(NetRequest::CreateLocation { seq, draft });
}

/// Wendet das Create-Ergebnis an. Erfolg schließt den Dialog und lädt
/// die Liste vollständig neu; Fehler lassen den Entwurf offen.
pub fn apply_create(state: &mut AppState, seq: Seq, result: Result<Marker, NetError>) {
    if !state.session.admit(RequestKind::Create, seq) {
        log::debug!("Veraltetes Create-Ergebnis verworfen (seq {seq})");
        return;
    }
    match result {
        Ok(marker) => {
            log::info!("Marker gespeichert: {}", marker.id);
            if let Some(draft) = state.ui.draft.take() {
                // Kategorie als Default für den nächsten Entwurf behalten
                state.ui.last_category = draft.category;
            }
            super::data::refresh(state);
        }
        Err(e) => {
            log::warn!("Speichern fehlgeschlagen: {e}");
            if let Some(draft) = &mut state.ui.draft {
                draft.submitting = false;
            }
            state.ui.banner = Some(MSG_CREATE_FAILED.to_string());
        }
    }
}

/// Wählt einen persistierten Marker für das Info-Fenster aus.
pub fn select_marker(state: &mut AppState, index: usize) {
    if let Some(marker) = state.data.markers.get(index) {
        state.ui.selected = Some(SelectedPlace::from_marker(marker));
    }
}

/// Wählt das aktuelle Suchergebnis für das Info-Fenster aus.
pub fn select_search_result(state: &mut AppState) {
    if let Some(result) = &state.view.search_result {
        state.ui.selected = Some(SelectedPlace::from_search(result));
    }
}

/// Hebt die Auswahl auf.
pub fn clear_selection(state: &mut AppState) {
    state.ui.selected = None;
}

#[cfg(test)]
mod tests {
    use super::*;

    fn position() -> LatLng {
        LatLng {
            lat: -29.96,
            lng: -71.34,
        }
    }

    #[test]
    fn test_double_click_replaces_position_but_keeps_input() {
        let mut state = AppState::new();
        open_draft(&mut state, position());
        if let Some(draft) = &mut state.ui.draft {
            draft.title = "Control policial".to_string();
        }

        let elsewhere = LatLng {
            lat: -30.1,
            lng: -71.2,
        };
        open_draft(&mut state, elsewhere);

        let draft = state.ui.draft.as_ref().expect("Entwurf bleibt offen");
        assert_eq!(draft.position, elsewhere);
        assert_eq!(draft.title, "Control policial");
    }

    #[test]
    fn test_cancel_discards_draft_without_request() {
        let mut state = AppState::new();
        open_draft(&mut state, position());
        cancel_draft(&mut state);
        assert!(state.ui.draft.is_none());
        assert_eq!(state.session.pending_len(), 0);
    }

    #[test]
    fn test_submit_issues_create_request() {
        let mut state = AppState::new();
        open_draft(&mut state, position());
        submit_draft(
            &mut state,
            "Choque".to_string(),
            "Dos autos".to_string(),
            MarkerCategory::Peligro,
        );

        assert!(state.ui.draft.as_ref().is_some_and(|d| d.submitting));
        let requests = state.session.take_requests();
        assert!(matches!(
            &requests[..],
            [NetRequest::CreateLocation { draft, .. }] if draft.title == "Choque"
        ));
    }

    #[test]
    fn test_second_submit_while_pending_is_ignored() {
        let mut state = AppState::new();
        open_draft(&mut state, position());
        submit_draft(
            &mut state,
            "Choque".to_string(),
            "Dos autos".to_string(),
            MarkerCategory::Peligro,
        );
        submit_draft(
            &mut state,
            "Choque".to_string(),
            "Dos autos".to_string(),
            MarkerCategory::Peligro,
        );
        assert_eq!(state.session.take_requests().len(), 1);
    }

    #[test]
    fn test_create_success_closes_draft_and_refetches() {
        let mut state = AppState::new();
        open_draft(&mut state, position());
        submit_draft(
            &mut state,
            "Feria".to_string(),
            "Empanadas".to_string(),
            MarkerCategory::Comida,
        );
        state.session.take_requests();

        apply_create(
            &mut state,
            1,
            Ok(Marker {
                id: "42".to_string(),
                position: position(),
                title: Some("Feria".to_string()),
                comment: "Empanadas".to_string(),
                category: "comida".to_string(),
                created_at: None,
            }),
        );

        assert!(state.ui.draft.is_none());
        assert_eq!(state.ui.last_category, MarkerCategory::Comida);
        let requests = state.session.take_requests();
        assert!(
            matches!(&requests[..], [NetRequest::ListLocations { .. }]),
            "Erfolg muss die Liste neu laden"
        );
    }

    #[test]
    fn test_create_failure_keeps_draft_open() {
        let mut state = AppState::new();
        open_draft(&mut state, position());
        submit_draft(
            &mut state,
            "Feria".to_string(),
            "Empanadas".to_string(),
            MarkerCategory::Comida,
        );
        state.session.take_requests();

        apply_create(&mut state, 1, Err(NetError::Backend("boom".to_string())));

        let draft = state.ui.draft.as_ref().expect("Entwurf bleibt offen");
        assert!(!draft.submitting);
        assert_eq!(draft.title, "Feria");
        assert_eq!(state.ui.banner.as_deref(), Some(MSG_CREATE_FAILED));
    }

    #[test]
    fn test_select_marker_out_of_range_is_noop() {
        let mut state = AppState::new();
        select_marker(&mut state, 3);
        assert!(state.ui.selected.is_none());
    }
}
