//! Handler für Adresssuche und Adress-Vorschläge.

use crate::app::state::{AppState, RequestKind, SuggestionBox};
use crate::core::{AddressSuggestion, ResolvedPlace, SearchResult, SuggestField, SEARCH_ZOOM};
use crate::net::{NetError, NetRequest, Seq};

/// Meldung, wenn die Suche kein Ergebnis liefert.
pub const MSG_SEARCH_NOT_FOUND: &str =
    "No pudimos encontrar esa ubicación. Por favor, intente con otra dirección.";
/// Meldung, wenn der Provider den Geocoding-Dienst ablehnt.
pub const MSG_GEOCODING_DENIED: &str =
    "Error: La API key no tiene habilitado el servicio de Geocoding API.";
/// Meldung bei sonstigen Fehlern der Suche.
pub const MSG_SEARCH_FAILED: &str = "Error de red al buscar. Intente nuevamente.";

/// Startet einen Geocode-Request; eine bestehende Route wird verworfen.
pub fn begin(state: &mut AppState, text: String) {
    let text = text.trim().to_string();
    state.view.route = None;
    state.ui.banner = None;
    state.ui.suggestions = None;
    state.ui.resolving = true;

    let seq = state.session.issue(RequestKind::Search);
    state.session.pending_query = Some(text.clone());
    state.session.push(NetRequest::Geocode { seq, text });
}

/// Wendet das Suchergebnis an: Kamera springt auf das Ziel, das
/// Ergebnis wird als Marker angezeigt.
pub fn apply(state: &mut AppState, seq: Seq, result: Result<ResolvedPlace, NetError>) {
    if !state.session.admit(RequestKind::Search, seq) {
        log::debug!("Veraltetes Suchergebnis verworfen (seq {seq})");
        return;
    }
    state.ui.resolving = false;
    match result {
        Ok(place) => {
            let name = state
                .session
                .pending_query
                .take()
                .unwrap_or_else(|| place.formatted_address.clone());
            state.view.camera.set_center(place.position);
            state.view.camera.zoom = SEARCH_ZOOM;
            state.view.search_result = Some(SearchResult {
                position: place.position,
                name,
                address: place.formatted_address,
            });
        }
        Err(e) => {
            state.session.pending_query = None;
            log::warn!("Suche fehlgeschlagen: {e}");
            state.ui.banner = Some(search_error_message(&e).to_string());
        }
    }
}

fn search_error_message(e: &NetError) -> &'static str {
    match e {
        NetError::NotFound => MSG_SEARCH_NOT_FOUND,
        NetError::ProviderDenied(_) => MSG_GEOCODING_DENIED,
        _ => MSG_SEARCH_FAILED,
    }
}

/// Startet einen Vorschlags-Request für ein Eingabefeld.
pub fn begin_suggest(state: &mut AppState, field: SuggestField, text: String) {
    let seq = state.session.issue(RequestKind::Suggest(field));
    state.session.push(NetRequest::Suggest { seq, field, text });
}

/// Wendet eingetroffene Vorschläge an. Fehler werden nur geloggt;
/// eine leere Liste schließt die Vorschlagsbox.
pub fn apply_suggestions(
    state: &mut AppState,
    seq: Seq,
    field: SuggestField,
    result: Result<Vec<AddressSuggestion>, NetError>,
) {
    if !state.session.admit(RequestKind::Suggest(field), seq) {
        log::debug!("Veraltete Vorschläge verworfen (seq {seq})");
        return;
    }
    match result {
        Ok(items) if items.is_empty() => state.ui.suggestions = None,
        Ok(items) => state.ui.suggestions = Some(SuggestionBox { field, items }),
        Err(e) => {
            log::debug!("Vorschläge fehlgeschlagen: {e}");
            state.ui.suggestions = None;
        }
    }
}

/// Übernimmt einen gewählten Vorschlag in das Feld. Beim Suchfeld wird
/// die mitgelieferte Koordinate direkt angewendet, ohne neuen Geocode.
pub fn pick_suggestion(state: &mut AppState, field: SuggestField, index: usize) {
    let Some(suggestion_box) = state.ui.suggestions.take() else {
        return;
    };
    if suggestion_box.field != field {
        return;
    }
    let Some(item) = suggestion_box.items.into_iter().nth(index) else {
        return;
    };

    *state.ui.field_text_mut(field) = item.description.clone();

    if field == SuggestField::Search {
        state.view.route = None;
        state.view.camera.set_center(item.position);
        state.view.camera.zoom = SEARCH_ZOOM;
        state.view.search_result = Some(SearchResult {
            position: item.position,
            name: item.description.clone(),
            address: item.description,
        });
    }
}

/// Schließt die Vorschlagsbox.
pub fn clear_suggestions(state: &mut AppState) {
    state.ui.suggestions = None;
}
