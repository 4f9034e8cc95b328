//! Handler für das Laden der Marker-Liste.

use crate::app::state::{AppState, RequestKind};
use crate::core::Marker;
use crate::net::{NetError, NetRequest, Seq};

/// Meldung, wenn die Marker-Liste nicht geladen werden kann.
pub const MSG_LIST_FAILED: &str = "No pudimos cargar los reportes guardados.";

/// Gibt einen Listen-Request aus.
pub fn refresh(state: &mut AppState) {
    state.data.fetching = true;
    let seq = state.session.issue(RequestKind::List);
    state.session.push(NetRequest::ListLocations { seq });
}

/// Ersetzt die Marker-Liste vollständig durch das Ergebnis.
/// Einträge mit Koordinaten außerhalb gültiger Bereiche werden verworfen.
pub fn apply_list(state: &mut AppState, seq: Seq, result: Result<Vec<Marker>, NetError>) {
    if !state.session.admit(RequestKind::List, seq) {
        log::debug!("Veraltete Marker-Liste verworfen (seq {seq})");
        return;
    }
    state.data.fetching = false;
    match result {
        Ok(mut markers) => {
            let before = markers.len();
            markers.retain(|m| m.position.is_valid());
            if markers.len() < before {
                log::warn!("{} Marker mit ungültigen Koordinaten verworfen", before - markers.len());
            }
            log::info!("{} Marker geladen", markers.len());
            state.data.markers = markers;
        }
        Err(e) => {
            log::error!("Marker-Liste konnte nicht geladen werden: {e}");
            state.ui.banner = Some(MSG_LIST_FAILED.to_string());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::LatLng;

    fn marker(id: &str, lat: f64, lng: f64) -> Marker {
        Marker {
            id: id.to_string(),
            position: LatLng { lat, lng },
            title: None,
            comment: "x".to_string(),
            category: "peligro".to_string(),
            created_at: None,
        }
    }

    #[test]
    fn test_list_replaces_markers_completely() {
        let mut state = AppState::new();
        state.data.markers = vec![marker("alt", -29.9, -71.3)];
        refresh(&mut state);
        apply_list(
            &mut state,
            1,
            Ok(vec![marker("a", -29.9, -71.3), marker("b", -30.0, -71.2)]),
        );
        assert_eq!(state.marker_count(), 2);
        assert!(!state.data.fetching);
        assert_eq!(state.data.markers[0].id, "a");
    }

    #[test]
    fn test_invalid_coordinates_are_dropped() {
        let mut state = AppState::new();
        refresh(&mut state);
        apply_list(
            &mut state,
            1,
            Ok(vec![marker("ok", -29.9, -71.3), marker("kaputt", 123.0, -71.3)]),
        );
        assert_eq!(state.marker_count(), 1);
        assert_eq!(state.data.markers[0].id, "ok");
    }

    #[test]
    fn test_list_failure_keeps_existing_markers() {
        let mut state = AppState::new();
        state.data.markers = vec![marker("alt", -29.9, -71.3)];
        refresh(&mut state);
        apply_list(&mut state, 1, Err(NetError::Network("timeout".to_string())));
        assert_eq!(state.marker_count(), 1);
        assert_eq!(state.ui.banner.as_deref(), Some(MSG_LIST_FAILED));
    }
}
