//! Handler für die Routenberechnung.

use crate::app::state::{AppState, RequestKind};
use crate::core::Route;
use crate::net::{NetError, NetRequest, Seq};

/// Meldung, wenn der Provider den Directions-Dienst ablehnt.
pub const MSG_DIRECTIONS_DENIED: &str =
    "Error: La API key no tiene habilitado el servicio de Directions API.";
/// Meldung, wenn keine Route gefunden wurde.
pub const MSG_ROUTE_NOT_FOUND: &str =
    "No pudimos encontrar una ruta. Revise las direcciones e intente nuevamente.";
/// Meldung bei sonstigen Fehlern der Routenberechnung.
pub const MSG_ROUTE_FAILED: &str = "Error de red al calcular la ruta. Intente nuevamente.";

/// Startet einen Directions-Request; das Suchergebnis wird verworfen.
pub fn begin(state: &mut AppState, origin: String, destination: String) {
    state.view.search_result = None;
    state.ui.banner = None;
    state.ui.suggestions = None;
    state.ui.resolving = true;

    let seq = state.session.issue(RequestKind::Directions);
    state.session.push(NetRequest::Directions {
        seq,
        origin: origin.trim().to_string(),
        destination: destination.trim().to_string(),
    });
}

/// Wendet die berechnete Route an; eine neue Route ersetzt die alte.
pub fn apply(state: &mut AppState, seq: Seq, result: Result<Route, NetError>) {
    if !state.session.admit(RequestKind::Directions, seq) {
        log::debug!("Veraltete Route verworfen (seq {seq})");
        return;
    }
    state.ui.resolving = false;
    match result {
        Ok(route) => {
            log::info!("Route mit {} Stützpunkten berechnet", route.path.len());
            state.view.route = Some(route);
        }
        Err(e) => {
            log::warn!("Routenberechnung fehlgeschlagen: {e}");
            state.ui.banner = Some(route_error_message(&e).to_string());
        }
    }
}

fn route_error_message(e: &NetError) -> &'static str {
    match e {
        NetError::ProviderDenied(_) => MSG_DIRECTIONS_DENIED,
        NetError::NotFound => MSG_ROUTE_NOT_FOUND,
        _ => MSG_ROUTE_FAILED,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{LatLng, SearchResult};

    fn route() -> Route {
        Route {
            path: vec![
                LatLng {
                    lat: -29.95,
                    lng: -71.34,
                },
                LatLng {
                    lat: -29.96,
                    lng: -71.33,
                },
            ],
        }
    }

    #[test]
    fn test_directions_replace_search_result() {
        let mut state = AppState::new();
        state.view.search_result = Some(SearchResult {
            position: LatLng {
                lat: -29.9,
                lng: -71.25,
            },
            name: "La Serena".to_string(),
            address: "La Serena, Chile".to_string(),
        });

        begin(&mut state, "Coquimbo".to_string(), "La Serena".to_string());
        assert!(state.view.search_result.is_none());

        apply(&mut state, 1, Ok(route()));
        assert_eq!(state.view.route.as_ref().map(|r| r.path.len()), Some(2));
    }

    #[test]
    fn test_new_route_replaces_old_route() {
        let mut state = AppState::new();
        begin(&mut state, "a".to_string(), "b".to_string());
        apply(&mut state, 1, Ok(route()));

        begin(&mut state, "c".to_string(), "d".to_string());
        apply(
            &mut state,
            2,
            Ok(Route {
                path: vec![LatLng {
                    lat: -30.0,
                    lng: -71.0,
                }],
            }),
        );
        assert_eq!(state.view.route.as_ref().map(|r| r.path.len()), Some(1));
    }

    #[test]
    fn test_denied_and_not_found_messages_differ() {
        let mut state = AppState::new();
        begin(&mut state, "a".to_string(), "b".to_string());
        apply(
            &mut state,
            1,
            Err(NetError::ProviderDenied("denied".to_string())),
        );
        assert_eq!(state.ui.banner.as_deref(), Some(MSG_DIRECTIONS_DENIED));

        begin(&mut state, "a".to_string(), "b".to_string());
        apply(&mut state, 2, Err(NetError::NotFound));
        assert_eq!(state.ui.banner.as_deref(), Some(MSG_ROUTE_NOT_FOUND));
    }

    #[test]
    fn test_failed_route_keeps_previous_route_cleared_state() {
        let mut state = AppState::new();
        begin(&mut state, "a".to_string(), "b".to_string());
        apply(&mut state, 1, Err(NetError::Network("timeout".to_string())));
        assert!(state.view.route.is_none());
        assert!(!state.ui.resolving);
    }
}
