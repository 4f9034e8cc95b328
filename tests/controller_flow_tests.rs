use peruvian_waze::{
    AppCommand, AppController, AppIntent, AppState, DraftMarker, LatLng, Marker, MarkerCategory,
    NetError, NetRequest, ResolvedPlace, Route, SearchResult, DEFAULT_CENTER, DEFAULT_ZOOM,
    SEARCH_ZOOM,
};

fn marker(id: &str, lat: f64, lng: f64, category: &str) -> Marker {
    Marker {
        id: id.to_string(),
        position: LatLng { lat, lng },
        title: Some(format!("Reporte {id}")),
        comment: "Kommentar".to_string(),
        category: category.to_string(),
        created_at: None,
    }
}

#[test]
fn test_startup_issues_locate_and_list_requests() {
    let mut controller = AppController::new();
    let mut state = AppState::new();

    controller
        .handle_intent(&mut state, AppIntent::StartupRequested)
        .expect("StartupRequested sollte ohne Fehler durchlaufen");

    assert!(state.ui.loading_overlay_active(), "Lade-Overlay scharf");
    assert!(state.ui.locating);
    assert!(state.data.fetching);

    let requests = state.session.take_requests();
    assert_eq!(requests.len(), 2);
    assert!(matches!(requests[0], NetRequest::Locate { .. }));
    assert!(matches!(requests[1], NetRequest::ListLocations { .. }));

    let first = state
        .command_log
        .iter()
        .next()
        .expect("Es sollte ein Command geloggt sein");
    assert!(matches!(first, AppCommand::ArmLoadingGate));
}

#[test]
fn test_search_flow_recenters_camera_on_result() {
    let mut controller = AppController::new();
    let mut state = AppState::new();

    controller
        .handle_intent(
            &mut state,
            AppIntent::SearchSubmitted {
                text: "Balmaceda 1234".to_string(),
            },
        )
        .expect("SearchSubmitted sollte ohne Fehler durchlaufen");

    let requests = state.session.take_requests();
    let NetRequest::Geocode { seq, text } = &requests[0] else {
        panic!("Geocode-Request erwartet, war: {:?}", requests[0]);
    };
    assert_eq!(text, "Balmaceda 1234");

    let target = LatLng {
        lat: -29.90453,
        lng: -71.24894,
    };
    controller
        .handle_intent(
            &mut state,
            AppIntent::GeocodeResolved {
                seq: *seq,
                result: Ok(ResolvedPlace {
                    position: target,
                    formatted_address: "Balmaceda 1234, La Serena, Región de Coquimbo, Chile"
                        .to_string(),
                }),
            },
        )
        .expect("GeocodeResolved sollte ohne Fehler durchlaufen");

    assert_eq!(state.view.camera.center, target);
    assert_eq!(state.view.camera.zoom, SEARCH_ZOOM);
    let result = state.view.search_result.as_ref().expect("Suchergebnis");
    assert_eq!(result.name, "Balmaceda 1234");
    assert!(!state.ui.resolving);
}

#[test]
fn test_stale_search_response_does_not_move_camera() {
    let mut controller = AppController::new();
    let mut state = AppState::new();

    controller
        .handle_intent(
            &mut state,
            AppIntent::SearchSubmitted {
                text: "erste Suche".to_string(),
            },
        )
        .unwrap();
    let first_seq = match &state.session.take_requests()[0] {
        NetRequest::Geocode { seq, .. } => *seq,
        other => panic!("Geocode erwartet: {other:?}"),
    };

    controller
        .handle_intent(
            &mut state,
            AppIntent::SearchSubmitted {
                text: "zweite Suche".to_string(),
            },
        )
        .unwrap();
    let second_seq = match &state.session.take_requests()[0] {
        NetRequest::Geocode { seq, .. } => *seq,
        other => panic!("Geocode erwartet: {other:?}"),
    };

    let second_target = LatLng {
        lat: -29.95,
        lng: -71.33,
    };
    controller
        .handle_intent(
            &mut state,
            AppIntent::GeocodeResolved {
                seq: second_seq,
                result: Ok(ResolvedPlace {
                    position: second_target,
                    formatted_address: "zweite".to_string(),
                }),
            },
        )
        .unwrap();

    // Verspätete Antwort der ersten Suche trifft ein
    controller
        .handle_intent(
            &mut state,
            AppIntent::GeocodeResolved {
                seq: first_seq,
                result: Ok(ResolvedPlace {
                    position: LatLng {
                        lat: -31.0,
                        lng: -71.0,
                    },
                    formatted_address: "erste".to_string(),
                }),
            },
        )
        .unwrap();

    assert_eq!(state.view.camera.center, second_target);
}

#[test]
fn test_late_search_result_after_newer_route_is_dropped() {
    let mut controller = AppController::new();
    let mut state = AppState::new();

    // Suche abschicken, ohne auf die Antwort zu warten
    controller
        .handle_intent(
            &mut state,
            AppIntent::SearchSubmitted {
                text: "Balmaceda 1234".to_string(),
            },
        )
        .unwrap();
    let search_seq = match &state.session.take_requests()[0] {
        NetRequest::Geocode { seq, .. } => *seq,
        other => panic!("Geocode erwartet: {other:?}"),
    };

    // Danach eine Route anfordern; sie macht die Suche bedeutungslos
    controller
        .handle_intent(
            &mut state,
            AppIntent::DirectionsSubmitted {
                origin: "La Serena".to_string(),
                destination: "Coquimbo".to_string(),
            },
        )
        .unwrap();
    let route_seq = match &state.session.take_requests()[0] {
        NetRequest::Directions { seq, .. } => *seq,
        other => panic!("Directions erwartet: {other:?}"),
    };

    controller
        .handle_intent(
            &mut state,
            AppIntent::DirectionsResolved {
                seq: route_seq,
                result: Ok(Route {
                    path: vec![
                        DEFAULT_CENTER,
                        LatLng {
                            lat: -29.96,
                            lng: -71.34,
                        },
                    ],
                }),
            },
        )
        .unwrap();
    let center_after_route = state.view.camera.center;

    // Die überholte Such-Antwort trifft erst jetzt ein
    controller
        .handle_intent(
            &mut state,
            AppIntent::GeocodeResolved {
                seq: search_seq,
                result: Ok(ResolvedPlace {
                    position: LatLng {
                        lat: -31.0,
                        lng: -71.0,
                    },
                    formatted_address: "anderswo".to_string(),
                }),
            },
        )
        .unwrap();

    assert!(state.view.route.is_some(), "Route bleibt bestehen");
    assert!(
        state.view.search_result.is_none(),
        "überholtes Suchergebnis wird nicht mehr angezeigt"
    );
    assert_eq!(
        state.view.camera.center, center_after_route,
        "Kamera springt nicht auf das überholte Ziel"
    );
}

#[test]
fn test_geocoding_and_directions_errors_have_distinct_messages() {
    let mut controller = AppController::new();
    let mut state = AppState::new();

    controller
        .handle_intent(
            &mut state,
            AppIntent::SearchSubmitted {
                text: "nirgendwo".to_string(),
            },
        )
        .unwrap();
    let seq = match &state.session.take_requests()[0] {
        NetRequest::Geocode { seq, .. } => *seq,
        other => panic!("Geocode erwartet: {other:?}"),
    };
    controller
        .handle_intent(
            &mut state,
            AppIntent::GeocodeResolved {
                seq,
                result: Err(NetError::NotFound),
            },
        )
        .unwrap();
    let search_banner = state.ui.banner.clone().expect("Banner bei NotFound");

    controller
        .handle_intent(
            &mut state,
            AppIntent::DirectionsSubmitted {
                origin: "La Serena".to_string(),
                destination: "Coquimbo".to_string(),
            },
        )
        .unwrap();
    let seq = match &state.session.take_requests()[0] {
        NetRequest::Directions { seq, .. } => *seq,
        other => panic!("Directions erwartet: {other:?}"),
    };
    controller
        .handle_intent(
            &mut state,
            AppIntent::DirectionsResolved {
                seq,
                result: Err(NetError::ProviderDenied("denied".to_string())),
            },
        )
        .unwrap();
    let directions_banner = state.ui.banner.clone().expect("Banner bei Denied");

    assert_ne!(search_banner, directions_banner);
    assert!(directions_banner.contains("Directions API"));
}

#[test]
fn test_directions_flow_replaces_search_result_with_route() {
    let mut controller = AppController::new();
    let mut state = AppState::new();
    state.view.search_result = Some(SearchResult {
        position: DEFAULT_CENTER,
        name: "alt".to_string(),
        address: "alt".to_string(),
    });

    controller
        .handle_intent(
            &mut state,
            AppIntent::DirectionsSubmitted {
                origin: "La Serena".to_string(),
                destination: "Coquimbo".to_string(),
            },
        )
        .expect("DirectionsSubmitted sollte ohne Fehler durchlaufen");

    assert!(state.view.search_result.is_none());

    let seq = match &state.session.take_requests()[0] {
        NetRequest::Directions { seq, .. } => *seq,
        other => panic!("Directions erwartet: {other:?}"),
    };
    controller
        .handle_intent(
            &mut state,
            AppIntent::DirectionsResolved {
                seq,
                result: Ok(Route {
                    path: vec![
                        DEFAULT_CENTER,
                        LatLng {
                            lat: -29.96,
                            lng: -71.34,
                        },
                    ],
                }),
            },
        )
        .unwrap();

    assert_eq!(state.view.route.as_ref().map(|r| r.path.len()), Some(2));
}

#[test]
fn test_draft_lifecycle_success_closes_dialog_and_refetches() {
    let mut controller = AppController::new();
    let mut state = AppState::new();
    let position = LatLng {
        lat: -29.96,
        lng: -71.34,
    };

    controller
        .handle_intent(&mut state, AppIntent::MapDoubleClicked { position })
        .expect("MapDoubleClicked sollte ohne Fehler durchlaufen");
    assert_eq!(
        state.ui.draft.as_ref().map(|d| d.position),
        Some(position),
        "Entwurf exakt an der Klickposition"
    );

    // Unvollständig: Meldung, kein Request
    controller
        .handle_intent(
            &mut state,
            AppIntent::DraftConfirmed {
                title: "".to_string(),
                comment: "nur Kommentar".to_string(),
                category: MarkerCategory::Peligro,
            },
        )
        .unwrap();
    assert!(state.ui.banner.is_some());
    assert_eq!(state.session.take_requests().len(), 0);

    // Vollständig: Create-Request geht raus
    controller
        .handle_intent(
            &mut state,
            AppIntent::DraftConfirmed {
                title: "Feria".to_string(),
                comment: "Empanadas ricas".to_string(),
                category: MarkerCategory::Comida,
            },
        )
        .unwrap();
    let requests = state.session.take_requests();
    let NetRequest::CreateLocation { seq, draft } = &requests[0] else {
        panic!("CreateLocation erwartet: {:?}", requests[0]);
    };
    assert_eq!(draft.category, MarkerCategory::Comida);

    controller
        .handle_intent(
            &mut state,
            AppIntent::MarkerCreated {
                seq: *seq,
                result: Ok(marker("99", position.lat, position.lng, "comida")),
            },
        )
        .unwrap();

    assert!(state.ui.draft.is_none(), "Dialog nach Erfolg geschlossen");
    assert_eq!(
        state.ui.last_category,
        MarkerCategory::Comida,
        "Kategorie bleibt Default für den nächsten Entwurf"
    );
    let requests = state.session.take_requests();
    assert!(
        matches!(&requests[..], [NetRequest::ListLocations { .. }]),
        "Erfolg lädt die Liste vollständig neu"
    );
}

#[test]
fn test_draft_failure_keeps_dialog_open_with_input() {
    let mut controller = AppController::new();
    let mut state = AppState::new();
    let position = LatLng {
        lat: -29.96,
        lng: -71.34,
    };

    controller
        .handle_intent(&mut state, AppIntent::MapDoubleClicked { position })
        .unwrap();
    controller
        .handle_intent(
            &mut state,
            AppIntent::DraftConfirmed {
                title: "Control".to_string(),
                comment: "Carabineros en la rotonda".to_string(),
                category: MarkerCategory::Pacos,
            },
        )
        .unwrap();
    let seq = match &state.session.take_requests()[0] {
        NetRequest::CreateLocation { seq, .. } => *seq,
        other => panic!("CreateLocation erwartet: {other:?}"),
    };

    controller
        .handle_intent(
            &mut state,
            AppIntent::MarkerCreated {
                seq,
                result: Err(NetError::Backend("GraphQL-Fehler".to_string())),
            },
        )
        .unwrap();

    let draft = state.ui.draft.as_ref().expect("Entwurf bleibt offen");
    assert_eq!(draft.title, "Control");
    assert!(!draft.submitting, "Guardar wieder möglich");
    assert!(state.ui.banner.is_some());
}

#[test]
fn test_second_confirm_while_submitting_issues_no_request() {
    let mut controller = AppController::new();
    let mut state = AppState::new();

    controller
        .handle_intent(
            &mut state,
            AppIntent::MapDoubleClicked {
                position: DEFAULT_CENTER,
            },
        )
        .unwrap();
    controller
        .handle_intent(
            &mut state,
            AppIntent::DraftConfirmed {
                title: "Feria".to_string(),
                comment: "Empanadas".to_string(),
                category: MarkerCategory::Comida,
            },
        )
        .unwrap();
    controller
        .handle_intent(
            &mut state,
            AppIntent::DraftConfirmed {
                title: "Feria".to_string(),
                comment: "Empanadas".to_string(),
                category: MarkerCategory::Comida,
            },
        )
        .unwrap();

    assert_eq!(
        state.session.take_requests().len(),
        1,
        "Doppelklick auf Guardar darf nur einen Request ausgeben"
    );
}

#[test]
fn test_cancel_draft_discards_without_request() {
    let mut controller = AppController::new();
    let mut state = AppState::new();

    controller
        .handle_intent(
            &mut state,
            AppIntent::MapDoubleClicked {
                position: DEFAULT_CENTER,
            },
        )
        .unwrap();
    controller
        .handle_intent(&mut state, AppIntent::DraftCancelled)
        .unwrap();

    assert!(state.ui.draft.is_none());
    assert_eq!(state.session.take_requests().len(), 0);
}

#[test]
fn test_locate_failure_keeps_default_camera() {
    let mut controller = AppController::new();
    let mut state = AppState::new();

    controller
        .handle_intent(&mut state, AppIntent::StartupRequested)
        .unwrap();
    let seq = match state
        .session
        .take_requests()
        .iter()
        .find_map(|r| match r {
            NetRequest::Locate { seq } => Some(*seq),
            _ => None,
        }) {
        Some(seq) => seq,
        None => panic!("Locate-Request erwartet"),
    };

    controller
        .handle_intent(
            &mut state,
            AppIntent::LocateResolved {
                seq,
                result: Err(NetError::Network("kein Netz".to_string())),
            },
        )
        .unwrap();

    assert_eq!(state.view.camera.center, DEFAULT_CENTER);
    assert_eq!(state.view.camera.zoom, DEFAULT_ZOOM);
    assert!(state.ui.banner.is_none(), "Standort-Fehler sind still");
}

#[test]
fn test_marker_click_opens_and_close_clears_info_window() {
    let mut controller = AppController::new();
    let mut state = AppState::new();
    state.data.markers = vec![
        marker("1", -29.95, -71.33, "comida"),
        marker("2", -29.96, -71.34, "pacos"),
    ];

    controller
        .handle_intent(&mut state, AppIntent::MarkerClicked { index: 1 })
        .expect("MarkerClicked sollte ohne Fehler durchlaufen");

    let selected = state.ui.selected.as_ref().expect("Auswahl vorhanden");
    assert_eq!(selected.heading(), "Reporte 2");

    controller
        .handle_intent(&mut state, AppIntent::InfoWindowClosed)
        .unwrap();
    assert!(state.ui.selected.is_none());
}

#[test]
fn test_exit_request_flags_shutdown() {
    let mut controller = AppController::new();
    let mut state = AppState::new();
    assert!(!state.should_exit);

    controller
        .handle_intent(&mut state, AppIntent::ExitRequested)
        .expect("ExitRequested sollte ohne Fehler durchlaufen");

    assert!(state.should_exit, "Hauptschleife darf das Fenster schließen");
    assert_eq!(state.session.take_requests().len(), 0);
}

#[test]
fn test_draft_struct_roundtrip_into_request() {
    // Entwurf trägt seine Eingaben unverändert bis in den Request
    let mut controller = AppController::new();
    let mut state = AppState::new();
    let position = LatLng {
        lat: -30.2,
        lng: -71.1,
    };

    controller
        .handle_intent(&mut state, AppIntent::MapDoubleClicked { position })
        .unwrap();
    controller
        .handle_intent(
            &mut state,
            AppIntent::DraftConfirmed {
                title: "Bache enorme".to_string(),
                comment: "Cuidado en la curva".to_string(),
                category: MarkerCategory::Peligro,
            },
        )
        .unwrap();

    let requests = state.session.take_requests();
    let NetRequest::CreateLocation { draft, .. } = &requests[0] else {
        panic!("CreateLocation erwartet: {:?}", requests[0]);
    };
    let expected = DraftMarker {
        position,
        title: "Bache enorme".to_string(),
        comment: "Cuidado en la curva".to_string(),
        category: MarkerCategory::Peligro,
        submitting: true,
    };
    assert_eq!(*draft, expected);
}
