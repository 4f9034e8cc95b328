use super::*;
use crate::core::{LatLng, MarkerCategory, SuggestField};
use crate::net::NetError;

fn state() -> AppState {
    AppState::new()
}

#[test]
fn test_startup_arms_gate_then_locates_and_refreshes() {
    let commands = map_intent_to_commands(&state(), AppIntent::StartupRequested);
    assert_eq!(commands.len(), 3);
    assert!(matches!(commands[0], AppCommand::ArmLoadingGate));
    assert!(matches!(commands[1], AppCommand::BeginLocate));
    assert!(matches!(commands[2], AppCommand::RefreshMarkers));
}

#[test]
fn test_blank_search_is_ignored() {
    let commands = map_intent_to_commands(
        &state(),
        AppIntent::SearchSubmitted {
            text: "   ".to_string(),
        },
    );
    assert!(commands.is_empty());
}

#[test]
fn test_search_maps_to_begin_search() {
    let commands = map_intent_to_commands(
        &state(),
        AppIntent::SearchSubmitted {
            text: "Plaza de Armas".to_string(),
        },
    );
    assert!(matches!(
        &commands[..],
        [AppCommand::BeginSearch { text }] if text == "Plaza de Armas"
    ));
}

#[test]
fn test_directions_require_both_fields() {
    let commands = map_intent_to_commands(
        &state(),
        AppIntent::DirectionsSubmitted {
            origin: "La Serena".to_string(),
            destination: "".to_string(),
        },
    );
    assert!(commands.is_empty());
}

#[test]
fn test_short_suggest_input_clears_suggestions() {
    let commands = map_intent_to_commands(
        &state(),
        AppIntent::SuggestionsRequested {
            field: SuggestField::Search,
            text: "av".to_string(),
        },
    );
    assert!(matches!(&commands[..], [AppCommand::ClearSuggestions]));
}

#[test]
fn test_long_suggest_input_begins_suggest() {
    let commands = map_intent_to_commands(
        &state(),
        AppIntent::SuggestionsRequested {
            field: SuggestField::Origin,
            text: "avenida".to_string(),
        },
    );
    assert!(matches!(
        &commands[..],
        [AppCommand::BeginSuggest { field: SuggestField::Origin, text }] if text == "avenida"
    ));
}

#[test]
fn test_incomplete_draft_shows_form_error() {
    let commands = map_intent_to_commands(
        &state(),
        AppIntent::DraftConfirmed {
            title: "Choque".to_string(),
            comment: "  ".to_string(),
            category: MarkerCategory::Peligro,
        },
    );
    assert!(matches!(
        &commands[..],
        [AppCommand::ShowFormError { message }] if message == MSG_DRAFT_INCOMPLETE
    ));
}

#[test]
fn test_complete_draft_maps_to_submit() {
    let commands = map_intent_to_commands(
        &state(),
        AppIntent::DraftConfirmed {
            title: "Choque".to_string(),
            comment: "Dos autos en la esquina".to_string(),
            category: MarkerCategory::Pacos,
        },
    );
    assert!(matches!(
        &commands[..],
        [AppCommand::SubmitDraft { category: MarkerCategory::Pacos, .. }]
    ));
}

#[test]
fn test_double_click_opens_draft_at_position() {
    let position = LatLng {
        lat: -29.96,
        lng: -71.34,
    };
    let commands = map_intent_to_commands(&state(), AppIntent::MapDoubleClicked { position });
    assert!(matches!(
        &commands[..],
        [AppCommand::OpenDraft { position: p }] if *p == position
    ));
}

#[test]
fn test_exit_request_maps_to_request_exit() {
    let commands = map_intent_to_commands(&state(), AppIntent::ExitRequested);
    assert!(matches!(&commands[..], [AppCommand::RequestExit]));
}

#[test]
fn test_network_completions_map_one_to_one() {
    let commands = map_intent_to_commands(
        &state(),
        AppIntent::GeocodeResolved {
            seq: 7,
            result: Err(NetError::NotFound),
        },
    );
    assert!(matches!(
        &commands[..],
        [AppCommand::ApplySearchResult { seq: 7, result: Err(NetError::NotFound) }]
    ));
}
