//! Zentrale Command-Ausführung.
//!
//! Der Controller nimmt Intents entgegen, übersetzt sie via
//! `intent_mapping` in Commands und führt diese über die Handler aus.
//! Jeder ausgeführte Command landet im Command-Log.

use anyhow::Result;

use crate::app::events::{AppCommand, AppIntent};
use crate::app::state::AppState;
use crate::app::{handlers, intent_mapping};

/// Führt Commands aus und verwaltet das Command-Log.
#[derive(Default)]
pub struct AppController;

impl AppController {
    pub fn new() -> Self {
        Self
    }

    /// Übersetzt einen Intent und führt alle resultierenden Commands aus.
    pub fn handle_intent(&mut self, state: &mut AppState, intent: AppIntent) -> Result<()> {
        for command in intent_mapping::map_intent_to_commands(state, intent) {
            self.handle_command(state, command)?;
        }
        Ok(())
    }

    /// Führt einen einzelnen Command aus und protokolliert ihn.
    pub fn handle_command(&mut self, state: &mut AppState, command: AppCommand) -> Result<()> {
        log::debug!("Command: {command:?}");
        state.command_log.record(command.clone());

        match command {
            AppCommand::ArmLoadingGate => handlers::view::arm_loading_gate(state),
            AppCommand::BeginLocate => handlers::view::begin_locate(state),
            AppCommand::RefreshMarkers => handlers::data::refresh(state),

            AppCommand::BeginSearch { text } => handlers::search::begin(state, text),
            AppCommand::BeginDirections {
                origin,
                destination,
            } => handlers::directions::begin(state, origin, destination),
            AppCommand::BeginSuggest { field, text } => {
                handlers::search::begin_suggest(state, field, text)
            }
            AppCommand::ApplySuggestion { field, index } => {
                handlers::search::pick_suggestion(state, field, index)
            }
            AppCommand::ClearSuggestions => handlers::search::clear_suggestions(state),

            AppCommand::OpenDraft { position } => handlers::markers::open_draft(state, position),
            AppCommand::CancelDraft => handlers::markers::cancel_draft(state),
            AppCommand::SubmitDraft {
                title,
                comment,
                category,
            } => handlers::markers::submit_draft(state, title, comment, category),
            AppCommand::ShowFormError { message } => handlers::dialog::show_form_error(state, message),

            AppCommand::SelectMarker { index } => handlers::markers::select_marker(state, index),
            AppCommand::SelectSearchResult => handlers::markers::select_search_result(state),
            AppCommand::ClearSelection => handlers::markers::clear_selection(state),

            AppCommand::PanCamera { delta_px } => handlers::view::pan(state, delta_px),
            AppCommand::ZoomCamera { steps, focus_px } => {
                handlers::view::zoom(state, steps, focus_px)
            }
            AppCommand::SetViewportSize { size } => handlers::view::set_viewport_size(state, size),
            AppCommand::ResetCamera => handlers::view::reset_camera(state),
            AppCommand::ZoomIn => handlers::view::zoom(state, 1, None),
            AppCommand::ZoomOut => handlers::view::zoom(state, -1, None),

            AppCommand::DismissBanner => handlers::dialog::dismiss_banner(state),
            AppCommand::RequestExit => handlers::dialog::request_exit(state),

            AppCommand::ApplyLocate { seq, result } => {
                handlers::view::apply_locate(state, seq, result)
            }
            AppCommand::ApplySearchResult { seq, result } => {
                handlers::search::apply(state, seq, result)
            }
            AppCommand::ApplyRoute { seq, result } => {
                handlers::directions::apply(state, seq, result)
            }
            AppCommand::ApplySuggestions { seq, field, result } => {
                handlers::search::apply_suggestions(state, seq, field, result)
            }
            AppCommand::ApplyMarkerList { seq, result } => {
                handlers::data::apply_list(state, seq, result)
            }
            AppCommand::ApplyCreateResult { seq, result } => {
                handlers::markers::apply_create(state, seq, result)
            }
        }

        Ok(())
    }
}
