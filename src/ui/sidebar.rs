//! Sidebar mit Such- und Routenformular.

use crate::app::{AppIntent, AppState};
use crate::core::SuggestField;

/// Rendert die Sidebar und gibt erzeugte Intents zurück.
pub fn render_sidebar(ctx: &egui::Context, state: &mut AppState) -> Vec<AppIntent> {
    let mut events = Vec::new();

    egui::SidePanel::left("sidebar")
        .exact_width(state.options.sidebar_width)
        .resizable(false)
        .show(ctx, |ui| {
            ui.add_space(8.0);
            ui.heading("Peruvian Waze");
            ui.add_space(8.0);

            // Modus-Umschalter: Suche oder Route
            ui.horizontal(|ui| {
                let directions = state.ui.sidebar.directions_mode;
                if ui.selectable_label(!directions, "Buscar").clicked() {
                    state.ui.sidebar.directions_mode = false;
                    events.push(AppIntent::SuggestionsDismissed);
                }
                if ui.selectable_label(directions, "Rutas").clicked() {
                    state.ui.sidebar.directions_mode = true;
                    events.push(AppIntent::SuggestionsDismissed);
                }
            });
            ui.separator();

            if state.ui.sidebar.directions_mode {
                render_directions_form(ui, state, &mut events);
            } else {
                render_search_form(ui, state, &mut events);
            }

            ui.add_space(12.0);
            ui.separator();

            ui.horizontal(|ui| {
                if ui.button("➕").on_hover_text("Acercar").clicked() {
                    events.push(AppIntent::ZoomInRequested);
                }
                if ui.button("➖").on_hover_text("Alejar").clicked() {
                    events.push(AppIntent::ZoomOutRequested);
                }
                if ui.button("Restablecer vista").clicked() {
                    events.push(AppIntent::ResetCameraRequested);
                }
            });

            if ui.button("Actualizar reportes").clicked() {
                events.push(AppIntent::RefreshRequested);
            }

            ui.add_space(4.0);
            if ui.button("Salir").clicked() {
                events.push(AppIntent::ExitRequested);
            }
        });

    events
}

fn render_search_form(ui: &mut egui::Ui, state: &mut AppState, events: &mut Vec<AppIntent>) {
    ui.label("Dirección:");
    let response = ui.text_edit_singleline(&mut state.ui.sidebar.search_text);
    if response.changed() {
        events.push(AppIntent::SuggestionsRequested {
            field: SuggestField::Search,
            text: state.ui.sidebar.search_text.clone(),
        });
    }
    render_suggestions(ui, state, SuggestField::Search, events);

    let submitted = response.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter));
    let can_search = !state.ui.sidebar.search_text.trim().is_empty() && !state.ui.resolving;
    ui.add_space(4.0);
    if ui
        .add_enabled(can_search, egui::Button::new("Buscar"))
        .clicked()
        || (submitted && can_search)
    {
        events.push(AppIntent::SearchSubmitted {
            text: state.ui.sidebar.search_text.clone(),
        });
    }

    if state.ui.resolving {
        ui.add_space(4.0);
        ui.spinner();
    }
}

fn render_directions_form(ui: &mut egui::Ui, state: &mut AppState, events: &mut Vec<AppIntent>) {
    ui.label("Origen:");
    let origin_response = ui.text_edit_singleline(&mut state.ui.sidebar.origin_text);
    if origin_response.changed() {
        events.push(AppIntent::SuggestionsRequested {
            field: SuggestField::Origin,
            text: state.ui.sidebar.origin_text.clone(),
        });
    }
    render_suggestions(ui, state, SuggestField::Origin, events);

    ui.label("Destino:");
    let destination_response = ui.text_edit_singleline(&mut state.ui.sidebar.destination_text);
    if destination_response.changed() {
        events.push(AppIntent::SuggestionsRequested {
            field: SuggestField::Destination,
            text: state.ui.sidebar.destination_text.clone(),
        });
    }
    render_suggestions(ui, state, SuggestField::Destination, events);

    let can_route = !state.ui.sidebar.origin_text.trim().is_empty()
        && !state.ui.sidebar.destination_text.trim().is_empty()
        && !state.ui.resolving;
    ui.add_space(4.0);
    if ui
        .add_enabled(can_route, egui::Button::new("Rutas"))
        .clicked()
    {
        events.push(AppIntent::DirectionsSubmitted {
            origin: state.ui.sidebar.origin_text.clone(),
            destination: state.ui.sidebar.destination_text.clone(),
        });
    }

    if state.ui.resolving {
        ui.add_space(4.0);
        ui.spinner();
    }
}

/// Zeigt die Vorschlagsliste unter dem zugehörigen Feld.
fn render_suggestions(
    ui: &mut egui::Ui,
    state: &AppState,
    field: SuggestField,
    events: &mut Vec<AppIntent>,
) {
    let Some(suggestion_box) = &state.ui.suggestions else {
        return;
    };
    if suggestion_box.field != field {
        return;
    }

    egui::Frame::group(ui.style()).show(ui, |ui| {
        for (index, item) in suggestion_box.items.iter().enumerate() {
            if ui.selectable_label(false, &item.description).clicked() {
                events.push(AppIntent::SuggestionPicked { field, index });
            }
        }
    });
}
