//! Modaler Dialog zum Anlegen eines neuen Markers.

use crate::app::{AppIntent, AppState};
use crate::core::MarkerCategory;

/// Zeigt den Dialog "Nuevo Punto de Interés", solange ein Entwurf
/// offen ist, und gibt erzeugte Intents zurück.
pub fn show_marker_dialog(ctx: &egui::Context, state: &mut AppState) -> Vec<AppIntent> {
    let mut events = Vec::new();

    let Some(draft) = &mut state.ui.draft else {
        return events;
    };

    let mut confirmed = false;
    let mut cancelled = false;

    egui::Window::new("Nuevo Punto de Interés")
        .collapsible(false)
        .resizable(false)
        .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
        .show(ctx, |ui| {
            ui.set_min_width(280.0);

            ui.label(format!(
                "Posición: {:.5}, {:.5}",
                draft.position.lat, draft.position.lng
            ));
            ui.add_space(6.0);

            ui.horizontal(|ui| {
                ui.label("Título:");
                ui.text_edit_singleline(&mut draft.title);
            });

            ui.add_space(4.0);

            ui.horizontal(|ui| {
                ui.label("Comentario:");
                ui.text_edit_multiline(&mut draft.comment);
            });

            ui.add_space(4.0);

            ui.horizontal(|ui| {
                ui.label("Categoría:");
                egui::ComboBox::from_id_salt("draft_category")
                    .selected_text(draft.category.label())
                    .show_ui(ui, |ui| {
                        for category in MarkerCategory::ALL {
                            ui.selectable_value(&mut draft.category, category, category.label());
                        }
                    });
            });

            ui.add_space(10.0);

            ui.horizontal(|ui| {
                let can_save = draft.is_complete() && !draft.submitting;
                ui.add_enabled_ui(can_save, |ui| {
                    if ui.button("Guardar").clicked() {
                        confirmed = true;
                    }
                });

                ui.add_enabled_ui(!draft.submitting, |ui| {
                    if ui.button("Cancelar").clicked() {
                        cancelled = true;
                    }
                });

                if draft.submitting {
                    ui.spinner();
                }
            });
        });

    if confirmed {
        events.push(AppIntent::DraftConfirmed {
            title: draft.title.trim().to_string(),
            comment: draft.comment.trim().to_string(),
            category: draft.category,
        });
    } else if cancelled {
        events.push(AppIntent::DraftCancelled);
    }

    events
}
