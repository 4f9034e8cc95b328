//! Zustandsmodule der Anwendung.
//!
//! Der Gesamtzustand ist in fachliche Teilzustände zerlegt:
//! Kamera/Ansicht (`view`), UI-Oberfläche (`ui`), persistierte Daten
//! (`data`) und laufende Netzwerk-Sitzung (`session`).

mod app_state;
mod data;
mod session;
mod ui;
mod view;

pub use app_state::AppState;
pub use data::DataState;
pub use session::{RequestKind, SessionState};
pub use ui::{SidebarState, SuggestionBox, UiState};
pub use view::ViewState;
