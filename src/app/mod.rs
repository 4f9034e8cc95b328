//! Anwendungsschicht: Intents, Commands, Zustand und Handler.

pub mod command_log;
pub mod controller;
pub mod events;
pub mod handlers;
pub mod intent_mapping;
pub mod state;

pub use command_log::CommandLog;
pub use controller::AppController;
pub use events::{AppCommand, AppIntent};
pub use state::{AppState, UiState, ViewState};
