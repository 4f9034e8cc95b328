//! UI-Komponenten: Sidebar, Karten-Panel, Dialoge, Banner, Status-Bar.
//!
//! Alle Render-Funktionen lesen den Zustand und geben erzeugte Intents
//! zurück; mutiert werden nur lokale Eingabepuffer.

pub mod banner;
pub mod info_window;
pub mod map_panel;
pub mod marker_dialog;
pub mod sidebar;
pub mod status;

pub use banner::render_banner;
pub use map_panel::{render_map_panel, BasemapTextures};
pub use marker_dialog::show_marker_dialog;
pub use sidebar::render_sidebar;
pub use status::render_status_bar;
