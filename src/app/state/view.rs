use crate::core::{MapCamera, Route, SearchResult};

/// Ansichtszustand: Kamera, Viewport und Karten-Overlays.
#[derive(Debug, Clone, Default)]
pub struct ViewState {
    /// Aktuelle Kameraposition und Zoomstufe
    pub camera: MapCamera,
    /// Größe des Karten-Viewports in Pixeln
    pub viewport_size: [f32; 2],
    /// Aktive Route, falls berechnet
    pub route: Option<Route>,
    /// Aktuelles Suchergebnis, falls vorhanden
    pub search_result: Option<SearchResult>,
}

impl ViewState {
    pub fn new() -> Self {
        Self {
            camera: MapCamera::default(),
            viewport_size: [1024.0, 768.0],
            route: None,
            search_result: None,
        }
    }
}
