use glam::Vec2;

use crate::core::{
    AddressSuggestion, LatLng, Marker, MarkerCategory, ResolvedPlace, Route, SuggestField,
};
use crate::net::{NetError, Seq};

/// App-Intents: Eingaben aus UI, System und Netzwerk-Abschlüssen,
/// ohne direkte Mutationslogik.
#[derive(Debug, Clone)]
pub enum AppIntent {
    /// Erster Frame: Startsequenz anstoßen (Standort + Marker-Liste)
    StartupRequested,

    /// Suchformular abgeschickt
    SearchSubmitted { text: String },
    /// Routenformular abgeschickt
    DirectionsSubmitted {
        origin: String,
        destination: String,
    },
    /// Eingabe geändert: Adress-Vorschläge anfordern
    SuggestionsRequested { field: SuggestField, text: String },
    /// Vorschlag aus der Liste gewählt
    SuggestionPicked { field: SuggestField, index: usize },
    /// Vorschlagsliste geschlossen (Fokuswechsel, Escape)
    SuggestionsDismissed,

    /// Doppelklick auf die Karte: Entwurf an dieser Position öffnen
    MapDoubleClicked { position: LatLng },
    /// Persistierten Marker angeklickt (Index in der Marker-Liste)
    MarkerClicked { index: usize },
    /// Suchergebnis-Marker angeklickt
    SearchMarkerClicked,
    /// Info-Fenster geschlossen
    InfoWindowClosed,

    /// Karte per Drag verschoben (Pixel-Delta)
    CameraPanned { delta_px: Vec2 },
    /// Karte gezoomt (Scroll), optional mit Fokuspunkt
    CameraZoomed { steps: i8, focus_px: Option<Vec2> },
    /// Viewport-Größe hat sich geändert
    ViewportResized { size: [f32; 2] },
    /// Stufenweise hineinzoomen
    ZoomInRequested,
    /// Stufenweise herauszoomen
    ZoomOutRequested,
    /// Kamera auf Startzustand zurücksetzen
    ResetCameraRequested,

    /// Marker-Liste manuell neu laden
    RefreshRequested,
    /// Fehler-Banner geschlossen
    BannerDismissed,
    /// Beenden angefordert (Salir)
    ExitRequested,

    /// Entwurfs-Dialog bestätigt (Guardar)
    DraftConfirmed {
        title: String,
        comment: String,
        category: MarkerCategory,
    },
    /// Entwurfs-Dialog abgebrochen (Cancelar)
    DraftCancelled,

    /// Standortermittlung abgeschlossen
    LocateResolved {
        seq: Seq,
        result: Result<LatLng, NetError>,
    },
    /// Geocode abgeschlossen
    GeocodeResolved {
        seq: Seq,
        result: Result<ResolvedPlace, NetError>,
    },
    /// Routenberechnung abgeschlossen
    DirectionsResolved {
        seq: Seq,
        result: Result<Route, NetError>,
    },
    /// Adress-Vorschläge eingetroffen
    SuggestionsResolved {
        seq: Seq,
        field: SuggestField,
        result: Result<Vec<AddressSuggestion>, NetError>,
    },
    /// Marker-Liste eingetroffen
    MarkersListed {
        seq: Seq,
        result: Result<Vec<Marker>, NetError>,
    },
    /// Marker-Erstellung abgeschlossen
    MarkerCreated {
        seq: Seq,
        result: Result<Marker, NetError>,
    },
}
