use glam::Vec2;

use crate::core::{
    AddressSuggestion, LatLng, Marker, MarkerCategory, ResolvedPlace, Route, SuggestField,
};
use crate::net::{NetError, Seq};

/// Mutierende App-Commands, erzeugt aus Intents via `intent_mapping`.
#[derive(Debug, Clone)]
pub enum AppCommand {
    /// Lade-Overlay für die Mindestanzeigedauer scharfschalten
    ArmLoadingGate,
    /// Standortermittlung starten
    BeginLocate,
    /// Marker-Liste vollständig neu laden
    RefreshMarkers,

    /// Geocode-Request für den Suchtext ausgeben
    BeginSearch { text: String },
    /// Directions-Request für ein Adresspaar ausgeben
    BeginDirections {
        origin: String,
        destination: String,
    },
    /// Vorschlags-Request für ein Eingabefeld ausgeben
    BeginSuggest { field: SuggestField, text: String },
    /// Gewählten Vorschlag in das Feld übernehmen
    ApplySuggestion { field: SuggestField, index: usize },
    /// Vorschlagsliste verwerfen
    ClearSuggestions,

    /// Entwurf an einer Position öffnen (oder Position ersetzen)
    OpenDraft { position: LatLng },
    /// Entwurf verwerfen
    CancelDraft,
    /// Entwurf validieren und Create-Request ausgeben
    SubmitDraft {
        title: String,
        comment: String,
        category: MarkerCategory,
    },
    /// Lokale Validierungsmeldung anzeigen
    ShowFormError { message: String },

    /// Persistierten Marker auswählen
    SelectMarker { index: usize },
    /// Suchergebnis auswählen
    SelectSearchResult,
    /// Auswahl aufheben
    ClearSelection,

    /// Kamera um Pixel-Delta verschieben
    PanCamera { delta_px: Vec2 },
    /// Kamera schrittweise zoomen
    ZoomCamera { steps: i8, focus_px: Option<Vec2> },
    /// Viewport-Größe setzen
    SetViewportSize { size: [f32; 2] },
    /// Kamera zurücksetzen
    ResetCamera,
    /// Stufenweise hineinzoomen
    ZoomIn,
    /// Stufenweise herauszoomen
    ZoomOut,

    /// Fehler-Banner schließen
    DismissBanner,
    /// Anwendung zum Beenden markieren
    RequestExit,

    /// Standort-Ergebnis anwenden (Token-gefenct)
    ApplyLocate {
        seq: Seq,
        result: Result<LatLng, NetError>,
    },
    /// Suchergebnis anwenden (Token-gefenct)
    ApplySearchResult {
        seq: Seq,
        result: Result<ResolvedPlace, NetError>,
    },
    /// Route anwenden (Token-gefenct)
    ApplyRoute {
        seq: Seq,
        result: Result<Route, NetError>,
    },
    /// Vorschläge anwenden (Token-gefenct)
    ApplySuggestions {
        seq: Seq,
        field: SuggestField,
        result: Result<Vec<AddressSuggestion>, NetError>,
    },
    /// Marker-Liste anwenden (Token-gefenct)
    ApplyMarkerList {
        seq: Seq,
        result: Result<Vec<Marker>, NetError>,
    },
    /// Create-Ergebnis anwenden (Token-gefenct)
    ApplyCreateResult {
        seq: Seq,
        result: Result<Marker, NetError>,
    },
}
