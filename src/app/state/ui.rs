use std::time::Instant;

use crate::core::{AddressSuggestion, DraftMarker, MarkerCategory, SelectedPlace, SuggestField};

/// Eingabezustand der Sidebar-Formulare.
#[derive(Debug, Clone, Default)]
pub struct SidebarState {
    /// true: Routenformular sichtbar, false: Suchformular
    pub directions_mode: bool,
    /// Text des Suchfelds
    pub search_text: String,
    /// Text des Startfelds
    pub origin_text: String,
    /// Text des Zielfelds
    pub destination_text: String,
}

/// Offene Vorschlagsliste unter einem Eingabefeld.
#[derive(Debug, Clone)]
pub struct SuggestionBox {
    /// Feld, zu dem die Vorschläge gehören
    pub field: SuggestField,
    pub items: Vec<AddressSuggestion>,
}

/// UI-Zustand: Formulare, Dialoge, Auswahl und Meldungen.
#[derive(Debug, Clone)]
pub struct UiState {
    pub sidebar: SidebarState,
    /// Offene Vorschlagsliste, falls vorhanden
    pub suggestions: Option<SuggestionBox>,
    /// Offener Marker-Entwurf, falls vorhanden
    pub draft: Option<DraftMarker>,
    /// Zuletzt gespeicherte Kategorie, Default für den nächsten Entwurf
    pub last_category: MarkerCategory,
    /// Aktuell ausgewählter Ort für das Info-Fenster
    pub selected: Option<SelectedPlace>,
    /// Sichtbare Fehlermeldung, falls vorhanden
    pub banner: Option<String>,
    /// true solange eine Suche oder Routenberechnung läuft
    pub resolving: bool,
    /// true solange die Standortermittlung läuft
    pub locating: bool,
    /// Lade-Overlay bleibt mindestens bis zu diesem Zeitpunkt sichtbar
    pub loading_until: Option<Instant>,
}

impl UiState {
    pub fn new() -> Self {
        Self {
            sidebar: SidebarState::default(),
            suggestions: None,
            draft: None,
            last_category: MarkerCategory::default(),
            selected: None,
            banner: None,
            resolving: false,
            locating: false,
            loading_until: None,
        }
    }

    /// true solange das Lade-Overlay angezeigt werden soll.
    pub fn loading_overlay_active(&self) -> bool {
        match self.loading_until {
            Some(until) => Instant::now() < until,
            None => false,
        }
    }

    /// Text des Eingabefelds zu einem Vorschlagsfeld (mutable).
    pub fn field_text_mut(&mut self, field: SuggestField) -> &mut String {
        match field {
            SuggestField::Search => &mut self.sidebar.search_text,
            SuggestField::Origin => &mut self.sidebar.origin_text,
            SuggestField::Destination => &mut self.sidebar.destination_text,
        }
    }
}

impl Default for UiState {
    fn default() -> Self {
        Self::new()
    }
}
