//! Orte und Routen: Suchergebnisse, Adress-Vorschläge, Info-Auswahl.

use super::geo::LatLng;
use super::marker::Marker;

/// Ergebnis einer Geocode-Auflösung: bestes Match des Providers.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedPlace {
    /// Aufgelöste Position
    pub position: LatLng,
    /// Formatierte Adresse des Providers
    pub formatted_address: String,
}

/// Adress-Vorschlag während der Eingabe.
/// Trägt die Koordinate bereits mit, sodass die Auswahl keinen
/// weiteren Auflösungsschritt braucht.
#[derive(Debug, Clone, PartialEq)]
pub struct AddressSuggestion {
    /// Formatierte Adresse für die Anzeige und das Textfeld
    pub description: String,
    /// Koordinate des Vorschlags
    pub position: LatLng,
}

/// Eingabefeld, zu dem Adress-Vorschläge gehören.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SuggestField {
    /// Suchfeld im Buscar-Modus
    Search,
    /// Startadresse im Rutas-Modus
    Origin,
    /// Zieladresse im Rutas-Modus
    Destination,
}

/// Suchergebnis-Marker auf der Karte (schwarzer Punkt).
#[derive(Debug, Clone, PartialEq)]
pub struct SearchResult {
    /// Position des Treffers
    pub position: LatLng,
    /// Eingegebener Suchtext
    pub name: String,
    /// Formatierte Adresse des Providers
    pub address: String,
}

/// Fahrtroute als geordnete Polyline; es gibt höchstens eine aktive
/// Route, jede neue Anfrage ersetzt sie vollständig.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Route {
    /// Wegpunkte der Route in Fahrtrichtung
    pub path: Vec<LatLng>,
}

/// Aktuell ausgewählter Eintrag für das Info-Fenster: entweder ein
/// Suchergebnis oder ein persistierter Marker.
#[derive(Debug, Clone, PartialEq)]
pub enum SelectedPlace {
    /// Auswahl eines Suchergebnisses
    Search {
        /// Position des Treffers
        position: LatLng,
        /// Suchtext als Überschrift
        name: String,
        /// Formatierte Adresse als Fließtext
        address: String,
    },
    /// Auswahl eines persistierten Markers
    Marker {
        /// Position des Markers
        position: LatLng,
        /// Titel (mit Fallback)
        title: String,
        /// Kategorie als Roh-String
        category: String,
        /// Kommentar als Fließtext
        comment: String,
    },
}

impl SelectedPlace {
    /// Baut die Auswahl aus einem Suchergebnis.
    pub fn from_search(result: &SearchResult) -> Self {
        SelectedPlace::Search {
            position: result.position,
            name: result.name.clone(),
            address: result.address.clone(),
        }
    }

    /// Baut die Auswahl aus einem persistierten Marker.
    pub fn from_marker(marker: &Marker) -> Self {
        SelectedPlace::Marker {
            position: marker.position,
            title: marker.display_title().to_string(),
            category: if marker.category.is_empty() {
                "Sin categoría".to_string()
            } else {
                marker.category.clone()
            },
            comment: marker.comment.clone(),
        }
    }

    /// Position der Auswahl (für die Platzierung des Info-Fensters).
    pub fn position(&self) -> LatLng {
        match self {
            SelectedPlace::Search { position, .. } => *position,
            SelectedPlace::Marker { position, .. } => *position,
        }
    }

    /// Überschrift des Info-Fensters.
    pub fn heading(&self) -> &str {
        match self {
            SelectedPlace::Search { name, .. } => name,
            SelectedPlace::Marker { title, .. } => title,
        }
    }

    /// Fließtext des Info-Fensters (Adresse bzw. Kommentar).
    pub fn body(&self) -> &str {
        match self {
            SelectedPlace::Search { address, .. } => address,
            SelectedPlace::Marker { comment, .. } => comment,
        }
    }
}
