//! Marker-Datenmodell: persistierte Points-of-Interest und Entwürfe.

use super::geo::LatLng;

/// Farbe für Kategorie `comida` (Gelb).
pub const COLOR_COMIDA: [u8; 3] = [0xFF, 0xD7, 0x00];
/// Farbe für Kategorie `pacos` (Blau).
pub const COLOR_PACOS: [u8; 3] = [0x00, 0x7B, 0xFF];
/// Farbe für Kategorie `peligro` (Violett).
pub const COLOR_PELIGRO: [u8; 3] = [0x8E, 0x44, 0xAD];
/// Fallback-Farbe für unbekannte Kategorien.
pub const COLOR_DEFAULT: [u8; 3] = COLOR_PELIGRO;

/// Bekannte Marker-Kategorien.
/// Der Store lehnt unbekannte Werte nicht ab; beim Rendern fallen sie
/// auf [`COLOR_DEFAULT`] zurück.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MarkerCategory {
    /// Essensstand / Lokal
    Comida,
    /// Kontrollpunkt (Polizei)
    Pacos,
    /// Gefahrenstelle
    #[default]
    Peligro,
}

impl MarkerCategory {
    /// Alle Kategorien in Dialog-Reihenfolge.
    pub const ALL: [MarkerCategory; 3] = [
        MarkerCategory::Comida,
        MarkerCategory::Pacos,
        MarkerCategory::Peligro,
    ];

    /// Wire-Wert, wie er im Store gespeichert wird.
    pub fn as_str(&self) -> &'static str {
        match self {
            MarkerCategory::Comida => "comida",
            MarkerCategory::Pacos => "pacos",
            MarkerCategory::Peligro => "peligro",
        }
    }

    /// Anzeigename für das Kategorien-Dropdown.
    pub fn label(&self) -> &'static str {
        match self {
            MarkerCategory::Comida => "Comida",
            MarkerCategory::Pacos => "Pacos",
            MarkerCategory::Peligro => "Peligro",
        }
    }

    /// Parst einen Wire-Wert; unbekannte Werte ergeben `None`.
    pub fn parse(raw: &str) -> Option<Self> {
        match raw {
            "comida" => Some(MarkerCategory::Comida),
            "pacos" => Some(MarkerCategory::Pacos),
            "peligro" => Some(MarkerCategory::Peligro),
            _ => None,
        }
    }
}

/// Reine, totale Kategorie-zu-Farbe-Abbildung für das Marker-Rendering.
pub fn category_color(raw: &str) -> [u8; 3] {
    match MarkerCategory::parse(raw) {
        Some(MarkerCategory::Comida) => COLOR_COMIDA,
        Some(MarkerCategory::Pacos) => COLOR_PACOS,
        Some(MarkerCategory::Peligro) => COLOR_PELIGRO,
        None => COLOR_DEFAULT,
    }
}

/// Persistierter Point-of-Interest aus dem Remote-Store.
#[derive(Debug, Clone, PartialEq)]
pub struct Marker {
    /// Opake ID, vom Store bei Erstellung vergeben
    pub id: String,
    /// Position des Markers
    pub position: LatLng,
    /// Titel (optional, der Store erlaubt null)
    pub title: Option<String>,
    /// Freitext-Kommentar
    pub comment: String,
    /// Kategorie als Roh-String (unbekannte Werte bleiben erhalten)
    pub category: String,
    /// Erstellungszeitpunkt, vom Store vergeben
    pub created_at: Option<String>,
}

impl Marker {
    /// Titel für die Anzeige, mit Fallback für titellose Reports.
    pub fn display_title(&self) -> &str {
        match self.title.as_deref() {
            Some(t) if !t.is_empty() => t,
            _ => "Reporte sin título",
        }
    }
}

/// Unsaved Marker-Entwurf: entsteht per Doppelklick, lebt nur im Speicher.
#[derive(Debug, Clone, PartialEq)]
pub struct DraftMarker {
    /// Position aus dem Doppelklick
    pub position: LatLng,
    /// Titel-Eingabe
    pub title: String,
    /// Kommentar-Eingabe
    pub comment: String,
    /// Gewählte Kategorie
    pub category: MarkerCategory,
    /// Submit läuft gerade (Guardar-Button gesperrt)
    pub submitting: bool,
}

impl DraftMarker {
    /// Erstellt einen leeren Entwurf an der angeklickten Position.
    pub fn new(position: LatLng, category: MarkerCategory) -> Self {
        Self {
            position,
            title: String::new(),
            comment: String::new(),
            category,
            submitting: false,
        }
    }

    /// Gibt `true` zurück, wenn Titel und Kommentar nicht leer sind.
    /// Mehr validiert der Client nicht; der Store ist die Autorität.
    pub fn is_complete(&self) -> bool {
        !self.title.trim().is_empty() && !self.comment.trim().is_empty()
    }
}
