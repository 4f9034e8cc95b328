//! Laufzeit-Optionen der Anwendung.
//!
//! `AppOptions` enthält zur Laufzeit änderbare UI-Werte und wird als
//! `peruvian_waze.toml` neben der Binary gespeichert; fehlt die Datei,
//! gelten die Defaults.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Pick-Radius für Marker-Klicks in Screen-Pixeln.
pub const MARKER_PICK_RADIUS_PX: f32 = 12.0;

/// Zur Laufzeit änderbare UI-Optionen.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppOptions {
    /// Breite der Sidebar in Pixeln
    pub sidebar_width: f32,
    /// Marker-Radius in Screen-Pixeln
    pub marker_radius_px: f32,
    /// Strichstärke der Routen-Polyline in Pixeln
    pub route_stroke_px: f32,
    /// Routenfarbe (RGB)
    pub route_color: [u8; 3],
    /// Farbe des Suchergebnis-Markers (RGB)
    pub search_marker_color: [u8; 3],
    /// Mindestanzeigedauer des Lade-Overlays in Millisekunden
    pub min_loading_ms: u64,
    /// Mindestlänge der Eingabe, ab der Adress-Vorschläge geholt werden
    pub suggest_min_chars: usize,
}

impl Default for AppOptions {
    fn default() -> Self {
        Self {
            sidebar_width: 300.0,
            marker_radius_px: 7.0,
            route_stroke_px: 4.0,
            route_color: [0xFF, 0x00, 0x00],
            search_marker_color: [0x00, 0x00, 0x00],
            min_loading_ms: 1500,
            suggest_min_chars: 3,
        }
    }
}

impl AppOptions {
    /// Pfad der Options-Datei neben der Binary.
    pub fn config_path() -> PathBuf {
        std::env::current_exe()
            .ok()
            .and_then(|p| p.parent().map(Path::to_path_buf))
            .unwrap_or_else(|| PathBuf::from("."))
            .join("peruvian_waze.toml")
    }

    /// Lädt Optionen aus einer TOML-Datei; bei Fehlern gelten die Defaults.
    pub fn load_from_file(path: &Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(content) => match toml::from_str(&content) {
                Ok(options) => options,
                Err(e) => {
                    log::warn!("Options-Datei unlesbar ({e}), Defaults aktiv");
                    Self::default()
                }
            },
            Err(_) => Self::default(),
        }
    }

    /// Speichert die Optionen als TOML.
    pub fn save_to_file(&self, path: &Path) -> anyhow::Result<()> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_toml_falls_back_to_field_defaults() {
        let options: AppOptions =
            toml::from_str("sidebar_width = 340.0").expect("partielle Datei ist gültig");
        assert_eq!(options.sidebar_width, 340.0);
        assert_eq!(options.min_loading_ms, AppOptions::default().min_loading_ms);
    }

    #[test]
    fn test_options_toml_roundtrip() {
        let options = AppOptions::default();
        let text = toml::to_string_pretty(&options).expect("serialisierbar");
        let back: AppOptions = toml::from_str(&text).expect("deserialisierbar");
        assert_eq!(back, options);
    }
}
