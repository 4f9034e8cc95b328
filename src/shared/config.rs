//! Startkonfiguration aus Umgebungsvariablen.
//!
//! Ohne API-Key oder Backend-URL startet die Anwendung nicht: es gibt
//! keinen degradierten Modus, nur den Fehlerbildschirm.

use std::env;

/// Env-Variable mit dem API-Key des Karten-Providers.
pub const ENV_MAPS_API_KEY: &str = "PW_MAPS_API_KEY";
/// Env-Variable mit der GraphQL-Endpoint-URL.
pub const ENV_BACKEND_URL: &str = "PW_BACKEND_URL";
/// Env-Variable mit dem Tile-URL-Template (optional).
pub const ENV_TILE_URL: &str = "PW_TILE_URL";

/// Default-Template für die Basemap-Kacheln.
pub const DEFAULT_TILE_URL: &str = "https://tile.openstreetmap.org/{z}/{x}/{y}.png";

/// Fatale Konfigurationsfehler beim Start.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ConfigError {
    /// Eine Pflicht-Variable fehlt oder ist leer
    #[error("Umgebungsvariable {0} ist nicht gesetzt")]
    Missing(&'static str),
}

/// Externe Konfiguration der Anwendung.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// API-Key für Geocoding/Directions/Geolocation
    pub maps_api_key: String,
    /// URL des GraphQL-Stores
    pub backend_url: String,
    /// URL-Template der Basemap-Kacheln
    pub tile_url: String,
}

impl AppConfig {
    /// Liest die Konfiguration aus der Umgebung.
    pub fn from_env() -> Result<Self, ConfigError> {
        Ok(Self {
            maps_api_key: require(ENV_MAPS_API_KEY)?,
            backend_url: require(ENV_BACKEND_URL)?,
            tile_url: env::var(ENV_TILE_URL)
                .ok()
                .filter(|v| !v.trim().is_empty())
                .unwrap_or_else(|| DEFAULT_TILE_URL.to_string()),
        })
    }
}

fn require(name: &'static str) -> Result<String, ConfigError> {
    env::var(name)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
        .ok_or(ConfigError::Missing(name))
}
