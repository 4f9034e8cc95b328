//! Geteilte Konfiguration: Umgebungsvariablen und Laufzeit-Optionen.

pub mod config;
pub mod options;

pub use config::{AppConfig, ConfigError};
pub use options::{AppOptions, MARKER_PICK_RADIUS_PX};
