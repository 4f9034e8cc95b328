//! Fehlertaxonomie der Netzwerkschicht.
//!
//! Alle Varianten tragen nur Strings, damit Fehler klonbar durch den
//! Event-Kanal laufen können. Die Zuordnung zu nutzerseitigen Meldungen
//! passiert in den Handlern, nicht hier.

/// Fehler eines einzelnen Netzwerk-Roundtrips.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum NetError {
    /// Transportfehler (DNS, Timeout, Verbindungsabbruch)
    #[error("Netzwerkfehler: {0}")]
    Network(String),
    /// Der Provider-Account ist für diese Capability nicht freigeschaltet
    #[error("Dienst nicht freigeschaltet: {0}")]
    ProviderDenied(String),
    /// Die Auflösung lieferte kein verwertbares Ergebnis
    #[error("keine Ergebnisse")]
    NotFound,
    /// Der GraphQL-Store meldete ein `errors`-Array oder eine kaputte Antwort
    #[error("Backend-Fehler: {0}")]
    Backend(String),
    /// Lokale Validierung vor dem Versand schlug fehl
    #[error("Validierung fehlgeschlagen: {0}")]
    Validation(String),
}

impl From<reqwest::Error> for NetError {
    fn from(e: reqwest::Error) -> Self {
        NetError::Network(e.to_string())
    }
}

impl From<serde_json::Error> for NetError {
    fn from(e: serde_json::Error) -> Self {
        NetError::Backend(format!("ungültiges JSON: {e}"))
    }
}
