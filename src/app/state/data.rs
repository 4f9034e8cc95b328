use crate::core::Marker;

/// Persistierte Daten aus dem GraphQL-Store.
#[derive(Debug, Clone, Default)]
pub struct DataState {
    /// Alle bekannten Marker, Reihenfolge wie vom Store geliefert
    pub markers: Vec<Marker>,
    /// true solange ein Listen-Request läuft
    pub fetching: bool,
}

impl DataState {
    pub fn new() -> Self {
        Self::default()
    }
}
