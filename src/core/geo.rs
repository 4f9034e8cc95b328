//! Geografische Basistypen: WGS84-Koordinate und Regions-Rechteck.

use serde::{Deserialize, Serialize};

/// Qualifier, der an Freitext-Anfragen angehängt wird, um Ergebnisse
/// auf die Zielregion zu begrenzen (bewusst simple String-Heuristik).
pub const REGION_QUALIFIER: &str = ", Región de Coquimbo, Chile";

/// Ländercode für Adress-Vorschläge.
pub const REGION_COUNTRY: &str = "cl";

/// Pannable-/Suchbereich: Región de Coquimbo.
pub const COQUIMBO_BOUNDS: RegionBounds = RegionBounds {
    north: -29.1,
    south: -32.2,
    east: -69.5,
    west: -72.0,
};

/// Geografische Koordinate in Grad (WGS84).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LatLng {
    /// Breitengrad, gültig in [-90, 90]
    pub lat: f64,
    /// Längengrad, gültig in [-180, 180]
    pub lng: f64,
}

impl LatLng {
    /// Erstellt eine neue Koordinate (ohne Validierung).
    pub const fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }

    /// Gibt `true` zurück, wenn beide Komponenten im gültigen Wertebereich liegen.
    pub fn is_valid(&self) -> bool {
        (-90.0..=90.0).contains(&self.lat) && (-180.0..=180.0).contains(&self.lng)
    }
}

/// Achsenparalleles Regions-Rechteck in Grad.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RegionBounds {
    /// Nördliche Grenze (Breitengrad)
    pub north: f64,
    /// Südliche Grenze (Breitengrad)
    pub south: f64,
    /// Östliche Grenze (Längengrad)
    pub east: f64,
    /// Westliche Grenze (Längengrad)
    pub west: f64,
}

impl RegionBounds {
    /// Gibt `true` zurück, wenn die Koordinate innerhalb des Rechtecks liegt.
    pub fn contains(&self, p: LatLng) -> bool {
        p.lat <= self.north && p.lat >= self.south && p.lng <= self.east && p.lng >= self.west
    }

    /// Zieht die Koordinate komponentenweise in das Rechteck.
    pub fn clamp(&self, p: LatLng) -> LatLng {
        LatLng {
            lat: p.lat.clamp(self.south, self.north),
            lng: p.lng.clamp(self.west, self.east),
        }
    }

    /// Mittelpunkt des Rechtecks.
    pub fn center(&self) -> LatLng {
        LatLng {
            lat: (self.north + self.south) / 2.0,
            lng: (self.east + self.west) / 2.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_latlng_validity_ranges() {
        assert!(LatLng::new(-29.95, -71.34).is_valid());
        assert!(LatLng::new(90.0, 180.0).is_valid());
        assert!(LatLng::new(-90.0, -180.0).is_valid());
        assert!(!LatLng::new(90.01, 0.0).is_valid());
        assert!(!LatLng::new(0.0, -180.5).is_valid());
    }

    #[test]
    fn test_coquimbo_bounds_contains_default_center() {
        assert!(COQUIMBO_BOUNDS.contains(LatLng::new(-29.95332, -71.33947)));
        assert!(!COQUIMBO_BOUNDS.contains(LatLng::new(-33.45, -70.66))); // Santiago
    }

    #[test]
    fn test_clamp_pulls_outside_point_onto_border() {
        let clamped = COQUIMBO_BOUNDS.clamp(LatLng::new(-28.0, -75.0));
        assert_eq!(clamped, LatLng::new(-29.1, -72.0));

        let inside = LatLng::new(-30.5, -71.0);
        assert_eq!(COQUIMBO_BOUNDS.clamp(inside), inside);
    }
}
