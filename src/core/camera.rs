//! Karten-Kamera: Web-Mercator-Projektion mit ganzzahligen Zoom-Stufen.
//!
//! Die Kamera besitzt Center und Zoom des Viewports. Alle Eingaben aus
//! dem Karten-Panel (Pan-Delta, Zoom-Schritte) laufen hier durch; das
//! Center wird dabei immer in die Regionsgrenzen geklemmt.

use glam::{DVec2, Vec2};

use super::geo::{LatLng, COQUIMBO_BOUNDS};

/// Fester Default-Mittelpunkt (Coquimbo / La Serena).
pub const DEFAULT_CENTER: LatLng = LatLng::new(-29.95332, -71.33947);
/// Zoom-Stufe beim Start.
pub const DEFAULT_ZOOM: u8 = 14;
/// Zoom-Stufe nach erfolgreicher Adresssuche.
pub const SEARCH_ZOOM: u8 = 18;
/// Minimale Zoom-Stufe.
pub const ZOOM_MIN: u8 = 3;
/// Maximale Zoom-Stufe (Obergrenze üblicher Tile-Server).
pub const ZOOM_MAX: u8 = 19;

/// Kantenlänge einer Kachel in Pixeln.
pub const TILE_SIZE: f64 = 256.0;

/// Viewport-Zustand der Karte: Center-Koordinate und Zoom-Stufe.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MapCamera {
    /// Aktueller Karten-Mittelpunkt
    pub center: LatLng,
    /// Ganzzahlige Zoom-Stufe
    pub zoom: u8,
}

impl Default for MapCamera {
    fn default() -> Self {
        Self::new()
    }
}

impl MapCamera {
    /// Erstellt die Kamera im Startzustand.
    pub fn new() -> Self {
        Self {
            center: DEFAULT_CENTER,
            zoom: DEFAULT_ZOOM,
        }
    }

    /// Weltgröße in Pixeln bei der aktuellen Zoom-Stufe.
    pub fn world_size(&self) -> f64 {
        TILE_SIZE * f64::from(1u32 << u32::from(self.zoom))
    }

    /// Projiziert eine Koordinate in Welt-Pixel (Web Mercator).
    pub fn project(&self, p: LatLng) -> DVec2 {
        let size = self.world_size();
        let x = (p.lng + 180.0) / 360.0 * size;
        let lat_rad = p.lat.to_radians();
        let y = (1.0 - (lat_rad.tan() + 1.0 / lat_rad.cos()).ln() / std::f64::consts::PI) / 2.0
            * size;
        DVec2::new(x, y)
    }

    /// Inverse Projektion von Welt-Pixeln zurück auf eine Koordinate.
    pub fn unproject(&self, world: DVec2) -> LatLng {
        let size = self.world_size();
        let lng = world.x / size * 360.0 - 180.0;
        let n = std::f64::consts::PI * (1.0 - 2.0 * world.y / size);
        let lat = n.sinh().atan().to_degrees();
        LatLng::new(lat, lng)
    }

    /// Rechnet eine Screen-Position (relativ zum Viewport) in eine Koordinate um.
    pub fn screen_to_geo(&self, screen: Vec2, viewport: [f32; 2]) -> LatLng {
        let half = DVec2::new(f64::from(viewport[0]) / 2.0, f64::from(viewport[1]) / 2.0);
        let world =
            self.project(self.center) + DVec2::new(f64::from(screen.x), f64::from(screen.y)) - half;
        self.unproject(world)
    }

    /// Rechnet eine Koordinate in eine Screen-Position (relativ zum Viewport) um.
    pub fn geo_to_screen(&self, p: LatLng, viewport: [f32; 2]) -> Vec2 {
        let half = DVec2::new(f64::from(viewport[0]) / 2.0, f64::from(viewport[1]) / 2.0);
        let d = self.project(p) - self.project(self.center) + half;
        Vec2::new(d.x as f32, d.y as f32)
    }

    /// Verschiebt das Center um ein Pixel-Delta (Drag-Geste).
    pub fn pan_pixels(&mut self, delta: Vec2) {
        let world = self.project(self.center) + DVec2::new(f64::from(delta.x), f64::from(delta.y));
        self.center = COQUIMBO_BOUNDS.clamp(self.unproject(world));
    }

    /// Ändert die Zoom-Stufe schrittweise; ein optionaler Fokuspunkt
    /// (Screen-Position) bleibt dabei geografisch stehen.
    pub fn zoom_steps(&mut self, steps: i8, focus: Option<(Vec2, [f32; 2])>) {
        let new_zoom = i16::from(self.zoom) + i16::from(steps);
        let new_zoom = new_zoom.clamp(i16::from(ZOOM_MIN), i16::from(ZOOM_MAX)) as u8;
        if new_zoom == self.zoom {
            return;
        }

        match focus {
            Some((screen, viewport)) => {
                let anchor = self.screen_to_geo(screen, viewport);
                self.zoom = new_zoom;
                // Center so verschieben, dass der Anker wieder unter dem Cursor liegt
                let half =
                    DVec2::new(f64::from(viewport[0]) / 2.0, f64::from(viewport[1]) / 2.0);
                let center_world = self.project(anchor)
                    - DVec2::new(f64::from(screen.x), f64::from(screen.y))
                    + half;
                self.center = COQUIMBO_BOUNDS.clamp(self.unproject(center_world));
            }
            None => self.zoom = new_zoom,
        }
    }

    /// Setzt das Center (geklemmt auf die Regionsgrenzen).
    pub fn set_center(&mut self, p: LatLng) {
        self.center = COQUIMBO_BOUNDS.clamp(p);
    }

    /// Setzt die Kamera auf den Startzustand zurück.
    pub fn reset(&mut self) {
        *self = Self::new();
    }
}
