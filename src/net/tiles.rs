//! Basemap-Tiles: Beschaffung und Dekodierung der Hintergrundkarte.
//!
//! Rein präsentational: Fehler beim Laden lassen die Kachel leer und
//! werden nur geloggt, nie als Nutzerfehler angezeigt. Die Textur-Seite
//! (egui) lebt im UI-Layer; hier gibt es nur RGBA-Puffer.

use std::collections::HashMap;
use std::sync::mpsc::{channel, Receiver, Sender};
use std::thread;

use crate::core::camera::TILE_SIZE;

/// Obergrenze gehaltener Kacheln, bevor aufgeräumt wird.
const MAX_TILES: usize = 512;

/// Adresse einer Slippy-Map-Kachel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TileId {
    /// Zoom-Stufe
    pub zoom: u8,
    /// Spaltenindex
    pub x: u32,
    /// Zeilenindex
    pub y: u32,
}

/// Dekodierte Kachel als RGBA8-Puffer.
#[derive(Clone)]
pub struct DecodedTile {
    /// Breite in Pixeln
    pub width: u32,
    /// Höhe in Pixeln
    pub height: u32,
    /// Pixelzeilen, 4 Bytes pro Pixel
    pub rgba: Vec<u8>,
}

enum TileSlot {
    Pending,
    Ready(DecodedTile),
    Failed,
}

/// Holt Kacheln auf Worker-Threads und hält dekodierte Ergebnisse vor.
pub struct TileCache {
    client: reqwest::blocking::Client,
    url_template: String,
    tx: Sender<(TileId, Option<DecodedTile>)>,
    rx: Receiver<(TileId, Option<DecodedTile>)>,
    tiles: HashMap<TileId, TileSlot>,
}

/// Setzt `{z}/{x}/{y}` im URL-Template ein.
pub fn tile_url(template: &str, id: TileId) -> String {
    template
        .replace("{z}", &id.zoom.to_string())
        .replace("{x}", &id.x.to_string())
        .replace("{y}", &id.y.to_string())
}

impl TileCache {
    /// Erstellt den Cache für das konfigurierte Tile-Template.
    pub fn new(client: reqwest::blocking::Client, url_template: String) -> Self {
        let (tx, rx) = channel();
        Self {
            client,
            url_template,
            tx,
            rx,
            tiles: HashMap::new(),
        }
    }

    /// Drained fertige Downloads; gibt `true` zurück, wenn neue Kacheln
    /// angekommen sind (Repaint nötig).
    pub fn poll(&mut self) -> bool {
        let mut changed = false;
        while let Ok((id, decoded)) = self.rx.try_recv() {
            let slot = match decoded {
                Some(tile) => TileSlot::Ready(tile),
                None => TileSlot::Failed,
            };
            self.tiles.insert(id, slot);
            changed = true;
        }
        changed
    }

    /// Liefert die Kachel, falls vorhanden; stößt sonst den Download an.
    pub fn get(&mut self, id: TileId) -> Option<&DecodedTile> {
        if !self.tiles.contains_key(&id) {
            self.evict_if_full();
            self.tiles.insert(id, TileSlot::Pending);
            self.spawn_fetch(id);
        }
        match self.tiles.get(&id) {
            Some(TileSlot::Ready(tile)) => Some(tile),
            _ => None,
        }
    }

    fn evict_if_full(&mut self) {
        if self.tiles.len() >= MAX_TILES {
            // Grobe Räumung: nur laufende Downloads behalten
            self.tiles.retain(|_, slot| matches!(slot, TileSlot::Pending));
        }
    }

    fn spawn_fetch(&self, id: TileId) {
        let url = tile_url(&self.url_template, id);
        let client = self.client.clone();
        let tx = self.tx.clone();

        thread::spawn(move || {
            let decoded = fetch_and_decode(&client, &url);
            if decoded.is_none() {
                log::warn!("Tile {}/{}/{} nicht ladbar", id.zoom, id.x, id.y);
            }
            let _ = tx.send((id, decoded));
        });
    }
}

fn fetch_and_decode(client: &reqwest::blocking::Client, url: &str) -> Option<DecodedTile> {
    let response = client.get(url).send().ok()?.error_for_status().ok()?;
    let bytes = response.bytes().ok()?;
    let image = image::load_from_memory(&bytes).ok()?.to_rgba8();
    Some(DecodedTile {
        width: image.width(),
        height: image.height(),
        rgba: image.into_raw(),
    })
}

/// Sichtbarer Kachelbereich für ein Viewport-Rechteck.
/// `top_left_world` ist die Welt-Pixel-Position der linken oberen Ecke.
pub fn visible_tiles(zoom: u8, top_left_world: glam::DVec2, viewport: [f32; 2]) -> Vec<TileId> {
    let max_index = (1u32 << u32::from(zoom)) - 1;
    let first_x = (top_left_world.x / TILE_SIZE).floor().max(0.0) as u32;
    let first_y = (top_left_world.y / TILE_SIZE).floor().max(0.0) as u32;
    let last_x = ((top_left_world.x + f64::from(viewport[0])) / TILE_SIZE).floor() as u32;
    let last_y = ((top_left_world.y + f64::from(viewport[1])) / TILE_SIZE).floor() as u32;

    let mut out = Vec::new();
    for y in first_y..=last_y.min(max_index) {
        for x in first_x..=last_x.min(max_index) {
            out.push(TileId { zoom, x, y });
        }
    }
    out
}
