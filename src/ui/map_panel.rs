//! Karten-Panel: Basemap-Tiles, Marker, Route und Eingabe-Gesten.

use std::collections::HashMap;

use glam::{DVec2, Vec2};

use crate::app::{AppIntent, AppState};
use crate::core::category_color;
use crate::net::tiles::{visible_tiles, DecodedTile, TileCache, TileId};
use crate::shared::MARKER_PICK_RADIUS_PX;

/// Hält die hochgeladenen egui-Texturen pro Kachel.
#[derive(Default)]
pub struct BasemapTextures {
    textures: HashMap<TileId, egui::TextureHandle>,
}

impl BasemapTextures {
    pub fn new() -> Self {
        Self::default()
    }

    /// Textur einer bereits hochgeladenen Kachel.
    fn texture_id(&self, id: TileId) -> Option<egui::TextureId> {
        self.textures.get(&id).map(|handle| handle.id())
    }

    /// Lädt einen dekodierten RGBA-Puffer als Textur hoch.
    fn upload(&mut self, ctx: &egui::Context, id: TileId, tile: &DecodedTile) -> egui::TextureId {
        let image = egui::ColorImage::from_rgba_unmultiplied(
            [tile.width as usize, tile.height as usize],
            &tile.rgba,
        );
        let handle = ctx.load_texture(
            format!("tile_{}_{}_{}", id.zoom, id.x, id.y),
            image,
            egui::TextureOptions::LINEAR,
        );
        let texture_id = handle.id();
        self.textures.insert(id, handle);
        texture_id
    }

    /// Wirft Texturen weg, die nicht mehr sichtbar sind.
    fn retain_visible(&mut self, visible: &[TileId]) {
        if self.textures.len() > 256 {
            self.textures.retain(|id, _| visible.contains(id));
        }
    }
}

/// Rendert das Karten-Panel und gibt erzeugte Intents zurück.
pub fn render_map_panel(
    ctx: &egui::Context,
    state: &AppState,
    tiles: &mut TileCache,
    textures: &mut BasemapTextures,
) -> Vec<AppIntent> {
    let mut events = Vec::new();

    egui::CentralPanel::default()
        .frame(egui::Frame::NONE)
        .show(ctx, |ui| {
            let rect = ui.max_rect();
            let response = ui.allocate_rect(rect, egui::Sense::click_and_drag());
            let viewport = [rect.width(), rect.height()];

            if viewport != state.view.viewport_size {
                events.push(AppIntent::ViewportResized { size: viewport });
            }

            let painter = ui.painter_at(rect);
            draw_basemap(ctx, &painter, rect, state, tiles, textures);
            draw_route(&painter, rect, state);
            draw_markers(&painter, rect, state);

            collect_gestures(ui, &response, rect, state, &mut events);
            events.extend(super::info_window::render(ctx, state, rect));
        });

    events
}

fn draw_basemap(
    ctx: &egui::Context,
    painter: &egui::Painter,
    rect: egui::Rect,
    state: &AppState,
    tiles: &mut TileCache,
    textures: &mut BasemapTextures,
) {
    let camera = &state.view.camera;
    let viewport = [rect.width(), rect.height()];
    let half = DVec2::new(f64::from(viewport[0]) / 2.0, f64::from(viewport[1]) / 2.0);
    let top_left_world = camera.project(camera.center) - half;

    let visible = visible_tiles(camera.zoom, top_left_world, viewport);
    for id in &visible {
        // Hochgeladene Textur wiederverwenden, sonst dekodierte Kachel
        // holen (stößt bei Bedarf den Download an)
        let texture_id = match textures.texture_id(*id) {
            Some(texture_id) => texture_id,
            None => match tiles.get(*id) {
                Some(tile) => textures.upload(ctx, *id, tile),
                None => continue,
            },
        };

        let origin_x = (f64::from(id.x) * 256.0 - top_left_world.x) as f32;
        let origin_y = (f64::from(id.y) * 256.0 - top_left_world.y) as f32;
        let tile_rect = egui::Rect::from_min_size(
            rect.min + egui::vec2(origin_x, origin_y),
            egui::vec2(256.0, 256.0),
        );
        painter.image(
            texture_id,
            tile_rect,
            egui::Rect::from_min_max(egui::pos2(0.0, 0.0), egui::pos2(1.0, 1.0)),
            egui::Color32::WHITE,
        );
    }
    textures.retain_visible(&visible);
}

fn draw_route(painter: &egui::Painter, rect: egui::Rect, state: &AppState) {
    let Some(route) = &state.view.route else {
        return;
    };
    let viewport = [rect.width(), rect.height()];
    let points: Vec<egui::Pos2> = route
        .path
        .iter()
        .map(|p| {
            let screen = state.view.camera.geo_to_screen(*p, viewport);
            rect.min + egui::vec2(screen.x, screen.y)
        })
        .collect();
    if points.len() < 2 {
        return;
    }

    let [r, g, b] = state.options.route_color;
    painter.add(egui::Shape::line(
        points,
        egui::Stroke::new(
            state.options.route_stroke_px,
            egui::Color32::from_rgb(r, g, b),
        ),
    ));
}

fn draw_markers(painter: &egui::Painter, rect: egui::Rect, state: &AppState) {
    let viewport = [rect.width(), rect.height()];
    let radius = state.options.marker_radius_px;
    let stroke = egui::Stroke::new(1.5, egui::Color32::WHITE);

    for marker in &state.data.markers {
        let screen = state.view.camera.geo_to_screen(marker.position, viewport);
        let pos = rect.min + egui::vec2(screen.x, screen.y);
        if !rect.contains(pos) {
            continue;
        }
        let [r, g, b] = category_color(&marker.category);
        painter.circle(pos, radius, egui::Color32::from_rgb(r, g, b), stroke);
    }

    if let Some(result) = &state.view.search_result {
        let screen = state.view.camera.geo_to_screen(result.position, viewport);
        let pos = rect.min + egui::vec2(screen.x, screen.y);
        let [r, g, b] = state.options.search_marker_color;
        painter.circle(pos, radius + 1.0, egui::Color32::from_rgb(r, g, b), stroke);
    }

    // Offener Entwurf als halbtransparenter Punkt an der Zielposition
    if let Some(draft) = &state.ui.draft {
        let screen = state.view.camera.geo_to_screen(draft.position, viewport);
        let pos = rect.min + egui::vec2(screen.x, screen.y);
        let [r, g, b] = category_color(draft.category.as_str());
        painter.circle(
            pos,
            radius,
            egui::Color32::from_rgba_unmultiplied(r, g, b, 160),
            stroke,
        );
    }
}

fn collect_gestures(
    ui: &egui::Ui,
    response: &egui::Response,
    rect: egui::Rect,
    state: &AppState,
    events: &mut Vec<AppIntent>,
) {
    let viewport = [rect.width(), rect.height()];

    if response.dragged() {
        let delta = response.drag_delta();
        if delta != egui::Vec2::ZERO {
            // Karte folgt dem Cursor, also invertiertes Delta
            events.push(AppIntent::CameraPanned {
                delta_px: Vec2::new(-delta.x, -delta.y),
            });
        }
    }

    if response.hovered() {
        let scroll = ui.input(|i| i.raw_scroll_delta.y);
        if scroll.abs() > 0.5 {
            let steps = if scroll > 0.0 { 1 } else { -1 };
            let focus = response
                .hover_pos()
                .map(|p| Vec2::new(p.x - rect.min.x, p.y - rect.min.y));
            events.push(AppIntent::CameraZoomed {
                steps,
                focus_px: focus,
            });
        }
    }

    if response.double_clicked() {
        if let Some(pos) = response.interact_pointer_pos() {
            let screen = Vec2::new(pos.x - rect.min.x, pos.y - rect.min.y);
            let position = state.view.camera.screen_to_geo(screen, viewport);
            events.push(AppIntent::MapDoubleClicked { position });
        }
    } else if response.clicked() {
        if let Some(pos) = response.interact_pointer_pos() {
            let screen = Vec2::new(pos.x - rect.min.x, pos.y - rect.min.y);
            events.extend(pick_marker(state, screen, viewport));
        }
    }
}

/// Trefferprüfung für Klicks: nächster Marker innerhalb des Pick-Radius.
fn pick_marker(state: &AppState, screen: Vec2, viewport: [f32; 2]) -> Option<AppIntent> {
    let mut best: Option<(f32, AppIntent)> = None;

    for (index, marker) in state.data.markers.iter().enumerate() {
        let pos = state.view.camera.geo_to_screen(marker.position, viewport);
        let dist = (pos - screen).length();
        if dist <= MARKER_PICK_RADIUS_PX && best.as_ref().is_none_or(|(d, _)| dist < *d) {
            best = Some((dist, AppIntent::MarkerClicked { index }));
        }
    }

    if let Some(result) = &state.view.search_result {
        let pos = state.view.camera.geo_to_screen(result.position, viewport);
        let dist = (pos - screen).length();
        if dist <= MARKER_PICK_RADIUS_PX && best.as_ref().is_none_or(|(d, _)| dist < *d) {
            best = Some((dist, AppIntent::SearchMarkerClicked));
        }
    }

    best.map(|(_, intent)| intent)
}
