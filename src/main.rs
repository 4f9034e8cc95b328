//! Peruvian Waze.
//!
//! Desktop-Kartenclient für die Región de Coquimbo: Adresssuche,
//! Routenberechnung und crowd-gemeldete Punkte auf einer Slippy-Map.

use std::sync::mpsc::Receiver;
use std::sync::Arc;

use eframe::egui;
use peruvian_waze::net::tiles::TileCache;
use peruvian_waze::{
    ui, AppConfig, AppController, AppIntent, AppOptions, AppState, ConfigError, GeoStore,
    GoogleResolver, NetBridge, NetEvent,
};

fn main() -> Result<(), eframe::Error> {
    AppRunner::run()
}

struct AppRunner;

impl AppRunner {
    fn run() -> Result<(), eframe::Error> {
        // Logger initialisieren
        env_logger::Builder::from_default_env()
            .filter_level(log::LevelFilter::Info)
            .init();

        log::info!("Peruvian Waze v{} startet...", env!("CARGO_PKG_VERSION"));

        let options = eframe::NativeOptions {
            viewport: egui::ViewportBuilder::default()
                .with_inner_size([1280.0, 720.0])
                .with_title("Peruvian Waze"),
            ..Default::default()
        };

        match AppConfig::from_env() {
            Ok(config) => eframe::run_native(
                "Peruvian Waze",
                options,
                Box::new(move |_cc| Ok(Box::new(MapApp::new(config)))),
            ),
            Err(e) => {
                log::error!("Konfiguration unvollständig: {e}");
                eframe::run_native(
                    "Peruvian Waze",
                    options,
                    Box::new(move |_cc| Ok(Box::new(ConfigErrorApp { error: e }))),
                )
            }
        }
    }
}

/// Haupt-Anwendungsstruktur
struct MapApp {
    state: AppState,
    controller: AppController,
    bridge: NetBridge,
    net_rx: Receiver<NetEvent>,
    tiles: TileCache,
    textures: ui::BasemapTextures,
    started: bool,
}

impl MapApp {
    fn new(config: AppConfig) -> Self {
        // Optionen aus TOML laden (oder Standardwerte)
        let config_path = AppOptions::config_path();
        let app_options = AppOptions::load_from_file(&config_path);

        let mut state = AppState::new();
        state.options = app_options;

        let client = reqwest::blocking::Client::new();
        let resolver = Arc::new(GoogleResolver::new(client.clone(), config.maps_api_key));
        let store = Arc::new(GeoStore::new(client.clone(), config.backend_url));
        let (bridge, net_rx) = NetBridge::new(resolver, store);
        let tiles = TileCache::new(client, config.tile_url);

        Self {
            state,
            controller: AppController::new(),
            bridge,
            net_rx,
            tiles,
            textures: ui::BasemapTextures::new(),
            started: false,
        }
    }
}

impl eframe::App for MapApp {
    fn on_exit(&mut self, _gl: Option<&eframe::glow::Context>) {
        let path = AppOptions::config_path();
        if let Err(e) = self.state.options.save_to_file(&path) {
            log::warn!("Optionen nicht gespeichert: {e}");
        }
    }

    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if self.state.should_exit {
            ctx.send_viewport_cmd(egui::ViewportCommand::Close);
            return;
        }

        let mut events = self.collect_net_events();
        if !self.started {
            self.started = true;
            events.push(AppIntent::StartupRequested);
        }

        events.extend(self.collect_ui_events(ctx));

        let has_meaningful_events = events
            .iter()
            .any(|e| !matches!(e, AppIntent::ViewportResized { .. }));

        self.process_events(events);
        self.dispatch_pending_requests();

        let tiles_changed = self.tiles.poll();
        self.maybe_request_repaint(ctx, has_meaningful_events || tiles_changed);
    }
}

impl MapApp {
    /// Drained fertige Netzwerk-Ergebnisse und übersetzt sie in Intents.
    fn collect_net_events(&mut self) -> Vec<AppIntent> {
        let mut events = Vec::new();
        while let Ok(event) = self.net_rx.try_recv() {
            events.push(match event {
                NetEvent::LocateDone { seq, result } => AppIntent::LocateResolved { seq, result },
                NetEvent::GeocodeDone { seq, result } => AppIntent::GeocodeResolved { seq, result },
                NetEvent::DirectionsDone { seq, result } => {
                    AppIntent::DirectionsResolved { seq, result }
                }
                NetEvent::SuggestDone { seq, field, result } => {
                    AppIntent::SuggestionsResolved { seq, field, result }
                }
                NetEvent::ListDone { seq, result } => AppIntent::MarkersListed { seq, result },
                NetEvent::CreateDone { seq, result } => AppIntent::MarkerCreated { seq, result },
            });
        }
        events
    }

    fn collect_ui_events(&mut self, ctx: &egui::Context) -> Vec<AppIntent> {
        let mut events = Vec::new();

        events.extend(ui::render_banner(ctx, &self.state));
        ui::render_status_bar(ctx, &self.state);
        events.extend(ui::render_sidebar(ctx, &mut self.state));
        events.extend(ui::show_marker_dialog(ctx, &mut self.state));
        events.extend(ui::render_map_panel(
            ctx,
            &self.state,
            &mut self.tiles,
            &mut self.textures,
        ));

        events
    }

    fn process_events(&mut self, events: Vec<AppIntent>) {
        for event in events {
            if let Err(e) = self.controller.handle_intent(&mut self.state, event) {
                let tail: Vec<_> = self.state.command_log.recent(5).collect();
                log::error!("Event handling failed: {:#} (letzte Commands: {:?})", e, tail);
            }
        }
    }

    /// Reicht von Handlern ausgegebene Requests an die Bridge weiter.
    fn dispatch_pending_requests(&mut self) {
        for request in self.state.session.take_requests() {
            self.bridge.dispatch(request);
        }
    }

    fn maybe_request_repaint(&self, ctx: &egui::Context, has_meaningful_events: bool) {
        if has_meaningful_events
            || ctx.input(|i| i.pointer.is_moving())
            || self.state.ui.draft.is_some()
            || self.state.ui.resolving
            || self.state.ui.locating
            || self.state.data.fetching
        {
            ctx.request_repaint();
        }
    }
}

/// Fehlerbildschirm, wenn die Startkonfiguration fehlt.
/// Es gibt keinen degradierten Modus: nur Meldung und Beenden.
struct ConfigErrorApp {
    error: ConfigError,
}

impl eframe::App for ConfigErrorApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::CentralPanel::default().show(ctx, |ui| {
            ui.vertical_centered(|ui| {
                ui.add_space(120.0);
                ui.heading("Peruvian Waze no puede iniciar");
                ui.add_space(12.0);
                ui.label(self.error.to_string());
                ui.add_space(12.0);
                ui.label("Configure las variables de entorno y vuelva a iniciar.");
                ui.add_space(20.0);
                if ui.button("Cerrar").clicked() {
                    ctx.send_viewport_cmd(egui::ViewportCommand::Close);
                }
            });
        });
    }
}
