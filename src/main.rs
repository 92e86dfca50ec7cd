//! Map-Import-Editor.
//!
//! Desktop-Client für den Map-Storage-Hub: Capture-Regionen als Rechteck
//! oder Polyline definieren, Wegpunkte per Ant-Colony-Service optimieren,
//! Layer importieren und importierte Layer read-only betrachten.

use std::time::Duration;

use map_import_editor::{
    net, ui, ActivePage, AppController, AppIntent, AppState, EditorOptions, Gateway, HubClient,
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

        log::info!(
            "Map-Import-Editor v{} startet...",
            env!("CARGO_PKG_VERSION")
        );

        let options = eframe::NativeOptions {
            viewport: egui::ViewportBuilder::default()
                .with_inner_size([1280.0, 720.0])
                .with_title("Map-Import-Editor"),
            ..Default::default()
        };

        eframe::run_native(
            "Map-Import-Editor",
            options,
            Box::new(|_cc| Ok(Box::new(EditorApp::new()))),
        )
    }
}

/// Haupt-Anwendungsstruktur
struct EditorApp {
    state: AppState,
    controller: AppController,
    gateway: Gateway,
    tiles: net::TileStore,
    /// Anzahl der Gateway-Anfragen, deren Abschluss noch aussteht
    inflight: usize,
}

impl EditorApp {
    fn new() -> Self {
        // Optionen aus TOML laden (oder Standardwerte)
        let config_path = EditorOptions::config_path();
        let editor_options = EditorOptions::load_from_file(&config_path);

        let gateway = Gateway::new(HubClient::new(editor_options.hub_base_url.clone()));
        let tiles = net::TileStore::new(editor_options.tile_url_template.clone());

        let mut state = AppState::new();
        state.options = editor_options;

        Self {
            state,
            controller: AppController::new(),
            gateway,
            tiles,
            inflight: 0,
        }
    }
}

impl eframe::App for EditorApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if self.state.should_exit {
            ctx.send_viewport_cmd(egui::ViewportCommand::Close);
            return;
        }

        let tiles_arrived = self.tiles.drain_ready(ctx);

        let events = self.collect_events(ctx);

        let has_meaningful_events = events
            .iter()
            .any(|e| !matches!(e, AppIntent::ViewportResized { .. }));

        self.process_events(events);

        self.dispatch_pending_requests();

        self.maybe_request_repaint(ctx, has_meaningful_events || tiles_arrived);
    }
}

impl EditorApp {
    fn collect_events(&mut self, ctx: &egui::Context) -> Vec<AppIntent> {
        let mut events = Vec::new();

        // Gateway-Abschlüsse zuerst, damit sie im selben Frame wirken
        for event in self.gateway.poll() {
            self.inflight = self.inflight.saturating_sub(1);
            events.push(event.into_intent());
        }

        events.extend(ui::render_menu(ctx, &self.state));
        events.extend(ui::show_notification(ctx, &self.state));

        match self.state.ui.page {
            ActivePage::Map => {
                events.extend(ui::render_mode_panel(ctx, &self.state));
                ui::render_status_bar(ctx, &self.state);

                let mut map_events = Vec::new();
                {
                    let state = &self.state;
                    let tiles = &mut self.tiles;
                    egui::CentralPanel::default()
                        .frame(egui::Frame::NONE)
                        .show(ctx, |ui| {
                            map_events.extend(ui::render_map_panel(ui, state, tiles));
                        });
                }
                events.extend(map_events);

                if self.state.workflow.is_editable() {
                    events.extend(ui::render_coordinate_input(ctx, &mut self.state));
                }

                let mode = self.state.workflow.mode;
                events.extend(ui::show_import_dialog(
                    ctx,
                    &mut self.state.ui.import_dialog,
                    mode,
                ));
            }
            ActivePage::Layers => {
                ui::render_status_bar(ctx, &self.state);
                events.extend(ui::render_layers_panel(ctx, &self.state));
            }
        }

        events
    }

    fn process_events(&mut self, events: Vec<AppIntent>) {
        for event in events {
            if let Err(e) = self.controller.handle_intent(&mut self.state, event) {
                log::error!("Event handling failed: {:#}", e);
            }
        }
    }

    fn dispatch_pending_requests(&mut self) {
        for request in self.state.net.drain() {
            self.inflight += 1;
            self.gateway.dispatch(request);
        }
    }

    fn maybe_request_repaint(&self, ctx: &egui::Context, has_meaningful_events: bool) {
        if has_meaningful_events || ctx.input(|i| i.pointer.is_moving()) {
            ctx.request_repaint();
        }

        // Solange Antworten oder Kacheln ausstehen, regelmäßig nachsehen
        if self.inflight > 0 || self.tiles.has_pending() {
            ctx.request_repaint_after(Duration::from_millis(100));
        }
    }
}
