//! Top-Menü mit Seiten-Navigation.

use crate::app::{ActivePage, AppIntent, AppState};

/// Rendert die Menü-Leiste
pub fn render_menu(ctx: &egui::Context, state: &AppState) -> Vec<AppIntent> {
    let mut events = Vec::new();

    egui::TopBottomPanel::top("menu_bar").show(ctx, |ui| {
        egui::MenuBar::new().ui(ui, |ui| {
            ui.menu_button("File", |ui| {
                if ui.button("Exit").clicked() {
                    events.push(AppIntent::ExitRequested);
                    ui.close();
                }
            });

            ui.separator();

            let on_map = state.ui.page == ActivePage::Map;
            if ui.selectable_label(on_map, "Map").clicked() && !on_map {
                events.push(AppIntent::MapPageRequested);
            }

            let on_layers = state.ui.page == ActivePage::Layers;
            if ui.selectable_label(on_layers, "Map Layers").clicked() && !on_layers {
                events.push(AppIntent::LayersPageRequested);
            }
        });
    });

    events
}
