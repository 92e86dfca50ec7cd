//! Seiten-Panel mit den Import-Einstellungen.
//!
//! Sichtbarkeit der Aktionen folgt dem Workflow-Zustand: Preview ab zwei
//! Punkten, Clear ab einem, Optimize nur für Polylines, Import ab der
//! Mindest-Kardinalität. In der Read-only-Ansicht sind alle Mutationen
//! ausgeblendet.

use crate::app::{AppIntent, AppState};
use crate::core::ImportMode;

/// Rendert das Import-Einstellungen-Panel und gibt erzeugte Events zurück.
pub fn render_mode_panel(ctx: &egui::Context, state: &AppState) -> Vec<AppIntent> {
    let mut events = Vec::new();

    egui::SidePanel::right("import_settings")
        .resizable(false)
        .default_width(260.0)
        .show(ctx, |ui| {
            ui.add_space(8.0);
            ui.heading("Import Settings");
            ui.separator();

            let editable = state.workflow.is_editable();
            let point_count = state.point_count();

            // ── Modus-Auswahl ───────────────────────────────────
            ui.add_enabled_ui(editable, |ui| {
                let mut selected = state.workflow.mode;
                egui::ComboBox::from_label("Import Mode")
                    .selected_text(mode_label(selected))
                    .show_ui(ui, |ui| {
                        ui.selectable_value(
                            &mut selected,
                            ImportMode::Rectangle,
                            mode_label(ImportMode::Rectangle),
                        );
                        ui.selectable_value(
                            &mut selected,
                            ImportMode::Polyline,
                            mode_label(ImportMode::Polyline),
                        );
                    });
                if selected != state.workflow.mode {
                    events.push(AppIntent::ImportModeChanged { mode: selected });
                }
            });

            ui.add_space(6.0);
            ui.label(format!("Zoom: {}", state.view.zoom));

            // ── Zuletzt eingefügte Koordinate ───────────────────
            if editable {
                ui.add_space(6.0);
                match state.workflow.last_coordinate {
                    Some(c) => {
                        ui.label(format!("Latitude: {:.6}", c.latitude));
                        ui.label(format!("Longitude: {:.6}", c.longitude));
                    }
                    None => {
                        ui.label("Latitude: –");
                        ui.label("Longitude: –");
                    }
                }
                ui.add_space(2.0);
                ui.label(format!("Points: {}", point_count));
            }

            ui.add_space(10.0);
            ui.separator();

            // ── Aktionen ────────────────────────────────────────
            if editable {
                if point_count > 1 && ui.button("Preview").clicked() {
                    events.push(AppIntent::PreviewRequested);
                }

                if point_count > 0 && ui.button("Clear coordinates").clicked() {
                    events.push(AppIntent::ClearCoordinatesRequested);
                }

                if point_count > 1
                    && state.workflow.mode == ImportMode::Polyline
                    && ui.button("Optimize").clicked()
                {
                    events.push(AppIntent::OptimizeRequested);
                }

                if state.workflow.can_import() {
                    ui.add_space(6.0);
                    if ui.button("Import").clicked() {
                        events.push(AppIntent::ImportDialogRequested);
                    }
                }
            } else {
                if let Some(layer_id) = state.workflow.layer_id {
                    ui.label(format!("Viewing imported layer #{layer_id}"));
                    ui.label(format!(
                        "Tiles: {}",
                        state.overlays.tiles().len()
                    ));
                }
                ui.add_space(6.0);
                if ui.button("New Import").clicked() {
                    events.push(AppIntent::BackToEditRequested);
                }
            }
        });

    events
}

fn mode_label(mode: ImportMode) -> &'static str {
    match mode {
        ImportMode::Rectangle => "Rectangle",
        ImportMode::Polyline => "Polyline",
    }
}
