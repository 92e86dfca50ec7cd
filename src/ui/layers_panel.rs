//! Tabelle der importierten Layer mit View/Delete-Aktionen.

use egui_extras::{Column, TableBuilder};

use crate::app::{AppIntent, AppState};

/// Rendert die Layer-Tabellen-Seite und gibt erzeugte Events zurück.
pub fn render_layers_panel(ctx: &egui::Context, state: &AppState) -> Vec<AppIntent> {
    let mut events = Vec::new();

    egui::CentralPanel::default().show(ctx, |ui| {
        ui.add_space(4.0);
        ui.horizontal(|ui| {
            ui.heading("Imported Maps");
            if ui.button("⟳ Refresh").clicked() {
                events.push(AppIntent::RefreshLayersRequested);
            }
        });
        ui.separator();

        if state.ui.layer_rows.is_empty() {
            ui.label("No imported map layers.");
            return;
        }

        TableBuilder::new(ui)
            .striped(true)
            .column(Column::remainder().at_least(160.0))
            .column(Column::auto().at_least(120.0))
            .column(Column::auto().at_least(160.0))
            .header(24.0, |mut header| {
                header.col(|ui| {
                    ui.strong("Name");
                });
                header.col(|ui| {
                    ui.strong("Import Type");
                });
                header.col(|ui| {
                    ui.strong("Actions");
                });
            })
            .body(|mut body| {
                for layer in &state.ui.layer_rows {
                    body.row(28.0, |mut row| {
                        row.col(|ui| {
                            ui.label(&layer.name);
                        });
                        row.col(|ui| {
                            ui.label(layer.import_type.as_type_label());
                        });
                        row.col(|ui| {
                            if ui.button("View").clicked() {
                                events.push(AppIntent::ViewLayerRequested {
                                    layer_id: layer.id,
                                });
                            }
                            if ui.button("Delete").clicked() {
                                events.push(AppIntent::DeleteLayerRequested {
                                    layer_id: layer.id,
                                });
                            }
                        });
                    });
                }
            });
    });

    events
}
