//! Import-Dialog: Formular für Layer-Name, Zoom und Detektor-Parameter.

use crate::app::{AppIntent, ImportDialogState};
use crate::core::ImportMode;

/// Zeigt den Import-Dialog als modales Fenster.
pub fn show_import_dialog(
    ctx: &egui::Context,
    dialog: &mut ImportDialogState,
    mode: ImportMode,
) -> Vec<AppIntent> {
    let mut events = Vec::new();

    if !dialog.visible {
        return events;
    }

    let mut confirmed = false;
    let mut cancelled = false;

    egui::Window::new("Import Map")
        .collapsible(false)
        .resizable(false)
        .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
        .show(ctx, |ui| {
            ui.set_min_width(320.0);

            ui.horizontal(|ui| {
                ui.label("Layer Name:");
                ui.text_edit_singleline(&mut dialog.layer_name);
            });
            if !dialog.is_name_valid() {
                ui.label(
                    egui::RichText::new("This field is required (max. 50 characters)")
                        .color(egui::Color32::LIGHT_RED)
                        .small(),
                );
            }

            ui.add_space(4.0);

            ui.horizontal(|ui| {
                ui.label("Zoom Level:");
                ui.add(egui::DragValue::new(&mut dialog.zoom_level).range(1..=21));
            });

            ui.horizontal(|ui| {
                ui.label("Threshold:");
                ui.add(egui::DragValue::new(&mut dialog.threshold).range(0..=255));
            });

            // Lade-Distanz gibt es nur für Polyline-Profile
            if mode == ImportMode::Polyline {
                ui.horizontal(|ui| {
                    ui.label("Load Distance (m):");
                    ui.add(
                        egui::DragValue::new(&mut dialog.load_distance_m)
                            .range(20.0..=10_000.0)
                            .speed(5.0),
                    );
                });
            }

            ui.checkbox(&mut dialog.nonmax_suppression, "Non-maximum suppression");

            ui.add_space(4.0);
            ui.horizontal(|ui| {
                ui.label("Description:");
                ui.text_edit_singleline(&mut dialog.description);
            });

            ui.add_space(10.0);

            ui.horizontal(|ui| {
                ui.add_enabled_ui(dialog.is_name_valid(), |ui| {
                    if ui.button("Import").clicked() {
                        confirmed = true;
                    }
                });

                if ui.button("Discard").clicked() {
                    cancelled = true;
                }
            });
        });

    if confirmed {
        events.push(AppIntent::ImportSubmitted {
            form: dialog.to_form(),
        });
    } else if cancelled {
        events.push(AppIntent::ImportDialogCancelled);
    }

    events
}
