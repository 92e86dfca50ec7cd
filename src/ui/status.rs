//! Status-Bar am unteren Bildschirmrand und Benachrichtigungs-Toast.

use crate::app::{AppIntent, AppState, Severity};
use crate::core::ImportMode;

/// Rendert die Status-Bar
pub fn render_status_bar(ctx: &egui::Context, state: &AppState) {
    egui::TopBottomPanel::bottom("status_bar").show(ctx, |ui| {
        ui.horizontal(|ui| {
            let mode_name = match state.workflow.mode {
                ImportMode::Rectangle => "Rectangle",
                ImportMode::Polyline => "Polyline",
            };
            ui.label(format!("Mode: {}", mode_name));

            ui.separator();
            ui.label(format!("Points: {}", state.point_count()));

            ui.separator();
            ui.label(format!(
                "Zoom: {} | Center: ({:.4}, {:.4})",
                state.view.zoom, state.view.center.latitude, state.view.center.longitude
            ));

            if state.workflow.readonly {
                ui.separator();
                let label = match state.workflow.layer_id {
                    Some(id) => format!("Read-only: Layer {}", id),
                    None => "Read-only".to_string(),
                };
                ui.label(egui::RichText::new(label).color(egui::Color32::YELLOW));
            }

            // Laufende Anfragen (rechts)
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                let pending = state.net.pending().len();
                if pending > 0 {
                    ui.label(format!("Requests: {}", pending));
                }
            });
        });
    });
}

/// Zeigt die aktuelle Benachrichtigung oben rechts, mit Schließen-Knopf.
pub fn show_notification(ctx: &egui::Context, state: &AppState) -> Vec<AppIntent> {
    let mut events = Vec::new();

    let Some(notification) = &state.ui.notification else {
        return events;
    };

    let (fill, text_color) = match notification.severity {
        Severity::Info => (egui::Color32::from_rgb(40, 70, 120), egui::Color32::WHITE),
        Severity::Success => (egui::Color32::from_rgb(30, 100, 50), egui::Color32::WHITE),
        Severity::Error => (egui::Color32::from_rgb(120, 30, 30), egui::Color32::WHITE),
    };

    egui::Area::new(egui::Id::new("notification_toast"))
        .anchor(egui::Align2::RIGHT_TOP, [-12.0, 40.0])
        .show(ctx, |ui| {
            egui::Frame::window(ui.style()).fill(fill).show(ui, |ui| {
                ui.horizontal(|ui| {
                    ui.label(
                        egui::RichText::new(&notification.message)
                            .color(text_color)
                            .strong(),
                    );
                    if ui.small_button("✕").clicked() {
                        events.push(AppIntent::NotificationDismissed);
                    }
                });
            });
        });

    events
}
