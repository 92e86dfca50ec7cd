//! Schwebendes Koordinaten-Eingabefeld über der Karte.
//!
//! Suchen springt den Viewport an, Einfügen übernimmt die Koordinate als
//! Punkt. Beide Aktionen sind nur aktiv, wenn die Eingabe dem
//! Koordinaten-Format entspricht.

use crate::app::{AppIntent, AppState};
use crate::core::parse_typed;

/// Rendert das Eingabefeld und gibt erzeugte Events zurück.
pub fn render_coordinate_input(ctx: &egui::Context, state: &mut AppState) -> Vec<AppIntent> {
    let mut events = Vec::new();

    egui::Area::new(egui::Id::new("coordinate_input"))
        .anchor(egui::Align2::CENTER_TOP, [0.0, 12.0])
        .show(ctx, |ui| {
            egui::Frame::window(ui.style()).show(ui, |ui| {
                ui.horizontal(|ui| {
                    ui.add(
                        egui::TextEdit::singleline(&mut state.ui.coordinate_input)
                            .hint_text("Enter coordinates...")
                            .desired_width(220.0),
                    );

                    let parsed = parse_typed(&state.ui.coordinate_input);
                    let enabled = parsed.is_some();

                    if ui
                        .add_enabled(enabled, egui::Button::new("🔍"))
                        .on_hover_text("Jump to coordinates")
                        .clicked()
                    {
                        if let Some(coordinate) = parsed {
                            events.push(AppIntent::TypedCoordinateSearched { coordinate });
                        }
                    }

                    if ui
                        .add_enabled(enabled, egui::Button::new("＋"))
                        .on_hover_text("Insert as point")
                        .clicked()
                    {
                        if let Some(coordinate) = parsed {
                            events.push(AppIntent::TypedCoordinateInserted { coordinate });
                        }
                    }
                });
            });
        });

    events
}
