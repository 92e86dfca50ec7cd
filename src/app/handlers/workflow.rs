//! Handler für den Import-Workflow: Punkte sammeln, Modus, Read-only.

use crate::app::AppState;
use crate::core::{collector, Coordinate, ImportMode};

/// Fügt eine Koordinate (Karten-Klick oder getippte Eingabe) hinzu.
///
/// In der Read-only-Ansicht ein No-op. Duplikate und überzählige
/// Rechteck-Punkte weist der Collector still ab.
pub fn add_coordinate(state: &mut AppState, coordinate: Coordinate) {
    if !state.workflow.is_editable() {
        return;
    }

    let next = collector::add(coordinate, state.workflow.mode, &state.workflow.points);
    if next.len() > state.workflow.points.len() {
        state.workflow.last_coordinate = Some(coordinate);
        state.workflow.points = next;
    }
}

/// Wechselt den Import-Modus.
///
/// Leert Punkte, letzte Koordinate und Vorschau-Overlays — auch beim
/// Wechsel auf den bereits aktiven Modus (Clear-on-change-Vertrag).
/// Ausstehende Optimierungen werden entwertet.
pub fn set_mode(state: &mut AppState, mode: ImportMode) {
    if !state.workflow.is_editable() {
        return;
    }

    state.workflow.mode = mode;
    state.workflow.points.clear();
    state.workflow.last_coordinate = None;
    state.workflow.invalidate_optimizations();
    state.overlays.clear_previews();
}

/// Verwirft alle gesammelten Punkte und die Vorschau-Overlays.
pub fn clear_coordinates(state: &mut AppState) {
    if !state.workflow.is_editable() {
        return;
    }

    state.workflow.points.clear();
    state.workflow.last_coordinate = None;
    state.workflow.invalidate_optimizations();
    state.overlays.clear_previews();
}

/// Wechselt in die Read-only-Ansicht eines importierten Layers.
///
/// Workflow, Overlays und Viewport werden auf den Standardzustand
/// zurückgesetzt; die Kacheln kommen anschließend per `ApplyLayerDetails`.
pub fn enter_readonly_view(state: &mut AppState, layer_id: i64) {
    state.workflow.reset();
    state.workflow.readonly = true;
    state.workflow.layer_id = Some(layer_id);
    state.overlays.clear_all();
    state.view.reset();
    log::info!("Read-only-Ansicht für Layer {} geöffnet", layer_id);
}

/// Verlässt die Read-only-Ansicht und kehrt zum leeren Editor zurück.
pub fn leave_readonly_view(state: &mut AppState) {
    state.workflow.reset();
    state.overlays.clear_all();
    state.view.reset();
}
