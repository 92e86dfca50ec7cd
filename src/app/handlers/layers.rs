//! Handler für Layer-Liste und Read-only-Kachelansicht.

use crate::app::state::{PendingRequest, TileOverlay};
use crate::app::{AppState, Severity};
use crate::core::{aggregate_center, LayerDetail, LayerSummary};

/// Fordert die Layer-Liste an.
pub fn request_list(state: &mut AppState) {
    state.net.enqueue(PendingRequest::ListLayers);
}

/// Übernimmt die geladene Layer-Liste in die Tabelle.
pub fn apply_list(state: &mut AppState, layers: Vec<LayerSummary>) {
    state.ui.layer_rows = layers;
}

/// Fehler beim Laden der Liste: nur Log, keine Nutzer-Meldung.
pub fn list_failed(_state: &mut AppState, error: &str) {
    log::warn!("Layer-Liste konnte nicht geladen werden: {}", error);
}

/// Fordert die Details eines Layers an.
pub fn request_details(state: &mut AppState, layer_id: i64) {
    state.net.enqueue(PendingRequest::LayerDetails { layer_id });
}

/// Rendert die Kacheln eines geladenen Layers read-only.
///
/// Ersetzt alle vorherigen Kachel-Overlays, übernimmt den gespeicherten
/// Profil-Typ als Modus und springt auf das aggregierte Kachel-Zentrum
/// in der Detail-Zoom-Stufe.
pub fn apply_details(state: &mut AppState, detail: LayerDetail) {
    let overlays = detail
        .tiles
        .iter()
        .map(|tile| TileOverlay {
            bounds: tile.bounds,
            center: tile.center,
        })
        .collect();
    state.overlays.install_tiles(overlays);

    state.workflow.mode = detail.import_type;

    // Leerer Layer: Viewport bleibt auf dem Standard stehen.
    if let Some(center) = aggregate_center(&detail.tiles) {
        state.view.center = center;
        state.view.zoom = state.options.detail_zoom;
    }

    log::info!(
        "Layer {} mit {} Kacheln geladen",
        detail.id,
        detail.tiles.len()
    );
}

/// Fehler beim Laden der Layer-Details.
pub fn details_failed(state: &mut AppState, error: &str) {
    log::error!("Layer-Details konnten nicht geladen werden: {}", error);
    state.notify(Severity::Error, "Error fetching map layer tiles!");
}

/// Fordert das Löschen eines Layers an.
pub fn request_delete(state: &mut AppState, layer_id: i64) {
    state.net.enqueue(PendingRequest::DeleteLayer { layer_id });
}

/// Meldet das erfolgreiche Löschen; die Liste wird separat neu geladen.
pub fn delete_finished(state: &mut AppState, layer_id: i64) {
    log::info!("Layer {} gelöscht", layer_id);
    state.notify(Severity::Success, "Map Layer was deleted successfully!");
}

/// Meldet ein fehlgeschlagenes Löschen.
pub fn delete_failed(state: &mut AppState, error: &str) {
    log::error!("Layer konnte nicht gelöscht werden: {}", error);
    state.notify(Severity::Error, "Error deleting Map Layer!");
}
