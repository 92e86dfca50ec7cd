//! Handler für Kamera und Viewport der Kartenansicht.

use crate::app::AppState;
use crate::core::mercator;
use crate::core::Coordinate;

/// Verschiebt das Karten-Zentrum um ein Drag-Delta in Pixeln.
/// Drag nach rechts schiebt den Karteninhalt nach rechts, das Zentrum
/// wandert also entgegengesetzt.
pub fn pan(state: &mut AppState, delta_px: [f32; 2]) {
    state.view.center = mercator::offset_center(
        state.view.center,
        state.view.zoom,
        -delta_px[0] as f64,
        -delta_px[1] as f64,
    );
}

/// Zoomt stufenweise, geklemmt auf den gültigen Bereich.
pub fn zoom_step(state: &mut AppState, delta: i8) {
    let next = state.view.zoom as i16 + delta as i16;
    state.view.zoom = next.clamp(mercator::MIN_ZOOM as i16, mercator::MAX_ZOOM as i16) as u8;
}

/// Aktualisiert die Viewport-Größe im State.
pub fn set_viewport_size(state: &mut AppState, size: [f32; 2]) {
    state.view.viewport_size = size;
}

/// Springt auf ein Zentrum mit fester Zoom-Stufe (Koordinaten-Suche,
/// Layer-Detailansicht).
pub fn jump(state: &mut AppState, center: Coordinate, zoom: u8) {
    state.view.center = center;
    state.view.zoom = zoom.clamp(mercator::MIN_ZOOM, mercator::MAX_ZOOM);
}
