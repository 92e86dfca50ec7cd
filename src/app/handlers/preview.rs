//! Handler für die Vorschau-Overlays.
//!
//! Beide Funktionen sind idempotent: die Install-Operation ersetzt das
//! vorherige Overlay derselben Art; bei unzureichender Punktanzahl
//! passiert nichts.

use crate::app::state::{PolylineOverlay, RectangleOverlay};
use crate::app::AppState;
use crate::core::preview;

/// Zeichnet die Rechteck-Vorschau aus den ersten beiden Punkten.
pub fn show_rectangle(state: &mut AppState) {
    if let Some(bounds) = preview::rectangle_preview(&state.workflow.points) {
        state.overlays.install_rectangle(RectangleOverlay { bounds });
    }
}

/// Zeichnet die Polyline-Vorschau durch alle Punkte.
pub fn show_polyline(state: &mut AppState) {
    if let Some(path) = preview::polyline_preview(&state.workflow.points) {
        state.overlays.install_polyline(PolylineOverlay { path });
    }
}
