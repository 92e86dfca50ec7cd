//! View-bezogener Anwendungszustand: Karten-Zentrum, Zoom, Viewport.

use crate::core::Coordinate;
use crate::shared::options::{DEFAULT_CENTER_LAT, DEFAULT_CENTER_LNG, DEFAULT_ZOOM};

/// Zustand der Kartenansicht.
pub struct ViewState {
    /// Aktuelles Karten-Zentrum
    pub center: Coordinate,
    /// Aktuelle Zoom-Stufe (Slippy-Map-Schema)
    pub zoom: u8,
    /// Aktuelle Viewport-Größe in Pixel
    pub viewport_size: [f32; 2],
}

impl ViewState {
    /// Erstellt den Standard-View-Zustand.
    pub fn new() -> Self {
        Self {
            center: Coordinate::new(DEFAULT_CENTER_LAT, DEFAULT_CENTER_LNG),
            zoom: DEFAULT_ZOOM,
            viewport_size: [0.0, 0.0],
        }
    }

    /// Setzt Zentrum und Zoom auf die Standardwerte zurück.
    /// Die Viewport-Größe bleibt erhalten, sie gehört dem Host.
    pub fn reset(&mut self) {
        self.center = Coordinate::new(DEFAULT_CENTER_LAT, DEFAULT_CENTER_LNG);
        self.zoom = DEFAULT_ZOOM;
    }
}

impl Default for ViewState {
    fn default() -> Self {
        Self::new()
    }
}
