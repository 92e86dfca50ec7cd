//! Exklusiv besessene Overlay-Handles der Kartenfläche.
//!
//! Jede Install-Operation verwirft das vorherige Handle derselben Art,
//! bevor das neue eingesetzt wird. Die Kartenfläche zeichnet ausschließlich,
//! was hier liegt — verwaiste oder doppelte Grafiken sind damit
//! ausgeschlossen.

use crate::core::{Coordinate, GeoBounds, PolylinePath};

/// Rechteck-Vorschau-Overlay.
#[derive(Debug, Clone, PartialEq)]
pub struct RectangleOverlay {
    pub bounds: GeoBounds,
}

/// Polyline-Vorschau-Overlay mit Pfadlänge für die Hover-Anzeige.
#[derive(Debug, Clone, PartialEq)]
pub struct PolylineOverlay {
    pub path: PolylinePath,
}

/// Kachel-Overlay eines importierten Layers.
#[derive(Debug, Clone, PartialEq)]
pub struct TileOverlay {
    pub bounds: GeoBounds,
    pub center: Coordinate,
}

/// Besitzt alle aktiven Overlay-Handles.
#[derive(Default)]
pub struct OverlayState {
    rectangle: Option<RectangleOverlay>,
    polyline: Option<PolylineOverlay>,
    tiles: Vec<TileOverlay>,
}

impl OverlayState {
    /// Erstellt einen leeren Overlay-Zustand.
    pub fn new() -> Self {
        Self::default()
    }

    /// Ersetzt das Rechteck-Overlay; das vorherige Handle wird verworfen.
    pub fn install_rectangle(&mut self, overlay: RectangleOverlay) {
        drop(self.rectangle.take());
        self.rectangle = Some(overlay);
    }

    /// Ersetzt das Polyline-Overlay; das vorherige Handle wird verworfen.
    pub fn install_polyline(&mut self, overlay: PolylineOverlay) {
        drop(self.polyline.take());
        self.polyline = Some(overlay);
    }

    /// Ersetzt die Kachel-Overlays; alle vorherigen Handles werden verworfen.
    pub fn install_tiles(&mut self, tiles: Vec<TileOverlay>) {
        self.tiles.clear();
        self.tiles = tiles;
    }

    /// Entfernt Rechteck- und Polyline-Vorschau.
    pub fn clear_previews(&mut self) {
        self.rectangle = None;
        self.polyline = None;
    }

    /// Entfernt sämtliche Overlays.
    pub fn clear_all(&mut self) {
        self.clear_previews();
        self.tiles.clear();
    }

    /// Aktives Rechteck-Overlay.
    pub fn rectangle(&self) -> Option<&RectangleOverlay> {
        self.rectangle.as_ref()
    }

    /// Aktives Polyline-Overlay.
    pub fn polyline(&self) -> Option<&PolylineOverlay> {
        self.polyline.as_ref()
    }

    /// Aktive Kachel-Overlays.
    pub fn tiles(&self) -> &[TileOverlay] {
        &self.tiles
    }

    /// `true`, wenn kein Overlay installiert ist.
    pub fn is_empty(&self) -> bool {
        self.rectangle.is_none() && self.polyline.is_none() && self.tiles.is_empty()
    }
}
