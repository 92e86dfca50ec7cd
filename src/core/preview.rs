//! Vorschau-Geometrie: reine Funktionen von Punktsequenz auf Overlay-Form.

use super::coordinate::Coordinate;
use super::geodesy;

/// Geographische Begrenzung in Grad.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GeoBounds {
    pub north: f64,
    pub south: f64,
    pub east: f64,
    pub west: f64,
}

impl GeoBounds {
    /// Normalisierte Begrenzung aus zwei Eckpunkten, reihenfolgeunabhängig.
    pub fn from_corners(a: Coordinate, b: Coordinate) -> Self {
        Self {
            north: a.latitude.max(b.latitude),
            south: a.latitude.min(b.latitude),
            east: a.longitude.max(b.longitude),
            west: a.longitude.min(b.longitude),
        }
    }
}

/// Geordneter Polyline-Pfad mit vorab berechneter Großkreis-Länge.
#[derive(Debug, Clone, PartialEq)]
pub struct PolylinePath {
    pub waypoints: Vec<Coordinate>,
    pub length_m: f64,
}

impl PolylinePath {
    /// Anzeige-Text der Pfadlänge: Kilometer mit zwei Nachkommastellen.
    pub fn length_label(&self) -> String {
        format!("{:.2} km", self.length_m / 1000.0)
    }
}

/// Rechteck-Vorschau aus den ersten beiden Punkten.
///
/// Die Begrenzung ist geographie-normalisiert — anders als das
/// Import-Kommando, das die Klick-Reihenfolge bewahrt. Unter zwei Punkten:
/// `None` (Vorschau bleibt aus).
pub fn rectangle_preview(points: &[Coordinate]) -> Option<GeoBounds> {
    if points.len() < 2 {
        return None;
    }
    Some(GeoBounds::from_corners(points[0], points[1]))
}

/// Polyline-Vorschau: geordneter Pfad durch alle Punkte.
/// Unter zwei Punkten: `None`.
pub fn polyline_preview(points: &[Coordinate]) -> Option<PolylinePath> {
    if points.len() < 2 {
        return None;
    }
    Some(PolylinePath {
        waypoints: points.to_vec(),
        length_m: geodesy::path_length_m(points),
    })
}
