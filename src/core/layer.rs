//! Layer-Typen des Persistence-Gateways und Kachel-Aggregation.

use super::coordinate::Coordinate;
use super::import_command::ImportMode;
use super::preview::GeoBounds;

/// Eine Kachel eines importierten Layers.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tile {
    pub bounds: GeoBounds,
    pub center: Coordinate,
}

/// Zeile der Layer-Liste.
#[derive(Debug, Clone, PartialEq)]
pub struct LayerSummary {
    pub id: i64,
    pub name: String,
    pub import_type: ImportMode,
}

/// Vollständige Layer-Details inklusive aller Kacheln.
#[derive(Debug, Clone, PartialEq)]
pub struct LayerDetail {
    pub id: i64,
    pub name: String,
    pub import_type: ImportMode,
    pub tiles: Vec<Tile>,
}

/// Arithmetisches Mittel der Kachel-Zentren.
/// `None` bei leerer Eingabe — der Aufrufer muss das abfangen.
pub fn aggregate_center(tiles: &[Tile]) -> Option<Coordinate> {
    if tiles.is_empty() {
        return None;
    }

    let count = tiles.len() as f64;
    let lat_sum: f64 = tiles.iter().map(|t| t.center.latitude).sum();
    let lng_sum: f64 = tiles.iter().map(|t| t.center.longitude).sum();

    Some(Coordinate::new(lat_sum / count, lng_sum / count))
}
