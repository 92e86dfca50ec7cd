//! Web-Mercator-Mathematik für die Slippy-Map: Pixel-, Tile- und Gradraum.

use super::coordinate::Coordinate;

/// Kantenlänge einer Kachel in Pixeln.
pub const TILE_SIZE: f64 = 256.0;

/// Kleinste sinnvolle Zoom-Stufe.
pub const MIN_ZOOM: u8 = 1;
/// Größte Zoom-Stufe des OSM-Tile-Schemas.
pub const MAX_ZOOM: u8 = 19;

/// Breitengrad-Grenze der Mercator-Projektion.
pub const LAT_LIMIT: f64 = 85.05112878;

/// Weltbreite in Pixeln bei gegebener Zoom-Stufe.
pub fn world_size_px(zoom: u8) -> f64 {
    2.0_f64.powi(zoom as i32) * TILE_SIZE
}

/// Längengrad → globale Pixel-X-Position.
pub fn lon_to_x(lon: f64, zoom: u8) -> f64 {
    ((lon + 180.0) / 360.0) * world_size_px(zoom)
}

/// Breitengrad → globale Pixel-Y-Position.
pub fn lat_to_y(lat: f64, zoom: u8) -> f64 {
    let lat_rad = lat.clamp(-LAT_LIMIT, LAT_LIMIT).to_radians();
    (1.0 - (lat_rad.tan() + 1.0 / lat_rad.cos()).ln() / std::f64::consts::PI) / 2.0
        * world_size_px(zoom)
}

/// Globale Pixel-X-Position → Längengrad.
pub fn x_to_lon(x: f64, zoom: u8) -> f64 {
    (x / world_size_px(zoom)) * 360.0 - 180.0
}

/// Globale Pixel-Y-Position → Breitengrad.
pub fn y_to_lat(y: f64, zoom: u8) -> f64 {
    let n = std::f64::consts::PI - 2.0 * std::f64::consts::PI * y / world_size_px(zoom);
    (0.5 * (n.exp() - (-n).exp())).atan().to_degrees()
}

/// Verschiebt ein Karten-Zentrum um ein Pixel-Delta auf aktueller Zoom-Stufe.
pub fn offset_center(center: Coordinate, zoom: u8, dx_px: f64, dy_px: f64) -> Coordinate {
    let x = lon_to_x(center.longitude, zoom) + dx_px;
    let y = lat_to_y(center.latitude, zoom) + dy_px;

    let max = world_size_px(zoom);
    Coordinate::new(
        y_to_lat(y.clamp(0.0, max), zoom),
        x_to_lon(x.rem_euclid(max), zoom),
    )
}

/// Adresse einer Kachel im Slippy-Schema.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TileCoords {
    pub x: u32,
    pub y: u32,
    pub z: u8,
}

impl TileCoords {
    /// Tile-URL aus einem `{z}/{x}/{y}`-Template.
    pub fn url(&self, template: &str) -> String {
        template
            .replace("{z}", &self.z.to_string())
            .replace("{x}", &self.x.to_string())
            .replace("{y}", &self.y.to_string())
    }
}

/// Eine sichtbare Kachel samt Pixel-Offset ihrer linken oberen Ecke
/// relativ zum Viewport-Zentrum.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TilePlacement {
    pub coords: TileCoords,
    pub offset_px: [f64; 2],
}

/// Alle Kacheln, die ein Viewport um das Zentrum herum anschneidet.
///
/// X wird um die Datumsgrenze gewickelt (der Offset behält die ungewickelte
/// Position für das Zeichnen), Y an den Polen geklemmt.
pub fn visible_tiles(center: Coordinate, zoom: u8, viewport: [f32; 2]) -> Vec<TilePlacement> {
    let center_x = lon_to_x(center.longitude, zoom);
    let center_y = lat_to_y(center.latitude, zoom);

    let half_w = viewport[0] as f64 / 2.0;
    let half_h = viewport[1] as f64 / 2.0;

    let tile_count = 1_u32 << zoom;
    let min_tx = ((center_x - half_w) / TILE_SIZE).floor() as i64;
    let max_tx = ((center_x + half_w) / TILE_SIZE).floor() as i64;
    let min_ty = ((center_y - half_h) / TILE_SIZE).floor() as i64;
    let max_ty = ((center_y + half_h) / TILE_SIZE).floor() as i64;

    let mut tiles = Vec::new();
    for ty in min_ty..=max_ty {
        if ty < 0 || ty >= tile_count as i64 {
            continue;
        }
        for tx in min_tx..=max_tx {
            let wrapped_x = tx.rem_euclid(tile_count as i64) as u32;
            tiles.push(TilePlacement {
                coords: TileCoords {
                    x: wrapped_x,
                    y: ty as u32,
                    z: zoom,
                },
                offset_px: [
                    tx as f64 * TILE_SIZE - center_x,
                    ty as f64 * TILE_SIZE - center_y,
                ],
            });
        }
    }
    tiles
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn lon_roundtrip() {
        for lon in [-180.0, -31.5, 0.0, 31.4828, 179.9] {
            assert_relative_eq!(x_to_lon(lon_to_x(lon, 10), 10), lon, epsilon = 1e-9);
        }
    }

    #[test]
    fn lat_roundtrip() {
        for lat in [-80.0, -49.0275, 0.0, 49.0275, 80.0] {
            assert_relative_eq!(y_to_lat(lat_to_y(lat, 10), 10), lat, epsilon = 1e-9);
        }
    }

    #[test]
    fn equator_and_meridian_hit_world_center() {
        let zoom = 6;
        let half = world_size_px(zoom) / 2.0;
        assert_relative_eq!(lon_to_x(0.0, zoom), half, epsilon = 1e-9);
        assert_relative_eq!(lat_to_y(0.0, zoom), half, epsilon = 1e-9);
    }

    #[test]
    fn offset_center_moves_east_and_south() {
        let center = Coordinate::new(49.0, 31.0);
        let moved = offset_center(center, 8, 100.0, 100.0);
        assert!(moved.longitude > center.longitude);
        assert!(moved.latitude < center.latitude);
    }

    #[test]
    fn visible_tiles_cover_viewport() {
        let tiles = visible_tiles(Coordinate::new(49.0275, 31.4828), 6, [1024.0, 768.0]);
        // 1024px / 256 = 4 Spalten (+1 Anschnitt), 768px / 256 = 3 Zeilen (+1)
        assert!(tiles.len() >= 12);
        assert!(tiles.iter().all(|t| t.coords.z == 6));
        assert!(tiles.iter().all(|t| t.coords.x < 64 && t.coords.y < 64));
        // Offsets bleiben im Anschnitt-Bereich des Viewports
        assert!(tiles
            .iter()
            .all(|t| t.offset_px[0].abs() <= 512.0 + TILE_SIZE
                && t.offset_px[1].abs() <= 384.0 + TILE_SIZE));
    }

    #[test]
    fn tile_url_fills_template() {
        let coords = TileCoords { x: 5, y: 10, z: 3 };
        assert_eq!(
            coords.url("https://tile.openstreetmap.org/{z}/{x}/{y}.png"),
            "https://tile.openstreetmap.org/3/5/10.png"
        );
    }
}
