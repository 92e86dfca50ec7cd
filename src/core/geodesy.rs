//! Großkreis-Distanzen über der Kugel-Approximation der Erde.

use super::coordinate::Coordinate;

/// Mittlerer Erdradius in Metern.
pub const EARTH_RADIUS_M: f64 = 6_371_000.0;

/// Haversine-Distanz zwischen zwei Koordinaten in Metern.
pub fn haversine_m(a: Coordinate, b: Coordinate) -> f64 {
    let lat_a = a.latitude.to_radians();
    let lat_b = b.latitude.to_radians();
    let d_lat = (b.latitude - a.latitude).to_radians();
    let d_lng = (b.longitude - a.longitude).to_radians();

    let h = (d_lat / 2.0).sin().powi(2) + lat_a.cos() * lat_b.cos() * (d_lng / 2.0).sin().powi(2);

    2.0 * EARTH_RADIUS_M * h.sqrt().asin()
}

/// Pfadlänge in Metern: Großkreis-Akkumulation über aufeinanderfolgende Paare.
/// Weniger als zwei Punkte ergeben 0.
pub fn path_length_m(points: &[Coordinate]) -> f64 {
    points
        .windows(2)
        .map(|pair| haversine_m(pair[0], pair[1]))
        .sum()
}
