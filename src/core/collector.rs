//! Sammellogik für Import-Koordinaten: geordnete Menge, modusabhängige Kardinalität.

use super::coordinate::Coordinate;
use super::import_command::ImportMode;

/// Maximale Punktanzahl im Rechteck-Modus.
pub const RECTANGLE_MAX_POINTS: usize = 2;

/// Fügt eine Kandidaten-Koordinate an die bestehende Sequenz an.
///
/// Seiteneffektfrei: der Aufrufer übernimmt das Ergebnis. Unverändert
/// zurückgegeben wird die Eingabe, wenn der Kandidat bereits enthalten ist
/// (exakte Gleichheit) oder im Rechteck-Modus schon zwei Punkte vorliegen.
/// Beides ist ein stilles No-op, kein Fehler.
pub fn add(candidate: Coordinate, mode: ImportMode, current: &[Coordinate]) -> Vec<Coordinate> {
    if current.contains(&candidate) {
        return current.to_vec();
    }

    if mode == ImportMode::Rectangle && current.len() >= RECTANGLE_MAX_POINTS {
        return current.to_vec();
    }

    let mut next = current.to_vec();
    next.push(candidate);
    next
}
