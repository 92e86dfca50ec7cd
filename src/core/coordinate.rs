//! Geographischer Koordinaten-Werttyp und Parsing getippter Eingaben.

use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::OnceLock;

/// Eine geographische Koordinate (WGS84, Grad).
///
/// Gleichheit ist exakte Feldgleichheit — keine Epsilon-Toleranz.
/// Duplikat-Erkennung im Collector verlässt sich darauf.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinate {
    pub latitude: f64,
    pub longitude: f64,
}

impl Coordinate {
    /// Erstellt eine neue Koordinate.
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }
}

/// Akzeptiertes Eingabeformat: `<lat>,<lng>`, optionales Vorzeichen,
/// optionaler Dezimalteil, optionaler Whitespace nach dem Komma.
const COORDINATE_PATTERN: &str = r"^-?\d+(\.\d+)?,\s*-?\d+(\.\d+)?$";

fn coordinate_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(COORDINATE_PATTERN).expect("Pattern ist statisch gültig"))
}

/// Parst eine getippte Koordinaten-Eingabe.
///
/// Gibt `None` zurück, wenn die Eingabe nicht dem Format entspricht —
/// nie einen Fehler. Die UI leitet daraus die Button-Aktivierung ab.
pub fn parse_typed(text: &str) -> Option<Coordinate> {
    if !coordinate_regex().is_match(text) {
        return None;
    }

    let (lat, lng) = text.split_once(',')?;
    let latitude = lat.trim().parse().ok()?;
    let longitude = lng.trim().parse().ok()?;

    Some(Coordinate {
        latitude,
        longitude,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_typed_accepts_plain_pair() {
        assert_eq!(
            parse_typed("49.05,31.48"),
            Some(Coordinate::new(49.05, 31.48))
        );
    }

    #[test]
    fn parse_typed_accepts_whitespace_after_comma() {
        assert_eq!(
            parse_typed("49.05, 31.48"),
            Some(Coordinate::new(49.05, 31.48))
        );
    }

    #[test]
    fn parse_typed_accepts_negative_and_integer_parts() {
        assert_eq!(parse_typed("-12,-170"), Some(Coordinate::new(-12.0, -170.0)));
        assert_eq!(parse_typed("0,0"), Some(Coordinate::new(0.0, 0.0)));
    }

    #[test]
    fn parse_typed_rejects_garbage() {
        assert_eq!(parse_typed("abc"), None);
        assert_eq!(parse_typed(""), None);
        assert_eq!(parse_typed("49.05"), None);
        assert_eq!(parse_typed("49.05;31.48"), None);
        assert_eq!(parse_typed("49.05 ,31.48"), None);
        assert_eq!(parse_typed("49.,31.48"), None);
    }

    #[test]
    fn equality_is_exact() {
        let a = Coordinate::new(10.0, 20.0);
        let b = Coordinate::new(10.0, 20.000000001);
        assert_ne!(a, b);
        assert_eq!(a, Coordinate::new(10.0, 20.0));
    }
}
