//! Zentrale Konfiguration für den Map-Import-Editor.
//!
//! `EditorOptions` enthält alle zur Laufzeit änderbaren Werte.
//! Die `const`-Werte bleiben als Fallback/Default erhalten.

use serde::{Deserialize, Serialize};

// ── Hub-API ─────────────────────────────────────────────────────────

/// Basis-URL des Map-Storage-Hubs.
pub const HUB_BASE_URL: &str = "http://localhost:8000";

// ── Tile-Server ─────────────────────────────────────────────────────

/// URL-Template des Kachel-Servers.
pub const TILE_URL_TEMPLATE: &str = "https://tile.openstreetmap.org/{z}/{x}/{y}.png";
/// Kapazität des Kachel-Caches (Anzahl Texturen).
pub const TILE_CACHE_CAPACITY: usize = 300;

// ── Viewport ────────────────────────────────────────────────────────

/// Standard-Zentrum der Karte (Breitengrad).
pub const DEFAULT_CENTER_LAT: f64 = 49.0275;
/// Standard-Zentrum der Karte (Längengrad).
pub const DEFAULT_CENTER_LNG: f64 = 31.4828;
/// Standard-Zoom beim Start und nach Reset.
pub const DEFAULT_ZOOM: u8 = 6;
/// Zoom nach Koordinaten-Suche.
pub const SEARCH_ZOOM: u8 = 15;
/// Zoom der Read-only-Detailansicht eines Layers.
pub const DETAIL_ZOOM: u8 = 14;

// ── Overlay-Darstellung ────────────────────────────────────────────

/// Linienfarbe der Vorschau-Overlays (RGBA: Rot).
pub const OVERLAY_STROKE_COLOR: [u8; 4] = [255, 0, 0, 204];
/// Füllfarbe der Rechteck- und Kachel-Overlays (RGBA: Rot, 35% Deckung).
pub const OVERLAY_FILL_COLOR: [u8; 4] = [255, 0, 0, 90];
/// Linienstärke der Overlays in Pixeln.
pub const OVERLAY_STROKE_WIDTH: f32 = 2.0;
/// Radius der Punkt-Marker in Pixeln.
pub const MARKER_RADIUS_PX: f32 = 5.0;
/// Hover-Abstand in Pixeln, ab dem die Polyline-Länge angezeigt wird.
pub const POLYLINE_HOVER_RADIUS_PX: f32 = 6.0;

/// Alle zur Laufzeit änderbaren Editor-Optionen.
/// Wird als `map_import_editor.toml` neben der Binary gespeichert.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EditorOptions {
    // ── Hub ─────────────────────────────────────────────────────
    /// Basis-URL des Map-Storage-Hubs
    pub hub_base_url: String,

    // ── Karte ───────────────────────────────────────────────────
    /// URL-Template des Kachel-Servers
    pub tile_url_template: String,
    /// Standard-Zentrum (Breitengrad)
    pub default_center_lat: f64,
    /// Standard-Zentrum (Längengrad)
    pub default_center_lng: f64,
    /// Standard-Zoom-Stufe
    pub default_zoom: u8,
    /// Zoom nach Koordinaten-Suche
    #[serde(default = "default_search_zoom")]
    pub search_zoom: u8,
    /// Zoom der Read-only-Detailansicht
    #[serde(default = "default_detail_zoom")]
    pub detail_zoom: u8,
}

impl Default for EditorOptions {
    fn default() -> Self {
        Self {
            hub_base_url: HUB_BASE_URL.to_string(),
            tile_url_template: TILE_URL_TEMPLATE.to_string(),
            default_center_lat: DEFAULT_CENTER_LAT,
            default_center_lng: DEFAULT_CENTER_LNG,
            default_zoom: DEFAULT_ZOOM,
            search_zoom: SEARCH_ZOOM,
            detail_zoom: DETAIL_ZOOM,
        }
    }
}

/// Serde-Default für `search_zoom` (Abwärtskompatibilität bestehender TOML-Dateien).
fn default_search_zoom() -> u8 {
    SEARCH_ZOOM
}

/// Serde-Default für `detail_zoom` (Abwärtskompatibilität).
fn default_detail_zoom() -> u8 {
    DETAIL_ZOOM
}

impl EditorOptions {
    /// Lädt Optionen aus einer TOML-Datei. Bei Fehler: Standardwerte.
    pub fn load_from_file(path: &std::path::Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(content) => match toml::from_str(&content) {
                Ok(opts) => {
                    log::info!("Optionen geladen aus: {}", path.display());
                    opts
                }
                Err(e) => {
                    log::warn!("Optionen-Datei fehlerhaft, verwende Standardwerte: {}", e);
                    Self::default()
                }
            },
            Err(_) => {
                log::info!("Keine Optionen-Datei gefunden, verwende Standardwerte");
                Self::default()
            }
        }
    }

    /// Speichert Optionen als TOML-Datei.
    pub fn save_to_file(&self, path: &std::path::Path) -> anyhow::Result<()> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        log::info!("Optionen gespeichert nach: {}", path.display());
        Ok(())
    }

    /// Ermittelt den Pfad zur Optionen-Datei neben der Binary.
    pub fn config_path() -> std::path::PathBuf {
        std::env::current_exe()
            .unwrap_or_else(|_| std::path::PathBuf::from("map_import_editor"))
            .parent()
            .unwrap_or_else(|| std::path::Path::new("."))
            .join("map_import_editor.toml")
    }

    /// Standard-Zentrum als Koordinate.
    pub fn default_center(&self) -> crate::core::Coordinate {
        crate::core::Coordinate::new(self.default_center_lat, self.default_center_lng)
    }
}
