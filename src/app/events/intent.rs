use crate::core::{Coordinate, ImportForm, ImportMode, LayerDetail, LayerSummary};

/// App-Intent Events.
/// Intents sind Eingaben aus UI, System und Gateway ohne direkte Mutationslogik.
#[derive(Debug, Clone)]
pub enum AppIntent {
    // ── Navigation & Anwendungssteuerung ────────────────────────
    /// Kartenseite anzeigen
    MapPageRequested,
    /// Layer-Tabellen-Seite anzeigen (lädt die Liste neu)
    LayersPageRequested,
    /// Anwendung beenden
    ExitRequested,

    // ── Kartenfläche ────────────────────────────────────────────
    /// Klick auf die Karte an einer geographischen Position
    MapClicked { coordinate: Coordinate },
    /// Karte per Drag verschoben (Pixel-Delta)
    MapPanned { delta_px: [f32; 2] },
    /// Stufenweise hineinzoomen
    ZoomInRequested,
    /// Stufenweise herauszoomen
    ZoomOutRequested,
    /// Viewport-Größe hat sich geändert
    ViewportResized { size: [f32; 2] },

    // ── Koordinaten-Eingabe ─────────────────────────────────────
    /// Getippte Koordinate als Punkt einfügen
    TypedCoordinateInserted { coordinate: Coordinate },
    /// Getippte Koordinate auf der Karte anspringen
    TypedCoordinateSearched { coordinate: Coordinate },

    // ── Import-Workflow ─────────────────────────────────────────
    /// Import-Modus gewechselt (leert Punkte und Vorschau)
    ImportModeChanged { mode: ImportMode },
    /// Gesammelte Punkte und Vorschau-Overlays verwerfen
    ClearCoordinatesRequested,
    /// Vorschau des aktiven Modus zeichnen
    PreviewRequested,
    /// Routen-Optimierung anstoßen
    OptimizeRequested,

    // ── Import-Dialog ───────────────────────────────────────────
    /// Import-Dialog öffnen
    ImportDialogRequested,
    /// Import-Dialog abgebrochen
    ImportDialogCancelled,
    /// Import-Dialog bestätigt
    ImportSubmitted { form: ImportForm },

    // ── Layer ───────────────────────────────────────────────────
    /// Read-only-Ansicht eines importierten Layers öffnen
    ViewLayerRequested { layer_id: i64 },
    /// Read-only-Ansicht verlassen, zurück zum leeren Editor
    BackToEditRequested,
    /// Layer-Liste neu laden
    RefreshLayersRequested,
    /// Layer löschen
    DeleteLayerRequested { layer_id: i64 },

    // ── Gateway-Abschlüsse (vom Host zurückgespeist) ────────────
    /// Optimierungs-Antwort eingetroffen
    OptimizeCompleted {
        seq: u64,
        result: Result<Vec<Coordinate>, String>,
    },
    /// Import-Antwort eingetroffen
    ImportCompleted { result: Result<i64, String> },
    /// Layer-Details eingetroffen
    LayerDetailsLoaded {
        layer_id: i64,
        result: Result<LayerDetail, String>,
    },
    /// Layer-Liste eingetroffen
    LayerListLoaded {
        result: Result<Vec<LayerSummary>, String>,
    },
    /// Lösch-Antwort eingetroffen
    LayerDeleted {
        layer_id: i64,
        result: Result<(), String>,
    },

    // ── Meldungen ───────────────────────────────────────────────
    /// Aktuelle Benachrichtigung schließen
    NotificationDismissed,
}
