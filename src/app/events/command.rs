use crate::core::{Coordinate, ImportForm, ImportMode, LayerDetail, LayerSummary};

/// Mutierende App-Commands, erzeugt aus Intents durch das Intent-Mapping.
#[derive(Debug, Clone)]
pub enum AppCommand {
    // ── Navigation & Anwendungssteuerung ────────────────────────
    NavigateToMap,
    NavigateToLayers,
    RequestExit,

    // ── Viewport ────────────────────────────────────────────────
    PanViewport { delta_px: [f32; 2] },
    ZoomStep { delta: i8 },
    SetViewportSize { size: [f32; 2] },
    JumpViewport { center: Coordinate, zoom: u8 },

    // ── Koordinaten & Modus ─────────────────────────────────────
    AddCoordinate { coordinate: Coordinate },
    SetImportMode { mode: ImportMode },
    ClearCoordinates,

    // ── Vorschau ────────────────────────────────────────────────
    ShowRectanglePreview,
    ShowPolylinePreview,

    // ── Routen-Optimierung ──────────────────────────────────────
    RequestOptimize,
    ApplyOptimizedRoute { seq: u64, points: Vec<Coordinate> },
    OptimizeFailed { seq: u64, error: String },

    // ── Import ──────────────────────────────────────────────────
    OpenImportDialog,
    CloseImportDialog,
    SubmitImport { form: ImportForm },
    FinishImport { layer_id: i64 },
    ImportFailed { error: String },

    // ── Layer-Ansicht & -Liste ──────────────────────────────────
    EnterReadonlyView { layer_id: i64 },
    LeaveReadonlyView,
    RequestLayerDetails { layer_id: i64 },
    ApplyLayerDetails { detail: LayerDetail },
    LayerDetailsFailed { error: String },
    RequestLayerList,
    ApplyLayerList { layers: Vec<LayerSummary> },
    LayerListFailed { error: String },
    RequestDeleteLayer { layer_id: i64 },
    FinishDeleteLayer { layer_id: i64 },
    DeleteLayerFailed { error: String },

    // ── Meldungen ───────────────────────────────────────────────
    DismissNotification,
}
