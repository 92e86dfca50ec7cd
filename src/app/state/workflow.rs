//! Zustand des Import-Workflows: Modus, Punktsequenz, Read-only-Flag.

use crate::core::{Coordinate, ImportMode};

/// Kernzustand des Import-Workflows.
pub struct WorkflowState {
    /// Aktiver Import-Modus
    pub mode: ImportMode,
    /// Read-only-Ansicht eines bereits importierten Layers aktiv
    pub readonly: bool,
    /// Layer-ID der Read-only-Ansicht (gesetzt genau dann, wenn readonly)
    pub layer_id: Option<i64>,
    /// Gesammelte Punkte in Klick-Reihenfolge (Rechteck: max. 2)
    pub points: Vec<Coordinate>,
    /// Zuletzt eingefügte Koordinate (Anzeige im Seiten-Panel)
    pub last_coordinate: Option<Coordinate>,
    /// Zuletzt ausgegebene Optimierungs-Sequenznummer.
    /// Antworten mit älterer Nummer werden verworfen.
    optimize_seq: u64,
}

impl WorkflowState {
    /// Erstellt den Standard-Workflow-Zustand (Rechteck, editierbar, leer).
    pub fn new() -> Self {
        Self {
            mode: ImportMode::Rectangle,
            readonly: false,
            layer_id: None,
            points: Vec::new(),
            last_coordinate: None,
            optimize_seq: 0,
        }
    }

    /// Setzt auf den Standardzustand zurück.
    /// Die Sequenznummer bleibt monoton — ausstehende Optimierungs-Antworten
    /// aus der Zeit vor dem Reset dürfen nie wieder angewendet werden.
    pub fn reset(&mut self) {
        self.mode = ImportMode::Rectangle;
        self.readonly = false;
        self.layer_id = None;
        self.points.clear();
        self.last_coordinate = None;
        self.invalidate_optimizations();
    }

    /// `true`, solange keine Read-only-Ansicht aktiv ist.
    pub fn is_editable(&self) -> bool {
        !self.readonly
    }

    /// Vergibt die nächste Optimierungs-Sequenznummer.
    pub fn next_optimize_seq(&mut self) -> u64 {
        self.optimize_seq += 1;
        self.optimize_seq
    }

    /// Entwertet alle ausstehenden Optimierungs-Anfragen.
    pub fn invalidate_optimizations(&mut self) {
        self.optimize_seq += 1;
    }

    /// `true`, wenn `seq` die zuletzt ausgegebene Sequenznummer ist.
    pub fn is_current_optimize_seq(&self, seq: u64) -> bool {
        self.optimize_seq == seq
    }

    /// `true`, wenn die Punktsequenz die Import-Kardinalität des Modus erfüllt.
    pub fn can_import(&self) -> bool {
        self.is_editable() && self.points.len() >= self.mode.min_points()
    }

    /// `true`, wenn eine Routen-Optimierung angestoßen werden darf.
    pub fn can_optimize(&self) -> bool {
        self.is_editable() && self.mode == ImportMode::Polyline && self.points.len() >= 2
    }
}

impl Default for WorkflowState {
    fn default() -> Self {
        Self::new()
    }
}
