//! Ausstehende Netzwerk-Anfragen als Zustand.
//!
//! Handler führen selbst keine Netzwerk-Operationen aus. Sie reihen
//! Anfragen hier ein; der Host leert die Warteschlange pro Frame an das
//! Gateway. Tests prüfen die Warteschlange direkt und speisen Abschlüsse
//! als Intents zurück.

use crate::core::{Coordinate, ImportMapLayerCommand};

/// Eine ausstehende Anfrage an Hub-API oder Optimierungs-Service.
#[derive(Debug, Clone, PartialEq)]
pub enum PendingRequest {
    /// `GET /mapLayers`
    ListLayers,
    /// `GET /mapLayers/{id}`
    LayerDetails { layer_id: i64 },
    /// `POST /mapLayers/import`
    Import { command: ImportMapLayerCommand },
    /// `DELETE /mapLayers/{id}`
    DeleteLayer { layer_id: i64 },
    /// `POST /optimizeRoute/antColony`, getaggt mit der Sequenznummer
    Optimize { seq: u64, points: Vec<Coordinate> },
}

/// Warteschlange der ausstehenden Anfragen.
#[derive(Default)]
pub struct NetState {
    pending: Vec<PendingRequest>,
}

impl NetState {
    /// Erstellt eine leere Warteschlange.
    pub fn new() -> Self {
        Self::default()
    }

    /// Reiht eine Anfrage ein.
    pub fn enqueue(&mut self, request: PendingRequest) {
        self.pending.push(request);
    }

    /// Entnimmt alle ausstehenden Anfragen in Einreihungs-Reihenfolge.
    pub fn drain(&mut self) -> Vec<PendingRequest> {
        std::mem::take(&mut self.pending)
    }

    /// Read-only Sicht auf die Warteschlange.
    pub fn pending(&self) -> &[PendingRequest] {
        &self.pending
    }
}
