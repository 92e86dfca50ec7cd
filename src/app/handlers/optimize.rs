//! Handler für die Ant-Colony-Routenoptimierung.
//!
//! Jede Anfrage trägt eine monoton steigende Sequenznummer. Eine Antwort
//! wird nur angewendet, wenn ihre Nummer die zuletzt ausgegebene ist —
//! verspätete Antworten nach Clear, Moduswechsel oder erneutem Optimieren
//! werden still verworfen.

use crate::app::state::PendingRequest;
use crate::app::{handlers, AppState, Severity};
use crate::core::Coordinate;

/// Stößt eine Optimierungs-Anfrage für die aktuelle Punktsequenz an.
pub fn request(state: &mut AppState) {
    if !state.workflow.can_optimize() {
        log::debug!(
            "Optimierung übersprungen: readonly={}, Punkte={}",
            state.workflow.readonly,
            state.workflow.points.len()
        );
        return;
    }

    let seq = state.workflow.next_optimize_seq();
    state.net.enqueue(PendingRequest::Optimize {
        seq,
        points: state.workflow.points.clone(),
    });
    log::info!(
        "Routen-Optimierung #{} mit {} Punkten angefragt",
        seq,
        state.workflow.points.len()
    );
}

/// Übernimmt eine optimierte Punktreihenfolge und zeichnet die Vorschau neu.
pub fn apply(state: &mut AppState, seq: u64, points: Vec<Coordinate>) {
    if !state.workflow.is_current_optimize_seq(seq) {
        log::info!("Veraltete Optimierungs-Antwort #{} verworfen", seq);
        return;
    }
    if !state.workflow.is_editable() {
        log::info!("Optimierungs-Antwort #{} in Read-only-Ansicht verworfen", seq);
        return;
    }

    state.workflow.points = points;
    handlers::preview::show_polyline(state);
}

/// Meldet eine fehlgeschlagene Optimierung; die Punkte bleiben unverändert.
pub fn failed(state: &mut AppState, seq: u64, error: &str) {
    if !state.workflow.is_current_optimize_seq(seq) {
        log::info!("Fehler veralteter Optimierungs-Anfrage #{} ignoriert", seq);
        return;
    }

    log::warn!("Routen-Optimierung fehlgeschlagen: {}", error);
    state.notify(Severity::Error, "Error optimizing route!");
}
