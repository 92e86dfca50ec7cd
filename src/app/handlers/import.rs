//! Handler für den Import eines Karten-Layers.

use crate::app::state::PendingRequest;
use crate::app::{AppState, Severity};
use crate::core::{build_import_command, ImportForm};

/// Baut das Import-Kommando und reiht es zum Versand ein.
///
/// Die UI hält den Import-Knopf gesperrt, solange die Kardinalität nicht
/// stimmt. Kommt der Command trotzdem in verletzendem Zustand an, bleibt
/// es beim Log-Eintrag — ein missgebildetes Kommando entsteht nie.
pub fn submit(state: &mut AppState, form: ImportForm) {
    if !state.workflow.is_editable() {
        return;
    }

    match build_import_command(state.workflow.mode, &state.workflow.points, &form) {
        Ok(command) => {
            state.notify(Severity::Info, "Start importing map...");
            state.net.enqueue(PendingRequest::Import { command });
        }
        Err(e) => {
            log::warn!("Import-Kommando nicht baubar: {}", e);
        }
    }
}

/// Meldet den erfolgreichen Import.
/// Der Wechsel in die Read-only-Ansicht folgt als eigene Commands.
pub fn finished(state: &mut AppState, layer_id: i64) {
    log::info!("Layer {} erfolgreich importiert", layer_id);
    state.notify(Severity::Success, "Map imported successfully!");
}

/// Meldet einen fehlgeschlagenen Import; der Workflow-Zustand bleibt stehen.
pub fn failed(state: &mut AppState, error: &str) {
    log::error!("Import fehlgeschlagen: {}", error);
    state.notify(Severity::Error, "Error importing map!");
}
