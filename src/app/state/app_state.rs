//! Hauptzustand der Anwendung.

use crate::app::CommandLog;
use crate::shared::EditorOptions;

use super::{NetState, Notification, OverlayState, Severity, UiState, ViewState, WorkflowState};

/// Hauptzustand der Anwendung
pub struct AppState {
    /// Import-Workflow (Modus, Punkte, Read-only)
    pub workflow: WorkflowState,
    /// Aktive Overlay-Handles der Kartenfläche
    pub overlays: OverlayState,
    /// View-State (Zentrum, Zoom, Viewport)
    pub view: ViewState,
    /// UI-State (Seite, Dialoge, Meldungen)
    pub ui: UiState,
    /// Ausstehende Netzwerk-Anfragen
    pub net: NetState,
    /// Verlauf ausgeführter Commands
    pub command_log: CommandLog,
    /// Laufzeit-Optionen (Hub-URL, Viewport-Defaults)
    pub options: EditorOptions,
    /// Signalisiert dem Host (eframe), die Anwendung kontrolliert zu beenden
    pub should_exit: bool,
}

impl AppState {
    /// Erstellt einen neuen, leeren App-State
    pub fn new() -> Self {
        Self {
            workflow: WorkflowState::new(),
            overlays: OverlayState::new(),
            view: ViewState::new(),
            ui: UiState::new(),
            net: NetState::new(),
            command_log: CommandLog::new(),
            options: EditorOptions::default(),
            should_exit: false,
        }
    }

    /// Gibt die Anzahl der gesammelten Punkte zurück (für UI-Anzeige)
    pub fn point_count(&self) -> usize {
        self.workflow.points.len()
    }

    /// Setzt die aktuelle Benachrichtigung; eine bestehende wird ersetzt.
    pub fn notify(&mut self, severity: Severity, message: impl Into<String>) {
        self.ui.notification = Some(Notification {
            message: message.into(),
            severity,
        });
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
