//! Handler für Dialog-State, Seiten-Navigation und Anwendungssteuerung.

use crate::app::{ActivePage, AppState};

/// Markiert die Anwendung zum Beenden im nächsten Frame.
pub fn request_exit(state: &mut AppState) {
    state.should_exit = true;
}

/// Wechselt auf die Kartenseite.
pub fn navigate_to_map(state: &mut AppState) {
    state.ui.page = ActivePage::Map;
}

/// Wechselt auf die Layer-Tabellen-Seite.
pub fn navigate_to_layers(state: &mut AppState) {
    state.ui.page = ActivePage::Layers;
}

/// Öffnet den Import-Dialog mit frischen Default-Werten.
/// Nur sinnvoll im editierbaren Zustand; die UI blendet den Knopf sonst aus.
pub fn open_import_dialog(state: &mut AppState) {
    if !state.workflow.is_editable() {
        return;
    }
    state.ui.import_dialog.open();
}

/// Schließt den Import-Dialog.
pub fn close_import_dialog(state: &mut AppState) {
    state.ui.import_dialog.visible = false;
}

/// Schließt die aktuelle Benachrichtigung.
pub fn dismiss_notification(state: &mut AppState) {
    state.ui.notification = None;
}
