//! UI-bezogener Anwendungszustand: Seiten, Import-Dialog, Meldungen.

use crate::core::{ImportForm, LayerSummary};

/// Aktive Seite der Anwendung.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ActivePage {
    /// Kartenansicht mit Import-Workflow
    #[default]
    Map,
    /// Tabelle der importierten Layer
    Layers,
}

/// Schweregrad einer Benachrichtigung.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Info,
    Success,
    Error,
}

/// Eine Benachrichtigung für den Meldungs-Bereich.
#[derive(Debug, Clone, PartialEq)]
pub struct Notification {
    pub message: String,
    pub severity: Severity,
}

/// Zustand des Import-Dialogs.
pub struct ImportDialogState {
    /// Ob der Dialog sichtbar ist
    pub visible: bool,
    /// Layer-Name (Pflichtfeld, 1–50 Zeichen)
    pub layer_name: String,
    /// Zoom-Stufe der zu importierenden Kacheln
    pub zoom_level: u8,
    /// FAST-Schwellwert
    pub threshold: i32,
    /// Non-maximum suppression an/aus
    pub nonmax_suppression: bool,
    /// Lade-Distanz in Metern (nur Polyline)
    pub load_distance_m: f64,
    /// Optionale Beschreibung
    pub description: String,
}

impl ImportDialogState {
    /// Maximale Länge des Layer-Namens (Backend-Constraint).
    pub const LAYER_NAME_MAX: usize = 50;

    /// Erstellt einen geschlossenen Dialog-Zustand mit Formular-Defaults.
    pub fn new() -> Self {
        let defaults = ImportForm::default();
        Self {
            visible: false,
            layer_name: defaults.layer_name,
            zoom_level: defaults.zoom_level,
            threshold: defaults.threshold,
            nonmax_suppression: defaults.nonmax_suppression,
            load_distance_m: defaults.load_distance_m,
            description: String::new(),
        }
    }

    /// Öffnet den Dialog mit frischen Default-Werten.
    pub fn open(&mut self) {
        *self = Self::new();
        self.visible = true;
    }

    /// `true`, wenn der Layer-Name die Backend-Constraints erfüllt.
    pub fn is_name_valid(&self) -> bool {
        let len = self.layer_name.trim().len();
        len >= 1 && len <= Self::LAYER_NAME_MAX
    }

    /// Baut das validierte Formular aus den Dialog-Feldern.
    pub fn to_form(&self) -> ImportForm {
        ImportForm {
            layer_name: self.layer_name.trim().to_string(),
            zoom_level: self.zoom_level,
            threshold: self.threshold,
            nonmax_suppression: self.nonmax_suppression,
            load_distance_m: self.load_distance_m,
            save_img: ImportForm::default().save_img,
            description: if self.description.trim().is_empty() {
                None
            } else {
                Some(self.description.trim().to_string())
            },
        }
    }
}

impl Default for ImportDialogState {
    fn default() -> Self {
        Self::new()
    }
}

/// UI-bezogener Anwendungszustand.
#[derive(Default)]
pub struct UiState {
    /// Aktive Seite
    pub page: ActivePage,
    /// Inhalt des Koordinaten-Eingabefelds
    pub coordinate_input: String,
    /// Import-Dialog
    pub import_dialog: ImportDialogState,
    /// Aktuelle Benachrichtigung (eine zur Zeit; neue ersetzen die alte)
    pub notification: Option<Notification>,
    /// Zeilen der Layer-Tabelle (zuletzt geladener Stand)
    pub layer_rows: Vec<LayerSummary>,
}

impl UiState {
    /// Erstellt den Standard-UI-Zustand.
    pub fn new() -> Self {
        Self::default()
    }
}
