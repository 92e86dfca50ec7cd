//! Import-Kommando: Modus, Profil-Argumente, Aktionen und der reine Builder.

use std::fmt;

use super::coordinate::Coordinate;

/// Geometrie-Typ eines Imports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ImportMode {
    /// Rechteck-Region aus zwei Eckpunkten
    #[default]
    Rectangle,
    /// Wegpunkt-Pfad beliebiger Länge
    Polyline,
}

impl ImportMode {
    /// Wire-Bezeichner des Hub-Backends.
    pub fn as_type_label(&self) -> &'static str {
        match self {
            ImportMode::Rectangle => "rectangle",
            ImportMode::Polyline => "polyline",
        }
    }

    /// Modus aus dem gespeicherten `import_type` eines Layers.
    /// Alles außer "rectangle" ist eine Polyline.
    pub fn from_type_label(label: &str) -> Self {
        if label == "rectangle" {
            ImportMode::Rectangle
        } else {
            ImportMode::Polyline
        }
    }

    /// Mindest-Punktanzahl, ab der ein Import möglich ist.
    pub fn min_points(&self) -> usize {
        2
    }
}

/// Profil-Argumente als echte Summe: eine ungültige Paarung aus Modus und
/// Argument-Variante ist nicht darstellbar.
#[derive(Debug, Clone, PartialEq)]
pub enum ProfileArgs {
    /// Start/Ende sind erster und zweiter Punkt in Klick-Reihenfolge,
    /// nicht geographisch normalisiert.
    Rectangle { start: Coordinate, end: Coordinate },
    /// Wegpunkte in Klick- bzw. optimierter Reihenfolge.
    Polyline {
        waypoints: Vec<Coordinate>,
        load_distance_m: f64,
    },
}

impl ProfileArgs {
    /// Der zu den Argumenten gehörende Modus.
    pub fn mode(&self) -> ImportMode {
        match self {
            ProfileArgs::Rectangle { .. } => ImportMode::Rectangle,
            ProfileArgs::Polyline { .. } => ImportMode::Polyline,
        }
    }
}

/// Parameter des FAST-Feature-Detektors (opak für den Client).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FastParams {
    pub threshold: i32,
    pub nonmax_suppression: bool,
}

/// Parameter des SURF-Feature-Detektors (reservierte Erweiterung).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SurfParams {
    pub hessian_threshold: f64,
}

/// Nachgelagerte Backend-Aktionen des Imports.
#[derive(Debug, Clone, PartialEq)]
pub struct ImportActions {
    pub save_img: bool,
    /// Wird von diesem Workflow nie befüllt.
    pub compute_surf: Option<SurfParams>,
    pub compute_fast: Option<FastParams>,
}

/// Validierte Formulareingaben des Import-Dialogs.
#[derive(Debug, Clone, PartialEq)]
pub struct ImportForm {
    pub layer_name: String,
    pub zoom_level: u8,
    pub threshold: i32,
    pub nonmax_suppression: bool,
    /// Nur im Polyline-Modus relevant.
    pub load_distance_m: f64,
    pub save_img: bool,
    pub description: Option<String>,
}

impl Default for ImportForm {
    fn default() -> Self {
        Self {
            layer_name: String::new(),
            zoom_level: 19,
            threshold: 120,
            nonmax_suppression: true,
            load_distance_m: 50.0,
            save_img: true,
            description: None,
        }
    }
}

/// Vollständiges Import-Kommando für `POST /mapLayers/import`.
///
/// `profile_args` trägt den Modus mit — `profile_type()` kann dadurch nie
/// von der Argument-Variante abweichen.
#[derive(Debug, Clone, PartialEq)]
pub struct ImportMapLayerCommand {
    pub profile_args: ProfileArgs,
    pub layer_name: String,
    pub zoom_lvl: u8,
    pub actions: ImportActions,
    pub description: Option<String>,
}

impl ImportMapLayerCommand {
    /// Profil-Typ, abgeleitet aus den Argumenten.
    pub fn profile_type(&self) -> ImportMode {
        self.profile_args.mode()
    }
}

/// Kardinalitäts-Verletzung beim Kommando-Bau.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandBuildError {
    /// Weniger Punkte als der Modus verlangt.
    TooFewPoints { needed: usize, got: usize },
    /// Rechteck mit mehr als zwei Punkten.
    TooManyPoints { got: usize },
}

impl fmt::Display for CommandBuildError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CommandBuildError::TooFewPoints { needed, got } => {
                write!(f, "zu wenige Punkte: {needed} benötigt, {got} vorhanden")
            }
            CommandBuildError::TooManyPoints { got } => {
                write!(f, "Rechteck braucht genau 2 Punkte, {got} vorhanden")
            }
        }
    }
}

impl std::error::Error for CommandBuildError {}

/// Baut das Import-Kommando aus Modus, Punktsequenz und Formular.
///
/// Reine Funktion: verletzt die Punktsequenz die Kardinalität des Modus,
/// kommt ein Fehler zurück — nie ein missgebildetes Kommando.
pub fn build(
    mode: ImportMode,
    points: &[Coordinate],
    form: &ImportForm,
) -> Result<ImportMapLayerCommand, CommandBuildError> {
    let profile_args = match mode {
        ImportMode::Rectangle => {
            if points.len() < 2 {
                return Err(CommandBuildError::TooFewPoints {
                    needed: 2,
                    got: points.len(),
                });
            }
            if points.len() > 2 {
                return Err(CommandBuildError::TooManyPoints { got: points.len() });
            }
            ProfileArgs::Rectangle {
                start: points[0],
                end: points[1],
            }
        }
        ImportMode::Polyline => {
            if points.len() < 2 {
                return Err(CommandBuildError::TooFewPoints {
                    needed: 2,
                    got: points.len(),
                });
            }
            ProfileArgs::Polyline {
                waypoints: points.to_vec(),
                load_distance_m: form.load_distance_m,
            }
        }
    };

    Ok(ImportMapLayerCommand {
        profile_args,
        layer_name: form.layer_name.clone(),
        zoom_lvl: form.zoom_level,
        actions: ImportActions {
            save_img: form.save_img,
            compute_surf: None,
            compute_fast: Some(FastParams {
                threshold: form.threshold,
                nonmax_suppression: form.nonmax_suppression,
            }),
        },
        description: form.description.clone(),
    })
}
