//! Core-Domänentypen: Koordinaten, Sammellogik, Vorschau-Geometrie, Import-Kommando, Layer.

pub mod collector;
pub mod coordinate;
pub mod geodesy;
pub mod import_command;
pub mod layer;
pub mod mercator;
pub mod preview;

pub use coordinate::{parse_typed, Coordinate};
pub use geodesy::{haversine_m, path_length_m};
pub use import_command::{
    build as build_import_command, CommandBuildError, FastParams, ImportActions, ImportForm,
    ImportMapLayerCommand, ImportMode, ProfileArgs, SurfParams,
};
pub use layer::{aggregate_center, LayerDetail, LayerSummary, Tile};
pub use mercator::TileCoords;
pub use preview::{GeoBounds, PolylinePath};
