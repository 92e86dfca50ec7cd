//! Map-Import-Editor Library.
//! Core-Funktionalität als Library exportiert für Tests und Wiederverwendung.

pub mod app;
pub mod core;
pub mod net;
pub mod shared;
pub mod ui;

pub use app::{
    ActivePage, AppCommand, AppController, AppIntent, AppState, NetState, OverlayState,
    PendingRequest, UiState, ViewState, WorkflowState,
};
pub use core::{
    aggregate_center, build_import_command, parse_typed, Coordinate, GeoBounds, ImportActions,
    ImportForm, ImportMapLayerCommand, ImportMode, LayerDetail, LayerSummary, ProfileArgs, Tile,
};
pub use net::{Gateway, GatewayEvent, HubClient};
pub use shared::EditorOptions;
