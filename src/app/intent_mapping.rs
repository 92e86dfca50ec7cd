//! Mapping von UI-Intents auf mutierende App-Commands.

use crate::core::ImportMode;

use super::{AppCommand, AppIntent, AppState};

/// Übersetzt einen `AppIntent` in eine Sequenz ausführbarer `AppCommand`s.
pub fn map_intent_to_commands(state: &AppState, intent: AppIntent) -> Vec<AppCommand> {
    match intent {
        // Die Kartenseite startet immer frisch und editierbar.
        AppIntent::MapPageRequested => {
            vec![AppCommand::NavigateToMap, AppCommand::LeaveReadonlyView]
        }
        AppIntent::LayersPageRequested => {
            vec![AppCommand::NavigateToLayers, AppCommand::RequestLayerList]
        }
        AppIntent::ExitRequested => vec![AppCommand::RequestExit],

        AppIntent::MapClicked { coordinate } => vec![AppCommand::AddCoordinate { coordinate }],
        AppIntent::MapPanned { delta_px } => vec![AppCommand::PanViewport { delta_px }],
        AppIntent::ZoomInRequested => vec![AppCommand::ZoomStep { delta: 1 }],
        AppIntent::ZoomOutRequested => vec![AppCommand::ZoomStep { delta: -1 }],
        AppIntent::ViewportResized { size } => vec![AppCommand::SetViewportSize { size }],

        AppIntent::TypedCoordinateInserted { coordinate } => {
            vec![AppCommand::AddCoordinate { coordinate }]
        }
        AppIntent::TypedCoordinateSearched { coordinate } => vec![AppCommand::JumpViewport {
            center: coordinate,
            zoom: state.options.search_zoom,
        }],

        AppIntent::ImportModeChanged { mode } => vec![AppCommand::SetImportMode { mode }],
        AppIntent::ClearCoordinatesRequested => vec![AppCommand::ClearCoordinates],
        AppIntent::PreviewRequested => match state.workflow.mode {
            ImportMode::Rectangle => vec![AppCommand::ShowRectanglePreview],
            ImportMode::Polyline => vec![AppCommand::ShowPolylinePreview],
        },
        AppIntent::OptimizeRequested => vec![AppCommand::RequestOptimize],

        AppIntent::ImportDialogRequested => vec![AppCommand::OpenImportDialog],
        AppIntent::ImportDialogCancelled => vec![AppCommand::CloseImportDialog],
        AppIntent::ImportSubmitted { form } => {
            vec![AppCommand::CloseImportDialog, AppCommand::SubmitImport { form }]
        }

        AppIntent::ViewLayerRequested { layer_id } => vec![
            AppCommand::NavigateToMap,
            AppCommand::EnterReadonlyView { layer_id },
            AppCommand::RequestLayerDetails { layer_id },
        ],
        AppIntent::BackToEditRequested => vec![AppCommand::LeaveReadonlyView],
        AppIntent::RefreshLayersRequested => vec![AppCommand::RequestLayerList],
        AppIntent::DeleteLayerRequested { layer_id } => {
            vec![AppCommand::RequestDeleteLayer { layer_id }]
        }

        AppIntent::OptimizeCompleted { seq, result } => match result {
            Ok(points) => vec![AppCommand::ApplyOptimizedRoute { seq, points }],
            Err(error) => vec![AppCommand::OptimizeFailed { seq, error }],
        },
        AppIntent::ImportCompleted { result } => match result {
            // Erfolgreicher Import wechselt direkt in die Read-only-Ansicht
            // des neuen Layers.
            Ok(layer_id) => vec![
                AppCommand::FinishImport { layer_id },
                AppCommand::EnterReadonlyView { layer_id },
                AppCommand::RequestLayerDetails { layer_id },
            ],
            Err(error) => vec![AppCommand::ImportFailed { error }],
        },
        AppIntent::LayerDetailsLoaded { layer_id: _, result } => match result {
            Ok(detail) => vec![AppCommand::ApplyLayerDetails { detail }],
            Err(error) => vec![AppCommand::LayerDetailsFailed { error }],
        },
        AppIntent::LayerListLoaded { result } => match result {
            Ok(layers) => vec![AppCommand::ApplyLayerList { layers }],
            Err(error) => vec![AppCommand::LayerListFailed { error }],
        },
        AppIntent::LayerDeleted { layer_id, result } => match result {
            // Nach erfolgreichem Löschen wird die Liste neu geladen.
            Ok(()) => vec![
                AppCommand::FinishDeleteLayer { layer_id },
                AppCommand::RequestLayerList,
            ],
            Err(error) => vec![AppCommand::DeleteLayerFailed { error }],
        },

        AppIntent::NotificationDismissed => vec![AppCommand::DismissNotification],
    }
}
