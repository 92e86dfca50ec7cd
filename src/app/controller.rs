//! Application Controller für zentrale Event-Verarbeitung.

use super::{AppCommand, AppIntent, AppState};

/// Orchestriert UI-Events und Handler auf dem AppState.
#[derive(Default)]
pub struct AppController;

impl AppController {
    /// Erstellt einen neuen Controller.
    pub fn new() -> Self {
        Self
    }

    /// Verarbeitet einen Intent über Intent->Command Mapping.
    pub fn handle_intent(&mut self, state: &mut AppState, intent: AppIntent) -> anyhow::Result<()> {
        let commands = self.map_intent_to_commands(state, intent);
        for command in commands {
            self.handle_command(state, command)?;
        }

        Ok(())
    }

    fn map_intent_to_commands(&self, state: &AppState, intent: AppIntent) -> Vec<AppCommand> {
        super::intent_mapping::map_intent_to_commands(state, intent)
    }

    /// Führt mutierende Commands auf dem AppState aus.
    /// Dispatcht an Feature-Handler in `handlers/`.
    pub fn handle_command(
        &mut self,
        state: &mut AppState,
        command: AppCommand,
    ) -> anyhow::Result<()> {
        state.command_log.record(&command);
        use super::handlers;

        match command {
            // === Navigation & Anwendungssteuerung ===
            AppCommand::NavigateToMap => handlers::dialog::navigate_to_map(state),
            AppCommand::NavigateToLayers => handlers::dialog::navigate_to_layers(state),
            AppCommand::RequestExit => handlers::dialog::request_exit(state),

            // === Viewport ===
            AppCommand::PanViewport { delta_px } => handlers::view::pan(state, delta_px),
            AppCommand::ZoomStep { delta } => handlers::view::zoom_step(state, delta),
            AppCommand::SetViewportSize { size } => handlers::view::set_viewport_size(state, size),
            AppCommand::JumpViewport { center, zoom } => handlers::view::jump(state, center, zoom),

            // === Koordinaten & Modus ===
            AppCommand::AddCoordinate { coordinate } => {
                handlers::workflow::add_coordinate(state, coordinate)
            }
            AppCommand::SetImportMode { mode } => handlers::workflow::set_mode(state, mode),
            AppCommand::ClearCoordinates => handlers::workflow::clear_coordinates(state),

            // === Vorschau ===
            AppCommand::ShowRectanglePreview => handlers::preview::show_rectangle(state),
            AppCommand::ShowPolylinePreview => handlers::preview::show_polyline(state),

            // === Routen-Optimierung ===
            AppCommand::RequestOptimize => handlers::optimize::request(state),
            AppCommand::ApplyOptimizedRoute { seq, points } => {
                handlers::optimize::apply(state, seq, points)
            }
            AppCommand::OptimizeFailed { seq, error } => {
                handlers::optimize::failed(state, seq, &error)
            }

            // === Import ===
            AppCommand::OpenImportDialog => handlers::dialog::open_import_dialog(state),
            AppCommand::CloseImportDialog => handlers::dialog::close_import_dialog(state),
            AppCommand::SubmitImport { form } => handlers::import::submit(state, form),
            AppCommand::FinishImport { layer_id } => handlers::import::finished(state, layer_id),
            AppCommand::ImportFailed { error } => handlers::import::failed(state, &error),

            // === Layer-Ansicht & -Liste ===
            AppCommand::EnterReadonlyView { layer_id } => {
                handlers::workflow::enter_readonly_view(state, layer_id)
            }
            AppCommand::LeaveReadonlyView => handlers::workflow::leave_readonly_view(state),
            AppCommand::RequestLayerDetails { layer_id } => {
                handlers::layers::request_details(state, layer_id)
            }
            AppCommand::ApplyLayerDetails { detail } => {
                handlers::layers::apply_details(state, detail)
            }
            AppCommand::LayerDetailsFailed { error } => {
                handlers::layers::details_failed(state, &error)
            }
            AppCommand::RequestLayerList => handlers::layers::request_list(state),
            AppCommand::ApplyLayerList { layers } => handlers::layers::apply_list(state, layers),
            AppCommand::LayerListFailed { error } => handlers::layers::list_failed(state, &error),
            AppCommand::RequestDeleteLayer { layer_id } => {
                handlers::layers::request_delete(state, layer_id)
            }
            AppCommand::FinishDeleteLayer { layer_id } => {
                handlers::layers::delete_finished(state, layer_id)
            }
            AppCommand::DeleteLayerFailed { error } => {
                handlers::layers::delete_failed(state, &error)
            }

            // === Meldungen ===
            AppCommand::DismissNotification => handlers::dialog::dismiss_notification(state),
        }

        Ok(())
    }
}
