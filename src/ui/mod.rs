//! UI-Komponenten: Menü, Kartenfläche, Panels, Dialoge, Status.

pub mod coordinate_input;
pub mod import_dialog;
pub mod layers_panel;
pub mod map_panel;
pub mod menu;
pub mod mode_panel;
pub mod status;

pub use coordinate_input::render_coordinate_input;
pub use import_dialog::show_import_dialog;
pub use layers_panel::render_layers_panel;
pub use map_panel::render_map_panel;
pub use menu::render_menu;
pub use mode_panel::render_mode_panel;
pub use status::{render_status_bar, show_notification};
