//! Geteilte Typen für layer-übergreifende Verträge.

pub mod options;

pub use options::EditorOptions;
pub use options::{DEFAULT_CENTER_LAT, DEFAULT_CENTER_LNG, DEFAULT_ZOOM};
