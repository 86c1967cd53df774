//! Handler für Zoom und Laufzeit-Optionen.

use crate::app::AppState;
use crate::shared::EditorOptions;

/// Übernimmt den Zoom des Hosts (ungültige Werte werden ignoriert).
pub fn set_zoom(state: &mut AppState, zoom: f64) {
    state.view.set_zoom(zoom);
}

/// Übernimmt neue Laufzeit-Optionen.
pub fn apply_options(state: &mut AppState, options: EditorOptions) {
    state.options = options;
    log::info!("Optionen übernommen");
}
