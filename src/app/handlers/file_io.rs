//! Handler für die Übernahme von Pfaden aus dem Host.

use crate::app::{AppState, PathEditState};
use crate::core::VectorPath;
use crate::json;
use anyhow::Context;

/// Übernimmt einen Pfad (renormalisiert, außerhalb des Bearbeitungsmodus).
///
/// Laufende Drags und Pen-Sitzungen werden verworfen.
pub fn load_path(state: &mut AppState, path: VectorPath) {
    state.editor.drag = None;
    state.editor.pen = Default::default();
    state.edit = PathEditState::new(path.renormalized());
    state.bounds_changed = true;
    log::info!("Pfad geladen: {} Punkte", state.edit.path.point_count());
}

/// Übernimmt einen Pfad aus seiner JSON-Persistenzform.
pub fn load_path_json(state: &mut AppState, json: &str) -> anyhow::Result<()> {
    let path = json::parse_path_json(json).context("Pfad-JSON konnte nicht gelesen werden")?;
    load_path(state, path);
    Ok(())
}
