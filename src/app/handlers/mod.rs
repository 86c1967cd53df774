//! Feature-Handler für AppCommand-Verarbeitung.
//!
//! Jeder Handler gruppiert die Command-Ausführung eines Feature-Bereichs.
//! Der Controller dispatcht an die passende Handler-Funktion.

pub mod drag;
pub mod editing;
pub mod file_io;
pub mod pen;
pub mod selection;
pub mod view;

use crate::app::{AppState, PathEditState};

/// Übernimmt einen neuen Bearbeitungszustand und setzt das Bounds-Signal,
/// wenn sich Ursprung oder Ausdehnung spürbar geändert haben.
pub(crate) fn commit_edit(state: &mut AppState, next: PathEditState) {
    if state
        .edit
        .path
        .bounds
        .differs_from(&next.path.bounds, state.options.bounds_change_threshold)
    {
        state.bounds_changed = true;
    }
    state.edit = next;
}
