//! Handler für Bearbeitungsmodus, Punkt-Bearbeitung und Editor-Werkzeug.

use super::commit_edit;
use crate::app::state::EditorTool;
use crate::app::use_cases;
use crate::app::AppState;

/// Aktiviert ein Editor-Werkzeug.
///
/// Ein laufender Drag wird beendet. Verlässt man das Pen-Tool mitten im
/// Zeichnen, wird die Sitzung verworfen.
pub fn set_editor_tool(state: &mut AppState, tool: EditorTool) {
    super::drag::end(state);
    if tool != EditorTool::Pen && state.editor.pen.is_drafting() {
        super::pen::cancel(state);
    }
    if tool == EditorTool::Pen {
        state.edit = use_cases::editing::exit_edit(&state.edit);
    }
    state.editor.active_tool = tool;
    log::info!("Editor-Werkzeug: {:?}", tool);
}

pub fn enter_edit(state: &mut AppState) {
    state.edit = use_cases::editing::enter_edit(&state.edit);
}

/// Verlässt den Bearbeitungsmodus (ein laufender Drag wird vorher abgeschlossen).
pub fn exit_edit(state: &mut AppState) {
    super::drag::end(state);
    state.edit = use_cases::editing::exit_edit(&state.edit);
}

pub fn toggle_edit(state: &mut AppState) {
    if state.edit.session.is_editing {
        exit_edit(state);
    } else {
        enter_edit(state);
    }
}

/// Schaltet einen Punkt zwischen Ecke und glatt um.
pub fn toggle_point_type(state: &mut AppState, index: usize) {
    let length = state.options.smooth_handle_length();
    let next = use_cases::editing::toggle_point_type(&state.edit, index, length);
    commit_edit(state, next);
}

/// Fügt einen Punkt auf einem Segment ein.
pub fn insert_point(state: &mut AppState, segment_index: usize, t: f64) {
    let ratio = state.options.split_handle_ratio;
    let next = use_cases::editing::insert_point_on_segment(&state.edit, segment_index, t, ratio);
    commit_edit(state, next);
}

/// Löscht alle aktuell selektierten Punkte.
pub fn delete_selected(state: &mut AppState) {
    let next = use_cases::editing::delete_points(&state.edit);
    commit_edit(state, next);
}

/// Schließt bzw. öffnet den Pfad.
pub fn toggle_closed(state: &mut AppState) {
    let next = use_cases::editing::toggle_closed(&state.edit);
    commit_edit(state, next);
}
