//! Handler für das Pen-Tool.

use crate::app::state::EditorTool;
use crate::app::tools::pen::{CreationSession, PenParams};
use crate::app::{AppState, PathEditState};
use glam::DVec2;

/// Führt einen Pen-Übergang aus und übernimmt terminale Zustände.
fn transition(state: &mut AppState, step: impl FnOnce(CreationSession, &PenParams) -> CreationSession) {
    let params = PenParams::from_options(&state.options, state.view.zoom);
    let session = std::mem::take(&mut state.editor.pen);
    state.editor.pen = step(session, &params);
    settle_session(state);
}

/// Completed → Pfad geht in die Bearbeitung über; Cancelled → zurück zu Idle.
fn settle_session(state: &mut AppState) {
    match std::mem::take(&mut state.editor.pen) {
        CreationSession::Completed(path) => {
            state.edit = PathEditState::editing(path);
            state.editor.active_tool = EditorTool::Select;
            state.bounds_changed = true;
            log::info!("Neuer Pfad an die Bearbeitung übergeben");
        }
        CreationSession::Cancelled => {}
        other => state.editor.pen = other,
    }
}

pub fn pointer_down(state: &mut AppState, pos: DVec2) {
    transition(state, |session, _| session.pointer_down(pos));
}

pub fn pointer_move(state: &mut AppState, pos: DVec2, break_symmetry: bool) {
    transition(state, |session, params| {
        session.pointer_move(pos, break_symmetry, params)
    });
}

pub fn pointer_up(state: &mut AppState) {
    transition(state, |session, _| session.pointer_up());
}

/// Übernimmt den offenen Pfad.
pub fn confirm(state: &mut AppState) {
    transition(state, |session, _| session.confirm());
}

/// Verwirft die laufende Sitzung.
pub fn cancel(state: &mut AppState) {
    transition(state, |session, _| session.cancel());
}
