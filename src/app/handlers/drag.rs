//! Handler für Anker-, Steuerpunkt- und Segment-Drags.

use crate::app::use_cases::drag::{self, ActiveDrag};
use crate::app::AppState;
use crate::core::HandleRef;
use glam::DVec2;

/// Startet einen Anker-/Steuerpunkt-Drag (nur im Bearbeitungsmodus).
pub fn begin_handle(state: &mut AppState, handle: HandleRef) {
    end(state);
    if !state.edit.session.is_editing {
        log::debug!("Drag ignoriert: Pfad nicht im Bearbeitungsmodus");
        return;
    }
    state.editor.drag = drag::begin_handle_drag(&state.edit, handle);
}

/// Startet einen Segment-Drag an der Drück-Position.
pub fn begin_segment(state: &mut AppState, segment_index: usize, press: DVec2) {
    end(state);
    if !state.edit.session.is_editing {
        log::debug!("Segment-Drag ignoriert: Pfad nicht im Bearbeitungsmodus");
        return;
    }
    state.editor.drag = drag::begin_segment_drag(&state.edit, segment_index, press);
}

/// Führt den laufenden Drag nach (ohne Renormalisierung).
pub fn update(state: &mut AppState, local_pos: DVec2, break_symmetry: bool) {
    let Some(active) = state.editor.drag.as_ref() else {
        return;
    };
    let next = match active {
        ActiveDrag::Handle { .. } => {
            drag::update_handle_drag(&state.edit, active, local_pos, break_symmetry)
        }
        ActiveDrag::Segment { .. } => drag::update_segment_drag(&state.edit, active, local_pos),
    };
    state.edit = next;
}

/// Beendet den laufenden Drag; renormalisiert einmal und setzt ggf. das Bounds-Signal.
pub fn end(state: &mut AppState) {
    let Some(active) = state.editor.drag.take() else {
        return;
    };
    let (next, changed) = drag::end_drag(&state.edit, &active, state.options.bounds_change_threshold);
    state.edit = next;
    if changed {
        state.bounds_changed = true;
    }
}
