//! Use-Case: Segment-Selektion per Klick.

use crate::app::PathEditState;

/// Selektiert Segment `index` und hebt die Punkt-Selektion auf.
///
/// Indizes außerhalb des Pfads (inkl. fehlendem Schließsegment) ändern nichts.
/// Negative Host-Indizes werden bereits beim Intent-Mapping verworfen.
pub fn select_segment(state: &PathEditState, index: usize) -> PathEditState {
    if index >= state.path.segment_count() {
        log::debug!(
            "Segment-Index {} außerhalb des Pfads ({} Segmente)",
            index,
            state.path.segment_count()
        );
        return state.clone();
    }

    let mut next = state.clone();
    next.session.selection.selected_points.clear();
    next.session.selection.selected_segment = Some(index);
    next
}
