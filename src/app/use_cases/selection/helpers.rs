//! Hilfs-Übergänge für die Selektion.

use crate::app::PathEditState;

/// Hebt Punkt- und Segment-Selektion auf.
pub fn clear_selection(state: &PathEditState) -> PathEditState {
    let mut next = state.clone();
    next.session.selection.clear();
    next
}

/// Selektiert alle Punkte (Segment-Selektion wird aufgehoben).
pub fn select_all_points(state: &PathEditState) -> PathEditState {
    let mut next = state.clone();
    let selection = &mut next.session.selection;
    selection.selected_segment = None;
    selection.selected_points = (0..state.path.point_count()).collect();
    next
}
