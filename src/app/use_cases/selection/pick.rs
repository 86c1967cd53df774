//! Use-Case: Punkt-Selektion per Klick.

use crate::app::PathEditState;

/// Selektiert den Punkt `index`.
///
/// - nicht-additiv auf den einzigen selektierten Punkt → abwählen
/// - additiv → Mitgliedschaft umschalten
/// - nicht-additiv auf einen anderen Punkt → Auswahl = {index}
///
/// Jede Punkt-Selektion hebt die Segment-Selektion auf. Ein Index außerhalb
/// des Pfads ändert nichts.
pub fn select_point(state: &PathEditState, index: usize, additive: bool) -> PathEditState {
    if index >= state.path.point_count() {
        log::debug!(
            "Punkt-Index {} außerhalb des Pfads ({} Punkte)",
            index,
            state.path.point_count()
        );
        return state.clone();
    }

    let mut next = state.clone();
    let selection = &mut next.session.selection;
    selection.selected_segment = None;

    if additive {
        if !selection.selected_points.shift_remove(&index) {
            selection.selected_points.insert(index);
        }
    } else if selection.selected_points.len() == 1 && selection.selected_points.contains(&index) {
        selection.selected_points.clear();
    } else {
        selection.selected_points.clear();
        selection.selected_points.insert(index);
    }
    next
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{PathPoint, VectorPath};

    fn three_points() -> PathEditState {
        PathEditState::editing(VectorPath::from_page_points(
            vec![
                PathPoint::new(0.0, 0.0),
                PathPoint::new(50.0, 0.0),
                PathPoint::new(100.0, 0.0),
            ],
            false,
        ))
    }

    fn selected(state: &PathEditState) -> Vec<usize> {
        state.session.selection.sorted_points()
    }

    #[test]
    fn test_reselecting_sole_point_clears_it() {
        let state = select_point(&three_points(), 1, false);
        assert_eq!(selected(&state), vec![1]);
        let state = select_point(&state, 1, false);
        assert!(selected(&state).is_empty());
    }

    #[test]
    fn test_additive_click_toggles_membership() {
        let state = select_point(&three_points(), 0, false);
        let state = select_point(&state, 2, true);
        assert_eq!(selected(&state), vec![0, 2]);
        let state = select_point(&state, 0, true);
        assert_eq!(selected(&state), vec![2]);
    }

    #[test]
    fn test_plain_click_replaces_selection_and_clears_segment() {
        let mut state = select_point(&three_points(), 0, false);
        state = select_point(&state, 1, true);
        state.session.selection.selected_segment = Some(0);
        let state = select_point(&state, 2, false);
        assert_eq!(selected(&state), vec![2]);
        assert_eq!(state.session.selection.selected_segment, None);
    }

    #[test]
    fn test_out_of_range_index_is_noop() {
        let before = select_point(&three_points(), 1, false);
        let after = select_point(&before, 7, false);
        assert_eq!(after, before);
    }

    #[test]
    fn test_input_state_is_not_mutated() {
        let before = three_points();
        let _ = select_point(&before, 1, false);
        assert!(before.session.selection.is_empty());
    }
}
