//! Use-Case: Bearbeitungsmodus betreten, verlassen, umschalten.

use crate::app::PathEditState;

/// Betritt den Bearbeitungsmodus.
///
/// Die bisherige Punkt-Selektion bleibt erhalten, die Segment-Selektion nicht.
pub fn enter_edit(state: &PathEditState) -> PathEditState {
    let mut next = state.clone();
    next.session.is_editing = true;
    next.session.selection.selected_segment = None;
    next
}

/// Verlässt den Bearbeitungsmodus und leert die Selektion.
pub fn exit_edit(state: &PathEditState) -> PathEditState {
    let mut next = state.clone();
    next.session.is_editing = false;
    next.session.selection.clear();
    next.session.selection.hover = None;
    next
}

pub fn toggle_edit(state: &PathEditState) -> PathEditState {
    if state.session.is_editing {
        exit_edit(state)
    } else {
        enter_edit(state)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{PathPoint, VectorPath};

    fn selected_state() -> PathEditState {
        let mut state = PathEditState::new(VectorPath::from_page_points(
            vec![PathPoint::new(0.0, 0.0), PathPoint::new(10.0, 0.0)],
            false,
        ));
        state.session.selection.selected_points.insert(1);
        state.session.selection.selected_segment = Some(0);
        state
    }

    #[test]
    fn test_enter_keeps_points_and_drops_segment() {
        let state = enter_edit(&selected_state());
        assert!(state.session.is_editing);
        assert_eq!(state.session.selection.sorted_points(), vec![1]);
        assert_eq!(state.session.selection.selected_segment, None);
    }

    #[test]
    fn test_exit_clears_everything() {
        let state = toggle_edit(&enter_edit(&selected_state()));
        assert!(!state.session.is_editing);
        assert!(state.session.selection.is_empty());
    }
}
