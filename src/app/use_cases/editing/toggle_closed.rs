//! Use-Case: Pfad während der Bearbeitung schließen oder öffnen.

use super::settle;
use crate::app::PathEditState;

/// Kehrt `is_closed` um und renormalisiert (das Schließsegment kann die Bounds ändern).
///
/// Unter zwei Punkten ändert sich nichts.
pub fn toggle_closed(state: &PathEditState) -> PathEditState {
    if state.path.point_count() < 2 {
        log::debug!("Schließen/Öffnen braucht mindestens 2 Punkte");
        return state.clone();
    }
    let mut next = state.clone();
    let path = next.path_mut();
    path.is_closed = !path.is_closed;
    if next.session.selection.selected_segment.is_some_and(|index| index >= next.path.segment_count()) {
        next.session.selection.selected_segment = None;
    }
    settle(&mut next);
    next
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{PathPoint, VectorPath};
    use approx::assert_abs_diff_eq;
    use glam::DVec2;

    #[test]
    fn test_closing_includes_curved_closing_segment_in_bounds() {
        let first = PathPoint {
            position: DVec2::new(0.0, 0.0),
            cp1: Some(DVec2::new(-40.0, 0.0)),
            cp2: None,
        };
        let state = PathEditState::editing(VectorPath::from_page_points(
            vec![first, PathPoint::new(100.0, 0.0), PathPoint::new(50.0, 100.0)],
            false,
        ));
        let closed = toggle_closed(&state);
        assert!(closed.path.is_closed);
        assert!(closed.path.bounds.origin.x < 0.0);
        let page = closed.path.page_points();
        assert_abs_diff_eq!(page[1].position.x, 100.0, epsilon = 1e-9);
        assert_abs_diff_eq!(page[1].position.y, 0.0, epsilon = 1e-9);

        let reopened = toggle_closed(&closed);
        assert!(!reopened.path.is_closed);
        assert_eq!(reopened.path.bounds.origin, DVec2::ZERO);
    }

    #[test]
    fn test_selected_closing_segment_is_dropped_on_open() {
        let mut state = PathEditState::editing(VectorPath::from_page_points(
            vec![
                PathPoint::new(0.0, 0.0),
                PathPoint::new(10.0, 0.0),
                PathPoint::new(10.0, 10.0),
            ],
            true,
        ));
        state.session.selection.selected_segment = Some(2);
        let opened = toggle_closed(&state);
        assert_eq!(opened.session.selection.selected_segment, None);
    }

    #[test]
    fn test_single_point_is_noop() {
        let state = PathEditState::editing(VectorPath::from_page_points(
            vec![PathPoint::new(1.0, 1.0)],
            false,
        ));
        assert_eq!(toggle_closed(&state), state);
    }
}
