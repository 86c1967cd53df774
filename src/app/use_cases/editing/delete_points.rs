//! Use-Case: Selektierte Punkte löschen.

use super::settle;
use crate::app::PathEditState;

/// Ein Pfad mit mindestens zwei Punkten darf nicht unter zwei Punkte fallen.
const MIN_REMAINING_POINTS: usize = 2;

/// Löscht alle selektierten Punkte.
///
/// Berücksichtigt nur gültige Indizes. Leere Selektion oder ein Ergebnis mit
/// weniger als zwei Punkten (bzw. ein leerer Pfad) ändern nichts. Gelöscht wird
/// absteigend, danach wird die Selektion geleert und der Pfad renormalisiert.
pub fn delete_points(state: &PathEditState) -> PathEditState {
    let count = state.path.point_count();
    let mut indices: Vec<usize> = state
        .session
        .selection
        .selected_points
        .iter()
        .copied()
        .filter(|&index| index < count)
        .collect();

    if indices.is_empty() {
        log::debug!("Nichts zum Löschen selektiert");
        return state.clone();
    }

    let remaining = count - indices.len();
    if remaining < MIN_REMAINING_POINTS.min(count) {
        log::debug!(
            "Löschen von {} Punkten abgelehnt: nur {} von {} blieben übrig",
            indices.len(),
            remaining,
            count
        );
        return state.clone();
    }

    indices.sort_unstable_by(|a, b| b.cmp(a));

    let mut next = state.clone();
    let path = next.path_mut();
    for &index in &indices {
        path.points.remove(index);
    }
    next.session.selection.clear();
    settle(&mut next);

    log::info!("{} Punkte gelöscht, {} verbleiben", indices.len(), remaining);
    next
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{PathPoint, VectorPath};
    use glam::DVec2;

    fn four_points() -> PathEditState {
        PathEditState::editing(VectorPath::from_page_points(
            vec![
                PathPoint::new(0.0, 0.0),
                PathPoint::new(40.0, 10.0),
                PathPoint::new(80.0, 60.0),
                PathPoint::new(120.0, 30.0),
            ],
            false,
        ))
    }

    fn with_selection(mut state: PathEditState, indices: &[usize]) -> PathEditState {
        state.session.selection.selected_points = indices.iter().copied().collect();
        state
    }

    #[test]
    fn test_deletes_selected_points_in_any_order() {
        let state = with_selection(four_points(), &[3, 1]);
        let next = delete_points(&state);
        assert_eq!(
            next.path.page_points(),
            vec![PathPoint::new(0.0, 0.0), PathPoint::new(80.0, 60.0)]
        );
        assert!(next.session.selection.is_empty());
        assert_eq!(next.path.bounds.width, 80.0);
        assert_eq!(next.path.bounds.height, 60.0);
    }

    #[test]
    fn test_never_drops_below_two_points() {
        let state = with_selection(four_points(), &[0, 1, 2]);
        let next = delete_points(&state);
        assert_eq!(next, state);
    }

    #[test]
    fn test_empty_selection_is_noop() {
        let state = four_points();
        assert_eq!(delete_points(&state), state);
    }

    #[test]
    fn test_stale_indices_are_ignored_by_the_guard() {
        // Index 9 existiert nicht und zählt nicht gegen die Mindestanzahl
        let state = with_selection(four_points(), &[0, 1, 9]);
        let next = delete_points(&state);
        assert_eq!(next.path.point_count(), 2);
        assert_eq!(next.path.bounds.origin, DVec2::new(80.0, 30.0));
    }

    #[test]
    fn test_only_invalid_indices_is_noop() {
        let state = with_selection(four_points(), &[4, 5]);
        assert_eq!(delete_points(&state), state);
    }
}
