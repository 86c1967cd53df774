//! Use-Case: Anker oder Steuerpunkt ziehen.

use super::ActiveDrag;
use crate::app::PathEditState;
use crate::core::{HandleRef, PathPoint};
use glam::DVec2;

/// Setzt den gegriffenen Teil eines Punkts auf `position`.
///
/// - Anker: beide Steuerpunkte wandern starr mit.
/// - Steuerpunkt: wird direkt gesetzt; ohne `break_symmetry` wird der
///   gegenüberliegende (falls vorhanden) am Anker gespiegelt.
///
/// Ungültige Indizes liefern die Punkte unverändert zurück.
pub fn update_from_handle_drag(
    points: &[PathPoint],
    handle: HandleRef,
    position: DVec2,
    break_symmetry: bool,
) -> Vec<PathPoint> {
    let mut result = points.to_vec();
    let Some(point) = result.get_mut(handle.point_index) else {
        return result;
    };

    let Some(opposite_role) = handle.role.opposite() else {
        *point = point.translated(position - point.position);
        return result;
    };

    let mirrored = 2.0 * point.position - position;
    if let Some(dragged) = point.control_mut(handle.role) {
        *dragged = Some(position);
    }
    if !break_symmetry {
        if let Some(opposite) = point.control_mut(opposite_role).and_then(Option::as_mut) {
            *opposite = mirrored;
        }
    }
    result
}

/// Wendet einen Drag-Frame an (ohne Renormalisierung).
pub fn update_handle_drag(
    state: &PathEditState,
    drag: &ActiveDrag,
    position: DVec2,
    break_symmetry: bool,
) -> PathEditState {
    let ActiveDrag::Handle { handle, .. } = drag else {
        return state.clone();
    };
    let mut next = state.clone();
    next.path_mut().points =
        update_from_handle_drag(&state.path.points, *handle, position, break_symmetry);
    next
}
