//! Use-Case: Punkt zwischen Eckpunkt und glattem Punkt umschalten.

use super::settle;
use crate::app::PathEditState;
use crate::core::path::has_closing_segment;
use crate::core::PathPoint;
use glam::DVec2;

/// Schaltet den Punkttyp um.
///
/// Ein Punkt mit Steuerpunkten verliert beide (Eckpunkt). Ein Eckpunkt erhält
/// symmetrische Steuerpunkte der Länge `handle_length` entlang `smooth_direction`.
pub fn toggle_point_type(state: &PathEditState, index: usize, handle_length: f64) -> PathEditState {
    let Some(point) = state.path.points.get(index).copied() else {
        log::debug!("Punkttyp-Wechsel: Index {} außerhalb des Pfads", index);
        return state.clone();
    };

    let toggled = if point.has_handles() {
        point.without_handles()
    } else {
        let direction = smooth_direction(&state.path.points, index, state.path.is_closed);
        let offset = direction * handle_length;
        PathPoint::with_handles(point.position, point.position - offset, point.position + offset)
    };

    let mut next = state.clone();
    next.path_mut().points[index] = toggled;
    settle(&mut next);
    next
}

/// Richtung synthetisierter Steuerpunkte für Punkt `index`.
///
/// Beide Nachbarn (bei geschlossenem Pfad mit Umlauf) → normalize(next − prev);
/// ein Nachbar → Richtung von bzw. zu diesem; sonst horizontal.
pub fn smooth_direction(points: &[PathPoint], index: usize, is_closed: bool) -> DVec2 {
    let count = points.len();
    let wraps = has_closing_segment(count, is_closed);
    let prev = if index > 0 {
        points.get(index - 1)
    } else if wraps {
        points.last()
    } else {
        None
    };
    let next = if index + 1 < count {
        points.get(index + 1)
    } else if wraps {
        points.first()
    } else {
        None
    };
    let Some(anchor) = points.get(index).map(|p| p.position) else {
        return DVec2::X;
    };

    let candidates = [
        prev.zip(next).map(|(p, n)| n.position - p.position),
        next.map(|n| n.position - anchor),
        prev.map(|p| anchor - p.position),
    ];
    candidates
        .into_iter()
        .flatten()
        .find_map(|v| v.try_normalize())
        .unwrap_or(DVec2::X)
}
