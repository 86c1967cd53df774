//! Use-Case: Segment durch Parallelverschiebung seiner Steuerpunkte formen.

use super::ActiveDrag;
use crate::app::PathEditState;
use crate::core::path::segment_endpoints;
use crate::core::PathPoint;
use glam::DVec2;

/// Verschiebt die beiden Steuerpunkte, die Segment `segment_index` begrenzen
/// (cp2 des Start-, cp1 des Endpunkts), um `delta` relativ zu `initial_points`.
///
/// Fehlende Steuerpunkte starten am Anker. Die Tangenten der Nachbarsegmente
/// bleiben unberührt. Passt `initial_points` nicht zum Pfad, ändert sich nichts.
pub fn drag_segment(
    state: &PathEditState,
    segment_index: usize,
    initial_points: &[PathPoint],
    delta: DVec2,
) -> PathEditState {
    let count = state.path.point_count();
    let endpoints = segment_endpoints(count, segment_index, state.path.is_closed);
    let Some((start, end)) = endpoints.filter(|_| initial_points.len() == count) else {
        log::debug!("Segment-Drag ignoriert: Segment {} ungültig", segment_index);
        return state.clone();
    };

    let start_handle = initial_points[start]
        .cp2
        .unwrap_or(initial_points[start].position);
    let end_handle = initial_points[end]
        .cp1
        .unwrap_or(initial_points[end].position);

    let mut next = state.clone();
    let points = &mut next.path_mut().points;
    points[start].cp2 = Some(start_handle + delta);
    points[end].cp1 = Some(end_handle + delta);
    next
}

/// Wendet einen Segment-Drag-Frame an; `position` ist die aktuelle Zeigerposition.
pub fn update_segment_drag(state: &PathEditState, drag: &ActiveDrag, position: DVec2) -> PathEditState {
    let ActiveDrag::Segment {
        segment_index,
        press,
        initial_points,
    } = drag
    else {
        return state.clone();
    };
    drag_segment(state, *segment_index, initial_points, position - *press)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::VectorPath;

    fn three_points() -> PathEditState {
        PathEditState::editing(VectorPath::from_page_points(
            vec![
                PathPoint::new(0.0, 0.0),
                PathPoint {
                    position: DVec2::new(100.0, 0.0),
                    cp1: Some(DVec2::new(80.0, 0.0)),
                    cp2: Some(DVec2::new(120.0, 0.0)),
                },
                PathPoint::new(200.0, 0.0),
            ],
            false,
        ))
    }

    #[test]
    fn test_linear_segment_gains_translated_handles() {
        let state = three_points();
        let initial = state.path.points.clone();
        let next = drag_segment(&state, 0, &initial, DVec2::new(0.0, 30.0));
        let points = &next.path.points;
        assert_eq!(points[0].cp2, Some(initial[0].position + DVec2::new(0.0, 30.0)));
        assert_eq!(points[1].cp1, Some(DVec2::new(80.0, 30.0)));
        // Ausgehender Steuerpunkt des Nachbarsegments bleibt
        assert_eq!(points[1].cp2, initial[1].cp2);
    }

    #[test]
    fn test_delta_is_relative_to_initial_points() {
        let state = three_points();
        let drag = ActiveDrag::Segment {
            segment_index: 1,
            press: DVec2::new(150.0, 0.0),
            initial_points: state.path.points.clone(),
        };
        let first = update_segment_drag(&state, &drag, DVec2::new(150.0, 10.0));
        let second = update_segment_drag(&first, &drag, DVec2::new(150.0, 20.0));
        assert_eq!(second.path.points[1].cp2, Some(DVec2::new(120.0, 20.0)));
        assert_eq!(second.path.points[2].cp1, Some(DVec2::new(200.0, 20.0)));
    }

    #[test]
    fn test_mismatched_snapshot_is_noop() {
        let state = three_points();
        assert_eq!(drag_segment(&state, 0, &[], DVec2::ONE), state);
    }
}
