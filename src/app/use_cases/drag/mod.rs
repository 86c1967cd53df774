//! Use-Case-Funktionen für Drags im Bearbeitungsmodus.
//!
//! - `handle_drag`: Anker oder Steuerpunkt ziehen (mit Spiegelung)
//! - `segment_drag`: Segment durch Parallelverschiebung seiner Steuerpunkte formen
//!
//! Während eines Drags werden keine Bounds nachgeführt; `end_drag`
//! renormalisiert genau einmal.

mod handle_drag;
mod segment_drag;

pub use handle_drag::{update_from_handle_drag, update_handle_drag};
pub use segment_drag::{drag_segment, update_segment_drag};

use crate::app::PathEditState;
use crate::core::{have_bounds_changed, HandleRef, HandleRole, PathPoint};
use glam::DVec2;
use std::sync::Arc;

/// Laufender Drag mit den Punkten vor Drag-Beginn.
#[derive(Debug, Clone, PartialEq)]
pub enum ActiveDrag {
    /// Anker oder Steuerpunkt
    Handle {
        handle: HandleRef,
        initial_points: Vec<PathPoint>,
    },
    /// Segment, gegriffen an `press` (lokale Koordinaten)
    Segment {
        segment_index: usize,
        press: DVec2,
        initial_points: Vec<PathPoint>,
    },
}

impl ActiveDrag {
    /// Punkte vor Drag-Beginn (lokale Koordinaten).
    pub fn initial_points(&self) -> &[PathPoint] {
        match self {
            Self::Handle { initial_points, .. } | Self::Segment { initial_points, .. } => {
                initial_points
            }
        }
    }
}

/// Startet einen Anker-/Steuerpunkt-Drag.
///
/// `None` wenn der Punkt oder der gegriffene Steuerpunkt nicht existiert.
pub fn begin_handle_drag(state: &PathEditState, handle: HandleRef) -> Option<ActiveDrag> {
    let point = state.path.points.get(handle.point_index)?;
    let exists = match handle.role {
        HandleRole::Anchor => true,
        HandleRole::In => point.cp1.is_some(),
        HandleRole::Out => point.cp2.is_some(),
    };
    if !exists {
        log::debug!("Drag abgelehnt: {:?} existiert nicht", handle);
        return None;
    }
    Some(ActiveDrag::Handle {
        handle,
        initial_points: state.path.points.clone(),
    })
}

/// Startet einen Segment-Drag.
pub fn begin_segment_drag(
    state: &PathEditState,
    segment_index: usize,
    press: DVec2,
) -> Option<ActiveDrag> {
    if segment_index >= state.path.segment_count() {
        log::debug!("Segment-Drag abgelehnt: Segment {} existiert nicht", segment_index);
        return None;
    }
    Some(ActiveDrag::Segment {
        segment_index,
        press,
        initial_points: state.path.points.clone(),
    })
}

/// Beendet einen Drag: renormalisiert einmal und meldet, ob sich die Bounds geändert haben.
pub fn end_drag(state: &PathEditState, drag: &ActiveDrag, threshold: f64) -> (PathEditState, bool) {
    let changed = have_bounds_changed(
        drag.initial_points(),
        &state.path.points,
        state.path.is_closed,
        threshold,
    );
    let mut next = state.clone();
    next.path = Arc::new(state.path.renormalized());
    (next, changed)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::bounds::BOUNDS_CHANGE_THRESHOLD;
    use crate::core::VectorPath;

    fn line() -> PathEditState {
        PathEditState::editing(VectorPath::from_page_points(
            vec![PathPoint::new(10.0, 10.0), PathPoint::new(110.0, 10.0)],
            false,
        ))
    }

    #[test]
    fn test_begin_rejects_missing_handle() {
        let state = line();
        assert!(begin_handle_drag(&state, HandleRef::new(0, HandleRole::Out)).is_none());
        assert!(begin_handle_drag(&state, HandleRef::new(5, HandleRole::Anchor)).is_none());
        assert!(begin_handle_drag(&state, HandleRef::new(1, HandleRole::Anchor)).is_some());
        assert!(begin_segment_drag(&state, 1, DVec2::ZERO).is_none());
    }

    #[test]
    fn test_end_drag_renormalizes_once_and_reports_change() {
        let state = line();
        let handle = HandleRef::new(0, HandleRole::Anchor);
        let drag = begin_handle_drag(&state, handle).expect("drag");

        let moved = update_handle_drag(&state, &drag, DVec2::new(-20.0, 0.0), false);
        // Während des Drags bleibt der Ursprung stehen
        assert_eq!(moved.path.bounds, state.path.bounds);

        let (settled, changed) = end_drag(&moved, &drag, BOUNDS_CHANGE_THRESHOLD);
        assert!(changed);
        assert_eq!(settled.path.bounds.origin, DVec2::new(-10.0, 10.0));
        assert_eq!(settled.path.page_points()[0].position, DVec2::new(-10.0, 10.0));
    }

    #[test]
    fn test_end_drag_without_movement_reports_no_change() {
        let state = line();
        let drag = begin_handle_drag(&state, HandleRef::new(1, HandleRole::Anchor)).expect("drag");
        let (settled, changed) = end_drag(&state, &drag, BOUNDS_CHANGE_THRESHOLD);
        assert!(!changed);
        assert_eq!(settled, state);
    }
}
