//! Zeigerbewegung: Platzierungs-Drag und Snap-Erkennung.

use super::state::{CreationSession, PenParams};
use crate::app::interaction::{scaled_radius, update_snap, SnapState};
use crate::core::PathPoint;
use glam::DVec2;

impl CreationSession {
    /// Zeiger bewegt.
    ///
    /// Bei gehaltener Taste formt die Bewegung die Steuerpunkte des zuletzt
    /// platzierten Punkts, sonst wird nur Cursor und Snap-Zustand nachgeführt.
    pub fn pointer_move(self, position: DVec2, break_symmetry: bool, params: &PenParams) -> Self {
        let (mut drafting, accumulating) = match self {
            Self::Placing(drafting) => (drafting, false),
            Self::Accumulating(drafting) => (drafting, true),
            other => return other,
        };

        drafting.cursor = Some(position);
        if let Some(press) = drafting.press {
            let threshold = scaled_radius(params.drag_threshold_px, params.zoom);
            if let Some(last) = drafting.points.last_mut() {
                *last = apply_placement_drag(last, press, position, break_symmetry, threshold);
            }
        } else if drafting.can_close() {
            let start = drafting.points[0].position;
            drafting.snap = update_snap(
                drafting.snap,
                position,
                start,
                params.zoom,
                params.snap_enter_px,
                params.snap_release_px,
            );
        } else {
            drafting.snap = SnapState::Free;
        }

        if accumulating {
            Self::Accumulating(drafting)
        } else {
            Self::Placing(drafting)
        }
    }
}

/// Formt einen frisch platzierten Punkt aus der Drag-Strecke `press` → `current`.
///
/// Unterhalb von `threshold` bleibt er ein Eckpunkt. Darüber folgt der
/// ausgehende Steuerpunkt dem Zeiger; der eingehende wird am Anker gespiegelt,
/// außer `break_symmetry` hält ihn an seiner bisherigen Position fest.
pub fn apply_placement_drag(
    point: &PathPoint,
    press: DVec2,
    current: DVec2,
    break_symmetry: bool,
    threshold: f64,
) -> PathPoint {
    if current.distance(press) < threshold {
        return point.without_handles();
    }
    let anchor = point.position;
    let mirrored = 2.0 * anchor - current;
    let cp1 = if break_symmetry {
        point.cp1.unwrap_or(mirrored)
    } else {
        mirrored
    };
    PathPoint::with_handles(anchor, cp1, current)
}
