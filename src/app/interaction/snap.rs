//! Snap-to-Start mit Hysterese.
//!
//! Einrasten bei Abstand < Eintrittsschwelle zum Ziel; Lösen erst, wenn sich
//! der Zeiger mehr als die Austrittsschwelle von der Einrast-Position entfernt.
//! Die Totzone dazwischen verhindert Flackern an der Grenze.

use super::scaled_radius;
use glam::DVec2;

/// Snap-Zustand des Pen-Tools.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum SnapState {
    #[default]
    Free,
    /// Eingerastet; `engaged_at` ist die Zeigerposition beim Einrasten
    Snapped { engaged_at: DVec2 },
}

impl SnapState {
    pub fn is_snapped(&self) -> bool {
        matches!(self, Self::Snapped { .. })
    }
}

/// Berechnet den nächsten Snap-Zustand.
pub fn update_snap(
    current: SnapState,
    cursor: DVec2,
    target: DVec2,
    zoom: f64,
    enter_px: f64,
    release_px: f64,
) -> SnapState {
    match current {
        SnapState::Free => {
            if cursor.distance(target) < scaled_radius(enter_px, zoom) {
                SnapState::Snapped { engaged_at: cursor }
            } else {
                SnapState::Free
            }
        }
        SnapState::Snapped { engaged_at } => {
            if cursor.distance(engaged_at) > scaled_radius(release_px, zoom) {
                SnapState::Free
            } else {
                current
            }
        }
    }
}
