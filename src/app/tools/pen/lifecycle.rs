//! Lifecycle-Übergänge der Pen-Sitzung (drücken, loslassen, bestätigen, abbrechen).

use super::state::{CreationSession, Drafting};
use crate::core::{PathPoint, VectorPath};
use glam::DVec2;

impl CreationSession {
    /// Zeiger gedrückt: Punkt platzieren oder am Startpunkt schließen.
    ///
    /// Ist der Zeiger ab drei Punkten am Startpunkt eingerastet, wird der Pfad
    /// geschlossen und die Sitzung beendet. Terminale Zustände bleiben unverändert.
    pub fn pointer_down(self, position: DVec2) -> Self {
        match self {
            Self::Idle => Self::Placing(Drafting::start(position)),
            Self::Placing(drafting) | Self::Accumulating(drafting) => {
                if drafting.is_snapped() {
                    return finish(drafting, true);
                }
                let mut drafting = drafting;
                drafting.points.push(PathPoint::corner(position));
                drafting.press = Some(position);
                drafting.cursor = Some(position);
                drafting.snap = Default::default();
                Self::Accumulating(drafting)
            }
            terminal => terminal,
        }
    }

    /// Zeiger losgelassen: Platzierungs-Drag endet, der Punkt ist fixiert.
    pub fn pointer_up(self) -> Self {
        match self {
            Self::Placing(mut drafting) => {
                drafting.press = None;
                Self::Placing(drafting)
            }
            Self::Accumulating(mut drafting) => {
                drafting.press = None;
                Self::Accumulating(drafting)
            }
            other => other,
        }
    }

    /// Beendet die Sitzung mit einem offenen Pfad.
    ///
    /// Auch ein einzelner Punkt ergibt einen (Ein-Punkt-)Pfad. Ohne Punkte
    /// bleibt die Sitzung Idle.
    pub fn confirm(self) -> Self {
        match self {
            Self::Placing(drafting) | Self::Accumulating(drafting) => finish(drafting, false),
            other => other,
        }
    }

    /// Verwirft alle gesammelten Punkte.
    pub fn cancel(self) -> Self {
        match self {
            Self::Idle | Self::Placing(_) | Self::Accumulating(_) => {
                log::debug!("Pen-Sitzung abgebrochen");
                Self::Cancelled
            }
            terminal => terminal,
        }
    }
}

fn finish(drafting: Drafting, is_closed: bool) -> CreationSession {
    let point_count = drafting.points.len();
    let path = VectorPath::from_page_points(drafting.points, is_closed);
    log::info!(
        "Pfad erstellt: {} Punkte, {}",
        point_count,
        if is_closed { "geschlossen" } else { "offen" }
    );
    CreationSession::Completed(path)
}
