//! Vorschau-Daten eines Pfads im Entstehen.

use super::state::CreationSession;
use crate::core::{creation_bounds, CubicSegment, PathPoint, Renormalized};

/// Alles, was ein Host zum Zeichnen der Pen-Vorschau braucht.
#[derive(Debug, Clone, PartialEq)]
pub struct CreationPreview {
    /// Platzierte Punkte (Seitenkoordinaten)
    pub points: Vec<PathPoint>,
    /// Gummiband vom letzten Punkt zum Cursor (bzw. zum Startpunkt, wenn eingerastet)
    pub rubber_band: Option<CubicSegment>,
    /// Gepolsterte Bounds mit stabilem Ursprung
    pub bounds: Renormalized,
    /// Zeiger ist am Startpunkt eingerastet
    pub snapped: bool,
}

impl CreationSession {
    /// Vorschau für Placing/Accumulating, sonst `None`.
    pub fn preview(&self, padding: f64) -> Option<CreationPreview> {
        let drafting = self.drafting()?;
        let snapped = drafting.is_snapped();
        let rubber_band = match (drafting.press, drafting.cursor, drafting.points.last()) {
            (None, Some(cursor), Some(last)) => {
                let target = if snapped {
                    drafting.points[0]
                } else {
                    PathPoint::corner(cursor)
                };
                Some(CubicSegment::between(last, &target))
            }
            _ => None,
        };
        Some(CreationPreview {
            points: drafting.points.clone(),
            rubber_band,
            bounds: creation_bounds(&drafting.points, Some(drafting.stable_origin), padding),
            snapped,
        })
    }
}
