//! State-Definitionen des Pen-Tools.

use crate::app::interaction::SnapState;
use crate::core::{PathPoint, VectorPath};
use crate::shared::EditorOptions;
use glam::DVec2;

/// Gemeinsame Daten eines Pfads im Entstehen.
#[derive(Debug, Clone, PartialEq)]
pub struct Drafting {
    /// Platzierte Punkte (Seitenkoordinaten)
    pub points: Vec<PathPoint>,
    /// Stabiler Ursprung für die Vorschau-Bounds (erster Punkt)
    pub stable_origin: DVec2,
    /// Drück-Position solange die Taste nach einer Platzierung gehalten wird
    pub press: Option<DVec2>,
    /// Letzte bekannte Zeigerposition
    pub cursor: Option<DVec2>,
    /// Snap-to-Start (erst ab 3 Punkten aktiv)
    pub snap: SnapState,
}

impl Drafting {
    /// Beginnt mit einem Eckpunkt an der Drück-Position.
    pub(crate) fn start(position: DVec2) -> Self {
        Self {
            points: vec![PathPoint::corner(position)],
            stable_origin: position,
            press: Some(position),
            cursor: Some(position),
            snap: SnapState::Free,
        }
    }

    /// Snap-to-Start ist erst mit einem möglichen Schließsegment sinnvoll.
    pub fn can_close(&self) -> bool {
        self.points.len() >= 3
    }

    /// True wenn der Zeiger am Startpunkt eingerastet ist.
    pub fn is_snapped(&self) -> bool {
        self.can_close() && self.snap.is_snapped()
    }
}

/// Zustand einer Pen-Sitzung.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum CreationSession {
    /// Kein Pfad in Arbeit
    #[default]
    Idle,
    /// Erster Punkt platziert (Eck- oder glatter Punkt je nach Drag)
    Placing(Drafting),
    /// Mindestens zwei Punkte; Vorschau und Snap-Erkennung
    Accumulating(Drafting),
    /// Fertiger Pfad (terminal, Übergabe an die Bearbeitung)
    Completed(VectorPath),
    /// Abgebrochen (terminal, alles verworfen)
    Cancelled,
}

impl CreationSession {
    /// Daten des Pfads im Entstehen (nur Placing/Accumulating).
    pub fn drafting(&self) -> Option<&Drafting> {
        match self {
            Self::Placing(drafting) | Self::Accumulating(drafting) => Some(drafting),
            _ => None,
        }
    }

    /// True während Punkte gesammelt werden.
    pub fn is_drafting(&self) -> bool {
        self.drafting().is_some()
    }

    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Completed(_) | Self::Cancelled)
    }

    /// Anzahl bisher platzierter Punkte.
    pub fn point_count(&self) -> usize {
        self.drafting().map_or(0, |drafting| drafting.points.len())
    }

    /// Statustext für die Host-Statusleiste.
    pub fn status_text(&self) -> &'static str {
        match self {
            Self::Idle => "Ersten Punkt klicken",
            Self::Placing(_) => "Nächsten Punkt klicken, Ziehen erzeugt Steuerpunkte",
            Self::Accumulating(drafting) if drafting.is_snapped() => {
                "Klicken schließt den Pfad"
            }
            Self::Accumulating(_) => "Weiter klicken, Enter beendet, Esc bricht ab",
            Self::Completed(_) => "Pfad fertig",
            Self::Cancelled => "Abgebrochen",
        }
    }
}

/// Zoom und Schwellen für Pen-Übergänge (Pixel-Schwellen werden durch den Zoom geteilt).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PenParams {
    pub zoom: f64,
    pub drag_threshold_px: f64,
    pub snap_enter_px: f64,
    pub snap_release_px: f64,
}

impl PenParams {
    pub fn from_options(options: &EditorOptions, zoom: f64) -> Self {
        Self {
            zoom,
            drag_threshold_px: options.drag_threshold_px,
            snap_enter_px: options.snap_enter_threshold_px,
            snap_release_px: options.snap_release_threshold_px,
        }
    }
}

impl Default for PenParams {
    fn default() -> Self {
        Self::from_options(&EditorOptions::default(), 1.0)
    }
}
