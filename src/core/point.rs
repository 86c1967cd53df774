use super::handle::HandleRole;
use glam::DVec2;

/// Toleranz für die Symmetrie-Prüfung von Steuerpunkten.
const SYMMETRY_EPSILON: f64 = 1e-6;

/// Anker-Punkt eines Pfads mit optionalen Steuerpunkten.
///
/// Steuerpunkte sind absolute Koordinaten (keine Deltas zum Anker).
/// `cp1` formt die eingehende, `cp2` die ausgehende Kurve.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PathPoint {
    /// Position des Ankers
    pub position: DVec2,
    /// Eingehender Steuerpunkt
    pub cp1: Option<DVec2>,
    /// Ausgehender Steuerpunkt
    pub cp2: Option<DVec2>,
}

impl PathPoint {
    /// Erstellt einen Eckpunkt ohne Steuerpunkte.
    pub fn new(x: f64, y: f64) -> Self {
        Self::corner(DVec2::new(x, y))
    }

    /// Erstellt einen Eckpunkt an `position`.
    pub fn corner(position: DVec2) -> Self {
        Self {
            position,
            cp1: None,
            cp2: None,
        }
    }

    /// Erstellt einen Punkt mit beiden Steuerpunkten.
    pub fn with_handles(position: DVec2, cp1: DVec2, cp2: DVec2) -> Self {
        Self {
            position,
            cp1: Some(cp1),
            cp2: Some(cp2),
        }
    }

    /// True wenn mindestens ein Steuerpunkt existiert.
    pub fn has_handles(&self) -> bool {
        self.cp1.is_some() || self.cp2.is_some()
    }

    /// Eckpunkt = keine Steuerpunkte.
    pub fn is_corner(&self) -> bool {
        !self.has_handles()
    }

    /// Glatter Punkt = beide Steuerpunkte, punktsymmetrisch zum Anker.
    pub fn is_smooth(&self) -> bool {
        match (self.cp1, self.cp2) {
            (Some(cp1), Some(cp2)) => {
                (cp1 + cp2 - 2.0 * self.position).length() <= SYMMETRY_EPSILON
            }
            _ => false,
        }
    }

    /// Verschiebt Anker und Steuerpunkte starr um `delta`.
    pub fn translated(&self, delta: DVec2) -> Self {
        Self {
            position: self.position + delta,
            cp1: self.cp1.map(|cp| cp + delta),
            cp2: self.cp2.map(|cp| cp + delta),
        }
    }

    /// Entfernt beide Steuerpunkte.
    pub fn without_handles(&self) -> Self {
        Self::corner(self.position)
    }

    /// Veränderbarer Steuerpunkt-Slot zu `role` (`None` für den Anker).
    pub fn control_mut(&mut self, role: HandleRole) -> Option<&mut Option<DVec2>> {
        match role {
            HandleRole::Anchor => None,
            HandleRole::In => Some(&mut self.cp1),
            HandleRole::Out => Some(&mut self.cp2),
        }
    }

    /// Anker und vorhandene Steuerpunkte als Iterator (für Bounds-Berechnungen).
    pub fn all_positions(&self) -> impl Iterator<Item = DVec2> {
        std::iter::once(self.position)
            .chain(self.cp1)
            .chain(self.cp2)
    }
}
