use crate::app::interaction::HitTarget;
use indexmap::IndexSet;

/// Auswahlbezogener Zustand eines bearbeiteten Pfads.
///
/// Punkt- und Segment-Selektion schließen sich gegenseitig aus.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SelectionState {
    /// Selektierte Punkt-Indizes (Reihenfolge ohne Bedeutung, Iteration deterministisch)
    pub selected_points: IndexSet<usize>,
    /// Höchstens ein selektiertes Segment
    pub selected_segment: Option<usize>,
    /// Transientes Hover-Ziel unter dem Zeiger
    pub hover: Option<HitTarget>,
}

impl SelectionState {
    /// Erstellt einen leeren Selektionszustand.
    pub fn new() -> Self {
        Self::default()
    }

    /// Hebt Punkt- und Segment-Selektion auf (Hover bleibt).
    pub fn clear(&mut self) {
        self.selected_points.clear();
        self.selected_segment = None;
    }

    /// True wenn weder Punkte noch ein Segment selektiert sind.
    pub fn is_empty(&self) -> bool {
        self.selected_points.is_empty() && self.selected_segment.is_none()
    }

    /// Selektierte Indizes aufsteigend sortiert.
    pub fn sorted_points(&self) -> Vec<usize> {
        let mut indices: Vec<usize> = self.selected_points.iter().copied().collect();
        indices.sort_unstable();
        indices
    }
}
