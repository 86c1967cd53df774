use crate::app::tools::pen::CreationSession;
use crate::app::use_cases::drag::ActiveDrag;

/// Aktives Editor-Werkzeug
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EditorTool {
    /// Standard: Punkte, Steuerpunkte und Segmente greifen
    #[default]
    Select,
    /// Neuen Pfad Punkt für Punkt zeichnen
    Pen,
}

/// Zustand des aktuellen Editor-Werkzeugs
#[derive(Debug, Clone, Default)]
pub struct EditorToolState {
    /// Aktives Werkzeug
    pub active_tool: EditorTool,
    /// Pen-Tool-Sitzung (Idle solange nicht gezeichnet wird)
    pub pen: CreationSession,
    /// Laufender Drag im Select-Tool
    pub drag: Option<ActiveDrag>,
}

impl EditorToolState {
    /// Erstellt den Standard-Werkzeugzustand (Select-Tool aktiv).
    pub fn new() -> Self {
        Self::default()
    }

    /// True wenn gerade ein Anker, Steuerpunkt oder Segment gezogen wird.
    pub fn is_dragging(&self) -> bool {
        self.drag.is_some()
    }
}
