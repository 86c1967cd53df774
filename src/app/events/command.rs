use crate::app::interaction::HitTarget;
use crate::app::state::EditorTool;
use crate::core::{HandleRef, VectorPath};
use crate::shared::EditorOptions;
use glam::DVec2;

/// Commands sind mutierende Operationen, die zentral ausgeführt werden.
#[derive(Debug, Clone, PartialEq)]
pub enum AppCommand {
    // === Bearbeitungsmodus ===
    /// Bearbeitungsmodus betreten
    EnterEdit,
    /// Bearbeitungsmodus verlassen
    ExitEdit,
    /// Bearbeitungsmodus umschalten
    ToggleEdit,

    // === Selektion ===
    /// Punkt selektieren
    SelectPoint { index: usize, additive: bool },
    /// Segment selektieren
    SelectSegment { index: usize },
    /// Alle Punkte selektieren
    SelectAllPoints,
    /// Selektion aufheben
    ClearSelection,
    /// Hover-Ziel setzen
    SetHover { target: Option<HitTarget> },

    // === Punkt-Bearbeitung ===
    /// Punkttyp umschalten
    TogglePointType { index: usize },
    /// Punkt auf Segment einfügen
    InsertPoint { segment_index: usize, t: f64 },
    /// Selektierte Punkte löschen
    DeleteSelectedPoints,
    /// Pfad schließen/öffnen
    ToggleClosed,

    // === Drag ===
    /// Anker- oder Steuerpunkt-Drag starten
    BeginHandleDrag { handle: HandleRef },
    /// Segment-Drag starten
    BeginSegmentDrag { segment_index: usize, press: DVec2 },
    /// Laufenden Drag nachführen
    UpdateDrag {
        local_pos: DVec2,
        break_symmetry: bool,
    },
    /// Laufenden Drag beenden (einmalige Renormalisierung)
    EndDrag,

    // === Pen-Tool ===
    /// Pen: Punkt platzieren oder schließen
    PenPointerDown { pos: DVec2 },
    /// Pen: Zeiger bewegt
    PenPointerMove { pos: DVec2, break_symmetry: bool },
    /// Pen: Taste losgelassen
    PenPointerUp,
    /// Pen: offenen Pfad übernehmen
    PenConfirm,
    /// Pen: Sitzung verwerfen
    PenCancel,

    // === Werkzeug, Ansicht, Daten ===
    /// Werkzeug wechseln
    SetTool { tool: EditorTool },
    /// Zoom setzen
    SetZoom { zoom: f64 },
    /// Pfad übernehmen
    LoadPath { path: VectorPath },
    /// Pfad aus JSON übernehmen
    LoadPathJson { json: String },
    /// Optionen übernehmen
    ApplyOptions { options: EditorOptions },
}
