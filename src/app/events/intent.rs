use crate::app::interaction::Modifiers;
use crate::app::state::EditorTool;
use crate::core::VectorPath;
use crate::shared::EditorOptions;
use glam::DVec2;

/// App-Intent und App-Command Events.
/// Intents sind Eingaben des Hosts ohne direkte Mutationslogik.
///
/// Zeigerpositionen sind bereits in lokale Koordinaten des Shapes umgerechnet.
/// Indizes kommen vorzeichenbehaftet vom Host; negative Werte werden beim
/// Mapping verworfen.
#[derive(Debug, Clone, PartialEq)]
pub enum AppIntent {
    /// Bearbeitungsmodus betreten
    EnterEditRequested,
    /// Bearbeitungsmodus verlassen
    ExitEditRequested,
    /// Bearbeitungsmodus umschalten
    ToggleEditRequested,
    /// Zeiger gedrückt
    PointerPressed {
        local_pos: DVec2,
        modifiers: Modifiers,
    },
    /// Zeiger bewegt (mit oder ohne gedrückte Taste)
    PointerMoved {
        local_pos: DVec2,
        modifiers: Modifiers,
    },
    /// Zeiger losgelassen
    PointerReleased {
        local_pos: DVec2,
        modifiers: Modifiers,
    },
    /// Doppelklick: Bearbeitung betreten, Punkt einfügen oder Punkttyp wechseln
    PointerDoubleClicked { local_pos: DVec2 },
    /// Punkt direkt selektieren (z.B. aus einer Punktliste)
    PointSelectRequested { index: i64, additive: bool },
    /// Segment direkt selektieren
    SegmentSelectRequested { index: i64 },
    /// Alle Punkte selektieren
    SelectAllRequested,
    /// Selektion aufheben
    ClearSelectionRequested,
    /// Punkt zwischen Ecke und glatt umschalten
    TogglePointTypeRequested { index: i64 },
    /// Punkt auf Segment bei Parameter `t` einfügen
    InsertPointRequested { segment_index: i64, t: f64 },
    /// Drag eines Ankers/Steuerpunkts über Host-Bezeichner starten (`"anchor"`, `"in"`, `"out"`)
    HandleDragStartRequested { point_index: i64, role: String },
    /// Selektierte Punkte löschen (Entf/Backspace)
    DeleteSelectedRequested,
    /// Pfad schließen/öffnen
    ToggleClosedRequested,
    /// Bestätigen (Enter)
    ConfirmRequested,
    /// Abbrechen (Esc)
    CancelRequested,
    /// Werkzeug wechseln
    ToolSelected { tool: EditorTool },
    /// Zoom des Hosts geändert
    ZoomChanged { zoom: f64 },
    /// Host übergibt einen Pfad zur Bearbeitung
    PathLoaded { path: VectorPath },
    /// Host übergibt einen Pfad in Persistenz-Form (JSON)
    PathJsonLoaded { json: String },
    /// Laufzeit-Optionen übernehmen
    OptionsChanged { options: EditorOptions },
}
