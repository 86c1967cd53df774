use crate::app::tools::pen::CreationPreview;
use crate::app::CommandLog;
use crate::core::VectorPath;
use crate::shared::EditorOptions;

use super::{EditorToolState, PathEditState, ViewState};

/// Hauptzustand der Anwendung
#[derive(Debug, Clone, Default)]
pub struct AppState {
    /// Bearbeiteter Pfad plus transienter Sitzungs-Kontext
    pub edit: PathEditState,
    /// View-State
    pub view: ViewState,
    /// Editor-Werkzeug-State
    pub editor: EditorToolState,
    /// Verlauf ausgeführter Commands
    pub command_log: CommandLog,
    /// Laufzeit-Optionen (Radien, Schwellen, Steuerpunkt-Längen)
    pub options: EditorOptions,
    /// Signalisiert dem Host, dass sich Ursprung oder Ausdehnung geändert haben
    pub bounds_changed: bool,
}

impl AppState {
    /// Erstellt einen neuen, leeren App-State
    pub fn new() -> Self {
        Self::default()
    }

    /// App-State mit vorgegebenen Optionen.
    pub fn with_options(options: EditorOptions) -> Self {
        Self {
            options,
            ..Self::default()
        }
    }

    /// Aktueller Pfad-Snapshot.
    pub fn path(&self) -> &VectorPath {
        &self.edit.path
    }

    /// Gibt die Anzahl der Punkte zurück (für UI-Anzeige)
    pub fn point_count(&self) -> usize {
        self.edit.path.point_count()
    }

    /// Vorschau des Pfads im Entstehen (nur während einer Pen-Sitzung).
    pub fn pen_preview(&self) -> Option<CreationPreview> {
        self.editor.pen.preview(self.options.creation_padding)
    }

    /// Liest das Bounds-Signal und setzt es zurück.
    pub fn take_bounds_changed(&mut self) -> bool {
        std::mem::take(&mut self.bounds_changed)
    }
}
