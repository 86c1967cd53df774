use super::SelectionState;
use crate::core::VectorPath;
use std::sync::Arc;

/// Transienter Bearbeitungs-Kontext eines Pfads.
///
/// Gehört dem Host (pro Shape-Identität) und wird nicht mit der Geometrie persistiert.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EditSession {
    /// Pfad befindet sich im Bearbeitungsmodus
    pub is_editing: bool,
    /// Punkt-/Segment-Selektion und Hover
    pub selection: SelectionState,
}

/// Unveränderlicher Pfad-Snapshot plus Bearbeitungs-Kontext.
///
/// Alle Übergänge in `use_cases` nehmen `&PathEditState` und liefern einen neuen
/// Zustand. Der Pfad liegt im `Arc` (Copy-on-Write): Leser wie ein Renderer
/// behalten ihren Snapshot, Mutationen klonen erst bei `path_mut()`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PathEditState {
    pub path: Arc<VectorPath>,
    pub session: EditSession,
}

impl PathEditState {
    /// Zustand für einen Pfad außerhalb des Bearbeitungsmodus.
    pub fn new(path: VectorPath) -> Self {
        Self {
            path: Arc::new(path),
            session: EditSession::default(),
        }
    }

    /// Zustand für einen Pfad im Bearbeitungsmodus (leere Selektion).
    pub fn editing(path: VectorPath) -> Self {
        Self {
            path: Arc::new(path),
            session: EditSession {
                is_editing: true,
                selection: SelectionState::new(),
            },
        }
    }

    /// Mutable Referenz auf den Pfad (CoW: klont nur wenn geteilt).
    #[inline]
    pub fn path_mut(&mut self) -> &mut VectorPath {
        Arc::make_mut(&mut self.path)
    }

    /// Kurzform für die aktuelle Selektion.
    pub fn selection(&self) -> &super::SelectionState {
        &self.session.selection
    }
}
