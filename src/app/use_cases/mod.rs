//! Use-Cases: reine Zustandsübergänge auf `PathEditState`.
//!
//! Keine Funktion verändert ihren Eingabezustand; jede liefert einen neuen
//! Snapshot. Ungültige Eingaben (Indizes, fehlende Steuerpunkte) sind No-ops.

pub mod drag;
pub mod editing;
pub mod selection;
