//! Werkzeuge mit eigenem Sitzungszustand.
//!
//! Tools erzeugen reine Daten; die Übernahme in den `AppState` erfolgt zentral
//! in den Handlern.

/// Pen-Tool mit sequentieller Punkt-Platzierung, Drag-zu-Steuerpunkt und Snap-to-Start.
pub mod pen;
