//! Use-Case-Funktionen für die Punkt-Bearbeitung eines Pfads.
//!
//! Aufgeteilt nach Operation:
//! - `edit_mode`: Bearbeitungsmodus betreten/verlassen
//! - `delete_points`: Selektierte Punkte löschen
//! - `toggle_type`: Eckpunkt ↔ glatter Punkt
//! - `insert_point`: Punkt auf einem Segment einfügen
//! - `toggle_closed`: Pfad schließen/öffnen
//!
//! Geometrie-verändernde Übergänge renormalisieren das Ergebnis.

mod delete_points;
mod edit_mode;
mod insert_point;
mod toggle_closed;
mod toggle_type;

pub use delete_points::delete_points;
pub use edit_mode::{enter_edit, exit_edit, toggle_edit};
pub use insert_point::insert_point_on_segment;
pub use toggle_closed::toggle_closed;
pub use toggle_type::{smooth_direction, toggle_point_type};

use crate::app::PathEditState;
use std::sync::Arc;

/// Ersetzt den Pfad durch seine renormalisierte Fassung.
pub(crate) fn settle(state: &mut PathEditState) {
    state.path = Arc::new(state.path.renormalized());
}
