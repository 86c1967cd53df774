//! Use-Case-Funktionen für Punkt- und Segment-Selektion.
//!
//! Alle Übergänge sind rein: `&PathEditState` rein, neuer `PathEditState` raus.
//! - `pick`: Klick auf einen Punkt (ersetzen, umschalten, abwählen)
//! - `segment`: Klick auf ein Segment
//! - `helpers`: Auswahl leeren, alle Punkte wählen

mod helpers;
mod pick;
mod segment;

pub use helpers::{clear_selection, select_all_points};
pub use pick::select_point;
pub use segment::select_segment;
