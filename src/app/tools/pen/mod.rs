//! Pen-Tool: Pfad Punkt für Punkt zeichnen.
//!
//! Zustandsmaschine `CreationSession`:
//! Idle → Placing (1 Punkt) → Accumulating (≥ 2 Punkte) → Completed | Cancelled.
//!
//! Jeder Übergang konsumiert den alten Zustand und liefert den neuen. Punkte
//! liegen während der Sitzung in Seitenkoordinaten; erst `Completed` enthält
//! einen renormalisierten `VectorPath`.

mod drag;
mod lifecycle;
mod preview;
mod state;


pub use drag::apply_placement_drag;
pub use preview::CreationPreview;
pub use state::{CreationSession, Drafting, PenParams};
