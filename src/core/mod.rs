//! Core-Domänentypen: Punkte, Segmente, Pfade und Bounds.

pub mod bounds;
pub mod handle;
pub mod path;
/// Anker-Punkte mit optionalen Steuerpunkten (cp1 eingehend, cp2 ausgehend)
pub mod point;
/// Kurven-Kernel: Auswertung, Ableitung, Länge, Extrema-Bounds, Projektion, Split
pub mod segment;

pub use bounds::{
    accurate_bounds, creation_bounds, have_bounds_changed, renormalize, PathBounds, Rect,
    Renormalized,
};
pub use handle::{HandleRef, HandleRole};
pub use path::VectorPath;
pub use point::PathPoint;
pub use segment::{ClosestPoint, CubicSegment, SegmentKind, SegmentSplit};
