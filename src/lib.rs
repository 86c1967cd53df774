//! Vector Path Editor Library.
//! Bearbeitungs-Kern für stückweise kubische Bézier-Pfade: Kurven-Mathematik,
//! Bounds-Renormalisierung, reine Zustandsübergänge und Pen-Tool-Session.

pub mod app;
pub mod core;
pub mod json;
pub mod shared;

pub use app::{
    AppCommand, AppController, AppIntent, AppState, CreationSession, EditSession, EditorTool,
    HandleRef, HandleRole, HitTarget, Modifiers, PathEditState, SelectionState,
};
pub use core::{
    accurate_bounds, creation_bounds, have_bounds_changed, renormalize, ClosestPoint,
    CubicSegment, PathBounds, PathPoint, Rect, Renormalized, SegmentKind, SegmentSplit,
    VectorPath,
};
pub use json::{parse_path_json, write_path_json};
pub use shared::EditorOptions;
