//! Geteilte Typen für layer-übergreifende Verträge.
//!
//! Enthält die Laufzeit-Optionen und ihre Fallback-Konstanten, die sowohl
//! vom `app`-Layer als auch von Host-Integrationen gelesen werden.

pub mod options;

pub use options::EditorOptions;
pub use options::{
    ANCHOR_EXCLUSION_RADIUS_PX, ANCHOR_HIT_RADIUS_PX, DRAG_THRESHOLD_PX, HANDLE_HIT_RADIUS_PX,
    SEGMENT_HIT_RADIUS_PX, SNAP_ENTER_THRESHOLD_PX, SNAP_RELEASE_THRESHOLD_PX,
};
