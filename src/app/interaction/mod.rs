//! Interaktion: zoom-skalierte Trefferprüfung und Snap-Hysterese.
//!
//! Alle Radien werden in unskalierten Pixeln übergeben und vor dem Vergleich
//! durch den Zoom geteilt, damit Trefferflächen zoom-invariant bleiben.

mod snap;

pub use hit_test::{anchor_at, classify_hit, control_at, segment_at, HitRadii, HitTarget};
pub use snap::{update_snap, SnapState};

/// Modifier-Tasten einer Zeiger-Eingabe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Modifiers {
    /// Selektion erweitern statt ersetzen (typisch Shift)
    pub additive: bool,
    /// Steuerpunkte unabhängig bewegen (typisch Alt)
    pub break_symmetry: bool,
    /// Alternativer Drag: Segment statt Auswahl greifen (typisch Ctrl/Cmd)
    pub alternate_drag: bool,
}

/// Rechnet einen Pixel-Radius in lokale Einheiten um.
///
/// Ungültiger Zoom (nicht endlich oder ≤ 0) zählt als 1.
pub(crate) fn scaled_radius(radius_px: f64, zoom: f64) -> f64 {
    let zoom = if zoom.is_finite() && zoom > 0.0 {
        zoom
    } else {
        1.0
    };
    radius_px / zoom
}
