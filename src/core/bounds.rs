//! Bounds-Engine: exakte Pfad-Bounds, Renormalisierung und Creation-Bounds.
//!
//! Pfad-Punkte werden lokal relativ zu einem Ursprung gespeichert. Nach jeder
//! abgeschlossenen Geometrie-Änderung wird der Ursprung aus den exakten
//! Kurven-Bounds neu bestimmt, ohne dass sich die Form auf der Seite verschiebt.

use super::path::segments;
use super::point::PathPoint;
use glam::DVec2;

/// Standard-Schwelle für `have_bounds_changed`.
pub const BOUNDS_CHANGE_THRESHOLD: f64 = 0.01;
/// Standard-Padding um Pfade im Entstehen.
pub const CREATION_PADDING: f64 = 50.0;
/// Minimale Breite/Höhe eines Pfads.
const MIN_EXTENT: f64 = 1.0;

/// Achsen-aligniertes Rechteck (min/max).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub min: DVec2,
    pub max: DVec2,
}

impl Rect {
    /// Einheits-Box (0, 0, 1, 1) für leere Pfade.
    pub const UNIT: Rect = Rect {
        min: DVec2::ZERO,
        max: DVec2::ONE,
    };

    /// Rechteck ohne Ausdehnung an `p`.
    pub fn from_point(p: DVec2) -> Self {
        Self { min: p, max: p }
    }

    /// Erweitert das Rechteck um `p`.
    pub fn include(&mut self, p: DVec2) {
        self.min = self.min.min(p);
        self.max = self.max.max(p);
    }

    /// Erweitert das Rechteck um `other`.
    pub fn union(&mut self, other: &Rect) {
        self.min = self.min.min(other.min);
        self.max = self.max.max(other.max);
    }

    /// Rechteck mit `padding` auf allen Seiten.
    pub fn expanded(&self, padding: f64) -> Self {
        Self {
            min: self.min - DVec2::splat(padding),
            max: self.max + DVec2::splat(padding),
        }
    }

    pub fn width(&self) -> f64 {
        self.max.x - self.min.x
    }

    pub fn height(&self) -> f64 {
        self.max.y - self.min.y
    }

    /// True wenn `other` vollständig enthalten ist.
    #[cfg(test)]
    pub(crate) fn contains_rect(&self, other: &Rect) -> bool {
        self.min.x <= other.min.x
            && self.min.y <= other.min.y
            && self.max.x >= other.max.x
            && self.max.y >= other.max.y
    }
}

/// Abgeleitete Bounds eines Pfads: Ursprung und Ausdehnung (je mindestens 1).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PathBounds {
    /// Ursprung (Seitenkoordinaten) der lokalen Punkte
    pub origin: DVec2,
    pub width: f64,
    pub height: f64,
}

impl PathBounds {
    /// Bounds eines leeren Pfads.
    pub fn unit() -> Self {
        Self::from_rect(&Rect::UNIT)
    }

    /// Ursprung = min-Ecke, Breite/Höhe = max(1, Ausdehnung).
    ///
    /// Läuft die Ausdehnung einer Achse über (extreme, aber endliche
    /// Koordinaten), bleibt der Ursprung dort 0 und die Ausdehnung wird auf
    /// `f64::MAX` begrenzt. So bleiben auch die lokalen Punkte endlich.
    pub fn from_rect(rect: &Rect) -> Self {
        let (origin_x, width) = axis_extent(rect.min.x, rect.max.x);
        let (origin_y, height) = axis_extent(rect.min.y, rect.max.y);
        Self {
            origin: DVec2::new(origin_x, origin_y),
            width,
            height,
        }
    }

    /// True wenn Ursprung oder Ausdehnung um mehr als `threshold` abweichen.
    pub fn differs_from(&self, other: &PathBounds, threshold: f64) -> bool {
        (self.origin.x - other.origin.x).abs() > threshold
            || (self.origin.y - other.origin.y).abs() > threshold
            || (self.width - other.width).abs() > threshold
            || (self.height - other.height).abs() > threshold
    }
}

impl Default for PathBounds {
    fn default() -> Self {
        Self::unit()
    }
}

/// Ergebnis einer Renormalisierung.
#[derive(Debug, Clone, PartialEq)]
pub struct Renormalized {
    /// Neuer Ursprung in Seitenkoordinaten
    pub origin: DVec2,
    /// Punkte relativ zu `origin`
    pub local_points: Vec<PathPoint>,
    pub width: f64,
    pub height: f64,
}

impl Renormalized {
    /// Bounds-Anteil des Ergebnisses.
    pub fn bounds(&self) -> PathBounds {
        PathBounds {
            origin: self.origin,
            width: self.width,
            height: self.height,
        }
    }
}

/// Exakte Bounds eines Pfads.
///
/// - leer → Einheits-Box (0, 0, 1, 1)
/// - ein Punkt → Punkt inkl. Steuerpunkte
/// - mehrere Punkte → Vereinigung der Segment-Bounds (inkl. Schließsegment)
pub fn accurate_bounds(points: &[PathPoint], is_closed: bool) -> Rect {
    match points {
        [] => Rect::UNIT,
        [single] => positions_rect(std::slice::from_ref(single)),
        _ => {
            let mut iter = segments(points, is_closed);
            let Some(first) = iter.next() else {
                return Rect::from_point(points[0].position);
            };
            iter.fold(first.bounding_box(), |mut rect, seg| {
                rect.union(&seg.bounding_box());
                rect
            })
        }
    }
}

/// Rechnet Seitenkoordinaten in lokale Koordinaten um.
///
/// Ursprung = min-Ecke der exakten Bounds; alle Anker und Steuerpunkte werden
/// um den Ursprung verschoben. Ohne Änderung der Seitenkoordinaten idempotent.
pub fn renormalize(page_points: &[PathPoint], is_closed: bool) -> Renormalized {
    let rect = if page_points.is_empty() {
        Rect::from_point(DVec2::ZERO)
    } else {
        accurate_bounds(page_points, is_closed)
    };
    let bounds = PathBounds::from_rect(&rect);
    Renormalized {
        origin: bounds.origin,
        local_points: page_points
            .iter()
            .map(|p| p.translated(-bounds.origin))
            .collect(),
        width: bounds.width,
        height: bounds.height,
    }
}

/// Prüft, ob sich Ursprung oder Ausdehnung um mehr als `threshold` geändert haben.
///
/// Vermeidet Renormalisierungs-Churn bei kontinuierlichen Drags.
pub fn have_bounds_changed(
    prev_points: &[PathPoint],
    next_points: &[PathPoint],
    is_closed: bool,
    threshold: f64,
) -> bool {
    let prev = PathBounds::from_rect(&accurate_bounds(prev_points, is_closed));
    let next = PathBounds::from_rect(&accurate_bounds(next_points, is_closed));
    prev.differs_from(&next, threshold)
}

/// Bounds für einen Pfad im Entstehen (Pen-Tool-Vorschau).
///
/// - ein Punkt → Punkt inkl. Steuerpunkte plus festes `padding`
/// - mehrere Punkte → stabiler Ursprung (`stable_origin`, sonst erster Punkt);
///   die Ausdehnung ist symmetrisch um diesen Punkt, damit der visuelle Anker
///   beim Hinzufügen von Punkten und Steuerpunkten nicht springt.
pub fn creation_bounds(
    page_points: &[PathPoint],
    stable_origin: Option<DVec2>,
    padding: f64,
) -> Renormalized {
    let rect = match page_points {
        [] => return renormalize(page_points, false),
        [single] => positions_rect(std::slice::from_ref(single)).expanded(padding),
        _ => {
            let center = stable_origin.unwrap_or(page_points[0].position);
            let mut reach_rect = accurate_bounds(page_points, false);
            reach_rect.union(&positions_rect(page_points));
            let reach_x = (center.x - reach_rect.min.x).max(reach_rect.max.x - center.x);
            let reach_y = (center.y - reach_rect.min.y).max(reach_rect.max.y - center.y);
            let half = DVec2::new(reach_x + padding, reach_y + padding);
            Rect {
                min: center - half,
                max: center + half,
            }
        }
    };
    let bounds = PathBounds::from_rect(&rect);
    Renormalized {
        origin: bounds.origin,
        local_points: page_points
            .iter()
            .map(|p| p.translated(-bounds.origin))
            .collect(),
        width: bounds.width,
        height: bounds.height,
    }
}

/// Ursprung und Ausdehnung einer Achse; nie NaN oder unendlich.
fn axis_extent(min: f64, max: f64) -> (f64, f64) {
    let extent = max - min;
    if min.is_finite() && extent.is_finite() {
        (min, extent.max(MIN_EXTENT))
    } else {
        (0.0, f64::MAX)
    }
}

/// Bounds über alle Anker und Steuerpunkte (kein Kurven-Extremum).
fn positions_rect(points: &[PathPoint]) -> Rect {
    let mut positions = points.iter().flat_map(PathPoint::all_positions);
    let Some(first) = positions.next() else {
        return Rect::UNIT;
    };
    positions.fold(Rect::from_point(first), |mut rect, p| {
        rect.include(p);
        rect
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::{assert_abs_diff_eq, assert_relative_eq};

    fn p(x: f64, y: f64) -> PathPoint {
        PathPoint::new(x, y)
    }

    #[test]
    fn test_empty_path_is_unit_box() {
        assert_eq!(accurate_bounds(&[], false), Rect::UNIT);
        assert_eq!(PathBounds::from_rect(&Rect::UNIT), PathBounds::unit());
    }

    #[test]
    fn test_single_point_includes_handles() {
        let point = PathPoint::with_handles(
            DVec2::new(10.0, 10.0),
            DVec2::new(0.0, 5.0),
            DVec2::new(20.0, 15.0),
        );
        let rect = accurate_bounds(&[point], false);
        assert_eq!(rect.min, DVec2::new(0.0, 5.0));
        assert_eq!(rect.max, DVec2::new(20.0, 15.0));
    }

    #[test]
    fn test_linear_open_path_bounds() {
        let rect = accurate_bounds(&[p(0.0, 0.0), p(100.0, 100.0)], false);
        let bounds = PathBounds::from_rect(&rect);
        assert_eq!(bounds.origin, DVec2::ZERO);
        assert_eq!(bounds.width, 100.0);
        assert_eq!(bounds.height, 100.0);
    }

    #[test]
    fn test_curved_path_extends_beyond_anchor_row() {
        let points = [
            PathPoint {
                position: DVec2::new(0.0, 50.0),
                cp1: None,
                cp2: Some(DVec2::new(50.0, 0.0)),
            },
            PathPoint {
                position: DVec2::new(100.0, 50.0),
                cp1: Some(DVec2::new(50.0, 100.0)),
                cp2: None,
            },
        ];
        let rect = accurate_bounds(&points, false);
        assert!(rect.min.y < 50.0);
        assert!(rect.max.y > 50.0);
    }

    #[test]
    fn test_closed_path_includes_closing_segment() {
        // Schließsegment C → A wölbt sich über den Punkt A hinaus nach links
        let a = PathPoint {
            position: DVec2::new(0.0, 0.0),
            cp1: Some(DVec2::new(-40.0, 0.0)),
            cp2: None,
        };
        let points = [a, p(100.0, 0.0), p(50.0, 100.0)];
        let open = accurate_bounds(&points, false);
        let closed = accurate_bounds(&points, true);
        assert_relative_eq!(open.min.x, 0.0);
        assert!(closed.min.x < 0.0);
    }

    #[test]
    fn test_extent_is_at_least_one() {
        let renorm = renormalize(&[p(5.0, 5.0), p(5.0, 25.0)], false);
        assert_eq!(renorm.width, 1.0);
        assert_eq!(renorm.height, 20.0);
    }

    #[test]
    fn test_overflowing_extent_stays_finite() {
        let points = [p(-1e308, 0.0), p(1e308, 0.0)];
        let renorm = renormalize(&points, false);
        assert!(renorm.width.is_finite());
        assert!(renorm.height.is_finite());
        assert_eq!(renorm.height, 1.0);
        assert!(renorm.origin.is_finite());
        for point in &renorm.local_points {
            assert!(point.position.is_finite());
        }
        // Seitenlage bleibt erhalten
        assert_eq!(
            renorm.local_points[1].translated(renorm.origin).position,
            DVec2::new(1e308, 0.0)
        );
    }

    #[test]
    fn test_renormalize_moves_origin_to_min_corner() {
        let points = [p(10.0, 20.0), p(60.0, 80.0), p(30.0, 5.0)];
        let renorm = renormalize(&points, false);
        assert_eq!(renorm.origin, DVec2::new(10.0, 5.0));
        assert_eq!(renorm.local_points[0].position, DVec2::new(0.0, 15.0));
        assert_eq!(renorm.width, 50.0);
        assert_eq!(renorm.height, 75.0);
    }

    #[test]
    fn test_renormalize_is_idempotent() {
        let points = [
            PathPoint::with_handles(
                DVec2::new(12.5, 40.0),
                DVec2::new(-3.0, 22.0),
                DVec2::new(28.0, 58.0),
            ),
            PathPoint {
                position: DVec2::new(90.0, 10.0),
                cp1: Some(DVec2::new(120.0, -30.0)),
                cp2: None,
            },
            p(50.0, 95.0),
        ];
        let first = renormalize(&points, true);
        let page: Vec<PathPoint> = first
            .local_points
            .iter()
            .map(|pt| pt.translated(first.origin))
            .collect();
        let second = renormalize(&page, true);
        assert_abs_diff_eq!(first.origin.x, second.origin.x, epsilon = 1e-6);
        assert_abs_diff_eq!(first.origin.y, second.origin.y, epsilon = 1e-6);
        for (a, b) in first.local_points.iter().zip(&second.local_points) {
            assert_abs_diff_eq!(a.position.x, b.position.x, epsilon = 1e-6);
            assert_abs_diff_eq!(a.position.y, b.position.y, epsilon = 1e-6);
        }
    }

    #[test]
    fn test_have_bounds_changed_respects_threshold() {
        let prev = [p(0.0, 0.0), p(100.0, 100.0)];
        let tiny = [p(0.0, 0.0), p(100.005, 100.0)];
        let big = [p(0.0, 0.0), p(120.0, 100.0)];
        assert!(!have_bounds_changed(&prev, &tiny, false, BOUNDS_CHANGE_THRESHOLD));
        assert!(have_bounds_changed(&prev, &big, false, BOUNDS_CHANGE_THRESHOLD));
    }

    #[test]
    fn test_creation_bounds_single_point_padding() {
        let renorm = creation_bounds(&[p(50.0, 50.0)], None, 20.0);
        assert_eq!(renorm.origin, DVec2::new(30.0, 30.0));
        assert_eq!(renorm.width, 40.0);
        assert_eq!(renorm.height, 40.0);
        assert_eq!(renorm.local_points[0].position, DVec2::new(20.0, 20.0));
    }

    #[test]
    fn test_creation_bounds_keep_stable_origin_centered() {
        let first = p(100.0, 100.0);
        let mut points = vec![first, p(180.0, 120.0)];
        let before = creation_bounds(&points, None, CREATION_PADDING);
        let center_before =
            before.origin + DVec2::new(before.width / 2.0, before.height / 2.0);
        assert_abs_diff_eq!(center_before.x, 100.0, epsilon = 1e-9);
        assert_abs_diff_eq!(center_before.y, 100.0, epsilon = 1e-9);

        // Neuer Punkt links oben: Ausdehnung wächst, Zentrum bleibt
        points.push(p(40.0, 10.0));
        let after = creation_bounds(&points, Some(first.position), CREATION_PADDING);
        let center_after = after.origin + DVec2::new(after.width / 2.0, after.height / 2.0);
        assert_abs_diff_eq!(center_after.x, 100.0, epsilon = 1e-9);
        assert_abs_diff_eq!(center_after.y, 100.0, epsilon = 1e-9);
        // Reichweite rechts (80) bleibt größer als links (60)
        assert_relative_eq!(after.width, 2.0 * (80.0 + CREATION_PADDING));
        assert_relative_eq!(after.height, 2.0 * (90.0 + CREATION_PADDING));
    }

    #[test]
    fn test_creation_bounds_include_dragged_handles() {
        let first = p(0.0, 0.0);
        let dragged = PathPoint::with_handles(
            DVec2::new(10.0, 0.0),
            DVec2::new(10.0, -70.0),
            DVec2::new(10.0, 70.0),
        );
        let renorm = creation_bounds(&[first, dragged], None, 0.0);
        assert_relative_eq!(renorm.height, 140.0);
    }
}
