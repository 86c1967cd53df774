//! Unveränderlicher Pfad-Wert: lokale Punkte, Schließ-Flag, Lochringe, Bounds.

use super::bounds::{renormalize, PathBounds};
use super::point::PathPoint;
use super::segment::CubicSegment;
use glam::DVec2;

/// Pfad aus stückweise kubischen Bézier-Segmenten.
///
/// `points` und `hole_rings` sind lokal relativ zu `bounds.origin` gespeichert.
/// Zwischen Drag-Frames dürfen die Bounds veraltet sein; `renormalized()`
/// stellt den abgeschlossenen Zustand her.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct VectorPath {
    /// Anker-Punkte in Reihenfolge (lokale Koordinaten)
    pub points: Vec<PathPoint>,
    /// Implizites Schließsegment letzter → erster Punkt (ab 3 Punkten)
    pub is_closed: bool,
    /// Geschlossene Lochringe (lokale Koordinaten)
    pub hole_rings: Vec<Vec<PathPoint>>,
    /// Ursprung und Ausdehnung
    pub bounds: PathBounds,
}

impl VectorPath {
    /// Leerer Pfad mit Einheits-Bounds.
    pub fn new() -> Self {
        Self::default()
    }

    /// Erstellt einen renormalisierten Pfad aus Seitenkoordinaten.
    pub fn from_page_points(page_points: Vec<PathPoint>, is_closed: bool) -> Self {
        Self::from_page_parts(page_points, is_closed, Vec::new())
    }

    /// Wie `from_page_points`, inkl. Lochringen in Seitenkoordinaten.
    pub fn from_page_parts(
        page_points: Vec<PathPoint>,
        is_closed: bool,
        page_hole_rings: Vec<Vec<PathPoint>>,
    ) -> Self {
        Self {
            points: page_points,
            is_closed,
            hole_rings: page_hole_rings,
            bounds: PathBounds {
                origin: DVec2::ZERO,
                width: 1.0,
                height: 1.0,
            },
        }
        .renormalized()
    }

    pub fn point_count(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Punkte in Seitenkoordinaten (lokal + Ursprung).
    pub fn page_points(&self) -> Vec<PathPoint> {
        to_page(&self.points, self.bounds.origin)
    }

    /// Lochringe in Seitenkoordinaten.
    pub fn page_hole_rings(&self) -> Vec<Vec<PathPoint>> {
        self.hole_rings
            .iter()
            .map(|ring| to_page(ring, self.bounds.origin))
            .collect()
    }

    /// True wenn das Schließsegment existiert.
    pub fn has_closing_segment(&self) -> bool {
        has_closing_segment(self.points.len(), self.is_closed)
    }

    pub fn segment_count(&self) -> usize {
        segment_count(self.points.len(), self.is_closed)
    }

    /// Segment `index` in lokalen Koordinaten.
    pub fn segment(&self, index: usize) -> Option<CubicSegment> {
        segment_between(&self.points, index, self.is_closed)
    }

    /// Renormalisiert Punkte und Lochringe, ohne die Seitenlage zu verändern.
    pub fn renormalized(&self) -> Self {
        let page = self.page_points();
        let page_holes = self.page_hole_rings();
        let result = renormalize(&page, self.is_closed);
        let bounds = result.bounds();
        Self {
            points: result.local_points,
            is_closed: self.is_closed,
            hole_rings: page_holes
                .iter()
                .map(|ring| to_page(ring, -bounds.origin))
                .collect(),
            bounds,
        }
    }
}

fn to_page(points: &[PathPoint], origin: DVec2) -> Vec<PathPoint> {
    points.iter().map(|p| p.translated(origin)).collect()
}

/// Das Schließsegment existiert nur bei geschlossenen Pfaden ab 3 Punkten.
pub fn has_closing_segment(point_count: usize, is_closed: bool) -> bool {
    is_closed && point_count >= 3
}

/// Anzahl Segmente inkl. Schließsegment.
pub fn segment_count(point_count: usize, is_closed: bool) -> usize {
    let open = point_count.saturating_sub(1);
    if has_closing_segment(point_count, is_closed) {
        open + 1
    } else {
        open
    }
}

/// Indizes (start, end) der Endpunkte von Segment `index`.
///
/// Das Schließsegment (letzter Index) endet im ersten Punkt.
pub fn segment_endpoints(
    point_count: usize,
    index: usize,
    is_closed: bool,
) -> Option<(usize, usize)> {
    if index >= segment_count(point_count, is_closed) {
        return None;
    }
    Some((index, (index + 1) % point_count))
}

/// Segment `index` aus einer Punktliste.
pub fn segment_between(points: &[PathPoint], index: usize, is_closed: bool) -> Option<CubicSegment> {
    let (start, end) = segment_endpoints(points.len(), index, is_closed)?;
    Some(CubicSegment::between(&points[start], &points[end]))
}

/// Iteriert alle Segmente inkl. Schließsegment.
pub fn segments(points: &[PathPoint], is_closed: bool) -> impl Iterator<Item = CubicSegment> + '_ {
    (0..segment_count(points.len(), is_closed))
        .filter_map(move |index| segment_between(points, index, is_closed))
}
