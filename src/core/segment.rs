//! Kurven-Kernel für ein einzelnes Pfad-Segment.
//!
//! Lineare, quadratische und kubische Segmente teilen sich eine einheitliche
//! kubische Kontrollpolygon-Darstellung:
//! - **Linear:** P1 = P0, P2 = P3 (degenerierte Kubik, ausgewertet als Gerade)
//! - **Quadratisch:** exakte Grad-Erhöhung des einen Steuerpunkts
//! - **Kubisch:** beide Steuerpunkte direkt
//!
//! Aufrufer müssen daher nie zwischen den Varianten unterscheiden. Lineare
//! Segmente werden gleichförmig in t ausgewertet, damit der Parameter aus
//! `closest_point` und `evaluate` übereinstimmt.

use super::bounds::Rect;
use super::point::PathPoint;
use glam::DVec2;

/// Anteil der Bogenlänge, auf den die Steuerpunkte eines Split-Punkts skaliert werden.
pub const SPLIT_HANDLE_RATIO: f64 = 0.15;

/// Stützstellen für die Polylinien-Längenapproximation.
const LENGTH_SAMPLES: usize = 64;
/// Grobe Abtastung vor der Newton-Verfeinerung in `closest_point`.
const PROJECTION_SAMPLES: usize = 32;
/// Newton-Iterationen in `closest_point`.
const PROJECTION_ITERATIONS: usize = 6;
/// Vektoren kürzer als dieser Wert gelten als Nullvektor.
const ZERO_LENGTH_EPSILON: f64 = 1e-12;

/// Art eines Segments, abgeleitet aus den Steuerpunkten der beiden Endpunkte.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SegmentKind {
    /// Keine Steuerpunkte
    Linear,
    /// Genau ein Steuerpunkt (start.cp2 oder end.cp1)
    Quadratic,
    /// Beide Steuerpunkte
    Cubic,
}

/// Segment in kubischer Kontrollpolygon-Darstellung.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CubicSegment {
    pub p0: DVec2,
    pub p1: DVec2,
    pub p2: DVec2,
    pub p3: DVec2,
    pub kind: SegmentKind,
}

/// Ergebnis einer Projektion auf ein Segment.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ClosestPoint {
    /// Kurvenparameter des nächsten Punkts
    pub t: f64,
    /// Nächster Punkt auf der Kurve
    pub point: DVec2,
    /// Euklidische Distanz zum Zielpunkt
    pub distance: f64,
}

/// Ergebnis von `CubicSegment::split`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SegmentSplit {
    /// Teilkurve [0, t] (exakt nach de Casteljau)
    pub left: CubicSegment,
    /// Teilkurve [t, 1] (exakt nach de Casteljau)
    pub right: CubicSegment,
    /// Neuer Randpunkt B(t)
    pub point: DVec2,
    /// Eingehender Steuerpunkt des neuen Punkts (Tangente × Bogenlängen-Anteil)
    pub in_handle: DVec2,
    /// Ausgehender Steuerpunkt des neuen Punkts
    pub out_handle: DVec2,
}

impl CubicSegment {
    /// Kubisches Segment aus vier Kontrollpunkten.
    pub fn new(p0: DVec2, p1: DVec2, p2: DVec2, p3: DVec2) -> Self {
        Self {
            p0,
            p1,
            p2,
            p3,
            kind: SegmentKind::Cubic,
        }
    }

    /// Gerade Strecke als degenerierte Kubik.
    pub fn linear(p0: DVec2, p3: DVec2) -> Self {
        Self {
            p0,
            p1: p0,
            p2: p3,
            p3,
            kind: SegmentKind::Linear,
        }
    }

    /// Quadratische Kurve mit Steuerpunkt `q`, exakt auf Grad 3 erhöht.
    ///
    /// `P1 = P0 + 2/3·(Q − P0)`, `P2 = P3 + 2/3·(Q − P3)`
    pub fn quadratic(p0: DVec2, q: DVec2, p3: DVec2) -> Self {
        Self {
            p0,
            p1: p0 + (q - p0) * (2.0 / 3.0),
            p2: p3 + (q - p3) * (2.0 / 3.0),
            p3,
            kind: SegmentKind::Quadratic,
        }
    }

    /// Leitet das Segment zwischen zwei aufeinanderfolgenden Punkten ab.
    pub fn between(start: &PathPoint, end: &PathPoint) -> Self {
        match (start.cp2, end.cp1) {
            (Some(c1), Some(c2)) => Self::new(start.position, c1, c2, end.position),
            (Some(q), None) | (None, Some(q)) => Self::quadratic(start.position, q, end.position),
            (None, None) => Self::linear(start.position, end.position),
        }
    }

    /// B(t) = (1-t)³·P0 + 3(1-t)²t·P1 + 3(1-t)t²·P2 + t³·P3
    ///
    /// t wird auf [0, 1] begrenzt; t = 0 und t = 1 liefern exakt die Anker.
    pub fn evaluate(&self, t: f64) -> DVec2 {
        if t.is_nan() || t <= 0.0 {
            return self.p0;
        }
        if t >= 1.0 {
            return self.p3;
        }
        if self.kind == SegmentKind::Linear {
            return self.p0.lerp(self.p3, t);
        }
        let inv = 1.0 - t;
        let inv2 = inv * inv;
        let t2 = t * t;
        inv2 * inv * self.p0 + 3.0 * inv2 * t * self.p1 + 3.0 * inv * t2 * self.p2 + t2 * t * self.p3
    }

    /// B'(t) = 3[(1-t)²(P1-P0) + 2(1-t)t(P2-P1) + t²(P3-P2)]
    pub fn derivative(&self, t: f64) -> DVec2 {
        if self.kind == SegmentKind::Linear {
            return self.p3 - self.p0;
        }
        let t = clamp_unit(t);
        let inv = 1.0 - t;
        3.0 * (inv * inv * (self.p1 - self.p0)
            + 2.0 * inv * t * (self.p2 - self.p1)
            + t * t * (self.p3 - self.p2))
    }

    /// B''(t) = 6[(1-t)(P2 - 2P1 + P0) + t(P3 - 2P2 + P1)]
    fn second_derivative(&self, t: f64) -> DVec2 {
        if self.kind == SegmentKind::Linear {
            return DVec2::ZERO;
        }
        let t = clamp_unit(t);
        6.0 * ((1.0 - t) * (self.p2 - 2.0 * self.p1 + self.p0)
            + t * (self.p3 - 2.0 * self.p2 + self.p1))
    }

    /// Normalisierte Tangente bei t.
    ///
    /// Verschwindet die Ableitung (z.B. Steuerpunkt deckt sich mit Anker), wird
    /// die Richtung aus der Nachbarschaft von t, dann aus der Sehne und
    /// zuletzt als (1, 0) bestimmt. Liefert nie NaN.
    pub fn tangent(&self, t: f64) -> DVec2 {
        let t = clamp_unit(t);
        if let Some(dir) = normalize_or_none(self.derivative(t)) {
            return dir;
        }
        let h = 1e-4;
        let ahead = self.evaluate((t + h).min(1.0));
        let behind = self.evaluate((t - h).max(0.0));
        normalize_or_none(ahead - behind)
            .or_else(|| normalize_or_none(self.p3 - self.p0))
            .unwrap_or(DVec2::X)
    }

    /// Bogenlänge (exakt für lineare Segmente, sonst Polylinien-Approximation).
    pub fn length(&self) -> f64 {
        if self.kind == SegmentKind::Linear {
            return self.p0.distance(self.p3);
        }
        let mut length = 0.0;
        let mut prev = self.p0;
        for i in 1..=LENGTH_SAMPLES {
            let p = self.evaluate(i as f64 / LENGTH_SAMPLES as f64);
            length += prev.distance(p);
            prev = p;
        }
        length
    }

    /// Exakte Bounding-Box über die Kurven-Extrema (B'(t) = 0 je Achse).
    ///
    /// Steuerpunkte können über die Anker-Spanne hinausragen, deshalb reicht
    /// ein Min/Max der Anker nicht.
    pub fn bounding_box(&self) -> Rect {
        let mut rect = Rect::from_point(self.p0);
        rect.include(self.p3);
        if self.kind == SegmentKind::Linear {
            return rect;
        }

        // B'(t)/3 je Achse als a·t² + b·t + c
        let a = -self.p0 + 3.0 * self.p1 - 3.0 * self.p2 + self.p3;
        let b = 2.0 * (self.p0 - 2.0 * self.p1 + self.p2);
        let c = self.p1 - self.p0;

        for t in solve_quadratic(a.x, b.x, c.x)
            .into_iter()
            .chain(solve_quadratic(a.y, b.y, c.y))
            .flatten()
        {
            if t > 0.0 && t < 1.0 {
                rect.include(self.evaluate(t));
            }
        }
        rect
    }

    /// Nächster Punkt auf dem Segment zu `target`.
    ///
    /// Lineare Segmente werden exakt projiziert, gekrümmte per Abtastung und
    /// anschließender Newton-Raphson-Verfeinerung.
    pub fn closest_point(&self, target: DVec2) -> ClosestPoint {
        if self.kind == SegmentKind::Linear {
            let chord = self.p3 - self.p0;
            let len_sq = chord.length_squared();
            let t = if len_sq < ZERO_LENGTH_EPSILON {
                0.0
            } else {
                ((target - self.p0).dot(chord) / len_sq).clamp(0.0, 1.0)
            };
            let point = self.p0 + chord * t;
            return ClosestPoint {
                t,
                point,
                distance: point.distance(target),
            };
        }

        let mut best_t = 0.0;
        let mut best_dist_sq = self.p0.distance_squared(target);
        for i in 1..=PROJECTION_SAMPLES {
            let t = i as f64 / PROJECTION_SAMPLES as f64;
            let dist_sq = self.evaluate(t).distance_squared(target);
            if dist_sq < best_dist_sq {
                best_dist_sq = dist_sq;
                best_t = t;
            }
        }

        let refined = self.refine_projection(target, best_t);
        let refined_dist_sq = self.evaluate(refined).distance_squared(target);
        let t = if refined_dist_sq <= best_dist_sq {
            refined
        } else {
            best_t
        };
        let point = self.evaluate(t);
        ClosestPoint {
            t,
            point,
            distance: point.distance(target),
        }
    }

    /// Newton-Raphson auf f(t) = (B(t) − target) · B'(t).
    fn refine_projection(&self, target: DVec2, mut t: f64) -> f64 {
        for _ in 0..PROJECTION_ITERATIONS {
            let diff = self.evaluate(t) - target;
            let d1 = self.derivative(t);
            let d2 = self.second_derivative(t);
            let f = diff.dot(d1);
            let f_prime = d1.dot(d1) + diff.dot(d2);
            if f_prime.abs() < ZERO_LENGTH_EPSILON {
                break;
            }
            t = (t - f / f_prime).clamp(0.0, 1.0);
        }
        t
    }

    /// Teilt das Segment bei t (de Casteljau) mit Standard-Steuerpunkt-Anteil.
    pub fn split(&self, t: f64) -> SegmentSplit {
        self.split_with_ratio(t, SPLIT_HANDLE_RATIO)
    }

    /// Teilt das Segment bei t.
    ///
    /// `left` und `right` reproduzieren die Originalkurve exakt. Die Steuerpunkte
    /// des neuen Randpunkts liegen entlang der Tangente bei t, skaliert auf
    /// `handle_ratio` × Bogenlänge des Originalsegments.
    pub fn split_with_ratio(&self, t: f64, handle_ratio: f64) -> SegmentSplit {
        let t = clamp_unit(t);
        let point = self.evaluate(t);
        let (left, right) = if self.kind == SegmentKind::Linear {
            (
                Self::linear(self.p0, point),
                Self::linear(point, self.p3),
            )
        } else {
            let a = self.p0.lerp(self.p1, t);
            let b = self.p1.lerp(self.p2, t);
            let c = self.p2.lerp(self.p3, t);
            let ab = a.lerp(b, t);
            let bc = b.lerp(c, t);
            (
                Self {
                    p0: self.p0,
                    p1: a,
                    p2: ab,
                    p3: point,
                    kind: self.kind,
                },
                Self {
                    p0: point,
                    p1: bc,
                    p2: c,
                    p3: self.p3,
                    kind: self.kind,
                },
            )
        };

        let offset = self.tangent(t) * (self.length() * handle_ratio);
        SegmentSplit {
            left,
            right,
            point,
            in_handle: point - offset,
            out_handle: point + offset,
        }
    }
}

fn clamp_unit(t: f64) -> f64 {
    if t.is_nan() {
        0.0
    } else {
        t.clamp(0.0, 1.0)
    }
}

fn normalize_or_none(v: DVec2) -> Option<DVec2> {
    let len = v.length();
    if len > ZERO_LENGTH_EPSILON && len.is_finite() {
        Some(v / len)
    } else {
        None
    }
}

/// Löst a·x² + b·x + c = 0 (0, 1 oder 2 reelle Lösungen).
fn solve_quadratic(a: f64, b: f64, c: f64) -> [Option<f64>; 2] {
    const EPS: f64 = 1e-12;
    if a.abs() < EPS {
        if b.abs() < EPS {
            return [None, None];
        }
        return [Some(-c / b), None];
    }
    let discriminant = b * b - 4.0 * a * c;
    if discriminant < 0.0 {
        [None, None]
    } else if discriminant < EPS {
        [Some(-b / (2.0 * a)), None]
    } else {
        let sqrt_d = discriminant.sqrt();
        [
            Some((-b - sqrt_d) / (2.0 * a)),
            Some((-b + sqrt_d) / (2.0 * a)),
        ]
    }
}

#[cfg(test)]
mod tests;
