use super::*;
use approx::{assert_abs_diff_eq, assert_relative_eq};

fn arch() -> CubicSegment {
    CubicSegment::new(
        DVec2::new(0.0, 0.0),
        DVec2::new(3.0, 10.0),
        DVec2::new(7.0, 10.0),
        DVec2::new(10.0, 0.0),
    )
}

fn s_curve() -> CubicSegment {
    let start = PathPoint {
        position: DVec2::new(0.0, 50.0),
        cp1: None,
        cp2: Some(DVec2::new(50.0, 0.0)),
    };
    let end = PathPoint {
        position: DVec2::new(100.0, 50.0),
        cp1: Some(DVec2::new(50.0, 100.0)),
        cp2: None,
    };
    CubicSegment::between(&start, &end)
}

// ── Darstellung ──

#[test]
fn test_between_derives_kind_from_handles() {
    let a = PathPoint::new(0.0, 0.0);
    let b = PathPoint::new(10.0, 0.0);
    assert_eq!(CubicSegment::between(&a, &b).kind, SegmentKind::Linear);

    let a_out = PathPoint {
        cp2: Some(DVec2::new(5.0, 5.0)),
        ..a
    };
    assert_eq!(
        CubicSegment::between(&a_out, &b).kind,
        SegmentKind::Quadratic
    );

    let b_in = PathPoint {
        cp1: Some(DVec2::new(5.0, -5.0)),
        ..b
    };
    assert_eq!(CubicSegment::between(&a, &b_in).kind, SegmentKind::Quadratic);
    assert_eq!(CubicSegment::between(&a_out, &b_in).kind, SegmentKind::Cubic);
}

#[test]
fn test_quadratic_elevation_matches_quadratic_formula() {
    // Quadratisch (0,0) → Q(5,10) → (10,0): B(0.5) = (5, 5)
    let seg = CubicSegment::quadratic(
        DVec2::new(0.0, 0.0),
        DVec2::new(5.0, 10.0),
        DVec2::new(10.0, 0.0),
    );
    let mid = seg.evaluate(0.5);
    assert_relative_eq!(mid.x, 5.0, epsilon = 1e-9);
    assert_relative_eq!(mid.y, 5.0, epsilon = 1e-9);
}

// ── Auswertung ──

#[test]
fn test_evaluate_boundaries_are_exact_anchors() {
    for seg in [arch(), s_curve(), CubicSegment::linear(DVec2::ZERO, DVec2::new(3.0, 4.0))] {
        assert_eq!(seg.evaluate(0.0), seg.p0);
        assert_eq!(seg.evaluate(1.0), seg.p3);
    }
}

#[test]
fn test_evaluate_clamps_out_of_range_parameters() {
    let seg = arch();
    assert_eq!(seg.evaluate(-0.5), seg.p0);
    assert_eq!(seg.evaluate(1.5), seg.p3);
    assert_eq!(seg.evaluate(f64::NAN), seg.p0);
}

#[test]
fn test_linear_segment_is_uniform_in_t() {
    let seg = CubicSegment::linear(DVec2::ZERO, DVec2::new(10.0, 0.0));
    assert_eq!(seg.evaluate(0.25), DVec2::new(2.5, 0.0));
    assert_eq!(seg.derivative(0.0), DVec2::new(10.0, 0.0));
    let tangent = seg.tangent(0.0);
    assert_relative_eq!(tangent.x, 1.0, epsilon = 1e-9);
    assert_relative_eq!(tangent.y, 0.0, epsilon = 1e-9);
}

#[test]
fn test_tangent_of_zero_length_segment_is_canonical() {
    let p = DVec2::new(4.0, 4.0);
    let seg = CubicSegment::linear(p, p);
    let tangent = seg.tangent(0.5);
    assert_eq!(tangent, DVec2::X);
    assert!(tangent.is_finite());
}

#[test]
fn test_tangent_is_normalized() {
    let seg = arch();
    for i in 0..=10 {
        let tangent = seg.tangent(i as f64 / 10.0);
        assert_relative_eq!(tangent.length(), 1.0, epsilon = 1e-9);
    }
}

// ── Länge ──

#[test]
fn test_length_of_linear_segment_is_exact() {
    let seg = CubicSegment::linear(DVec2::ZERO, DVec2::new(3.0, 4.0));
    assert_eq!(seg.length(), 5.0);
}

#[test]
fn test_length_of_collinear_cubic() {
    let seg = CubicSegment::new(
        DVec2::new(0.0, 0.0),
        DVec2::new(1.0, 0.0),
        DVec2::new(2.0, 0.0),
        DVec2::new(3.0, 0.0),
    );
    assert_relative_eq!(seg.length(), 3.0, epsilon = 1e-6);
}

#[test]
fn test_length_of_curve_exceeds_chord() {
    let seg = arch();
    assert!(seg.length() > seg.p0.distance(seg.p3));
}

// ── Bounding-Box ──

#[test]
fn test_bounding_box_of_s_curve_extends_past_anchors() {
    let rect = s_curve().bounding_box();
    assert!(rect.min.y < 50.0);
    assert!(rect.max.y > 50.0);
    assert_relative_eq!(rect.min.x, 0.0);
    assert_relative_eq!(rect.max.x, 100.0);
}

#[test]
fn test_bounding_box_of_arch_hits_apex() {
    // Scheitel bei B(0.5) = (5, 7.5)
    let rect = arch().bounding_box();
    assert_relative_eq!(rect.max.y, 7.5, epsilon = 1e-9);
    assert_relative_eq!(rect.min.y, 0.0);
}

#[test]
fn test_bounding_box_is_superset_of_anchor_bounds() {
    let seg = arch();
    let rect = seg.bounding_box();
    let anchors = {
        let mut r = Rect::from_point(seg.p0);
        r.include(seg.p3);
        r
    };
    assert!(rect.contains_rect(&anchors));
    assert!(rect.height() > anchors.height());

    let line = CubicSegment::linear(DVec2::new(0.0, 0.0), DVec2::new(100.0, 100.0));
    let line_rect = line.bounding_box();
    assert_eq!(line_rect.min, DVec2::new(0.0, 0.0));
    assert_eq!(line_rect.max, DVec2::new(100.0, 100.0));
}

// ── Projektion ──

#[test]
fn test_closest_point_on_linear_segment() {
    let seg = CubicSegment::linear(DVec2::ZERO, DVec2::new(10.0, 0.0));
    let hit = seg.closest_point(DVec2::new(4.0, 3.0));
    assert_relative_eq!(hit.t, 0.4, epsilon = 1e-12);
    assert_relative_eq!(hit.distance, 3.0, epsilon = 1e-12);

    let beyond = seg.closest_point(DVec2::new(15.0, 0.0));
    assert_eq!(beyond.t, 1.0);
    assert_relative_eq!(beyond.distance, 5.0);
}

#[test]
fn test_closest_point_on_curve_above_apex() {
    let hit = arch().closest_point(DVec2::new(5.0, 9.5));
    assert_abs_diff_eq!(hit.t, 0.5, epsilon = 1e-4);
    assert_abs_diff_eq!(hit.distance, 2.0, epsilon = 1e-4);
}

#[test]
fn test_closest_point_on_degenerate_segment() {
    let p = DVec2::new(1.0, 1.0);
    let hit = CubicSegment::linear(p, p).closest_point(DVec2::new(4.0, 5.0));
    assert_eq!(hit.t, 0.0);
    assert_relative_eq!(hit.distance, 5.0);
}

// ── Split ──

#[test]
fn test_split_reproduces_curve_at_parameter() {
    let seg = arch();
    let t = 0.3;
    let split = seg.split(t);
    let at_t = seg.evaluate(t);
    assert_eq!(split.left.evaluate(1.0), at_t);
    assert_eq!(split.right.evaluate(0.0), at_t);
    assert_eq!(split.point, at_t);
}

#[test]
fn test_split_halves_follow_original_curve() {
    let seg = s_curve();
    let t = 0.4;
    let split = seg.split(t);
    for i in 0..=10 {
        let u = i as f64 / 10.0;
        let left = split.left.evaluate(u);
        let original_left = seg.evaluate(u * t);
        assert_abs_diff_eq!(left.x, original_left.x, epsilon = 1e-9);
        assert_abs_diff_eq!(left.y, original_left.y, epsilon = 1e-9);

        let right = split.right.evaluate(u);
        let original_right = seg.evaluate(t + u * (1.0 - t));
        assert_abs_diff_eq!(right.x, original_right.x, epsilon = 1e-9);
        assert_abs_diff_eq!(right.y, original_right.y, epsilon = 1e-9);
    }
}

#[test]
fn test_split_handles_follow_tangent_scaled_by_arc_length() {
    let seg = arch();
    let split = seg.split(0.5);
    let expected = seg.length() * SPLIT_HANDLE_RATIO;
    assert_relative_eq!(split.point.distance(split.out_handle), expected, epsilon = 1e-9);
    assert_relative_eq!(split.point.distance(split.in_handle), expected, epsilon = 1e-9);
    // Symmetrisch um den neuen Punkt
    let mirrored = 2.0 * split.point - split.out_handle;
    assert_abs_diff_eq!(mirrored.x, split.in_handle.x, epsilon = 1e-9);
    assert_abs_diff_eq!(mirrored.y, split.in_handle.y, epsilon = 1e-9);
    // Am Scheitel verläuft die Tangente horizontal
    assert_abs_diff_eq!(split.out_handle.y, split.point.y, epsilon = 1e-9);
    assert!(split.out_handle.x > split.point.x);
}

#[test]
fn test_split_linear_segment_stays_linear() {
    let seg = CubicSegment::linear(DVec2::ZERO, DVec2::new(10.0, 0.0));
    let split = seg.split(0.25);
    assert_eq!(split.point, DVec2::new(2.5, 0.0));
    assert_eq!(split.left.kind, SegmentKind::Linear);
    assert_eq!(split.right.kind, SegmentKind::Linear);
    assert_eq!(split.left.p3, split.right.p0);
}

#[test]
fn test_solve_quadratic_handles_degenerate_coefficients() {
    assert_eq!(solve_quadratic(0.0, 0.0, 1.0), [None, None]);
    assert_eq!(solve_quadratic(0.0, 2.0, -1.0), [Some(0.5), None]);
    assert_eq!(solve_quadratic(1.0, 0.0, 1.0), [None, None]);
    let [a, b] = solve_quadratic(1.0, -3.0, 2.0);
    assert_eq!(a, Some(1.0));
    assert_eq!(b, Some(2.0));
}
