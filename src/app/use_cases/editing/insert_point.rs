//! Use-Case: Punkt auf einem Segment einfügen.

use super::settle;
use crate::app::PathEditState;
use crate::core::path::segment_endpoints;
use crate::core::PathPoint;

/// Teilt Segment `segment_index` bei `t` und fügt dort einen Punkt ein.
///
/// Die Randpunkte übernehmen die Steuerpunkte des exakten Splits; der neue
/// Punkt erhält tangentiale Steuerpunkte (`handle_ratio` × Bogenlänge). Gerade
/// Segmente laufen durch denselben Split, ihre Steuerpunkte liegen daher auf
/// der Geraden (die Randpunkte erhalten sie auf ihrem Anker). Der neue Punkt wird hinter dem
/// Startpunkt eingefügt, beim Schließsegment also am Ende vor dem Umlauf zum
/// ersten Punkt. Er ist danach die einzige Selektion.
pub fn insert_point_on_segment(
    state: &PathEditState,
    segment_index: usize,
    t: f64,
    handle_ratio: f64,
) -> PathEditState {
    let path = &state.path;
    let (Some((start, end)), Some(segment)) = (
        segment_endpoints(path.point_count(), segment_index, path.is_closed),
        path.segment(segment_index),
    ) else {
        log::debug!("Einfügen: Segment {} existiert nicht", segment_index);
        return state.clone();
    };

    let split = segment.split_with_ratio(t, handle_ratio);
    let mut next = state.clone();
    let points = &mut next.path_mut().points;

    points[start].cp2 = Some(split.left.p1);
    points[end].cp1 = Some(split.right.p2);
    let insert_at = start + 1;
    points.insert(
        insert_at,
        PathPoint::with_handles(split.point, split.in_handle, split.out_handle),
    );

    let selection = &mut next.session.selection;
    selection.clear();
    selection.selected_points.insert(insert_at);
    settle(&mut next);

    log::info!(
        "Punkt {} auf Segment {} eingefügt (t = {:.3})",
        insert_at,
        segment_index,
        t
    );
    next
}
