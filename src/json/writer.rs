//! Writer für die JSON-Persistenzform.

use super::dto::{PersistedPath, PersistedPoint};
use crate::core::{PathPoint, VectorPath};
use anyhow::Result;

/// Schreibt einen Pfad als JSON (Seitenkoordinaten).
///
/// Leere Lochring-Listen werden weggelassen.
pub fn write_path_json(path: &VectorPath) -> Result<String> {
    let hole_rings = path.page_hole_rings();
    let persisted = PersistedPath {
        points: Some(persist_ring(&path.page_points())),
        is_closed: path.is_closed,
        hole_rings: (!hole_rings.is_empty())
            .then(|| hole_rings.iter().map(|ring| persist_ring(ring)).collect()),
    };
    Ok(serde_json::to_string_pretty(&persisted)?)
}

fn persist_ring(points: &[PathPoint]) -> Vec<PersistedPoint> {
    points.iter().map(PersistedPoint::from).collect()
}
