//! Parser für die JSON-Persistenzform.

use super::dto::PersistedPath;
use crate::core::{PathPoint, VectorPath};
use anyhow::Result;

/// Liest einen Pfad aus JSON und renormalisiert ihn.
///
/// Nur syntaktisch kaputtes JSON oder ein Nicht-Objekt auf oberster Ebene
/// ergeben einen Fehler; fehlende Felder werden mit Standardwerten gefüllt.
pub fn parse_path_json(json: &str) -> Result<VectorPath> {
    let persisted: PersistedPath = serde_json::from_str(json)?;

    let points: Vec<PathPoint> = persisted
        .points
        .unwrap_or_default()
        .iter()
        .map(PathPoint::from)
        .collect();
    let hole_rings: Vec<Vec<PathPoint>> = persisted
        .hole_rings
        .unwrap_or_default()
        .iter()
        .map(|ring| ring.iter().map(PathPoint::from).collect())
        .collect();

    log::debug!(
        "Pfad-JSON gelesen: {} Punkte, {} Lochringe",
        points.len(),
        hole_rings.len()
    );
    Ok(VectorPath::from_page_parts(
        points,
        persisted.is_closed,
        hole_rings,
    ))
}
