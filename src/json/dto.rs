//! Serde-Transferobjekte der Persistenzform.

use crate::core::PathPoint;
use glam::DVec2;
use serde::{Deserialize, Deserializer, Serialize};

/// `null` wird wie ein fehlendes Feld behandelt (Standardwert).
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Option::unwrap_or_default)
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub(crate) struct PersistedCoord {
    #[serde(deserialize_with = "null_as_default")]
    pub x: f64,
    #[serde(deserialize_with = "null_as_default")]
    pub y: f64,
}

impl From<DVec2> for PersistedCoord {
    fn from(v: DVec2) -> Self {
        Self { x: v.x, y: v.y }
    }
}

impl From<PersistedCoord> for DVec2 {
    fn from(c: PersistedCoord) -> Self {
        DVec2::new(c.x, c.y)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub(crate) struct PersistedPoint {
    #[serde(deserialize_with = "null_as_default")]
    pub x: f64,
    #[serde(deserialize_with = "null_as_default")]
    pub y: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cp1: Option<PersistedCoord>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cp2: Option<PersistedCoord>,
}

impl From<&PathPoint> for PersistedPoint {
    fn from(point: &PathPoint) -> Self {
        Self {
            x: point.position.x,
            y: point.position.y,
            cp1: point.cp1.map(PersistedCoord::from),
            cp2: point.cp2.map(PersistedCoord::from),
        }
    }
}

impl From<&PersistedPoint> for PathPoint {
    fn from(point: &PersistedPoint) -> Self {
        PathPoint {
            position: DVec2::new(point.x, point.y),
            cp1: point.cp1.map(DVec2::from),
            cp2: point.cp2.map(DVec2::from),
        }
    }
}

/// Flache Persistenzform; `null` zählt überall wie ein fehlendes Feld.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub(crate) struct PersistedPath {
    pub points: Option<Vec<PersistedPoint>>,
    #[serde(deserialize_with = "null_as_default")]
    pub is_closed: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hole_rings: Option<Vec<Vec<PersistedPoint>>>,
}
