//! Referenzen auf greifbare Teile eines Punkts (Anker, cp1, cp2).

/// Welcher Teil eines Punkts wird gegriffen?
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HandleRole {
    /// Der Anker selbst
    Anchor,
    /// Eingehender Steuerpunkt (cp1)
    In,
    /// Ausgehender Steuerpunkt (cp2)
    Out,
}

impl HandleRole {
    /// Parst Host-Bezeichner (`"anchor"`, `"in"`/`"cp1"`, `"out"`/`"cp2"`).
    ///
    /// Unbekannte Bezeichner ergeben `None` und werden vom Aufrufer ignoriert.
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "anchor" | "point" => Some(Self::Anchor),
            "in" | "cp1" => Some(Self::In),
            "out" | "cp2" => Some(Self::Out),
            _ => None,
        }
    }

    /// Gegenüberliegender Steuerpunkt (für Spiegelung).
    pub fn opposite(self) -> Option<Self> {
        match self {
            Self::Anchor => None,
            Self::In => Some(Self::Out),
            Self::Out => Some(Self::In),
        }
    }
}

/// Anker oder Steuerpunkt eines bestimmten Punkts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct HandleRef {
    pub point_index: usize,
    pub role: HandleRole,
}

impl HandleRef {
    pub fn new(point_index: usize, role: HandleRole) -> Self {
        Self { point_index, role }
    }

    /// Baut eine Referenz aus Host-Daten; negative Indizes oder unbekannte Rollen → `None`.
    pub fn from_host(point_index: i64, role: &str) -> Option<Self> {
        let point_index = usize::try_from(point_index).ok()?;
        Some(Self::new(point_index, HandleRole::parse(role)?))
    }
}
