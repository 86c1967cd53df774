//! Zentrale Konfiguration für den Pfad-Editor.
//!
//! `EditorOptions` enthält alle zur Laufzeit änderbaren Werte.
//! Die `const`-Werte bleiben als Fallback/Default erhalten.
//! Alle Pixel-Werte sind unskaliert und werden vor dem Vergleich durch den Zoom geteilt.

use serde::{Deserialize, Serialize};

// ── Hit-Testing ─────────────────────────────────────────────────────

/// Treffer-Radius für Anker-Punkte in Screen-Pixeln.
pub const ANCHOR_HIT_RADIUS_PX: f64 = 8.0;
/// Treffer-Radius für Steuerpunkte in Screen-Pixeln.
pub const HANDLE_HIT_RADIUS_PX: f64 = 8.0;
/// Treffer-Radius für Segmente in Screen-Pixeln.
pub const SEGMENT_HIT_RADIUS_PX: f64 = 6.0;
/// Innerhalb dieses Radius um einen Anker wird nie ein Segment getroffen.
pub const ANCHOR_EXCLUSION_RADIUS_PX: f64 = 10.0;

// ── Pen-Tool ────────────────────────────────────────────────────────

/// Snap-auf-Startpunkt: Einrast-Schwelle in Screen-Pixeln.
pub const SNAP_ENTER_THRESHOLD_PX: f64 = 12.0;
/// Snap-auf-Startpunkt: Lösen erst ab dieser Distanz zum Einrast-Ort.
pub const SNAP_RELEASE_THRESHOLD_PX: f64 = 15.0;
/// Drag-Distanz, ab der ein neuer Punkt glatt (mit Steuerpunkten) wird.
pub const DRAG_THRESHOLD_PX: f64 = 3.0;
/// Padding um Pfade im Entstehen.
pub const CREATION_PADDING: f64 = crate::core::bounds::CREATION_PADDING;

// ── Punkt-Typ ───────────────────────────────────────────────────────

/// Basis-Abstand synthetisierter Steuerpunkte beim Eck → Glatt-Umschalten.
pub const SMOOTH_HANDLE_OFFSET: f64 = 100.0;
/// Spannung (Faktor auf `SMOOTH_HANDLE_OFFSET`).
pub const SMOOTH_HANDLE_TENSION: f64 = 0.3;
/// Steuerpunkt-Länge eingefügter Punkte relativ zur Segment-Bogenlänge.
pub const SPLIT_HANDLE_RATIO: f64 = crate::core::segment::SPLIT_HANDLE_RATIO;

// ── Bounds ──────────────────────────────────────────────────────────

/// Schwelle, ab der eine Bounds-Änderung an den Host gemeldet wird.
pub const BOUNDS_CHANGE_THRESHOLD: f64 = crate::core::bounds::BOUNDS_CHANGE_THRESHOLD;

// ── Laufzeit-Optionen (serialisierbar) ─────────────────────────────

/// Alle zur Laufzeit änderbaren Editor-Optionen.
/// Fehlende Felder in bestehenden TOML-Dateien fallen auf die Standardwerte zurück.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EditorOptions {
    // ── Hit-Testing ─────────────────────────────────────────────
    /// Treffer-Radius für Anker (px)
    pub anchor_hit_radius_px: f64,
    /// Treffer-Radius für Steuerpunkte (px)
    pub handle_hit_radius_px: f64,
    /// Treffer-Radius für Segmente (px)
    pub segment_hit_radius_px: f64,
    /// Anker-Ausschlussradius für Segment-Treffer (px)
    pub anchor_exclusion_radius_px: f64,

    // ── Pen-Tool ────────────────────────────────────────────────
    /// Einrast-Schwelle Snap-auf-Start (px)
    pub snap_enter_threshold_px: f64,
    /// Löse-Schwelle Snap-auf-Start (px), gemessen ab Einrast-Ort
    pub snap_release_threshold_px: f64,
    /// Drag-Schwelle Ecke/Glatt (px)
    pub drag_threshold_px: f64,
    /// Padding der Creation-Bounds
    pub creation_padding: f64,

    // ── Punkt-Typ ───────────────────────────────────────────────
    /// Basis-Abstand synthetisierter Steuerpunkte
    pub smooth_handle_offset: f64,
    /// Spannung synthetisierter Steuerpunkte
    pub smooth_handle_tension: f64,
    /// Steuerpunkt-Anteil beim Einfügen auf einem Segment
    pub split_handle_ratio: f64,

    // ── Bounds ──────────────────────────────────────────────────
    /// Schwelle für das Bounds-Changed-Signal
    pub bounds_change_threshold: f64,
}

impl Default for EditorOptions {
    fn default() -> Self {
        Self {
            anchor_hit_radius_px: ANCHOR_HIT_RADIUS_PX,
            handle_hit_radius_px: HANDLE_HIT_RADIUS_PX,
            segment_hit_radius_px: SEGMENT_HIT_RADIUS_PX,
            anchor_exclusion_radius_px: ANCHOR_EXCLUSION_RADIUS_PX,

            snap_enter_threshold_px: SNAP_ENTER_THRESHOLD_PX,
            snap_release_threshold_px: SNAP_RELEASE_THRESHOLD_PX,
            drag_threshold_px: DRAG_THRESHOLD_PX,
            creation_padding: CREATION_PADDING,

            smooth_handle_offset: SMOOTH_HANDLE_OFFSET,
            smooth_handle_tension: SMOOTH_HANDLE_TENSION,
            split_handle_ratio: SPLIT_HANDLE_RATIO,

            bounds_change_threshold: BOUNDS_CHANGE_THRESHOLD,
        }
    }
}

impl EditorOptions {
    /// Lädt Optionen aus einer TOML-Datei. Bei Fehler: Standardwerte.
    pub fn load_from_file(path: &std::path::Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(content) => match toml::from_str(&content) {
                Ok(opts) => {
                    log::info!("Optionen geladen aus: {}", path.display());
                    opts
                }
                Err(e) => {
                    log::warn!("Optionen-Datei fehlerhaft, verwende Standardwerte: {}", e);
                    Self::default()
                }
            },
            Err(_) => {
                log::info!("Keine Optionen-Datei gefunden, verwende Standardwerte");
                Self::default()
            }
        }
    }

    /// Speichert Optionen als TOML-Datei.
    pub fn save_to_file(&self, path: &std::path::Path) -> anyhow::Result<()> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        log::info!("Optionen gespeichert nach: {}", path.display());
        Ok(())
    }

    /// Länge synthetisierter Steuerpunkte (Offset × Spannung).
    pub fn smooth_handle_length(&self) -> f64 {
        self.smooth_handle_offset * self.smooth_handle_tension
    }
}
