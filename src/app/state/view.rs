/// View-bezogener Anwendungszustand
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewState {
    /// Zoom-Faktor des Hosts (> 0); Pixel-Radien werden dadurch geteilt
    pub zoom: f64,
}

impl Default for ViewState {
    fn default() -> Self {
        Self::new()
    }
}

impl ViewState {
    /// Erstellt den Standard-View-Zustand (Zoom 1).
    pub fn new() -> Self {
        Self { zoom: 1.0 }
    }

    /// Übernimmt einen neuen Zoom; nicht-endliche oder nicht-positive Werte werden ignoriert.
    ///
    /// Gibt `true` zurück, wenn der Wert übernommen wurde.
    pub fn set_zoom(&mut self, zoom: f64) -> bool {
        if !zoom.is_finite() || zoom <= 0.0 {
            log::debug!("Ungültiger Zoom ignoriert: {zoom}");
            return false;
        }
        self.zoom = zoom;
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_zoom_is_ignored() {
        let mut view = ViewState::new();
        assert!(view.set_zoom(2.0));
        assert!(!view.set_zoom(0.0));
        assert!(!view.set_zoom(-1.0));
        assert!(!view.set_zoom(f64::NAN));
        assert_eq!(view.zoom, 2.0);
    }
}
