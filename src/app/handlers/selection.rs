//! Handler für Selektions-Operationen.

use crate::app::interaction::HitTarget;
use crate::app::use_cases;
use crate::app::AppState;

/// Selektiert einen Punkt (ersetzen, umschalten oder abwählen).
pub fn select_point(state: &mut AppState, index: usize, additive: bool) {
    state.edit = use_cases::selection::select_point(&state.edit, index, additive);
}

/// Selektiert ein Segment und hebt die Punkt-Selektion auf.
pub fn select_segment(state: &mut AppState, index: usize) {
    state.edit = use_cases::selection::select_segment(&state.edit, index);
}

/// Selektiert alle Punkte.
pub fn select_all(state: &mut AppState) {
    state.edit = use_cases::selection::select_all_points(&state.edit);
}

/// Hebt die Selektion auf.
pub fn clear(state: &mut AppState) {
    state.edit = use_cases::selection::clear_selection(&state.edit);
}

/// Setzt das transiente Hover-Ziel.
pub fn set_hover(state: &mut AppState, target: Option<HitTarget>) {
    state.edit.session.selection.hover = target;
}
