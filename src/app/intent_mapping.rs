//! Mapping von Host-Intents auf mutierende App-Commands.

use super::interaction::{classify_hit, HitRadii, HitTarget, Modifiers};
use super::state::EditorTool;
use super::{AppCommand, AppIntent, AppState};
use crate::core::{HandleRef, HandleRole};
use glam::DVec2;

/// Übersetzt einen `AppIntent` in eine Sequenz ausführbarer `AppCommand`s.
pub fn map_intent_to_commands(state: &AppState, intent: AppIntent) -> Vec<AppCommand> {
    let pen_active = state.editor.active_tool == EditorTool::Pen;
    let editing = state.edit.session.is_editing;

    match intent {
        AppIntent::EnterEditRequested => vec![AppCommand::EnterEdit],
        AppIntent::ExitEditRequested => vec![AppCommand::ExitEdit],
        AppIntent::ToggleEditRequested => vec![AppCommand::ToggleEdit],

        AppIntent::PointerPressed {
            local_pos,
            modifiers,
        } => {
            if pen_active {
                vec![AppCommand::PenPointerDown { pos: local_pos }]
            } else if editing {
                map_press(state, local_pos, modifiers)
            } else {
                Vec::new()
            }
        }
        AppIntent::PointerMoved {
            local_pos,
            modifiers,
        } => {
            if pen_active {
                vec![AppCommand::PenPointerMove {
                    pos: local_pos,
                    break_symmetry: modifiers.break_symmetry,
                }]
            } else if state.editor.is_dragging() {
                vec![AppCommand::UpdateDrag {
                    local_pos,
                    break_symmetry: modifiers.break_symmetry,
                }]
            } else if editing {
                let target = hit_at(state, local_pos);
                if target == state.edit.session.selection.hover {
                    Vec::new()
                } else {
                    vec![AppCommand::SetHover { target }]
                }
            } else {
                Vec::new()
            }
        }
        AppIntent::PointerReleased { .. } => {
            if pen_active {
                vec![AppCommand::PenPointerUp]
            } else if state.editor.is_dragging() {
                vec![AppCommand::EndDrag]
            } else {
                Vec::new()
            }
        }
        AppIntent::PointerDoubleClicked { local_pos } => {
            if pen_active {
                Vec::new()
            } else if !editing {
                vec![AppCommand::EnterEdit]
            } else {
                match hit_at(state, local_pos) {
                    Some(HitTarget::Segment { index, t, .. }) => vec![AppCommand::InsertPoint {
                        segment_index: index,
                        t,
                    }],
                    Some(HitTarget::Anchor(index)) => vec![AppCommand::TogglePointType { index }],
                    Some(HitTarget::Handle(_)) => Vec::new(),
                    None => vec![AppCommand::ExitEdit],
                }
            }
        }

        AppIntent::PointSelectRequested { index, additive } => host_index(index)
            .map(|index| AppCommand::SelectPoint { index, additive })
            .into_iter()
            .collect(),
        AppIntent::SegmentSelectRequested { index } => host_index(index)
            .map(|index| AppCommand::SelectSegment { index })
            .into_iter()
            .collect(),
        AppIntent::SelectAllRequested => vec![AppCommand::SelectAllPoints],
        AppIntent::ClearSelectionRequested => vec![AppCommand::ClearSelection],
        AppIntent::TogglePointTypeRequested { index } => host_index(index)
            .map(|index| AppCommand::TogglePointType { index })
            .into_iter()
            .collect(),
        AppIntent::InsertPointRequested { segment_index, t } => host_index(segment_index)
            .map(|segment_index| AppCommand::InsertPoint { segment_index, t })
            .into_iter()
            .collect(),
        AppIntent::HandleDragStartRequested { point_index, role } => {
            match HandleRef::from_host(point_index, &role) {
                Some(handle) => vec![AppCommand::BeginHandleDrag { handle }],
                None => {
                    log::debug!("Ungültige Handle-Referenz: {} / {:?}", point_index, role);
                    Vec::new()
                }
            }
        }

        AppIntent::DeleteSelectedRequested => {
            if pen_active || !editing {
                Vec::new()
            } else {
                vec![AppCommand::DeleteSelectedPoints]
            }
        }
        AppIntent::ToggleClosedRequested => {
            if pen_active {
                Vec::new()
            } else {
                vec![AppCommand::ToggleClosed]
            }
        }
        AppIntent::ConfirmRequested => {
            if pen_active {
                vec![AppCommand::PenConfirm]
            } else if state.editor.is_dragging() {
                vec![AppCommand::EndDrag]
            } else if editing {
                vec![AppCommand::ExitEdit]
            } else {
                Vec::new()
            }
        }
        AppIntent::CancelRequested => {
            if pen_active {
                vec![AppCommand::PenCancel]
            } else if state.editor.is_dragging() {
                vec![AppCommand::EndDrag]
            } else if !state.edit.session.selection.is_empty() {
                vec![AppCommand::ClearSelection]
            } else if editing {
                vec![AppCommand::ExitEdit]
            } else {
                Vec::new()
            }
        }

        AppIntent::ToolSelected { tool } => vec![AppCommand::SetTool { tool }],
        AppIntent::ZoomChanged { zoom } => vec![AppCommand::SetZoom { zoom }],
        AppIntent::PathLoaded { path } => vec![AppCommand::LoadPath { path }],
        AppIntent::PathJsonLoaded { json } => vec![AppCommand::LoadPathJson { json }],
        AppIntent::OptionsChanged { options } => vec![AppCommand::ApplyOptions { options }],
    }
}

/// Klick im Bearbeitungsmodus: Trefferprüfung entscheidet über Selektion und Drag.
fn map_press(state: &AppState, local_pos: DVec2, modifiers: Modifiers) -> Vec<AppCommand> {
    match hit_at(state, local_pos) {
        Some(HitTarget::Anchor(index)) => vec![
            AppCommand::SelectPoint {
                index,
                additive: modifiers.additive,
            },
            AppCommand::BeginHandleDrag {
                handle: HandleRef::new(index, HandleRole::Anchor),
            },
        ],
        Some(HitTarget::Handle(handle)) => vec![AppCommand::BeginHandleDrag { handle }],
        Some(HitTarget::Segment { index, .. }) => {
            let mut commands = vec![AppCommand::SelectSegment { index }];
            if modifiers.alternate_drag {
                commands.push(AppCommand::BeginSegmentDrag {
                    segment_index: index,
                    press: local_pos,
                });
            }
            commands
        }
        None if modifiers.additive => Vec::new(),
        None => vec![AppCommand::ClearSelection],
    }
}

fn hit_at(state: &AppState, local_pos: DVec2) -> Option<HitTarget> {
    let path = &state.edit.path;
    classify_hit(
        &path.points,
        local_pos,
        state.view.zoom,
        path.is_closed,
        &HitRadii::from_options(&state.options),
    )
}

/// Host-Indizes sind vorzeichenbehaftet; negative Werte sind No-ops.
fn host_index(index: i64) -> Option<usize> {
    let converted = usize::try_from(index).ok();
    if converted.is_none() {
        log::debug!("Negativer Index {} ignoriert", index);
    }
    converted
}
