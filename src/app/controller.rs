//! Application Controller für zentrale Event-Verarbeitung.

use super::{AppCommand, AppIntent, AppState};

/// Orchestriert Host-Events und Use-Cases auf den AppState.
#[derive(Debug, Default)]
pub struct AppController;

impl AppController {
    /// Erstellt einen neuen Controller.
    pub fn new() -> Self {
        Self
    }

    /// Verarbeitet einen Intent über Intent->Command Mapping.
    pub fn handle_intent(&mut self, state: &mut AppState, intent: AppIntent) -> anyhow::Result<()> {
        let commands = self.map_intent_to_commands(state, intent);
        for command in commands {
            self.handle_command(state, command)?;
        }

        Ok(())
    }

    fn map_intent_to_commands(&self, state: &AppState, intent: AppIntent) -> Vec<AppCommand> {
        super::intent_mapping::map_intent_to_commands(state, intent)
    }

    /// Führt mutierende Commands auf dem AppState aus.
    /// Dispatcht an Feature-Handler in `handlers/`.
    pub fn handle_command(
        &mut self,
        state: &mut AppState,
        command: AppCommand,
    ) -> anyhow::Result<()> {
        state.command_log.record(command.clone());
        use super::handlers;

        match command {
            // === Bearbeitungsmodus ===
            AppCommand::EnterEdit => handlers::editing::enter_edit(state),
            AppCommand::ExitEdit => handlers::editing::exit_edit(state),
            AppCommand::ToggleEdit => handlers::editing::toggle_edit(state),

            // === Selektion ===
            AppCommand::SelectPoint { index, additive } => {
                handlers::selection::select_point(state, index, additive)
            }
            AppCommand::SelectSegment { index } => handlers::selection::select_segment(state, index),
            AppCommand::SelectAllPoints => handlers::selection::select_all(state),
            AppCommand::ClearSelection => handlers::selection::clear(state),
            AppCommand::SetHover { target } => handlers::selection::set_hover(state, target),

            // === Punkt-Bearbeitung ===
            AppCommand::TogglePointType { index } => {
                handlers::editing::toggle_point_type(state, index)
            }
            AppCommand::InsertPoint { segment_index, t } => {
                handlers::editing::insert_point(state, segment_index, t)
            }
            AppCommand::DeleteSelectedPoints => handlers::editing::delete_selected(state),
            AppCommand::ToggleClosed => handlers::editing::toggle_closed(state),

            // === Drag ===
            AppCommand::BeginHandleDrag { handle } => handlers::drag::begin_handle(state, handle),
            AppCommand::BeginSegmentDrag {
                segment_index,
                press,
            } => handlers::drag::begin_segment(state, segment_index, press),
            AppCommand::UpdateDrag {
                local_pos,
                break_symmetry,
            } => handlers::drag::update(state, local_pos, break_symmetry),
            AppCommand::EndDrag => handlers::drag::end(state),

            // === Pen-Tool ===
            AppCommand::PenPointerDown { pos } => handlers::pen::pointer_down(state, pos),
            AppCommand::PenPointerMove {
                pos,
                break_symmetry,
            } => handlers::pen::pointer_move(state, pos, break_symmetry),
            AppCommand::PenPointerUp => handlers::pen::pointer_up(state),
            AppCommand::PenConfirm => handlers::pen::confirm(state),
            AppCommand::PenCancel => handlers::pen::cancel(state),

            // === Werkzeug, Ansicht, Daten ===
            AppCommand::SetTool { tool } => handlers::editing::set_editor_tool(state, tool),
            AppCommand::SetZoom { zoom } => handlers::view::set_zoom(state, zoom),
            AppCommand::ApplyOptions { options } => handlers::view::apply_options(state, options),
            AppCommand::LoadPath { path } => handlers::file_io::load_path(state, path),
            AppCommand::LoadPathJson { json } => handlers::file_io::load_path_json(state, &json)?,
        }

        Ok(())
    }
}
