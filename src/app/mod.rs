//! Application-Layer: Controller, State, Events, Interaktion und Use-Cases.

pub mod command_log;
pub mod controller;
pub mod events;
pub mod handlers;
/// Trefferprüfung und Snap-Hysterese
pub mod interaction;
mod intent_mapping;
/// Application State
///
/// Dieses Modul verwaltet den Zustand der Anwendung (Pfad, Sitzung, Werkzeug, Ansicht).
pub mod state;
pub mod tools;
pub mod use_cases;

pub use crate::core::{HandleRef, HandleRole};
pub use command_log::CommandLog;
pub use controller::AppController;
pub use events::{AppCommand, AppIntent};
pub use interaction::{HitTarget, Modifiers};
pub use state::{
    AppState, EditSession, EditorTool, EditorToolState, PathEditState, SelectionState, ViewState,
};
pub use tools::pen::{CreationPreview, CreationSession};
