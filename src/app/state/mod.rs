//! Anwendungszustand: bearbeiteter Pfad, Sitzung, Werkzeug und Ansicht.

mod app_state;
mod editor;
mod selection;
mod session;
mod view;

pub use app_state::AppState;
pub use editor::{EditorTool, EditorToolState};
pub use selection::SelectionState;
pub use session::{EditSession, PathEditState};
pub use view::ViewState;
