//! JSON Import/Export der flachen Persistenzform eines Pfads.
//!
//! Form: `{ "points": [{x, y, cp1?, cp2?}], "isClosed": bool, "holeRings": [[…]] }`.
//! Punkte werden in Seitenkoordinaten geschrieben; beim Lesen wird renormalisiert.
//! Fehlende Felder fallen auf Standardwerte zurück, unbekannte werden ignoriert.

mod dto;
pub mod parser;
pub mod writer;

pub use parser::parse_path_json;
pub use writer::write_path_json;
