pub mod parser;

pub use parser::{parse_selection, parse_selection_entry};
