pub mod formatter;

pub use formatter::{print_outcome, print_status};
