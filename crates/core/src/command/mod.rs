//! Archive command definitions and request building

pub mod builder;
pub mod descriptor;

// Re-export commonly used types
pub use builder::{build_create_request, build_extract_request, default_archive_name};
pub use descriptor::{CommandDescriptor, CommandKind};
