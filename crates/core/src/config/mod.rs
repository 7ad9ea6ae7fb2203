//! Runtime configuration of the archive commands

mod settings;

// Re-export main types
pub use settings::{DEFAULT_EXTRACT_TO_NAMED_FOLDER, ExtensionConfig, PLUGIN_ID};
