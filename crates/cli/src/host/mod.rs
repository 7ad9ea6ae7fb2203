//! Host-side collaborators for running the commands from a terminal

pub mod browser;
pub mod prompt;
pub mod settings;

pub use browser::DirectoryBrowser;
pub use prompt::StdinPrompt;
pub use settings::FileSettings;
