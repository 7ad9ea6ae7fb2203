//! Collaborator interfaces
//!
//! The archive commands only orchestrate; the file listing, the settings
//! store, the name prompt and the network are supplied by the host through
//! these traits.

pub mod file_browser;
pub mod input_prompt;
pub mod settings_provider;
pub mod transport;

pub use file_browser::FileBrowser;
pub use input_prompt::{InputPrompt, PromptResponse};
pub use settings_provider::{SettingsProvider, SettingsStream};
pub use transport::{Method, RawResponse, RequestInit, Transport};
