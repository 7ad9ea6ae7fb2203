use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};

/// Identifier the settings store keys this extension's settings by
pub const PLUGIN_ID: &str = "jupyterlab-zip-extension:plugin";

/// Value used until the settings store has answered
pub const DEFAULT_EXTRACT_TO_NAMED_FOLDER: bool = true;

/// Settings the archive commands read at invocation time
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExtensionConfig {
    /// Extract into a folder named after the archive instead of next to it
    #[serde(default = "default_extract_to_named_folder")]
    pub extract_to_named_folder: bool,
}

fn default_extract_to_named_folder() -> bool {
    DEFAULT_EXTRACT_TO_NAMED_FOLDER
}

impl Default for ExtensionConfig {
    fn default() -> Self {
        Self {
            extract_to_named_folder: DEFAULT_EXTRACT_TO_NAMED_FOLDER,
        }
    }
}

impl ExtensionConfig {
    pub fn new(extract_to_named_folder: bool) -> Self {
        Self {
            extract_to_named_folder,
        }
    }

    /// Parse the JSON document a settings store hands out
    pub fn from_json(contents: &str) -> Result<Self> {
        serde_json::from_str(contents)
            .map_err(|e| Error::ConfigError(format!("Failed to parse settings: {e}")))
    }
}
