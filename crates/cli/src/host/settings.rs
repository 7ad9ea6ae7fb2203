//! Settings store backed by a file on disk
//!
//! The file is read on `load` and watched for edits; every successful
//! re-read is pushed to subscribers. Writing the file is left to the user.

use archive_commands_core::{
    Error, ExtensionConfig, Result,
    interfaces::{SettingsProvider, SettingsStream},
};
use async_trait::async_trait;
use notify::{Event, RecommendedWatcher, RecursiveMode, Watcher};
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use tokio::sync::mpsc;
use tracing::{debug, warn};

pub struct FileSettings {
    path: PathBuf,
    watchers: Mutex<Vec<RecommendedWatcher>>,
}

impl FileSettings {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            watchers: Mutex::new(Vec::new()),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Parse a settings file, TOML for `.toml` and JSON otherwise
    pub fn read(path: &Path) -> Result<ExtensionConfig> {
        let contents = std::fs::read_to_string(path)?;
        match path.extension().and_then(|ext| ext.to_str()) {
            Some("toml") => toml::from_str(&contents).map_err(|e| {
                Error::ConfigError(format!("Failed to parse {}: {e}", path.display()))
            }),
            _ => ExtensionConfig::from_json(&contents),
        }
    }

    fn watch(&self, sender: mpsc::UnboundedSender<ExtensionConfig>) -> notify::Result<RecommendedWatcher> {
        let path = self.path.clone();
        let mut watcher = notify::recommended_watcher(move |res: notify::Result<Event>| match res {
            Ok(event) => {
                let touches_file = event.paths.iter().any(|p| p.file_name() == path.file_name());
                if !touches_file || !(event.kind.is_modify() || event.kind.is_create()) {
                    return;
                }
                match FileSettings::read(&path) {
                    Ok(config) => {
                        let _ = sender.send(config);
                    }
                    Err(e) => warn!("Ignoring unreadable settings file: {}", e),
                }
            }
            Err(e) => warn!("Settings watch error: {}", e),
        })?;

        // Editors often replace the file, so watch the directory holding it
        let dir = match self.path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };
        watcher.watch(dir, RecursiveMode::NonRecursive)?;
        Ok(watcher)
    }
}

#[async_trait]
impl SettingsProvider for FileSettings {
    async fn load(&self, plugin_id: &str) -> Result<ExtensionConfig> {
        debug!("Loading settings for {} from {}", plugin_id, self.path.display());
        Self::read(&self.path)
    }

    fn changes(&self, plugin_id: &str) -> SettingsStream {
        let (sender, receiver) = mpsc::unbounded_channel();
        match self.watch(sender) {
            Ok(watcher) => {
                debug!("Watching {} for {}", self.path.display(), plugin_id);
                if let Ok(mut watchers) = self.watchers.lock() {
                    watchers.push(watcher);
                }
            }
            Err(e) => warn!("Cannot watch {}: {}", self.path.display(), e),
        }
        receiver
    }
}
