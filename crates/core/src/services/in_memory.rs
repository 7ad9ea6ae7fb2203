use crate::{
    config::ExtensionConfig,
    error::{Error, Result},
    interfaces::{FileBrowser, InputPrompt, PromptResponse, SettingsProvider, SettingsStream},
    types::Selection,
};
use async_trait::async_trait;
use std::sync::{
    Mutex, RwLock,
    atomic::{AtomicUsize, Ordering},
};
use tokio::sync::{mpsc, watch};
use tracing::debug;

/// Settings store kept in process memory.
///
/// `update` replaces the stored value and notifies every subscriber.
pub struct InMemorySettings {
    value: Mutex<ExtensionConfig>,
    subscribers: Mutex<Vec<mpsc::UnboundedSender<ExtensionConfig>>>,
    released: watch::Sender<bool>,
    load_error: Option<String>,
}

impl InMemorySettings {
    pub fn new(config: ExtensionConfig) -> Self {
        Self::build(config, true, None)
    }

    /// Store whose `load` stays pending until [`InMemorySettings::release`]
    pub fn deferred(config: ExtensionConfig) -> Self {
        Self::build(config, false, None)
    }

    /// Store whose `load` always fails with `message`
    pub fn failing(message: impl Into<String>) -> Self {
        Self::build(ExtensionConfig::default(), true, Some(message.into()))
    }

    fn build(config: ExtensionConfig, released: bool, load_error: Option<String>) -> Self {
        let (released, _) = watch::channel(released);
        Self {
            value: Mutex::new(config),
            subscribers: Mutex::new(Vec::new()),
            released,
            load_error,
        }
    }

    /// Let pending loads resolve
    pub fn release(&self) {
        self.released.send_replace(true);
    }

    pub fn update(&self, config: ExtensionConfig) {
        if let Ok(mut value) = self.value.lock() {
            *value = config;
        }
        if let Ok(mut subscribers) = self.subscribers.lock() {
            subscribers.retain(|subscriber| subscriber.send(config).is_ok());
        }
    }

    fn current(&self) -> ExtensionConfig {
        self.value.lock().map(|value| *value).unwrap_or_default()
    }
}

#[async_trait]
impl SettingsProvider for InMemorySettings {
    async fn load(&self, plugin_id: &str) -> Result<ExtensionConfig> {
        let mut released = self.released.subscribe();
        // Sender lives in self, so this only fails if self is gone
        let _ = released.wait_for(|released| *released).await;

        if let Some(message) = &self.load_error {
            return Err(Error::ConfigError(message.clone()));
        }
        debug!("Serving in-memory settings for {}", plugin_id);
        Ok(self.current())
    }

    fn changes(&self, _plugin_id: &str) -> SettingsStream {
        let (sender, receiver) = mpsc::unbounded_channel();
        if let Ok(mut subscribers) = self.subscribers.lock() {
            subscribers.push(sender);
        }
        receiver
    }
}

/// File browser holding a selection set by the host
#[derive(Default)]
pub struct InMemoryFileBrowser {
    selection: RwLock<Selection>,
    refreshes: AtomicUsize,
}

impl InMemoryFileBrowser {
    pub fn new(selection: Selection) -> Self {
        Self {
            selection: RwLock::new(selection),
            refreshes: AtomicUsize::new(0),
        }
    }

    pub fn select(&self, selection: Selection) {
        if let Ok(mut current) = self.selection.write() {
            *current = selection;
        }
    }

    /// How many times a refresh was requested
    pub fn refresh_count(&self) -> usize {
        self.refreshes.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl FileBrowser for InMemoryFileBrowser {
    fn current_selection(&self) -> Selection {
        self.selection
            .read()
            .map(|selection| selection.clone())
            .unwrap_or_default()
    }

    async fn refresh_listing(&self) -> Result<()> {
        self.refreshes.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }
}

/// Prompt answering with a fixed response and counting how often it was asked
pub struct FixedPrompt {
    response: PromptResponse,
    asked: AtomicUsize,
}

impl FixedPrompt {
    pub fn new(response: PromptResponse) -> Self {
        Self {
            response,
            asked: AtomicUsize::new(0),
        }
    }

    pub fn accepting(value: impl Into<String>) -> Self {
        Self::new(PromptResponse::accepted(value))
    }

    pub fn cancelling() -> Self {
        Self::new(PromptResponse::cancelled())
    }

    pub fn times_asked(&self) -> usize {
        self.asked.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl InputPrompt for FixedPrompt {
    async fn prompt_text(&self, title: &str, default: &str) -> PromptResponse {
        self.asked.fetch_add(1, Ordering::SeqCst);
        debug!("Prompt '{}' (default '{}') answered with {:?}", title, default, self.response);
        self.response.clone()
    }
}
