use anyhow::Result;
use archive_commands_core::{
    ArchiveGateway, CommandController, ConfigCache, ControllerPolicy, ExtensionConfig, PLUGIN_ID,
    SettingsRead, SettingsSubscription,
    interfaces::{InputPrompt, SettingsProvider},
    services::{HttpTransport, InMemorySettings},
};
use std::sync::Arc;
use tracing::debug;

use crate::cli::GlobalArgs;
use crate::host::{DirectoryBrowser, FileSettings, StdinPrompt};
use crate::utils::parse_selection;

/// Settings source for this run.
///
/// An explicit override wins over `--settings`; without either the
/// defaults are served from memory.
pub fn settings_provider(global: &GlobalArgs, overridden: Option<bool>) -> Arc<dyn SettingsProvider> {
    match (overridden, &global.settings) {
        (Some(value), _) => {
            debug!("extractToNamedFolder overridden on the command line: {}", value);
            Arc::new(InMemorySettings::new(ExtensionConfig::new(value)))
        }
        (None, Some(path)) => {
            debug!("Reading settings from {}", path.display());
            Arc::new(FileSettings::new(path))
        }
        (None, None) => Arc::new(InMemorySettings::new(ExtensionConfig::default())),
    }
}

/// Controller wired to the terminal, the filesystem and the live service
pub struct Session {
    pub controller: CommandController,
    pub cache: ConfigCache,
    subscription: Option<SettingsSubscription>,
}

impl Session {
    /// Build a session without following any settings store
    pub fn new<S: AsRef<str>>(
        global: &GlobalArgs,
        paths: &[S],
        prompt: Arc<dyn InputPrompt>,
        policy: ControllerPolicy,
    ) -> Result<Self> {
        let selection = parse_selection(&global.root, paths)?;
        let browser = Arc::new(DirectoryBrowser::new(&global.root, selection));

        let mut gateway = ArchiveGateway::new(&global.base_url, Arc::new(HttpTransport::new()));
        if let Some(token) = &global.token {
            gateway = gateway.with_token(token);
        }

        let cache = ConfigCache::new();
        let controller = CommandController::new(browser, prompt, gateway, cache.clone()).with_policy(policy);

        Ok(Self {
            controller,
            cache,
            subscription: None,
        })
    }

    /// Session for a single command run: terminal prompt, settings awaited
    /// before they are read
    pub fn interactive<S: AsRef<str>>(global: &GlobalArgs, paths: &[S]) -> Result<Self> {
        let policy = ControllerPolicy::default().with_settings_read(SettingsRead::AwaitLoad);
        Self::new(global, paths, Arc::new(StdinPrompt), policy)
    }

    pub fn with_prompt<S: AsRef<str>>(
        global: &GlobalArgs,
        paths: &[S],
        prompt: Arc<dyn InputPrompt>,
    ) -> Result<Self> {
        let policy = ControllerPolicy::default().with_settings_read(SettingsRead::AwaitLoad);
        Self::new(global, paths, prompt, policy)
    }

    /// Start following `provider`; the link ends when the session is dropped
    pub fn follow(&mut self, provider: Arc<dyn SettingsProvider>) {
        self.subscription = Some(self.cache.activate(provider, PLUGIN_ID));
    }
}

impl Drop for Session {
    fn drop(&mut self) {
        if let Some(subscription) = self.subscription.take() {
            subscription.deactivate();
        }
    }
}
