//! Settings store interface

use crate::{config::ExtensionConfig, error::Result};
use async_trait::async_trait;
use tokio::sync::mpsc::UnboundedReceiver;

/// Stream of settings updates pushed by the store
pub type SettingsStream = UnboundedReceiver<ExtensionConfig>;

/// External store owning the persisted settings
#[async_trait]
pub trait SettingsProvider: Send + Sync {
    /// Fetch the stored settings for `plugin_id`
    async fn load(&self, plugin_id: &str) -> Result<ExtensionConfig>;

    /// Subscribe to updates for `plugin_id`.
    ///
    /// The stream ends when the store drops its sender.
    fn changes(&self, plugin_id: &str) -> SettingsStream;
}
