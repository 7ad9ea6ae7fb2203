//! Caching of settings owned by an external store

pub mod config_cache;

// Re-export the main cache type
pub use config_cache::{CacheSnapshot, ConfigCache, LoadStatus, SettingsSubscription};
