use crate::{config::ExtensionConfig, interfaces::SettingsProvider};
use std::sync::{Arc, Mutex};
use tokio::{sync::watch, task::JoinHandle};
use tracing::{debug, error, info, warn};

type ChangeHook = Arc<dyn Fn(&ExtensionConfig) + Send + Sync>;

/// Progress of the initial settings load
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadStatus {
    /// No store is being followed, or it was released before answering
    Inactive,
    /// Still serving the default
    Pending,
    Loaded,
    /// The store rejected the load; the default stays until a change arrives
    Failed,
}

/// Value and load status as seen by one read
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CacheSnapshot {
    pub config: ExtensionConfig,
    pub status: LoadStatus,
}

/// In-memory copy of the extension settings.
///
/// Reads never block on the store: until the first load resolves they see
/// [`ExtensionConfig::default`]. Clones share the same state.
#[derive(Clone)]
pub struct ConfigCache {
    inner: Arc<CacheInner>,
}

struct CacheInner {
    state: watch::Sender<CacheSnapshot>,
    hooks: Mutex<Vec<ChangeHook>>,
}

impl Default for ConfigCache {
    fn default() -> Self {
        Self::new()
    }
}

impl ConfigCache {
    pub fn new() -> Self {
        Self::with_config(ExtensionConfig::default())
    }

    /// Cache starting from `config` instead of the default
    pub fn with_config(config: ExtensionConfig) -> Self {
        let (state, _) = watch::channel(CacheSnapshot {
            config,
            status: LoadStatus::Inactive,
        });
        Self {
            inner: Arc::new(CacheInner {
                state,
                hooks: Mutex::new(Vec::new()),
            }),
        }
    }

    /// Current `extractToNamedFolder`
    pub fn current_value(&self) -> bool {
        self.inner.state.borrow().config.extract_to_named_folder
    }

    pub fn config(&self) -> ExtensionConfig {
        self.inner.state.borrow().config
    }

    pub fn snapshot(&self) -> CacheSnapshot {
        *self.inner.state.borrow()
    }

    pub fn status(&self) -> LoadStatus {
        self.inner.state.borrow().status
    }

    /// Register a hook called with every value the store pushes
    pub fn on_change<F>(&self, hook: F)
    where
        F: Fn(&ExtensionConfig) + Send + Sync + 'static,
    {
        match self.inner.hooks.lock() {
            Ok(mut hooks) => hooks.push(Arc::new(hook)),
            Err(_) => warn!("Change hook not registered: hook list is poisoned"),
        }
    }

    /// Wait until the initial load has resolved one way or the other.
    ///
    /// Returns at once when no activation is in flight.
    pub async fn settled(&self) -> CacheSnapshot {
        let mut state = self.inner.state.subscribe();
        match state.wait_for(|snapshot| snapshot.status != LoadStatus::Pending).await {
            Ok(snapshot) => *snapshot,
            Err(_) => self.snapshot(),
        }
    }

    /// Start following `provider`.
    ///
    /// Subscribes to the change stream first, then loads the stored value;
    /// changes that arrive while the load is pending are applied after it,
    /// in order. The returned subscription stops the listener when
    /// deactivated or dropped. Must be called inside a tokio runtime.
    pub fn activate(&self, provider: Arc<dyn SettingsProvider>, plugin_id: &str) -> SettingsSubscription {
        let cache = self.clone();
        let plugin_id = plugin_id.to_string();
        let mut changes = provider.changes(&plugin_id);
        self.inner.state.send_modify(|snapshot| snapshot.status = LoadStatus::Pending);

        let task = tokio::spawn(async move {
            match provider.load(&plugin_id).await {
                Ok(config) => {
                    debug!("Loaded settings for {}: {:?}", plugin_id, config);
                    cache.apply(config, LoadStatus::Loaded);
                }
                Err(e) => {
                    error!("Failed to load settings for {}: {}", plugin_id, e);
                    cache.mark_failed();
                }
            }

            while let Some(config) = changes.recv().await {
                debug!("Settings for {} changed: {:?}", plugin_id, config);
                cache.apply(config, LoadStatus::Loaded);
            }
            debug!("Settings stream for {} closed", plugin_id);
        });

        SettingsSubscription {
            cache: self.clone(),
            task: Some(task),
        }
    }

    fn apply(&self, config: ExtensionConfig, status: LoadStatus) {
        self.inner.state.send_replace(CacheSnapshot { config, status });

        // Hooks run unlocked so they may register further hooks
        let hooks = match self.inner.hooks.lock() {
            Ok(hooks) => hooks.clone(),
            Err(_) => {
                warn!("Skipping change hooks: hook list is poisoned");
                return;
            }
        };
        for hook in &hooks {
            hook(&config);
        }
    }

    fn mark_failed(&self) {
        self.inner.state.send_modify(|snapshot| snapshot.status = LoadStatus::Failed);
    }

    /// A load that will never answer stops counting as pending
    fn abandon_pending(&self) {
        self.inner.state.send_if_modified(|snapshot| {
            if snapshot.status != LoadStatus::Pending {
                return false;
            }
            snapshot.status = LoadStatus::Inactive;
            true
        });
    }
}

/// Live link between a [`ConfigCache`] and its settings store
pub struct SettingsSubscription {
    cache: ConfigCache,
    task: Option<JoinHandle<()>>,
}

impl SettingsSubscription {
    /// Stop listening for changes; the cache keeps its last value
    pub fn deactivate(mut self) {
        self.stop();
        info!("Settings subscription released");
    }

    pub fn is_active(&self) -> bool {
        self.task.as_ref().is_some_and(|task| !task.is_finished())
    }

    fn stop(&mut self) {
        if let Some(task) = self.task.take() {
            task.abort();
            self.cache.abandon_pending();
        }
    }
}

impl Drop for SettingsSubscription {
    fn drop(&mut self) {
        self.stop();
    }
}
