/// When the extract command shows up in menus
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ExtractVisibility {
    /// Only when it is also enabled
    #[default]
    WhenEnabled,
    /// Regardless of the selection
    Always,
}

/// How extract reads `extractToNamedFolder`
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SettingsRead {
    /// Use whatever the cache holds, the default while the load is pending
    #[default]
    Current,
    /// Wait for the pending settings load before reading
    AwaitLoad,
}

/// Knobs that vary between hosts of the controller
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ControllerPolicy {
    pub extract_visibility: ExtractVisibility,
    pub settings_read: SettingsRead,
}

impl ControllerPolicy {
    pub fn with_extract_visibility(mut self, visibility: ExtractVisibility) -> Self {
        self.extract_visibility = visibility;
        self
    }

    pub fn with_settings_read(mut self, settings_read: SettingsRead) -> Self {
        self.settings_read = settings_read;
        self
    }
}
