use std::path::PathBuf;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct AppConfig {
    pub logging: LogConfig,
    pub channel: ChannelConfig,
    pub ui: UiConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct LogConfig {
    pub level: String,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: "info".to_owned(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ChannelConfig {
    /// Overrides the shared store location. `None` uses the storage layout
    /// default, which all clients on the machine share.
    pub store_path: Option<PathBuf>,
    /// How often the subscription monitor polls the store for new rows.
    pub poll_interval_ms: u64,
}

impl Default for ChannelConfig {
    fn default() -> Self {
        Self {
            store_path: None,
            poll_interval_ms: 250,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct UiConfig {
    /// Theme used when the profile has no saved preference.
    pub default_theme: String,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            default_theme: "dark".to_owned(),
        }
    }
}
