use std::path::PathBuf;

use serde::Deserialize;

use crate::infra::config::{AppConfig, ChannelConfig, LogConfig, UiConfig};

#[derive(Debug, Deserialize, Default)]
pub struct FileConfig {
    pub logging: Option<FileLogConfig>,
    pub channel: Option<FileChannelConfig>,
    pub ui: Option<FileUiConfig>,
}

impl FileConfig {
    pub fn merge_into(self, config: &mut AppConfig) {
        if let Some(logging) = self.logging {
            logging.merge_into(&mut config.logging);
        }

        if let Some(channel) = self.channel {
            channel.merge_into(&mut config.channel);
        }

        if let Some(ui) = self.ui {
            ui.merge_into(&mut config.ui);
        }
    }
}

#[derive(Debug, Deserialize, Default)]
pub struct FileLogConfig {
    pub level: Option<String>,
}

impl FileLogConfig {
    fn merge_into(self, config: &mut LogConfig) {
        if let Some(level) = self.level {
            config.level = level;
        }
    }
}

#[derive(Debug, Deserialize, Default)]
pub struct FileChannelConfig {
    pub store_path: Option<PathBuf>,
    pub poll_interval_ms: Option<u64>,
}

impl FileChannelConfig {
    fn merge_into(self, config: &mut ChannelConfig) {
        if let Some(store_path) = self.store_path {
            config.store_path = Some(store_path);
        }

        if let Some(poll_interval_ms) = self.poll_interval_ms {
            config.poll_interval_ms = poll_interval_ms;
        }
    }
}

#[derive(Debug, Deserialize, Default)]
pub struct FileUiConfig {
    pub default_theme: Option<String>,
}

impl FileUiConfig {
    fn merge_into(self, config: &mut UiConfig) {
        if let Some(default_theme) = self.default_theme {
            config.default_theme = default_theme;
        }
    }
}
