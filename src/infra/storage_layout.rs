use std::{env, fs, path::PathBuf};

use crate::infra::error::AppError;

const APP_DIR_NAME: &str = "rally";

/// On-disk layout under the user's config base: the profile file, the shared
/// message store, and the log directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StorageLayout {
    pub config_dir: PathBuf,
    pub store_dir: PathBuf,
    pub log_dir: PathBuf,
}

impl StorageLayout {
    pub fn resolve() -> Result<Self, AppError> {
        let config_base = env::var_os("XDG_CONFIG_HOME")
            .map(PathBuf::from)
            .or_else(|| home_dir().map(|home| home.join(".config")))
            .ok_or_else(|| AppError::StoragePathResolution {
                details: "unable to resolve config base directory (XDG_CONFIG_HOME/HOME)".into(),
            })?;

        let config_dir = config_base.join(APP_DIR_NAME);
        let store_dir = config_dir.join("store");
        let log_dir = config_dir.join("log");

        Ok(Self {
            config_dir,
            store_dir,
            log_dir,
        })
    }

    pub fn ensure_dirs(&self) -> Result<(), AppError> {
        for dir in [&self.config_dir, &self.store_dir, &self.log_dir] {
            fs::create_dir_all(dir).map_err(|source| AppError::StorageDirCreate {
                path: dir.clone(),
                source,
            })?;
        }

        Ok(())
    }

    /// Locally persisted preferences (display name, theme).
    pub fn profile_file(&self) -> PathBuf {
        self.config_dir.join("profile.toml")
    }

    /// Default location of the shared message store. Every client on the
    /// machine that uses the default converses through this one file.
    pub fn store_file(&self) -> PathBuf {
        self.store_dir.join("messages.db3")
    }
}

fn home_dir() -> Option<PathBuf> {
    env::var_os("HOME").map(PathBuf::from)
}
