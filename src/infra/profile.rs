use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::Result;
use serde::{Deserialize, Serialize};

use crate::infra::{contracts::ProfileStore, error::AppError};

/// Locally persisted per-user values. Plain optional strings, no schema
/// versioning; unknown keys in the file are ignored on load.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct Profile {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub theme: Option<String>,
}

/// Profile storage backed by a TOML file. A missing file reads as the empty
/// profile; saving rewrites the whole document.
#[derive(Debug, Clone)]
pub struct FileProfileStore {
    path: PathBuf,
}

impl FileProfileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl ProfileStore for FileProfileStore {
    fn load(&self) -> Result<Profile> {
        Ok(load(&self.path)?)
    }

    fn save(&mut self, profile: &Profile) -> Result<()> {
        Ok(save(&self.path, profile)?)
    }
}

fn load(path: &Path) -> Result<Profile, AppError> {
    if !path.exists() {
        return Ok(Profile::default());
    }

    let raw = fs::read_to_string(path).map_err(|source| AppError::ProfileRead {
        path: path.to_path_buf(),
        source,
    })?;

    toml::from_str(&raw).map_err(|source| AppError::ProfileParse {
        path: path.to_path_buf(),
        source,
    })
}

fn save(path: &Path, profile: &Profile) -> Result<(), AppError> {
    let raw = toml::to_string(profile).map_err(|source| AppError::ProfileSerialize {
        path: path.to_path_buf(),
        source,
    })?;

    fs::write(path, raw).map_err(|source| AppError::ProfileWrite {
        path: path.to_path_buf(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_file_reads_as_empty_profile() {
        let dir = tempfile::tempdir().expect("temp dir");

        let store = FileProfileStore::new(dir.path().join("profile.toml"));
        let profile = store.load().expect("load must succeed");

        assert_eq!(profile, Profile::default());
    }

    #[test]
    fn save_then_load_round_trips_both_keys() {
        let dir = tempfile::tempdir().expect("temp dir");
        let mut store = FileProfileStore::new(dir.path().join("profile.toml"));

        let profile = Profile {
            display_name: Some("Ann".to_owned()),
            theme: Some("light".to_owned()),
        };
        store.save(&profile).expect("save must succeed");

        assert_eq!(store.load().expect("load must succeed"), profile);
    }

    #[test]
    fn save_overwrites_previous_values() {
        let dir = tempfile::tempdir().expect("temp dir");
        let mut store = FileProfileStore::new(dir.path().join("profile.toml"));

        store
            .save(&Profile {
                display_name: Some("Ann".to_owned()),
                theme: None,
            })
            .expect("first save must succeed");
        store
            .save(&Profile {
                display_name: Some("Ben".to_owned()),
                theme: Some("dark".to_owned()),
            })
            .expect("second save must succeed");

        let profile = store.load().expect("load must succeed");
        assert_eq!(profile.display_name.as_deref(), Some("Ben"));
        assert_eq!(profile.theme.as_deref(), Some("dark"));
    }

    #[test]
    fn unparseable_file_is_an_error() {
        let dir = tempfile::tempdir().expect("temp dir");
        let path = dir.path().join("profile.toml");
        fs::write(&path, "display_name = [not toml").expect("fixture must be written");

        let store = FileProfileStore::new(path);

        assert!(store.load().is_err());
    }
}
