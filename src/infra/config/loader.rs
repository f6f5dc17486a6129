use std::{
    fs,
    path::{Path, PathBuf},
};

use crate::infra::{
    config::{file_config::FileConfig, AppConfig},
    error::AppError,
};

const DEFAULT_CONFIG_PATH: &str = "config.toml";

pub fn load(path: Option<&Path>) -> Result<AppConfig, AppError> {
    let config_path = path
        .map(Path::to_path_buf)
        .unwrap_or_else(|| PathBuf::from(DEFAULT_CONFIG_PATH));

    let mut config = AppConfig::default();

    if !config_path.exists() {
        return Ok(config);
    }

    let raw = fs::read_to_string(&config_path).map_err(|source| AppError::ConfigRead {
        path: config_path.clone(),
        source,
    })?;

    let file_config: FileConfig = toml::from_str(&raw).map_err(|source| AppError::ConfigParse {
        path: config_path,
        source,
    })?;

    file_config.merge_into(&mut config);
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn returns_defaults_when_file_is_missing() {
        let config = load(Some(Path::new("./missing-config.toml"))).expect("config must load");

        assert_eq!(config, AppConfig::default());
    }

    #[test]
    fn merges_file_values_over_defaults() {
        let dir = tempfile::tempdir().expect("temp dir");
        let config_path = dir.path().join("config.toml");

        fs::write(
            &config_path,
            r#"[logging]
level = "debug"

[channel]
poll_interval_ms = 50

[ui]
default_theme = "light"
"#,
        )
        .expect("must write test config");

        let config = load(Some(&config_path)).expect("config must load");

        assert_eq!(config.logging.level, "debug");
        assert_eq!(config.channel.poll_interval_ms, 50);
        assert_eq!(config.ui.default_theme, "light");
    }

    #[test]
    fn keeps_defaults_for_absent_sections() {
        let dir = tempfile::tempdir().expect("temp dir");
        let config_path = dir.path().join("config.toml");

        fs::write(&config_path, "[logging]\nlevel = \"trace\"\n").expect("must write test config");

        let config = load(Some(&config_path)).expect("config must load");

        assert_eq!(config.logging.level, "trace");
        assert_eq!(config.channel.poll_interval_ms, 250);
        assert_eq!(config.channel.store_path, None);
        assert_eq!(config.ui.default_theme, "dark");
    }

    #[test]
    fn store_path_override_is_honored() {
        let dir = tempfile::tempdir().expect("temp dir");
        let config_path = dir.path().join("config.toml");

        fs::write(
            &config_path,
            "[channel]\nstore_path = \"/tmp/shared/messages.db3\"\n",
        )
        .expect("must write test config");

        let config = load(Some(&config_path)).expect("config must load");

        assert_eq!(
            config.channel.store_path,
            Some(PathBuf::from("/tmp/shared/messages.db3"))
        );
    }
}
