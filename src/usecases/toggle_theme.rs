//! Theme resolution and toggling over the durable profile.

use crate::{
    domain::theme::Theme,
    infra::{contracts::ProfileStore, profile::Profile},
};

const THEME_PREFERENCE_SAVE_FAILED: &str = "THEME_PREFERENCE_SAVE_FAILED";
const THEME_CONFIG_DEFAULT_INVALID: &str = "THEME_CONFIG_DEFAULT_INVALID";

/// Resolves the session theme: the saved preference wins, then the config
/// default, then dark.
pub fn resolve_theme(profile: &dyn ProfileStore, config_default: &str) -> Theme {
    let saved = profile
        .load()
        .ok()
        .and_then(|profile| profile.theme)
        .and_then(|value| Theme::from_str(&value));

    if let Some(theme) = saved {
        return theme;
    }

    Theme::from_str(config_default).unwrap_or_else(|| {
        tracing::warn!(
            code = THEME_CONFIG_DEFAULT_INVALID,
            value = config_default,
            "unknown default_theme in config; using dark"
        );
        Theme::default()
    })
}

/// Flips the theme and persists the new preference. A persist failure is
/// logged and the flip still applies to the running session.
pub fn toggle_theme(profile: &mut dyn ProfileStore, current: Theme) -> Theme {
    let next = current.toggled();

    let mut stored = profile.load().unwrap_or_else(|_| Profile::default());
    stored.theme = Some(next.as_str().to_owned());

    if let Err(error) = profile.save(&stored) {
        tracing::warn!(
            code = THEME_PREFERENCE_SAVE_FAILED,
            error = %error,
            "theme preference not persisted"
        );
    }

    next
}
