//! Get-or-create identity over the durable profile.
//!
//! Resolution never fails: a missing, unreadable, or invalid profile simply
//! means setup is needed. Accepting a name validates it and persists it; a
//! persist failure is logged and the accepted name still becomes the session
//! identity, so the only user-facing error condition is invalid input.

use crate::{
    domain::identity::{DisplayName, DisplayNameError},
    infra::{contracts::ProfileStore, profile::Profile},
};

const IDENTITY_PROFILE_LOAD_FAILED: &str = "IDENTITY_PROFILE_LOAD_FAILED";
const IDENTITY_PROFILE_SAVE_FAILED: &str = "IDENTITY_PROFILE_SAVE_FAILED";
const IDENTITY_STORED_NAME_INVALID: &str = "IDENTITY_STORED_NAME_INVALID";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IdentityResolution {
    Established(DisplayName),
    NeedsSetup,
}

/// Reads the persisted display name without prompting.
pub fn resolve_identity(profile: &dyn ProfileStore) -> IdentityResolution {
    let stored = match profile.load() {
        Ok(profile) => profile.display_name,
        Err(error) => {
            tracing::warn!(
                code = IDENTITY_PROFILE_LOAD_FAILED,
                error = %error,
                "profile unreadable; asking for a new display name"
            );
            None
        }
    };

    let Some(raw) = stored else {
        return IdentityResolution::NeedsSetup;
    };

    match DisplayName::parse(&raw) {
        Ok(name) => IdentityResolution::Established(name),
        Err(error) => {
            tracing::warn!(
                code = IDENTITY_STORED_NAME_INVALID,
                reason = ?error,
                "persisted display name is invalid; asking for a new one"
            );
            IdentityResolution::NeedsSetup
        }
    }
}

/// Validates a newly chosen display name and persists it under the fixed
/// profile key. Later resolutions return it without prompting.
pub fn accept_identity(
    profile: &mut dyn ProfileStore,
    raw: &str,
) -> Result<DisplayName, DisplayNameError> {
    let name = DisplayName::parse(raw)?;

    let mut stored = profile.load().unwrap_or_else(|error| {
        tracing::warn!(
            code = IDENTITY_PROFILE_LOAD_FAILED,
            error = %error,
            "profile unreadable; rewriting it from scratch"
        );
        Profile::default()
    });
    stored.display_name = Some(name.as_str().to_owned());

    if let Err(error) = profile.save(&stored) {
        tracing::warn!(
            code = IDENTITY_PROFILE_SAVE_FAILED,
            error = %error,
            "display name not persisted; keeping it for this session only"
        );
    }

    Ok(name)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infra::stubs::MemoryProfileStore;

    #[test]
    fn resolves_persisted_name_without_setup() {
        let store = MemoryProfileStore::with_display_name("Ann");

        let resolution = resolve_identity(&store);

        assert_eq!(
            resolution,
            IdentityResolution::Established(DisplayName::parse("Ann").expect("valid name"))
        );
    }

    #[test]
    fn missing_name_needs_setup() {
        let store = MemoryProfileStore::default();

        assert_eq!(resolve_identity(&store), IdentityResolution::NeedsSetup);
    }

    #[test]
    fn invalid_persisted_name_needs_setup() {
        let store = MemoryProfileStore::with_display_name("A");

        assert_eq!(resolve_identity(&store), IdentityResolution::NeedsSetup);
    }

    #[test]
    fn unreadable_profile_needs_setup() {
        let store = MemoryProfileStore {
            fail_load: true,
            ..MemoryProfileStore::default()
        };

        assert_eq!(resolve_identity(&store), IdentityResolution::NeedsSetup);
    }

    #[test]
    fn accepting_persists_the_trimmed_name() {
        let mut store = MemoryProfileStore::default();

        let name = accept_identity(&mut store, "  Ann  ").expect("name must be accepted");

        assert_eq!(name.as_str(), "Ann");
        assert_eq!(store.profile.display_name.as_deref(), Some("Ann"));
    }

    #[test]
    fn accepting_preserves_the_theme_preference() {
        let mut store = MemoryProfileStore::default();
        store.profile.theme = Some("light".to_owned());

        accept_identity(&mut store, "Ann").expect("name must be accepted");

        assert_eq!(store.profile.theme.as_deref(), Some("light"));
    }

    #[test]
    fn accepting_rejects_short_names_without_saving() {
        let mut store = MemoryProfileStore::default();

        let result = accept_identity(&mut store, "A");

        assert_eq!(result, Err(DisplayNameError::TooShort { min: 2 }));
        assert_eq!(store.save_count, 0);
    }

    #[test]
    fn accepted_name_survives_a_failed_save() {
        let mut store = MemoryProfileStore {
            fail_save: true,
            ..MemoryProfileStore::default()
        };

        let name = accept_identity(&mut store, "Ann").expect("name must be accepted");

        assert_eq!(name.as_str(), "Ann");
        assert_eq!(store.profile.display_name, None);
    }

    #[test]
    fn accepted_name_resolves_on_the_next_load() {
        let mut store = MemoryProfileStore::default();
        let name = accept_identity(&mut store, "Ann").expect("name must be accepted");

        assert_eq!(resolve_identity(&store), IdentityResolution::Established(name));
    }
}
