use anyhow::{bail, Result};

use crate::infra::{contracts::ProfileStore, profile::Profile};

/// In-memory profile store for tests, with failure switches for the load
/// and save paths.
#[derive(Debug, Clone, Default)]
pub struct MemoryProfileStore {
    pub profile: Profile,
    pub fail_load: bool,
    pub fail_save: bool,
    pub save_count: usize,
}

impl MemoryProfileStore {
    pub fn with_display_name(name: &str) -> Self {
        Self {
            profile: Profile {
                display_name: Some(name.to_owned()),
                theme: None,
            },
            ..Self::default()
        }
    }
}

impl ProfileStore for MemoryProfileStore {
    fn load(&self) -> Result<Profile> {
        if self.fail_load {
            bail!("profile load failed");
        }
        Ok(self.profile.clone())
    }

    fn save(&mut self, profile: &Profile) -> Result<()> {
        if self.fail_save {
            bail!("profile save failed");
        }
        self.profile = profile.clone();
        self.save_count += 1;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn memory_store_round_trips() {
        let mut store = MemoryProfileStore::default();
        let profile = Profile {
            display_name: Some("Ann".to_owned()),
            theme: Some("dark".to_owned()),
        };

        store.save(&profile).expect("save must succeed");

        assert_eq!(store.load().expect("load must succeed"), profile);
        assert_eq!(store.save_count, 1);
    }

    #[test]
    fn failure_switches_trip_the_matching_path() {
        let mut store = MemoryProfileStore {
            fail_load: true,
            fail_save: true,
            ..MemoryProfileStore::default()
        };

        assert!(store.load().is_err());
        assert!(store.save(&Profile::default()).is_err());
    }
}
