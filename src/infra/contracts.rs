use anyhow::Result;

use crate::infra::{config::AppConfig, profile::Profile};

pub trait ConfigAdapter {
    fn load(&self) -> Result<AppConfig>;
}

/// Durable local key/value preferences: the persisted display name and the
/// theme choice survive restarts; the running client never deletes them.
pub trait ProfileStore {
    fn load(&self) -> Result<Profile>;
    fn save(&mut self, profile: &Profile) -> Result<()>;
}
