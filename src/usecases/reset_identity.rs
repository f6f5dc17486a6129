//! Clears the locally persisted display name. The theme preference stays.
//!
//! This is the explicit CLI escape hatch; the running client itself never
//! revokes an identity.

use anyhow::Result;

use crate::infra::contracts::ProfileStore;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResetOutcome {
    pub identity_removed: bool,
}

pub fn reset_identity(profile: &mut dyn ProfileStore) -> Result<ResetOutcome> {
    let mut stored = profile.load()?;
    let identity_removed = stored.display_name.take().is_some();

    if identity_removed {
        profile.save(&stored)?;
    }

    Ok(ResetOutcome { identity_removed })
}
