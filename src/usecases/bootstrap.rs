use std::path::Path;

use crate::{
    infra::{
        self,
        config::FileConfigAdapter,
        contracts::ConfigAdapter,
        error::AppError,
        storage_layout::StorageLayout,
    },
    usecases::context::AppContext,
};

pub fn bootstrap(config_path: Option<&Path>) -> Result<AppContext, AppError> {
    let context = build_context(config_path)?;
    context.layout.ensure_dirs()?;
    infra::logging::init(&context.config.logging, &context.layout.log_dir)?;

    Ok(context)
}

fn build_context(config_path: Option<&Path>) -> Result<AppContext, AppError> {
    let config_adapter = FileConfigAdapter::new(config_path);
    let config = config_adapter.load().map_err(AppError::Other)?;
    let layout = StorageLayout::resolve()?;

    Ok(AppContext::new(config, layout))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builds_context_with_default_config_when_file_is_missing() {
        let context = build_context(Some(Path::new("./missing-config.toml")))
            .expect("context should build from defaults");

        assert_eq!(context.config, crate::infra::config::AppConfig::default());
    }
}
