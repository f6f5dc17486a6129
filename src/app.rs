use anyhow::Result;

use crate::{
    channel::{self, ChannelAdapter},
    cli::{Cli, Command},
    domain,
    infra::{self, profile::FileProfileStore, storage_layout::StorageLayout},
    ui,
    usecases::{self, bootstrap, reset_identity, shell::DefaultShellOrchestrator},
};

pub fn run(cli: Cli) -> Result<()> {
    match cli.command_or_default() {
        Command::Run => run_shell(&cli),
        Command::Reset => run_reset(),
    }
}

fn run_shell(cli: &Cli) -> Result<()> {
    let context = bootstrap::bootstrap(cli.config.as_deref())?;

    tracing::debug!(
        ui = ui::module_name(),
        domain = domain::module_name(),
        channel = channel::module_name(),
        usecases = usecases::module_name(),
        infra = infra::module_name(),
        "module boundaries loaded"
    );

    let profile = FileProfileStore::new(context.layout.profile_file());
    let channel = ChannelAdapter::open(&context.config.channel, context.layout.store_file())?;

    let mut orchestrator =
        DefaultShellOrchestrator::new(channel, profile, &context.config.ui.default_theme);
    orchestrator.start();

    let mut event_source = ui::CrosstermEventSource::default();
    ui::shell::start(&context, &mut event_source, &mut orchestrator)
}

fn run_reset() -> Result<()> {
    let layout = StorageLayout::resolve()?;
    layout.ensure_dirs()?;

    let mut profile = FileProfileStore::new(layout.profile_file());
    let outcome = reset_identity::reset_identity(&mut profile)?;

    for line in reset_report_lines(outcome.identity_removed) {
        println!("{line}");
    }

    Ok(())
}

fn reset_report_lines(identity_removed: bool) -> Vec<String> {
    if identity_removed {
        vec![
            "Saved display name cleared.".to_owned(),
            "You will be asked to pick one on the next start.".to_owned(),
        ]
    } else {
        vec!["No saved display name found. Nothing to clear.".to_owned()]
    }
}
