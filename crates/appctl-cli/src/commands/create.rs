//! `appctl create` - create an application and start tracking it.

use tracing::{info, instrument};

use appctl_core::{application::StateDirective, domain::ResourceConfig};

use crate::{
    cli::{CreateArgs, GlobalArgs},
    config::AppConfig,
    error::CliResult,
    output::OutputManager,
};

/// Execute the `appctl create` command.
///
/// Refuses to run when the state file already tracks an application, so an
/// existing record is never overwritten.
#[instrument(skip_all, fields(app = %args.name))]
pub fn execute(
    args: CreateArgs,
    global: GlobalArgs,
    config: AppConfig,
    output: OutputManager,
) -> CliResult<()> {
    let state = super::state_file(&global, &config);
    state.ensure_vacant()?;

    let desired = match args.org {
        Some(org) => ResourceConfig::new(&args.name).with_organization(org),
        None => ResourceConfig::new(&args.name),
    };

    output.header(&format!("Creating '{}'...", args.name))?;
    let service = super::service(&global, &config)?;
    let directive = super::finish(service.create(&desired), &state, &output)?;

    if let StateDirective::Set(created) = &directive {
        info!(id = %created.id, path = %state.path().display(), "Tracking new application");
        output.success(&format!("Created '{}' ({})", created.name, created.id))?;
        output.state(created)?;
    }

    Ok(())
}
