//! `appctl import` - start tracking an existing application.

use tracing::{info, instrument};

use appctl_core::application::StateDirective;

use crate::{
    cli::{GlobalArgs, ImportArgs},
    config::AppConfig,
    error::CliResult,
    output::OutputManager,
};

#[instrument(skip_all, fields(app = %args.name))]
pub fn execute(
    args: ImportArgs,
    global: GlobalArgs,
    config: AppConfig,
    output: OutputManager,
) -> CliResult<()> {
    let state = super::state_file(&global, &config);
    state.ensure_vacant()?;

    let service = super::service(&global, &config)?;
    let directive = super::finish(service.import(&args.name), &state, &output)?;

    if let StateDirective::Set(imported) = &directive {
        info!(id = %imported.id, path = %state.path().display(), "Imported application");
        output.success(&format!("Imported '{}' ({})", imported.name, imported.id))?;
        output.state(imported)?;
    }

    Ok(())
}
