//! `appctl refresh` - re-read the tracked application.

use tracing::instrument;

use appctl_core::application::StateDirective;

use crate::{cli::GlobalArgs, config::AppConfig, error::CliResult, output::OutputManager};

#[instrument(skip_all)]
pub fn execute(global: GlobalArgs, config: AppConfig, output: OutputManager) -> CliResult<()> {
    let state = super::state_file(&global, &config);
    let prior = state.load()?;

    let service = super::service(&global, &config)?;
    match super::finish(service.read(&prior), &state, &output)? {
        StateDirective::Set(current) if current == prior => {
            output.info(&format!("'{}' is up to date", current.name))?;
        }
        StateDirective::Set(current) => {
            output.success(&format!("Refreshed '{}'", current.name))?;
            output.state(&current)?;
        }
        StateDirective::Remove => {
            output.warning(&format!(
                "'{}' no longer exists remotely; stopped tracking it",
                prior.name
            ))?;
        }
        StateDirective::Keep => {}
    }

    Ok(())
}
