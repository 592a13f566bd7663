//! Command handlers.
//!
//! Each handler translates arguments into core inputs, runs one reconciler
//! operation, applies the returned directive to the state file and reports.
//! No business logic lives here.

pub mod completions;
pub mod config;
pub mod create;
pub mod delete;
pub mod import;
pub mod refresh;
pub mod show;
pub mod update;

use tracing::{debug, warn};

use appctl_adapters::GraphqlClient;
use appctl_core::application::{AppResourceService, OperationOutcome, StateDirective};

use crate::{
    cli::GlobalArgs, config::AppConfig, error::CliResult, output::OutputManager, state::StateFile,
};

/// Build the reconciler against the configured control plane.
pub(crate) fn service(global: &GlobalArgs, config: &AppConfig) -> CliResult<AppResourceService> {
    let endpoint = config.endpoint(global.endpoint.as_deref());
    if config.api.token.is_none() {
        warn!("No API token configured; requests will be unauthenticated");
    }
    debug!(endpoint, "Using control plane");

    let client = GraphqlClient::new(endpoint, config.api.token.as_deref())?;
    Ok(AppResourceService::new(Box::new(client)))
}

/// The state file selected by `--state` or configuration.
pub(crate) fn state_file(global: &GlobalArgs, config: &AppConfig) -> StateFile {
    StateFile::new(config.state_path(global.state_path()))
}

/// Persist and report an outcome.
///
/// The directive is applied before errors are surfaced, so a failed delete
/// still stops tracking.
pub(crate) fn finish(
    outcome: OperationOutcome,
    state: &StateFile,
    output: &OutputManager,
) -> CliResult<StateDirective> {
    state.apply(&outcome.directive)?;
    output.json(&outcome)?;
    output.warnings(&outcome.diagnostics)?;
    Ok(outcome.into_result()?)
}
