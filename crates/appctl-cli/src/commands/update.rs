//! `appctl update` - check desired changes against the tracked application.

use tracing::instrument;

use appctl_core::{
    application::AppResourceService,
    domain::{FieldValue, ResourceConfig},
};

use crate::{
    cli::{GlobalArgs, UpdateArgs},
    config::AppConfig,
    error::CliResult,
    output::OutputManager,
};

#[instrument(skip_all)]
pub fn execute(
    args: UpdateArgs,
    global: GlobalArgs,
    config: AppConfig,
    output: OutputManager,
) -> CliResult<()> {
    let state = super::state_file(&global, &config);
    let prior = state.load()?;

    // Update never reaches the control plane, so no client is built.
    let plan = desired(args);
    super::finish(AppResourceService::check_update(&plan, &prior), &state, &output)?;

    output.success(&format!("'{}' is up to date; nothing to change", prior.name))?;
    Ok(())
}

/// Flags left out become `Unknown`, which never conflicts with state.
fn desired(args: UpdateArgs) -> ResourceConfig {
    ResourceConfig {
        name: args.name.map_or(FieldValue::Unknown, FieldValue::Value),
        organization: args.org.map_or(FieldValue::Unknown, FieldValue::Value),
        organization_id: FieldValue::Unknown,
    }
}
