//! `appctl show` - print the tracked state without contacting the control plane.

use crate::{
    cli::{GlobalArgs, OutputFormat},
    config::AppConfig,
    error::CliResult,
    output::OutputManager,
};

pub fn execute(global: GlobalArgs, config: AppConfig, output: OutputManager) -> CliResult<()> {
    let state = super::state_file(&global, &config);
    let tracked = state.load()?;

    if output.format() == OutputFormat::Json {
        output.json(&tracked)?;
    } else {
        output.header(&format!("{} ({})", tracked.name, state.path().display()))?;
        output.state(&tracked)?;
    }

    Ok(())
}
