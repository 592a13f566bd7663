//! `appctl config` - inspect and initialise configuration.

use std::{fs, path::Path};

use crate::{
    cli::{ConfigCommands, GlobalArgs, OutputFormat},
    config::AppConfig,
    error::{CliError, CliResult, IntoCli},
    output::OutputManager,
};

/// Dispatch to the correct config subcommand.
pub fn execute(
    cmd: ConfigCommands,
    global: GlobalArgs,
    config: AppConfig,
    output: OutputManager,
) -> CliResult<()> {
    let target = global.config.unwrap_or_else(AppConfig::config_path);

    match cmd {
        ConfigCommands::Show => {
            let shown = config.redacted();
            if output.format() == OutputFormat::Json {
                output.json(&shown)?;
            } else {
                output.header("Current Configuration:")?;
                output.print(&render(&shown)?)?;
            }
        }

        ConfigCommands::Path => {
            output.print(&target.display().to_string())?;
        }

        ConfigCommands::Init { force } => {
            init(&target, force)?;
            output.success(&format!("Wrote {}", target.display()))?;
        }
    }

    Ok(())
}

fn render(config: &AppConfig) -> CliResult<String> {
    config.to_toml().map_err(|e| CliError::ConfigError {
        message: format!("Failed to serialise config: {e}"),
        source: Some(Box::new(e)),
    })
}

/// Write the default configuration to `path`.
fn init(path: &Path, force: bool) -> CliResult<()> {
    if path.exists() && !force {
        return Err(CliError::InvalidInput {
            message: format!(
                "{} already exists (use --force to overwrite)",
                path.display()
            ),
        });
    }

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .with_cli_context(|| format!("Failed to create '{}'", parent.display()))?;
    }

    let contents = render(&AppConfig::default())?;
    fs::write(path, contents).with_cli_context(|| format!("Failed to write '{}'", path.display()))
}
