//! `appctl delete` - delete the tracked application.

use std::io;

use tracing::{info, instrument};

use crate::{
    cli::{DeleteArgs, GlobalArgs},
    config::AppConfig,
    error::{CliError, CliResult, IntoCli},
    output::OutputManager,
};

/// Execute the `appctl delete` command.
///
/// The state file is removed even when the remote delete fails; the error
/// is still reported and sets the exit code.
#[instrument(skip_all)]
pub fn execute(
    args: DeleteArgs,
    global: GlobalArgs,
    config: AppConfig,
    output: OutputManager,
) -> CliResult<()> {
    let state = super::state_file(&global, &config);
    let tracked = state.load()?;

    if !global.quiet && !args.yes {
        output.warning(&format!(
            "This deletes '{}' ({}) on the control plane",
            tracked.name, tracked.id
        ))?;
        if !confirm(&format!("Delete '{}'?", tracked.name))? {
            return Err(CliError::Cancelled);
        }
    }

    let service = super::service(&global, &config)?;
    super::finish(service.delete(&tracked), &state, &output)?;

    info!(id = %tracked.id, "Deleted application");
    output.success(&format!("Deleted '{}'", tracked.name))?;
    Ok(())
}

/// Ask before deleting. Anything but an explicit yes declines.
fn confirm(prompt: &str) -> CliResult<bool> {
    #[cfg(feature = "interactive")]
    {
        use std::io::IsTerminal as _;
        if io::stdin().is_terminal() {
            return dialoguer::Confirm::new()
                .with_prompt(prompt)
                .default(false)
                .interact()
                .map_err(|e| CliError::IoError {
                    message: "failed to read confirmation input".into(),
                    source: io::Error::other(e),
                });
        }
    }

    read_answer(prompt, io::stdin().lock())
}

fn read_answer(prompt: &str, mut input: impl io::BufRead) -> CliResult<bool> {
    use std::io::Write;

    eprint!("{prompt} [y/N] ");
    io::stderr()
        .flush()
        .with_cli_context(|| "failed to flush prompt")?;

    let mut answer = String::new();
    input
        .read_line(&mut answer)
        .with_cli_context(|| "failed to read confirmation input")?;

    Ok(is_yes(&answer))
}

fn is_yes(answer: &str) -> bool {
    matches!(answer.trim().to_ascii_lowercase().as_str(), "y" | "yes")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_explicit_yes_confirms() {
        assert!(is_yes("y\n"));
        assert!(is_yes(" YES "));
        assert!(!is_yes(""));
        assert!(!is_yes("n"));
        assert!(!is_yes("yep"));
    }

    #[test]
    fn empty_input_declines() {
        assert!(!read_answer("Delete?", io::Cursor::new("")).unwrap());
        assert!(read_answer("Delete?", io::Cursor::new("y\n")).unwrap());
    }
}
