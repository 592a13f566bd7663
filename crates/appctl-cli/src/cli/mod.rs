//! CLI argument definitions using the clap derive API.
//!
//! This module is the *only* place that knows about argument names, aliases,
//! help text, and value enums.  No business logic lives here.

use clap::{Args, Parser, Subcommand, ValueEnum};

pub mod global;
pub use global::{GlobalArgs, OutputFormat};

// ── Top-level CLI ─────────────────────────────────────────────────────────────

/// Main CLI entry-point.
#[derive(Debug, Parser)]
#[command(
    name    = "appctl",
    bin_name = "appctl",
    version  = env!("CARGO_PKG_VERSION"),
    author   = env!("CARGO_PKG_AUTHORS"),
    about    = "Declarative lifecycle management for control-plane applications",
    long_about = "appctl creates, refreshes, validates, deletes and imports a single \
                  application on a remote control plane, recording what it tracks \
                  in a local state file.",
    after_help = "EXAMPLES:\n\
        \x20 appctl create demo-app --org acme\n\
        \x20 appctl refresh\n\
        \x20 appctl import legacy-app --state legacy.state.json\n\
        \x20 appctl completions bash > /usr/share/bash-completion/completions/appctl",
    arg_required_else_help = true,
    subcommand_required    = true,
)]
pub struct Cli {
    /// Flags available on every subcommand.
    #[command(flatten)]
    pub global: GlobalArgs,

    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Commands,
}

// ── Subcommands ───────────────────────────────────────────────────────────────

/// All available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Create an application and start tracking it.
    #[command(
        about = "Create an application",
        after_help = "EXAMPLES:\n\
            \x20 appctl create demo-app              # default organization\n\
            \x20 appctl create demo-app --org acme"
    )]
    Create(CreateArgs),

    /// Refresh the tracked application from the control plane.
    #[command(
        visible_alias = "read",
        about = "Refresh tracked state from the control plane"
    )]
    Refresh,

    /// Check a change against the tracked application.
    #[command(
        about = "Apply changes to the tracked application",
        after_help = "Name and organization are fixed once an application exists.\n\n\
            EXAMPLES:\n\
            \x20 appctl update --org acme"
    )]
    Update(UpdateArgs),

    /// Delete the tracked application.
    #[command(
        visible_alias = "rm",
        about = "Delete the tracked application",
        after_help = "EXAMPLES:\n\
            \x20 appctl delete\n\
            \x20 appctl delete --yes"
    )]
    Delete(DeleteArgs),

    /// Start tracking an application that already exists.
    #[command(
        about = "Import an existing application",
        after_help = "EXAMPLES:\n\
            \x20 appctl import demo-app"
    )]
    Import(ImportArgs),

    /// Print the tracked state without contacting the control plane.
    #[command(about = "Show tracked state")]
    Show,

    /// Generate shell completion scripts.
    #[command(
        about = "Generate shell completions",
        after_help = "EXAMPLES:\n\
            \x20 appctl completions bash > ~/.local/share/bash-completion/completions/appctl\n\
            \x20 appctl completions zsh  > ~/.zfunc/_appctl\n\
            \x20 appctl completions fish > ~/.config/fish/completions/appctl.fish"
    )]
    Completions(CompletionsArgs),

    /// Manage the appctl configuration.
    #[command(
        about = "Configuration management",
        subcommand,
        after_help = "EXAMPLES:\n\
            \x20 appctl config show\n\
            \x20 appctl config path\n\
            \x20 appctl config init --force"
    )]
    Config(ConfigCommands),
}

// ── create ────────────────────────────────────────────────────────────────────

/// Arguments for `appctl create`.
#[derive(Debug, Args)]
pub struct CreateArgs {
    /// Application name. Cannot be changed later.
    #[arg(value_name = "NAME", help = "Application name")]
    pub name: String,

    /// Organization slug. Omit to use your default organization.
    #[arg(
        short = 'o',
        long = "org",
        value_name = "SLUG",
        help = "Organization slug (default: your personal organization)"
    )]
    pub org: Option<String>,
}

// ── update ────────────────────────────────────────────────────────────────────

/// Arguments for `appctl update`.
///
/// Omitted fields are left as they are.
#[derive(Debug, Args)]
pub struct UpdateArgs {
    #[arg(long = "name", value_name = "NAME", help = "Desired application name")]
    pub name: Option<String>,

    #[arg(
        short = 'o',
        long = "org",
        value_name = "SLUG",
        help = "Desired organization slug"
    )]
    pub org: Option<String>,
}

// ── delete ────────────────────────────────────────────────────────────────────

/// Arguments for `appctl delete`.
#[derive(Debug, Args)]
pub struct DeleteArgs {
    /// Skip the confirmation prompt.
    #[arg(short = 'y', long = "yes", help = "Skip confirmation and delete")]
    pub yes: bool,
}

// ── import ────────────────────────────────────────────────────────────────────

/// Arguments for `appctl import`.
#[derive(Debug, Args)]
pub struct ImportArgs {
    /// Name of the existing application.
    #[arg(value_name = "NAME", help = "Existing application name")]
    pub name: String,
}

// ── completions ───────────────────────────────────────────────────────────────

/// Arguments for `appctl completions`.
#[derive(Debug, Args)]
pub struct CompletionsArgs {
    /// Target shell.
    #[arg(value_enum, help = "Shell to generate completions for")]
    pub shell: Shell,
}

/// Supported shells for completion generation.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    PowerShell,
    Elvish,
}

// ── config subcommands ────────────────────────────────────────────────────────

/// Subcommands for `appctl config`.
#[derive(Debug, Subcommand)]
pub enum ConfigCommands {
    /// Print the effective configuration (secrets redacted).
    Show,
    /// Print the path to the default configuration file.
    Path,
    /// Write a default configuration file.
    Init {
        /// Overwrite an existing config file.
        #[arg(short = 'f', long = "force", help = "Overwrite existing configuration")]
        force: bool,
    },
}

// ── tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use clap::{CommandFactory, Parser};
    use std::path::Path;

    #[test]
    fn verify_cli_structure() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parse_create_command() {
        let cli = Cli::parse_from(["appctl", "create", "demo-app", "--org", "acme"]);
        match cli.command {
            Commands::Create(args) => {
                assert_eq!(args.name, "demo-app");
                assert_eq!(args.org.as_deref(), Some("acme"));
            }
            other => panic!("expected Create, got {other:?}"),
        }
    }

    #[test]
    fn create_org_is_optional() {
        let cli = Cli::parse_from(["appctl", "create", "demo-app"]);
        assert!(matches!(cli.command, Commands::Create(CreateArgs { org: None, .. })));
    }

    #[test]
    fn read_alias() {
        let cli = Cli::parse_from(["appctl", "read"]);
        assert!(matches!(cli.command, Commands::Refresh));
    }

    #[test]
    fn global_flags_after_subcommand() {
        let cli = Cli::parse_from([
            "appctl",
            "refresh",
            "--state",
            "x.json",
            "--endpoint",
            "http://localhost/graphql",
        ]);
        assert_eq!(cli.global.state_path(), Some(Path::new("x.json")));
        assert_eq!(
            cli.global.endpoint.as_deref(),
            Some("http://localhost/graphql")
        );
    }

    #[test]
    fn delete_yes_flag() {
        let cli = Cli::parse_from(["appctl", "delete", "-y"]);
        assert!(matches!(cli.command, Commands::Delete(DeleteArgs { yes: true })));
    }

    #[test]
    fn config_init_force() {
        let cli = Cli::parse_from(["appctl", "config", "init", "--force"]);
        assert!(matches!(
            cli.command,
            Commands::Config(ConfigCommands::Init { force: true })
        ));
    }

    #[test]
    fn import_requires_name() {
        assert!(Cli::try_parse_from(["appctl", "import"]).is_err());
    }

    #[test]
    fn quiet_and_verbose_conflict() {
        // clap should reject --quiet --verbose together
        let result = Cli::try_parse_from(["appctl", "--quiet", "--verbose", "show"]);
        assert!(result.is_err());
    }
}
