//! CLI argument definitions using the clap derive API.
//!
//! This module is the *only* place that knows about argument names, aliases,
//! help text, and value enums.  No business logic lives here.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

pub mod global;
pub use global::GlobalArgs;

// ── Top-level CLI ─────────────────────────────────────────────────────────────

/// Main CLI entry-point.
#[derive(Debug, Parser)]
#[command(
    name    = "slngen",
    bin_name = "slngen",
    version  = env!("CARGO_PKG_VERSION"),
    author   = env!("CARGO_PKG_AUTHORS"),
    about    = "Project and solution file synthesis for extra source workspaces",
    long_about = "slngen writes one SDK-style project document per configured \
                  workspace and appends the matching entries to a solution file.",
    after_help = "EXAMPLES:\n\
        \x20 slngen workspace add Assets/Scripts~\n\
        \x20 slngen assembly add Assets/Plugins/Foo.dll\n\
        \x20 slngen generate Game.sln\n\
        \x20 slngen completions bash > /usr/share/bash-completion/completions/slngen",
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
    /// Regenerate project documents and append stanzas to a solution file.
    #[command(
        visible_alias = "gen",
        about = "Generate project documents and solution entries",
        after_help = "EXAMPLES:\n\
            \x20 slngen generate Game.sln\n\
            \x20 slngen generate Game.sln --stdout > Combined.sln"
    )]
    Generate(GenerateArgs),

    /// Edit the workspace list.
    #[command(
        subcommand,
        visible_alias = "ws",
        about = "Manage source workspaces",
        after_help = "EXAMPLES:\n\
            \x20 slngen workspace add Assets/Scripts~\n\
            \x20 slngen workspace move 2 0\n\
            \x20 slngen workspace remove 1"
    )]
    Workspace(WorkspaceCommands),

    /// Edit the reference assembly list.
    #[command(
        subcommand,
        about = "Manage reference assemblies",
        after_help = "EXAMPLES:\n\
            \x20 slngen assembly add Assets/Plugins/Foo.dll\n\
            \x20 slngen assembly list"
    )]
    Assembly(EntryCommands),

    /// Edit the reference project list.
    #[command(
        subcommand,
        about = "Manage reference projects",
        after_help = "EXAMPLES:\n\
            \x20 slngen project add Tools/Gen/Gen.csproj\n\
            \x20 slngen project remove 0"
    )]
    Project(EntryCommands),

    /// Set the directory reference assembly hint paths are resolved from.
    #[command(about = "Set the reference assembly location")]
    Location(PathArgs),

    /// Print the stored configuration.
    #[command(about = "Show the current configuration")]
    Show(ShowArgs),

    /// Initialise a slngen configuration file.
    #[command(
        about = "Initialise configuration",
        after_help = "EXAMPLES:\n\
            \x20 slngen init          # default location\n\
            \x20 slngen init --force  # overwrite an existing file"
    )]
    Init(InitArgs),

    /// Generate shell completion scripts.
    #[command(
        about = "Generate shell completions",
        after_help = "EXAMPLES:\n\
            \x20 slngen completions bash > ~/.local/share/bash-completion/completions/slngen\n\
            \x20 slngen completions zsh  > ~/.zfunc/_slngen\n\
            \x20 slngen completions fish > ~/.config/fish/completions/slngen.fish"
    )]
    Completions(CompletionsArgs),

    /// Inspect the application configuration.
    #[command(
        about = "Configuration management",
        subcommand,
        after_help = "EXAMPLES:\n\
            \x20 slngen config get generator.target_framework\n\
            \x20 slngen config list\n\
            \x20 slngen config path"
    )]
    Config(ConfigCommands),
}

// ── generate ──────────────────────────────────────────────────────────────────

/// Arguments for `slngen generate`.
#[derive(Debug, Args)]
pub struct GenerateArgs {
    /// Solution file to append to.  A missing file is treated as empty.
    #[arg(value_name = "SOLUTION", help = "Solution file to append to")]
    pub solution: PathBuf,

    /// Print the resulting solution text instead of writing it back.
    #[arg(long = "stdout", help = "Print the solution instead of rewriting it")]
    pub stdout: bool,
}

// ── list editing ──────────────────────────────────────────────────────────────

/// A picked path and the directory it is stored relative to.
#[derive(Debug, Args)]
pub struct PathArgs {
    /// Path to add.  Relative paths are resolved against the current directory.
    #[arg(value_name = "PATH")]
    pub path: PathBuf,

    /// Directory the stored entry is made relative to.
    #[arg(long = "base", value_name = "DIR", help = "Override the base directory")]
    pub base: Option<PathBuf>,
}

/// Subcommands for `slngen workspace`.
#[derive(Debug, Subcommand)]
pub enum WorkspaceCommands {
    /// Append a workspace.  The final path segment must end with `~`.
    Add(PathArgs),
    /// Replace the workspace at INDEX.
    Set {
        /// Zero-based position.
        index: usize,
        #[command(flatten)]
        path: PathArgs,
    },
    /// Remove the workspace at INDEX.
    #[command(visible_alias = "rm")]
    Remove {
        /// Zero-based position.
        index: usize,
    },
    /// Move a workspace to a new position.
    #[command(visible_alias = "mv")]
    Move {
        /// Current position.
        from: usize,
        /// New position.
        to: usize,
    },
    /// Print the workspaces in generation order.
    #[command(visible_alias = "ls")]
    List,
}

/// Subcommands shared by `slngen assembly` and `slngen project`.
#[derive(Debug, Subcommand)]
pub enum EntryCommands {
    /// Append an entry.
    Add(PathArgs),
    /// Remove the entry at INDEX.
    #[command(visible_alias = "rm")]
    Remove {
        /// Zero-based position.
        index: usize,
    },
    /// Print the entries.
    #[command(visible_alias = "ls")]
    List,
}

// ── show ──────────────────────────────────────────────────────────────────────

/// Arguments for `slngen show`.
#[derive(Debug, Args)]
pub struct ShowArgs {
    /// Print the stored JSON instead of a summary.
    #[arg(long = "json", help = "Print as JSON")]
    pub json: bool,
}

// ── init ──────────────────────────────────────────────────────────────────────

/// Arguments for `slngen init`.
#[derive(Debug, Args)]
pub struct InitArgs {
    /// Overwrite an existing config file.
    #[arg(short = 'f', long = "force", help = "Overwrite existing configuration")]
    pub force: bool,
}

// ── completions ───────────────────────────────────────────────────────────────

/// Arguments for `slngen completions`.
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

/// Subcommands for `slngen config`.
#[derive(Debug, Subcommand)]
pub enum ConfigCommands {
    /// Print the value of a configuration key.
    Get {
        /// Dotted key path, e.g. `generator.target_framework`.
        key: String,
    },
    /// Print all configuration values.
    List,
    /// Print the path to the active configuration file.
    Path,
}

// ── tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn parse_generate_command() {
        let cli = Cli::parse_from(["slngen", "generate", "Game.sln", "--stdout"]);
        match cli.command {
            Commands::Generate(args) => {
                assert_eq!(args.solution, PathBuf::from("Game.sln"));
                assert!(args.stdout);
            }
            other => panic!("expected Generate, got {other:?}"),
        }
    }

    #[test]
    fn parse_workspace_add_with_base() {
        let cli = Cli::parse_from(["slngen", "ws", "add", "/g/Assets/A~", "--base", "/g/Assets"]);
        match cli.command {
            Commands::Workspace(WorkspaceCommands::Add(args)) => {
                assert_eq!(args.base, Some(PathBuf::from("/g/Assets")));
            }
            other => panic!("expected workspace add, got {other:?}"),
        }
    }

    #[test]
    fn parse_workspace_move() {
        let cli = Cli::parse_from(["slngen", "workspace", "mv", "2", "0"]);
        assert!(matches!(
            cli.command,
            Commands::Workspace(WorkspaceCommands::Move { from: 2, to: 0 })
        ));
    }

    #[test]
    fn assembly_has_no_move() {
        let result = Cli::try_parse_from(["slngen", "assembly", "move", "0", "1"]);
        assert!(result.is_err());
    }

    #[test]
    fn negative_index_is_rejected() {
        let result = Cli::try_parse_from(["slngen", "project", "remove", "-1"]);
        assert!(result.is_err());
    }

    #[test]
    fn quiet_and_verbose_conflict() {
        // clap should reject --quiet --verbose together
        let result = Cli::try_parse_from(["slngen", "--quiet", "--verbose", "show"]);
        assert!(result.is_err());
    }
}
