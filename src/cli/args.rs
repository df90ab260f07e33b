// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! CLI argument definitions using clap.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// burnlint - commit message linter
///
/// Checks for capitalized imperative titles, issue references kept out of
/// the title and in their own paragraph, and merge commits that reference
/// an issue.
#[derive(Parser, Debug)]
#[command(name = "burnlint")]
#[command(author = "Eshan Roy")]
#[command(version)]
#[command(about = "Commit message linter", long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// The command to run (defaults to check if not specified)
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    pub debug: bool,

    /// Output format for machine-readable output
    #[arg(long, global = true, value_enum)]
    pub format: Option<OutputFormat>,

    /// Path to configuration file
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Rules to skip, by name or code (comma separated or repeated)
    #[arg(long, global = true, value_name = "RULE")]
    pub ignore: Vec<String>,
}

/// Output format for CI and scripting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// Plain text output (default)
    Text,
    /// JSON output for machine parsing
    Json,
}

/// Available commands.
#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Lint a commit message from a file or stdin (default command)
    Check(CheckArgs),

    /// Lint commits from the current repository
    Commits(CommitsArgs),

    /// List the available rules
    Rules,

    /// Install the commit-msg hook
    InstallHook(InstallHookArgs),

    /// Remove the commit-msg hook
    UninstallHook,

    /// Write an example burnlint.toml
    Init(InitArgs),

    /// Print version information
    Version,
}

/// Arguments for the check command.
#[derive(Parser, Debug, Default, Clone)]
pub struct CheckArgs {
    /// File holding the message (reads stdin when omitted)
    #[arg(long, value_name = "PATH")]
    pub msg_filename: Option<PathBuf>,

    /// Treat the message as a merge commit
    #[arg(long)]
    pub merge: bool,
}

/// Arguments for the commits command.
#[derive(Parser, Debug, Clone)]
pub struct CommitsArgs {
    /// Commit or range (A..B) to lint
    #[arg(default_value = "HEAD")]
    pub target: String,
}

/// Arguments for the install-hook command.
#[derive(Parser, Debug, Default, Clone)]
pub struct InstallHookArgs {
    /// Replace an existing hook not installed by burnlint
    #[arg(short, long)]
    pub force: bool,
}

/// Arguments for the init command.
#[derive(Parser, Debug, Default, Clone)]
pub struct InitArgs {
    /// Overwrite existing configuration
    #[arg(short, long)]
    pub force: bool,
}

impl Cli {
    /// Get the effective command, defaulting to Check if none specified.
    pub fn effective_command(&self) -> Commands {
        self.command
            .clone()
            .unwrap_or(Commands::Check(CheckArgs::default()))
    }
}

impl Default for CommitsArgs {
    fn default() -> Self {
        Self {
            target: "HEAD".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_debug() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_check() {
        let args = Cli::parse_from(["burnlint", "check", "--msg-filename", "MSG", "--merge"]);
        if let Some(Commands::Check(check)) = args.command {
            assert_eq!(check.msg_filename, Some(PathBuf::from("MSG")));
            assert!(check.merge);
        } else {
            panic!("Expected Check command");
        }
    }

    #[test]
    fn test_parse_commits() {
        let args = Cli::parse_from(["burnlint", "commits", "HEAD~5..HEAD"]);
        if let Some(Commands::Commits(commits)) = args.command {
            assert_eq!(commits.target, "HEAD~5..HEAD");
        } else {
            panic!("Expected Commits command");
        }
    }

    #[test]
    fn test_parse_install_hook() {
        let args = Cli::parse_from(["burnlint", "install-hook", "--force"]);
        assert!(matches!(
            args.command,
            Some(Commands::InstallHook(InstallHookArgs { force: true }))
        ));
    }

    #[test]
    fn test_global_flags() {
        let args = Cli::parse_from([
            "burnlint", "rules", "--ignore", "UT1,UT2", "--ignore", "UT3", "--format", "json",
        ]);
        assert_eq!(args.ignore, vec!["UT1,UT2", "UT3"]);
        assert_eq!(args.format, Some(OutputFormat::Json));
    }

    #[test]
    fn test_default_command() {
        let args = Cli::parse_from(["burnlint"]);
        assert!(args.command.is_none());
        assert!(matches!(args.effective_command(), Commands::Check(_)));
    }
}
