// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Command dispatch and execution.

use crate::config::{apply_cli_overrides, LintConfig, RuleId};
use crate::error::{ConfigError, InputError, LintError, Result, ResultExt};
use crate::rules::{LintReport, RuleEngine};
use std::io::Read;
use std::path::Path;

use super::args::{CheckArgs, Cli, Commands, CommitsArgs, InitArgs, InstallHookArgs, OutputFormat};

/// How a command finished.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// Nothing to report.
    Clean,
    /// At least one rule failed.
    Violations,
}

impl Outcome {
    /// Process exit status for this outcome.
    pub fn exit_code(self) -> i32 {
        match self {
            Outcome::Clean => 0,
            Outcome::Violations => 1,
        }
    }
}

/// Run the CLI with the given arguments.
pub fn run(cli: Cli) -> Result<Outcome> {
    let config = if let Some(config_path) = &cli.config {
        LintConfig::load_from(config_path)?
    } else {
        LintConfig::load()?
    };
    let config = apply_cli_overrides(config, &cli.ignore)?;

    match cli.effective_command() {
        Commands::Check(args) => run_check(&cli, config, args),
        Commands::Commits(args) => run_commits(&cli, config, args),
        Commands::Rules => run_rules(&cli, &config),
        Commands::InstallHook(args) => run_install_hook(args),
        Commands::UninstallHook => run_uninstall_hook(),
        Commands::Init(args) => run_init(args),
        Commands::Version => run_version(),
    }
}

/// Read the message to lint from a file or stdin.
fn read_message(path: Option<&Path>) -> Result<String> {
    let bytes = match path {
        Some(path) => std::fs::read(path).map_err(|e| InputError::ReadFile {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?,
        None => {
            let mut buf = Vec::new();
            std::io::stdin()
                .read_to_end(&mut buf)
                .map_err(|e| InputError::ReadStdin {
                    message: e.to_string(),
                })?;
            buf
        }
    };

    String::from_utf8(bytes).map_err(|_| InputError::InvalidEncoding.into())
}

fn outcome_of(reports: &[LintReport]) -> Outcome {
    if reports.iter().all(LintReport::is_clean) {
        Outcome::Clean
    } else {
        Outcome::Violations
    }
}

/// Run the check command.
fn run_check(cli: &Cli, config: LintConfig, args: CheckArgs) -> Result<Outcome> {
    tracing::debug!("Running check command with args: {:?}", args);

    let message = read_message(args.msg_filename.as_deref())?;
    let engine = RuleEngine::new(config);
    let report = engine.lint_message(&message, args.merge);

    report.print(cli.format);
    Ok(outcome_of(std::slice::from_ref(&report)))
}

/// Run the commits command.
fn run_commits(cli: &Cli, config: LintConfig, args: CommitsArgs) -> Result<Outcome> {
    tracing::debug!("Running commits command with args: {:?}", args);

    let engine = RuleEngine::new(config);
    let reports = if args.target.contains("..") {
        engine.check_range(&args.target)?
    } else {
        vec![engine.check_commit(&args.target)?]
    };

    match cli.format {
        Some(OutputFormat::Json) => {
            let json: Vec<_> = reports.iter().map(LintReport::to_json).collect();
            println!(
                "{}",
                serde_json::to_string_pretty(&json).unwrap_or_default()
            );
        }
        _ => {
            for report in &reports {
                report.print(cli.format);
            }
        }
    }

    Ok(outcome_of(&reports))
}

/// Run the rules command.
fn run_rules(cli: &Cli, config: &LintConfig) -> Result<Outcome> {
    match cli.format {
        Some(OutputFormat::Json) => {
            let json: Vec<_> = RuleId::all()
                .iter()
                .map(|rule| {
                    serde_json::json!({
                        "code": rule.code(),
                        "name": rule.as_str(),
                        "description": rule.description(),
                        "enabled": !config.is_ignored(*rule),
                    })
                })
                .collect();
            println!(
                "{}",
                serde_json::to_string_pretty(&json).unwrap_or_default()
            );
        }
        _ => {
            for rule in RuleId::all() {
                let marker = if config.is_ignored(*rule) {
                    console::style("-").dim()
                } else {
                    console::style("✓").green()
                };
                println!(
                    "{} {} {:<26} {}",
                    marker,
                    rule.code(),
                    rule.as_str(),
                    rule.description()
                );
            }
        }
    }

    Ok(Outcome::Clean)
}

/// Run the install-hook command.
fn run_install_hook(args: InstallHookArgs) -> Result<Outcome> {
    use crate::hooks::HookManager;

    let manager = HookManager::new()?;
    manager.install(args.force)?;
    println!("✓ Installed commit-msg hook at {}", manager.hook_path().display());

    Ok(Outcome::Clean)
}

/// Run the uninstall-hook command.
fn run_uninstall_hook() -> Result<Outcome> {
    use crate::hooks::HookManager;

    let manager = HookManager::new()?;
    manager.uninstall()?;
    println!("✓ Uninstalled commit-msg hook");

    Ok(Outcome::Clean)
}

/// Run the init command.
fn run_init(args: InitArgs) -> Result<Outcome> {
    use crate::config::default::example_config;

    tracing::debug!("Running init command with args: {:?}", args);

    let config_path = Path::new("burnlint.toml");

    if config_path.exists() && !args.force {
        return Err(LintError::Config(ConfigError::AlreadyExists {
            path: config_path.to_path_buf(),
        }));
    }

    std::fs::write(config_path, example_config()).context("Failed to write burnlint.toml")?;
    println!("✓ Created burnlint.toml");

    Ok(Outcome::Clean)
}

/// Run the version command.
fn run_version() -> Result<Outcome> {
    println!("burnlint {}", crate::version::version_string());

    if let Some(sha) = crate::version::GIT_SHA {
        println!("git commit: {}", sha);
    }
    if let Some(date) = crate::version::GIT_COMMIT_DATE {
        println!("commit date: {}", date);
    }

    Ok(Outcome::Clean)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::NamedTempFile;

    #[test]
    fn test_read_message_from_file() {
        let file = NamedTempFile::new().unwrap();
        std::fs::write(file.path(), "Add parser\n").unwrap();
        assert_eq!(read_message(Some(file.path())).unwrap(), "Add parser\n");
    }

    #[test]
    fn test_read_message_missing_file() {
        let result = read_message(Some(Path::new("/nonexistent/COMMIT_EDITMSG")));
        assert!(matches!(
            result,
            Err(LintError::Input(InputError::ReadFile { .. }))
        ));
    }

    #[test]
    fn test_read_message_invalid_utf8() {
        let file = NamedTempFile::new().unwrap();
        std::fs::write(file.path(), [0xff, 0xfe, 0x00]).unwrap();
        assert!(matches!(
            read_message(Some(file.path())),
            Err(LintError::Input(InputError::InvalidEncoding))
        ));
    }

    #[test]
    fn test_outcome_exit_codes() {
        assert_eq!(Outcome::Clean.exit_code(), 0);
        assert_eq!(Outcome::Violations.exit_code(), 1);

        let mut dirty = LintReport::new("x");
        dirty.violations.push(crate::rules::Violation::new(
            RuleId::TitleCapitalized,
            "Title should start with a capital letter",
        ));
        assert_eq!(outcome_of(&[LintReport::new("X")]), Outcome::Clean);
        assert_eq!(outcome_of(&[LintReport::new("X"), dirty]), Outcome::Violations);
    }
}
