// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Rule engine for commit validation.

use crate::commit::Commit;
use crate::config::{LintConfig, RuleId};
use crate::error::Result;
use crate::git::{self, Repository};

use super::builtin::{builtin_rules, Rule};
use super::validator::LintReport;

/// Rule engine for validating commit messages.
#[derive(Debug)]
pub struct RuleEngine {
    config: LintConfig,
    rules: Vec<Box<dyn Rule>>,
}

impl RuleEngine {
    /// Create a new rule engine with the given configuration.
    pub fn new(config: LintConfig) -> Self {
        let rules = builtin_rules(&config);
        tracing::debug!(
            "Enabled rules: {:?}",
            rules.iter().map(|r| r.id().as_str()).collect::<Vec<_>>()
        );

        Self { config, rules }
    }

    /// Identifiers of the enabled rules, in evaluation order.
    pub fn enabled_rules(&self) -> Vec<RuleId> {
        self.rules.iter().map(|rule| rule.id()).collect()
    }

    /// Run every enabled rule against a commit.
    pub fn lint(&self, commit: &Commit) -> LintReport {
        let mut report = LintReport::new(commit.title.clone());
        report.commit_sha = commit.sha.clone();

        if commit.is_merge && self.config.general.ignore_merge_commits {
            tracing::debug!("Skipping merge commit {:?}", commit.short_sha());
            return report;
        }

        for rule in &self.rules {
            if let Some(violation) = rule.check(commit) {
                tracing::trace!("{} failed: {}", rule.id(), violation.message);
                report.violations.push(violation);
            }
        }

        report
    }

    /// Lint a message as written by an editor or passed on stdin.
    pub fn lint_message(&self, message: &str, is_merge: bool) -> LintReport {
        let commit = if self.config.general.strip_comments {
            Commit::from_editor(message)
        } else {
            Commit::new(message)
        };

        self.lint(&commit.with_merge(is_merge))
    }

    /// Check a specific commit in the current repository.
    pub fn check_commit(&self, reference: &str) -> Result<LintReport> {
        let repo = git::open_repo()?;
        self.check_commit_in(&repo, reference)
    }

    /// Check a specific commit in a given repository.
    pub fn check_commit_in(&self, repo: &Repository, reference: &str) -> Result<LintReport> {
        let commit = repo.get_commit(reference)?;
        Ok(self.lint(&commit))
    }

    /// Check a range (`A..B`) or single reference in the current repository.
    pub fn check_range(&self, range: &str) -> Result<Vec<LintReport>> {
        let repo = git::open_repo()?;
        self.check_range_in(&repo, range)
    }

    /// Check a range or single reference in a given repository.
    pub fn check_range_in(&self, repo: &Repository, range: &str) -> Result<Vec<LintReport>> {
        let commits = repo.get_commits_in_range(range)?;
        tracing::debug!("Linting {} commit(s) in {}", commits.len(), range);

        Ok(commits.iter().map(|commit| self.lint(commit)).collect())
    }
}
