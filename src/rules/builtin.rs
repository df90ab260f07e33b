// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Built-in validation rules.
//!
//! Every rule is a pure function of the commit it is given. The imperative
//! mood and reference checks are lexical heuristics, not language analysis.

use crate::commit::Commit;
use crate::config::{LintConfig, RuleId};
use lazy_static::lazy_static;
use regex::Regex;

use super::validator::Violation;

lazy_static! {
    /// `#123` anywhere in a line.
    static ref ISSUE_REFERENCE: Regex = Regex::new(r"#\d+").unwrap();

    /// A reference keyword preceded by other text in the same paragraph.
    static ref MIXED_REFERENCE: Regex =
        Regex::new(r"(?is).+(?:See|Fixes|Closes) #\d+").unwrap();

    /// A reference keyword anywhere in the message.
    static ref MERGE_REFERENCE: Regex =
        Regex::new(r"(?i)(?:See|Fixes|Closes) #\d+").unwrap();
}

/// A single commit check.
pub trait Rule: std::fmt::Debug + Send + Sync {
    /// The rule this check implements.
    fn id(&self) -> RuleId;

    /// Check the commit and return a violation if it fails.
    fn check(&self, commit: &Commit) -> Option<Violation>;
}

/// Build the rule object for an identifier.
pub fn build_rule(id: RuleId, config: &LintConfig) -> Box<dyn Rule> {
    match id {
        RuleId::TitleCapitalized => Box::new(TitleCapitalized),
        RuleId::TitleImperativeMood => Box::new(TitleImperativeMood::new(
            config.rules.imperative_mood.suffixes.clone(),
        )),
        RuleId::TitleNoIssueReferences => Box::new(TitleNoIssueReferences),
        RuleId::BodySeparateReferences => Box::new(BodySeparateReferences),
        RuleId::MergeContainReference => Box::new(MergeContainReference),
    }
}

/// Build every rule not switched off in the configuration, in table order.
pub fn builtin_rules(config: &LintConfig) -> Vec<Box<dyn Rule>> {
    RuleId::all()
        .iter()
        .filter(|id| !config.is_ignored(**id))
        .map(|id| build_rule(*id, config))
        .collect()
}

fn title_violation(id: RuleId, message: &str, commit: &Commit) -> Violation {
    Violation::new(id, message)
        .with_content(&commit.title)
        .with_line(1)
}

/// Title must not start with a lowercase letter.
///
/// Only characters with the Unicode `Lowercase` property fail; digits,
/// punctuation and uncased letters pass.
#[derive(Debug, Default, Clone, Copy)]
pub struct TitleCapitalized;

impl Rule for TitleCapitalized {
    fn id(&self) -> RuleId {
        RuleId::TitleCapitalized
    }

    fn check(&self, commit: &Commit) -> Option<Violation> {
        let first_char = commit.title.chars().next()?;

        first_char.is_lowercase().then(|| {
            title_violation(self.id(), "Title should start with a capital letter", commit)
        })
    }
}

/// First word of the title must not end with a forbidden suffix.
#[derive(Debug, Clone)]
pub struct TitleImperativeMood {
    suffixes: Vec<String>,
}

impl TitleImperativeMood {
    /// Create the check with the given suffixes.
    pub fn new(suffixes: Vec<String>) -> Self {
        Self { suffixes }
    }
}

impl Default for TitleImperativeMood {
    fn default() -> Self {
        Self::new(crate::config::ImperativeMoodConfig::default().suffixes)
    }
}

impl Rule for TitleImperativeMood {
    fn id(&self) -> RuleId {
        RuleId::TitleImperativeMood
    }

    fn check(&self, commit: &Commit) -> Option<Violation> {
        let first_word = commit.title.split_whitespace().next()?;

        self.suffixes
            .iter()
            .any(|suffix| first_word.ends_with(suffix.as_str()))
            .then(|| title_violation(self.id(), "Title should use imperative mood", commit))
    }
}

/// Title must not reference issues.
#[derive(Debug, Default, Clone, Copy)]
pub struct TitleNoIssueReferences;

impl Rule for TitleNoIssueReferences {
    fn id(&self) -> RuleId {
        RuleId::TitleNoIssueReferences
    }

    fn check(&self, commit: &Commit) -> Option<Violation> {
        ISSUE_REFERENCE.is_match(&commit.title).then(|| {
            title_violation(
                self.id(),
                "Title should not contain issue references; use last body paragraph",
                commit,
            )
        })
    }
}

/// `See/Fixes/Closes #N` must sit in a body paragraph of its own.
#[derive(Debug, Default, Clone, Copy)]
pub struct BodySeparateReferences;

impl Rule for BodySeparateReferences {
    fn id(&self) -> RuleId {
        RuleId::BodySeparateReferences
    }

    fn check(&self, commit: &Commit) -> Option<Violation> {
        let paragraph = commit
            .paragraphs()
            .into_iter()
            .find(|p| MIXED_REFERENCE.is_match(&p.text))?;

        Some(
            Violation::new(
                self.id(),
                "'See/Fixes/Closes' issue reference should be placed in separate paragraph",
            )
            .with_content(paragraph.text.trim_end())
            .with_line(paragraph.line),
        )
    }
}

/// Merge commits must carry a `See/Fixes/Closes #N` reference.
#[derive(Debug, Default, Clone, Copy)]
pub struct MergeContainReference;

impl Rule for MergeContainReference {
    fn id(&self) -> RuleId {
        RuleId::MergeContainReference
    }

    fn check(&self, commit: &Commit) -> Option<Violation> {
        if !commit.is_merge || MERGE_REFERENCE.is_match(&commit.message) {
            return None;
        }

        Some(Violation::new(
            self.id(),
            "Merge commit should contain issue reference",
        ))
    }
}
