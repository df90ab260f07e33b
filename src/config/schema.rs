// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Configuration schema definitions.
//!
//! Defines the configuration structures that can be loaded from burnlint.toml.

use crate::error::{ConfigError, Result};
use serde::{Deserialize, Serialize};

/// The main configuration structure for burnlint.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(default)]
pub struct LintConfig {
    /// General options.
    pub general: GeneralConfig,

    /// Per-rule options.
    pub rules: RulesConfig,
}

impl LintConfig {
    /// Load configuration from the default locations.
    pub fn load() -> Result<Self> {
        super::loader::load_config()
    }

    /// Load configuration from a specific path.
    pub fn load_from(path: &std::path::Path) -> Result<Self> {
        super::loader::load_config_from(path)
    }

    /// Check field values that serde cannot check on its own.
    pub fn validate(&self) -> Result<()> {
        for entry in &self.general.ignore {
            entry.parse::<RuleId>().map_err(|_| ConfigError::InvalidValue {
                key: "general.ignore".to_string(),
                message: format!("unknown rule '{}'", entry),
            })?;
        }

        if self.rules.imperative_mood.suffixes.iter().any(|s| s.is_empty()) {
            return Err(ConfigError::InvalidValue {
                key: "rules.title-imperative-mood.suffixes".to_string(),
                message: "suffixes must not be empty strings".to_string(),
            }
            .into());
        }

        Ok(())
    }

    /// Whether a rule is switched off by the ignore list.
    pub fn is_ignored(&self, rule: RuleId) -> bool {
        self.general
            .ignore
            .iter()
            .filter_map(|entry| entry.parse::<RuleId>().ok())
            .any(|ignored| ignored == rule)
    }
}

/// General configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct GeneralConfig {
    /// Rules to skip, by name or code.
    pub ignore: Vec<String>,

    /// Skip merge commits entirely.
    pub ignore_merge_commits: bool,

    /// Drop `#` comment lines and everything below the scissors line
    /// from messages read by `check`.
    pub strip_comments: bool,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            ignore: Vec::new(),
            ignore_merge_commits: false,
            strip_comments: true,
        }
    }
}

/// Per-rule configuration.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(default)]
pub struct RulesConfig {
    /// Options for `title-imperative-mood`.
    #[serde(rename = "title-imperative-mood", alias = "UT2")]
    pub imperative_mood: ImperativeMoodConfig,
}

/// Options for the imperative mood check.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct ImperativeMoodConfig {
    /// Suffixes that must not end the first word of the title.
    pub suffixes: Vec<String>,
}

impl Default for ImperativeMoodConfig {
    fn default() -> Self {
        Self {
            suffixes: vec!["ed".to_string(), "ing".to_string()],
        }
    }
}

/// Identifiers of the built-in rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum RuleId {
    TitleCapitalized,
    TitleImperativeMood,
    TitleNoIssueReferences,
    BodySeparateReferences,
    MergeContainReference,
}

impl RuleId {
    /// Stable rule name.
    pub fn as_str(&self) -> &'static str {
        match self {
            RuleId::TitleCapitalized => "title-capitalized",
            RuleId::TitleImperativeMood => "title-imperative-mood",
            RuleId::TitleNoIssueReferences => "title-no-issue-references",
            RuleId::BodySeparateReferences => "body-separate-references",
            RuleId::MergeContainReference => "merge-contain-reference",
        }
    }

    /// Short rule code.
    pub fn code(&self) -> &'static str {
        match self {
            RuleId::TitleCapitalized => "UT1",
            RuleId::TitleImperativeMood => "UT2",
            RuleId::TitleNoIssueReferences => "UT3",
            RuleId::BodySeparateReferences => "UT4",
            RuleId::MergeContainReference => "UT5",
        }
    }

    /// Get a description of the rule.
    pub fn description(&self) -> &'static str {
        match self {
            RuleId::TitleCapitalized => "Title starts with a capital letter",
            RuleId::TitleImperativeMood => {
                "First word of the title does not end with a forbidden suffix"
            }
            RuleId::TitleNoIssueReferences => "Title contains no #123 issue references",
            RuleId::BodySeparateReferences => {
                "See/Fixes/Closes references sit in their own body paragraph"
            }
            RuleId::MergeContainReference => {
                "Merge commits carry a See/Fixes/Closes issue reference"
            }
        }
    }

    /// Get all rules, in evaluation order.
    pub fn all() -> &'static [RuleId] {
        &[
            RuleId::TitleCapitalized,
            RuleId::TitleImperativeMood,
            RuleId::TitleNoIssueReferences,
            RuleId::BodySeparateReferences,
            RuleId::MergeContainReference,
        ]
    }
}

impl std::str::FromStr for RuleId {
    type Err = ();

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let s = s.trim();
        RuleId::all()
            .iter()
            .copied()
            .find(|rule| rule.as_str() == s || rule.code().eq_ignore_ascii_case(s))
            .ok_or(())
    }
}

impl std::fmt::Display for RuleId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = LintConfig::default();
        assert_eq!(config.rules.imperative_mood.suffixes, vec!["ed", "ing"]);
        assert!(config.general.ignore.is_empty());
        assert!(config.general.strip_comments);
        assert!(!config.general.ignore_merge_commits);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_rule_id_from_str() {
        assert_eq!(
            "title-capitalized".parse::<RuleId>(),
            Ok(RuleId::TitleCapitalized)
        );
        assert_eq!("UT4".parse::<RuleId>(), Ok(RuleId::BodySeparateReferences));
        assert_eq!("ut5".parse::<RuleId>(), Ok(RuleId::MergeContainReference));
        assert!("title-max-length".parse::<RuleId>().is_err());
    }

    #[test]
    fn test_rule_id_display() {
        assert_eq!(RuleId::TitleImperativeMood.to_string(), "title-imperative-mood");
        assert_eq!(RuleId::TitleNoIssueReferences.code(), "UT3");
    }

    #[test]
    fn test_validate_rejects_unknown_ignore() {
        let mut config = LintConfig::default();
        config.general.ignore = vec!["T1".to_string()];
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_empty_suffix() {
        let mut config = LintConfig::default();
        config.rules.imperative_mood.suffixes = vec!["ed".to_string(), String::new()];
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_is_ignored_by_name_or_code() {
        let mut config = LintConfig::default();
        config.general.ignore = vec!["UT1".to_string(), "merge-contain-reference".to_string()];
        assert!(config.is_ignored(RuleId::TitleCapitalized));
        assert!(config.is_ignored(RuleId::MergeContainReference));
        assert!(!config.is_ignored(RuleId::TitleImperativeMood));
    }

    #[test]
    fn test_config_serialization() {
        let config = LintConfig::default();
        let toml_str = toml::to_string(&config).unwrap();
        assert!(toml_str.contains("title-imperative-mood"));
        assert!(toml_str.contains("suffixes"));
    }
}
