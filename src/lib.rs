// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! burnlint - commit message linter
//!
//! Enforces a small commit-message house style:
//!
//! - **UT1 `title-capitalized`**: the title starts with a capital letter
//! - **UT2 `title-imperative-mood`**: the first word does not end in `ed`/`ing`
//! - **UT3 `title-no-issue-references`**: no `#123` in the title
//! - **UT4 `body-separate-references`**: `See/Fixes/Closes #123` in a paragraph of its own
//! - **UT5 `merge-contain-reference`**: merge commits reference an issue
//!
//! # Example
//!
//! ```
//! use burnlint::commit::Commit;
//! use burnlint::config::LintConfig;
//! use burnlint::rules::RuleEngine;
//!
//! let engine = RuleEngine::new(LintConfig::default());
//! let report = engine.lint(&Commit::new("Added parser #12"));
//!
//! let codes: Vec<_> = report.violations.iter().map(|v| v.rule_id.code()).collect();
//! assert_eq!(codes, ["UT2", "UT3"]);
//! ```

// Module declarations
pub mod cli;
pub mod commit;
pub mod config;
pub mod error;
pub mod git;
pub mod hooks;
pub mod rules;

// Re-exports for convenience
pub use config::LintConfig;
pub use error::{LintError, Result};

/// Version information embedded at compile time.
pub mod version {
    /// The current version of burnlint.
    pub const VERSION: &str = env!("CARGO_PKG_VERSION");

    /// The git SHA at compile time (if available).
    pub const GIT_SHA: Option<&str> = option_env!("VERGEN_GIT_SHA");

    /// The git commit date at compile time (if available).
    pub const GIT_COMMIT_DATE: Option<&str> = option_env!("VERGEN_GIT_COMMIT_DATE");

    /// Get a formatted version string.
    pub fn version_string() -> String {
        match (GIT_SHA, GIT_COMMIT_DATE) {
            (Some(sha), Some(date)) => {
                format!("{} ({} {})", VERSION, &sha[..7.min(sha.len())], date)
            }
            (Some(sha), None) => {
                format!("{} ({})", VERSION, &sha[..7.min(sha.len())])
            }
            _ => VERSION.to_string(),
        }
    }
}
