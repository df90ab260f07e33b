// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Default configuration values.

use super::schema::LintConfig;

/// Get the default configuration.
pub fn default_config() -> LintConfig {
    LintConfig::default()
}

/// Generate an example configuration file.
pub fn example_config() -> &'static str {
    r#"# burnlint configuration

[general]
# Rules to skip, by name or code (UT1..UT5).
ignore = []
# Skip merge commits entirely.
ignore_merge_commits = false
# Drop '#' comment lines and the scissors section from hook input.
strip_comments = true

# The first word of the title must not end with one of these.
[rules.title-imperative-mood]
suffixes = ["ed", "ing"]
"#
}
