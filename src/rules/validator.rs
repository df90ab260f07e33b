// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Violation and report types.

use crate::cli::args::OutputFormat;
use crate::config::RuleId;
use console::style;

/// A failed rule check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Violation {
    /// The rule that failed.
    pub rule_id: RuleId,
    /// Human-readable message.
    pub message: String,
    /// Offending text, if the rule points at any.
    pub content: Option<String>,
    /// 1-based line of the offending text in the message.
    pub line: Option<usize>,
}

impl Violation {
    /// Create a violation without content or line.
    pub fn new(rule_id: RuleId, message: impl Into<String>) -> Self {
        Self {
            rule_id,
            message: message.into(),
            content: None,
            line: None,
        }
    }

    /// Attach the offending text.
    pub fn with_content(mut self, content: impl Into<String>) -> Self {
        self.content = Some(content.into());
        self
    }

    /// Attach the line number.
    pub fn with_line(mut self, line: usize) -> Self {
        self.line = Some(line);
        self
    }

    /// Format the violation for terminal output.
    pub fn format(&self) -> String {
        let mut output = String::new();

        if let Some(line) = self.line {
            output.push_str(&format!("{}: ", style(line).dim()));
        }
        output.push_str(&format!(
            "{} {}",
            style(self.rule_id.code()).red().bold(),
            self.message
        ));
        if let Some(ref content) = self.content {
            output.push_str(&format!(": {}", style(format!("{:?}", content)).dim()));
        }

        output
    }

    fn to_json(&self) -> serde_json::Value {
        serde_json::json!({
            "rule": self.rule_id.as_str(),
            "code": self.rule_id.code(),
            "message": self.message,
            "content": self.content,
            "line": self.line,
        })
    }
}

impl std::fmt::Display for Violation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if let Some(line) = self.line {
            write!(f, "{}: ", line)?;
        }
        write!(f, "{} {}", self.rule_id.code(), self.message)?;
        if let Some(ref content) = self.content {
            write!(f, ": {:?}", content)?;
        }
        Ok(())
    }
}

/// Result of linting a single commit.
#[derive(Debug, Clone)]
pub struct LintReport {
    /// Commit SHA when linting repository history.
    pub commit_sha: Option<String>,
    /// Title of the linted message.
    pub title: String,
    /// Violations in rule order.
    pub violations: Vec<Violation>,
}

impl LintReport {
    /// Create an empty report.
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            commit_sha: None,
            title: title.into(),
            violations: Vec::new(),
        }
    }

    /// Check if the commit passed every rule.
    pub fn is_clean(&self) -> bool {
        self.violations.is_empty()
    }

    /// Print the report; violations go to stderr.
    pub fn print(&self, format: Option<OutputFormat>) {
        match format {
            Some(OutputFormat::Json) => self.print_json(),
            _ => self.print_text(),
        }
    }

    fn print_text(&self) {
        if let Some(ref sha) = self.commit_sha {
            let short_sha = &sha[..7.min(sha.len())];
            let status = if self.is_clean() {
                style("✓").green().bold()
            } else {
                style("✗").red().bold()
            };
            eprintln!("{} {} {}", status, style(short_sha).cyan(), self.title);
        }

        let indent = if self.commit_sha.is_some() { "  " } else { "" };
        for violation in &self.violations {
            eprintln!("{}{}", indent, violation.format());
        }
    }

    fn print_json(&self) {
        println!(
            "{}",
            serde_json::to_string_pretty(&self.to_json()).unwrap_or_default()
        );
    }

    /// JSON form of the report.
    pub fn to_json(&self) -> serde_json::Value {
        serde_json::json!({
            "valid": self.is_clean(),
            "commit": self.commit_sha,
            "title": self.title,
            "violations": self.violations.iter().map(Violation::to_json).collect::<Vec<_>>(),
        })
    }

    /// Get a summary string.
    pub fn summary(&self) -> String {
        match self.violations.len() {
            0 => "Valid".to_string(),
            1 => "Invalid (1 violation)".to_string(),
            n => format!("Invalid ({} violations)", n),
        }
    }
}
