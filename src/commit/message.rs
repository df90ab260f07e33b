// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Commit message structure and parsing.

/// Marker git writes above the diff in `commit --verbose`.
pub const SCISSORS_LINE: &str = "# ------------------------ >8 ------------------------";

/// Comment character used by git in editor templates.
pub const COMMENT_CHAR: char = '#';

/// A commit as seen by the rules.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Commit {
    /// Commit SHA when read from a repository.
    pub sha: Option<String>,
    /// First line of the message.
    pub title: String,
    /// Every line after the title, including the blank separator line.
    pub body: Vec<String>,
    /// Full message text.
    pub message: String,
    /// Whether the commit has more than one parent.
    pub is_merge: bool,
}

/// A blank-line separated block of body text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Paragraph {
    /// 1-based line of the message where the paragraph starts.
    pub line: usize,
    pub text: String,
}

impl Commit {
    /// Create a commit from a raw message.
    pub fn new(message: impl Into<String>) -> Self {
        let message = message.into();
        let mut lines = message
            .split('\n')
            .map(|line| line.strip_suffix('\r').unwrap_or(line).to_string());

        let title = lines.next().unwrap_or_default();
        let body = lines.collect();

        Self {
            sha: None,
            title,
            body,
            message,
            is_merge: false,
        }
    }

    /// Create a commit from text written by a git editor session, dropping
    /// comment lines and anything below the scissors line.
    pub fn from_editor(raw: &str) -> Self {
        Self::new(strip_comments(raw))
    }

    /// Set the merge flag.
    pub fn with_merge(mut self, is_merge: bool) -> Self {
        self.is_merge = is_merge;
        self
    }

    /// Set the commit SHA.
    pub fn with_sha(mut self, sha: impl Into<String>) -> Self {
        self.sha = Some(sha.into());
        self
    }

    /// Short form of the SHA, if known.
    pub fn short_sha(&self) -> Option<&str> {
        self.sha.as_deref().map(|sha| &sha[..7.min(sha.len())])
    }

    /// Split the body into paragraphs.
    ///
    /// The first body line is the separator below the title and is skipped;
    /// the rest is joined and split on blank lines.
    pub fn paragraphs(&self) -> Vec<Paragraph> {
        let rest = match self.body.get(1..) {
            Some(rest) if !rest.is_empty() => rest,
            _ => return Vec::new(),
        };

        let joined = rest.join("\n");
        let mut line = 3;
        let mut paragraphs = Vec::new();

        for text in joined.split("\n\n") {
            let height = text.matches('\n').count() + 1;
            paragraphs.push(Paragraph {
                line,
                text: text.to_string(),
            });
            line += height + 1;
        }

        paragraphs
    }
}

/// Remove git comment lines and the verbose diff section from a message.
pub fn strip_comments(raw: &str) -> String {
    let mut kept = Vec::new();

    for line in raw.split('\n') {
        let line = line.strip_suffix('\r').unwrap_or(line);
        if line == SCISSORS_LINE {
            break;
        }
        if !line.starts_with(COMMENT_CHAR) {
            kept.push(line);
        }
    }

    kept.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_title_and_body() {
        let commit = Commit::new("Add parser\n\nFirst line\nsecond line\n\nSee #4");
        assert_eq!(commit.title, "Add parser");
        assert_eq!(commit.body, vec!["", "First line", "second line", "", "See #4"]);
        assert!(!commit.is_merge);
        assert!(commit.sha.is_none());
    }

    #[test]
    fn test_parse_empty_message() {
        let commit = Commit::new("");
        assert_eq!(commit.title, "");
        assert!(commit.body.is_empty());
        assert!(commit.paragraphs().is_empty());
    }

    #[test]
    fn test_parse_crlf() {
        let commit = Commit::new("Add parser\r\n\r\nBody text\r\n");
        assert_eq!(commit.title, "Add parser");
        assert_eq!(commit.body[1], "Body text");
    }

    #[test]
    fn test_paragraphs_with_lines() {
        let commit = Commit::new("Title\n\nOne\ntwo\n\nThree\n\nSee #1");
        let paragraphs = commit.paragraphs();
        assert_eq!(paragraphs.len(), 3);
        assert_eq!(paragraphs[0].text, "One\ntwo");
        assert_eq!(paragraphs[0].line, 3);
        assert_eq!(paragraphs[1].text, "Three");
        assert_eq!(paragraphs[1].line, 6);
        assert_eq!(paragraphs[2].text, "See #1");
        assert_eq!(paragraphs[2].line, 8);
    }

    #[test]
    fn test_paragraphs_title_only() {
        assert!(Commit::new("Title").paragraphs().is_empty());
        assert!(Commit::new("Title\n").paragraphs().is_empty());
    }

    #[test]
    fn test_strip_comments() {
        let raw = "Add thing\n\n# Please enter the commit message\nBody\n";
        assert_eq!(strip_comments(raw), "Add thing\n\nBody\n");
    }

    #[test]
    fn test_strip_scissors() {
        let raw = format!("Add thing\n\nBody\n{}\ndiff --git a/x b/x\n", SCISSORS_LINE);
        assert_eq!(strip_comments(&raw), "Add thing\n\nBody");
    }

    #[test]
    fn test_builders() {
        let commit = Commit::new("Merge branch 'x'")
            .with_merge(true)
            .with_sha("0123456789abcdef");
        assert!(commit.is_merge);
        assert_eq!(commit.short_sha(), Some("0123456"));
    }
}
