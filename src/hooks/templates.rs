// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Hook script templates.

/// File name of the installed hook.
pub const COMMIT_MSG_HOOK: &str = "commit-msg";

/// Marker identifying hooks written by burnlint.
pub const HOOK_MARKER: &str = "# burnlint commit-msg hook";

/// Generate the commit-msg hook script.
///
/// Git does not tell commit-msg hooks whether a merge is being recorded, so
/// the script looks for `MERGE_HEAD` itself.
pub fn commit_msg_script() -> String {
    format!(
        r#"#!/bin/sh
{marker}
# Generated by burnlint v{version}

merge=""
if [ -f "$(git rev-parse --git-dir)/MERGE_HEAD" ]; then
    merge="--merge"
fi

exec burnlint check --msg-filename "$1" $merge
"#,
        marker = HOOK_MARKER,
        version = crate::version::VERSION,
    )
}
