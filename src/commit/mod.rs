// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Commit module: the message model the rules operate on.

mod message;

pub use message::{strip_comments, Commit, Paragraph, COMMENT_CHAR, SCISSORS_LINE};
