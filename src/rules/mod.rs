// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Rule engine module for commit validation.
//!
//! The rules are a fixed table (see [`crate::config::RuleId::all`]); the
//! engine builds the enabled ones from configuration and runs each of them
//! once per commit.

mod builtin;
mod engine;
mod validator;

pub use builtin::*;
pub use engine::RuleEngine;
pub use validator::{LintReport, Violation};
