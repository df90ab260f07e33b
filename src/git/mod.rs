// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Git integration module.
//!
//! Reads commits and their parent counts from a repository.

mod repo;

pub use repo::{open_repo, Repository};

#[cfg(test)]
pub(crate) use repo::tests::create_test_repo;
