// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Configuration module for burnlint.
//!
//! This module handles loading, parsing, and validating configuration from
//! burnlint.toml and command-line overrides.

pub mod default;
mod loader;
mod schema;

pub use default::default_config;
pub use loader::{
    apply_cli_overrides, find_config_file, find_config_file_from, load_config, load_config_from,
    parse_config, CONFIG_FILES,
};
pub use schema::*;
