//! Configuration module
//!
//! Parse run configurations from YAML files.
//!
//! # Overview
//!
//! The config module provides:
//! - `Config` - the run configuration (base URL, headers, resources)
//! - `ResourceSpec` - one named resource in short or long form
//! - `BaseUrl` - validated base URL with query-string handling
//! - YAML parsing with validation

mod parser;
mod types;

pub use parser::{load_config, load_config_from_str, validate_config};
pub use types::{BaseUrl, Config, ResourceSpec, DEFAULT_CONFIG_FILE};

#[cfg(test)]
mod tests;
