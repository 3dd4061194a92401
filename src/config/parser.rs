//! YAML parser for run configurations
//!
//! Parses and validates the config file. All configuration problems are
//! raised here, before any fetch starts.

use crate::config::types::{Config, ResourceSpec};
use crate::error::{Error, Result};
use std::fs;
use std::path::Path;

/// Load a configuration from a YAML file
pub fn load_config(path: impl AsRef<Path>) -> Result<Config> {
    let path = path.as_ref();
    let content = fs::read_to_string(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            Error::config(format!("Config file '{}' not found", path.display()))
        } else {
            Error::config(format!(
                "Failed to read config file '{}': {}",
                path.display(),
                e
            ))
        }
    })?;
    load_config_from_str(&content)
}

/// Load a configuration from a YAML string
pub fn load_config_from_str(yaml: &str) -> Result<Config> {
    let config: Config = serde_yaml::from_str(yaml)?;
    validate_config(&config)?;
    Ok(config)
}

/// Validate a configuration
pub fn validate_config(config: &Config) -> Result<()> {
    if config.resources.is_empty() {
        return Err(Error::config(
            "No resources declared; add a 'resources' section to the config file",
        ));
    }

    for (name, spec) in &config.resources {
        validate_resource(name, spec)?;
    }

    if let Some(resolve) = &config.resolve {
        if resolve.trim().is_empty() {
            return Err(Error::config("Config-level 'resolve' cannot be empty"));
        }
    }

    Ok(())
}

/// Validate a single resource entry
fn validate_resource(name: &str, spec: &ResourceSpec) -> Result<()> {
    if name.trim().is_empty() {
        return Err(Error::config("Resource names cannot be empty"));
    }

    match spec.path() {
        None => return Err(Error::missing_path(name)),
        Some(path) if path.trim().is_empty() => {
            return Err(Error::config(format!(
                "Resource '{name}' path cannot be empty"
            )));
        }
        Some(_) => {}
    }

    if let Some(resolve) = spec.resolve() {
        if resolve.trim().is_empty() {
            return Err(Error::config(format!(
                "Resource '{name}' has an empty 'resolve' path"
            )));
        }
    }

    Ok(())
}
