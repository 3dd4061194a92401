//! Config types
//!
//! Declarative run configuration parsed from the YAML config file.

use crate::error::{Error, Result};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use url::Url;

/// Default config file path, relative to the working directory
pub const DEFAULT_CONFIG_FILE: &str = "typeforge.yaml";

// ============================================================================
// Run Configuration
// ============================================================================

/// Top-level run configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct Config {
    /// Base URL for all resources; a CLI-supplied URL overrides it
    #[serde(default)]
    pub url: Option<String>,
    /// Default projection applied to every response without its own
    #[serde(default)]
    pub resolve: Option<String>,
    /// Extra request headers sent with every fetch
    #[serde(default)]
    pub headers: HashMap<String, String>,
    /// Named resources, processed in file order
    #[serde(default)]
    pub resources: IndexMap<String, ResourceSpec>,
}

/// One configured resource: a bare path, or a mapping with options
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ResourceSpec {
    /// Short form: the request path
    Path(String),
    /// Long form with an optional projection
    Detailed {
        /// Request path; required, validated before any fetch
        #[serde(default)]
        path: Option<String>,
        /// Dot-notation (or JSONPath) projection into the response
        #[serde(default)]
        resolve: Option<String>,
    },
}

impl ResourceSpec {
    /// The request path, if present
    pub fn path(&self) -> Option<&str> {
        match self {
            ResourceSpec::Path(path) => Some(path),
            ResourceSpec::Detailed { path, .. } => path.as_deref(),
        }
    }

    /// The per-resource projection, if present
    pub fn resolve(&self) -> Option<&str> {
        match self {
            ResourceSpec::Path(_) => None,
            ResourceSpec::Detailed { resolve, .. } => resolve.as_deref(),
        }
    }
}

impl Config {
    /// Projection for a resource: its own `resolve`, else the config-level
    /// one, else `data` when the data-prop option is on
    pub fn resolve_for(&self, spec: &ResourceSpec, data_prop: bool) -> Option<String> {
        spec.resolve()
            .or(self.resolve.as_deref())
            .map(str::to_string)
            .or_else(|| data_prop.then(|| "data".to_string()))
    }
}

// ============================================================================
// Base URL
// ============================================================================

/// Validated base URL with its query string held aside so it can be
/// re-appended after the resource path
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BaseUrl {
    base: String,
    query: Option<String>,
}

impl BaseUrl {
    /// Parse and normalize a base URL. Trailing slashes are stripped; the
    /// URL must be absolute.
    pub fn parse(raw: &str) -> Result<Self> {
        let trimmed = raw.trim().trim_end_matches('/');
        if trimmed.is_empty() {
            return Err(Error::config("Base URL cannot be empty"));
        }
        Url::parse(trimmed)?;

        let (base, query) = match trimmed.split_once('?') {
            Some((base, query)) => (base, Some(query.to_string())),
            None => (trimmed, None),
        };

        Ok(Self {
            base: base.trim_end_matches('/').to_string(),
            query,
        })
    }

    /// Join a resource path onto the base, keeping the base query string
    /// after the path: `https://h?k=1` + `/users` -> `https://h/users?k=1`
    pub fn join(&self, path: &str) -> String {
        let joined = format!("{}/{}", self.base, path.trim_start_matches('/'));
        match &self.query {
            Some(query) => format!("{joined}?{query}"),
            None => joined,
        }
    }

    /// The base without its query string, used for reachability probes
    pub fn root(&self) -> &str {
        &self.base
    }
}

impl std::fmt::Display for BaseUrl {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.query {
            Some(query) => write!(f, "{}?{}", self.base, query),
            None => write!(f, "{}", self.base),
        }
    }
}
