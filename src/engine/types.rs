//! Engine types
//!
//! Run options, per-resource outcomes and the final run summary.

use crate::typegen::Dialect;
use std::path::PathBuf;

/// Options controlling a generation run
#[derive(Debug, Clone)]
pub struct RunOptions {
    /// Output directory for declaration files
    pub out_dir: PathBuf,
    /// Declaration dialect
    pub dialect: Dialect,
    /// Prefix nested declaration names with the resource name
    pub prefix: bool,
    /// Default the projection to the `data` field of responses
    pub data_prop: bool,
}

impl Default for RunOptions {
    fn default() -> Self {
        Self {
            out_dir: PathBuf::from("."),
            dialect: Dialect::default(),
            prefix: false,
            data_prop: false,
        }
    }
}

impl RunOptions {
    /// Create options with defaults
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the output directory
    #[must_use]
    pub fn with_out_dir(mut self, out_dir: impl Into<PathBuf>) -> Self {
        self.out_dir = out_dir.into();
        self
    }

    /// Set the declaration dialect
    #[must_use]
    pub fn with_dialect(mut self, dialect: Dialect) -> Self {
        self.dialect = dialect;
        self
    }

    /// Prefix nested declaration names with the resource name
    #[must_use]
    pub fn with_prefix(mut self, prefix: bool) -> Self {
        self.prefix = prefix;
        self
    }

    /// Default the projection to the `data` field
    #[must_use]
    pub fn with_data_prop(mut self, data_prop: bool) -> Self {
        self.data_prop = data_prop;
        self
    }
}

/// Outcome of generating declarations for one resource
#[derive(Debug, Clone)]
pub enum ResourceOutcome {
    /// The declaration file was written
    Written {
        /// Resource name
        resource: String,
        /// Path of the written file
        path: PathBuf,
        /// Number of declarations in the file
        declarations: usize,
        /// Duration in milliseconds
        duration_ms: u64,
    },
    /// The resource failed; the run continues without it
    Failed {
        /// Resource name
        resource: String,
        /// Error description
        error: String,
        /// Duration in milliseconds
        duration_ms: u64,
    },
}

impl ResourceOutcome {
    /// Create a written outcome
    pub fn written(
        resource: impl Into<String>,
        path: PathBuf,
        declarations: usize,
        duration_ms: u64,
    ) -> Self {
        Self::Written {
            resource: resource.into(),
            path,
            declarations,
            duration_ms,
        }
    }

    /// Create a failed outcome
    pub fn failed(resource: impl Into<String>, error: impl Into<String>, duration_ms: u64) -> Self {
        Self::Failed {
            resource: resource.into(),
            error: error.into(),
            duration_ms,
        }
    }

    /// Resource name
    pub fn resource(&self) -> &str {
        match self {
            Self::Written { resource, .. } | Self::Failed { resource, .. } => resource,
        }
    }

    /// Check if the declaration file was written
    pub fn is_written(&self) -> bool {
        matches!(self, Self::Written { .. })
    }

    /// Error description for failed outcomes
    pub fn error(&self) -> Option<&str> {
        match self {
            Self::Written { .. } => None,
            Self::Failed { error, .. } => Some(error),
        }
    }
}

/// Summary of a full generation run
#[derive(Debug, Clone, Default)]
pub struct RunSummary {
    /// Per-resource outcomes, in config file order
    pub outcomes: Vec<ResourceOutcome>,
    /// Total run duration in milliseconds
    pub duration_ms: u64,
}

impl RunSummary {
    /// Create an empty summary
    pub fn new() -> Self {
        Self::default()
    }

    /// Record an outcome
    pub fn add(&mut self, outcome: ResourceOutcome) {
        self.outcomes.push(outcome);
    }

    /// Set total duration
    pub fn set_duration(&mut self, ms: u64) {
        self.duration_ms = ms;
    }

    /// Total number of resources processed
    pub fn total(&self) -> usize {
        self.outcomes.len()
    }

    /// Number of declaration files written
    pub fn written(&self) -> usize {
        self.outcomes.iter().filter(|o| o.is_written()).count()
    }

    /// Number of failed resources
    pub fn failed(&self) -> usize {
        self.total() - self.written()
    }

    /// Check if every resource failed
    pub fn all_failed(&self) -> bool {
        !self.outcomes.is_empty() && self.written() == 0
    }
}
