//! Generation engine module
//!
//! Orchestrates a full run: reachability probe, one sample fetch per
//! configured resource, type inference and file output.
//!
//! # Overview
//!
//! The engine module provides:
//! - `Engine` - Runs the fetch/infer/write pipeline for every resource
//! - `RunOptions` - Options for a generation run
//! - `ResourceOutcome` / `RunSummary` - Per-resource and overall results

mod types;

pub use types::{ResourceOutcome, RunOptions, RunSummary};

use crate::config::{BaseUrl, Config, ResourceSpec};
use crate::error::{Error, Result};
use crate::http::{HttpClient, HttpClientConfig};
use crate::output;
use crate::resolve;
use crate::typegen::TypeInferrer;
use futures::future::join_all;
use serde_json::Value;
use std::path::PathBuf;
use std::time::Instant;
use tracing::{debug, error, info};

/// Generation engine for orchestrating resource fetches and output
#[derive(Debug)]
pub struct Engine {
    /// HTTP client
    client: HttpClient,
    /// Loaded configuration
    config: Config,
    /// Run options
    options: RunOptions,
    /// Base URL with any CLI override already applied
    base_url: BaseUrl,
}

impl Engine {
    /// Create a new engine
    ///
    /// `url_override` wins over the config-level `url`; having neither is a
    /// configuration error.
    pub fn new(config: Config, url_override: Option<&str>, options: RunOptions) -> Result<Self> {
        let raw_url = url_override.or(config.url.as_deref()).ok_or_else(|| {
            Error::config("No base URL; pass one as an argument or set 'url' in the config file")
        })?;
        let base_url = BaseUrl::parse(raw_url)?;

        let client_config = HttpClientConfig::builder()
            .headers(&config.headers)
            .build();
        let client = HttpClient::with_config(client_config);

        Ok(Self {
            client,
            config,
            options,
            base_url,
        })
    }

    /// The base URL the engine fetches from
    pub fn base_url(&self) -> &BaseUrl {
        &self.base_url
    }

    /// The run options
    pub fn options(&self) -> &RunOptions {
        &self.options
    }

    /// Run generation for every configured resource
    ///
    /// Probes the backend first and aborts if it is unreachable. Resources
    /// are fetched concurrently; a failing resource is recorded in the
    /// summary and never stops the others.
    pub async fn run(&self) -> Result<RunSummary> {
        let start = Instant::now();

        debug!("Probing backend at {}", self.base_url.root());
        self.client.check_reachability(self.base_url.root()).await?;

        let tasks = self
            .config
            .resources
            .iter()
            .map(|(name, spec)| self.generate_resource(name, spec));
        let outcomes = join_all(tasks).await;

        let mut summary = RunSummary::new();
        for outcome in outcomes {
            summary.add(outcome);
        }
        summary.set_duration(start.elapsed().as_millis() as u64);

        info!(
            "Run complete: {} written, {} failed in {}ms",
            summary.written(),
            summary.failed(),
            summary.duration_ms
        );

        Ok(summary)
    }

    /// Generate the declaration file for a single resource
    async fn generate_resource(&self, name: &str, spec: &ResourceSpec) -> ResourceOutcome {
        let start = Instant::now();
        info!("Generating declarations for resource: {name}");

        match self.fetch_and_write(name, spec).await {
            Ok((path, count)) => {
                let duration_ms = start.elapsed().as_millis() as u64;
                info!(
                    "Wrote {} declaration{} to {}",
                    count,
                    if count == 1 { "" } else { "s" },
                    path.display()
                );
                ResourceOutcome::written(name, path, count, duration_ms)
            }
            Err(e) => {
                let duration_ms = start.elapsed().as_millis() as u64;
                error!("Resource {name} failed: {e}");
                ResourceOutcome::failed(name, e.to_string(), duration_ms)
            }
        }
    }

    /// Fetch a sample, infer declarations and write the output file
    async fn fetch_and_write(&self, name: &str, spec: &ResourceSpec) -> Result<(PathBuf, usize)> {
        // Path presence is validated at config load; this guards direct calls.
        let path = spec.path().ok_or_else(|| Error::missing_path(name))?;
        let url = self.base_url.join(path);
        debug!("Fetching sample for {name}: GET {url}");

        let response: Value = self.client.get_json(&url).await?;

        let resolve_path = self.config.resolve_for(spec, self.options.data_prop);
        let sample = resolve::project(&response, resolve_path.as_deref())?;

        let mut inferrer = TypeInferrer::new()
            .with_root_name(name)
            .with_dialect(self.options.dialect);
        if self.options.prefix {
            inferrer = inferrer.with_prefix(name);
        }
        let declarations = inferrer.infer(&sample)?;

        let written = output::write_declarations(&self.options.out_dir, name, &declarations)?;
        Ok((written, declarations.len()))
    }
}
