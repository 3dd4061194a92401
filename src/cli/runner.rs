//! CLI runner - executes a generation run

use crate::cli::commands::Cli;
use crate::config::{self, Config, DEFAULT_CONFIG_FILE};
use crate::engine::{Engine, RunOptions, RunSummary};
use crate::error::Result;
use std::path::Path;

/// CLI runner
pub struct Runner {
    cli: Cli,
}

impl Runner {
    /// Create a new runner
    pub fn new(cli: Cli) -> Self {
        Self { cli }
    }

    /// Run generation for every configured resource
    pub async fn run(&self) -> Result<RunSummary> {
        let config = self.load_config()?;

        let options = RunOptions::new()
            .with_out_dir(&self.cli.out_dir)
            .with_dialect(self.cli.dialect)
            .with_prefix(self.cli.prefix)
            .with_data_prop(self.cli.data_prop);

        let engine = Engine::new(config, self.cli.url.as_deref(), options)?;
        engine.run().await
    }

    /// Load the configuration
    ///
    /// An explicit `--config` path must exist. The default path may be
    /// absent; validating the resulting empty config then reports the
    /// missing resources.
    fn load_config(&self) -> Result<Config> {
        match &self.cli.config {
            Some(path) => config::load_config(path),
            None => {
                let default = Path::new(DEFAULT_CONFIG_FILE);
                if default.exists() {
                    config::load_config(default)
                } else {
                    let config = Config::default();
                    config::validate_config(&config)?;
                    Ok(config)
                }
            }
        }
    }
}
