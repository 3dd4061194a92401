//! CLI commands and argument parsing

use crate::typegen::Dialect;
use clap::Parser;
use std::path::PathBuf;

/// Generate TypeScript, Flow and GraphQL type declarations from live JSON
/// endpoints
#[derive(Parser, Debug)]
#[command(name = "typeforge")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Base URL; overrides the config-level `url`
    pub url: Option<String>,

    /// Config file (YAML); defaults to `typeforge.yaml`
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Output directory for declaration files
    #[arg(short, long, default_value = ".")]
    pub out_dir: PathBuf,

    /// Declaration dialect
    #[arg(short, long, value_enum, default_value_t = Dialect::TypeScript)]
    pub dialect: Dialect,

    /// Prefix nested declaration names with the resource name
    #[arg(short, long)]
    pub prefix: bool,

    /// Default the projection to the `data` field of responses
    #[arg(long)]
    pub data_prop: bool,
}
