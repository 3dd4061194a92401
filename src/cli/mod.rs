//! CLI module
//!
//! Command-line interface for the declaration generator.
//!
//! # Usage
//!
//! ```text
//! typeforge [URL] [-c config.yaml] [-o types/] [-d typescript|flow|graphql]
//!           [--prefix] [--data-prop]
//! ```

mod commands;
mod runner;

pub use commands::Cli;
pub use runner::Runner;
