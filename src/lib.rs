// Allow common clippy pedantic lints that aren't critical for this codebase
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_sign_loss)]
#![allow(clippy::cast_lossless)]
#![allow(clippy::too_many_lines)]
#![allow(clippy::ref_option)]
#![allow(clippy::unused_self)]
#![allow(clippy::struct_excessive_bools)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::items_after_statements)]
#![allow(clippy::unnecessary_wraps)]
#![allow(clippy::match_same_arms)]
#![allow(clippy::match_wildcard_for_single_variants)]
#![allow(clippy::needless_pass_by_value)]
#![allow(clippy::unused_async)]

//! # Typeforge
//!
//! Generate TypeScript, Flow and GraphQL type declarations from live JSON
//! endpoints. One sample fetch per configured resource, one declaration
//! file per resource.
//!
//! ## Features
//!
//! - **Live sampling**: a single GET per configured endpoint
//! - **De-duplicated declarations**: objects under the same key collapse
//!   into one named type
//! - **Three dialects**: TypeScript `.d.ts`, Flow `.flow.js`, GraphQL SDL
//! - **Response projection**: dot-notation or JSONPath into the payload
//! - **Per-resource isolation**: one failing resource never stops the rest
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use typeforge::config::load_config;
//! use typeforge::engine::{Engine, RunOptions};
//! use typeforge::Result;
//!
//! #[tokio::main]
//! async fn main() -> Result<()> {
//!     // Load resources from YAML
//!     let config = load_config("typeforge.yaml")?;
//!
//!     // Fetch every resource and write one declaration file each
//!     let options = RunOptions::new().with_out_dir("types");
//!     let engine = Engine::new(config, None, options)?;
//!     let summary = engine.run().await?;
//!
//!     println!("{} files written", summary.written());
//!     Ok(())
//! }
//! ```
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────┐
//! │                          CLI / Engine                           │
//! │   config.yaml → fetch sample → infer types → write declarations │
//! └─────────────────────────────────────────────────────────────────┘
//!                                │
//! ┌──────────┬───────────┬───────┴───────┬───────────┬─────────────┐
//! │  Config  │   HTTP    │    Resolve    │  Typegen  │   Output    │
//! ├──────────┼───────────┼───────────────┼───────────┼─────────────┤
//! │ YAML     │ GET/HEAD  │ Dot notation  │ Registry  │ .d.ts       │
//! │ Validate │ Retry     │ JSONPath      │ Naming    │ .flow.js    │
//! │ BaseUrl  │ Backoff   │ data fallback │ Rendering │ .graphql    │
//! └──────────┴───────────┴───────────────┴───────────┴─────────────┘
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::doc_markdown)]
#![allow(missing_docs)] // TODO: Add docs before 1.0 release

// ============================================================================
// Module declarations
// ============================================================================

/// Error types for the generator
pub mod error;

/// Common types and type aliases
pub mod types;

/// Type inference and declaration rendering
pub mod typegen;

/// Configuration loaded from YAML
pub mod config;

/// Response projection (dot notation and JSONPath)
pub mod resolve;

/// HTTP client with retry and backoff
pub mod http;

/// Declaration file output
pub mod output;

/// Main execution engine
pub mod engine;

/// Command-line interface
pub mod cli;

// ============================================================================
// Re-exports
// ============================================================================

pub use error::{Error, Result};
pub use types::*;

// Re-export commonly used types
pub use typegen::{infer_declarations, Declarations, Dialect, TypeInferrer};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Crate name
pub const NAME: &str = env!("CARGO_PKG_NAME");
