//! HTTP client module
//!
//! Provides the HTTP client used to fetch resource samples.
//!
//! # Features
//!
//! - **Automatic Retries**: Configurable retry logic with backoff
//! - **Backoff Strategies**: Constant, linear, and exponential backoff
//! - **Reachability Probe**: Pre-run connectivity check

mod client;

pub use client::{HttpClient, HttpClientConfig};
