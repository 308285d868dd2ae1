//! Structured error types for folio
//!
//! Using thiserror for automatic Display implementation and error chaining.

use thiserror::Error;

/// Failure of a single profile API request.
///
/// The view does not branch on the kind (every failure reads as "request
/// failed"); the detail is kept for logging.
#[derive(Error, Debug)]
pub enum ApiError {
    /// Connection refused, DNS failure, timeout, or a broken body stream
    #[error("Request failed: {0}")]
    Network(#[from] reqwest::Error),

    #[error("{url} returned HTTP {status}")]
    Status { status: u16, url: String },

    #[error("Invalid response from {url}: {source}")]
    Decode {
        url: String,
        #[source]
        source: serde_json::Error,
    },
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Invalid API base URL '{url}': {reason}")]
    InvalidBaseUrl { url: String, reason: String },
}
