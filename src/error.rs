//! Error types for runner configuration.
//!
//! All configuration constructors return `Result<T, ConfigError>` so that
//! a bad endpoint or timeout is rejected before any request is attempted.
//!
//! # Example
//!
//! ```rust
//! use prayer_query::{ConfigError, EndpointUrl};
//!
//! let result = EndpointUrl::new("");
//! assert!(matches!(result, Err(ConfigError::EmptyEndpointUrl)));
//! ```

use thiserror::Error;

/// Errors that can occur while building a [`RunnerConfig`](crate::RunnerConfig).
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// Endpoint URL cannot be empty.
    #[error("Endpoint URL cannot be empty. Please provide the URL of a GraphQL endpoint.")]
    EmptyEndpointUrl,

    /// Endpoint URL is not an absolute HTTP(S) URL.
    #[error("Invalid endpoint URL '{url}'. Please provide a URL with scheme and host (e.g., 'http://localhost:2203/').")]
    InvalidEndpointUrl {
        /// The invalid URL that was provided.
        url: String,
    },

    /// Timeout must be greater than zero.
    #[error("Request timeout must be greater than zero.")]
    InvalidTimeout,
}
