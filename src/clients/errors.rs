//! Error types for query execution.
//!
//! # Error Handling
//!
//! A query can fail in exactly two ways once it is on the wire:
//!
//! - [`QueryError::Transport`]: the request never produced a readable body
//!   (connection refused, DNS failure, timeout, broken stream)
//! - [`QueryError::Decode`]: a body arrived but it is not valid JSON
//!
//! GraphQL-level failures are not errors here. A body such as
//! `{"errors": [...]}` is valid JSON and is returned to the caller untouched.
//!
//! # Example
//!
//! ```rust,ignore
//! use prayer_query::{QueryError, QueryRunner, RunnerConfig, Variables};
//!
//! let runner = QueryRunner::new(&RunnerConfig::default())?;
//! match runner.run("{ timezones }", Variables::new()).await {
//!     Ok(body) => println!("{body}"),
//!     Err(QueryError::Transport(e)) => eprintln!("endpoint unreachable: {e}"),
//!     Err(QueryError::Decode(e)) => eprintln!("endpoint sent invalid JSON: {e}"),
//!     Err(other) => eprintln!("{other}"),
//! }
//! ```

use thiserror::Error;

use crate::error::ConfigError;

/// Unified error type for running a query.
#[derive(Debug, Error)]
pub enum QueryError {
    /// Network or connection error, including timeouts.
    #[error("Transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// The response body is not valid JSON.
    #[error("Decode error: response body is not valid JSON: {0}")]
    Decode(#[from] serde_json::Error),

    /// Runner configuration was rejected.
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// The underlying HTTP client could not be constructed.
    #[error("Failed to create HTTP client: {0}")]
    Client(#[source] reqwest::Error),
}

impl QueryError {
    /// Returns `true` for connection-level failures.
    #[must_use]
    pub const fn is_transport(&self) -> bool {
        matches!(self, Self::Transport(_))
    }

    /// Returns `true` when the endpoint answered with a body that is not JSON.
    #[must_use]
    pub const fn is_decode(&self) -> bool {
        matches!(self, Self::Decode(_))
    }
}
