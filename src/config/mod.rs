//! Configuration types for the query runner.
//!
//! # Overview
//!
//! - [`RunnerConfig`]: endpoint, timeout and user agent settings
//! - [`RunnerConfigBuilder`]: a builder for constructing [`RunnerConfig`] instances
//! - [`EndpointUrl`]: a validated HTTP(S) endpoint URL
//!
//! # Example
//!
//! ```rust
//! use std::time::Duration;
//! use prayer_query::{EndpointUrl, RunnerConfig};
//!
//! let config = RunnerConfig::builder()
//!     .endpoint(EndpointUrl::new("http://localhost:2203/").unwrap())
//!     .timeout(Duration::from_secs(10))
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(config.timeout(), Some(Duration::from_secs(10)));
//! ```

mod newtypes;

pub use newtypes::{EndpointUrl, DEFAULT_ENDPOINT};

use std::time::Duration;

use crate::error::ConfigError;

/// Configuration for a [`QueryRunner`](crate::QueryRunner).
///
/// `RunnerConfig` is `Clone`, `Send`, and `Sync`.
#[derive(Clone, Debug, Default)]
pub struct RunnerConfig {
    endpoint: EndpointUrl,
    timeout: Option<Duration>,
    user_agent_prefix: Option<String>,
}

impl RunnerConfig {
    /// Creates a new builder for constructing a `RunnerConfig`.
    #[must_use]
    pub fn builder() -> RunnerConfigBuilder {
        RunnerConfigBuilder::new()
    }

    /// Returns the endpoint URL.
    #[must_use]
    pub const fn endpoint(&self) -> &EndpointUrl {
        &self.endpoint
    }

    /// Returns the request timeout, if one is configured.
    ///
    /// `None` leaves the HTTP client's own default in place.
    #[must_use]
    pub const fn timeout(&self) -> Option<Duration> {
        self.timeout
    }

    /// Returns the user agent prefix, if configured.
    #[must_use]
    pub fn user_agent_prefix(&self) -> Option<&str> {
        self.user_agent_prefix.as_deref()
    }
}

const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<RunnerConfig>();
};

/// Builder for constructing [`RunnerConfig`] instances.
///
/// # Defaults
///
/// - `endpoint`: `http://localhost:2203/`
/// - `timeout`: `None`
/// - `user_agent_prefix`: `None`
#[derive(Debug, Default)]
pub struct RunnerConfigBuilder {
    endpoint: Option<EndpointUrl>,
    timeout: Option<Duration>,
    user_agent_prefix: Option<String>,
}

impl RunnerConfigBuilder {
    /// Creates a new builder with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the endpoint URL.
    #[must_use]
    pub fn endpoint(mut self, endpoint: EndpointUrl) -> Self {
        self.endpoint = Some(endpoint);
        self
    }

    /// Sets the total request timeout.
    #[must_use]
    pub const fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Sets the user agent prefix for HTTP requests.
    #[must_use]
    pub fn user_agent_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.user_agent_prefix = Some(prefix.into());
        self
    }

    /// Builds the [`RunnerConfig`].
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidTimeout`] if a zero timeout was set.
    pub fn build(self) -> Result<RunnerConfig, ConfigError> {
        if self.timeout.is_some_and(|t| t.is_zero()) {
            return Err(ConfigError::InvalidTimeout);
        }

        Ok(RunnerConfig {
            endpoint: self.endpoint.unwrap_or_default(),
            timeout: self.timeout,
            user_agent_prefix: self.user_agent_prefix.filter(|p| !p.is_empty()),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_provides_defaults() {
        let config = RunnerConfig::builder().build().unwrap();

        assert_eq!(config.endpoint().as_ref(), DEFAULT_ENDPOINT);
        assert!(config.timeout().is_none());
        assert!(config.user_agent_prefix().is_none());
    }

    #[test]
    fn test_builder_rejects_zero_timeout() {
        let result = RunnerConfig::builder().timeout(Duration::ZERO).build();
        assert_eq!(result.unwrap_err(), ConfigError::InvalidTimeout);
    }

    #[test]
    fn test_builder_with_all_fields() {
        let endpoint = EndpointUrl::new("https://prayers.example.com/graphql").unwrap();
        let config = RunnerConfig::builder()
            .endpoint(endpoint.clone())
            .timeout(Duration::from_millis(1500))
            .user_agent_prefix("Dashboard/2.1")
            .build()
            .unwrap();

        assert_eq!(config.endpoint(), &endpoint);
        assert_eq!(config.timeout(), Some(Duration::from_millis(1500)));
        assert_eq!(config.user_agent_prefix(), Some("Dashboard/2.1"));
    }

    #[test]
    fn test_empty_user_agent_prefix_is_dropped() {
        let config = RunnerConfig::builder()
            .user_agent_prefix("")
            .build()
            .unwrap();
        assert!(config.user_agent_prefix().is_none());
    }

    #[test]
    fn test_default_config_matches_builder_defaults() {
        let config = RunnerConfig::default();
        assert_eq!(config.endpoint(), &EndpointUrl::default());
        assert!(config.timeout().is_none());
    }
}
