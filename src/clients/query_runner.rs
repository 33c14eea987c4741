//! Query runner for a GraphQL endpoint.
//!
//! This module provides the [`QueryRunner`] type, which sends one GraphQL
//! request per call as an HTTP POST and hands back the decoded body.

use reqwest::header::{HeaderMap, HeaderValue, ACCEPT};
use serde_json::Value;

use crate::clients::errors::QueryError;
use crate::clients::graphql_request::{GraphqlRequest, Variables};
use crate::config::{EndpointUrl, RunnerConfig};
use crate::queries::ExampleQuery;

/// Crate version from Cargo.toml.
pub const CRATE_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Sends GraphQL requests to a single endpoint.
///
/// Each call is one POST with body `{"query": ..., "variables": ...}`. The
/// body of the reply is decoded as JSON and returned whatever its shape and
/// whatever the HTTP status; a GraphQL `errors` array is not special-cased.
///
/// There is no retry, no caching and no batching. The connection lives for
/// the duration of the request future.
///
/// # Example
///
/// ```rust,ignore
/// use prayer_query::{QueryRunner, RunnerConfig, Variables};
///
/// let runner = QueryRunner::new(&RunnerConfig::default())?;
///
/// let body = runner
///     .run(
///         "query ($city: String!) { date(params: { city: $city }) { date { hijri { readable } } } }",
///         Variables::new().with("city", "Toronto"),
///     )
///     .await?;
///
/// println!("{}", serde_json::to_string_pretty(&body)?);
/// ```
#[derive(Debug)]
pub struct QueryRunner {
    client: reqwest::Client,
    endpoint: EndpointUrl,
}

const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<QueryRunner>();
};

impl QueryRunner {
    /// Creates a runner from the given configuration.
    ///
    /// # Errors
    ///
    /// Returns [`QueryError::Client`] if the HTTP client cannot be built,
    /// for instance when the user agent prefix is not a valid header value.
    pub fn new(config: &RunnerConfig) -> Result<Self, QueryError> {
        let user_agent_prefix = config
            .user_agent_prefix()
            .map_or(String::new(), |prefix| format!("{prefix} | "));
        let rust_version = env!("CARGO_PKG_RUST_VERSION");
        let user_agent =
            format!("{user_agent_prefix}prayer-query v{CRATE_VERSION} | Rust {rust_version}");

        let mut default_headers = HeaderMap::new();
        default_headers.insert(ACCEPT, HeaderValue::from_static("application/json"));

        let mut builder = reqwest::Client::builder()
            .use_rustls_tls()
            .user_agent(user_agent)
            .default_headers(default_headers);
        if let Some(timeout) = config.timeout() {
            builder = builder.timeout(timeout);
        }
        let client = builder.build().map_err(QueryError::Client)?;

        Ok(Self {
            client,
            endpoint: config.endpoint().clone(),
        })
    }

    /// Returns the endpoint this runner posts to.
    #[must_use]
    pub const fn endpoint(&self) -> &EndpointUrl {
        &self.endpoint
    }

    /// Sends `query` with `variables` and returns the decoded response body.
    ///
    /// # Errors
    ///
    /// - [`QueryError::Transport`] if the endpoint cannot be reached, the
    ///   request times out, or the body cannot be read
    /// - [`QueryError::Decode`] if the body is not valid JSON
    pub async fn run(&self, query: &str, variables: Variables) -> Result<Value, QueryError> {
        self.send(&GraphqlRequest::new(query, variables)).await
    }

    /// Sends one of the bundled example queries.
    ///
    /// # Errors
    ///
    /// Same as [`run`](Self::run).
    pub async fn run_example(&self, example: ExampleQuery) -> Result<Value, QueryError> {
        tracing::debug!(example = example.name(), "Running example query");
        self.send(&example.request()).await
    }

    /// Sends a prepared request and returns the decoded response body.
    ///
    /// # Errors
    ///
    /// Same as [`run`](Self::run).
    pub async fn send(&self, request: &GraphqlRequest) -> Result<Value, QueryError> {
        tracing::debug!(
            endpoint = %self.endpoint,
            host = self.endpoint.host_name(),
            variables = request.variables().len(),
            "Sending GraphQL request"
        );

        let response = self
            .client
            .post(self.endpoint.as_ref())
            .json(request)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            tracing::warn!(
                "GraphQL endpoint {} responded with status {}",
                self.endpoint,
                status
            );
        }

        let body = response.bytes().await?;
        let value = serde_json::from_slice(&body)?;

        tracing::debug!(status = status.as_u16(), bytes = body.len(), "Received GraphQL response");
        Ok(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn test_runner_uses_default_endpoint() {
        let runner = QueryRunner::new(&RunnerConfig::default()).unwrap();
        assert_eq!(runner.endpoint().as_ref(), "http://localhost:2203/");
    }

    #[test]
    fn test_runner_uses_configured_endpoint() {
        let config = RunnerConfig::builder()
            .endpoint(EndpointUrl::new("http://127.0.0.1:4000/graphql").unwrap())
            .timeout(Duration::from_secs(5))
            .build()
            .unwrap();

        let runner = QueryRunner::new(&config).unwrap();
        assert_eq!(runner.endpoint().host_name(), "127.0.0.1");
    }

    #[test]
    fn test_invalid_user_agent_prefix_fails_client_construction() {
        let config = RunnerConfig::builder()
            .user_agent_prefix("bad\nprefix")
            .build()
            .unwrap();

        let result = QueryRunner::new(&config);
        assert!(matches!(result, Err(QueryError::Client(_))));
    }

    #[test]
    fn test_runner_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<QueryRunner>();
    }
}
