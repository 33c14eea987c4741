//! # prayer-query
//!
//! A small client for the prayer-times GraphQL API. It sends one query
//! document with its variables as an HTTP POST and returns the decoded JSON
//! response body.
//!
//! ## Overview
//!
//! - Validated configuration via [`RunnerConfig`] and [`EndpointUrl`]
//! - A single-request client, [`QueryRunner`]
//! - The `{query, variables}` payload, [`GraphqlRequest`] and [`Variables`]
//! - Bundled example queries, [`ExampleQuery`]
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use prayer_query::{QueryRunner, RunnerConfig, ExampleQuery};
//!
//! let runner = QueryRunner::new(&RunnerConfig::default())?;
//! let body = runner.run_example(ExampleQuery::GettingStarted).await?;
//! println!("{}", serde_json::to_string_pretty(&body)?);
//! ```
//!
//! ## What it does not do
//!
//! Queries are not validated, responses are not inspected, and nothing is
//! retried, cached or batched. A GraphQL `errors` array in the response is
//! returned like any other JSON.

pub mod clients;
pub mod config;
pub mod error;
pub mod queries;

pub use clients::{GraphqlRequest, QueryError, QueryRunner, Variables};
pub use config::{EndpointUrl, RunnerConfig, RunnerConfigBuilder, DEFAULT_ENDPOINT};
pub use error::ConfigError;
pub use queries::{ExampleQuery, UnknownExampleError};
