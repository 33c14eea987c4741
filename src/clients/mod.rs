//! GraphQL-over-HTTP client types.
//!
//! # Overview
//!
//! - [`QueryRunner`]: posts a query to the configured endpoint and decodes the reply
//! - [`GraphqlRequest`]: the `{query, variables}` payload
//! - [`Variables`]: the named parameters sent with a query
//! - [`QueryError`]: transport and decode failures
//!
//! # Example
//!
//! ```rust,ignore
//! use prayer_query::{QueryRunner, RunnerConfig, Variables};
//!
//! let runner = QueryRunner::new(&RunnerConfig::default())?;
//! let body = runner.run("query Timezones { timezones }", Variables::new()).await?;
//!
//! // GraphQL errors arrive as part of the body
//! if let Some(errors) = body.get("errors") {
//!     println!("GraphQL errors: {errors}");
//! }
//! ```

mod errors;
mod graphql_request;
mod query_runner;

pub use errors::QueryError;
pub use graphql_request::{GraphqlRequest, Variables};
pub use query_runner::{QueryRunner, CRATE_VERSION};
