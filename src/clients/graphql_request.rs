//! The GraphQL request payload.
//!
//! A [`GraphqlRequest`] serializes to exactly two keys, `query` then
//! `variables`. The variables object is always emitted, so a request with
//! no variables goes out as `"variables":{}`.

use serde::Serialize;
use serde_json::{Map, Value};

/// Named parameters substituted into a query by the server.
///
/// Keys keep their insertion order on the wire. Nothing checks that they
/// match the parameters the query declares.
///
/// # Example
///
/// ```rust
/// use prayer_query::Variables;
///
/// let variables = Variables::new()
///     .with("city", "Toronto")
///     .with("country", "Canada");
///
/// assert_eq!(variables.len(), 2);
/// assert_eq!(
///     serde_json::to_string(&variables).unwrap(),
///     r#"{"city":"Toronto","country":"Canada"}"#
/// );
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Variables(Map<String, Value>);

impl Variables {
    /// Creates an empty variables mapping.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a variable, returning the updated mapping.
    #[must_use]
    pub fn with(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.insert(name, value);
        self
    }

    /// Inserts a variable, returning the previous value under that name.
    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<Value>) -> Option<Value> {
        self.0.insert(name.into(), value.into())
    }

    /// Returns the value bound to `name`.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.0.get(name)
    }

    /// Returns the number of variables.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns `true` if no variables are set.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<Map<String, Value>> for Variables {
    fn from(map: Map<String, Value>) -> Self {
        Self(map)
    }
}

impl<K: Into<String>, V: Into<Value>> FromIterator<(K, V)> for Variables {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(iter.into_iter().map(|(k, v)| (k.into(), v.into())).collect())
    }
}

/// A query document paired with its variables.
///
/// # Example
///
/// ```rust
/// use prayer_query::{GraphqlRequest, Variables};
///
/// let request = GraphqlRequest::new("{ timezones }", Variables::new());
/// assert_eq!(
///     request.to_json().to_string(),
///     r#"{"query":"{ timezones }","variables":{}}"#
/// );
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct GraphqlRequest {
    query: String,
    variables: Variables,
}

impl GraphqlRequest {
    /// Creates a request from a query document and its variables.
    #[must_use]
    pub fn new(query: impl Into<String>, variables: Variables) -> Self {
        Self {
            query: query.into(),
            variables,
        }
    }

    /// Returns the query document.
    #[must_use]
    pub fn query(&self) -> &str {
        &self.query
    }

    /// Returns the variables.
    #[must_use]
    pub const fn variables(&self) -> &Variables {
        &self.variables
    }

    /// Returns the request as the JSON object sent on the wire.
    #[must_use]
    pub fn to_json(&self) -> Value {
        serde_json::json!({
            "query": self.query,
            "variables": self.variables,
        })
    }
}
