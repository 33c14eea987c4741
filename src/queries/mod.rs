//! Bundled example queries for the prayer-times API.
//!
//! Each [`ExampleQuery`] pairs a fixed query document with fixed variables,
//! all for Toronto, Canada. The documents live next to this module as
//! `.graphql` files and are embedded at compile time.
//!
//! # Example
//!
//! ```rust
//! use prayer_query::ExampleQuery;
//!
//! let example: ExampleQuery = "getting-started".parse().unwrap();
//! let request = example.request();
//!
//! assert_eq!(request.variables().len(), 2);
//! assert!(request.query().contains("fragment readable on Timing"));
//! ```

use std::fmt;
use std::str::FromStr;

use serde_json::json;
use thiserror::Error;

use crate::clients::{GraphqlRequest, Variables};

const GETTING_STARTED: &str = include_str!("documents/getting_started.graphql");
const DATE: &str = include_str!("documents/date.graphql");
const MONTH: &str = include_str!("documents/month.graphql");
const RANGE: &str = include_str!("documents/range.graphql");
const AUTHORITIES: &str = include_str!("documents/authorities.graphql");
const TIMEZONES: &str = include_str!("documents/timezones.graphql");

/// Error returned when parsing an unknown example name.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("Unknown example '{name}'. Expected one of: getting-started, date, month, range, authorities, timezones.")]
pub struct UnknownExampleError {
    /// The name that was provided.
    pub name: String,
}

/// A bundled example query.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ExampleQuery {
    /// Five daily prayer times and the Hijri date for today.
    GettingStarted,
    /// Five daily prayer times for 2023-03-22, with coordinates.
    Date,
    /// Fajr times for every day of January.
    Month,
    /// Fajr times for the first week of January 2023.
    Range,
    /// The list of calculation authorities.
    Authorities,
    /// The list of supported timezones.
    Timezones,
}

impl ExampleQuery {
    /// All examples, in catalog order.
    pub const ALL: [Self; 6] = [
        Self::GettingStarted,
        Self::Date,
        Self::Month,
        Self::Range,
        Self::Authorities,
        Self::Timezones,
    ];

    /// Returns the kebab-case name used on the command line.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::GettingStarted => "getting-started",
            Self::Date => "date",
            Self::Month => "month",
            Self::Range => "range",
            Self::Authorities => "authorities",
            Self::Timezones => "timezones",
        }
    }

    /// Returns the query document.
    #[must_use]
    pub const fn document(self) -> &'static str {
        match self {
            Self::GettingStarted => GETTING_STARTED,
            Self::Date => DATE,
            Self::Month => MONTH,
            Self::Range => RANGE,
            Self::Authorities => AUTHORITIES,
            Self::Timezones => TIMEZONES,
        }
    }

    /// Returns the variables sent with the query.
    #[must_use]
    pub fn variables(self) -> Variables {
        let toronto = || json!({ "city": "Toronto", "country": "Canada" });

        match self {
            Self::GettingStarted => Variables::new()
                .with("city", "Toronto")
                .with("country", "Canada"),
            Self::Date => Variables::new()
                .with("params", toronto())
                .with("date", json!({ "year": 2023, "month": 3, "day": 22 })),
            Self::Month => Variables::new().with("params", toronto()).with("month", 1),
            Self::Range => Variables::new()
                .with("params", toronto())
                .with("start", json!({ "year": 2023, "month": 1, "day": 1 }))
                .with("end", json!({ "year": 2023, "month": 1, "day": 7 })),
            Self::Authorities | Self::Timezones => Variables::new(),
        }
    }

    /// Builds the request for this example.
    #[must_use]
    pub fn request(self) -> GraphqlRequest {
        GraphqlRequest::new(self.document(), self.variables())
    }
}

impl fmt::Display for ExampleQuery {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ExampleQuery {
    type Err = UnknownExampleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_lowercase();
        Self::ALL
            .into_iter()
            .find(|example| example.name() == normalized)
            .ok_or_else(|| UnknownExampleError {
                name: s.to_string(),
            })
    }
}
