//! Validated newtype wrappers for configuration values.

use crate::error::ConfigError;
use std::fmt;

/// The endpoint the runner talks to when none is configured.
pub const DEFAULT_ENDPOINT: &str = "http://localhost:2203/";

/// A validated GraphQL endpoint URL.
///
/// Only the shape is checked: the URL must use the `http` or `https` scheme
/// and name a host. Paths, ports and query strings are passed through as-is.
///
/// # Example
///
/// ```rust
/// use prayer_query::EndpointUrl;
///
/// let url = EndpointUrl::new("http://localhost:2203/").unwrap();
/// assert_eq!(url.scheme(), "http");
/// assert_eq!(url.host_name(), "localhost");
///
/// assert!(EndpointUrl::new("localhost:2203").is_err());
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EndpointUrl {
    url: String,
    scheme_end: usize,
    host_start: usize,
    host_end: usize,
}

impl EndpointUrl {
    /// Creates a new validated endpoint URL.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::EmptyEndpointUrl`] if the URL is blank, or
    /// [`ConfigError::InvalidEndpointUrl`] if it lacks an HTTP(S) scheme or a host.
    pub fn new(url: impl Into<String>) -> Result<Self, ConfigError> {
        let url: String = url.into();
        let url = url.trim().to_string();
        if url.is_empty() {
            return Err(ConfigError::EmptyEndpointUrl);
        }

        let scheme_end = match url.find("://") {
            Some(end) => end,
            None => return Err(ConfigError::InvalidEndpointUrl { url }),
        };
        let scheme = url[..scheme_end].to_ascii_lowercase();
        if scheme != "http" && scheme != "https" {
            return Err(ConfigError::InvalidEndpointUrl { url });
        }
        let url = format!("{scheme}{}", &url[scheme_end..]);

        // Authority runs up to the path, query or fragment.
        let authority_start = scheme_end + 3;
        let authority_end = url[authority_start..]
            .find(['/', '?', '#'])
            .map_or(url.len(), |i| authority_start + i);
        let authority = &url[authority_start..authority_end];

        let host_start = authority
            .rfind('@')
            .map_or(authority_start, |i| authority_start + i + 1);
        let host_and_port = &url[host_start..authority_end];

        let host_end = if host_and_port.starts_with('[') {
            match host_and_port.find(']') {
                Some(close) if close > 1 => host_start + close + 1,
                _ => return Err(ConfigError::InvalidEndpointUrl { url }),
            }
        } else {
            host_and_port
                .find(':')
                .map_or(authority_end, |i| host_start + i)
        };
        if host_end == host_start {
            return Err(ConfigError::InvalidEndpointUrl { url });
        }

        Ok(Self {
            url,
            scheme_end,
            host_start,
            host_end,
        })
    }

    /// Returns the URL scheme (`http` or `https`).
    #[must_use]
    pub fn scheme(&self) -> &str {
        &self.url[..self.scheme_end]
    }

    /// Returns the host name portion of the URL.
    ///
    /// Userinfo and port are excluded. An IPv6 literal keeps its brackets.
    #[must_use]
    pub fn host_name(&self) -> &str {
        &self.url[self.host_start..self.host_end]
    }
}

impl Default for EndpointUrl {
    fn default() -> Self {
        Self {
            url: DEFAULT_ENDPOINT.to_string(),
            scheme_end: 4,
            host_start: 7,
            host_end: 16,
        }
    }
}

impl AsRef<str> for EndpointUrl {
    fn as_ref(&self) -> &str {
        &self.url
    }
}

impl fmt::Display for EndpointUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.url)
    }
}

impl std::str::FromStr for EndpointUrl {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}
