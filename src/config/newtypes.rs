//! Validated newtypes for configuration values.

use std::fmt;

use crate::error::ConfigError;

/// A validated host URL for the remote JSONAPI service.
///
/// Only `http` and `https` URLs with a non-empty host name are accepted.
/// A trailing slash is dropped so paths can be joined onto the URL directly.
///
/// # Example
///
/// ```rust
/// use jsonapi_model::HostUrl;
///
/// let url = HostUrl::new("https://api.example.com/").unwrap();
/// assert_eq!(url.scheme(), "https");
/// assert_eq!(url.host_name(), Some("api.example.com"));
/// assert_eq!(url.as_ref(), "https://api.example.com");
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HostUrl {
    url: String,
    scheme_end: usize,
    host_start: usize,
    host_end: usize,
}

impl HostUrl {
    /// Creates a new validated host URL.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidHostUrl`] if the URL is invalid.
    pub fn new(url: impl Into<String>) -> Result<Self, ConfigError> {
        let url = url.into();
        let url = url.trim().trim_end_matches('/').to_string();
        let invalid = || ConfigError::InvalidHostUrl { url: url.clone() };

        let scheme_end = url.find("://").ok_or_else(invalid)?;

        let scheme = &url[..scheme_end];
        if !scheme.eq_ignore_ascii_case("http") && !scheme.eq_ignore_ascii_case("https") {
            return Err(invalid());
        }

        let host_start = scheme_end + 3;
        if host_start >= url.len() {
            return Err(invalid());
        }

        // Host ends at port, path, query, or end of string
        let remainder = &url[host_start..];
        let host_end = remainder
            .find([':', '/', '?', '#'])
            .map_or(url.len(), |i| host_start + i);

        let host = &url[host_start..host_end];
        if host.is_empty() || host.chars().any(char::is_whitespace) {
            return Err(invalid());
        }

        Ok(Self {
            url,
            scheme_end,
            host_start,
            host_end,
        })
    }

    /// Returns the URL scheme (e.g., "https").
    #[must_use]
    pub fn scheme(&self) -> &str {
        &self.url[..self.scheme_end]
    }

    /// Returns the host name portion of the URL.
    #[must_use]
    pub fn host_name(&self) -> Option<&str> {
        let host = &self.url[self.host_start..self.host_end];
        if host.is_empty() {
            None
        } else {
            Some(host)
        }
    }
}

impl AsRef<str> for HostUrl {
    fn as_ref(&self) -> &str {
        &self.url
    }
}

impl fmt::Display for HostUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.url)
    }
}

/// The request path under which a resource type lives (e.g., `notes`).
///
/// Leading and trailing slashes are stripped; the path is always joined to
/// the host with a single `/`.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Endpoint(String);

impl Endpoint {
    /// Creates a new validated endpoint.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidEndpoint`] if the path is empty or
    /// contains whitespace.
    pub fn new(endpoint: impl Into<String>) -> Result<Self, ConfigError> {
        let endpoint = endpoint.into();
        let normalized = endpoint.trim().trim_matches('/');
        if normalized.is_empty() || normalized.chars().any(char::is_whitespace) {
            return Err(ConfigError::InvalidEndpoint { endpoint });
        }
        Ok(Self(normalized.to_string()))
    }

    /// Returns the path to a single member of the collection.
    #[must_use]
    pub fn member(&self, id: &str) -> String {
        format!("{}/{id}", self.0)
    }
}

impl AsRef<str> for Endpoint {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// The wire `type` name a resource type serializes as (e.g., `notes`).
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct SerializationType(String);

impl SerializationType {
    /// Creates a new validated serialization type.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidSerializationType`] if the name is empty
    /// or contains whitespace.
    pub fn new(type_name: impl Into<String>) -> Result<Self, ConfigError> {
        let type_name = type_name.into();
        if type_name.is_empty() || type_name.chars().any(char::is_whitespace) {
            return Err(ConfigError::InvalidSerializationType { type_name });
        }
        Ok(Self(type_name))
    }
}

impl AsRef<str> for SerializationType {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for SerializationType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
