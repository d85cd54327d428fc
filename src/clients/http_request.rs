//! Outbound request types.

use std::fmt;

/// HTTP methods used by the resource lifecycle.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HttpMethod {
    /// Read a member or a collection.
    Get,
    /// Create a member.
    Post,
    /// Update a member.
    Put,
    /// Destroy a member.
    Delete,
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Get => write!(f, "get"),
            Self::Post => write!(f, "post"),
            Self::Put => write!(f, "put"),
            Self::Delete => write!(f, "delete"),
        }
    }
}

/// Media type of JSONAPI request and response bodies.
pub const JSONAPI_CONTENT_TYPE: &str = "application/vnd.api+json; charset=utf-8";

/// A request handed to a [`Transport`](crate::clients::Transport).
///
/// `path` is relative to the configured host; `body` is an already encoded
/// JSONAPI document.
///
/// # Example
///
/// ```rust
/// use jsonapi_model::clients::{HttpMethod, HttpRequest};
///
/// let request = HttpRequest::new(HttpMethod::Post, "notes")
///     .with_body(r#"{"data":{"type":"notes","attributes":{}}}"#);
/// assert_eq!(request.method, HttpMethod::Post);
/// assert!(request.body.is_some());
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HttpRequest {
    /// The HTTP method for this request.
    pub method: HttpMethod,
    /// The path relative to the host.
    pub path: String,
    /// The encoded request body, if any.
    pub body: Option<String>,
}

impl HttpRequest {
    /// Creates a request without a body.
    #[must_use]
    pub fn new(method: HttpMethod, path: impl Into<String>) -> Self {
        Self {
            method,
            path: path.into(),
            body: None,
        }
    }

    /// Attaches an encoded body.
    #[must_use]
    pub fn with_body(mut self, body: impl Into<String>) -> Self {
        self.body = Some(body.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_method_display_is_lowercase() {
        assert_eq!(HttpMethod::Get.to_string(), "get");
        assert_eq!(HttpMethod::Delete.to_string(), "delete");
    }

    #[test]
    fn test_new_request_has_no_body() {
        let request = HttpRequest::new(HttpMethod::Get, "notes");
        assert_eq!(request.path, "notes");
        assert!(request.body.is_none());
    }
}
