//! Raw responses returned by a transport.

/// A response as received from the remote store, before any parsing.
///
/// # Example
///
/// ```rust
/// use jsonapi_model::clients::HttpResponse;
///
/// let response = HttpResponse::new(204, "", Some("No Content".to_string()));
/// assert!(response.is_ok());
/// assert!(!response.has_body());
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HttpResponse {
    /// The HTTP status code.
    pub code: u16,
    /// The raw response body.
    pub body: String,
    /// The reason phrase accompanying the status, if known.
    pub reason_phrase: Option<String>,
}

impl HttpResponse {
    /// Creates a new response.
    #[must_use]
    pub fn new(code: u16, body: impl Into<String>, reason_phrase: Option<String>) -> Self {
        Self {
            code,
            body: body.into(),
            reason_phrase,
        }
    }

    /// Returns `true` for 2xx status codes.
    #[must_use]
    pub const fn is_ok(&self) -> bool {
        self.code / 100 == 2
    }

    /// Returns `true` when the body contains anything but whitespace.
    #[must_use]
    pub fn has_body(&self) -> bool {
        !self.body.trim().is_empty()
    }
}
