//! HTTP client for JSONAPI services.
//!
//! This module provides the [`HttpClient`] type, the reqwest-backed
//! [`Transport`] implementation.

use std::collections::HashMap;
use std::io;

use crate::clients::http_request::JSONAPI_CONTENT_TYPE;
use crate::clients::{HttpMethod, HttpRequest, HttpResponse, Transport, TransportError};
use crate::config::ModelConfig;

/// Library version from Cargo.toml.
pub const SDK_VERSION: &str = env!("CARGO_PKG_VERSION");

/// HTTP client for a single JSONAPI host.
///
/// The client handles:
/// - Base URI construction from the configured host
/// - Default JSONAPI headers and User-Agent
/// - Translation of refused connections into
///   [`TransportError::ConnectionRefused`]
///
/// One client is meant to be built once and shared (behind an `Arc`) by
/// every model that talks to the same host; reqwest pools connections
/// internally.
///
/// # Example
///
/// ```rust,ignore
/// use jsonapi_model::{HostUrl, ModelConfig};
/// use jsonapi_model::clients::{HttpClient, Transport};
///
/// let config = ModelConfig::builder()
///     .host(HostUrl::new("http://localhost:3000").unwrap())
///     .build()?;
/// let client = HttpClient::new(&config)?;
///
/// let response = client.get("notes").await?;
/// ```
#[derive(Debug)]
pub struct HttpClient {
    /// The internal reqwest HTTP client.
    client: reqwest::Client,
    /// Base URI (e.g., `http://localhost:3000`).
    base_uri: String,
    /// Default headers to include in all requests.
    default_headers: HashMap<String, String>,
}

// Verify HttpClient is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<HttpClient>();
};

impl HttpClient {
    /// Creates a new HTTP client from the configuration.
    ///
    /// # Errors
    ///
    /// Returns [`TransportError::Network`] if the underlying reqwest client
    /// cannot be created (e.g., TLS initialization failure).
    pub fn new(config: &ModelConfig) -> Result<Self, TransportError> {
        let base_uri = config.host().as_ref().to_string();

        let user_agent_prefix = config
            .user_agent_prefix()
            .map_or(String::new(), |prefix| format!("{prefix} | "));
        let user_agent = format!("{user_agent_prefix}JSONAPI Model v{SDK_VERSION} | Rust");

        let mut default_headers = HashMap::new();
        default_headers.insert("User-Agent".to_string(), user_agent);
        default_headers.insert(
            "Accept".to_string(),
            "application/vnd.api+json".to_string(),
        );
        default_headers.insert(
            "Content-Type".to_string(),
            JSONAPI_CONTENT_TYPE.to_string(),
        );

        let mut builder = reqwest::Client::builder().use_rustls_tls();
        if let Some(timeout) = config.timeout() {
            builder = builder.timeout(timeout);
        }
        let client = builder.build()?;

        Ok(Self {
            client,
            base_uri,
            default_headers,
        })
    }

    /// Returns the base URI for this client.
    #[must_use]
    pub fn base_uri(&self) -> &str {
        &self.base_uri
    }

    /// Returns the default headers for this client.
    #[must_use]
    pub const fn default_headers(&self) -> &HashMap<String, String> {
        &self.default_headers
    }

    fn url_for(&self, path: &str) -> String {
        format!("{}/{}", self.base_uri, path.trim_start_matches('/'))
    }

    fn translate(&self, error: reqwest::Error) -> TransportError {
        if error.is_connect() && is_connection_refused(&error) {
            tracing::warn!("Host at {} refused connection", self.base_uri);
            return TransportError::ConnectionRefused {
                host: self.base_uri.clone(),
            };
        }
        TransportError::Network(error)
    }
}

impl Transport for HttpClient {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, TransportError> {
        let url = self.url_for(&request.path);
        tracing::debug!("Sending {} request to {}", request.method, url);

        let mut req_builder = match request.method {
            HttpMethod::Get => self.client.get(&url),
            HttpMethod::Post => self.client.post(&url),
            HttpMethod::Put => self.client.put(&url),
            HttpMethod::Delete => self.client.delete(&url),
        };

        for (key, value) in &self.default_headers {
            req_builder = req_builder.header(key, value);
        }

        if let Some(body) = request.body {
            req_builder = req_builder.body(body);
        }

        let res = req_builder.send().await.map_err(|e| self.translate(e))?;

        let status = res.status();
        let reason_phrase = status.canonical_reason().map(ToString::to_string);
        let body = res.text().await?;

        Ok(HttpResponse::new(status.as_u16(), body, reason_phrase))
    }
}

/// Walks the error's source chain looking for a refused socket connection.
fn is_connection_refused(error: &reqwest::Error) -> bool {
    let mut source = std::error::Error::source(error);
    while let Some(err) = source {
        if let Some(io_error) = err.downcast_ref::<io::Error>() {
            if io_error.kind() == io::ErrorKind::ConnectionRefused {
                return true;
            }
        }
        source = err.source();
    }
    false
}
