//! The transport seam between the resource lifecycle and the network.

use crate::clients::{HttpMethod, HttpRequest, HttpResponse, TransportError};

/// Sends one request and waits for its response.
///
/// Implementors only provide [`send`](Transport::send); the verb helpers are
/// built on top of it. A transport must report a refused connection as
/// [`TransportError::ConnectionRefused`] so the lifecycle can translate it.
/// Timeouts and connection reuse are the transport's own policy.
///
/// [`HttpClient`](crate::clients::HttpClient) is the reqwest-backed
/// implementation; tests substitute an in-memory one.
#[allow(async_fn_in_trait)]
pub trait Transport: Send + Sync {
    /// Sends the request.
    ///
    /// # Errors
    ///
    /// Returns [`TransportError`] if no response could be received.
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, TransportError>;

    /// Sends a GET request.
    ///
    /// # Errors
    ///
    /// See [`send`](Transport::send).
    async fn get(&self, path: &str) -> Result<HttpResponse, TransportError> {
        self.send(HttpRequest::new(HttpMethod::Get, path)).await
    }

    /// Sends a POST request with an encoded body.
    ///
    /// # Errors
    ///
    /// See [`send`](Transport::send).
    async fn post(&self, path: &str, body: String) -> Result<HttpResponse, TransportError> {
        self.send(HttpRequest::new(HttpMethod::Post, path).with_body(body))
            .await
    }

    /// Sends a PUT request with an encoded body.
    ///
    /// # Errors
    ///
    /// See [`send`](Transport::send).
    async fn put(&self, path: &str, body: String) -> Result<HttpResponse, TransportError> {
        self.send(HttpRequest::new(HttpMethod::Put, path).with_body(body))
            .await
    }

    /// Sends a DELETE request.
    ///
    /// # Errors
    ///
    /// See [`send`](Transport::send).
    async fn delete(&self, path: &str) -> Result<HttpResponse, TransportError> {
        self.send(HttpRequest::new(HttpMethod::Delete, path)).await
    }
}
