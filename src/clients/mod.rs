//! Transport layer for talking to a JSONAPI service.
//!
//! # Overview
//!
//! - [`Transport`]: the seam the resource lifecycle sends requests through
//! - [`HttpClient`]: the reqwest-backed transport
//! - [`HttpRequest`] / [`HttpMethod`]: an outbound request
//! - [`HttpResponse`]: a raw status/body/reason-phrase triple
//! - [`TransportError`]: failures before any response was received
//!
//! No retries are attempted; every call is one-shot.

mod errors;
mod http_client;
mod http_request;
mod http_response;
mod transport;

pub use errors::TransportError;
pub use http_client::{HttpClient, SDK_VERSION};
pub use http_request::{HttpMethod, HttpRequest, JSONAPI_CONTENT_TYPE};
pub use http_response::HttpResponse;
pub use transport::Transport;
