//! Error types for resource lifecycle operations and response parsing.
//!
//! Transport and status-level failures are always translated into this
//! taxonomy:
//!
//! - refused connection → [`ResourceError::HostUnavailable`]
//! - non-2xx status → [`ResourceError::RequestFailed`] (status, symbol, detail)
//! - not-found status during `find` → [`ResourceError::NotFound`]
//! - malformed id → [`ResourceError::InvalidIdArgument`]
//! - local validation failure → [`ResourceError::ValidationsFailed`]
//! - ineligible lifecycle state → [`ResourceError::ProhibitedCreation`],
//!   [`ResourceError::NotUpdated`], [`ResourceError::NotDestroyed`]
//!
//! # Example
//!
//! ```rust,ignore
//! use jsonapi_model::rest::ResourceError;
//!
//! match notes.find("7f1c8d52-5a43-4b8e-9a0f-2f1d3c4b5a69").await {
//!     Ok(note) => println!("Found: {:?}", note.get("title")),
//!     Err(ResourceError::NotFound { id }) => println!("{id} is gone"),
//!     Err(ResourceError::HostUnavailable { host }) => println!("{host} is down"),
//!     Err(e) => println!("Other error: {e}"),
//! }
//! ```

use thiserror::Error;

use crate::clients::{HttpResponse, TransportError};
use crate::error::ConfigError;
use crate::rest::response::ResponseParser;
use crate::rest::status::{status_symbol, NOT_FOUND, UNRECOGNIZED_STATUS_CODE};
use crate::rest::ValidationErrors;

/// Faults raised while turning a raw response body into a document.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// The body was blank.
    #[error("empty response received")]
    EmptyResponse,

    /// The body was not valid JSON or was structurally unusable.
    #[error("response could not be deserialized: {message}")]
    DeserializeFailure {
        /// The underlying parser message.
        message: String,
    },

    /// A collection did not match the count declared in `meta.count`.
    #[error("received data contains an array of {actual} objects, but {{ meta: {{ count: {expected} }} }} was declared")]
    DeserializeCountMismatch {
        /// The declared count.
        expected: u64,
        /// The number of objects received.
        actual: usize,
    },

    /// The document carried neither `data` nor `errors`.
    #[error("response is neither a data document nor an errors document")]
    UnrecognizedResponse,

    /// The document was valid but not of the shape the operation needs.
    #[error("expected a {expected} document")]
    UnexpectedShape {
        /// The shape the operation expected.
        expected: &'static str,
    },
}

/// Error type for resource lifecycle operations.
#[derive(Debug, Error)]
pub enum ResourceError {
    /// The remote host refused the connection.
    #[error("host at {host} refused connection -- verify it is running")]
    HostUnavailable {
        /// The host that refused the connection.
        host: String,
    },

    /// The remote store answered with a non-2xx status.
    #[error("request failed - {symbol} ({status}){}", detail_suffix(.detail))]
    RequestFailed {
        /// The HTTP status code.
        status: u16,
        /// The snake-cased status name (e.g., `not_found`), or
        /// `unrecognized_status_code`.
        symbol: String,
        /// The first error's `detail`, or the reason phrase.
        detail: Option<String>,
    },

    /// `find` was answered with a not-found status.
    #[error("id {id} not found")]
    NotFound {
        /// The id that was requested.
        id: String,
    },

    /// An id was not a well-formed version-4 UUID string.
    #[error("must provide id arguments as a UUID string (\"00000000-0000-4000-8000-000000000000\"), got '{id}'")]
    InvalidIdArgument {
        /// The rejected id.
        id: String,
    },

    /// Local validation failed before a create or update.
    #[error("one or more validations failed{}", validation_suffix(.errors))]
    ValidationsFailed {
        /// Field-level messages.
        errors: ValidationErrors,
    },

    /// Creation attempted on a persisted record or one with an assigned id.
    #[error("create prohibited (e.g., after an id is assigned)")]
    ProhibitedCreation,

    /// Creation succeeded remotely but no id came back.
    #[error("resource was not created")]
    NotCreated,

    /// Update attempted on a record that is not persisted.
    #[error("resource was not updated: only existing records with an id can be updated")]
    NotUpdated,

    /// Destroy attempted on a record that is not persisted.
    #[error("resource was not destroyed: only existing records with an id can be destroyed")]
    NotDestroyed,

    /// An attribute name outside the declared set was used.
    #[error("unknown attribute '{name}' for {resource}")]
    UnknownAttribute {
        /// The resource's wire type.
        resource: String,
        /// The undeclared name.
        name: String,
    },

    /// A write was attempted on a destroyed record, or on an id that is
    /// already assigned.
    #[error("can't modify frozen {resource}: {reason}")]
    Frozen {
        /// The resource's wire type.
        resource: String,
        /// What was being modified.
        reason: &'static str,
    },

    /// A response body could not be parsed.
    #[error(transparent)]
    Parse(#[from] ParseError),

    /// The outbound document could not be encoded.
    #[error("failed to serialize resource: {0}")]
    Serialization(#[from] serde_json::Error),

    /// The resource type or client is misconfigured.
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// A transport failure other than a refused connection.
    #[error("Network error: {0}")]
    Network(#[source] reqwest::Error),
}

impl ResourceError {
    /// Builds a [`ResourceError::RequestFailed`] from a non-2xx response.
    ///
    /// The detail is taken from the first error object of a JSONAPI errors
    /// body, falling back to the reason phrase.
    #[must_use]
    pub fn request_failed(response: &HttpResponse) -> Self {
        let symbol = status_symbol(response.code)
            .unwrap_or_else(|| UNRECOGNIZED_STATUS_CODE.to_string());

        let detail = if response.has_body() {
            ResponseParser::parse_errors_detail(&response.body)
        } else {
            None
        }
        .or_else(|| response.reason_phrase.clone());

        Self::RequestFailed {
            status: response.code,
            symbol,
            detail,
        }
    }

    /// Returns the status symbol of a [`ResourceError::RequestFailed`].
    #[must_use]
    pub fn status_symbol(&self) -> Option<&str> {
        match self {
            Self::RequestFailed { symbol, .. } => Some(symbol),
            _ => None,
        }
    }

    /// Returns `true` for a request that failed with a not-found status.
    #[must_use]
    pub fn is_not_found_status(&self) -> bool {
        self.status_symbol() == Some(NOT_FOUND)
    }

    /// Returns `true` for the failures the non-raising lifecycle variants
    /// report as `false`: validation failure, prohibited creation, remote
    /// request failure, and not-destroyed.
    ///
    /// Everything else (unreachable host, misconfiguration, parse faults)
    /// still propagates.
    #[must_use]
    pub const fn is_recoverable(&self) -> bool {
        matches!(
            self,
            Self::ValidationsFailed { .. }
                | Self::ProhibitedCreation
                | Self::RequestFailed { .. }
                | Self::NotDestroyed
        )
    }
}

impl From<TransportError> for ResourceError {
    fn from(error: TransportError) -> Self {
        match error {
            TransportError::ConnectionRefused { host } => Self::HostUnavailable { host },
            TransportError::Network(e) => Self::Network(e),
        }
    }
}

fn detail_suffix(detail: &Option<String>) -> String {
    detail
        .as_ref()
        .map_or_else(String::new, |detail| format!(": {detail}"))
}

fn validation_suffix(errors: &ValidationErrors) -> String {
    if errors.is_empty() {
        String::new()
    } else {
        format!(": {}", errors.full_messages().join("; "))
    }
}

// Verify ResourceError is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<ResourceError>();
};
