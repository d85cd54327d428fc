//! Configuration error types.
//!
//! This module contains the errors raised while configuring the client and
//! registering resource types. They indicate a programming error in a
//! resource type definition rather than a runtime data condition, so the
//! lifecycle operations never collapse them into a boolean result.
//!
//! # Example
//!
//! ```rust
//! use jsonapi_model::{ConfigError, HostUrl};
//!
//! let result = HostUrl::new("ftp://example.com");
//! assert!(matches!(result, Err(ConfigError::InvalidHostUrl { .. })));
//! ```

use thiserror::Error;

/// Errors that can occur while building configuration or registering a
/// resource type.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// Host URL is not an `http` or `https` URL with a host name.
    #[error("Invalid host URL '{url}'. Expected an http or https URL (e.g., 'https://api.example.com').")]
    InvalidHostUrl {
        /// The invalid URL that was provided.
        url: String,
    },

    /// Endpoint path is empty or contains whitespace.
    #[error("Invalid endpoint '{endpoint}'. Expected a non-empty path such as 'notes' or 'v1/notes'.")]
    InvalidEndpoint {
        /// The invalid endpoint that was provided.
        endpoint: String,
    },

    /// Serialization type name is empty or contains whitespace.
    #[error("Invalid serialization type '{type_name}'.")]
    InvalidSerializationType {
        /// The invalid type name that was provided.
        type_name: String,
    },

    /// The `id` field is managed by the lifecycle and cannot be declared.
    #[error("'{name}' is reserved and cannot be declared as an attribute")]
    ReservedAttribute {
        /// The reserved name.
        name: String,
    },

    /// No host was configured for the client.
    #[error("must define a host URL to connect to")]
    NoHostDefined,

    /// No endpoint path was registered for the resource type.
    #[error("must define an endpoint path for the resource type")]
    NoEndpointDefined,

    /// No wire type name was registered for the resource type.
    #[error("must define a serialization type for the resource type")]
    NoSerializationTypeDefined,

    /// No attributes were declared for the resource type.
    #[error("must declare attributes for the resource type to exchange")]
    NoAttributesDefined,
}
