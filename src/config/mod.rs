//! Configuration types for connecting models to a remote JSONAPI service.
//!
//! # Overview
//!
//! - [`ModelConfig`]: client-wide settings (host, user agent, timeout)
//! - [`ModelConfigBuilder`]: a builder for constructing [`ModelConfig`]
//! - [`HostUrl`], [`Endpoint`], [`SerializationType`]: validated newtypes
//!
//! Per-resource-type registration (endpoint, wire type, declared attributes)
//! lives in [`ResourceDefinition`](crate::rest::ResourceDefinition).
//!
//! # Example
//!
//! ```rust
//! use jsonapi_model::{HostUrl, ModelConfig};
//!
//! let config = ModelConfig::builder()
//!     .host(HostUrl::new("https://api.example.com").unwrap())
//!     .user_agent_prefix("NotesApp/1.0")
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(config.host().as_ref(), "https://api.example.com");
//! ```

mod newtypes;

use std::time::Duration;

pub use newtypes::{Endpoint, HostUrl, SerializationType};

use crate::error::ConfigError;

/// Client-wide configuration.
///
/// # Thread Safety
///
/// `ModelConfig` is `Clone`, `Send`, and `Sync`.
#[derive(Clone, Debug)]
pub struct ModelConfig {
    host: HostUrl,
    user_agent_prefix: Option<String>,
    timeout: Option<Duration>,
}

impl ModelConfig {
    /// Creates a new builder for constructing a `ModelConfig`.
    #[must_use]
    pub fn builder() -> ModelConfigBuilder {
        ModelConfigBuilder::new()
    }

    /// Returns the host URL.
    #[must_use]
    pub const fn host(&self) -> &HostUrl {
        &self.host
    }

    /// Returns the user agent prefix, if configured.
    #[must_use]
    pub fn user_agent_prefix(&self) -> Option<&str> {
        self.user_agent_prefix.as_deref()
    }

    /// Returns the request timeout applied by the transport, if configured.
    #[must_use]
    pub const fn timeout(&self) -> Option<Duration> {
        self.timeout
    }
}

// Verify ModelConfig is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<ModelConfig>();
};

/// Builder for constructing [`ModelConfig`] instances.
///
/// `host` is required. No timeout is applied unless one is set.
#[derive(Debug, Default)]
pub struct ModelConfigBuilder {
    host: Option<HostUrl>,
    user_agent_prefix: Option<String>,
    timeout: Option<Duration>,
}

impl ModelConfigBuilder {
    /// Creates a new builder with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the host URL (required).
    #[must_use]
    pub fn host(mut self, host: HostUrl) -> Self {
        self.host = Some(host);
        self
    }

    /// Sets the user agent prefix for HTTP requests.
    #[must_use]
    pub fn user_agent_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.user_agent_prefix = Some(prefix.into());
        self
    }

    /// Sets the request timeout.
    #[must_use]
    pub const fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Builds the [`ModelConfig`].
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::NoHostDefined`] if no host was set.
    pub fn build(self) -> Result<ModelConfig, ConfigError> {
        let host = self.host.ok_or(ConfigError::NoHostDefined)?;

        Ok(ModelConfig {
            host,
            user_agent_prefix: self.user_agent_prefix,
            timeout: self.timeout,
        })
    }
}
