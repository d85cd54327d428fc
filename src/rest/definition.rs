//! Registration of a resource type.
//!
//! A [`ResourceDefinition`] names where a resource type lives on the remote
//! store, what `type` it goes over the wire as, and which attributes it
//! exchanges. It is checked once, at build time: an incomplete registration
//! never reaches a request.
//!
//! # Example
//!
//! ```rust
//! use jsonapi_model::rest::{Presence, ResourceDefinition};
//! use jsonapi_model::{Endpoint, SerializationType};
//!
//! let notes = ResourceDefinition::builder()
//!     .endpoint(Endpoint::new("notes").unwrap())
//!     .serialize_as(SerializationType::new("notes").unwrap())
//!     .attributes(["title", "body", "author_id"])
//!     .validator(Presence::of(["title"]))
//!     .build()
//!     .unwrap();
//!
//! assert!(notes.declares("body"));
//! assert!(!notes.declares("id"));
//! ```

use std::fmt;
use std::sync::Arc;

use crate::config::{Endpoint, SerializationType};
use crate::deserialization::Options;
use crate::error::ConfigError;
use crate::rest::{DocumentSerializer, Serializer, Validator};

const RESERVED_ATTRIBUTE: &str = "id";

/// A registered resource type.
///
/// # Thread Safety
///
/// `ResourceDefinition` is `Clone`, `Send`, and `Sync`; validator and
/// serializer are shared between clones.
#[derive(Clone)]
pub struct ResourceDefinition {
    endpoint: Endpoint,
    type_name: SerializationType,
    attributes: Vec<String>,
    options: Options,
    validator: Option<Arc<dyn Validator>>,
    serializer: Arc<dyn Serializer>,
}

impl ResourceDefinition {
    /// Creates a new builder.
    #[must_use]
    pub fn builder() -> ResourceDefinitionBuilder {
        ResourceDefinitionBuilder::new()
    }

    /// Returns the endpoint path.
    #[must_use]
    pub const fn endpoint(&self) -> &Endpoint {
        &self.endpoint
    }

    /// Returns the wire type name.
    #[must_use]
    pub const fn type_name(&self) -> &SerializationType {
        &self.type_name
    }

    /// Returns the declared attribute names, in declaration order.
    #[must_use]
    pub fn attributes(&self) -> &[String] {
        &self.attributes
    }

    /// Returns `true` if `name` is a declared attribute.
    #[must_use]
    pub fn declares(&self, name: &str) -> bool {
        self.attributes.iter().any(|attribute| attribute == name)
    }

    /// Returns the options applied when deserializing responses.
    #[must_use]
    pub const fn options(&self) -> &Options {
        &self.options
    }

    /// Returns the registered validator, if any.
    #[must_use]
    pub fn validator(&self) -> Option<&dyn Validator> {
        self.validator.as_deref()
    }

    /// Returns the outbound serializer.
    #[must_use]
    pub fn serializer(&self) -> &dyn Serializer {
        self.serializer.as_ref()
    }
}

impl fmt::Debug for ResourceDefinition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ResourceDefinition")
            .field("endpoint", &self.endpoint)
            .field("type_name", &self.type_name)
            .field("attributes", &self.attributes)
            .field("options", &self.options)
            .field("validator", &self.validator.is_some())
            .finish_non_exhaustive()
    }
}

/// Builder for [`ResourceDefinition`].
///
/// Endpoint, serialization type and at least one attribute are required.
#[derive(Default)]
pub struct ResourceDefinitionBuilder {
    endpoint: Option<Endpoint>,
    type_name: Option<SerializationType>,
    attributes: Vec<String>,
    options: Options,
    validator: Option<Arc<dyn Validator>>,
    serializer: Option<Arc<dyn Serializer>>,
}

impl ResourceDefinitionBuilder {
    /// Creates a new builder with no settings.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the endpoint path.
    #[must_use]
    pub fn endpoint(mut self, endpoint: Endpoint) -> Self {
        self.endpoint = Some(endpoint);
        self
    }

    /// Sets the wire type name.
    #[must_use]
    pub fn serialize_as(mut self, type_name: SerializationType) -> Self {
        self.type_name = Some(type_name);
        self
    }

    /// Declares attributes. May be called repeatedly; duplicates are ignored.
    #[must_use]
    pub fn attributes<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        for name in names {
            let name = name.into();
            if !self.attributes.contains(&name) {
                self.attributes.push(name);
            }
        }
        self
    }

    /// Sets the options applied when deserializing responses (for example,
    /// which relationships are polymorphic).
    #[must_use]
    pub fn options(mut self, options: Options) -> Self {
        self.options = options;
        self
    }

    /// Registers a validator.
    #[must_use]
    pub fn validator(mut self, validator: impl Validator + 'static) -> Self {
        self.validator = Some(Arc::new(validator));
        self
    }

    /// Replaces the default [`DocumentSerializer`].
    #[must_use]
    pub fn serializer(mut self, serializer: impl Serializer + 'static) -> Self {
        self.serializer = Some(Arc::new(serializer));
        self
    }

    /// Builds the definition.
    ///
    /// # Errors
    ///
    /// - [`ConfigError::NoEndpointDefined`] if no endpoint was set
    /// - [`ConfigError::NoSerializationTypeDefined`] if no type was set
    /// - [`ConfigError::NoAttributesDefined`] if no attribute was declared
    /// - [`ConfigError::ReservedAttribute`] if `id` was declared
    pub fn build(self) -> Result<ResourceDefinition, ConfigError> {
        let endpoint = self.endpoint.ok_or(ConfigError::NoEndpointDefined)?;
        let type_name = self.type_name.ok_or(ConfigError::NoSerializationTypeDefined)?;

        if self.attributes.is_empty() {
            return Err(ConfigError::NoAttributesDefined);
        }
        if self.attributes.iter().any(|name| name == RESERVED_ATTRIBUTE) {
            return Err(ConfigError::ReservedAttribute {
                name: RESERVED_ATTRIBUTE.to_string(),
            });
        }

        Ok(ResourceDefinition {
            endpoint,
            type_name,
            attributes: self.attributes,
            options: self.options,
            validator: self.validator,
            serializer: self
                .serializer
                .unwrap_or_else(|| Arc::new(DocumentSerializer)),
        })
    }
}

// Verify ResourceDefinition is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<ResourceDefinition>();
};
