//! Collection-level operations on a registered resource type.
//!
//! A [`Model`] binds a [`ResourceDefinition`] to a [`Transport`]. It looks
//! up, lists, creates and bulk-destroys remote resources, and builds
//! [`Record`]s that carry their own lifecycle.
//!
//! # Example
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use jsonapi_model::{Endpoint, HostUrl, ModelConfig, SerializationType};
//! use jsonapi_model::clients::HttpClient;
//! use jsonapi_model::rest::{Model, ResourceDefinition};
//!
//! let config = ModelConfig::builder()
//!     .host(HostUrl::new("http://localhost:3000")?)
//!     .build()?;
//! let client = Arc::new(HttpClient::new(&config)?);
//!
//! let notes = Model::new(
//!     ResourceDefinition::builder()
//!         .endpoint(Endpoint::new("notes")?)
//!         .serialize_as(SerializationType::new("notes")?)
//!         .attributes(["title", "body"])
//!         .build()?,
//!     client,
//! );
//!
//! let id = notes.create(json!({ "title": "Groceries" }).as_object().cloned().unwrap()).await?;
//! let note = notes.find(&id).await?;
//! assert_eq!(note.get("title"), Some(&json!("Groceries")));
//! ```

use std::fmt;
use std::sync::Arc;

use serde_json::{Map, Value};
use tracing::{debug, warn};

use crate::clients::{HttpClient, HttpResponse, Transport};
use crate::rest::identity::check_id;
use crate::rest::{ParsedDocument, Record, ResourceDefinition, ResourceError, ResponseParser};

/// A resource type bound to a transport.
///
/// Cloning is cheap: the definition and transport are shared.
pub struct Model<T: Transport = HttpClient> {
    definition: Arc<ResourceDefinition>,
    transport: Arc<T>,
}

impl<T: Transport> Clone for Model<T> {
    fn clone(&self) -> Self {
        Self {
            definition: Arc::clone(&self.definition),
            transport: Arc::clone(&self.transport),
        }
    }
}

impl<T: Transport> fmt::Debug for Model<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Model")
            .field("definition", &self.definition)
            .finish_non_exhaustive()
    }
}

impl<T: Transport> Model<T> {
    /// Binds a definition to a transport.
    #[must_use]
    pub fn new(definition: ResourceDefinition, transport: Arc<T>) -> Self {
        Self {
            definition: Arc::new(definition),
            transport,
        }
    }

    /// Returns the resource definition.
    #[must_use]
    pub fn definition(&self) -> &ResourceDefinition {
        &self.definition
    }

    /// Returns the transport.
    #[must_use]
    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Returns `true` when both models share a definition, or their
    /// definitions agree on type, endpoint and declared attributes.
    pub(crate) fn is_same_type(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.definition, &other.definition)
            || (self.definition.type_name() == other.definition.type_name()
                && self.definition.endpoint() == other.definition.endpoint()
                && self.definition.attributes() == other.definition.attributes())
    }

    /// Builds a new, unsaved record with every declared attribute unset.
    #[must_use]
    pub fn new_record(&self) -> Record<T> {
        Record::new(self.clone())
    }

    /// Builds a new, unsaved record from an attribute mapping.
    ///
    /// An `id` entry is assigned through [`Record::set_id`].
    ///
    /// # Errors
    ///
    /// - [`ResourceError::UnknownAttribute`] for an undeclared name
    /// - [`ResourceError::InvalidIdArgument`] for a malformed `id`
    pub fn build(&self, attributes: Map<String, Value>) -> Result<Record<T>, ResourceError> {
        let mut record = self.new_record();
        record.assign(attributes)?;
        Ok(record)
    }

    /// Fetches one resource by id.
    ///
    /// # Errors
    ///
    /// - [`ResourceError::InvalidIdArgument`] before any request if `id` is
    ///   not a version-4 UUID
    /// - [`ResourceError::NotFound`] if the store answers with a not-found
    ///   status
    /// - [`ResourceError::RequestFailed`] for any other non-2xx status
    /// - [`ResourceError::HostUnavailable`] if the host refuses the
    ///   connection
    /// - [`ResourceError::Parse`] for a body that is not a single resource
    pub async fn find(&self, id: &str) -> Result<Record<T>, ResourceError> {
        check_id(id)?;

        let response = self
            .transport
            .get(&self.definition.endpoint().member(id))
            .await?;

        let document = self.read(response).map_err(|error| {
            if error.is_not_found_status() {
                ResourceError::NotFound { id: id.to_string() }
            } else {
                error
            }
        })?;

        self.instantiate(document.into_resource()?)
    }

    /// Fetches every resource at the endpoint, in response order.
    ///
    /// # Errors
    ///
    /// - [`ResourceError::RequestFailed`] for a non-2xx status
    /// - [`ResourceError::HostUnavailable`] if the host refuses the
    ///   connection
    /// - [`ResourceError::Parse`] for a body that is not a collection, or
    ///   whose size differs from `meta.count`
    pub async fn all(&self) -> Result<Vec<Record<T>>, ResourceError> {
        let response = self
            .transport
            .get(self.definition.endpoint().as_ref())
            .await?;

        self.read(response)?
            .into_collection()?
            .into_iter()
            .map(|fields| self.instantiate(fields))
            .collect()
    }

    /// Builds a record from `attributes` (ignoring any `id`), creates it
    /// remotely and returns the assigned id.
    ///
    /// # Errors
    ///
    /// Everything [`Record::create`] can return, plus
    /// [`ResourceError::UnknownAttribute`] for an undeclared name.
    pub async fn create(&self, mut attributes: Map<String, Value>) -> Result<String, ResourceError> {
        attributes.remove("id");
        let mut record = self.build(attributes)?;
        record.create().await?;
        record
            .id()
            .map(str::to_string)
            .ok_or(ResourceError::NotCreated)
    }

    /// Like [`create`](Self::create), but returns `None` when validation,
    /// the creation precondition, or the remote request fails.
    ///
    /// # Errors
    ///
    /// Failures outside [`ResourceError::is_recoverable`] still propagate.
    pub async fn try_create(
        &self,
        attributes: Map<String, Value>,
    ) -> Result<Option<String>, ResourceError> {
        match self.create(attributes).await {
            Ok(id) => Ok(Some(id)),
            Err(error) if error.is_recoverable() => {
                debug!("Create of {} collapsed: {}", self.definition.type_name(), error);
                Ok(None)
            }
            Err(error) => Err(error),
        }
    }

    /// Fetches every resource and destroys each one in turn, stopping at the
    /// first failure. Returns the destroyed records.
    ///
    /// # Errors
    ///
    /// Everything [`all`](Self::all) and [`Record::destroy`] can return.
    pub async fn destroy_all(&self) -> Result<Vec<Record<T>>, ResourceError> {
        let mut records = self.all().await?;
        for record in &mut records {
            record.destroy().await?;
        }
        Ok(records)
    }

    /// Fetches every resource and attempts to destroy each one. Records that
    /// could not be destroyed are returned still persisted.
    ///
    /// # Errors
    ///
    /// Everything [`all`](Self::all) can return, and failures of
    /// [`Record::try_destroy`].
    pub async fn try_destroy_all(&self) -> Result<Vec<Record<T>>, ResourceError> {
        let mut records = self.all().await?;
        for record in &mut records {
            record.try_destroy().await?;
        }
        Ok(records)
    }

    /// Checks the status of a response and parses its body, which must be
    /// present.
    pub(crate) fn read(&self, response: HttpResponse) -> Result<ParsedDocument, ResourceError> {
        self.check_status(&response)?;
        Ok(ResponseParser::parse(
            &response.body,
            self.definition.options(),
        )?)
    }

    /// Like [`read`](Self::read), but accepts a successful response without
    /// a body.
    pub(crate) fn read_optional(
        &self,
        response: HttpResponse,
    ) -> Result<Option<ParsedDocument>, ResourceError> {
        if response.is_ok() && !response.has_body() {
            return Ok(None);
        }
        self.read(response).map(Some)
    }

    fn check_status(&self, response: &HttpResponse) -> Result<(), ResourceError> {
        if response.is_ok() {
            return Ok(());
        }

        let error = ResourceError::request_failed(response);
        warn!(
            "Request for {} failed with status {}: {}",
            self.definition.type_name(),
            response.code,
            error
        );
        Err(error)
    }

    fn instantiate(&self, fields: Map<String, Value>) -> Result<Record<T>, ResourceError> {
        let mut record = self.build(fields)?;
        record.mark_existing();
        Ok(record)
    }
}

// Verify Model is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<Model<HttpClient>>();
};
