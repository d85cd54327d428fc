//! A single resource instance and its lifecycle.
//!
//! A [`Record`] moves through three states:
//!
//! ```text
//!  New ──create──▶ Existing ──destroy──▶ Destroyed (frozen)
//!                   │    ▲
//!                   └────┘ update
//! ```
//!
//! Records returned by `find` and `all` start out `Existing`. The raising
//! operations (`create`, `update`, `save`, `destroy`) return a
//! [`ResourceError`] on any failure; their `try_` counterparts return
//! `false` for the failures [`ResourceError::is_recoverable`] names.
//!
//! After `update`, local values are not refreshed from the response; the
//! record keeps what was sent.

use std::fmt;
use std::hash::{Hash, Hasher};

use serde_json::{Map, Value};
use tracing::debug;

use crate::clients::{HttpClient, Transport};
use crate::rest::identity::{check_id, is_valid_id};
use crate::rest::{Model, ResourceError, ValidationErrors, WireResource};

const ID: &str = "id";

/// Where a record stands relative to the remote store.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum LifecycleState {
    /// Built locally, never confirmed remotely.
    New,
    /// Confirmed to exist remotely.
    Existing,
    /// Deleted remotely; the record is frozen.
    Destroyed,
}

/// One instance of a resource type.
///
/// Equality compares the resource type, the id and every declared attribute;
/// the lifecycle state is ignored. Hashing uses the id alone, so equal
/// records always hash alike.
pub struct Record<T: Transport = HttpClient> {
    model: Model<T>,
    id: Option<String>,
    attributes: Map<String, Value>,
    state: LifecycleState,
}

impl<T: Transport> Record<T> {
    pub(crate) fn new(model: Model<T>) -> Self {
        let attributes = model
            .definition()
            .attributes()
            .iter()
            .map(|name| (name.clone(), Value::Null))
            .collect();

        Self {
            model,
            id: None,
            attributes,
            state: LifecycleState::New,
        }
    }

    pub(crate) fn assign(&mut self, fields: Map<String, Value>) -> Result<(), ResourceError> {
        for (name, value) in fields {
            if name == ID {
                match value {
                    Value::Null => {}
                    Value::String(id) => self.set_id(id)?,
                    other => {
                        return Err(ResourceError::InvalidIdArgument {
                            id: other.to_string(),
                        })
                    }
                }
            } else {
                self.set(&name, value)?;
            }
        }
        Ok(())
    }

    pub(crate) fn mark_existing(&mut self) {
        self.state = LifecycleState::Existing;
    }

    /// Returns the model this record belongs to.
    #[must_use]
    pub const fn model(&self) -> &Model<T> {
        &self.model
    }

    /// Returns the id, once assigned.
    #[must_use]
    pub fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    /// Assigns the id. An id can be assigned once, and only to a new record.
    ///
    /// # Errors
    ///
    /// - [`ResourceError::Frozen`] if the record is persisted or destroyed,
    ///   or already has an id
    /// - [`ResourceError::InvalidIdArgument`] if `id` is not a version-4
    ///   UUID string
    pub fn set_id(&mut self, id: impl Into<String>) -> Result<(), ResourceError> {
        if self.state != LifecycleState::New || self.id.is_some() {
            return Err(self.frozen("can't modify id once assigned"));
        }

        let id = id.into();
        check_id(&id)?;
        self.id = Some(id);
        Ok(())
    }

    /// Returns a declared attribute's value (`null` when unset), or `None`
    /// for an undeclared name.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.attributes.get(name)
    }

    /// Sets a declared attribute.
    ///
    /// # Errors
    ///
    /// - [`ResourceError::Frozen`] if the record was destroyed
    /// - [`ResourceError::UnknownAttribute`] for an undeclared name
    pub fn set(&mut self, name: &str, value: impl Into<Value>) -> Result<(), ResourceError> {
        if self.is_frozen() {
            return Err(self.frozen("can't modify attributes once destroyed"));
        }

        match self.attributes.get_mut(name) {
            Some(slot) => {
                *slot = value.into();
                Ok(())
            }
            None => Err(ResourceError::UnknownAttribute {
                resource: self.type_name().to_string(),
                name: name.to_string(),
            }),
        }
    }

    /// Returns every declared attribute, `null` when unset.
    #[must_use]
    pub const fn attributes(&self) -> &Map<String, Value> {
        &self.attributes
    }

    /// Returns the lifecycle state.
    #[must_use]
    pub const fn state(&self) -> LifecycleState {
        self.state
    }

    /// Returns `true` until the record is confirmed remotely.
    #[must_use]
    pub const fn is_new_record(&self) -> bool {
        matches!(self.state, LifecycleState::New)
    }

    /// Returns `true` while the record exists remotely.
    #[must_use]
    pub const fn is_persisted(&self) -> bool {
        matches!(self.state, LifecycleState::Existing)
    }

    /// Returns `true` once the record was destroyed.
    #[must_use]
    pub const fn is_destroyed(&self) -> bool {
        matches!(self.state, LifecycleState::Destroyed)
    }

    /// Returns `true` when the record rejects all writes.
    #[must_use]
    pub const fn is_frozen(&self) -> bool {
        self.is_destroyed()
    }

    /// Runs the built-in id check (persisted records only) and the
    /// registered validator.
    #[must_use]
    pub fn validate(&self) -> ValidationErrors {
        let mut errors = ValidationErrors::new();

        if self.is_persisted() {
            match self.id() {
                None => errors.add(ID, "can't be blank"),
                Some(id) if !is_valid_id(id) => errors.add(ID, "invalid UUID format"),
                Some(_) => {}
            }
        }

        if let Some(validator) = self.model.definition().validator() {
            validator.validate(&self.attributes, &mut errors);
        }

        errors
    }

    /// Returns `true` when [`validate`](Self::validate) finds nothing.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.validate().is_empty()
    }

    /// Creates a new record remotely, or updates a persisted one.
    ///
    /// # Errors
    ///
    /// See [`create`](Self::create) and [`update`](Self::update).
    pub async fn save(&mut self) -> Result<(), ResourceError> {
        if self.is_persisted() {
            self.update().await
        } else {
            self.create().await
        }
    }

    /// Like [`save`](Self::save), but returns `false` on recoverable
    /// failures.
    ///
    /// # Errors
    ///
    /// Failures outside [`ResourceError::is_recoverable`] still propagate.
    pub async fn try_save(&mut self) -> Result<bool, ResourceError> {
        let result = self.save().await;
        self.collapse("save", result)
    }

    /// Creates the record remotely and adopts the id the store assigns.
    ///
    /// # Errors
    ///
    /// - [`ResourceError::ProhibitedCreation`] if the record is persisted,
    ///   destroyed, or already has an id
    /// - [`ResourceError::ValidationsFailed`] if validation fails; nothing
    ///   is sent
    /// - [`ResourceError::RequestFailed`] for a non-2xx status
    /// - [`ResourceError::HostUnavailable`] if the host refuses the
    ///   connection
    /// - [`ResourceError::NotCreated`] if the response carries no id
    /// - [`ResourceError::InvalidIdArgument`] if the returned id is malformed
    pub async fn create(&mut self) -> Result<(), ResourceError> {
        if !self.is_new_record() || self.id.is_some() {
            return Err(ResourceError::ProhibitedCreation);
        }
        self.check_valid()?;

        let body = self.to_wire()?;
        let endpoint = self.model.definition().endpoint().to_string();
        let response = self.model.transport().post(&endpoint, body).await?;
        let fields = self.model.read(response)?.into_resource()?;

        let id = match fields.get(ID) {
            Some(Value::String(id)) => id.clone(),
            Some(Value::Null) | None => return Err(ResourceError::NotCreated),
            Some(other) => {
                return Err(ResourceError::InvalidIdArgument {
                    id: other.to_string(),
                })
            }
        };
        self.set_id(id)?;
        self.mark_existing();

        debug!(
            "Created {} {}",
            self.type_name(),
            self.id().unwrap_or_default()
        );
        Ok(())
    }

    /// Like [`create`](Self::create), but returns `false` on recoverable
    /// failures.
    ///
    /// # Errors
    ///
    /// Failures outside [`ResourceError::is_recoverable`] still propagate.
    pub async fn try_create(&mut self) -> Result<bool, ResourceError> {
        let result = self.create().await;
        self.collapse("create", result)
    }

    /// Sends the current attribute values of a persisted record.
    ///
    /// # Errors
    ///
    /// - [`ResourceError::NotUpdated`] unless the record is persisted with
    ///   an id
    /// - [`ResourceError::ValidationsFailed`] if validation fails; nothing
    ///   is sent
    /// - [`ResourceError::RequestFailed`] for a non-2xx status
    /// - [`ResourceError::HostUnavailable`] if the host refuses the
    ///   connection
    pub async fn update(&mut self) -> Result<(), ResourceError> {
        let Some(path) = self.member_path() else {
            return Err(ResourceError::NotUpdated);
        };
        self.check_valid()?;

        let body = self.to_wire()?;
        let response = self.model.transport().put(&path, body).await?;
        self.model.read_optional(response)?;

        debug!("Updated {} at {}", self.type_name(), path);
        Ok(())
    }

    /// Like [`update`](Self::update), but returns `false` on recoverable
    /// failures.
    ///
    /// # Errors
    ///
    /// Failures outside [`ResourceError::is_recoverable`] still propagate,
    /// including [`ResourceError::NotUpdated`].
    pub async fn try_update(&mut self) -> Result<bool, ResourceError> {
        let result = self.update().await;
        self.collapse("update", result)
    }

    /// Deletes the record remotely and freezes it.
    ///
    /// # Errors
    ///
    /// - [`ResourceError::NotDestroyed`] unless the record is persisted with
    ///   an id
    /// - [`ResourceError::RequestFailed`] for a non-2xx status
    /// - [`ResourceError::HostUnavailable`] if the host refuses the
    ///   connection
    pub async fn destroy(&mut self) -> Result<(), ResourceError> {
        let Some(path) = self.member_path() else {
            return Err(ResourceError::NotDestroyed);
        };

        let response = self.model.transport().delete(&path).await?;
        self.model.read_optional(response)?;
        self.state = LifecycleState::Destroyed;

        debug!("Destroyed {} at {}", self.type_name(), path);
        Ok(())
    }

    /// Like [`destroy`](Self::destroy), but returns `false` on recoverable
    /// failures.
    ///
    /// # Errors
    ///
    /// Failures outside [`ResourceError::is_recoverable`] still propagate.
    pub async fn try_destroy(&mut self) -> Result<bool, ResourceError> {
        let result = self.destroy().await;
        self.collapse("destroy", result)
    }

    fn type_name(&self) -> &str {
        self.model.definition().type_name().as_ref()
    }

    fn member_path(&self) -> Option<String> {
        match (&self.id, self.state) {
            (Some(id), LifecycleState::Existing) => {
                Some(self.model.definition().endpoint().member(id))
            }
            _ => None,
        }
    }

    fn check_valid(&self) -> Result<(), ResourceError> {
        let errors = self.validate();
        if errors.is_empty() {
            Ok(())
        } else {
            Err(ResourceError::ValidationsFailed { errors })
        }
    }

    fn to_wire(&self) -> Result<String, ResourceError> {
        let resource = WireResource {
            type_name: self.type_name(),
            id: self.id(),
            attributes: &self.attributes,
        };
        Ok(self.model.definition().serializer().to_wire(&resource)?)
    }

    fn frozen(&self, reason: &'static str) -> ResourceError {
        ResourceError::Frozen {
            resource: self.type_name().to_string(),
            reason,
        }
    }

    fn collapse(
        &self,
        operation: &str,
        result: Result<(), ResourceError>,
    ) -> Result<bool, ResourceError> {
        match result {
            Ok(()) => Ok(true),
            Err(error) if error.is_recoverable() => {
                debug!("{} of {} collapsed: {}", operation, self.type_name(), error);
                Ok(false)
            }
            Err(error) => Err(error),
        }
    }
}

impl<T: Transport> Clone for Record<T> {
    fn clone(&self) -> Self {
        Self {
            model: self.model.clone(),
            id: self.id.clone(),
            attributes: self.attributes.clone(),
            state: self.state,
        }
    }
}

impl<T: Transport> fmt::Debug for Record<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Record")
            .field("type", &self.type_name())
            .field("id", &self.id)
            .field("attributes", &self.attributes)
            .field("state", &self.state)
            .finish()
    }
}

impl<T: Transport> PartialEq for Record<T> {
    fn eq(&self, other: &Self) -> bool {
        std::ptr::eq(self, other)
            || (self.model.is_same_type(&other.model)
                && self.id == other.id
                && self
                    .model
                    .definition()
                    .attributes()
                    .iter()
                    .all(|name| self.get(name) == other.get(name)))
    }
}

impl<T: Transport> Eq for Record<T> {}

impl<T: Transport> Hash for Record<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clients::{HttpRequest, HttpResponse, TransportError};
    use crate::config::{Endpoint, SerializationType};
    use crate::rest::{Presence, ResourceDefinition};
    use serde_json::json;
    use std::collections::HashSet;
    use std::sync::Arc;

    const ID_A: &str = "7f1c8d52-5a43-4b8e-9a0f-2f1d3c4b5a69";
    const ID_B: &str = "0b6f4a1e-3c2d-4e5f-8a9b-1c2d3e4f5a6b";

    struct Offline;

    impl Transport for Offline {
        async fn send(&self, _request: HttpRequest) -> Result<HttpResponse, TransportError> {
            Err(TransportError::ConnectionRefused {
                host: "http://offline".to_string(),
            })
        }
    }

    fn notes() -> Model<Offline> {
        Model::new(
            ResourceDefinition::builder()
                .endpoint(Endpoint::new("notes").unwrap())
                .serialize_as(SerializationType::new("notes").unwrap())
                .attributes(["title", "body"])
                .validator(Presence::of(["title"]))
                .build()
                .unwrap(),
            Arc::new(Offline),
        )
    }

    fn existing(id: &str, title: &str) -> Record<Offline> {
        let mut record = notes()
            .build(json!({ "id": id, "title": title }).as_object().unwrap().clone())
            .unwrap();
        record.mark_existing();
        record
    }

    #[test]
    fn test_new_record_state() {
        let record = notes().new_record();

        assert_eq!(record.state(), LifecycleState::New);
        assert!(record.is_new_record());
        assert!(!record.is_persisted());
        assert!(!record.is_destroyed());
        assert!(!record.is_frozen());
        assert_eq!(record.attributes().len(), 2);
    }

    #[test]
    fn test_set_and_get() {
        let mut record = notes().new_record();
        record.set("title", "Groceries").unwrap();

        assert_eq!(record.get("title"), Some(&json!("Groceries")));
        assert_eq!(record.get("unknown"), None);
        assert!(matches!(
            record.set("unknown", 1),
            Err(ResourceError::UnknownAttribute { ref resource, ref name })
                if resource == "notes" && name == "unknown"
        ));
    }

    #[test]
    fn test_id_is_write_once() {
        let mut record = notes().new_record();
        record.set_id(ID_A).unwrap();

        assert_eq!(record.id(), Some(ID_A));
        assert!(matches!(
            record.set_id(ID_B),
            Err(ResourceError::Frozen { .. })
        ));
        assert_eq!(record.id(), Some(ID_A));
    }

    #[test]
    fn test_malformed_id_is_rejected() {
        let mut record = notes().new_record();
        assert!(matches!(
            record.set_id("42"),
            Err(ResourceError::InvalidIdArgument { .. })
        ));
        assert_eq!(record.id(), None);
    }

    #[test]
    fn test_id_cannot_change_once_persisted() {
        let mut record = existing(ID_A, "T");
        assert!(matches!(
            record.set_id(ID_B),
            Err(ResourceError::Frozen { .. })
        ));
    }

    #[test]
    fn test_validation_uses_registered_validator() {
        let mut record = notes().new_record();
        assert!(!record.is_valid());
        assert_eq!(record.validate().get("title"), ["can't be blank"]);

        record.set("title", "T").unwrap();
        assert!(record.is_valid());
    }

    #[test]
    fn test_persisted_record_without_id_is_invalid() {
        let mut record = notes()
            .build(json!({ "title": "T" }).as_object().unwrap().clone())
            .unwrap();
        record.mark_existing();

        assert_eq!(record.validate().get("id"), ["can't be blank"]);
    }

    #[test]
    fn test_equality_ignores_state() {
        let persisted = existing(ID_A, "T");
        let mut fresh = notes()
            .build(json!({ "title": "T" }).as_object().unwrap().clone())
            .unwrap();
        fresh.set_id(ID_A).unwrap();

        assert_eq!(persisted, fresh);
        assert_ne!(persisted, existing(ID_A, "Other"));
        assert_ne!(persisted, existing(ID_B, "T"));
    }

    #[test]
    fn test_hash_by_id() {
        let mut set = HashSet::new();
        set.insert(existing(ID_A, "T"));
        set.insert(existing(ID_A, "T"));
        set.insert(existing(ID_B, "T"));

        assert_eq!(set.len(), 2);
    }

    #[tokio::test]
    async fn test_create_validates_before_sending() {
        let mut record = notes().new_record();
        let result = record.create().await;

        assert!(matches!(result, Err(ResourceError::ValidationsFailed { .. })));
        assert!(record.is_new_record());
    }

    #[tokio::test]
    async fn test_create_prohibited_with_id() {
        let mut record = notes().new_record();
        record.set("title", "T").unwrap();
        record.set_id(ID_A).unwrap();

        assert!(matches!(
            record.create().await,
            Err(ResourceError::ProhibitedCreation)
        ));
        assert!(!record.try_create().await.unwrap());
    }

    #[tokio::test]
    async fn test_update_and_destroy_require_persistence() {
        let mut record = notes().new_record();

        assert!(matches!(record.update().await, Err(ResourceError::NotUpdated)));
        assert!(matches!(
            record.try_update().await,
            Err(ResourceError::NotUpdated)
        ));
        assert!(matches!(
            record.destroy().await,
            Err(ResourceError::NotDestroyed)
        ));
        assert!(!record.try_destroy().await.unwrap());
    }

    #[tokio::test]
    async fn test_unreachable_host_is_not_collapsed() {
        let mut record = existing(ID_A, "T");
        assert!(matches!(
            record.try_save().await,
            Err(ResourceError::HostUnavailable { .. })
        ));
        assert!(record.is_persisted());
    }
}
