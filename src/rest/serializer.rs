//! Outbound encoding of records.

use serde::Serialize;
use serde_json::{Map, Value};

/// The parts of a record that go over the wire.
#[derive(Clone, Copy, Debug, Serialize)]
pub struct WireResource<'a> {
    /// The serialization type (e.g., `notes`).
    #[serde(rename = "type")]
    pub type_name: &'a str,
    /// The id, once assigned.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<&'a str>,
    /// Every declared attribute, `null` when unset.
    pub attributes: &'a Map<String, Value>,
}

/// Encodes a record as a request body.
pub trait Serializer: Send + Sync {
    /// Produces the request body for `resource`.
    ///
    /// # Errors
    ///
    /// Returns the underlying `serde_json` error if encoding fails.
    fn to_wire(&self, resource: &WireResource<'_>) -> Result<String, serde_json::Error>;
}

/// Encodes `{"data": {"type", "id", "attributes"}}`. The `id` member is
/// omitted until one is assigned.
///
/// # Example
///
/// ```rust
/// use jsonapi_model::rest::{DocumentSerializer, Serializer, WireResource};
/// use serde_json::json;
///
/// let attributes = json!({ "title": "T" });
/// let body = DocumentSerializer
///     .to_wire(&WireResource {
///         type_name: "notes",
///         id: None,
///         attributes: attributes.as_object().unwrap(),
///     })
///     .unwrap();
///
/// assert_eq!(body, r#"{"data":{"type":"notes","attributes":{"title":"T"}}}"#);
/// ```
#[derive(Clone, Copy, Debug, Default)]
pub struct DocumentSerializer;

#[derive(Serialize)]
struct WireDocument<'a> {
    data: &'a WireResource<'a>,
}

impl Serializer for DocumentSerializer {
    fn to_wire(&self, resource: &WireResource<'_>) -> Result<String, serde_json::Error> {
        serde_json::to_string(&WireDocument { data: resource })
    }
}
