//! Flattening of a whole JSONAPI document.

use serde::Serialize;
use serde_json::{Map, Value};

use crate::deserialization::{Options, Resource};

/// The flattened result of a document: one mapping, or one per element.
#[derive(Clone, Debug, PartialEq)]
pub enum Deserialized {
    /// The document's `data` was a single resource object.
    Single(Map<String, Value>),
    /// The document's `data` was an array; order matches the input.
    Many(Vec<Map<String, Value>>),
}

impl Deserialized {
    /// Returns `true` for a collection result.
    #[must_use]
    pub const fn is_many(&self) -> bool {
        matches!(self, Self::Many(_))
    }

    /// Returns the single mapping, if this is not a collection.
    #[must_use]
    pub fn into_single(self) -> Option<Map<String, Value>> {
        match self {
            Self::Single(fields) => Some(fields),
            Self::Many(_) => None,
        }
    }

    /// Returns the mappings, if this is a collection.
    #[must_use]
    pub fn into_many(self) -> Option<Vec<Map<String, Value>>> {
        match self {
            Self::Many(items) => Some(items),
            Self::Single(_) => None,
        }
    }
}

/// A raw JSONAPI document.
///
/// Deserialization here is lenient: input that is not a mapping, or a
/// mapping without `data`, flattens to an empty mapping instead of failing.
/// Strict checks belong to [`ResponseParser`](crate::rest::ResponseParser).
#[derive(Clone, Copy, Debug)]
pub struct Document<'a> {
    content: &'a Value,
}

impl<'a> Document<'a> {
    /// Wraps a raw document.
    #[must_use]
    pub const fn new(content: &'a Value) -> Self {
        Self { content }
    }

    /// Flattens the document's `data`.
    #[must_use]
    pub fn deserialize(&self, options: &Options) -> Deserialized {
        if !self.content.is_object() {
            return Deserialized::Single(Map::new());
        }

        match self.content.get("data") {
            Some(Value::Array(elements)) => Deserialized::Many(
                elements
                    .iter()
                    .map(|element| Resource::new(element).deserialize(options))
                    .collect(),
            ),
            Some(element) => Deserialized::Single(Resource::new(element).deserialize(options)),
            None => Deserialized::Single(Map::new()),
        }
    }
}

/// Flattens a JSONAPI document.
///
/// # Example
///
/// ```rust
/// use jsonapi_model::deserialization::{deserialize, Deserialized, Options};
/// use serde_json::json;
///
/// let document = json!({
///     "data": {
///         "id": "1",
///         "type": "note",
///         "attributes": { "title": "T" },
///         "relationships": { "author": { "data": { "type": "user", "id": "2" } } }
///     }
/// });
///
/// let options = Options::new().with_polymorphic(["author"]);
/// let flat = deserialize(&document, &options).into_single().unwrap();
///
/// assert_eq!(
///     serde_json::Value::Object(flat),
///     json!({ "id": "1", "title": "T", "author_id": "2", "author_type": "User" })
/// );
/// ```
#[must_use]
pub fn deserialize(document: &Value, options: &Options) -> Deserialized {
    Document::new(document).deserialize(options)
}

/// Flattens an already-typed parameter bag (anything `Serialize`) as if it
/// were a raw document.
///
/// A bag that cannot be represented as JSON flattens to an empty mapping.
#[must_use]
pub fn deserialize_params<P: Serialize + ?Sized>(params: &P, options: &Options) -> Deserialized {
    serde_json::to_value(params).map_or_else(
        |_| Deserialized::Single(Map::new()),
        |document| deserialize(&document, options),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::collections::HashMap;

    #[test]
    fn test_single_document() {
        let document = json!({ "data": { "id": "1", "attributes": { "title": "T" } } });
        let result = deserialize(&document, &Options::new());

        assert_eq!(
            result,
            Deserialized::Single(json!({ "id": "1", "title": "T" }).as_object().unwrap().clone())
        );
    }

    #[test]
    fn test_collection_preserves_order() {
        let document = json!({ "data": [
            { "id": "a", "attributes": { "n": 1 } },
            { "id": "b", "attributes": { "n": 2 } },
            { "id": "c", "attributes": { "n": 3 } }
        ] });
        let items = deserialize(&document, &Options::new()).into_many().unwrap();

        let ids: Vec<&Value> = items.iter().map(|item| &item["id"]).collect();
        assert_eq!(ids, [&json!("a"), &json!("b"), &json!("c")]);
    }

    #[test]
    fn test_empty_collection() {
        let result = deserialize(&json!({ "data": [] }), &Options::new());
        assert_eq!(result, Deserialized::Many(Vec::new()));
    }

    #[test]
    fn test_non_mapping_input_is_empty_mapping() {
        for input in [json!("text"), json!(42), json!([1, 2]), Value::Null] {
            assert_eq!(
                deserialize(&input, &Options::new()),
                Deserialized::Single(Map::new())
            );
        }
    }

    #[test]
    fn test_missing_data_is_empty_mapping() {
        let result = deserialize(&json!({ "meta": {} }), &Options::new());
        assert_eq!(result, Deserialized::Single(Map::new()));
    }

    #[test]
    fn test_params_bag() {
        let mut attributes = HashMap::new();
        attributes.insert("title", "T");
        let mut data = HashMap::new();
        data.insert("id", json!("1"));
        data.insert("attributes", json!(attributes));
        let mut params = HashMap::new();
        params.insert("data", data);

        let flat = deserialize_params(&params, &Options::new())
            .into_single()
            .unwrap();

        assert_eq!(flat["id"], json!("1"));
        assert_eq!(flat["title"], json!("T"));
    }

    #[test]
    fn test_deserialized_accessors() {
        assert!(Deserialized::Many(Vec::new()).is_many());
        assert!(Deserialized::Single(Map::new()).into_many().is_none());
        assert!(Deserialized::Many(Vec::new()).into_single().is_none());
    }
}
