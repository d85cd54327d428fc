//! Flattening of one wire resource object.

use serde_json::{Map, Value};

use crate::deserialization::{Options, Relationship};

/// One element of a document's `data`: `{id, type, attributes, relationships}`.
///
/// # Example
///
/// ```rust
/// use jsonapi_model::deserialization::{Options, Resource};
/// use serde_json::json;
///
/// let element = json!({
///     "id": "1",
///     "type": "notes",
///     "attributes": { "title": "T" },
///     "relationships": { "author": { "data": { "type": "users", "id": "2" } } }
/// });
///
/// let flat = Resource::new(&element).deserialize(&Options::new());
/// assert_eq!(flat["id"], "1");
/// assert_eq!(flat["title"], "T");
/// assert_eq!(flat["author_id"], "2");
/// ```
#[derive(Clone, Copy, Debug)]
pub struct Resource<'a> {
    element: &'a Value,
}

impl<'a> Resource<'a> {
    /// Wraps a wire resource object.
    #[must_use]
    pub const fn new(element: &'a Value) -> Self {
        Self { element }
    }

    /// Merges attributes, id and resolved relationships into one mapping.
    ///
    /// `only`/`except` filtering is applied to both the attributes (including
    /// `id`) and the raw relationships before any relationship is resolved.
    /// A relationship field may overwrite an attribute of the same name.
    #[must_use]
    pub fn deserialize(&self, options: &Options) -> Map<String, Value> {
        let mut parsed = self.object("attributes");
        if let Some(id) = self.element.get("id").filter(|id| !id.is_null()) {
            parsed.insert("id".to_string(), id.clone());
        }

        let mut relationships = self.object("relationships");
        reduce(&mut parsed, options);
        reduce(&mut relationships, options);

        for (name, payload) in &relationships {
            parsed.extend(Relationship::new(name, payload).deserialize(options));
        }

        parsed
    }

    fn object(&self, key: &str) -> Map<String, Value> {
        self.element
            .get(key)
            .and_then(Value::as_object)
            .cloned()
            .unwrap_or_default()
    }
}

fn reduce(fields: &mut Map<String, Value>, options: &Options) {
    if options.has_only() {
        fields.retain(|key, _| options.only().contains(key));
    } else if options.has_except() {
        fields.retain(|key, _| !options.except().contains(key));
    }
}
