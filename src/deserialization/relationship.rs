//! Flattening of a single named relationship into foreign-key fields.

use serde_json::{Map, Value};

use crate::deserialization::inflector::{classify, singularize};
use crate::deserialization::Options;

/// One entry of a resource object's `relationships` mapping.
///
/// The payload is the relationship object itself (`{"data": ...}`). Its
/// `data` may be a single `{type, id}` reference, `null`, or an array of
/// references.
///
/// # Example
///
/// ```rust
/// use jsonapi_model::deserialization::{Options, Relationship};
/// use serde_json::json;
///
/// let payload = json!({ "data": [{ "type": "tags", "id": "1" }, { "type": "tags", "id": "2" }] });
/// let fields = Relationship::new("tags", &payload).deserialize(&Options::new());
///
/// assert_eq!(fields["tag_ids"], json!(["1", "2"]));
/// ```
#[derive(Clone, Copy, Debug)]
pub struct Relationship<'a> {
    name: &'a str,
    payload: &'a Value,
}

impl<'a> Relationship<'a> {
    /// Wraps a relationship name and its wire payload.
    #[must_use]
    pub const fn new(name: &'a str, payload: &'a Value) -> Self {
        Self { name, payload }
    }

    /// Produces the flattened foreign-key fields.
    ///
    /// - array data → `<singular>_ids` (members without an id are dropped)
    /// - single or null data → `<singular>_id`, plus `<singular>_type` when
    ///   the relationship is named in `options.polymorphic()`
    #[must_use]
    pub fn deserialize(&self, options: &Options) -> Map<String, Value> {
        let base = singularize(self.name);
        let mut result = Map::new();

        if let Value::Array(members) = self.data() {
            let ids: Vec<Value> = members
                .iter()
                .filter_map(|member| member.get("id"))
                .filter(|id| !id.is_null())
                .cloned()
                .collect();
            result.insert(format!("{base}_ids"), Value::Array(ids));
            return result;
        }

        let data = self.data();
        let id = data.get("id").cloned().unwrap_or(Value::Null);
        result.insert(format!("{base}_id"), id);

        if self.is_polymorphic(&base, options) {
            let type_name = data
                .get("type")
                .and_then(Value::as_str)
                .map_or(Value::Null, |t| Value::String(classify(t)));
            result.insert(format!("{base}_type"), type_name);
        }

        result
    }

    /// The `data` member. Absent and `null` data carry no id or type.
    fn data(&self) -> &'a Value {
        static EMPTY: Value = Value::Null;
        match self.payload.get("data") {
            Some(data) if !data.is_null() => data,
            _ => &EMPTY,
        }
    }

    fn is_polymorphic(&self, base: &str, options: &Options) -> bool {
        options
            .polymorphic()
            .iter()
            .any(|name| name == self.name || name == base)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_single_reference_produces_id() {
        let payload = json!({ "data": { "type": "users", "id": "2" } });
        let fields = Relationship::new("author", &payload).deserialize(&Options::new());

        assert_eq!(fields.len(), 1);
        assert_eq!(fields["author_id"], json!("2"));
    }

    #[test]
    fn test_plural_name_is_singularized() {
        let payload = json!({ "data": { "type": "users", "id": "2" } });
        let fields = Relationship::new("authors", &payload).deserialize(&Options::new());

        assert!(fields.contains_key("author_id"));
    }

    #[test]
    fn test_array_produces_ids_and_drops_missing() {
        let payload = json!({ "data": [
            { "type": "tags", "id": "1" },
            { "type": "tags" },
            { "type": "tags", "id": null },
            { "type": "tags", "id": "3" }
        ] });
        let fields = Relationship::new("tags", &payload).deserialize(&Options::new());

        assert_eq!(fields["tag_ids"], json!(["1", "3"]));
    }

    #[test]
    fn test_array_is_never_typed() {
        let payload = json!({ "data": [{ "type": "users", "id": "1" }] });
        let options = Options::new().with_polymorphic(["readers"]);
        let fields = Relationship::new("readers", &payload).deserialize(&options);

        assert_eq!(fields.len(), 1);
        assert!(!fields.contains_key("reader_type"));
    }

    #[test]
    fn test_null_data_yields_null_id() {
        let payload = json!({ "data": null });
        let fields = Relationship::new("author", &payload).deserialize(&Options::new());

        assert_eq!(fields["author_id"], Value::Null);
    }

    #[test]
    fn test_missing_data_key_yields_null_id() {
        let payload = json!({ "links": { "related": "/notes/1/author" } });
        let fields = Relationship::new("author", &payload).deserialize(&Options::new());

        assert_eq!(fields["author_id"], Value::Null);
    }

    #[test]
    fn test_polymorphic_adds_classified_type() {
        let payload = json!({ "data": { "type": "blog-posts", "id": "9" } });
        let options = Options::new().with_polymorphic(["commentable"]);
        let fields = Relationship::new("commentable", &payload).deserialize(&options);

        assert_eq!(fields["commentable_id"], json!("9"));
        assert_eq!(fields["commentable_type"], json!("BlogPost"));
    }

    #[test]
    fn test_polymorphic_matches_singular_name() {
        let payload = json!({ "data": { "type": "users", "id": "2" } });
        let options = Options::new().with_polymorphic(["owner"]);
        let fields = Relationship::new("owners", &payload).deserialize(&options);

        assert_eq!(fields["owner_type"], json!("User"));
    }

    #[test]
    fn test_polymorphic_null_reference_has_null_type() {
        let payload = json!({ "data": null });
        let options = Options::new().with_polymorphic(["author"]);
        let fields = Relationship::new("author", &payload).deserialize(&options);

        assert_eq!(fields["author_id"], Value::Null);
        assert_eq!(fields["author_type"], Value::Null);
    }

    #[test]
    fn test_non_polymorphic_reference_has_no_type() {
        let payload = json!({ "data": { "type": "users", "id": "2" } });
        let options = Options::new().with_polymorphic(["editor"]);
        let fields = Relationship::new("author", &payload).deserialize(&options);

        assert!(!fields.contains_key("author_type"));
    }
}
