//! Filter directives for a deserialization pass.

use serde_json::Value;

/// The option keywords [`Options::from_value`] recognizes.
pub const SUPPORTED_KEYWORDS: [&str; 3] = ["only", "except", "polymorphic"];

/// Directives controlling how a document is flattened.
///
/// - `only`: keep just these attribute and relationship names
/// - `except`: drop these attribute and relationship names (ignored when
///   `only` is set)
/// - `polymorphic`: relationships whose `<name>_type` should be emitted
///
/// Every directive is a list of field names; an empty list means "no
/// filtering" (or "no polymorphism").
///
/// # Example
///
/// ```rust
/// use jsonapi_model::deserialization::Options;
/// use serde_json::json;
///
/// let options = Options::from_value(&json!({
///     "only": "title",
///     "polymorphic": ["author"],
///     "unknown": true,
/// }));
///
/// assert_eq!(options.only(), ["title"]);
/// assert!(options.has_polymorphic());
/// assert!(!options.has_except());
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Options {
    only: Vec<String>,
    except: Vec<String>,
    polymorphic: Vec<String>,
}

impl Options {
    /// Creates options with no directives set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds options from an arbitrary JSON mapping.
    ///
    /// Only the [`SUPPORTED_KEYWORDS`] are read; any other key is ignored, and
    /// anything that is not a mapping yields empty options. Each directive
    /// may be a single scalar or a list of scalars.
    #[must_use]
    pub fn from_value(input: &Value) -> Self {
        let Some(map) = input.as_object() else {
            return Self::default();
        };
        let directive = |key: &str| map.get(key).map(normalize).unwrap_or_default();

        Self {
            only: directive("only"),
            except: directive("except"),
            polymorphic: directive("polymorphic"),
        }
    }

    /// Sets the `only` directive.
    #[must_use]
    pub fn with_only<I, S>(mut self, fields: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.only = collect_names(fields);
        self
    }

    /// Sets the `except` directive.
    #[must_use]
    pub fn with_except<I, S>(mut self, fields: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.except = collect_names(fields);
        self
    }

    /// Sets the `polymorphic` directive.
    #[must_use]
    pub fn with_polymorphic<I, S>(mut self, fields: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.polymorphic = collect_names(fields);
        self
    }

    /// Field names to keep.
    #[must_use]
    pub fn only(&self) -> &[String] {
        &self.only
    }

    /// Field names to drop.
    #[must_use]
    pub fn except(&self) -> &[String] {
        &self.except
    }

    /// Relationship names to emit a type for.
    #[must_use]
    pub fn polymorphic(&self) -> &[String] {
        &self.polymorphic
    }

    /// Returns `true` if `only` is non-empty.
    #[must_use]
    pub fn has_only(&self) -> bool {
        !self.only.is_empty()
    }

    /// Returns `true` if `except` is non-empty.
    #[must_use]
    pub fn has_except(&self) -> bool {
        !self.except.is_empty()
    }

    /// Returns `true` if `polymorphic` is non-empty.
    #[must_use]
    pub fn has_polymorphic(&self) -> bool {
        !self.polymorphic.is_empty()
    }
}

fn collect_names<I, S>(fields: I) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    let mut names: Vec<String> = Vec::new();
    for field in fields {
        let field = field.into();
        if !names.contains(&field) {
            names.push(field);
        }
    }
    names
}

/// Coerces a scalar or list into a list of names. `null` means "unset".
fn normalize(value: &Value) -> Vec<String> {
    match value {
        Value::Null => Vec::new(),
        Value::Array(items) => collect_names(items.iter().filter_map(scalar_name)),
        other => scalar_name(other).into_iter().collect(),
    }
}

fn scalar_name(value: &Value) -> Option<String> {
    match value {
        Value::Null => None,
        Value::String(s) => Some(s.clone()),
        other => Some(other.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_default_options_are_empty() {
        let options = Options::new();
        assert!(!options.has_only());
        assert!(!options.has_except());
        assert!(!options.has_polymorphic());
    }

    #[test]
    fn test_from_value_coerces_scalars_into_lists() {
        let options = Options::from_value(&json!({ "only": "title", "except": 7 }));
        assert_eq!(options.only(), ["title"]);
        assert_eq!(options.except(), ["7"]);
    }

    #[test]
    fn test_from_value_keeps_list_order_and_drops_duplicates() {
        let options = Options::from_value(&json!({ "polymorphic": ["author", "editor", "author"] }));
        assert_eq!(options.polymorphic(), ["author", "editor"]);
    }

    #[test]
    fn test_from_value_ignores_unsupported_keys() {
        let options = Options::from_value(&json!({ "include": ["author"], "fields": "title" }));
        assert_eq!(options, Options::default());
    }

    #[test]
    fn test_from_value_treats_null_as_unset() {
        let options = Options::from_value(&json!({ "only": null, "except": [null, "body"] }));
        assert!(!options.has_only());
        assert_eq!(options.except(), ["body"]);
    }

    #[test]
    fn test_from_value_with_non_mapping_is_empty() {
        assert_eq!(Options::from_value(&json!(["only"])), Options::default());
        assert_eq!(Options::from_value(&Value::Null), Options::default());
    }

    #[test]
    fn test_builder_methods() {
        let options = Options::new()
            .with_only(["title", "body"])
            .with_polymorphic(vec!["author".to_string()]);

        assert_eq!(options.only(), ["title", "body"]);
        assert_eq!(options.polymorphic(), ["author"]);
        assert!(options.has_only());
    }
}
