//! Local validation of records before they are sent.
//!
//! A resource type may register a [`Validator`]; closures with the matching
//! signature implement the trait directly. [`Presence`] covers the common
//! required-field case.
//!
//! # Example
//!
//! ```rust
//! use jsonapi_model::rest::{Validator, ValidationErrors};
//! use serde_json::{json, Map, Value};
//!
//! let title_length = |attributes: &Map<String, Value>, errors: &mut ValidationErrors| {
//!     if attributes.get("title").and_then(Value::as_str).is_some_and(|t| t.len() > 10) {
//!         errors.add("title", "is too long");
//!     }
//! };
//!
//! let attributes = json!({ "title": "far too long a title" });
//! let mut errors = ValidationErrors::new();
//! title_length.validate(attributes.as_object().unwrap(), &mut errors);
//!
//! assert_eq!(errors.full_messages(), vec!["Title is too long"]);
//! ```

use std::collections::BTreeMap;

use serde_json::{Map, Value};

/// Field-level validation messages.
///
/// Messages attached to `base` apply to the record as a whole.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ValidationErrors {
    messages: BTreeMap<String, Vec<String>>,
}

impl ValidationErrors {
    /// Field name for messages about the record as a whole.
    pub const BASE: &'static str = "base";

    /// Creates an empty set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Attaches a message to a field.
    pub fn add(&mut self, field: impl Into<String>, message: impl Into<String>) {
        self.messages
            .entry(field.into())
            .or_default()
            .push(message.into());
    }

    /// Returns `true` when no messages were added.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    /// Returns the total number of messages.
    #[must_use]
    pub fn len(&self) -> usize {
        self.messages.values().map(Vec::len).sum()
    }

    /// Returns the messages attached to `field`.
    #[must_use]
    pub fn get(&self, field: &str) -> &[String] {
        self.messages.get(field).map_or(&[], Vec::as_slice)
    }

    /// Iterates over `(field, messages)` pairs in field order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.messages
            .iter()
            .map(|(field, messages)| (field.as_str(), messages.as_slice()))
    }

    /// Returns every message prefixed with its humanized field name
    /// (`short_description` + `is too long` → `Short description is too long`).
    #[must_use]
    pub fn full_messages(&self) -> Vec<String> {
        self.iter()
            .flat_map(|(field, messages)| {
                messages.iter().map(move |message| {
                    if field == Self::BASE {
                        message.clone()
                    } else {
                        format!("{} {message}", humanize(field))
                    }
                })
            })
            .collect()
    }
}

fn humanize(field: &str) -> String {
    let spaced = field.trim_end_matches("_id").replace('_', " ");
    let mut chars = spaced.chars();
    chars.next().map_or_else(String::new, |first| {
        first.to_uppercase().chain(chars).collect()
    })
}

/// Checks a record's attributes before it is created or updated.
pub trait Validator: Send + Sync {
    /// Adds a message to `errors` for every rule `attributes` breaks.
    fn validate(&self, attributes: &Map<String, Value>, errors: &mut ValidationErrors);
}

impl<F> Validator for F
where
    F: Fn(&Map<String, Value>, &mut ValidationErrors) + Send + Sync,
{
    fn validate(&self, attributes: &Map<String, Value>, errors: &mut ValidationErrors) {
        self(attributes, errors);
    }
}

/// Requires the named attributes to be present and non-blank.
///
/// `null`, blank strings, empty arrays and empty objects count as missing.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Presence {
    fields: Vec<String>,
}

impl Presence {
    /// Requires each of `fields`.
    #[must_use]
    pub fn of<I, S>(fields: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            fields: fields.into_iter().map(Into::into).collect(),
        }
    }
}

impl Validator for Presence {
    fn validate(&self, attributes: &Map<String, Value>, errors: &mut ValidationErrors) {
        for field in &self.fields {
            if attributes.get(field).map_or(true, is_blank) {
                errors.add(field.as_str(), "can't be blank");
            }
        }
    }
}

fn is_blank(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::String(s) => s.trim().is_empty(),
        Value::Array(items) => items.is_empty(),
        Value::Object(fields) => fields.is_empty(),
        Value::Bool(_) | Value::Number(_) => false,
    }
}
