//! Flattening of JSONAPI documents into attribute mappings.
//!
//! A nested, relationship-bearing wire document is turned into one flat
//! mapping per resource, suitable for constructing a [`Record`](crate::rest::Record):
//!
//! - attributes are copied as is and the resource `id` is injected
//! - a to-one relationship `author` becomes `author_id` (and `author_type`
//!   when the relationship is polymorphic)
//! - a to-many relationship `tags` becomes `tag_ids`
//! - `only` / `except` directives filter attributes and relationships
//!
//! # Example
//!
//! ```rust
//! use jsonapi_model::deserialization::{deserialize, Options};
//! use serde_json::json;
//!
//! let document = json!({
//!     "data": [
//!         { "id": "1", "type": "notes", "attributes": { "title": "A" } },
//!         { "id": "2", "type": "notes", "attributes": { "title": "B" } }
//!     ]
//! });
//!
//! let notes = deserialize(&document, &Options::new()).into_many().unwrap();
//! assert_eq!(notes.len(), 2);
//! assert_eq!(notes[1]["title"], "B");
//! ```

mod document;
mod inflector;
mod options;
mod relationship;
mod resource;

pub use document::{deserialize, deserialize_params, Deserialized, Document};
pub use inflector::{classify, singularize};
pub use options::{Options, SUPPORTED_KEYWORDS};
pub use relationship::Relationship;
pub use resource::Resource;
