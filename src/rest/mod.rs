//! Resource lifecycle on top of a JSONAPI store.
//!
//! This module provides:
//!
//! - **[`ResourceDefinition`]**: registration of a resource type (endpoint,
//!   wire type, declared attributes, validator, serializer)
//! - **[`Model`]**: collection-level operations (`find`, `all`, `create`,
//!   `destroy_all`)
//! - **[`Record`]**: one instance with its New → Existing → Destroyed
//!   lifecycle
//! - **[`ResponseParser`]**: strict parsing of response bodies
//! - **[`ResourceError`]**: the error taxonomy every operation reports in
//!
//! # Example
//!
//! ```rust,ignore
//! use jsonapi_model::rest::{Model, ResourceError};
//!
//! let mut note = notes.new_record();
//! note.set("title", "Groceries")?;
//! note.save().await?;                 // POST notes
//!
//! note.set("body", "milk, eggs")?;
//! note.save().await?;                 // PUT notes/<id>
//!
//! note.destroy().await?;              // DELETE notes/<id>
//! assert!(note.is_frozen());
//!
//! if !note.try_save().await? {
//!     println!("destroyed records cannot be saved");
//! }
//! ```

mod definition;
mod errors;
mod identity;
mod model;
mod record;
mod response;
mod serializer;
mod status;
mod validation;

pub use definition::{ResourceDefinition, ResourceDefinitionBuilder};
pub use errors::{ParseError, ResourceError};
pub use identity::is_valid_id;
pub use model::Model;
pub use record::{LifecycleState, Record};
pub use response::{ErrorSummary, ParsedDocument, ResponseParser};
pub use serializer::{DocumentSerializer, Serializer, WireResource};
pub use status::{status_symbol, NOT_FOUND, UNRECOGNIZED_STATUS_CODE};
pub use validation::{Presence, ValidationErrors, Validator};
