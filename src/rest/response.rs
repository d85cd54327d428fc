//! Strict parsing of JSONAPI response bodies.
//!
//! [`ResponseParser`] dispatches on the top-level shape of a body:
//!
//! - a `data` member → flattened via [`deserialize`](crate::deserialization::deserialize),
//!   with the `meta.count` declaration checked for collections
//! - an `errors` member → an [`ErrorSummary`] of the first error object
//! - anything else → [`ParseError::UnrecognizedResponse`]
//!
//! # Example
//!
//! ```rust
//! use jsonapi_model::deserialization::Options;
//! use jsonapi_model::rest::{ParsedDocument, ResponseParser};
//!
//! let body = r#"{"data":[{"id":"1","attributes":{"title":"T"}}],"meta":{"count":1}}"#;
//! let parsed = ResponseParser::parse(body, &Options::new()).unwrap();
//!
//! assert!(matches!(parsed, ParsedDocument::Collection(ref items) if items.len() == 1));
//! ```

use serde_json::{Map, Value};
use tracing::debug;

use crate::deserialization::{deserialize, Deserialized, Options};
use crate::rest::ParseError;

/// The first error object of an errors document.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ErrorSummary {
    /// The error's `title`.
    pub title: Option<String>,
    /// The error's `source.pointer`.
    pub source: Option<String>,
    /// The error's `detail`.
    pub detail: Option<String>,
}

/// A parsed response body.
#[derive(Clone, Debug, PartialEq)]
pub enum ParsedDocument {
    /// A single flattened resource.
    Resource(Map<String, Value>),
    /// Flattened resources, in document order.
    Collection(Vec<Map<String, Value>>),
    /// An errors document, reduced to its first error.
    Errors(ErrorSummary),
}

impl ParsedDocument {
    /// Returns the single resource mapping.
    ///
    /// # Errors
    ///
    /// Returns [`ParseError::UnexpectedShape`] for collections and errors
    /// documents.
    pub fn into_resource(self) -> Result<Map<String, Value>, ParseError> {
        match self {
            Self::Resource(fields) => Ok(fields),
            _ => Err(ParseError::UnexpectedShape {
                expected: "single resource",
            }),
        }
    }

    /// Returns the collection mappings.
    ///
    /// # Errors
    ///
    /// Returns [`ParseError::UnexpectedShape`] for single resources and
    /// errors documents.
    pub fn into_collection(self) -> Result<Vec<Map<String, Value>>, ParseError> {
        match self {
            Self::Collection(items) => Ok(items),
            _ => Err(ParseError::UnexpectedShape {
                expected: "collection",
            }),
        }
    }
}

/// Turns raw response bodies into [`ParsedDocument`]s.
#[derive(Clone, Copy, Debug, Default)]
pub struct ResponseParser;

impl ResponseParser {
    /// Parses a raw body.
    ///
    /// # Errors
    ///
    /// - [`ParseError::EmptyResponse`] for a blank body
    /// - [`ParseError::DeserializeFailure`] for invalid JSON, or a
    ///   `meta.count` that is not a non-negative integer
    /// - [`ParseError::DeserializeCountMismatch`] when a collection's size
    ///   differs from `meta.count`
    /// - [`ParseError::UnrecognizedResponse`] when neither `data` nor
    ///   `errors` is present
    pub fn parse(raw: &str, options: &Options) -> Result<ParsedDocument, ParseError> {
        if raw.trim().is_empty() {
            return Err(ParseError::EmptyResponse);
        }

        let content: Value =
            serde_json::from_str(raw).map_err(|e| ParseError::DeserializeFailure {
                message: e.to_string(),
            })?;

        if is_present(&content, "data") {
            Self::parse_data(&content, options)
        } else if is_present(&content, "errors") {
            Ok(ParsedDocument::Errors(Self::parse_errors(&content)))
        } else {
            Err(ParseError::UnrecognizedResponse)
        }
    }

    /// Extracts the first error's `detail` from an errors body, if there is
    /// one.
    #[must_use]
    pub fn parse_errors_detail(raw: &str) -> Option<String> {
        match Self::parse(raw, &Options::new()) {
            Ok(ParsedDocument::Errors(summary)) => summary.detail,
            _ => None,
        }
    }

    fn parse_data(content: &Value, options: &Options) -> Result<ParsedDocument, ParseError> {
        match deserialize(content, options) {
            Deserialized::Single(fields) => Ok(ParsedDocument::Resource(fields)),
            Deserialized::Many(items) => {
                check_count(content, items.len())?;
                Ok(ParsedDocument::Collection(items))
            }
        }
    }

    fn parse_errors(content: &Value) -> ErrorSummary {
        let errors = &content["errors"];
        let first = match errors {
            Value::Array(list) => {
                if list.len() > 1 {
                    debug!(
                        "Errors document carried {} errors, keeping the first",
                        list.len()
                    );
                }
                list.first()
            }
            Value::Object(_) => Some(errors),
            _ => None,
        };

        first.map_or_else(ErrorSummary::default, |error| ErrorSummary {
            title: string_at(error, "/title"),
            source: string_at(error, "/source/pointer"),
            detail: string_at(error, "/detail"),
        })
    }
}

fn is_present(content: &Value, key: &str) -> bool {
    content.get(key).is_some_and(|value| !value.is_null())
}

fn check_count(content: &Value, actual: usize) -> Result<(), ParseError> {
    let declared = match content.pointer("/meta/count") {
        None | Some(Value::Null) => return Ok(()),
        Some(declared) => declared,
    };

    let expected = declared
        .as_u64()
        .ok_or_else(|| ParseError::DeserializeFailure {
            message: format!("meta.count must be a non-negative integer, got {declared}"),
        })?;

    if usize::try_from(expected).map_or(true, |expected| expected != actual) {
        return Err(ParseError::DeserializeCountMismatch { expected, actual });
    }

    Ok(())
}

fn string_at(value: &Value, pointer: &str) -> Option<String> {
    value
        .pointer(pointer)
        .and_then(Value::as_str)
        .map(str::to_string)
}
