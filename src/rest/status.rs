//! Mapping of HTTP status codes to snake-cased symbols.

use heck::ToSnakeCase;
use reqwest::StatusCode;

/// Symbol for status codes without a standard reason phrase.
pub const UNRECOGNIZED_STATUS_CODE: &str = "unrecognized_status_code";

/// Symbol of the 404 status.
pub const NOT_FOUND: &str = "not_found";

/// Returns the snake-cased canonical reason phrase of `code`
/// (`404` → `not_found`, `422` → `unprocessable_entity`).
///
/// Returns `None` for codes with no canonical reason phrase.
#[must_use]
pub fn status_symbol(code: u16) -> Option<String> {
    StatusCode::from_u16(code)
        .ok()?
        .canonical_reason()
        .map(ToSnakeCase::to_snake_case)
}
