//! Resource id format checks.

use uuid::{Uuid, Variant};

use crate::rest::ResourceError;

const HYPHENATED_LEN: usize = 36;

/// Returns `true` for a hyphenated, version-4, RFC 4122 UUID string, in
/// either case.
///
/// # Example
///
/// ```rust
/// use jsonapi_model::rest::is_valid_id;
///
/// assert!(is_valid_id("7f1c8d52-5a43-4b8e-9a0f-2f1d3c4b5a69"));
/// assert!(!is_valid_id("7f1c8d52-5a43-1b8e-9a0f-2f1d3c4b5a69")); // version 1
/// assert!(!is_valid_id("42"));
/// ```
#[must_use]
pub fn is_valid_id(id: &str) -> bool {
    id.len() == HYPHENATED_LEN
        && Uuid::try_parse(id)
            .is_ok_and(|uuid| uuid.get_version_num() == 4 && uuid.get_variant() == Variant::RFC4122)
}

pub(crate) fn check_id(id: &str) -> Result<(), ResourceError> {
    if is_valid_id(id) {
        Ok(())
    } else {
        Err(ResourceError::InvalidIdArgument { id: id.to_string() })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generated_v4_ids_are_valid() {
        for _ in 0..16 {
            assert!(is_valid_id(&Uuid::new_v4().to_string()));
        }
    }

    #[test]
    fn test_upper_case_is_valid() {
        assert!(is_valid_id("7F1C8D52-5A43-4B8E-9A0F-2F1D3C4B5A69"));
    }

    #[test]
    fn test_rejects_other_versions_and_variants() {
        assert!(!is_valid_id("7f1c8d52-5a43-1b8e-9a0f-2f1d3c4b5a69"));
        assert!(!is_valid_id("7f1c8d52-5a43-4b8e-ca0f-2f1d3c4b5a69"));
        assert!(!is_valid_id("00000000-0000-0000-0000-000000000000"));
    }

    #[test]
    fn test_rejects_other_formats() {
        assert!(!is_valid_id(""));
        assert!(!is_valid_id("7f1c8d525a434b8e9a0f2f1d3c4b5a69"));
        assert!(!is_valid_id("{7f1c8d52-5a43-4b8e-9a0f-2f1d3c4b5a69}"));
        assert!(!is_valid_id("urn:uuid:7f1c8d52-5a43-4b8e-9a0f-2f1d3c4b5a69"));
        assert!(!is_valid_id("7f1c8d52-5a43-4b8e-9a0f-2f1d3c4b5a6z"));
    }

    #[test]
    fn test_check_id_carries_rejected_value() {
        assert!(check_id("7f1c8d52-5a43-4b8e-9a0f-2f1d3c4b5a69").is_ok());
        assert!(matches!(
            check_id("nope"),
            Err(ResourceError::InvalidIdArgument { ref id }) if id == "nope"
        ));
    }
}
