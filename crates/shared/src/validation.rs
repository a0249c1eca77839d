//! Common validation utilities.

use validator::ValidationError;

/// Validates that a string is not empty or whitespace-only.
///
/// Used for fields where presence alone is not enough; `"   "` must be
/// rejected the same way `""` is.
pub fn validate_not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        let mut err = ValidationError::new("not_blank");
        err.message = Some("Must not be blank".into());
        Err(err)
    } else {
        Ok(())
    }
}
