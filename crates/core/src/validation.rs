//! Custom `validator` rules shared by the request DTOs.

use validator::ValidationError;

/// Reject strings that are empty or contain only whitespace.
///
/// Use on required text fields, paired with a `length(max = ..)` rule when
/// the column is bounded:
///
/// ```ignore
/// #[validate(custom(function = "movies_core::validation::validate_not_blank"))]
/// pub title: String,
/// ```
pub fn validate_not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        let mut err = ValidationError::new("blank");
        err.message = Some("must not be blank".into());
        return Err(err);
    }
    Ok(())
}
