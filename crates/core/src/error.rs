use serde::Serialize;
use validator::ValidationErrors;

use crate::types::DbId;

/// A single violated constraint on a named request field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldError {
    pub field: String,
    pub message: String,
}

impl FieldError {
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("Entity not found: {entity} with id {id}")]
    NotFound { entity: &'static str, id: DbId },

    /// A request body violated one or more declared field constraints.
    #[error("Validation failed: {}", join_fields(.0))]
    Validation(Vec<FieldError>),

    /// A patched representation violated one or more field constraints.
    #[error("Patch validation failed: {}", join_fields(.0))]
    PatchValidation(Vec<FieldError>),

    /// A patch operation could not be applied (unknown path, wrong value type).
    #[error("Invalid patch: {0}")]
    InvalidPatch(String),
}

/// Flatten `validator` output into a list of [`FieldError`]s.
///
/// Fields are sorted by name so responses are stable across runs.
pub fn field_errors(errors: &ValidationErrors) -> Vec<FieldError> {
    let mut out: Vec<FieldError> = errors
        .field_errors()
        .into_iter()
        .flat_map(|(field, violations)| {
            let field = field.to_string();
            violations.iter().map(move |violation| {
                let message = violation
                    .message
                    .as_ref()
                    .map(|m| m.to_string())
                    .unwrap_or_else(|| violation.code.to_string());
                FieldError::new(field.clone(), message)
            })
        })
        .collect();
    out.sort_by(|a, b| a.field.cmp(&b.field));
    out
}

impl From<ValidationErrors> for CoreError {
    fn from(errors: ValidationErrors) -> Self {
        CoreError::Validation(field_errors(&errors))
    }
}

fn join_fields(errors: &[FieldError]) -> String {
    errors
        .iter()
        .map(|e| e.field.as_str())
        .collect::<Vec<_>>()
        .join(", ")
}
