//! Partial-update operations over flat transfer objects.
//!
//! A patch document is an ordered list of [`PatchOperation`]s in JSON Patch
//! shape (`{"op": "replace", "path": "/director", "value": "..."}`). Only
//! single-segment paths are accepted; each names one field of a
//! [`PatchTarget`]. Operations run in order against a plain intermediate
//! record, so the caller decides which fields are reachable.

use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde_json::Value;

use crate::error::CoreError;

/// One instruction of a patch document.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "op", rename_all = "lowercase")]
pub enum PatchOperation {
    Add { path: String, value: Value },
    Replace { path: String, value: Value },
    Remove { path: String },
}

impl PatchOperation {
    pub fn path(&self) -> &str {
        match self {
            PatchOperation::Add { path, .. }
            | PatchOperation::Replace { path, .. }
            | PatchOperation::Remove { path } => path,
        }
    }
}

/// A record whose named fields can be assigned or cleared by a patch.
pub trait PatchTarget {
    /// Assign `value` to `field`. Unknown fields and mistyped values are errors.
    fn set_field(&mut self, field: &str, value: Value) -> Result<(), CoreError>;

    /// Reset `field` to its empty value (`None`, `""`, `0`, epoch).
    fn clear_field(&mut self, field: &str) -> Result<(), CoreError>;
}

/// Apply `operations` to `target` in order.
///
/// Stops at the first operation that cannot be applied. Callers that must
/// not observe a half-applied patch should work on a copy.
pub fn apply_patch<T: PatchTarget>(
    target: &mut T,
    operations: &[PatchOperation],
) -> Result<(), CoreError> {
    for operation in operations {
        let field = field_name(operation.path())?;
        match operation {
            PatchOperation::Add { value, .. } | PatchOperation::Replace { value, .. } => {
                target.set_field(field, value.clone())?
            }
            PatchOperation::Remove { .. } => target.clear_field(field)?,
        }
    }
    Ok(())
}

/// Resolve a single-segment JSON Pointer (`/title` or `title`) to a field name.
pub fn field_name(path: &str) -> Result<&str, CoreError> {
    let name = path.strip_prefix('/').unwrap_or(path);
    if name.is_empty() || name.contains('/') {
        return Err(CoreError::InvalidPatch(format!(
            "path '{path}' must name a single top-level field"
        )));
    }
    Ok(name)
}

/// Decode a patch value into the field's type.
pub fn field_value<T: DeserializeOwned>(field: &str, value: Value) -> Result<T, CoreError> {
    serde_json::from_value(value)
        .map_err(|e| CoreError::InvalidPatch(format!("invalid value for '{field}': {e}")))
}

/// Error for a path that names no patchable field.
pub fn unknown_field(field: &str) -> CoreError {
    CoreError::InvalidPatch(format!("'{field}' is not a patchable field"))
}
