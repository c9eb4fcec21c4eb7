//! Address entity model and DTOs.

use movies_core::types::DbId;
use movies_core::validation::validate_not_blank;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

/// A row from the `addresses` table.
///
/// `cinema_id` is not a column; queries derive it from the owning cinema.
#[derive(Debug, Clone, PartialEq, FromRow)]
pub struct Address {
    pub id: DbId,
    pub street: String,
    pub city: String,
    pub state: String,
    pub postal_code: String,
    pub country: String,
    pub cinema_id: Option<DbId>,
}

/// DTO for creating a new address.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateAddress {
    #[serde(default)]
    #[validate(
        custom(function = "validate_not_blank", message = "street is required"),
        length(max = 100, message = "street must be at most 100 characters")
    )]
    pub street: String,
    #[serde(default)]
    #[validate(
        custom(function = "validate_not_blank", message = "city is required"),
        length(max = 50, message = "city must be at most 50 characters")
    )]
    pub city: String,
    #[serde(default)]
    #[validate(
        custom(function = "validate_not_blank", message = "state is required"),
        length(max = 50, message = "state must be at most 50 characters")
    )]
    pub state: String,
    #[serde(default)]
    #[validate(
        custom(function = "validate_not_blank", message = "postal_code is required"),
        length(max = 10, message = "postal_code must be at most 10 characters")
    )]
    pub postal_code: String,
    #[serde(default)]
    #[validate(
        custom(function = "validate_not_blank", message = "country is required"),
        length(max = 50, message = "country must be at most 50 characters")
    )]
    pub country: String,
}

/// DTO for replacing every field of an address.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct UpdateAddress {
    #[serde(default)]
    #[validate(
        custom(function = "validate_not_blank", message = "street is required"),
        length(max = 100, message = "street must be at most 100 characters")
    )]
    pub street: String,
    #[serde(default)]
    #[validate(
        custom(function = "validate_not_blank", message = "city is required"),
        length(max = 50, message = "city must be at most 50 characters")
    )]
    pub city: String,
    #[serde(default)]
    #[validate(
        custom(function = "validate_not_blank", message = "state is required"),
        length(max = 50, message = "state must be at most 50 characters")
    )]
    pub state: String,
    #[serde(default)]
    #[validate(
        custom(function = "validate_not_blank", message = "postal_code is required"),
        length(max = 10, message = "postal_code must be at most 10 characters")
    )]
    pub postal_code: String,
    #[serde(default)]
    #[validate(
        custom(function = "validate_not_blank", message = "country is required"),
        length(max = 50, message = "country must be at most 50 characters")
    )]
    pub country: String,
}

/// Response shape for an address.
#[derive(Debug, Clone, Serialize)]
pub struct ReadAddress {
    pub id: DbId,
    pub street: String,
    pub city: String,
    pub state: String,
    pub postal_code: String,
    pub country: String,
    /// The cinema that owns this address, if any.
    pub cinema_id: Option<DbId>,
}
