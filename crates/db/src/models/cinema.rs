//! Cinema entity model and DTOs.

use movies_core::types::DbId;
use movies_core::validation::validate_not_blank;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

use crate::models::address::{Address, ReadAddress};

/// A row from the `cinemas` table, plus its resolved address.
///
/// `address` is populated by the repository queries that join `addresses`;
/// it is `None` on a freshly inserted row.
#[derive(Debug, Clone, PartialEq, FromRow)]
pub struct Cinema {
    pub id: DbId,
    pub name: String,
    pub address_id: DbId,
    #[sqlx(skip)]
    pub address: Option<Address>,
}

/// DTO for creating a new cinema at an existing address.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateCinema {
    #[serde(default)]
    #[validate(custom(function = "validate_not_blank", message = "name is required"))]
    pub name: String,
    #[validate(required(message = "address_id is required"))]
    pub address_id: Option<DbId>,
}

/// DTO for updating a cinema. The address link is fixed at creation.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct UpdateCinema {
    #[serde(default)]
    #[validate(custom(function = "validate_not_blank", message = "name is required"))]
    pub name: String,
}

/// Response shape for a cinema, with its address nested.
#[derive(Debug, Clone, Serialize)]
pub struct ReadCinema {
    pub id: DbId,
    pub name: String,
    pub address: Option<ReadAddress>,
}
