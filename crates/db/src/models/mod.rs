//! Domain model structs and DTOs.
//!
//! Each submodule contains:
//! - A `FromRow` entity struct matching the database row
//! - `Deserialize` + `Validate` create and update DTOs
//! - A `Serialize` read DTO returned by the API

pub mod address;
pub mod cinema;
pub mod movie;
