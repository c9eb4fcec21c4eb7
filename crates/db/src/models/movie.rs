//! Movie entity model and DTOs.

use movies_core::error::CoreError;
use movies_core::patch::{field_value, unknown_field, PatchTarget};
use movies_core::types::{DbId, Timestamp};
use movies_core::validation::validate_not_blank;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use sqlx::FromRow;
use validator::Validate;

/// A row from the `movies` table.
#[derive(Debug, Clone, PartialEq, FromRow)]
pub struct Movie {
    pub id: DbId,
    pub title: String,
    pub genre: String,
    pub director: Option<String>,
    pub release_date: Timestamp,
    /// Running time in minutes.
    pub duration: i32,
    pub description: Option<String>,
}

/// DTO for creating a new movie.
///
/// Missing fields deserialize to empty values (or `None`) so validation
/// reports them alongside every other violation.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateMovie {
    #[serde(default)]
    #[validate(custom(function = "validate_not_blank", message = "title is required"))]
    pub title: String,
    #[serde(default)]
    #[validate(
        custom(function = "validate_not_blank", message = "genre is required"),
        length(max = 50, message = "genre must be at most 50 characters")
    )]
    pub genre: String,
    #[validate(length(max = 50, message = "director must be at most 50 characters"))]
    pub director: Option<String>,
    #[validate(required(message = "release_date is required"))]
    pub release_date: Option<Timestamp>,
    #[serde(default)]
    #[validate(range(min = 70, max = 600, message = "duration must be between 70 and 600 minutes"))]
    pub duration: i32,
    #[validate(length(max = 200, message = "description must be at most 200 characters"))]
    pub description: Option<String>,
}

/// DTO for replacing the mutable fields of a movie.
///
/// Also the intermediate record that PATCH operations run against.
#[derive(Debug, Clone, PartialEq, Deserialize, Validate)]
pub struct UpdateMovie {
    #[serde(default)]
    #[validate(custom(function = "validate_not_blank", message = "title is required"))]
    pub title: String,
    #[serde(default)]
    #[validate(
        custom(function = "validate_not_blank", message = "genre is required"),
        length(max = 50, message = "genre must be at most 50 characters")
    )]
    pub genre: String,
    #[validate(length(max = 50, message = "director must be at most 50 characters"))]
    pub director: Option<String>,
    #[validate(required(message = "release_date is required"))]
    pub release_date: Option<Timestamp>,
    #[serde(default)]
    #[validate(range(min = 70, max = 600, message = "duration must be between 70 and 600 minutes"))]
    pub duration: i32,
    #[validate(length(max = 200, message = "description must be at most 200 characters"))]
    pub description: Option<String>,
}

impl PatchTarget for UpdateMovie {
    fn set_field(&mut self, field: &str, value: Value) -> Result<(), CoreError> {
        match field {
            "title" => self.title = field_value(field, value)?,
            "genre" => self.genre = field_value(field, value)?,
            "director" => self.director = field_value(field, value)?,
            "release_date" => self.release_date = Some(field_value(field, value)?),
            "duration" => self.duration = field_value(field, value)?,
            "description" => self.description = field_value(field, value)?,
            _ => return Err(unknown_field(field)),
        }
        Ok(())
    }

    fn clear_field(&mut self, field: &str) -> Result<(), CoreError> {
        match field {
            "title" => self.title.clear(),
            "genre" => self.genre.clear(),
            "director" => self.director = None,
            "release_date" => self.release_date = None,
            "duration" => self.duration = 0,
            "description" => self.description = None,
            _ => return Err(unknown_field(field)),
        }
        Ok(())
    }
}

/// Response shape for a movie.
///
/// `query_time` is stamped when the DTO is built and is never stored.
#[derive(Debug, Clone, Serialize)]
pub struct ReadMovie {
    pub id: DbId,
    pub title: String,
    pub genre: String,
    pub director: Option<String>,
    pub release_date: Timestamp,
    pub duration: i32,
    pub description: Option<String>,
    pub query_time: Timestamp,
}
