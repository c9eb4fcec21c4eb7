//! Request extractors shared across handler modules.

use axum::extract::rejection::{JsonRejection, PathRejection, QueryRejection};
use axum::extract::{FromRequest, FromRequestParts, Request};
use axum::Json;
use movies_core::error::CoreError;
use serde::de::DeserializeOwned;
use validator::Validate;

use crate::error::AppError;

/// [`axum::extract::Path`] whose rejection is a JSON `400 BAD_REQUEST`.
#[derive(Debug, FromRequestParts)]
#[from_request(via(axum::extract::Path), rejection(AppError))]
pub struct Path<T>(pub T);

/// [`axum::extract::Query`] whose rejection is a JSON `400 BAD_REQUEST`.
#[derive(Debug, FromRequestParts)]
#[from_request(via(axum::extract::Query), rejection(AppError))]
pub struct Query<T>(pub T);

/// JSON body that has been deserialized *and* validated.
///
/// Malformed JSON (bad syntax, wrong types, missing non-defaulted fields)
/// is rejected as `400 BAD_REQUEST`; constraint violations as
/// `400 VALIDATION_ERROR` listing every failing field. Handlers receiving a
/// `ValidatedJson<T>` can persist without further checks.
///
/// ```ignore
/// async fn create(ValidatedJson(input): ValidatedJson<CreateMovie>) -> AppResult<StatusCode> {
///     // input.validate() has already passed
/// }
/// ```
#[derive(Debug, Clone)]
pub struct ValidatedJson<T>(pub T);

impl<T, S> FromRequest<S> for ValidatedJson<T>
where
    T: DeserializeOwned + Validate,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(json_rejection)?;
        value.validate().map_err(CoreError::from)?;
        Ok(Self(value))
    }
}

/// Turn an axum JSON rejection into a `400 BAD_REQUEST`.
pub fn json_rejection(rejection: JsonRejection) -> AppError {
    AppError::BadRequest(rejection.body_text())
}

impl From<PathRejection> for AppError {
    fn from(rejection: PathRejection) -> Self {
        AppError::BadRequest(rejection.body_text())
    }
}

impl From<QueryRejection> for AppError {
    fn from(rejection: QueryRejection) -> Self {
        AppError::BadRequest(rejection.body_text())
    }
}
