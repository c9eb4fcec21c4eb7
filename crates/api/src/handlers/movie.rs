//! Handlers for the `/movies` resource.
//!
//! Movies support the full operation set, including JSON-Patch style
//! partial updates applied through [`UpdateMovie`].

use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::http::header::LOCATION;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use movies_core::error::{field_errors, CoreError};
use movies_core::patch::{apply_patch, PatchOperation};
use movies_core::types::DbId;
use movies_db::models::movie::{CreateMovie, Movie, ReadMovie, UpdateMovie};
use movies_db::repositories::MovieRepo;
use validator::Validate;

use crate::error::{AppError, AppResult};
use crate::extract::{json_rejection, Path, Query, ValidatedJson};
use crate::query::PageParams;
use crate::state::AppState;

/// Load a movie or fail with 404.
async fn load(state: &AppState, id: DbId) -> AppResult<Movie> {
    MovieRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Movie",
            id,
        }))
}

/// GET /movies?skip=0&take=10
pub async fn list(
    State(state): State<AppState>,
    Query(params): Query<PageParams>,
) -> AppResult<Json<Vec<ReadMovie>>> {
    let movies = MovieRepo::list(&state.pool, params.page()).await?;
    Ok(Json(movies.iter().map(ReadMovie::from).collect()))
}

/// GET /movies/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<ReadMovie>> {
    let movie = load(&state, id).await?;
    Ok(Json(ReadMovie::from(&movie)))
}

/// POST /movies
///
/// Responds 201 with the stored movie and a `Location` pointing at it.
pub async fn create(
    State(state): State<AppState>,
    ValidatedJson(input): ValidatedJson<CreateMovie>,
) -> AppResult<impl IntoResponse> {
    let movie = MovieRepo::insert(&state.pool, &Movie::from(input)).await?;

    tracing::info!(movie_id = movie.id, title = %movie.title, "Movie created");

    Ok((
        StatusCode::CREATED,
        [(LOCATION, format!("/movies/{}", movie.id))],
        Json(ReadMovie::from(&movie)),
    ))
}

/// PUT /movies/{id}
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    ValidatedJson(input): ValidatedJson<UpdateMovie>,
) -> AppResult<StatusCode> {
    let mut movie = load(&state, id).await?;
    input.apply_to(&mut movie);
    MovieRepo::update(&state.pool, &movie).await?;

    tracing::info!(movie_id = id, "Movie updated");

    Ok(StatusCode::NO_CONTENT)
}

/// PATCH /movies/{id}
///
/// The stored movie is projected to an [`UpdateMovie`], the operations are
/// applied to that copy in order, and the result is re-validated before
/// anything is written. Fields outside `UpdateMovie` (the id) are out of
/// reach of the patch.
pub async fn patch(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    payload: Result<Json<Vec<PatchOperation>>, JsonRejection>,
) -> AppResult<StatusCode> {
    let Json(operations) = payload.map_err(json_rejection)?;
    let mut movie = load(&state, id).await?;

    let mut patched = UpdateMovie::from(&movie);
    apply_patch(&mut patched, &operations)?;
    patched
        .validate()
        .map_err(|e| CoreError::PatchValidation(field_errors(&e)))?;

    patched.apply_to(&mut movie);
    MovieRepo::update(&state.pool, &movie).await?;

    tracing::info!(movie_id = id, operations = operations.len(), "Movie patched");

    Ok(StatusCode::NO_CONTENT)
}

/// DELETE /movies/{id}
pub async fn delete(State(state): State<AppState>, Path(id): Path<DbId>) -> AppResult<StatusCode> {
    let movie = load(&state, id).await?;
    if !MovieRepo::delete(&state.pool, &movie).await? {
        return Err(AppError::Core(CoreError::NotFound {
            entity: "Movie",
            id,
        }));
    }

    tracing::info!(movie_id = id, "Movie deleted");

    Ok(StatusCode::NO_CONTENT)
}
