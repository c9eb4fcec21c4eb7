//! Handlers for the `/cinemas` resource.
//!
//! Every cinema occupies exactly one existing address; responses nest it.

use axum::extract::State;
use axum::http::header::LOCATION;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use movies_core::error::{CoreError, FieldError};
use movies_core::types::DbId;
use movies_db::models::address::Address;
use movies_db::models::cinema::{Cinema, CreateCinema, ReadCinema, UpdateCinema};
use movies_db::repositories::{AddressRepo, CinemaRepo};

use crate::error::{AppError, AppResult};
use crate::extract::{Path, Query, ValidatedJson};
use crate::query::PageParams;
use crate::state::AppState;

async fn load(state: &AppState, id: DbId) -> AppResult<Cinema> {
    CinemaRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Cinema",
            id,
        }))
}

/// GET /cinemas?skip=0&take=10
pub async fn list(
    State(state): State<AppState>,
    Query(params): Query<PageParams>,
) -> AppResult<Json<Vec<ReadCinema>>> {
    let cinemas = CinemaRepo::list(&state.pool, params.page()).await?;
    Ok(Json(cinemas.iter().map(ReadCinema::from).collect()))
}

/// GET /cinemas/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<ReadCinema>> {
    let cinema = load(&state, id).await?;
    Ok(Json(ReadCinema::from(&cinema)))
}

/// POST /cinemas
///
/// `address_id` must name an existing address (400 otherwise). An address
/// already occupied by another cinema yields 409 from `uq_cinemas_address_id`.
pub async fn create(
    State(state): State<AppState>,
    ValidatedJson(input): ValidatedJson<CreateCinema>,
) -> AppResult<impl IntoResponse> {
    let cinema = Cinema::from(input);
    let address_id = cinema.address_id;
    let address = AddressRepo::find_by_id(&state.pool, address_id)
        .await?
        .ok_or_else(|| {
            CoreError::Validation(vec![FieldError::new(
                "address_id",
                format!("address {address_id} does not exist"),
            )])
        })?;

    let mut cinema = CinemaRepo::insert(&state.pool, &cinema).await?;
    cinema.address = Some(Address {
        cinema_id: Some(cinema.id),
        ..address
    });

    tracing::info!(cinema_id = cinema.id, address_id, "Cinema created");

    Ok((
        StatusCode::CREATED,
        [(LOCATION, format!("/cinemas/{}", cinema.id))],
        Json(ReadCinema::from(&cinema)),
    ))
}

/// PUT /cinemas/{id}
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    ValidatedJson(input): ValidatedJson<UpdateCinema>,
) -> AppResult<StatusCode> {
    let mut cinema = load(&state, id).await?;
    input.apply_to(&mut cinema);
    CinemaRepo::update(&state.pool, &cinema).await?;

    tracing::info!(cinema_id = id, "Cinema updated");

    Ok(StatusCode::NO_CONTENT)
}

/// DELETE /cinemas/{id}
///
/// The cinema's address is kept.
pub async fn delete(State(state): State<AppState>, Path(id): Path<DbId>) -> AppResult<StatusCode> {
    let cinema = load(&state, id).await?;
    if !CinemaRepo::delete(&state.pool, &cinema).await? {
        return Err(AppError::Core(CoreError::NotFound {
            entity: "Cinema",
            id,
        }));
    }

    tracing::info!(cinema_id = id, "Cinema deleted");

    Ok(StatusCode::NO_CONTENT)
}
