//! Handlers for the `/addresses` resource.

use axum::extract::State;
use axum::http::header::LOCATION;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use movies_core::error::CoreError;
use movies_core::types::DbId;
use movies_db::models::address::{Address, CreateAddress, ReadAddress, UpdateAddress};
use movies_db::repositories::AddressRepo;

use crate::error::{AppError, AppResult};
use crate::extract::{Path, Query, ValidatedJson};
use crate::query::PageParams;
use crate::state::AppState;

async fn load(state: &AppState, id: DbId) -> AppResult<Address> {
    AddressRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Address",
            id,
        }))
}

/// GET /addresses?skip=0&take=10
pub async fn list(
    State(state): State<AppState>,
    Query(params): Query<PageParams>,
) -> AppResult<Json<Vec<ReadAddress>>> {
    let addresses = AddressRepo::list(&state.pool, params.page()).await?;
    Ok(Json(addresses.iter().map(ReadAddress::from).collect()))
}

/// GET /addresses/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<ReadAddress>> {
    let address = load(&state, id).await?;
    Ok(Json(ReadAddress::from(&address)))
}

/// POST /addresses
pub async fn create(
    State(state): State<AppState>,
    ValidatedJson(input): ValidatedJson<CreateAddress>,
) -> AppResult<impl IntoResponse> {
    let address = AddressRepo::insert(&state.pool, &Address::from(input)).await?;

    tracing::info!(address_id = address.id, "Address created");

    Ok((
        StatusCode::CREATED,
        [(LOCATION, format!("/addresses/{}", address.id))],
        Json(ReadAddress::from(&address)),
    ))
}

/// PUT /addresses/{id}
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    ValidatedJson(input): ValidatedJson<UpdateAddress>,
) -> AppResult<StatusCode> {
    let mut address = load(&state, id).await?;
    input.apply_to(&mut address);
    AddressRepo::update(&state.pool, &address).await?;

    tracing::info!(address_id = id, "Address updated");

    Ok(StatusCode::NO_CONTENT)
}

/// DELETE /addresses/{id}
///
/// Refused with 409 while a cinema still occupies the address.
pub async fn delete(State(state): State<AppState>, Path(id): Path<DbId>) -> AppResult<StatusCode> {
    let address = load(&state, id).await?;
    if !AddressRepo::delete(&state.pool, &address).await? {
        return Err(AppError::Core(CoreError::NotFound {
            entity: "Address",
            id,
        }));
    }

    tracing::info!(address_id = id, "Address deleted");

    Ok(StatusCode::NO_CONTENT)
}
