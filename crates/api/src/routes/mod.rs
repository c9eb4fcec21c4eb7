pub mod address;
pub mod cinema;
pub mod health;
pub mod movie;

use axum::Router;

use crate::state::AppState;

/// Build the resource route tree.
///
/// Route hierarchy:
///
/// ```text
/// /movies                 list (?skip, take), create
/// /movies/{id}            get, update (PUT), partial update (PATCH), delete
///
/// /cinemas                list (?skip, take), create
/// /cinemas/{id}           get, update, delete
///
/// /addresses              list (?skip, take), create
/// /addresses/{id}         get, update, delete
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/movies", movie::router())
        .nest("/cinemas", cinema::router())
        .nest("/addresses", address::router())
}
