//! Route definitions for the `/cinemas` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::cinema;
use crate::state::AppState;

/// Cinema routes mounted at `/cinemas`.
///
/// ```text
/// GET    /       -> list
/// POST   /       -> create
/// GET    /{id}   -> get_by_id
/// PUT    /{id}   -> update
/// DELETE /{id}   -> delete
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(cinema::list).post(cinema::create))
        .route(
            "/{id}",
            get(cinema::get_by_id)
                .put(cinema::update)
                .delete(cinema::delete),
        )
}
