//! `GET /health`: liveness plus a per-table view of the schema.

use axum::extract::State;
use axum::http::StatusCode;
use axum::{routing::get, Json, Router};
use movies_db::TableCounts;
use serde::Serialize;

use crate::state::AppState;

#[derive(Serialize)]
pub struct HealthResponse {
    /// `ok` when every table answered, `unavailable` otherwise.
    pub status: &'static str,
    pub version: &'static str,
    /// Row counts per table; `null` when the schema could not be read.
    pub tables: Option<TableCounts>,
}

/// Answers 503 when the movies, cinemas or addresses table cannot be read.
async fn health(State(state): State<AppState>) -> (StatusCode, Json<HealthResponse>) {
    let version = env!("CARGO_PKG_VERSION");
    match movies_db::table_counts(&state.pool).await {
        Ok(tables) => (
            StatusCode::OK,
            Json(HealthResponse {
                status: "ok",
                version,
                tables: Some(tables),
            }),
        ),
        Err(err) => {
            tracing::warn!(error = %err, "Health check could not read tables");
            (
                StatusCode::SERVICE_UNAVAILABLE,
                Json(HealthResponse {
                    status: "unavailable",
                    version,
                    tables: None,
                }),
            )
        }
    }
}

pub fn router() -> Router<AppState> {
    Router::new().route("/health", get(health))
}
