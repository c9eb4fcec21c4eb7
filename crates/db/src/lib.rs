//! Entity store for movies, cinemas and addresses.
//!
//! Owns the PostgreSQL schema (see `migrations/`), the row structs and
//! transfer objects in [`models`], the projections between them in
//! [`mapping`], and the repositories in [`repositories`].

use serde::Serialize;
use sqlx::postgres::PgPoolOptions;
use sqlx::FromRow;

pub mod mapping;
pub mod models;
pub mod repositories;

pub type DbPool = sqlx::PgPool;

/// Create a connection pool from a database URL.
pub async fn create_pool(database_url: &str, max_connections: u32) -> Result<DbPool, sqlx::Error> {
    tracing::debug!(max_connections, "Opening database pool");
    PgPoolOptions::new()
        .max_connections(max_connections)
        .connect(database_url)
        .await
}

/// Round-trip a trivial query to confirm the database is reachable.
pub async fn health_check(pool: &DbPool) -> Result<(), sqlx::Error> {
    sqlx::query("SELECT 1").execute(pool).await?;
    Ok(())
}

/// Row counts of the tables this crate owns.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, FromRow)]
pub struct TableCounts {
    pub movies: i64,
    pub cinemas: i64,
    pub addresses: i64,
}

/// Count the rows of every table in one round trip.
///
/// Fails if any table is missing, e.g. before migrations have run.
pub async fn table_counts(pool: &DbPool) -> Result<TableCounts, sqlx::Error> {
    sqlx::query_as::<_, TableCounts>(
        "SELECT \
            (SELECT COUNT(*) FROM movies) AS movies, \
            (SELECT COUNT(*) FROM cinemas) AS cinemas, \
            (SELECT COUNT(*) FROM addresses) AS addresses",
    )
    .fetch_one(pool)
    .await
}

/// Apply any pending migrations embedded from `crates/db/migrations`.
pub async fn run_migrations(pool: &DbPool) -> Result<(), sqlx::migrate::MigrateError> {
    sqlx::migrate!("./migrations").run(pool).await
}
