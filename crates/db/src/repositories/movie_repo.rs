//! Repository for the `movies` table.

use movies_core::pagination::Page;
use movies_core::types::DbId;
use sqlx::PgPool;

use crate::models::movie::Movie;

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, title, genre, director, release_date, duration, description";

/// Provides CRUD operations for movies.
pub struct MovieRepo;

impl MovieRepo {
    /// List one page of movies in primary-key order.
    pub async fn list(pool: &PgPool, page: Page) -> Result<Vec<Movie>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM movies ORDER BY id LIMIT $1 OFFSET $2");
        sqlx::query_as::<_, Movie>(&query)
            .bind(page.take)
            .bind(page.skip)
            .fetch_all(pool)
            .await
    }

    /// Find a movie by its ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Movie>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM movies WHERE id = $1");
        sqlx::query_as::<_, Movie>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Insert a movie, returning the stored row with its assigned ID.
    ///
    /// `movie.id` is ignored.
    pub async fn insert(pool: &PgPool, movie: &Movie) -> Result<Movie, sqlx::Error> {
        let query = format!(
            "INSERT INTO movies (title, genre, director, release_date, duration, description) \
             VALUES ($1, $2, $3, $4, $5, $6) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Movie>(&query)
            .bind(&movie.title)
            .bind(&movie.genre)
            .bind(&movie.director)
            .bind(movie.release_date)
            .bind(movie.duration)
            .bind(&movie.description)
            .fetch_one(pool)
            .await
    }

    /// Persist every mutable column of a previously loaded movie.
    pub async fn update(pool: &PgPool, movie: &Movie) -> Result<(), sqlx::Error> {
        sqlx::query(
            "UPDATE movies SET \
                title = $2, \
                genre = $3, \
                director = $4, \
                release_date = $5, \
                duration = $6, \
                description = $7 \
             WHERE id = $1",
        )
        .bind(movie.id)
        .bind(&movie.title)
        .bind(&movie.genre)
        .bind(&movie.director)
        .bind(movie.release_date)
        .bind(movie.duration)
        .bind(&movie.description)
        .execute(pool)
        .await?;
        Ok(())
    }

    /// Delete a movie. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, movie: &Movie) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM movies WHERE id = $1")
            .bind(movie.id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
