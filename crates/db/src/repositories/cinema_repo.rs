//! Repository for the `cinemas` table.
//!
//! Reads join `addresses` so every loaded [`Cinema`] carries its address.

use movies_core::pagination::Page;
use movies_core::types::DbId;
use sqlx::{FromRow, PgPool};

use crate::models::address::Address;
use crate::models::cinema::Cinema;

const SELECT: &str = "\
    SELECT c.id, c.name, c.address_id, \
           a.street, a.city, a.state, a.postal_code, a.country \
    FROM cinemas c \
    JOIN addresses a ON a.id = c.address_id";

const RETURNING: &str = "id, name, address_id";

/// One row of the cinema/address join.
#[derive(FromRow)]
struct CinemaAddressRow {
    id: DbId,
    name: String,
    address_id: DbId,
    street: String,
    city: String,
    state: String,
    postal_code: String,
    country: String,
}

impl From<CinemaAddressRow> for Cinema {
    fn from(row: CinemaAddressRow) -> Self {
        Cinema {
            id: row.id,
            name: row.name,
            address_id: row.address_id,
            address: Some(Address {
                id: row.address_id,
                street: row.street,
                city: row.city,
                state: row.state,
                postal_code: row.postal_code,
                country: row.country,
                cinema_id: Some(row.id),
            }),
        }
    }
}

/// Provides CRUD operations for cinemas.
pub struct CinemaRepo;

impl CinemaRepo {
    /// List one page of cinemas in primary-key order, addresses resolved.
    pub async fn list(pool: &PgPool, page: Page) -> Result<Vec<Cinema>, sqlx::Error> {
        let query = format!("{SELECT} ORDER BY c.id LIMIT $1 OFFSET $2");
        let rows = sqlx::query_as::<_, CinemaAddressRow>(&query)
            .bind(page.take)
            .bind(page.skip)
            .fetch_all(pool)
            .await?;
        Ok(rows.into_iter().map(Cinema::from).collect())
    }

    /// Find a cinema by its ID, address resolved.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Cinema>, sqlx::Error> {
        let query = format!("{SELECT} WHERE c.id = $1");
        let row = sqlx::query_as::<_, CinemaAddressRow>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await?;
        Ok(row.map(Cinema::from))
    }

    /// Insert a cinema, returning the stored row with its assigned ID.
    ///
    /// The returned cinema has no resolved `address`. Violates
    /// `uq_cinemas_address_id` if the address already has a cinema.
    pub async fn insert(pool: &PgPool, cinema: &Cinema) -> Result<Cinema, sqlx::Error> {
        let query = format!(
            "INSERT INTO cinemas (name, address_id) VALUES ($1, $2) RETURNING {RETURNING}"
        );
        sqlx::query_as::<_, Cinema>(&query)
            .bind(&cinema.name)
            .bind(cinema.address_id)
            .fetch_one(pool)
            .await
    }

    /// Persist the mutable columns of a previously loaded cinema.
    pub async fn update(pool: &PgPool, cinema: &Cinema) -> Result<(), sqlx::Error> {
        sqlx::query("UPDATE cinemas SET name = $2 WHERE id = $1")
            .bind(cinema.id)
            .bind(&cinema.name)
            .execute(pool)
            .await?;
        Ok(())
    }

    /// Delete a cinema. Its address is kept.
    pub async fn delete(pool: &PgPool, cinema: &Cinema) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM cinemas WHERE id = $1")
            .bind(cinema.id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
