//! Repository for the `addresses` table.

use movies_core::pagination::Page;
use movies_core::types::DbId;
use sqlx::PgPool;

use crate::models::address::Address;

/// Select list resolving the owning cinema (if any) as `cinema_id`.
const SELECT: &str = "\
    SELECT a.id, a.street, a.city, a.state, a.postal_code, a.country, \
           c.id AS cinema_id \
    FROM addresses a \
    LEFT JOIN cinemas c ON c.address_id = a.id";

/// Column list for `RETURNING` on freshly inserted rows, which have no owner yet.
const RETURNING: &str =
    "id, street, city, state, postal_code, country, NULL::BIGINT AS cinema_id";

/// Provides CRUD operations for addresses.
pub struct AddressRepo;

impl AddressRepo {
    /// List one page of addresses in primary-key order.
    pub async fn list(pool: &PgPool, page: Page) -> Result<Vec<Address>, sqlx::Error> {
        let query = format!("{SELECT} ORDER BY a.id LIMIT $1 OFFSET $2");
        sqlx::query_as::<_, Address>(&query)
            .bind(page.take)
            .bind(page.skip)
            .fetch_all(pool)
            .await
    }

    /// Find an address by its ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Address>, sqlx::Error> {
        let query = format!("{SELECT} WHERE a.id = $1");
        sqlx::query_as::<_, Address>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Insert an address, returning the stored row with its assigned ID.
    pub async fn insert(pool: &PgPool, address: &Address) -> Result<Address, sqlx::Error> {
        let query = format!(
            "INSERT INTO addresses (street, city, state, postal_code, country) \
             VALUES ($1, $2, $3, $4, $5) \
             RETURNING {RETURNING}"
        );
        sqlx::query_as::<_, Address>(&query)
            .bind(&address.street)
            .bind(&address.city)
            .bind(&address.state)
            .bind(&address.postal_code)
            .bind(&address.country)
            .fetch_one(pool)
            .await
    }

    /// Persist every stored column of a previously loaded address.
    pub async fn update(pool: &PgPool, address: &Address) -> Result<(), sqlx::Error> {
        sqlx::query(
            "UPDATE addresses SET \
                street = $2, \
                city = $3, \
                state = $4, \
                postal_code = $5, \
                country = $6 \
             WHERE id = $1",
        )
        .bind(address.id)
        .bind(&address.street)
        .bind(&address.city)
        .bind(&address.state)
        .bind(&address.postal_code)
        .bind(&address.country)
        .execute(pool)
        .await?;
        Ok(())
    }

    /// Delete an address. Fails with a foreign-key violation while a cinema
    /// still references it.
    pub async fn delete(pool: &PgPool, address: &Address) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM addresses WHERE id = $1")
            .bind(address.id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
