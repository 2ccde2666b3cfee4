//! Repository for the `clients` table.

use atelier_core::types::DbId;
use sqlx::PgPool;

use crate::models::client::{Client, ClientPage, CreateClient, UpdateClient};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, name, logo, website, featured, created_at";

/// Provides CRUD operations for clients.
pub struct ClientRepo;

impl ClientRepo {
    /// Insert a new client, returning the created row.
    pub async fn create(pool: &PgPool, input: &CreateClient) -> Result<Client, sqlx::Error> {
        let query = format!(
            "INSERT INTO clients (name, logo, website, featured) \
             VALUES ($1, $2, $3, COALESCE($4, false)) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Client>(&query)
            .bind(&input.name)
            .bind(&input.logo)
            .bind(&input.website)
            .bind(input.featured)
            .fetch_one(pool)
            .await
    }

    /// Find a client by its internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Client>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM clients WHERE id = $1");
        sqlx::query_as::<_, Client>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List clients newest-first with optional filters and pagination.
    ///
    /// `search` is a case-insensitive substring match on the name.
    pub async fn list(
        pool: &PgPool,
        featured: Option<bool>,
        search: Option<&str>,
        limit: i64,
        offset: i64,
    ) -> Result<ClientPage, sqlx::Error> {
        let mut conditions = Vec::new();
        let mut bind_idx = 1u32;

        if featured.is_some() {
            conditions.push(format!("featured = ${bind_idx}"));
            bind_idx += 1;
        }
        if search.is_some() {
            conditions.push(format!("name ILIKE ${bind_idx}"));
            bind_idx += 1;
        }

        let where_clause = if conditions.is_empty() {
            String::new()
        } else {
            format!("WHERE {}", conditions.join(" AND "))
        };

        let count_query = format!("SELECT COUNT(*) FROM clients {where_clause}");
        let mut cq = sqlx::query_scalar::<_, i64>(&count_query);
        if let Some(featured) = featured {
            cq = cq.bind(featured);
        }
        if let Some(search) = search {
            cq = cq.bind(format!("%{search}%"));
        }
        let total = cq.fetch_one(pool).await?;

        let list_query = format!(
            "SELECT {COLUMNS} FROM clients {where_clause} \
             ORDER BY created_at DESC, id DESC \
             LIMIT ${bind_idx} OFFSET ${next_idx}",
            next_idx = bind_idx + 1,
        );
        let mut q = sqlx::query_as::<_, Client>(&list_query);
        if let Some(featured) = featured {
            q = q.bind(featured);
        }
        if let Some(search) = search {
            q = q.bind(format!("%{search}%"));
        }
        let items = q.bind(limit).bind(offset).fetch_all(pool).await?;

        Ok(ClientPage { items, total })
    }

    /// Update a client. Only non-`None` fields in `input` are applied;
    /// `None` means "leave unchanged", so `website` cannot be cleared
    /// back to NULL through this path.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateClient,
    ) -> Result<Option<Client>, sqlx::Error> {
        let query = format!(
            "UPDATE clients SET \
                name = COALESCE($2, name), \
                logo = COALESCE($3, logo), \
                website = COALESCE($4, website), \
                featured = COALESCE($5, featured) \
             WHERE id = $1 \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Client>(&query)
            .bind(id)
            .bind(&input.name)
            .bind(&input.logo)
            .bind(&input.website)
            .bind(input.featured)
            .fetch_optional(pool)
            .await
    }

    /// Delete a client by ID. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM clients WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Delete every client whose ID appears in `ids`. Returns the number
    /// of rows removed.
    pub async fn bulk_delete(pool: &PgPool, ids: &[DbId]) -> Result<u64, sqlx::Error> {
        let result = sqlx::query("DELETE FROM clients WHERE id = ANY($1)")
            .bind(ids)
            .execute(pool)
            .await?;
        Ok(result.rows_affected())
    }
}
