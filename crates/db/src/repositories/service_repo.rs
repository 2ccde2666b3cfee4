//! Repository for the `services` table.
//!
//! Services carry a dense 1..N `sort_order`. Every mutation that can
//! disturb the sequence (move, delete, bulk delete) renumbers the full
//! set inside its transaction, so readers always see a contiguous order.
//! The renumber is O(N) per move, which is fine at the handful of rows a
//! services list holds.

use atelier_core::types::DbId;
use sqlx::{PgPool, Postgres, Transaction};

use crate::models::service::{CreateService, MoveDirection, Service, UpdateService};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, title, description, icon, slug, sort_order, created_at";

/// Provides CRUD and reordering operations for services.
pub struct ServiceRepo;

impl ServiceRepo {
    /// Insert a new service at the end of the display order.
    ///
    /// A duplicate slug surfaces as a `uq_services_slug` unique violation.
    pub async fn create(
        pool: &PgPool,
        input: &CreateService,
        slug: &str,
    ) -> Result<Service, sqlx::Error> {
        let query = format!(
            "INSERT INTO services (title, description, icon, slug, sort_order) \
             VALUES ($1, $2, $3, $4, \
                     (SELECT COALESCE(MAX(sort_order), 0) + 1 FROM services)) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Service>(&query)
            .bind(&input.title)
            .bind(&input.description)
            .bind(&input.icon)
            .bind(slug)
            .fetch_one(pool)
            .await
    }

    /// Find a service by its internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Service>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM services WHERE id = $1");
        sqlx::query_as::<_, Service>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List all services in display order. The list is small and manually
    /// ordered, so there is no pagination.
    pub async fn list(pool: &PgPool) -> Result<Vec<Service>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM services ORDER BY sort_order, id");
        sqlx::query_as::<_, Service>(&query).fetch_all(pool).await
    }

    /// Update a service. Only non-`None` fields in `input` are applied;
    /// `sort_order` can only change through [`Self::move_in_direction`].
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateService,
    ) -> Result<Option<Service>, sqlx::Error> {
        let query = format!(
            "UPDATE services SET \
                title = COALESCE($2, title), \
                description = COALESCE($3, description), \
                icon = COALESCE($4, icon), \
                slug = COALESCE($5, slug) \
             WHERE id = $1 \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Service>(&query)
            .bind(id)
            .bind(&input.title)
            .bind(&input.description)
            .bind(&input.icon)
            .bind(&input.slug)
            .fetch_optional(pool)
            .await
    }

    /// Move a service one step up or down and renumber the whole list to
    /// a dense 1..N.
    ///
    /// Moving past either end is a no-op. Returns `None` if the service
    /// does not exist, otherwise the full renumbered list.
    pub async fn move_in_direction(
        pool: &PgPool,
        id: DbId,
        direction: MoveDirection,
    ) -> Result<Option<Vec<Service>>, sqlx::Error> {
        let mut tx = pool.begin().await?;

        let query = format!("SELECT {COLUMNS} FROM services ORDER BY sort_order, id FOR UPDATE");
        let ordered = sqlx::query_as::<_, Service>(&query)
            .fetch_all(&mut *tx)
            .await?;

        let Some(pos) = ordered.iter().position(|s| s.id == id) else {
            return Ok(None);
        };

        let mut ids: Vec<DbId> = ordered.iter().map(|s| s.id).collect();
        match direction {
            MoveDirection::Up if pos > 0 => ids.swap(pos, pos - 1),
            MoveDirection::Down if pos + 1 < ids.len() => ids.swap(pos, pos + 1),
            _ => {} // already at the edge
        }

        Self::renumber(&mut tx, &ids).await?;
        tx.commit().await?;

        let list = Self::list(pool).await?;
        Ok(Some(list))
    }

    /// Delete a service and renumber the survivors. Returns `true` if a
    /// row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let mut tx = pool.begin().await?;

        let result = sqlx::query("DELETE FROM services WHERE id = $1")
            .bind(id)
            .execute(&mut *tx)
            .await?;
        if result.rows_affected() == 0 {
            return Ok(false);
        }

        let ids = sqlx::query_scalar::<_, DbId>(
            "SELECT id FROM services ORDER BY sort_order, id FOR UPDATE",
        )
        .fetch_all(&mut *tx)
        .await?;
        Self::renumber(&mut tx, &ids).await?;

        tx.commit().await?;
        Ok(true)
    }

    /// Delete every service whose ID appears in `ids`, then renumber.
    /// Returns the number of rows removed.
    pub async fn bulk_delete(pool: &PgPool, ids: &[DbId]) -> Result<u64, sqlx::Error> {
        let mut tx = pool.begin().await?;

        let result = sqlx::query("DELETE FROM services WHERE id = ANY($1)")
            .bind(ids)
            .execute(&mut *tx)
            .await?;

        let remaining = sqlx::query_scalar::<_, DbId>(
            "SELECT id FROM services ORDER BY sort_order, id FOR UPDATE",
        )
        .fetch_all(&mut *tx)
        .await?;
        Self::renumber(&mut tx, &remaining).await?;

        tx.commit().await?;
        Ok(result.rows_affected())
    }

    /// Assign `sort_order` 1..N following the given id sequence.
    async fn renumber(
        tx: &mut Transaction<'_, Postgres>,
        ids: &[DbId],
    ) -> Result<(), sqlx::Error> {
        for (idx, id) in ids.iter().enumerate() {
            sqlx::query("UPDATE services SET sort_order = $2 WHERE id = $1")
                .bind(id)
                .bind(idx as i32 + 1)
                .execute(&mut **tx)
                .await?;
        }
        Ok(())
    }
}
