//! Repository for the `contacts` table.

use atelier_core::contact_status::ContactStatus;
use atelier_core::types::DbId;
use sqlx::PgPool;

use crate::models::contact::{Contact, ContactFilter, ContactPage, CreateContact};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str =
    "id, name, email, company, project_type, budget, message, status, created_at";

/// Provides CRUD and triage operations for contact submissions.
pub struct ContactRepo;

impl ContactRepo {
    /// Record a new contact submission. Status starts at NEW (the column
    /// default).
    pub async fn create(pool: &PgPool, input: &CreateContact) -> Result<Contact, sqlx::Error> {
        let query = format!(
            "INSERT INTO contacts (name, email, company, project_type, budget, message) \
             VALUES ($1, $2, $3, $4, $5, $6) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Contact>(&query)
            .bind(&input.name)
            .bind(&input.email)
            .bind(&input.company)
            .bind(&input.project_type)
            .bind(&input.budget)
            .bind(&input.message)
            .fetch_one(pool)
            .await
    }

    /// Find a contact submission by its internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Contact>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM contacts WHERE id = $1");
        sqlx::query_as::<_, Contact>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List contact submissions newest-first with optional filters and
    /// pagination.
    pub async fn list(
        pool: &PgPool,
        filter: &ContactFilter,
        limit: i64,
        offset: i64,
    ) -> Result<ContactPage, sqlx::Error> {
        let mut conditions = Vec::new();
        let mut bind_idx = 1u32;

        if filter.status.is_some() {
            conditions.push(format!("status = ${bind_idx}"));
            bind_idx += 1;
        }
        if filter.search.is_some() {
            conditions.push(format!(
                "(name ILIKE ${bind_idx} OR email ILIKE ${bind_idx} \
                  OR company ILIKE ${bind_idx} OR message ILIKE ${bind_idx})"
            ));
            bind_idx += 1;
        }

        let where_clause = if conditions.is_empty() {
            String::new()
        } else {
            format!("WHERE {}", conditions.join(" AND "))
        };

        let count_query = format!("SELECT COUNT(*) FROM contacts {where_clause}");
        let mut cq = sqlx::query_scalar::<_, i64>(&count_query);
        if let Some(status) = filter.status {
            cq = cq.bind(status.as_str());
        }
        if let Some(ref search) = filter.search {
            cq = cq.bind(format!("%{search}%"));
        }
        let total = cq.fetch_one(pool).await?;

        let list_query = format!(
            "SELECT {COLUMNS} FROM contacts {where_clause} \
             ORDER BY created_at DESC, id DESC \
             LIMIT ${bind_idx} OFFSET ${next_idx}",
            next_idx = bind_idx + 1,
        );
        let mut q = sqlx::query_as::<_, Contact>(&list_query);
        if let Some(status) = filter.status {
            q = q.bind(status.as_str());
        }
        if let Some(ref search) = filter.search {
            q = q.bind(format!("%{search}%"));
        }
        let items = q.bind(limit).bind(offset).fetch_all(pool).await?;

        Ok(ContactPage { items, total })
    }

    /// Set the status of one contact submission.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update_status(
        pool: &PgPool,
        id: DbId,
        status: ContactStatus,
    ) -> Result<Option<Contact>, sqlx::Error> {
        let query = format!(
            "UPDATE contacts SET status = $2 WHERE id = $1 RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Contact>(&query)
            .bind(id)
            .bind(status.as_str())
            .fetch_optional(pool)
            .await
    }

    /// Set the status of every contact whose ID appears in `ids`.
    /// Returns the number of rows changed.
    pub async fn bulk_update_status(
        pool: &PgPool,
        ids: &[DbId],
        status: ContactStatus,
    ) -> Result<u64, sqlx::Error> {
        let result = sqlx::query("UPDATE contacts SET status = $2 WHERE id = ANY($1)")
            .bind(ids)
            .bind(status.as_str())
            .execute(pool)
            .await?;
        Ok(result.rows_affected())
    }

    /// Delete a contact submission by ID. Returns `true` if a row was
    /// removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM contacts WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Delete every contact whose ID appears in `ids`. Returns the number
    /// of rows removed.
    pub async fn bulk_delete(pool: &PgPool, ids: &[DbId]) -> Result<u64, sqlx::Error> {
        let result = sqlx::query("DELETE FROM contacts WHERE id = ANY($1)")
            .bind(ids)
            .execute(pool)
            .await?;
        Ok(result.rows_affected())
    }
}
