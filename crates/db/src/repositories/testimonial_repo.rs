//! Repository for the `testimonials` table.

use atelier_core::types::DbId;
use sqlx::PgPool;

use crate::models::testimonial::{
    CreateTestimonial, Testimonial, TestimonialPage, UpdateTestimonial,
};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, name, position, company, content, avatar, featured, created_at";

/// Provides CRUD operations for testimonials.
pub struct TestimonialRepo;

impl TestimonialRepo {
    /// Insert a new testimonial, returning the created row.
    pub async fn create(
        pool: &PgPool,
        input: &CreateTestimonial,
    ) -> Result<Testimonial, sqlx::Error> {
        let query = format!(
            "INSERT INTO testimonials (name, position, company, content, avatar, featured) \
             VALUES ($1, $2, $3, $4, $5, COALESCE($6, false)) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Testimonial>(&query)
            .bind(&input.name)
            .bind(&input.position)
            .bind(&input.company)
            .bind(&input.content)
            .bind(&input.avatar)
            .bind(input.featured)
            .fetch_one(pool)
            .await
    }

    /// Find a testimonial by its internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Testimonial>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM testimonials WHERE id = $1");
        sqlx::query_as::<_, Testimonial>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List testimonials newest-first with optional filters and pagination.
    ///
    /// `search` matches name, company, and position case-insensitively.
    pub async fn list(
        pool: &PgPool,
        featured: Option<bool>,
        search: Option<&str>,
        limit: i64,
        offset: i64,
    ) -> Result<TestimonialPage, sqlx::Error> {
        let mut conditions = Vec::new();
        let mut bind_idx = 1u32;

        if featured.is_some() {
            conditions.push(format!("featured = ${bind_idx}"));
            bind_idx += 1;
        }
        if search.is_some() {
            conditions.push(format!(
                "(name ILIKE ${bind_idx} OR company ILIKE ${bind_idx} \
                  OR position ILIKE ${bind_idx})"
            ));
            bind_idx += 1;
        }

        let where_clause = if conditions.is_empty() {
            String::new()
        } else {
            format!("WHERE {}", conditions.join(" AND "))
        };

        let count_query = format!("SELECT COUNT(*) FROM testimonials {where_clause}");
        let mut cq = sqlx::query_scalar::<_, i64>(&count_query);
        if let Some(featured) = featured {
            cq = cq.bind(featured);
        }
        if let Some(search) = search {
            cq = cq.bind(format!("%{search}%"));
        }
        let total = cq.fetch_one(pool).await?;

        let list_query = format!(
            "SELECT {COLUMNS} FROM testimonials {where_clause} \
             ORDER BY created_at DESC, id DESC \
             LIMIT ${bind_idx} OFFSET ${next_idx}",
            next_idx = bind_idx + 1,
        );
        let mut q = sqlx::query_as::<_, Testimonial>(&list_query);
        if let Some(featured) = featured {
            q = q.bind(featured);
        }
        if let Some(search) = search {
            q = q.bind(format!("%{search}%"));
        }
        let items = q.bind(limit).bind(offset).fetch_all(pool).await?;

        Ok(TestimonialPage { items, total })
    }

    /// Update a testimonial. Only non-`None` fields in `input` are
    /// applied; `None` means "leave unchanged", so `avatar` cannot be
    /// cleared back to NULL through this path.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateTestimonial,
    ) -> Result<Option<Testimonial>, sqlx::Error> {
        let query = format!(
            "UPDATE testimonials SET \
                name = COALESCE($2, name), \
                position = COALESCE($3, position), \
                company = COALESCE($4, company), \
                content = COALESCE($5, content), \
                avatar = COALESCE($6, avatar), \
                featured = COALESCE($7, featured) \
             WHERE id = $1 \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Testimonial>(&query)
            .bind(id)
            .bind(&input.name)
            .bind(&input.position)
            .bind(&input.company)
            .bind(&input.content)
            .bind(&input.avatar)
            .bind(input.featured)
            .fetch_optional(pool)
            .await
    }

    /// Delete a testimonial by ID. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM testimonials WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Delete every testimonial whose ID appears in `ids`. Returns the
    /// number of rows removed.
    pub async fn bulk_delete(pool: &PgPool, ids: &[DbId]) -> Result<u64, sqlx::Error> {
        let result = sqlx::query("DELETE FROM testimonials WHERE id = ANY($1)")
            .bind(ids)
            .execute(pool)
            .await?;
        Ok(result.rows_affected())
    }
}
