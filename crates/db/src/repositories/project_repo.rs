//! Repository for the `projects` table and its `project_images` children.

use atelier_core::types::DbId;
use sqlx::{PgPool, Postgres, Transaction};

use crate::models::image::{CreateImage, Image};
use crate::models::project::{
    CreateProject, Project, ProjectFilter, ProjectPage, ProjectWithImages, UpdateProject,
};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str =
    "id, title, slug, description, client_name, project_type, featured, thumbnail, \
     created_at, updated_at";

const IMAGE_COLUMNS: &str = "id, project_id, url, alt, sort_order";

/// Provides CRUD operations for projects.
///
/// Image rows live and die with their parent: they are inserted in the
/// same transaction as a create, replaced wholesale in the same
/// transaction as an update, and removed by `ON DELETE CASCADE`.
pub struct ProjectRepo;

impl ProjectRepo {
    /// Insert a new project and its images in one transaction.
    ///
    /// `slug` is resolved by the caller (validated, or derived from the
    /// title). Image `sort_order` is the array index. A duplicate slug
    /// surfaces as a `uq_projects_slug` unique violation.
    pub async fn create(
        pool: &PgPool,
        input: &CreateProject,
        slug: &str,
    ) -> Result<ProjectWithImages, sqlx::Error> {
        let mut tx = pool.begin().await?;

        let query = format!(
            "INSERT INTO projects \
                (title, slug, description, client_name, project_type, featured, thumbnail) \
             VALUES ($1, $2, $3, $4, $5, COALESCE($6, false), $7) \
             RETURNING {COLUMNS}"
        );
        let project = sqlx::query_as::<_, Project>(&query)
            .bind(&input.title)
            .bind(slug)
            .bind(&input.description)
            .bind(&input.client_name)
            .bind(&input.project_type)
            .bind(input.featured)
            .bind(&input.thumbnail)
            .fetch_one(&mut *tx)
            .await?;

        let images = Self::insert_images(&mut tx, project.id, &input.images).await?;

        tx.commit().await?;
        Ok(ProjectWithImages { project, images })
    }

    /// Find a project row by its internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Project>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM projects WHERE id = $1");
        sqlx::query_as::<_, Project>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Find a project with its ordered image set.
    pub async fn find_with_images(
        pool: &PgPool,
        id: DbId,
    ) -> Result<Option<ProjectWithImages>, sqlx::Error> {
        let Some(project) = Self::find_by_id(pool, id).await? else {
            return Ok(None);
        };
        let images = Self::images_for(pool, id).await?;
        Ok(Some(ProjectWithImages { project, images }))
    }

    /// List the images of a project, ordered for display.
    pub async fn images_for(pool: &PgPool, project_id: DbId) -> Result<Vec<Image>, sqlx::Error> {
        let query = format!(
            "SELECT {IMAGE_COLUMNS} FROM project_images \
             WHERE project_id = $1 ORDER BY sort_order"
        );
        sqlx::query_as::<_, Image>(&query)
            .bind(project_id)
            .fetch_all(pool)
            .await
    }

    /// List projects newest-first with optional filters and pagination.
    ///
    /// Returns one page of rows plus the total count matching the filter.
    pub async fn list(
        pool: &PgPool,
        filter: &ProjectFilter,
        limit: i64,
        offset: i64,
    ) -> Result<ProjectPage, sqlx::Error> {
        // Build dynamic WHERE clauses.
        let mut conditions = Vec::new();
        let mut bind_idx = 1u32;

        if filter.featured.is_some() {
            conditions.push(format!("featured = ${bind_idx}"));
            bind_idx += 1;
        }
        if filter.search.is_some() {
            conditions.push(format!(
                "(title ILIKE ${bind_idx} OR client_name ILIKE ${bind_idx} \
                  OR description ILIKE ${bind_idx})"
            ));
            bind_idx += 1;
        }

        let where_clause = if conditions.is_empty() {
            String::new()
        } else {
            format!("WHERE {}", conditions.join(" AND "))
        };

        let count_query = format!("SELECT COUNT(*) FROM projects {where_clause}");
        let mut cq = sqlx::query_scalar::<_, i64>(&count_query);
        if let Some(featured) = filter.featured {
            cq = cq.bind(featured);
        }
        if let Some(ref search) = filter.search {
            cq = cq.bind(format!("%{search}%"));
        }
        let total = cq.fetch_one(pool).await?;

        let list_query = format!(
            "SELECT {COLUMNS} FROM projects {where_clause} \
             ORDER BY created_at DESC, id DESC \
             LIMIT ${bind_idx} OFFSET ${next_idx}",
            next_idx = bind_idx + 1,
        );
        let mut q = sqlx::query_as::<_, Project>(&list_query);
        if let Some(featured) = filter.featured {
            q = q.bind(featured);
        }
        if let Some(ref search) = filter.search {
            q = q.bind(format!("%{search}%"));
        }
        let items = q.bind(limit).bind(offset).fetch_all(pool).await?;

        Ok(ProjectPage { items, total })
    }

    /// Update a project. Only non-`None` fields in `input` are applied;
    /// `None` means "leave unchanged", so a nullable column like
    /// `thumbnail` cannot be cleared back to NULL through this path.
    ///
    /// When `input.images` is `Some`, the whole image set is replaced in
    /// the same transaction as the row update, so a crash can never leave
    /// the project between image sets. Returns `None` if no row with the
    /// given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateProject,
    ) -> Result<Option<ProjectWithImages>, sqlx::Error> {
        let mut tx = pool.begin().await?;

        let query = format!(
            "UPDATE projects SET \
                title = COALESCE($2, title), \
                slug = COALESCE($3, slug), \
                description = COALESCE($4, description), \
                client_name = COALESCE($5, client_name), \
                project_type = COALESCE($6, project_type), \
                featured = COALESCE($7, featured), \
                thumbnail = COALESCE($8, thumbnail), \
                updated_at = NOW() \
             WHERE id = $1 \
             RETURNING {COLUMNS}"
        );
        let Some(project) = sqlx::query_as::<_, Project>(&query)
            .bind(id)
            .bind(&input.title)
            .bind(&input.slug)
            .bind(&input.description)
            .bind(&input.client_name)
            .bind(&input.project_type)
            .bind(input.featured)
            .bind(&input.thumbnail)
            .fetch_optional(&mut *tx)
            .await?
        else {
            return Ok(None);
        };

        let images = match &input.images {
            Some(images) => {
                sqlx::query("DELETE FROM project_images WHERE project_id = $1")
                    .bind(id)
                    .execute(&mut *tx)
                    .await?;
                Self::insert_images(&mut tx, id, images).await?
            }
            None => {
                let query = format!(
                    "SELECT {IMAGE_COLUMNS} FROM project_images \
                     WHERE project_id = $1 ORDER BY sort_order"
                );
                sqlx::query_as::<_, Image>(&query)
                    .bind(id)
                    .fetch_all(&mut *tx)
                    .await?
            }
        };

        tx.commit().await?;
        Ok(Some(ProjectWithImages { project, images }))
    }

    /// Delete a project by ID. Images go with it via the cascade.
    /// Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM projects WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Delete every project whose ID appears in `ids`. Returns the number
    /// of rows removed.
    pub async fn bulk_delete(pool: &PgPool, ids: &[DbId]) -> Result<u64, sqlx::Error> {
        let result = sqlx::query("DELETE FROM projects WHERE id = ANY($1)")
            .bind(ids)
            .execute(pool)
            .await?;
        Ok(result.rows_affected())
    }

    /// Insert image rows with `sort_order` taken from the array index.
    async fn insert_images(
        tx: &mut Transaction<'_, Postgres>,
        project_id: DbId,
        images: &[CreateImage],
    ) -> Result<Vec<Image>, sqlx::Error> {
        let query = format!(
            "INSERT INTO project_images (project_id, url, alt, sort_order) \
             VALUES ($1, $2, $3, $4) \
             RETURNING {IMAGE_COLUMNS}"
        );
        let mut inserted = Vec::with_capacity(images.len());
        for (idx, image) in images.iter().enumerate() {
            let row = sqlx::query_as::<_, Image>(&query)
                .bind(project_id)
                .bind(&image.url)
                .bind(&image.alt)
                .bind(idx as i32)
                .fetch_one(&mut **tx)
                .await?;
            inserted.push(row);
        }
        Ok(inserted)
    }
}
