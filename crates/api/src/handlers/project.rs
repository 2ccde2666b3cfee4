//! Handlers for the `/projects` resource.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;

use atelier_core::error::CoreError;
use atelier_core::pagination::{clamp_page, clamp_page_size, offset};
use atelier_core::slug::{resolve_slug, validate_slug};
use atelier_core::types::DbId;
use atelier_db::models::project::{
    CreateProject, Project, ProjectFilter, ProjectWithImages, UpdateProject,
};
use atelier_db::repositories::ProjectRepo;

use crate::error::{AppError, AppResult};
use crate::query::BulkIds;
use crate::response::{AffectedRows, DataResponse, PaginatedResponse};
use crate::state::AppState;

/// Query parameters for listing projects.
#[derive(Debug, Deserialize)]
pub struct ProjectListParams {
    pub featured: Option<bool>,
    /// Case-insensitive substring search over title, client name, and
    /// description.
    pub q: Option<String>,
    pub page: Option<i64>,
    pub limit: Option<i64>,
}

/// GET /api/v1/projects
pub async fn list(
    State(state): State<AppState>,
    Query(params): Query<ProjectListParams>,
) -> AppResult<Json<PaginatedResponse<Project>>> {
    let page = clamp_page(params.page);
    let page_size = clamp_page_size(params.limit);

    let filter = ProjectFilter {
        featured: params.featured,
        search: params.q,
    };
    let result = ProjectRepo::list(&state.pool, &filter, page_size, offset(page, page_size))
        .await?;

    Ok(Json(PaginatedResponse::new(
        result.items,
        result.total,
        page,
        page_size,
    )))
}

/// POST /api/v1/projects
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<CreateProject>,
) -> AppResult<(StatusCode, Json<DataResponse<ProjectWithImages>>)> {
    let slug = resolve_slug(input.slug.as_deref(), &input.title)?;
    let project = ProjectRepo::create(&state.pool, &input, &slug).await?;

    tracing::info!(project_id = project.project.id, slug = %slug, "Project created");
    Ok((StatusCode::CREATED, Json(DataResponse { data: project })))
}

/// GET /api/v1/projects/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<DataResponse<ProjectWithImages>>> {
    let project = ProjectRepo::find_with_images(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Project",
            id,
        }))?;
    Ok(Json(DataResponse { data: project }))
}

/// PATCH /api/v1/projects/{id}
///
/// Partial update; a present `images` array replaces the whole image set
/// atomically. A slug colliding with another project yields 409.
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateProject>,
) -> AppResult<Json<DataResponse<ProjectWithImages>>> {
    if let Some(ref slug) = input.slug {
        validate_slug(slug)?;
    }

    let project = ProjectRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Project",
            id,
        }))?;
    Ok(Json(DataResponse { data: project }))
}

/// DELETE /api/v1/projects/{id}
pub async fn delete(State(state): State<AppState>, Path(id): Path<DbId>) -> AppResult<StatusCode> {
    let deleted = ProjectRepo::delete(&state.pool, id).await?;
    if deleted {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::Core(CoreError::NotFound {
            entity: "Project",
            id,
        }))
    }
}

/// POST /api/v1/projects/bulk-delete
pub async fn bulk_delete(
    State(state): State<AppState>,
    Json(input): Json<BulkIds>,
) -> AppResult<Json<DataResponse<AffectedRows>>> {
    let affected = ProjectRepo::bulk_delete(&state.pool, &input.ids).await?;

    tracing::info!(affected, "Projects bulk-deleted");
    Ok(Json(DataResponse {
        data: AffectedRows { affected },
    }))
}
