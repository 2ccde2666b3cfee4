//! Handlers for the `/services` resource.
//!
//! Services are a short, manually ordered list; the list endpoint returns
//! everything in display order and the move endpoint shifts one row a
//! single step, renumbering the whole sequence.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;

use atelier_core::error::CoreError;
use atelier_core::slug::{resolve_slug, validate_slug};
use atelier_core::types::DbId;
use atelier_db::models::service::{CreateService, MoveDirection, Service, UpdateService};
use atelier_db::repositories::ServiceRepo;

use crate::error::{AppError, AppResult};
use crate::query::BulkIds;
use crate::response::{AffectedRows, DataResponse};
use crate::state::AppState;

/// Request body for the move endpoint.
#[derive(Debug, Deserialize)]
pub struct MoveRequest {
    pub direction: MoveDirection,
}

/// GET /api/v1/services
pub async fn list(State(state): State<AppState>) -> AppResult<Json<DataResponse<Vec<Service>>>> {
    let services = ServiceRepo::list(&state.pool).await?;
    Ok(Json(DataResponse { data: services }))
}

/// POST /api/v1/services
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<CreateService>,
) -> AppResult<(StatusCode, Json<DataResponse<Service>>)> {
    let slug = resolve_slug(input.slug.as_deref(), &input.title)?;
    let service = ServiceRepo::create(&state.pool, &input, &slug).await?;

    tracing::info!(service_id = service.id, slug = %slug, "Service created");
    Ok((StatusCode::CREATED, Json(DataResponse { data: service })))
}

/// GET /api/v1/services/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<DataResponse<Service>>> {
    let service = ServiceRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Service",
            id,
        }))?;
    Ok(Json(DataResponse { data: service }))
}

/// PATCH /api/v1/services/{id}
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateService>,
) -> AppResult<Json<DataResponse<Service>>> {
    if let Some(ref slug) = input.slug {
        validate_slug(slug)?;
    }

    let service = ServiceRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Service",
            id,
        }))?;
    Ok(Json(DataResponse { data: service }))
}

/// POST /api/v1/services/{id}/move
///
/// Returns the full renumbered list so the admin screen can re-render.
pub async fn move_service(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<MoveRequest>,
) -> AppResult<Json<DataResponse<Vec<Service>>>> {
    let services = ServiceRepo::move_in_direction(&state.pool, id, input.direction)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Service",
            id,
        }))?;
    Ok(Json(DataResponse { data: services }))
}

/// DELETE /api/v1/services/{id}
pub async fn delete(State(state): State<AppState>, Path(id): Path<DbId>) -> AppResult<StatusCode> {
    let deleted = ServiceRepo::delete(&state.pool, id).await?;
    if deleted {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::Core(CoreError::NotFound {
            entity: "Service",
            id,
        }))
    }
}

/// POST /api/v1/services/bulk-delete
pub async fn bulk_delete(
    State(state): State<AppState>,
    Json(input): Json<BulkIds>,
) -> AppResult<Json<DataResponse<AffectedRows>>> {
    let affected = ServiceRepo::bulk_delete(&state.pool, &input.ids).await?;

    tracing::info!(affected, "Services bulk-deleted");
    Ok(Json(DataResponse {
        data: AffectedRows { affected },
    }))
}
