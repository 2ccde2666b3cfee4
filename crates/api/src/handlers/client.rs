//! Handlers for the `/clients` resource.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;

use atelier_core::error::CoreError;
use atelier_core::pagination::{clamp_page, clamp_page_size, offset};
use atelier_core::types::DbId;
use atelier_db::models::client::{Client, CreateClient, UpdateClient};
use atelier_db::repositories::ClientRepo;

use crate::error::{AppError, AppResult};
use crate::query::BulkIds;
use crate::response::{AffectedRows, DataResponse, PaginatedResponse};
use crate::state::AppState;

/// Query parameters for listing clients.
#[derive(Debug, Deserialize)]
pub struct ClientListParams {
    pub featured: Option<bool>,
    /// Case-insensitive substring search on the client name.
    pub q: Option<String>,
    pub page: Option<i64>,
    pub limit: Option<i64>,
}

/// GET /api/v1/clients
pub async fn list(
    State(state): State<AppState>,
    Query(params): Query<ClientListParams>,
) -> AppResult<Json<PaginatedResponse<Client>>> {
    let page = clamp_page(params.page);
    let page_size = clamp_page_size(params.limit);

    let result = ClientRepo::list(
        &state.pool,
        params.featured,
        params.q.as_deref(),
        page_size,
        offset(page, page_size),
    )
    .await?;

    Ok(Json(PaginatedResponse::new(
        result.items,
        result.total,
        page,
        page_size,
    )))
}

/// POST /api/v1/clients
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<CreateClient>,
) -> AppResult<(StatusCode, Json<DataResponse<Client>>)> {
    let client = ClientRepo::create(&state.pool, &input).await?;
    Ok((StatusCode::CREATED, Json(DataResponse { data: client })))
}

/// GET /api/v1/clients/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<DataResponse<Client>>> {
    let client = ClientRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Client",
            id,
        }))?;
    Ok(Json(DataResponse { data: client }))
}

/// PATCH /api/v1/clients/{id}
///
/// Partial update; also how the admin toggles the featured flag.
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateClient>,
) -> AppResult<Json<DataResponse<Client>>> {
    let client = ClientRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Client",
            id,
        }))?;
    Ok(Json(DataResponse { data: client }))
}

/// DELETE /api/v1/clients/{id}
pub async fn delete(State(state): State<AppState>, Path(id): Path<DbId>) -> AppResult<StatusCode> {
    let deleted = ClientRepo::delete(&state.pool, id).await?;
    if deleted {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::Core(CoreError::NotFound {
            entity: "Client",
            id,
        }))
    }
}

/// POST /api/v1/clients/bulk-delete
pub async fn bulk_delete(
    State(state): State<AppState>,
    Json(input): Json<BulkIds>,
) -> AppResult<Json<DataResponse<AffectedRows>>> {
    let affected = ClientRepo::bulk_delete(&state.pool, &input.ids).await?;

    tracing::info!(affected, "Clients bulk-deleted");
    Ok(Json(DataResponse {
        data: AffectedRows { affected },
    }))
}
