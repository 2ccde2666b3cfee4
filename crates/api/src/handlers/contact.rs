//! Handlers for the admin-facing `/contacts` resource.
//!
//! Intake (the public form) lives in [`crate::handlers::intake`]; these
//! endpoints are the triage side: list, inspect, move through the status
//! lifecycle, and clean up.

use axum::extract::{Path, Query, State};
use axum::Json;
use axum::http::StatusCode;
use serde::Deserialize;

use atelier_core::contact_status::ContactStatus;
use atelier_core::error::CoreError;
use atelier_core::pagination::{clamp_page, clamp_page_size, offset};
use atelier_core::types::DbId;
use atelier_db::models::contact::{Contact, ContactFilter};
use atelier_db::repositories::ContactRepo;

use crate::error::{AppError, AppResult};
use crate::query::BulkIds;
use crate::response::{AffectedRows, DataResponse, PaginatedResponse};
use crate::state::AppState;

/// Query parameters for listing contact submissions.
#[derive(Debug, Deserialize)]
pub struct ContactListParams {
    pub status: Option<String>,
    /// Case-insensitive substring search over name, email, company, and
    /// message.
    pub q: Option<String>,
    pub page: Option<i64>,
    pub limit: Option<i64>,
}

/// Request body for single and bulk status updates.
#[derive(Debug, Deserialize)]
pub struct StatusRequest {
    pub status: String,
}

/// Request body for bulk status updates.
#[derive(Debug, Deserialize)]
pub struct BulkStatusRequest {
    pub ids: Vec<DbId>,
    pub status: String,
}

/// GET /api/v1/contacts
pub async fn list(
    State(state): State<AppState>,
    Query(params): Query<ContactListParams>,
) -> AppResult<Json<PaginatedResponse<Contact>>> {
    let status = params
        .status
        .as_deref()
        .map(ContactStatus::from_str)
        .transpose()?;

    let page = clamp_page(params.page);
    let page_size = clamp_page_size(params.limit);

    let filter = ContactFilter {
        status,
        search: params.q,
    };
    let result = ContactRepo::list(&state.pool, &filter, page_size, offset(page, page_size))
        .await?;

    Ok(Json(PaginatedResponse::new(
        result.items,
        result.total,
        page,
        page_size,
    )))
}

/// GET /api/v1/contacts/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<DataResponse<Contact>>> {
    let contact = ContactRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Contact",
            id,
        }))?;
    Ok(Json(DataResponse { data: contact }))
}

/// PATCH /api/v1/contacts/{id}/status
pub async fn update_status(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<StatusRequest>,
) -> AppResult<Json<DataResponse<Contact>>> {
    let status = ContactStatus::from_str(&input.status)?;

    let contact = ContactRepo::update_status(&state.pool, id, status)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Contact",
            id,
        }))?;

    tracing::info!(contact_id = id, status = status.as_str(), "Contact status updated");
    Ok(Json(DataResponse { data: contact }))
}

/// POST /api/v1/contacts/bulk-status
pub async fn bulk_update_status(
    State(state): State<AppState>,
    Json(input): Json<BulkStatusRequest>,
) -> AppResult<Json<DataResponse<AffectedRows>>> {
    let status = ContactStatus::from_str(&input.status)?;
    let affected = ContactRepo::bulk_update_status(&state.pool, &input.ids, status).await?;

    tracing::info!(affected, status = status.as_str(), "Contacts bulk status update");
    Ok(Json(DataResponse {
        data: AffectedRows { affected },
    }))
}

/// DELETE /api/v1/contacts/{id}
pub async fn delete(State(state): State<AppState>, Path(id): Path<DbId>) -> AppResult<StatusCode> {
    let deleted = ContactRepo::delete(&state.pool, id).await?;
    if deleted {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::Core(CoreError::NotFound {
            entity: "Contact",
            id,
        }))
    }
}

/// POST /api/v1/contacts/bulk-delete
pub async fn bulk_delete(
    State(state): State<AppState>,
    Json(input): Json<BulkIds>,
) -> AppResult<Json<DataResponse<AffectedRows>>> {
    let affected = ContactRepo::bulk_delete(&state.pool, &input.ids).await?;

    tracing::info!(affected, "Contacts bulk-deleted");
    Ok(Json(DataResponse {
        data: AffectedRows { affected },
    }))
}
