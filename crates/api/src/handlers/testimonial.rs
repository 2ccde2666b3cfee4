//! Handlers for the `/testimonials` resource.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;

use atelier_core::error::CoreError;
use atelier_core::pagination::{clamp_page, clamp_page_size, offset};
use atelier_core::types::DbId;
use atelier_db::models::testimonial::{CreateTestimonial, Testimonial, UpdateTestimonial};
use atelier_db::repositories::TestimonialRepo;

use crate::error::{AppError, AppResult};
use crate::query::BulkIds;
use crate::response::{AffectedRows, DataResponse, PaginatedResponse};
use crate::state::AppState;

/// Query parameters for listing testimonials.
#[derive(Debug, Deserialize)]
pub struct TestimonialListParams {
    pub featured: Option<bool>,
    /// Case-insensitive substring search over name, company, and position.
    pub q: Option<String>,
    pub page: Option<i64>,
    pub limit: Option<i64>,
}

/// GET /api/v1/testimonials
pub async fn list(
    State(state): State<AppState>,
    Query(params): Query<TestimonialListParams>,
) -> AppResult<Json<PaginatedResponse<Testimonial>>> {
    let page = clamp_page(params.page);
    let page_size = clamp_page_size(params.limit);

    let result = TestimonialRepo::list(
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

/// POST /api/v1/testimonials
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<CreateTestimonial>,
) -> AppResult<(StatusCode, Json<DataResponse<Testimonial>>)> {
    let testimonial = TestimonialRepo::create(&state.pool, &input).await?;
    Ok((
        StatusCode::CREATED,
        Json(DataResponse { data: testimonial }),
    ))
}

/// GET /api/v1/testimonials/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<DataResponse<Testimonial>>> {
    let testimonial = TestimonialRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Testimonial",
            id,
        }))?;
    Ok(Json(DataResponse { data: testimonial }))
}

/// PATCH /api/v1/testimonials/{id}
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateTestimonial>,
) -> AppResult<Json<DataResponse<Testimonial>>> {
    let testimonial = TestimonialRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Testimonial",
            id,
        }))?;
    Ok(Json(DataResponse { data: testimonial }))
}

/// DELETE /api/v1/testimonials/{id}
pub async fn delete(State(state): State<AppState>, Path(id): Path<DbId>) -> AppResult<StatusCode> {
    let deleted = TestimonialRepo::delete(&state.pool, id).await?;
    if deleted {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::Core(CoreError::NotFound {
            entity: "Testimonial",
            id,
        }))
    }
}

/// POST /api/v1/testimonials/bulk-delete
pub async fn bulk_delete(
    State(state): State<AppState>,
    Json(input): Json<BulkIds>,
) -> AppResult<Json<DataResponse<AffectedRows>>> {
    let affected = TestimonialRepo::bulk_delete(&state.pool, &input.ids).await?;

    tracing::info!(affected, "Testimonials bulk-deleted");
    Ok(Json(DataResponse {
        data: AffectedRows { affected },
    }))
}
