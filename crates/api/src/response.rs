//! Shared response envelope types for API handlers.
//!
//! All API responses use a `{ "data": ... }` envelope; paginated lists
//! add a `pagination` block. Use these instead of ad-hoc
//! `serde_json::json!` to get compile-time type safety and consistent
//! serialization.

use atelier_core::pagination::page_count;
use serde::Serialize;

/// Standard `{ "data": T }` response envelope.
#[derive(Debug, Serialize)]
pub struct DataResponse<T: Serialize> {
    pub data: T,
}

/// Pagination block accompanying a paginated list.
#[derive(Debug, Serialize)]
pub struct Pagination {
    pub total: i64,
    pub page: i64,
    pub page_size: i64,
    pub page_count: i64,
}

/// Result payload for bulk operations: how many rows were touched.
#[derive(Debug, Serialize)]
pub struct AffectedRows {
    pub affected: u64,
}

/// `{ "data": [...], "pagination": {...} }` envelope for list endpoints.
#[derive(Debug, Serialize)]
pub struct PaginatedResponse<T: Serialize> {
    pub data: Vec<T>,
    pub pagination: Pagination,
}

impl<T: Serialize> PaginatedResponse<T> {
    /// Assemble a page envelope; `page_count` is derived from the total.
    pub fn new(data: Vec<T>, total: i64, page: i64, page_size: i64) -> Self {
        Self {
            data,
            pagination: Pagination {
                total,
                page,
                page_size,
                page_count: page_count(total, page_size),
            },
        }
    }
}
