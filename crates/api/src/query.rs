//! Shared query parameter types for API handlers.
//!
//! Common query structs that appear across multiple handler modules are
//! extracted here to avoid duplication.

use serde::Deserialize;

/// Generic pagination parameters (`?page=&limit=`).
///
/// `page` is 1-based. Values are clamped via
/// `atelier_core::pagination::{clamp_page, clamp_page_size}` before they
/// reach the repository layer.
#[derive(Debug, Deserialize)]
pub struct PageParams {
    pub page: Option<i64>,
    pub limit: Option<i64>,
}

/// Request body for bulk-delete endpoints.
#[derive(Debug, Deserialize)]
pub struct BulkIds {
    pub ids: Vec<i64>,
}
