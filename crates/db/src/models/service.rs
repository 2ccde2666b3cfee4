//! Service entity model and DTOs.
//!
//! Services carry a dense 1..N `sort_order` maintained by the repository;
//! the admin reorders them one step at a time (move up / move down).

use atelier_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `services` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Service {
    pub id: DbId,
    pub title: String,
    pub description: String,
    pub icon: String,
    pub slug: String,
    pub sort_order: i32,
    pub created_at: Timestamp,
}

/// DTO for creating a new service. New services are appended to the end
/// of the display order.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateService {
    pub title: String,
    pub slug: Option<String>,
    pub description: String,
    pub icon: String,
}

/// DTO for updating an existing service. All fields are optional;
/// `sort_order` is only changed through the move operation.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateService {
    pub title: Option<String>,
    pub slug: Option<String>,
    pub description: Option<String>,
    pub icon: Option<String>,
}

/// Direction for a single-step reorder, deserialized straight from the
/// move request body.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MoveDirection {
    Up,
    Down,
}
