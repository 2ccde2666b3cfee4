//! Project gallery image model and DTOs.
//!
//! Images belong exclusively to one project (`ON DELETE CASCADE`) and are
//! displayed in ascending `sort_order`.

use atelier_core::types::DbId;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `project_images` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Image {
    pub id: DbId,
    pub project_id: DbId,
    pub url: String,
    pub alt: Option<String>,
    pub sort_order: i32,
}

/// DTO for an image within a project create or image-set replacement.
///
/// `sort_order` is never supplied by the caller; it is assigned from the
/// position in the submitted array.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateImage {
    pub url: String,
    pub alt: Option<String>,
}
