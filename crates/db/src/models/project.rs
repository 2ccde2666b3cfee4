//! Project entity model and DTOs.

use atelier_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use crate::models::image::{CreateImage, Image};

/// A row from the `projects` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Project {
    pub id: DbId,
    pub title: String,
    pub slug: String,
    pub description: String,
    pub client_name: String,
    pub project_type: String,
    pub featured: bool,
    pub thumbnail: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// A project together with its gallery images, ordered by `sort_order`.
#[derive(Debug, Clone, Serialize)]
pub struct ProjectWithImages {
    #[serde(flatten)]
    pub project: Project,
    pub images: Vec<Image>,
}

/// DTO for creating a new project.
///
/// If `slug` is omitted it is derived from `title`. Image `sort_order`
/// values are assigned from the array index.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateProject {
    pub title: String,
    pub slug: Option<String>,
    pub description: String,
    pub client_name: String,
    pub project_type: String,
    pub featured: Option<bool>,
    pub thumbnail: Option<String>,
    #[serde(default)]
    pub images: Vec<CreateImage>,
}

/// DTO for updating an existing project. All fields are optional.
///
/// When `images` is present the entire image set is replaced; when absent
/// the existing images are left untouched.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateProject {
    pub title: Option<String>,
    pub slug: Option<String>,
    pub description: Option<String>,
    pub client_name: Option<String>,
    pub project_type: Option<String>,
    pub featured: Option<bool>,
    pub thumbnail: Option<String>,
    pub images: Option<Vec<CreateImage>>,
}

/// Filters for listing projects.
#[derive(Debug, Clone, Default)]
pub struct ProjectFilter {
    pub featured: Option<bool>,
    /// Case-insensitive substring match over title, client name, and
    /// description.
    pub search: Option<String>,
}

/// One page of projects plus the unfiltered-by-page total.
#[derive(Debug, Clone)]
pub struct ProjectPage {
    pub items: Vec<Project>,
    pub total: i64,
}
