//! Testimonial entity model and DTOs.

use atelier_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `testimonials` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Testimonial {
    pub id: DbId,
    pub name: String,
    pub position: String,
    pub company: String,
    pub content: String,
    pub avatar: Option<String>,
    pub featured: bool,
    pub created_at: Timestamp,
}

/// DTO for creating a new testimonial.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateTestimonial {
    pub name: String,
    pub position: String,
    pub company: String,
    pub content: String,
    pub avatar: Option<String>,
    pub featured: Option<bool>,
}

/// DTO for updating an existing testimonial. All fields are optional.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateTestimonial {
    pub name: Option<String>,
    pub position: Option<String>,
    pub company: Option<String>,
    pub content: Option<String>,
    pub avatar: Option<String>,
    pub featured: Option<bool>,
}

/// One page of testimonials plus the total matching the filter.
#[derive(Debug, Clone)]
pub struct TestimonialPage {
    pub items: Vec<Testimonial>,
    pub total: i64,
}
