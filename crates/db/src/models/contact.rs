//! Contact submission model and DTOs.

use atelier_core::contact_status::ContactStatus;
use atelier_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `contacts` table.
///
/// `status` holds one of the values in
/// [`atelier_core::contact_status::VALID_CONTACT_STATUSES`]; the column
/// CHECK constraint keeps the two in sync.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Contact {
    pub id: DbId,
    pub name: String,
    pub email: String,
    pub company: Option<String>,
    pub project_type: Option<String>,
    pub budget: Option<String>,
    pub message: String,
    pub status: String,
    pub created_at: Timestamp,
}

/// DTO for recording a new contact submission. Status starts at NEW.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateContact {
    pub name: String,
    pub email: String,
    pub company: Option<String>,
    pub project_type: Option<String>,
    pub budget: Option<String>,
    pub message: String,
}

/// Filters for listing contact submissions.
#[derive(Debug, Clone, Default)]
pub struct ContactFilter {
    pub status: Option<ContactStatus>,
    /// Case-insensitive substring match over name, email, company, and
    /// message.
    pub search: Option<String>,
}

/// One page of contacts plus the total matching the filter.
#[derive(Debug, Clone)]
pub struct ContactPage {
    pub items: Vec<Contact>,
    pub total: i64,
}
