//! Public form intake: the contact form and the newsletter signup.
//!
//! These are the only unauthenticated write paths on the site. Both
//! respond with the `{ "success": true, "message": ... }` envelope the
//! front end's toast layer expects, and 400 with an error payload when
//! validation fails.

use axum::extract::{FromRequest, State};
use axum::Json;
use serde::{Deserialize, Serialize};
use validator::Validate;

use atelier_db::models::contact::CreateContact;
use atelier_db::repositories::ContactRepo;

use crate::error::{AppError, AppResult};
use crate::state::AppState;

/// JSON extractor for the public forms. The admin API keeps axum's
/// default rejection; the forms promise a 400 with an error payload for
/// any unusable body, including one missing a required field entirely.
#[derive(FromRequest)]
#[from_request(via(Json), rejection(AppError))]
pub struct IntakeJson<T>(pub T);

/// Response envelope for both intake endpoints.
#[derive(Debug, Serialize)]
pub struct IntakeResponse {
    pub success: bool,
    pub message: String,
}

/// Contact form payload. `company` and `budget` are optional on the form.
#[derive(Debug, Deserialize, Validate)]
pub struct ContactFormRequest {
    #[validate(length(min = 1, message = "name is required"))]
    pub name: String,
    #[validate(email(message = "a valid email is required"))]
    pub email: String,
    pub company: Option<String>,
    #[validate(length(min = 1, message = "project_type is required"))]
    pub project_type: String,
    pub budget: Option<String>,
    #[validate(length(min = 1, message = "message is required"))]
    pub message: String,
}

/// Newsletter signup payload.
#[derive(Debug, Deserialize, Validate)]
pub struct NewsletterRequest {
    #[validate(email(message = "a valid email is required"))]
    pub email: String,
}

/// Flatten validator output into one human-readable message.
fn validation_message(errors: &validator::ValidationErrors) -> String {
    let mut parts: Vec<String> = errors
        .field_errors()
        .into_iter()
        .flat_map(|(field, errs)| {
            errs.iter().map(move |e| {
                e.message
                    .as_ref()
                    .map(|m| m.to_string())
                    .unwrap_or_else(|| format!("{field} is invalid"))
            })
        })
        .collect();
    parts.sort();
    parts.join("; ")
}

/// POST /api/v1/contact
///
/// Persists the submission with status NEW so it shows up in the admin
/// contacts screen. Email notification delivery is out of scope.
pub async fn submit_contact(
    State(state): State<AppState>,
    IntakeJson(input): IntakeJson<ContactFormRequest>,
) -> AppResult<Json<IntakeResponse>> {
    input
        .validate()
        .map_err(|e| AppError::BadRequest(validation_message(&e)))?;

    let contact = ContactRepo::create(
        &state.pool,
        &CreateContact {
            name: input.name,
            email: input.email,
            company: input.company,
            project_type: Some(input.project_type),
            budget: input.budget,
            message: input.message,
        },
    )
    .await?;

    tracing::info!(contact_id = contact.id, "Contact form submission received");
    Ok(Json(IntakeResponse {
        success: true,
        message: "Thanks for reaching out. We'll get back to you shortly.".into(),
    }))
}

/// POST /api/v1/newsletter
///
/// There is no subscriber table; the address is logged for the (stubbed)
/// mailing list integration to pick up.
pub async fn subscribe_newsletter(
    IntakeJson(input): IntakeJson<NewsletterRequest>,
) -> AppResult<Json<IntakeResponse>> {
    input
        .validate()
        .map_err(|e| AppError::BadRequest(validation_message(&e)))?;

    tracing::info!(email = %input.email, "Newsletter signup received");
    Ok(Json(IntakeResponse {
        success: true,
        message: "You're on the list.".into(),
    }))
}
