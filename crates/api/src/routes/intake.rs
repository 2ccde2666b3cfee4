//! Route definitions for the public intake endpoints.

use axum::routing::post;
use axum::Router;

use crate::handlers::intake;
use crate::state::AppState;

/// Public form routes, merged directly into `/api/v1`.
///
/// ```text
/// POST /contact      -> submit_contact
/// POST /newsletter   -> subscribe_newsletter
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/contact", post(intake::submit_contact))
        .route("/newsletter", post(intake::subscribe_newsletter))
}
