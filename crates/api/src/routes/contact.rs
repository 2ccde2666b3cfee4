//! Route definitions for the admin `/contacts` resource.

use axum::routing::{get, patch, post};
use axum::Router;

use crate::handlers::contact;
use crate::state::AppState;

/// Routes mounted at `/contacts`.
///
/// ```text
/// GET    /               -> list
/// POST   /bulk-delete    -> bulk_delete
/// POST   /bulk-status    -> bulk_update_status
/// GET    /{id}           -> get_by_id
/// DELETE /{id}           -> delete
/// PATCH  /{id}/status    -> update_status
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(contact::list))
        .route("/bulk-delete", post(contact::bulk_delete))
        .route("/bulk-status", post(contact::bulk_update_status))
        .route("/{id}", get(contact::get_by_id).delete(contact::delete))
        .route("/{id}/status", patch(contact::update_status))
}
