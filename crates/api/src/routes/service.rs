//! Route definitions for the `/services` resource.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::service;
use crate::state::AppState;

/// Routes mounted at `/services`.
///
/// ```text
/// GET    /              -> list (display order)
/// POST   /              -> create (appended to the end)
/// POST   /bulk-delete   -> bulk_delete
/// GET    /{id}          -> get_by_id
/// PATCH  /{id}          -> update
/// DELETE /{id}          -> delete
/// POST   /{id}/move     -> move_service (one step up or down)
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(service::list).post(service::create))
        .route("/bulk-delete", post(service::bulk_delete))
        .route(
            "/{id}",
            get(service::get_by_id)
                .patch(service::update)
                .delete(service::delete),
        )
        .route("/{id}/move", post(service::move_service))
}
