//! Route definitions for the `/clients` resource.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::client;
use crate::state::AppState;

/// Routes mounted at `/clients`.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(client::list).post(client::create))
        .route("/bulk-delete", post(client::bulk_delete))
        .route(
            "/{id}",
            get(client::get_by_id)
                .patch(client::update)
                .delete(client::delete),
        )
}
