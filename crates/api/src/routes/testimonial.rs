//! Route definitions for the `/testimonials` resource.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::testimonial;
use crate::state::AppState;

/// Routes mounted at `/testimonials`.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(testimonial::list).post(testimonial::create))
        .route("/bulk-delete", post(testimonial::bulk_delete))
        .route(
            "/{id}",
            get(testimonial::get_by_id)
                .patch(testimonial::update)
                .delete(testimonial::delete),
        )
}
