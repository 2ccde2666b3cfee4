//! Route definitions, one module per resource.

pub mod client;
pub mod contact;
pub mod health;
pub mod intake;
pub mod project;
pub mod service;
pub mod testimonial;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /projects                      list, create
/// /projects/bulk-delete          bulk delete (POST)
/// /projects/{id}                 get, patch, delete
///
/// /clients                       list, create
/// /clients/bulk-delete           bulk delete (POST)
/// /clients/{id}                  get, patch, delete
///
/// /testimonials                  list, create
/// /testimonials/bulk-delete      bulk delete (POST)
/// /testimonials/{id}             get, patch, delete
///
/// /services                      list (ordered), create
/// /services/bulk-delete          bulk delete (POST)
/// /services/{id}                 get, patch, delete
/// /services/{id}/move            move up/down (POST)
///
/// /contacts                      list
/// /contacts/bulk-delete          bulk delete (POST)
/// /contacts/bulk-status          bulk status update (POST)
/// /contacts/{id}                 get, delete
/// /contacts/{id}/status          status update (PATCH)
///
/// /contact                       public contact form (POST)
/// /newsletter                    public newsletter signup (POST)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/projects", project::router())
        .nest("/clients", client::router())
        .nest("/testimonials", testimonial::router())
        .nest("/services", service::router())
        .nest("/contacts", contact::router())
        .merge(intake::router())
}
