//! API route configuration.

use crate::api::handlers::{
    confirm_logo_handler, create_company_handler, delete_company_handler, get_company_handler,
    health_handler, issue_logo_upload_handler, list_companies_handler, revoke_logo_handler,
    update_company_handler,
};
use crate::state::AppState;
use axum::{
    Router,
    routing::{get, post},
};

/// Company and logo routes.
///
/// # Endpoints
///
/// - `GET    /companies`            - List companies
/// - `POST   /companies`            - Create a company
/// - `GET    /companies/{id}`       - Fetch a company
/// - `PUT    /companies/{id}`       - Partially update a company
/// - `DELETE /companies/{id}`       - Delete a company
/// - `POST   /companies/{id}/logo`  - Issue a logo upload credential
/// - `PUT    /companies/{id}/logo`  - Record an uploaded logo
/// - `DELETE /companies/{id}/logo`  - Delete the logo
pub fn company_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/companies",
            get(list_companies_handler).post(create_company_handler),
        )
        .route(
            "/companies/{id}",
            get(get_company_handler)
                .put(update_company_handler)
                .delete(delete_company_handler),
        )
        .route(
            "/companies/{id}/logo",
            post(issue_logo_upload_handler)
                .put(confirm_logo_handler)
                .delete(revoke_logo_handler),
        )
}

/// Operational routes.
///
/// - `GET /health` - Database and object storage reachability
pub fn health_routes() -> Router<AppState> {
    Router::new().route("/health", get(health_handler))
}
