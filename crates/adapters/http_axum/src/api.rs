//! JSON REST API handler modules.

#[allow(clippy::missing_errors_doc)]
pub mod routes;

use axum::Router;
use axum::routing::get;

use crate::state::AppState;

/// Build the `/api` sub-router.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/routes", get(routes::list))
        .route("/routes/resolve", get(routes::resolve))
}
