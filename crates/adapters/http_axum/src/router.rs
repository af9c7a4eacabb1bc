//! Axum router assembly.

use axum::Router;
use axum::middleware;
use axum::routing::get;
use tower_http::trace::TraceLayer;

use crate::state::AppState;

/// Build the top-level axum [`Router`].
///
/// Nests the JSON API under `/api`, serves the `/app-config.js` bootstrap,
/// and hands everything else to the single-page-app fallback. The base-path
/// rewrite runs before routing so the whole surface works behind a prefix.
/// Includes a [`TraceLayer`] that logs each HTTP request/response at the
/// `DEBUG` level using the `tracing` ecosystem.
pub fn build(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health_check))
        .nest("/api", crate::api::router())
        .route("/app-config.js", get(crate::shell::app_config))
        .fallback(crate::shell::serve_shell)
        .layer(middleware::from_fn_with_state(
            state.clone(),
            crate::base_path::rewrite,
        ))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn health_check() -> &'static str {
    "OK"
}
