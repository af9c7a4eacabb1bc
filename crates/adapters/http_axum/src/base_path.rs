//! Base-prefix request rewriting.
//!
//! When the dashboard is hosted under a prefix (e.g. `/pulse`), requests
//! arrive as `/pulse/daily` while the route table and the API router speak
//! unprefixed paths. This middleware redirects the bare prefix to
//! `prefix/`, strips the prefix from matching requests, lets shared asset
//! paths through untouched, and rejects everything else.

use axum::extract::{Request, State};
use axum::http::uri::Uri;
use axum::http::{StatusCode, header};
use axum::middleware::Next;
use axum::response::{IntoResponse, Response};

use crate::state::AppState;

/// Middleware entry point; wire with `axum::middleware::from_fn_with_state`.
pub async fn rewrite(State(state): State<AppState>, mut req: Request, next: Next) -> Response {
    let prefix = state.base_prefix.as_ref();
    if prefix.is_empty() {
        return next.run(req).await;
    }

    let path = req.uri().path().to_owned();
    if path == prefix {
        return (
            StatusCode::FOUND,
            [(header::LOCATION, format!("{prefix}/"))],
        )
            .into_response();
    }

    let with_slash = format!("{prefix}/");
    if path.starts_with(&with_slash) {
        let stripped = path.strip_prefix(prefix).unwrap_or("/");
        let path_and_query = match req.uri().query() {
            Some(query) => format!("{stripped}?{query}"),
            None => stripped.to_owned(),
        };

        let mut parts = req.uri().clone().into_parts();
        match path_and_query.parse() {
            Ok(path_and_query) => parts.path_and_query = Some(path_and_query),
            Err(_) => return StatusCode::BAD_REQUEST.into_response(),
        }
        match Uri::from_parts(parts) {
            Ok(uri) => *req.uri_mut() = uri,
            Err(_) => return StatusCode::BAD_REQUEST.into_response(),
        }
        return next.run(req).await;
    }

    if is_shared_asset_path(&path) {
        return next.run(req).await;
    }

    StatusCode::NOT_FOUND.into_response()
}

/// Paths served identically with or without the base prefix, so reverse
/// proxies and bookmarks keep working during a prefix migration.
fn is_shared_asset_path(path: &str) -> bool {
    matches!(path, "/app-config.js" | "/favicon.svg" | "/brand-mark.svg")
        || path.starts_with("/assets/")
}
