//! Shell hosting — the `/app-config.js` bootstrap and the single-page-app
//! static fallback.
//!
//! The fallback mirrors how the shell expects to be hosted: files that
//! exist under the assets directory are served as-is, asset-looking paths
//! that do not exist are a hard 404, and any other path is answered with
//! `index.html` only when the route table resolves it. Unresolvable paths
//! surface the table's `NotFound` as a plain 404.

use axum::extract::{Request, State};
use axum::http::{Method, StatusCode, header};
use axum::response::{IntoResponse, Response};
use tower::ServiceExt;
use tower_http::services::ServeFile;

use crate::state::AppState;

/// `GET /app-config.js` — JS bootstrap exposing the configured base path.
///
/// Served with `Cache-Control: no-store` so a base-path change takes
/// effect without a cache flush.
pub async fn app_config(State(state): State<AppState>) -> Response {
    let payload = serde_json::to_string(state.base_prefix.as_ref())
        .unwrap_or_else(|_| String::from("\"\""));
    (
        [
            (header::CONTENT_TYPE, "application/javascript; charset=utf-8"),
            (header::CACHE_CONTROL, "no-store"),
        ],
        format!("window.__PULSEDASH_BASE_PATH__ = {payload};"),
    )
        .into_response()
}

/// Fallback handler for everything the API router does not claim.
pub async fn serve_shell(State(state): State<AppState>, req: Request) -> Response {
    if req.method() != Method::GET && req.method() != Method::HEAD {
        return StatusCode::NOT_FOUND.into_response();
    }
    let path = req.uri().path().to_owned();
    if path == "/api" || path.starts_with("/api/") {
        return StatusCode::NOT_FOUND.into_response();
    }

    let clean = clean_path(&path);
    if clean.is_empty() || clean == "index.html" {
        return serve_index(&state, req).await;
    }

    let candidate = state.assets_dir.join(&clean);
    if tokio::fs::metadata(&candidate)
        .await
        .is_ok_and(|meta| meta.is_file())
    {
        return serve_file(candidate, req).await;
    }

    let base_name = clean.rsplit('/').next().unwrap_or_default();
    if clean.starts_with("assets/") || base_name.contains('.') {
        return StatusCode::NOT_FOUND.into_response();
    }

    match state.routes.resolve(&path) {
        Ok(_) => serve_index(&state, req).await,
        Err(err) => {
            tracing::debug!(%path, error = %err, "no route for requested path");
            StatusCode::NOT_FOUND.into_response()
        }
    }
}

async fn serve_index(state: &AppState, req: Request) -> Response {
    serve_file(state.assets_dir.join("index.html"), req).await
}

async fn serve_file(path: std::path::PathBuf, req: Request) -> Response {
    // ServeFile answers 404 itself when the file is missing and handles
    // HEAD, range requests, and content-type detection.
    match ServeFile::new(path).oneshot(req).await {
        Ok(response) => response.into_response(),
        Err(never) => match never {},
    }
}

/// Collapse `.`/`..`/empty segments and strip the leading slash, yielding a
/// path safe to join onto the assets directory.
fn clean_path(path: &str) -> String {
    let mut segments: Vec<&str> = Vec::new();
    for segment in path.split('/') {
        match segment {
            "" | "." => {}
            ".." => {
                segments.pop();
            }
            other => segments.push(other),
        }
    }
    segments.join("/")
}

#[cfg(test)]
mod tests {
    use super::clean_path;

    #[test]
    fn should_strip_leading_slash() {
        assert_eq!(clean_path("/assets/app.js"), "assets/app.js");
    }

    #[test]
    fn should_collapse_dot_segments() {
        assert_eq!(clean_path("/a/./b//c"), "a/b/c");
        assert_eq!(clean_path("/a/../b"), "b");
    }

    #[test]
    fn should_not_escape_the_root() {
        assert_eq!(clean_path("/../../etc/passwd"), "etc/passwd");
    }

    #[test]
    fn should_clean_root_to_empty() {
        assert_eq!(clean_path("/"), "");
        assert_eq!(clean_path(""), "");
    }
}
