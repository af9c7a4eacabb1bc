//! End-to-end smoke tests for the full pulsedashd stack.
//!
//! Each test spins up the complete application (standard route table, real
//! state, real axum router) and exercises the HTTP layer via
//! `tower::ServiceExt::oneshot` — no TCP port is bound.

use std::path::PathBuf;

use axum::body::Body;
use axum::http::{Request, StatusCode};
use http_body_util::BodyExt;
use pulsedash_adapter_http_axum::router;
use pulsedash_adapter_http_axum::state::AppState;
use pulsedash_domain::table::RouteTable;
use tower::ServiceExt;

/// Build a fully-wired router around a temporary shell asset directory.
fn app(test: &str, base_path: &str) -> axum::Router {
    let assets = std::env::temp_dir().join(format!("pulsedashd-{}-{test}", std::process::id()));
    std::fs::create_dir_all(&assets).expect("temp assets dir should be writable");
    std::fs::write(
        assets.join("index.html"),
        "<!doctype html><div id=\"app\"></div>",
    )
    .expect("index.html should be writable");

    router::build(AppState::new(RouteTable::standard(), base_path, assets))
}

/// Build a router whose assets directory does not exist.
fn app_without_assets() -> axum::Router {
    router::build(AppState::new(
        RouteTable::standard(),
        "",
        PathBuf::from("/nonexistent/pulsedashd-assets"),
    ))
}

async fn get(app: axum::Router, uri: &str) -> axum::response::Response {
    app.oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap()
}

// ---------------------------------------------------------------------------
// Health check
// ---------------------------------------------------------------------------

#[tokio::test]
async fn should_return_ok_when_health_check_called() {
    let resp = get(app_without_assets(), "/health").await;
    assert_eq!(resp.status(), StatusCode::OK);
}

// ---------------------------------------------------------------------------
// Route table API
// ---------------------------------------------------------------------------

#[tokio::test]
async fn should_expose_the_full_route_table() {
    let resp = get(app_without_assets(), "/api/routes").await;
    assert_eq!(resp.status(), StatusCode::OK);

    let bytes = resp.into_body().collect().await.unwrap().to_bytes();
    let json: serde_json::Value = serde_json::from_slice(&bytes).unwrap();

    let routes = json["routes"].as_array().unwrap();
    let paths: Vec<_> = routes.iter().map(|route| route["path"].as_str().unwrap()).collect();
    assert_eq!(paths, ["/", "/daily", "/realtime", "/logs", "/settings"]);

    for route in routes {
        assert!(!route["meta"]["sidebarLabelKey"].as_str().unwrap().is_empty());
        assert!(!route["meta"]["sidebarHintKey"].as_str().unwrap().is_empty());
    }
}

#[tokio::test]
async fn should_resolve_each_page_and_reject_unknown() {
    for (path, name) in [
        ("/", "overview"),
        ("/daily", "daily"),
        ("/realtime", "realtime"),
        ("/logs", "logs"),
        ("/settings", "settings"),
    ] {
        let resp = get(
            app_without_assets(),
            &format!("/api/routes/resolve?path={path}"),
        )
        .await;
        assert_eq!(resp.status(), StatusCode::OK, "path {path}");

        let bytes = resp.into_body().collect().await.unwrap().to_bytes();
        let json: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(json["name"], name);
    }

    let resp = get(app_without_assets(), "/api/routes/resolve?path=/unknown").await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

// ---------------------------------------------------------------------------
// Shell hosting
// ---------------------------------------------------------------------------

#[tokio::test]
async fn should_serve_the_shell_for_dashboard_pages() {
    let app = app("shell", "");
    for path in ["/", "/daily", "/settings"] {
        let resp = get(app.clone(), path).await;
        assert_eq!(resp.status(), StatusCode::OK, "path {path}");
    }

    let resp = get(app, "/unknown").await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn should_serve_everything_behind_a_base_prefix() {
    let app = app("prefix", "pulse");

    let resp = get(app.clone(), "/pulse").await;
    assert_eq!(resp.status(), StatusCode::FOUND);

    let resp = get(app.clone(), "/pulse/daily").await;
    assert_eq!(resp.status(), StatusCode::OK);

    let resp = get(app.clone(), "/pulse/api/routes").await;
    assert_eq!(resp.status(), StatusCode::OK);

    let resp = get(app.clone(), "/daily").await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    let resp = get(app, "/app-config.js").await;
    assert_eq!(resp.status(), StatusCode::OK);

    let resp = get(app_without_assets(), "/app-config.js").await;
    assert_eq!(resp.status(), StatusCode::OK);
}
