//! # pulsedash-adapter-http-axum
//!
//! HTTP adapter built on [axum](https://docs.rs/axum).
//!
//! ## Responsibilities
//! - Serve the **route-table JSON API** the shell UI consumes
//!   (`/api/routes`, `/api/routes/resolve`)
//! - Serve the **`/app-config.js` bootstrap** exposing the configured
//!   base path to the browser before the shell loads
//! - Serve the shell's **static assets** with single-page-app fallback:
//!   paths the route table resolves get `index.html`, everything else
//!   is a plain 404
//! - Rewrite requests when the dashboard is hosted under a base prefix
//! - Map domain results into HTTP responses
//!
//! ## Dependency rule
//! Depends on `pulsedash-domain` for the route table and base-path rules.
//! Never leaks axum types into the domain.

pub mod api;
pub mod base_path;
pub mod error;
pub mod router;
pub mod shell;
pub mod state;
