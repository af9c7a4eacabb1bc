//! Shared application state for axum handlers.

use std::path::PathBuf;
use std::sync::Arc;

use pulsedash_domain::base_path;
use pulsedash_domain::table::RouteTable;

/// Application state shared across all axum handlers.
///
/// The route table is built once at startup and injected here; handlers
/// only ever read it. Cloning is cheap — every field is behind an `Arc`.
#[derive(Clone)]
pub struct AppState {
    /// The immutable dashboard route table.
    pub routes: Arc<RouteTable>,
    /// Normalized base-path prefix with a leading slash, or `""` when the
    /// dashboard is hosted at the server root.
    pub base_prefix: Arc<str>,
    /// Directory holding the shell's built assets (`index.html`, …).
    pub assets_dir: Arc<PathBuf>,
}

impl AppState {
    /// Create the state from a route table and shell settings.
    ///
    /// `base_path` may be raw operator input; it is normalized through
    /// [`base_path::prefix`] here so handlers never re-derive it.
    #[must_use]
    pub fn new(routes: RouteTable, base_path: &str, assets_dir: PathBuf) -> Self {
        Self {
            routes: Arc::new(routes),
            base_prefix: Arc::from(base_path::prefix(base_path)),
            assets_dir: Arc::new(assets_dir),
        }
    }
}
