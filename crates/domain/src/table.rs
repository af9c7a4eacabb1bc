//! Route table — the immutable ordered list of navigable pages.
//!
//! Built once at application startup and passed explicitly (typically
//! behind an `Arc`) to whatever shell component needs it; there is no
//! global mutable state. Resolution is exact-path matching over the
//! ordered list — the table carries no parameterised routes.

use serde::Serialize;

use crate::error::{NotFoundError, PulseDashError, ValidationError};
use crate::route::{PageView, RouteDefinition, RouteMeta, RouteProps};

/// Viewport position applied by the shell after a navigation completes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ScrollTarget {
    /// Offset from the top of the viewport, in pixels.
    pub top: u32,
}

impl ScrollTarget {
    /// Top of the viewport.
    pub const TOP: Self = Self { top: 0 };
}

/// How the shell derives the active path from the browser location.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum NavigationMode {
    /// Path-based navigation via the history API.
    #[default]
    History,
    /// Fragment-based navigation (`#/daily`).
    Hash,
}

/// Ordered, immutable collection of [`RouteDefinition`]s.
#[derive(Debug, Clone)]
pub struct RouteTable {
    routes: Vec<RouteDefinition>,
    mode: NavigationMode,
}

impl RouteTable {
    /// Build a table from an ordered list of definitions, asserting the
    /// table-wide invariants.
    ///
    /// # Errors
    ///
    /// Returns [`PulseDashError::Validation`] when any definition fails its
    /// own invariants, or when two definitions share a `path` or a `name`.
    pub fn new(routes: Vec<RouteDefinition>) -> Result<Self, PulseDashError> {
        for (index, route) in routes.iter().enumerate() {
            route.validate()?;
            for earlier in &routes[..index] {
                if earlier.path == route.path {
                    return Err(ValidationError::DuplicatePath {
                        path: route.path.clone(),
                    }
                    .into());
                }
                if earlier.name == route.name {
                    return Err(ValidationError::DuplicateName {
                        name: route.name.clone(),
                    }
                    .into());
                }
            }
        }
        Ok(Self {
            routes,
            mode: NavigationMode::History,
        })
    }

    /// The built-in dashboard table: Overview, Daily, Realtime, Logs, and
    /// Settings, with path-based navigation and no base prefix.
    ///
    /// The definitions are static data; `should_validate_standard_table`
    /// asserts they satisfy the [`Self::new`] invariants.
    #[must_use]
    pub fn standard() -> Self {
        Self {
            routes: standard_routes(),
            mode: NavigationMode::History,
        }
    }

    /// Resolve a requested path to its route definition.
    ///
    /// Matching is exact; `/daily/` does not match `/daily`.
    ///
    /// # Errors
    ///
    /// Returns [`PulseDashError::NotFound`] when no definition's path
    /// equals the input. The hosting shell decides how to surface that
    /// (typically a not-found view).
    pub fn resolve(&self, path: &str) -> Result<&RouteDefinition, PulseDashError> {
        self.routes
            .iter()
            .find(|route| route.path == path)
            .ok_or_else(|| {
                NotFoundError::Route {
                    path: path.to_owned(),
                }
                .into()
            })
    }

    /// Project a resolved route to the metadata the shell UI consumes.
    #[must_use]
    pub fn metadata_for<'a>(&self, route: &'a RouteDefinition) -> &'a RouteMeta {
        &route.meta
    }

    /// Scroll behaviour applied after every successful navigation.
    ///
    /// Deliberately ignores both endpoints: every navigation, including
    /// in-page anchor navigation and `from == to`, resets the viewport to
    /// the top.
    #[must_use]
    pub fn on_navigate(&self, _from: &str, _to: &str) -> ScrollTarget {
        ScrollTarget::TOP
    }

    /// Ordered iteration, e.g. for building the sidebar.
    pub fn iter(&self) -> std::slice::Iter<'_, RouteDefinition> {
        self.routes.iter()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.routes.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }

    /// Navigation mode the shell should configure.
    #[must_use]
    pub fn mode(&self) -> NavigationMode {
        self.mode
    }
}

impl<'a> IntoIterator for &'a RouteTable {
    type Item = &'a RouteDefinition;
    type IntoIter = std::slice::Iter<'a, RouteDefinition>;

    fn into_iter(self) -> Self::IntoIter {
        self.routes.iter()
    }
}

fn standard_routes() -> Vec<RouteDefinition> {
    vec![
        RouteDefinition {
            path: "/".to_owned(),
            name: "overview".to_owned(),
            view: PageView::Overview,
            meta: RouteMeta {
                sidebar_label_key: "app.sidebar.recentActive".to_owned(),
                sidebar_hint_key: "app.sidebar.recentActiveHint".to_owned(),
                main_class: String::new(),
            },
            props: None,
        },
        RouteDefinition {
            path: "/daily".to_owned(),
            name: "daily".to_owned(),
            view: PageView::Daily,
            meta: RouteMeta {
                sidebar_label_key: "app.menu.daily".to_owned(),
                sidebar_hint_key: "app.sidebar.dailyHint".to_owned(),
                main_class: "daily-page".to_owned(),
            },
            props: None,
        },
        RouteDefinition {
            path: "/realtime".to_owned(),
            name: "realtime".to_owned(),
            view: PageView::Realtime,
            meta: RouteMeta {
                sidebar_label_key: "app.menu.realtime".to_owned(),
                sidebar_hint_key: "app.sidebar.realtimeHint".to_owned(),
                main_class: "realtime-page".to_owned(),
            },
            props: None,
        },
        RouteDefinition {
            path: "/logs".to_owned(),
            name: "logs".to_owned(),
            view: PageView::Logs,
            meta: RouteMeta {
                sidebar_label_key: "app.menu.logs".to_owned(),
                sidebar_hint_key: "app.sidebar.logsHint".to_owned(),
                main_class: "logs-page".to_owned(),
            },
            props: None,
        },
        RouteDefinition {
            path: "/settings".to_owned(),
            name: "settings".to_owned(),
            view: PageView::Setup,
            meta: RouteMeta {
                sidebar_label_key: "app.menu.setup".to_owned(),
                sidebar_hint_key: "app.sidebar.setupHint".to_owned(),
                main_class: "setup-route".to_owned(),
            },
            props: Some(RouteProps::default().with("mode", "manage")),
        },
    ]
}
