//! Route — a mapping from a URL path to a page view plus display metadata.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::error::{PulseDashError, ValidationError};

/// Identifier of the page view a route mounts.
///
/// The table references views by identifier only; rendering the view is the
/// responsibility of the shell UI.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PageView {
    Overview,
    Daily,
    Realtime,
    Logs,
    Setup,
}

/// Sidebar metadata attached to a route.
///
/// Label and hint are translation-catalog keys; resolving them to display
/// strings happens outside this crate. `main_class` is applied as a CSS
/// class to the main content container and may be empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RouteMeta {
    pub sidebar_label_key: String,
    pub sidebar_hint_key: String,
    pub main_class: String,
}

/// Static key/value configuration handed to a view at mount time.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RouteProps(BTreeMap<String, String>);

impl RouteProps {
    /// Add or replace a key/value pair.
    #[must_use]
    pub fn with(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.0.insert(key.into(), value.into());
        self
    }

    /// Look up a value by key.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.0.get(key).map(String::as_str)
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// One navigable page: a unique path, a unique symbolic name, the view to
/// mount, sidebar metadata, and optional static view props.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RouteDefinition {
    pub path: String,
    pub name: String,
    pub view: PageView,
    pub meta: RouteMeta,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub props: Option<RouteProps>,
}

impl RouteDefinition {
    /// Create a builder for constructing a [`RouteDefinition`].
    #[must_use]
    pub fn builder(view: PageView) -> RouteDefinitionBuilder {
        RouteDefinitionBuilder {
            view,
            path: None,
            name: None,
            sidebar_label_key: None,
            sidebar_hint_key: None,
            main_class: None,
            props: None,
        }
    }

    /// Check per-route invariants.
    ///
    /// # Errors
    ///
    /// Returns [`PulseDashError::Validation`] when `path` or `name` is
    /// empty, or when either sidebar translation key is missing.
    pub fn validate(&self) -> Result<(), PulseDashError> {
        if self.path.is_empty() {
            return Err(ValidationError::EmptyPath.into());
        }
        if self.name.is_empty() {
            return Err(ValidationError::EmptyName.into());
        }
        if self.meta.sidebar_label_key.is_empty() {
            return Err(ValidationError::EmptyLabelKey {
                name: self.name.clone(),
            }
            .into());
        }
        if self.meta.sidebar_hint_key.is_empty() {
            return Err(ValidationError::EmptyHintKey {
                name: self.name.clone(),
            }
            .into());
        }
        Ok(())
    }
}

/// Step-by-step builder for [`RouteDefinition`].
#[derive(Debug)]
pub struct RouteDefinitionBuilder {
    view: PageView,
    path: Option<String>,
    name: Option<String>,
    sidebar_label_key: Option<String>,
    sidebar_hint_key: Option<String>,
    main_class: Option<String>,
    props: Option<RouteProps>,
}

impl RouteDefinitionBuilder {
    #[must_use]
    pub fn path(mut self, path: impl Into<String>) -> Self {
        self.path = Some(path.into());
        self
    }

    #[must_use]
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    #[must_use]
    pub fn sidebar_label_key(mut self, key: impl Into<String>) -> Self {
        self.sidebar_label_key = Some(key.into());
        self
    }

    #[must_use]
    pub fn sidebar_hint_key(mut self, key: impl Into<String>) -> Self {
        self.sidebar_hint_key = Some(key.into());
        self
    }

    #[must_use]
    pub fn main_class(mut self, class: impl Into<String>) -> Self {
        self.main_class = Some(class.into());
        self
    }

    #[must_use]
    pub fn props(mut self, props: RouteProps) -> Self {
        self.props = Some(props);
        self
    }

    /// Consume the builder, validate, and return a [`RouteDefinition`].
    ///
    /// # Errors
    ///
    /// Returns [`PulseDashError::Validation`] if `path`, `name`, or either
    /// sidebar translation key is missing or empty.
    pub fn build(self) -> Result<RouteDefinition, PulseDashError> {
        let route = RouteDefinition {
            path: self.path.unwrap_or_default(),
            name: self.name.unwrap_or_default(),
            view: self.view,
            meta: RouteMeta {
                sidebar_label_key: self.sidebar_label_key.unwrap_or_default(),
                sidebar_hint_key: self.sidebar_hint_key.unwrap_or_default(),
                main_class: self.main_class.unwrap_or_default(),
            },
            props: self.props,
        };
        route.validate()?;
        Ok(route)
    }
}
