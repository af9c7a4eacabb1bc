//! Common error types used across the workspace.
//!
//! Each layer defines its own typed errors and converts via `#[from]`.

/// Top-level domain error.
#[derive(Debug, thiserror::Error)]
pub enum PulseDashError {
    /// A route table invariant was violated at construction time.
    #[error("validation error")]
    Validation(#[from] ValidationError),

    /// A lookup matched nothing.
    #[error("not found")]
    NotFound(#[from] NotFoundError),
}

/// Construction-time invariant violations in the route table.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    /// A route was defined with an empty `path`.
    #[error("route path cannot be empty")]
    EmptyPath,
    /// A route was defined with an empty `name`.
    #[error("route name cannot be empty")]
    EmptyName,
    /// A route is missing its sidebar label translation key.
    #[error("route {name:?} has no sidebar label key")]
    EmptyLabelKey { name: String },
    /// A route is missing its sidebar hint translation key.
    #[error("route {name:?} has no sidebar hint key")]
    EmptyHintKey { name: String },
    /// Two routes share the same `path`.
    #[error("duplicate route path {path:?}")]
    DuplicatePath { path: String },
    /// Two routes share the same `name`.
    #[error("duplicate route name {name:?}")]
    DuplicateName { name: String },
}

/// Lookup failures.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum NotFoundError {
    /// No route definition matches the requested path.
    #[error("no route matches path {path:?}")]
    Route { path: String },
}
