//! # pulsedash-domain
//!
//! Pure domain model for the pulsedash analytics dashboard.
//!
//! ## Responsibilities
//! - Define **Routes** (URL path → page view plus sidebar metadata)
//! - Define the **Route table** (immutable ordered list, built once at
//!   startup, exact-path resolution, scroll behaviour on navigation)
//! - Define **Base-path** normalization rules for hosting the dashboard
//!   under a URL prefix
//! - Contain all invariant enforcement (path/name uniqueness, required
//!   sidebar keys)
//!
//! ## Dependency rule
//! This crate has **no internal dependencies**.
//! It must never import anything from adapters or external IO crates.

pub mod base_path;
pub mod error;
pub mod route;
pub mod table;
