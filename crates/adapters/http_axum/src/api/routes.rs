//! JSON REST handlers for the route table.

use axum::Json;
use axum::extract::{Query, State};
use axum::response::{IntoResponse, Response};
use serde::{Deserialize, Serialize};

use pulsedash_domain::route::RouteDefinition;
use pulsedash_domain::table::NavigationMode;

use crate::error::ApiError;
use crate::state::AppState;

/// Response body for the list endpoint: everything the shell needs to set
/// up its sidebar and client-side router in one round trip.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RouteTableBody {
    pub mode: NavigationMode,
    pub base_path: String,
    pub routes: Vec<RouteDefinition>,
}

/// Possible responses from the list endpoint.
pub enum ListResponse {
    Ok(Json<RouteTableBody>),
}

impl IntoResponse for ListResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Ok(json) => json.into_response(),
        }
    }
}

/// Query parameters for the resolve endpoint.
#[derive(Deserialize)]
pub struct ResolveQuery {
    pub path: String,
}

/// Possible responses from the resolve endpoint.
pub enum ResolveResponse {
    Ok(Json<RouteDefinition>),
}

impl IntoResponse for ResolveResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Ok(json) => json.into_response(),
        }
    }
}

/// `GET /api/routes`
pub async fn list(State(state): State<AppState>) -> ListResponse {
    ListResponse::Ok(Json(RouteTableBody {
        mode: state.routes.mode(),
        base_path: state.base_prefix.to_string(),
        routes: state.routes.iter().cloned().collect(),
    }))
}

/// `GET /api/routes/resolve?path=/daily`
pub async fn resolve(
    State(state): State<AppState>,
    Query(query): Query<ResolveQuery>,
) -> Result<ResolveResponse, ApiError> {
    let route = state.routes.resolve(&query.path)?;
    Ok(ResolveResponse::Ok(Json(route.clone())))
}
