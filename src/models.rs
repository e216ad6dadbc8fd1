use serde::{Deserialize, Serialize};

use crate::registry::{HttpMethod, Operation, RouteDef, RouteGroup};

/// Query parameters for the route list endpoint
#[derive(Deserialize, utoipa::IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ListQuery {
    /// Only return entries of this route group, e.g. USERS
    pub group: Option<String>,
}

/// Query parameters for the route resolve endpoint
#[derive(Deserialize, utoipa::IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ResolveQuery {
    /// Entity id substituted into templated routes
    pub id: Option<String>,
}

/// One route table row as exposed over HTTP
#[derive(Debug, Serialize, Deserialize, utoipa::ToSchema)]
pub struct RouteResponse {
    pub group: RouteGroup,
    pub operation: Operation,
    pub method: HttpMethod,
    /// Path text; templated routes keep their `{id}` placeholder
    pub path: String,
    pub parameterized: bool,
    pub request_body: Option<String>,
}

impl From<&RouteDef> for RouteResponse {
    fn from(def: &RouteDef) -> Self {
        RouteResponse {
            group: def.group,
            operation: def.operation,
            method: def.method,
            path: def.entry.as_str().to_string(),
            parameterized: def.entry.is_parameterized(),
            request_body: def.body.map(str::to_string),
        }
    }
}

/// Response type for list endpoint
#[derive(Debug, Serialize, Deserialize, utoipa::ToSchema)]
pub struct RouteListResponse {
    pub data: Vec<RouteResponse>,
    pub total_count: usize,
}

/// Response type for resolve endpoint
#[derive(Debug, Serialize, Deserialize, utoipa::ToSchema)]
pub struct ResolvedRouteResponse {
    pub group: RouteGroup,
    pub operation: Operation,
    pub method: HttpMethod,
    /// Concrete path with any id substituted
    pub path: String,
    /// `path` joined onto the configured API base URL
    pub url: String,
}
