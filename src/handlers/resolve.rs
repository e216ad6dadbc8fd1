use crate::error::{ApiError, ErrorResponse};
use crate::models::{ResolveQuery, ResolvedRouteResponse};
use crate::registry::join_url;
use crate::routes;
use crate::state::AppState;
use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use std::fmt::Display;

/// GET /routes/{group}/{operation} handler - Resolve one route to a path
///
/// Templated routes take the entity id from the `id` query parameter, which is
/// substituted verbatim. Fixed routes must be requested without an id.
#[utoipa::path(
    get,
    path = routes::ROUTE_ITEM,
    params(
        ("group" = String, Path, description = "Route group, e.g. USERS"),
        ("operation" = String, Path, description = "Operation within the group, e.g. UPDATE"),
        ResolveQuery
    ),
    responses(
        (status = 200, description = "Route resolved", body = ResolvedRouteResponse),
        (status = 400, description = "Id missing or misplaced", body = ErrorResponse),
        (status = 404, description = "Unknown group or operation", body = ErrorResponse)
    ),
    tag = "routes"
)]
pub async fn resolve_handler(
    State(state): State<AppState>,
    Path((group_name, operation_name)): Path<(String, String)>,
    Query(query): Query<ResolveQuery>,
) -> Result<(StatusCode, Json<ResolvedRouteResponse>), ApiError> {
    let def = state
        .registry
        .lookup_route(&group_name, &operation_name)
        .inspect_err(|err| tracing::warn!("Route lookup failed: {}", err))?;

    let id = query.id.as_ref().map(|id| id as &dyn Display);
    let path = def.resolve(id)?;
    let url = join_url(&state.config.api_base_url, &path);

    tracing::info!("Resolved {} {} to {}", def.group, def.operation, path);
    Ok((
        StatusCode::OK,
        Json(ResolvedRouteResponse {
            group: def.group,
            operation: def.operation,
            method: def.method,
            path,
            url,
        }),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::handlers::test_support::{get_json, setup_test_app};
    use crate::registry::{HttpMethod, Operation, RouteGroup};

    #[tokio::test]
    async fn test_resolve_fixed_route() {
        let app = setup_test_app();

        let (status, response_json): (_, ResolvedRouteResponse) =
            get_json(app, "/routes/AUTH/REFRESH_TOKEN").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(response_json.group, RouteGroup::Auth);
        assert_eq!(response_json.operation, Operation::RefreshToken);
        assert_eq!(response_json.method, HttpMethod::Post);
        assert_eq!(response_json.path, "/auth/refresh");
        assert_eq!(response_json.url, "http://backend.test/api/auth/refresh");
    }

    #[tokio::test]
    async fn test_resolve_templated_route() {
        let app = setup_test_app();

        let (status, response_json): (_, ResolvedRouteResponse) =
            get_json(app, "/routes/users/update?id=42").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(response_json.method, HttpMethod::Put);
        assert_eq!(response_json.path, "/users/42/update");
        assert_eq!(response_json.url, "http://backend.test/api/users/42/update");
    }

    #[tokio::test]
    async fn test_resolve_string_id() {
        let app = setup_test_app();

        let (status, response_json): (_, ResolvedRouteResponse) =
            get_json(app, "/routes/CALENDAR/DELETE?id=abc").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(response_json.method, HttpMethod::Delete);
        assert_eq!(response_json.path, "/calendar/events/abc/delete");
    }

    #[tokio::test]
    async fn test_resolve_missing_id() {
        let app = setup_test_app();

        let (status, error_response): (_, ErrorResponse) =
            get_json(app, "/routes/TEAMS/DELETE").await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(error_response.error.contains("requires an id"));
    }

    #[tokio::test]
    async fn test_resolve_unexpected_id() {
        let app = setup_test_app();

        let (status, error_response): (_, ErrorResponse) =
            get_json(app, "/routes/TEAMS/LIST?id=3").await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(error_response.error.contains("takes no id"));
    }

    #[tokio::test]
    async fn test_resolve_unknown_group() {
        let app = setup_test_app();

        let (status, error_response): (_, ErrorResponse) =
            get_json(app, "/routes/INVOICES/LIST").await;

        assert_eq!(status, StatusCode::NOT_FOUND);
        assert!(error_response.error.contains("Unknown route group"));
    }

    #[tokio::test]
    async fn test_resolve_undefined_operation() {
        let app = setup_test_app();

        let (status, error_response): (_, ErrorResponse) =
            get_json(app, "/routes/AUTH/DELETE").await;

        assert_eq!(status, StatusCode::NOT_FOUND);
        assert!(error_response.error.contains("Unknown operation 'DELETE'"));
    }
}
