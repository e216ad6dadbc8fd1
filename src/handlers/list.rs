use crate::error::{ApiError, ErrorResponse};
use crate::models::{ListQuery, RouteListResponse, RouteResponse};
use crate::registry::RouteGroup;
use crate::routes;
use crate::state::AppState;
use axum::{extract::Query, extract::State, http::StatusCode, Json};

/// GET /routes handler - List the route table
///
/// Returns every registry entry in table order.
/// Query parameters:
/// - group: Only return entries of this group, e.g. USERS (optional)
#[utoipa::path(
    get,
    path = routes::ROUTE_LIST,
    params(ListQuery),
    responses(
        (status = 200, description = "Route table entries", body = RouteListResponse),
        (status = 404, description = "Unknown route group", body = ErrorResponse)
    ),
    tag = "routes"
)]
pub async fn list_handler(
    State(state): State<AppState>,
    Query(query): Query<ListQuery>,
) -> Result<(StatusCode, Json<RouteListResponse>), ApiError> {
    let group = match query.group.as_deref() {
        Some(name) => Some(name.parse::<RouteGroup>().inspect_err(|err| {
            tracing::warn!("Route list rejected: {}", err);
        })?),
        None => None,
    };

    let data: Vec<RouteResponse> = match group {
        Some(group) => state.registry.group(group).map(RouteResponse::from).collect(),
        None => state.registry.iter().map(RouteResponse::from).collect(),
    };

    let response = RouteListResponse {
        total_count: data.len(),
        data,
    };

    tracing::info!(
        "Listed {} routes (group: {:?})",
        response.total_count,
        group
    );

    Ok((StatusCode::OK, Json(response)))
}
