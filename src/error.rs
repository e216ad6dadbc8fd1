use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::registry::{Operation, RouteGroup};

/// Error response type
#[derive(Serialize, Deserialize, utoipa::ToSchema)]
pub struct ErrorResponse {
    pub error: String,
}

/// Response type for health check endpoint
#[derive(Serialize, Deserialize, utoipa::ToSchema)]
pub struct HealthResponse {
    pub status: String,
    pub routes: usize,
}

/// A group or operation name that the registry does not define.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LookupError {
    #[error("Unknown route group: '{0}'")]
    UnknownGroup(String),
    #[error("Unknown operation '{operation}' in route group {group}")]
    UnknownOperation { group: String, operation: String },
}

/// Failure turning a route entry into a concrete path.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ResolveError {
    #[error(transparent)]
    Lookup(#[from] LookupError),
    #[error("{group} {operation} requires an id")]
    MissingId { group: RouteGroup, operation: Operation },
    #[error("{group} {operation} takes no id")]
    UnexpectedId { group: RouteGroup, operation: Operation },
}

/// Custom error type for API endpoints
///
/// Maps registry failures onto HTTP status codes and formats them as JSON
/// responses.
#[derive(Debug)]
pub enum ApiError {
    /// Group or operation not present in the registry
    RouteNotFound(LookupError),
    /// Id missing for a templated route, or given for a fixed one
    InvalidRouteArgument(String),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, error_message) = match self {
            ApiError::RouteNotFound(err) => (StatusCode::NOT_FOUND, err.to_string()),
            ApiError::InvalidRouteArgument(msg) => (
                StatusCode::BAD_REQUEST,
                format!("Invalid route argument: {}", msg),
            ),
        };

        let body = Json(ErrorResponse {
            error: error_message,
        });

        (status, body).into_response()
    }
}

impl From<LookupError> for ApiError {
    fn from(err: LookupError) -> Self {
        ApiError::RouteNotFound(err)
    }
}

impl From<ResolveError> for ApiError {
    fn from(err: ResolveError) -> Self {
        match err {
            ResolveError::Lookup(err) => ApiError::RouteNotFound(err),
            other => ApiError::InvalidRouteArgument(other.to_string()),
        }
    }
}
