use utoipa::OpenApi;

use crate::error::{ErrorResponse, HealthResponse};
use crate::handlers;
use crate::models::{ResolvedRouteResponse, RouteListResponse, RouteResponse};
use crate::payloads::{
    BusinessOffering, CalendarEntry, ClientProfile, ForgotPasswordRequest, LoginRequest,
    LogoutRequest, RefreshTokenRequest, RegisterRequest, SocialHandles, TeamCreate, TeamMember,
    VerifyTokenRequest, WebDevData, YesNo,
};
use crate::registry::{HttpMethod, Operation, RouteGroup};

/// OpenAPI documentation
///
/// Backend request bodies are listed as components so that the
/// `request_body` names reported by `/routes` resolve to a schema.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "smm-routes API",
        version = "1.0.0",
        description = "Route directory for the SMM business-management backend"
    ),
    paths(
        handlers::health::health_handler,
        handlers::list::list_handler,
        handlers::resolve::resolve_handler
    ),
    components(
        schemas(
            RouteGroup,
            Operation,
            HttpMethod,
            RouteResponse,
            RouteListResponse,
            ResolvedRouteResponse,
            ErrorResponse,
            HealthResponse,
            LoginRequest,
            RegisterRequest,
            RefreshTokenRequest,
            LogoutRequest,
            VerifyTokenRequest,
            ForgotPasswordRequest,
            ClientProfile,
            SocialHandles,
            BusinessOffering,
            WebDevData,
            YesNo,
            CalendarEntry,
            TeamCreate,
            TeamMember
        )
    ),
    tags(
        (name = "health", description = "Health check operations"),
        (name = "routes", description = "Route registry operations")
    )
)]
pub struct ApiDoc;
