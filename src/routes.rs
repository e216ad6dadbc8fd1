// Route path constants - single source of truth for all API paths
//
// Backend paths are relative to the configured API base URL. Templated paths
// carry a single `{id}` placeholder.

/// Placeholder substituted by [`crate::registry::PathTemplate::render`].
pub const ID_PLACEHOLDER: &str = "{id}";

// Paths served by this service itself
pub const HEALTH: &str = "/health";
pub const ROUTE_LIST: &str = "/routes";
pub const ROUTE_ITEM: &str = "/routes/{group}/{operation}";
pub const SWAGGER_UI: &str = "/swagger-ui";
pub const OPENAPI_JSON: &str = "/api-docs/openapi.json";

pub mod auth {
    pub const LOGIN: &str = "/auth/login";
    pub const REGISTER: &str = "/auth/register";
    pub const REFRESH_TOKEN: &str = "/auth/refresh";
    pub const USER_PROFILE: &str = "/auth/profile";
    pub const UPDATE_PROFILE: &str = "/auth/profile/update";
    pub const LOGOUT: &str = "/auth/logout";
    pub const FORGOT_PASSWORD: &str = "/auth/password/forgot";
    pub const VERIFY_TOKEN: &str = "/auth/token/verify";
}

/// Declares a CRUD-shaped group: `LIST`/`CREATE` constants, the `UPDATE`/`DELETE`
/// templates, and `update(id)`/`delete(id)` functions rendering them. Extra
/// items for the group go in the optional trailing block.
macro_rules! crud_group {
    ($name:ident, $base:literal) => {
        crud_group!($name, $base, {});
    };
    ($name:ident, $base:literal, { $($extra:item)* }) => {
        pub mod $name {
            use std::fmt::Display;

            pub const LIST: &str = $base;
            pub const CREATE: &str = concat!($base, "/create");
            pub const UPDATE: &str = concat!($base, "/{id}/update");
            pub const DELETE: &str = concat!($base, "/{id}/delete");

            pub fn update(id: impl Display) -> String {
                format!(concat!($base, "/{}/update"), id)
            }

            pub fn delete(id: impl Display) -> String {
                format!(concat!($base, "/{}/delete"), id)
            }

            $($extra)*
        }
    };
}

crud_group!(users, "/users");
crud_group!(teams, "/teams");
crud_group!(clients, "/clients", {
    pub const WEB_DEV: &str = "/clients/webdev";
});
crud_group!(meetings, "/meetings");
crud_group!(calendar, "/calendar/events");
crud_group!(tasks, "/tasks");
