//! Static route registry.
//!
//! Maps `(RouteGroup, Operation)` pairs to backend API paths. The table is
//! built at compile time and never mutated.

use serde::{Deserialize, Serialize};
use std::fmt::{self, Display};
use std::str::FromStr;

use crate::error::{LookupError, ResolveError};
use crate::routes::{self, ID_PLACEHOLDER};

/// Feature area of the backend API
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, utoipa::ToSchema,
)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RouteGroup {
    Auth,
    Users,
    Teams,
    Clients,
    Meetings,
    Calendar,
    Tasks,
}

impl RouteGroup {
    pub const ALL: [RouteGroup; 7] = [
        RouteGroup::Auth,
        RouteGroup::Users,
        RouteGroup::Teams,
        RouteGroup::Clients,
        RouteGroup::Meetings,
        RouteGroup::Calendar,
        RouteGroup::Tasks,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            RouteGroup::Auth => "AUTH",
            RouteGroup::Users => "USERS",
            RouteGroup::Teams => "TEAMS",
            RouteGroup::Clients => "CLIENTS",
            RouteGroup::Meetings => "MEETINGS",
            RouteGroup::Calendar => "CALENDAR",
            RouteGroup::Tasks => "TASKS",
        }
    }

    /// Parse a group name, ignoring case and accepting `-` for `_`.
    pub fn from_name(name: &str) -> Option<Self> {
        let normalized = normalize_name(name);
        Self::ALL.into_iter().find(|g| g.as_str() == normalized)
    }
}

impl Display for RouteGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RouteGroup {
    type Err = LookupError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_name(s).ok_or_else(|| LookupError::UnknownGroup(s.to_string()))
    }
}

/// Named operation within a route group
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, utoipa::ToSchema,
)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Operation {
    Login,
    Register,
    RefreshToken,
    UserProfile,
    UpdateProfile,
    Logout,
    ForgotPassword,
    VerifyToken,
    List,
    Create,
    Update,
    Delete,
    WebDev,
}

impl Operation {
    pub const ALL: [Operation; 13] = [
        Operation::Login,
        Operation::Register,
        Operation::RefreshToken,
        Operation::UserProfile,
        Operation::UpdateProfile,
        Operation::Logout,
        Operation::ForgotPassword,
        Operation::VerifyToken,
        Operation::List,
        Operation::Create,
        Operation::Update,
        Operation::Delete,
        Operation::WebDev,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Operation::Login => "LOGIN",
            Operation::Register => "REGISTER",
            Operation::RefreshToken => "REFRESH_TOKEN",
            Operation::UserProfile => "USER_PROFILE",
            Operation::UpdateProfile => "UPDATE_PROFILE",
            Operation::Logout => "LOGOUT",
            Operation::ForgotPassword => "FORGOT_PASSWORD",
            Operation::VerifyToken => "VERIFY_TOKEN",
            Operation::List => "LIST",
            Operation::Create => "CREATE",
            Operation::Update => "UPDATE",
            Operation::Delete => "DELETE",
            Operation::WebDev => "WEB_DEV",
        }
    }

    /// Parse an operation name, ignoring case and accepting `-` for `_`.
    pub fn from_name(name: &str) -> Option<Self> {
        let normalized = normalize_name(name);
        Self::ALL.into_iter().find(|op| op.as_str() == normalized)
    }
}

impl Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

fn normalize_name(name: &str) -> String {
    name.trim().to_ascii_uppercase().replace('-', "_")
}

/// HTTP method the backend expects for a route
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "UPPERCASE")]
pub enum HttpMethod {
    Get,
    Post,
    Put,
    Delete,
}

impl HttpMethod {
    pub fn as_str(self) -> &'static str {
        match self {
            HttpMethod::Get => "GET",
            HttpMethod::Post => "POST",
            HttpMethod::Put => "PUT",
            HttpMethod::Delete => "DELETE",
        }
    }
}

impl Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Path with a single `{id}` placeholder
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PathTemplate {
    template: &'static str,
}

impl PathTemplate {
    pub const fn new(template: &'static str) -> Self {
        Self { template }
    }

    /// Raw template text, e.g. `/users/{id}/update`
    pub fn as_str(&self) -> &'static str {
        self.template
    }

    /// Substitute `id` into the template. The id is inserted verbatim.
    pub fn render(&self, id: impl Display) -> String {
        self.template.replacen(ID_PLACEHOLDER, &id.to_string(), 1)
    }
}

/// A fixed path or an id-to-path template
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RouteEntry {
    Fixed(&'static str),
    Template(PathTemplate),
}

impl RouteEntry {
    pub fn is_parameterized(&self) -> bool {
        matches!(self, RouteEntry::Template(_))
    }

    /// Path text as stored in the table; templates keep their placeholder.
    pub fn as_str(&self) -> &'static str {
        match *self {
            RouteEntry::Fixed(path) => path,
            RouteEntry::Template(template) => template.as_str(),
        }
    }

    pub fn fixed(&self) -> Option<&'static str> {
        match *self {
            RouteEntry::Fixed(path) => Some(path),
            RouteEntry::Template(_) => None,
        }
    }

    pub fn template(&self) -> Option<PathTemplate> {
        match *self {
            RouteEntry::Fixed(_) => None,
            RouteEntry::Template(template) => Some(template),
        }
    }
}

/// One row of the route table
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RouteDef {
    pub group: RouteGroup,
    pub operation: Operation,
    pub method: HttpMethod,
    pub entry: RouteEntry,
    /// Schema name of the JSON body the backend expects, if any
    pub body: Option<&'static str>,
}

impl RouteDef {
    const fn fixed(
        group: RouteGroup,
        operation: Operation,
        method: HttpMethod,
        path: &'static str,
        body: Option<&'static str>,
    ) -> Self {
        Self {
            group,
            operation,
            method,
            entry: RouteEntry::Fixed(path),
            body,
        }
    }

    const fn template(
        group: RouteGroup,
        operation: Operation,
        method: HttpMethod,
        template: &'static str,
        body: Option<&'static str>,
    ) -> Self {
        Self {
            group,
            operation,
            method,
            entry: RouteEntry::Template(PathTemplate::new(template)),
            body,
        }
    }

    /// Render this route to a concrete path.
    ///
    /// Templated routes require an id; fixed routes reject one.
    pub fn resolve(&self, id: Option<&dyn Display>) -> Result<String, ResolveError> {
        match (self.entry, id) {
            (RouteEntry::Fixed(path), None) => Ok(path.to_string()),
            (RouteEntry::Template(template), Some(id)) => Ok(template.render(id)),
            (RouteEntry::Fixed(_), Some(_)) => Err(ResolveError::UnexpectedId {
                group: self.group,
                operation: self.operation,
            }),
            (RouteEntry::Template(_), None) => Err(ResolveError::MissingId {
                group: self.group,
                operation: self.operation,
            }),
        }
    }
}

const ROUTES: &[RouteDef] = &[
    // AUTH
    RouteDef::fixed(
        RouteGroup::Auth,
        Operation::Login,
        HttpMethod::Post,
        routes::auth::LOGIN,
        Some("LoginRequest"),
    ),
    RouteDef::fixed(
        RouteGroup::Auth,
        Operation::Register,
        HttpMethod::Post,
        routes::auth::REGISTER,
        Some("RegisterRequest"),
    ),
    RouteDef::fixed(
        RouteGroup::Auth,
        Operation::RefreshToken,
        HttpMethod::Post,
        routes::auth::REFRESH_TOKEN,
        Some("RefreshTokenRequest"),
    ),
    RouteDef::fixed(
        RouteGroup::Auth,
        Operation::UserProfile,
        HttpMethod::Get,
        routes::auth::USER_PROFILE,
        None,
    ),
    RouteDef::fixed(
        RouteGroup::Auth,
        Operation::UpdateProfile,
        HttpMethod::Put,
        routes::auth::UPDATE_PROFILE,
        None,
    ),
    RouteDef::fixed(
        RouteGroup::Auth,
        Operation::Logout,
        HttpMethod::Post,
        routes::auth::LOGOUT,
        Some("LogoutRequest"),
    ),
    RouteDef::fixed(
        RouteGroup::Auth,
        Operation::ForgotPassword,
        HttpMethod::Post,
        routes::auth::FORGOT_PASSWORD,
        Some("ForgotPasswordRequest"),
    ),
    RouteDef::fixed(
        RouteGroup::Auth,
        Operation::VerifyToken,
        HttpMethod::Post,
        routes::auth::VERIFY_TOKEN,
        Some("VerifyTokenRequest"),
    ),
    // USERS
    RouteDef::fixed(RouteGroup::Users, Operation::List, HttpMethod::Get, routes::users::LIST, None),
    RouteDef::fixed(
        RouteGroup::Users,
        Operation::Create,
        HttpMethod::Post,
        routes::users::CREATE,
        None,
    ),
    RouteDef::template(
        RouteGroup::Users,
        Operation::Update,
        HttpMethod::Put,
        routes::users::UPDATE,
        None,
    ),
    RouteDef::template(
        RouteGroup::Users,
        Operation::Delete,
        HttpMethod::Delete,
        routes::users::DELETE,
        None,
    ),
    // TEAMS
    RouteDef::fixed(RouteGroup::Teams, Operation::List, HttpMethod::Get, routes::teams::LIST, None),
    RouteDef::fixed(
        RouteGroup::Teams,
        Operation::Create,
        HttpMethod::Post,
        routes::teams::CREATE,
        Some("TeamCreate"),
    ),
    RouteDef::template(
        RouteGroup::Teams,
        Operation::Update,
        HttpMethod::Put,
        routes::teams::UPDATE,
        Some("TeamCreate"),
    ),
    RouteDef::template(
        RouteGroup::Teams,
        Operation::Delete,
        HttpMethod::Delete,
        routes::teams::DELETE,
        None,
    ),
    // CLIENTS
    RouteDef::fixed(
        RouteGroup::Clients,
        Operation::List,
        HttpMethod::Get,
        routes::clients::LIST,
        None,
    ),
    RouteDef::fixed(
        RouteGroup::Clients,
        Operation::Create,
        HttpMethod::Post,
        routes::clients::CREATE,
        Some("ClientProfile"),
    ),
    RouteDef::template(
        RouteGroup::Clients,
        Operation::Update,
        HttpMethod::Put,
        routes::clients::UPDATE,
        Some("ClientProfile"),
    ),
    RouteDef::template(
        RouteGroup::Clients,
        Operation::Delete,
        HttpMethod::Delete,
        routes::clients::DELETE,
        None,
    ),
    RouteDef::fixed(
        RouteGroup::Clients,
        Operation::WebDev,
        HttpMethod::Post,
        routes::clients::WEB_DEV,
        Some("WebDevData"),
    ),
    // MEETINGS
    RouteDef::fixed(
        RouteGroup::Meetings,
        Operation::List,
        HttpMethod::Get,
        routes::meetings::LIST,
        None,
    ),
    RouteDef::fixed(
        RouteGroup::Meetings,
        Operation::Create,
        HttpMethod::Post,
        routes::meetings::CREATE,
        None,
    ),
    RouteDef::template(
        RouteGroup::Meetings,
        Operation::Update,
        HttpMethod::Put,
        routes::meetings::UPDATE,
        None,
    ),
    RouteDef::template(
        RouteGroup::Meetings,
        Operation::Delete,
        HttpMethod::Delete,
        routes::meetings::DELETE,
        None,
    ),
    // CALENDAR
    RouteDef::fixed(
        RouteGroup::Calendar,
        Operation::List,
        HttpMethod::Get,
        routes::calendar::LIST,
        None,
    ),
    RouteDef::fixed(
        RouteGroup::Calendar,
        Operation::Create,
        HttpMethod::Post,
        routes::calendar::CREATE,
        Some("CalendarEntry"),
    ),
    RouteDef::template(
        RouteGroup::Calendar,
        Operation::Update,
        HttpMethod::Put,
        routes::calendar::UPDATE,
        Some("CalendarEntry"),
    ),
    RouteDef::template(
        RouteGroup::Calendar,
        Operation::Delete,
        HttpMethod::Delete,
        routes::calendar::DELETE,
        None,
    ),
    // TASKS
    RouteDef::fixed(RouteGroup::Tasks, Operation::List, HttpMethod::Get, routes::tasks::LIST, None),
    RouteDef::fixed(
        RouteGroup::Tasks,
        Operation::Create,
        HttpMethod::Post,
        routes::tasks::CREATE,
        None,
    ),
    RouteDef::template(
        RouteGroup::Tasks,
        Operation::Update,
        HttpMethod::Put,
        routes::tasks::UPDATE,
        None,
    ),
    RouteDef::template(
        RouteGroup::Tasks,
        Operation::Delete,
        HttpMethod::Delete,
        routes::tasks::DELETE,
        None,
    ),
];

static REGISTRY: RouteRegistry = RouteRegistry { routes: ROUTES };

/// Read-only route table
#[derive(Debug)]
pub struct RouteRegistry {
    routes: &'static [RouteDef],
}

impl RouteRegistry {
    /// The process-wide registry
    pub fn global() -> &'static RouteRegistry {
        &REGISTRY
    }

    pub fn len(&self) -> usize {
        self.routes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }

    /// All rows in table order
    pub fn iter(&self) -> impl Iterator<Item = &'static RouteDef> {
        self.routes.iter()
    }

    /// Rows belonging to one group, in table order
    pub fn group(&self, group: RouteGroup) -> impl Iterator<Item = &'static RouteDef> {
        self.routes.iter().filter(move |def| def.group == group)
    }

    /// Full row for a group/operation pair
    pub fn route(
        &self,
        group: RouteGroup,
        operation: Operation,
    ) -> Result<&'static RouteDef, LookupError> {
        self.routes
            .iter()
            .find(|def| def.group == group && def.operation == operation)
            .ok_or_else(|| LookupError::UnknownOperation {
                group: group.to_string(),
                operation: operation.to_string(),
            })
    }

    /// Fixed path or template for a group/operation pair
    pub fn get(&self, group: RouteGroup, operation: Operation) -> Result<RouteEntry, LookupError> {
        self.route(group, operation).map(|def| def.entry)
    }

    /// Same as [`RouteRegistry::route`], from textual names
    pub fn lookup_route(
        &self,
        group_name: &str,
        operation_name: &str,
    ) -> Result<&'static RouteDef, LookupError> {
        let group: RouteGroup = group_name.parse()?;
        let operation = Operation::from_name(operation_name).ok_or_else(|| {
            LookupError::UnknownOperation {
                group: group.to_string(),
                operation: operation_name.to_string(),
            }
        })?;
        self.route(group, operation)
    }

    /// Same as [`RouteRegistry::get`], from textual names
    pub fn lookup(
        &self,
        group_name: &str,
        operation_name: &str,
    ) -> Result<RouteEntry, LookupError> {
        self.lookup_route(group_name, operation_name)
            .map(|def| def.entry)
    }

    /// Look up a route and render it to a concrete path
    pub fn resolve(
        &self,
        group: RouteGroup,
        operation: Operation,
        id: Option<&dyn Display>,
    ) -> Result<String, ResolveError> {
        Ok(self.route(group, operation)?.resolve(id)?)
    }
}

/// Join an API base URL and a registry path with exactly one `/` between them.
pub fn join_url(base: &str, path: &str) -> String {
    format!(
        "{}/{}",
        base.trim_end_matches('/'),
        path.trim_start_matches('/')
    )
}
