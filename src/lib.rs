//! Route registry for the SMM business-management backend.
//!
//! [`registry::RouteRegistry`] maps `(RouteGroup, Operation)` pairs to API
//! paths; [`routes`] exposes the same paths as compile-time constants and
//! functions. The remaining modules serve the table over HTTP.

pub mod api_doc;
pub mod app;
pub mod config;
pub mod error;
pub mod handlers;
pub mod models;
pub mod payloads;
pub mod registry;
pub mod routes;
pub mod state;

pub use error::{LookupError, ResolveError};
pub use registry::{
    HttpMethod, Operation, PathTemplate, RouteDef, RouteEntry, RouteGroup, RouteRegistry,
};
