pub mod health;
pub mod list;
pub mod resolve;

pub use health::health_handler;
pub use list::list_handler;
pub use resolve::resolve_handler;
