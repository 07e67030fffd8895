//! HTTP API module for the greeting, health, and environment endpoints.

pub mod handlers;
pub mod routes;

pub use handlers::AppState;
pub use routes::create_router;
