//! Minimal environment-info HTTP service.
//!
//! Exposes three static routes: a greeting at `/`, a liveness probe at
//! `/health`, and deployment metadata at `/environment`. All response
//! payloads are built per request from the process environment and
//! uptime; there is no persistent state.
//!
//! # Modules
//!
//! - [`config`]: Configuration loading from environment
//! - [`error`]: Unified error types
//! - [`api`]: HTTP handlers and router
//! - [`utils`]: Shutdown signal handling

pub mod api;
pub mod config;
pub mod error;
pub mod utils;

pub use config::Config;
pub use error::{Error, Result};
