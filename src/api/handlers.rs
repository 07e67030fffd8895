//! HTTP API handlers.

use std::sync::Arc;
use std::time::{Instant, SystemTime, UNIX_EPOCH};

use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use chrono::Utc;
use serde::Serialize;

use crate::config::Config;
use crate::error::Result;

/// Version string reported as `runtimeVersion` by the environment endpoint.
const RUNTIME_VERSION: &str = concat!("rust/", env!("CARGO_PKG_VERSION"));

/// Application state shared with handlers.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Process start instant, for uptime reporting.
    pub started: Instant,
    /// Loaded configuration.
    pub config: Arc<Config>,
}

impl AppState {
    /// Create new app state from the loaded configuration.
    pub fn new(config: Config) -> Self {
        Self {
            started: Instant::now(),
            config: Arc::new(config),
        }
    }
}

/// Health check response.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    /// Seconds since process start.
    pub uptime: f64,
    /// Status message: "ok".
    pub message: &'static str,
    /// Milliseconds since the Unix epoch.
    pub timestamp: i64,
}

impl HealthResponse {
    /// Build the health payload from the process start instant.
    ///
    /// Fails only when the system clock reads before the Unix epoch.
    pub fn collect(started: Instant) -> Result<Self> {
        let timestamp = SystemTime::now().duration_since(UNIX_EPOCH)?.as_millis() as i64;

        Ok(Self {
            uptime: started.elapsed().as_secs_f64(),
            message: "ok",
            timestamp,
        })
    }
}

/// Environment info response.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EnvironmentResponse {
    /// Deployment environment name.
    pub environment: String,
    /// Runtime version string.
    pub runtime_version: &'static str,
    /// Host name, "unknown" when unset.
    pub hostname: String,
    /// Current time, RFC 3339.
    pub timestamp: String,
    /// Service name, "local" when unset.
    pub service: String,
}

impl EnvironmentResponse {
    /// Build the environment payload from the loaded configuration.
    pub fn from_config(config: &Config) -> Self {
        Self {
            environment: config.app_env.clone(),
            runtime_version: RUNTIME_VERSION,
            hostname: config.hostname.clone(),
            timestamp: Utc::now().to_rfc3339(),
            service: config.service_name.clone(),
        }
    }
}

/// Greeting handler - always returns 200 with a plain-text body.
pub async fn root() -> &'static str {
    "Hello, World!"
}

/// Health check handler - returns 200 with the health payload, or 503
/// with an empty body if the payload cannot be built.
pub async fn health(State(state): State<AppState>) -> impl IntoResponse {
    match HealthResponse::collect(state.started) {
        Ok(body) => (StatusCode::OK, Json(body)).into_response(),
        Err(_) => StatusCode::SERVICE_UNAVAILABLE.into_response(),
    }
}

/// Environment info handler - returns 200 with deployment metadata.
pub async fn environment(State(state): State<AppState>) -> impl IntoResponse {
    Json(EnvironmentResponse::from_config(&state.config))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::DateTime;
    use pretty_assertions::assert_eq;
    use serde_json::Value;

    #[test]
    fn health_payload_reports_ok() {
        let payload = HealthResponse::collect(Instant::now()).unwrap();

        assert_eq!(payload.message, "ok");
        assert!(payload.uptime >= 0.0);

        let now_ms = Utc::now().timestamp_millis();
        assert!((now_ms - payload.timestamp).abs() < 5_000);
    }

    #[test]
    fn health_uptime_is_non_decreasing() {
        let started = Instant::now();
        let first = HealthResponse::collect(started).unwrap();
        let second = HealthResponse::collect(started).unwrap();

        assert!(second.uptime >= first.uptime);
    }

    #[test]
    fn environment_payload_uses_camel_case_keys() {
        let payload = EnvironmentResponse::from_config(&Config::default());
        let json = serde_json::to_value(&payload).unwrap();

        assert_eq!(json["environment"], "development");
        assert_eq!(json["hostname"], "unknown");
        assert_eq!(json["service"], "local");
        assert!(json.get("runtimeVersion").is_some());
        assert!(json.get("runtime_version").is_none());
    }

    #[test]
    fn environment_timestamp_is_rfc3339() {
        let payload = EnvironmentResponse::from_config(&Config::default());

        let parsed = DateTime::parse_from_rfc3339(&payload.timestamp).unwrap();
        let delta = Utc::now().timestamp_millis() - parsed.timestamp_millis();
        assert!(delta.abs() < 5_000);
    }

    #[test]
    fn environment_payload_reflects_config() {
        let config = Config {
            app_env: "production".to_string(),
            hostname: "web-1".to_string(),
            service_name: "envinfo".to_string(),
            ..Config::default()
        };

        let json: Value =
            serde_json::to_value(EnvironmentResponse::from_config(&config)).unwrap();
        assert_eq!(json["environment"], "production");
        assert_eq!(json["hostname"], "web-1");
        assert_eq!(json["service"], "envinfo");
    }
}
