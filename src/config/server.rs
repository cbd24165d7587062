//! HTTP server settings and the tower-http layers derived from them

use http::HeaderValue;
use serde::Deserialize;
use std::net::SocketAddr;
use std::time::Duration;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};

use super::error::ValidationError;

/// Longest request timeout accepted, in seconds.
const MAX_REQUEST_TIMEOUT_SECS: u64 = 300;

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    /// Selects JSON logs in production
    pub environment: Environment,
    /// `EnvFilter` directive used when `RUST_LOG` is unset
    pub log_level: String,
    pub request_timeout_secs: u64,
    /// Comma-separated allowed origins; unset allows any origin
    pub cors_origins: Option<String>,
}

#[derive(Debug, Clone, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    #[default]
    Development,
    Staging,
    Production,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8080,
            environment: Environment::default(),
            log_level: "info,carbon_footprint=debug,tower_http=info".to_string(),
            request_timeout_secs: 30,
            cors_origins: None,
        }
    }
}

impl ServerConfig {
    pub fn socket_addr(&self) -> Result<SocketAddr, ValidationError> {
        let raw = format!("{}:{}", self.host, self.port);
        raw.parse()
            .map_err(|_| ValidationError::InvalidBindAddress(raw))
    }

    pub fn is_production(&self) -> bool {
        self.environment == Environment::Production
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }

    /// Configured origins that parse as header values, blanks skipped
    fn allowed_origins(&self) -> Vec<HeaderValue> {
        self.cors_origins
            .iter()
            .flat_map(|raw| raw.split(','))
            .map(str::trim)
            .filter(|origin| !origin.is_empty())
            .filter_map(|origin| match origin.parse() {
                Ok(value) => Some(value),
                Err(_) => {
                    tracing::warn!(%origin, "ignoring invalid CORS origin");
                    None
                }
            })
            .collect()
    }

    /// CORS for the footprint API: explicit origins when configured,
    /// any origin otherwise
    pub fn cors_layer(&self) -> CorsLayer {
        let origins = self.allowed_origins();
        let layer = CorsLayer::new().allow_methods(Any).allow_headers(Any);
        if origins.is_empty() {
            layer.allow_origin(Any)
        } else {
            layer.allow_origin(AllowOrigin::list(origins))
        }
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.port == 0 {
            return Err(ValidationError::InvalidPort);
        }
        if !(1..=MAX_REQUEST_TIMEOUT_SECS).contains(&self.request_timeout_secs) {
            return Err(ValidationError::InvalidTimeout);
        }
        self.socket_addr().map(|_| ())
    }
}
