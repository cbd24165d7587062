//! Application configuration module
//!
//! This module provides type-safe configuration loading from environment variables
//! using the `config` and `dotenvy` crates. Configuration is loaded with the
//! `CARBON_FOOTPRINT` prefix and nested values use double underscores as separators.
//!
//! # Example
//!
//! ```no_run
//! use carbon_footprint::config::AppConfig;
//!
//! let config = AppConfig::load().expect("Failed to load configuration");
//! config.validate().expect("Invalid configuration");
//!
//! println!("Server running on {}", config.server.socket_addr().unwrap());
//! ```

mod engine;
mod error;
mod features;
mod server;

pub use engine::EngineConfig;
pub use error::{ConfigError, ValidationError};
pub use features::FeatureFlags;
pub use server::{Environment, ServerConfig};

use serde::Deserialize;

/// Root application configuration
///
/// Every section has defaults, so the service starts with no environment
/// set at all. Load using [`AppConfig::load()`].
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Server configuration (host, port, environment, logging, CORS)
    #[serde(default)]
    pub server: ServerConfig,

    /// Footprint engine configuration (factors, category scale, suggestion cap)
    #[serde(default)]
    pub engine: EngineConfig,

    /// Feature flags
    #[serde(default)]
    pub features: FeatureFlags,
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// This function:
    /// 1. Loads `.env` file if present (for development)
    /// 2. Reads environment variables with `CARBON_FOOTPRINT` prefix
    /// 3. Uses `__` (double underscore) to separate nested values
    /// 4. Deserializes into typed configuration structs
    ///
    /// # Environment Variable Format
    ///
    /// - `CARBON_FOOTPRINT__SERVER__PORT=8080` -> `server.port = 8080`
    /// - `CARBON_FOOTPRINT__ENGINE__CATEGORY_SCALE=impact` -> `engine.category_scale`
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if values cannot be parsed into expected types.
    pub fn load() -> Result<Self, ConfigError> {
        // Load .env file if present (development)
        dotenvy::dotenv().ok();

        let config = config::Config::builder()
            .add_source(
                config::Environment::default()
                    .prefix("CARBON_FOOTPRINT")
                    .separator("__"),
            )
            .build()?
            .try_deserialize()?;

        Ok(config)
    }

    /// Validate all configuration values
    ///
    /// # Errors
    ///
    /// Returns `ValidationError` if any configuration value is invalid.
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.server.validate()?;
        self.engine.validate()?;
        Ok(())
    }

    /// Check if running in production environment
    pub fn is_production(&self) -> bool {
        self.server.is_production()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::footprint::CategoryScale;
    use std::env;
    use std::sync::Mutex;

    // Mutex to ensure tests don't run in parallel (env vars are global)
    static ENV_MUTEX: Mutex<()> = Mutex::new(());

    const VARS: &[&str] = &[
        "CARBON_FOOTPRINT__SERVER__PORT",
        "CARBON_FOOTPRINT__SERVER__ENVIRONMENT",
        "CARBON_FOOTPRINT__ENGINE__RECOMMENDATION_LIMIT",
        "CARBON_FOOTPRINT__ENGINE__CATEGORY_SCALE",
        "CARBON_FOOTPRINT__FEATURES__VERBOSE_ERRORS",
    ];

    /// Helper to clear environment variables after testing
    fn clear_env() {
        for var in VARS {
            env::remove_var(var);
        }
    }

    #[test]
    fn test_load_with_no_environment() {
        let _guard = ENV_MUTEX.lock().unwrap();
        clear_env();
        let result = AppConfig::load();

        assert!(result.is_ok(), "Failed to load config: {:?}", result.err());
        let config = result.unwrap();
        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.server.port, 8080);
        assert_eq!(config.engine.recommendation_limit, 5);
        assert!(config.features.enable_tracing);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_engine_settings_from_environment() {
        let _guard = ENV_MUTEX.lock().unwrap();
        env::set_var("CARBON_FOOTPRINT__ENGINE__RECOMMENDATION_LIMIT", "3");
        env::set_var("CARBON_FOOTPRINT__ENGINE__CATEGORY_SCALE", "impact");
        let result = AppConfig::load();
        clear_env();

        let config = result.unwrap();
        assert_eq!(config.engine.recommendation_limit, 3);
        assert_eq!(config.engine.category_scale, CategoryScale::Impact);
    }

    #[test]
    fn test_is_production() {
        let _guard = ENV_MUTEX.lock().unwrap();
        env::set_var("CARBON_FOOTPRINT__SERVER__ENVIRONMENT", "production");
        let result = AppConfig::load();
        clear_env();

        let config = result.unwrap();
        assert!(config.is_production());
    }

    #[test]
    fn test_custom_server_port() {
        let _guard = ENV_MUTEX.lock().unwrap();
        env::set_var("CARBON_FOOTPRINT__SERVER__PORT", "3000");
        env::set_var("CARBON_FOOTPRINT__FEATURES__VERBOSE_ERRORS", "true");
        let result = AppConfig::load();
        clear_env();

        let config = result.unwrap();
        assert_eq!(config.server.port, 3000);
        assert!(config.features.verbose_errors);
    }

    #[test]
    fn test_validate_rejects_bad_engine_limit() {
        let config = AppConfig {
            engine: EngineConfig {
                recommendation_limit: 9,
                ..Default::default()
            },
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }
}
