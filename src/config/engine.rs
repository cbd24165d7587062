//! Footprint engine configuration

use serde::Deserialize;
use std::path::PathBuf;
use std::sync::Arc;

use crate::domain::footprint::{
    CategoryScale, EmissionFactors, FootprintEngine, DEFAULT_RECOMMENDATION_LIMIT,
};

use super::error::{ConfigError, ValidationError};

/// Engine configuration: registry source, category scale and suggestion cap
#[derive(Debug, Clone, Deserialize)]
pub struct EngineConfig {
    /// Maximum number of recommendations returned (1..=5)
    #[serde(default = "default_recommendation_limit")]
    pub recommendation_limit: usize,

    /// Threshold set used to categorize totals
    #[serde(default)]
    pub category_scale: CategoryScale,

    /// Optional JSON file replacing the built-in emission factors
    pub factors_path: Option<PathBuf>,
}

impl EngineConfig {
    /// Validate engine configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if !(1..=DEFAULT_RECOMMENDATION_LIMIT).contains(&self.recommendation_limit) {
            return Err(ValidationError::InvalidRecommendationLimit {
                max: DEFAULT_RECOMMENDATION_LIMIT,
                actual: self.recommendation_limit,
            });
        }
        if self
            .factors_path
            .as_ref()
            .is_some_and(|p| p.as_os_str().is_empty())
        {
            return Err(ValidationError::EmptyFactorsPath);
        }
        Ok(())
    }

    /// Load the emission factor registry: the configured file, or the
    /// built-in tables when no file is set
    pub fn load_factors(&self) -> Result<EmissionFactors, ConfigError> {
        match &self.factors_path {
            Some(path) => {
                let factors = EmissionFactors::from_json_file(path)?;
                tracing::info!(path = %path.display(), "loaded emission factors from file");
                Ok(factors)
            }
            None => Ok(EmissionFactors::standard()),
        }
    }

    /// Build the engine shared by all handlers
    pub fn build_engine(&self) -> Result<FootprintEngine, ConfigError> {
        Ok(FootprintEngine::new(
            Arc::new(self.load_factors()?),
            self.category_scale,
            self.recommendation_limit,
        ))
    }
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            recommendation_limit: default_recommendation_limit(),
            category_scale: CategoryScale::default(),
            factors_path: None,
        }
    }
}

fn default_recommendation_limit() -> usize {
    DEFAULT_RECOMMENDATION_LIMIT
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_engine_config_defaults() {
        let config = EngineConfig::default();
        assert_eq!(config.recommendation_limit, 5);
        assert_eq!(config.category_scale, CategoryScale::Standard);
        assert!(config.factors_path.is_none());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_recommendation_limit_bounds() {
        for limit in [0, 6] {
            let config = EngineConfig {
                recommendation_limit: limit,
                ..Default::default()
            };
            assert!(matches!(
                config.validate(),
                Err(ValidationError::InvalidRecommendationLimit { .. })
            ));
        }

        let older_cap = EngineConfig {
            recommendation_limit: 3,
            ..Default::default()
        };
        assert!(older_cap.validate().is_ok());
    }

    #[test]
    fn test_builtin_factors_without_path() {
        let factors = EngineConfig::default().load_factors().unwrap();
        assert_eq!(factors, EmissionFactors::standard());
    }

    #[test]
    fn test_factors_loaded_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{ "diet": {{ "deliveryPackaging": 0.9 }} }}"#).unwrap();

        let config = EngineConfig {
            factors_path: Some(file.path().to_path_buf()),
            category_scale: CategoryScale::Impact,
            recommendation_limit: 3,
        };
        let engine = config.build_engine().unwrap();

        assert_eq!(engine.factors().diet.delivery_packaging, 0.9);
        assert_eq!(engine.category_scale(), CategoryScale::Impact);
        assert_eq!(engine.recommendation_limit(), 3);
    }

    #[test]
    fn test_malformed_factor_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "not json").unwrap();

        let config = EngineConfig {
            factors_path: Some(file.path().to_path_buf()),
            ..Default::default()
        };
        assert!(matches!(
            config.load_factors(),
            Err(ConfigError::FactorLoad(_))
        ));
    }
}
