//! EstimateFootprint - Stateless scoring of an arbitrary profile.

use crate::domain::footprint::{
    validate_override, CarbonResult, FootprintCategory, FootprintEngine, Profile,
};
use crate::domain::foundation::DomainError;

/// Profile to score; any subset of domains may be present.
#[derive(Debug, Clone)]
pub struct EstimateFootprintQuery {
    pub profile: Profile,
}

/// Footprint with its category and suggestions.
#[derive(Debug, Clone, PartialEq)]
pub struct FootprintEstimate {
    pub result: CarbonResult,
    pub category: FootprintCategory,
    pub category_label: &'static str,
    pub recommendations: Vec<String>,
}

/// Handler for one-off estimates. Nothing is stored.
pub struct EstimateFootprintHandler {
    engine: FootprintEngine,
}

impl EstimateFootprintHandler {
    pub fn new(engine: FootprintEngine) -> Self {
        Self { engine }
    }

    pub fn handle(&self, query: EstimateFootprintQuery) -> Result<FootprintEstimate, DomainError> {
        // Partial profiles are fine here; only ranges are checked
        validate_override(&query.profile)?;

        let result = self.engine.compute(&query.profile)?;
        let category = self.engine.categorize(result.total);
        let recommendations = self.engine.recommend(&query.profile, result.total);
        tracing::debug!(total = result.total, "estimate computed");

        Ok(FootprintEstimate {
            category_label: self.engine.category_label(category),
            category,
            recommendations,
            result,
        })
    }
}
