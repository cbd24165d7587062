//! ComputeWhatIf - Query handler scoring a partial override against the
//! stored baseline.

use std::sync::Arc;

use crate::domain::footprint::{
    round2, validate_override, CarbonResult, FootprintCategory, FootprintEngine, Profile,
};
use crate::domain::foundation::{DomainError, ErrorCode, UserId};
use crate::ports::FootprintRepository;

/// What-if request: fields present in `over` replace the baseline's.
#[derive(Debug, Clone)]
pub struct ComputeWhatIfQuery {
    pub user_id: UserId,
    pub over: Profile,
}

/// Baseline and adjusted footprints side by side.
#[derive(Debug, Clone, PartialEq)]
pub struct WhatIfResult {
    pub baseline: CarbonResult,
    pub adjusted: CarbonResult,
    /// `adjusted.total - baseline.total`; negative means a saving.
    pub delta: f64,
    pub category: FootprintCategory,
}

/// Handler for what-if recomputation. Never writes to the repository.
pub struct ComputeWhatIfHandler {
    repository: Arc<dyn FootprintRepository>,
    engine: FootprintEngine,
}

impl ComputeWhatIfHandler {
    pub fn new(repository: Arc<dyn FootprintRepository>, engine: FootprintEngine) -> Self {
        Self { repository, engine }
    }

    pub async fn handle(&self, query: ComputeWhatIfQuery) -> Result<WhatIfResult, DomainError> {
        if let Err(err) = validate_override(&query.over) {
            tracing::warn!(user_id = %query.user_id, field = err.field(), "override rejected");
            return Err(err.into());
        }

        let stored = self
            .repository
            .find_baseline(&query.user_id)
            .await?
            .ok_or_else(|| {
                DomainError::new(
                    ErrorCode::BaselineNotFound,
                    "A baseline is required before computing a what-if",
                )
            })?;

        let baseline = self.engine.compute(&stored.profile)?;
        let adjusted = self.engine.compute_override(&stored.profile, &query.over)?;
        let delta = round2(adjusted.total - baseline.total);

        tracing::debug!(
            user_id = %query.user_id,
            baseline = baseline.total,
            adjusted = adjusted.total,
            "what-if computed"
        );

        Ok(WhatIfResult {
            category: self.engine.categorize(adjusted.total),
            baseline,
            adjusted,
            delta,
        })
    }
}
