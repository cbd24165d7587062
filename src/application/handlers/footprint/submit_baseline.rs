//! SubmitBaseline - Command handler for storing an onboarding baseline.

use std::sync::Arc;

use crate::domain::footprint::{validate_baseline_profile, FootprintEngine, Profile};
use crate::domain::foundation::{DomainError, Timestamp, UserId};
use crate::ports::{BaselineRecord, FootprintRepository};

/// Command to score and store a user's baseline profile.
#[derive(Debug, Clone)]
pub struct SubmitBaselineCommand {
    pub user_id: UserId,
    pub profile: Profile,
}

/// Handler for baseline submission.
pub struct SubmitBaselineHandler {
    repository: Arc<dyn FootprintRepository>,
    engine: FootprintEngine,
}

impl SubmitBaselineHandler {
    pub fn new(repository: Arc<dyn FootprintRepository>, engine: FootprintEngine) -> Self {
        Self { repository, engine }
    }

    pub async fn handle(&self, cmd: SubmitBaselineCommand) -> Result<BaselineRecord, DomainError> {
        // 1. Completeness and range checks
        if let Err(err) = validate_baseline_profile(&cmd.profile) {
            tracing::warn!(user_id = %cmd.user_id, field = err.field(), "baseline rejected");
            return Err(err.into());
        }

        // 2. Score
        let result = self.engine.compute(&cmd.profile)?;
        let category = self.engine.categorize(result.total);
        let recommendations = self.engine.recommend(&cmd.profile, result.total);
        tracing::debug!(user_id = %cmd.user_id, total = result.total, "baseline computed");

        // 3. Persist, replacing any previous baseline
        let record = BaselineRecord {
            user_id: cmd.user_id,
            profile: cmd.profile,
            result,
            category,
            recommendations,
            updated_at: Timestamp::now(),
        };
        self.repository.save_baseline(&record).await?;

        tracing::info!(user_id = %record.user_id, total = record.result.total, "baseline stored");
        Ok(record)
    }
}
