//! LogDailyActivity - Command handler for recording one day's activity.

use std::sync::Arc;

use crate::domain::footprint::{
    avoided_carbon_from_steps, round2, validate_daily_log, DailyLogInput, FootprintEngine,
};
use crate::domain::foundation::{DailyLogId, DomainError, Timestamp, UserId};
use crate::ports::{DailyLogRecord, FootprintRepository};

/// Command to score and store a daily log.
#[derive(Debug, Clone)]
pub struct LogDailyActivityCommand {
    pub user_id: UserId,
    pub input: DailyLogInput,
}

/// The stored log plus a comparison with the baseline, when one exists.
#[derive(Debug, Clone, PartialEq)]
pub struct LogDailyActivityResult {
    pub record: DailyLogRecord,
    pub baseline_total: Option<f64>,
    /// `record.result.total - baseline_total`.
    pub difference_from_baseline: Option<f64>,
}

/// Handler for daily-log submission.
pub struct LogDailyActivityHandler {
    repository: Arc<dyn FootprintRepository>,
    engine: FootprintEngine,
}

impl LogDailyActivityHandler {
    pub fn new(repository: Arc<dyn FootprintRepository>, engine: FootprintEngine) -> Self {
        Self { repository, engine }
    }

    pub async fn handle(
        &self,
        cmd: LogDailyActivityCommand,
    ) -> Result<LogDailyActivityResult, DomainError> {
        // 1. Validate
        if let Err(err) = validate_daily_log(&cmd.input) {
            tracing::warn!(user_id = %cmd.user_id, field = err.field(), "daily log rejected");
            return Err(err.into());
        }

        // 2. Score the day and the walking offset
        let result = self.engine.compute_daily_log(&cmd.input)?;
        let avoided = cmd.input.steps.map_or(0.0, avoided_carbon_from_steps);
        let net_total = round2((result.total - avoided).max(0.0));

        // 3. Persist
        let record = DailyLogRecord {
            id: DailyLogId::new(),
            user_id: cmd.user_id,
            input: cmd.input,
            result,
            avoided,
            net_total,
            logged_at: Timestamp::now(),
        };
        self.repository.save_daily_log(&record).await?;

        // 4. Compare with the baseline
        let baseline_total = self
            .repository
            .find_baseline(&record.user_id)
            .await?
            .map(|baseline| baseline.result.total);
        let difference_from_baseline =
            baseline_total.map(|baseline| round2(record.result.total - baseline));

        tracing::info!(
            user_id = %record.user_id,
            log_id = %record.id,
            total = record.result.total,
            net = record.net_total,
            "daily log stored"
        );

        Ok(LogDailyActivityResult {
            record,
            baseline_total,
            difference_from_baseline,
        })
    }
}
