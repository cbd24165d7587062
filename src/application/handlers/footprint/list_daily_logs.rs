//! ListDailyLogs - Query handler for a user's recent daily logs.

use std::sync::Arc;

use crate::domain::foundation::{DomainError, UserId, ValidationError};
use crate::ports::{DailyLogRecord, FootprintRepository};

/// Logs returned when no limit is given.
pub const DEFAULT_DAILY_LOG_LIMIT: usize = 30;

/// Largest accepted limit.
pub const MAX_DAILY_LOG_LIMIT: usize = 100;

/// Query for a user's most recent daily logs.
#[derive(Debug, Clone)]
pub struct ListDailyLogsQuery {
    pub user_id: UserId,
    pub limit: Option<usize>,
}

/// Handler for daily-log listings.
pub struct ListDailyLogsHandler {
    repository: Arc<dyn FootprintRepository>,
}

impl ListDailyLogsHandler {
    pub fn new(repository: Arc<dyn FootprintRepository>) -> Self {
        Self { repository }
    }

    pub async fn handle(&self, query: ListDailyLogsQuery) -> Result<Vec<DailyLogRecord>, DomainError> {
        let limit = query.limit.unwrap_or(DEFAULT_DAILY_LOG_LIMIT);
        if !(1..=MAX_DAILY_LOG_LIMIT).contains(&limit) {
            return Err(ValidationError::out_of_range(
                "limit",
                1.0,
                MAX_DAILY_LOG_LIMIT as f64,
                limit as f64,
            )
            .into());
        }

        self.repository.list_daily_logs(&query.user_id, limit).await
    }
}
