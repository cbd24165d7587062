//! FootprintRepository port for baseline and daily-log persistence

use async_trait::async_trait;

use crate::domain::footprint::{CarbonResult, DailyLogInput, FootprintCategory, Profile};
use crate::domain::foundation::{DailyLogId, DomainError, Timestamp, UserId};

/// A user's stored baseline: the onboarding profile and what it scored.
#[derive(Debug, Clone, PartialEq)]
pub struct BaselineRecord {
    pub user_id: UserId,
    pub profile: Profile,
    pub result: CarbonResult,
    pub category: FootprintCategory,
    pub recommendations: Vec<String>,
    pub updated_at: Timestamp,
}

/// One scored day of activity.
#[derive(Debug, Clone, PartialEq)]
pub struct DailyLogRecord {
    pub id: DailyLogId,
    pub user_id: UserId,
    pub input: DailyLogInput,
    pub result: CarbonResult,
    /// kg CO2e avoided by walking.
    pub avoided: f64,
    /// `max(total - avoided, 0)`.
    pub net_total: f64,
    pub logged_at: Timestamp,
}

/// Repository for footprint baselines and daily logs
#[async_trait]
pub trait FootprintRepository: Send + Sync {
    /// Store a baseline, replacing any previous one for the same user
    async fn save_baseline(&self, record: &BaselineRecord) -> Result<(), DomainError>;

    /// Find the baseline for a user
    async fn find_baseline(&self, user_id: &UserId) -> Result<Option<BaselineRecord>, DomainError>;

    /// Append a daily log
    async fn save_daily_log(&self, record: &DailyLogRecord) -> Result<(), DomainError>;

    /// Most recent daily logs first, at most `limit` of them
    async fn list_daily_logs(
        &self,
        user_id: &UserId,
        limit: usize,
    ) -> Result<Vec<DailyLogRecord>, DomainError>;
}
