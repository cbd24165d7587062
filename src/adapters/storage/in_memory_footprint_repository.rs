//! In-Memory Footprint Repository Adapter
//!
//! Stores baselines and daily logs in memory.
//! Used by the binary and by tests; durable storage plugs in behind the
//! same port.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::foundation::{DomainError, UserId};
use crate::ports::{BaselineRecord, DailyLogRecord, FootprintRepository};

/// In-memory storage for footprint records
#[derive(Debug, Clone)]
pub struct InMemoryFootprintRepository {
    baselines: Arc<RwLock<HashMap<UserId, BaselineRecord>>>,
    daily_logs: Arc<RwLock<HashMap<UserId, Vec<DailyLogRecord>>>>,
}

impl InMemoryFootprintRepository {
    /// Create a new, empty repository
    pub fn new() -> Self {
        Self {
            baselines: Arc::new(RwLock::new(HashMap::new())),
            daily_logs: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    /// Clear all stored data (useful for tests)
    pub async fn clear(&self) {
        self.baselines.write().await.clear();
        self.daily_logs.write().await.clear();
    }

    /// Number of stored baselines
    pub async fn baseline_count(&self) -> usize {
        self.baselines.read().await.len()
    }

    /// Number of daily logs stored for a user
    pub async fn daily_log_count(&self, user_id: &UserId) -> usize {
        self.daily_logs
            .read()
            .await
            .get(user_id)
            .map_or(0, Vec::len)
    }
}

impl Default for InMemoryFootprintRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl FootprintRepository for InMemoryFootprintRepository {
    async fn save_baseline(&self, record: &BaselineRecord) -> Result<(), DomainError> {
        let mut baselines = self.baselines.write().await;
        baselines.insert(record.user_id.clone(), record.clone());
        Ok(())
    }

    async fn find_baseline(&self, user_id: &UserId) -> Result<Option<BaselineRecord>, DomainError> {
        let baselines = self.baselines.read().await;
        Ok(baselines.get(user_id).cloned())
    }

    async fn save_daily_log(&self, record: &DailyLogRecord) -> Result<(), DomainError> {
        let mut logs = self.daily_logs.write().await;
        logs.entry(record.user_id.clone())
            .or_default()
            .push(record.clone());
        Ok(())
    }

    async fn list_daily_logs(
        &self,
        user_id: &UserId,
        limit: usize,
    ) -> Result<Vec<DailyLogRecord>, DomainError> {
        let logs = self.daily_logs.read().await;
        let Some(user_logs) = logs.get(user_id) else {
            return Ok(Vec::new());
        };

        // Newest insertion first, so equal timestamps keep a stable order
        let mut records: Vec<DailyLogRecord> = user_logs.iter().rev().cloned().collect();
        records.sort_by(|a, b| b.logged_at.cmp(&a.logged_at));
        records.truncate(limit);
        Ok(records)
    }
}
