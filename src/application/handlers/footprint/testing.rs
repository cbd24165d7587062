//! Shared test doubles for footprint handlers.

use async_trait::async_trait;
use std::sync::Mutex;

use crate::domain::footprint::{
    categorize, compute_footprint, CarbonResult, DietProfile, ElectricityProfile,
    LifestyleProfile, Profile, TransportProfile, TravelMode,
};
use crate::domain::foundation::{DomainError, ErrorCode, Timestamp, UserId};
use crate::ports::{BaselineRecord, DailyLogRecord, FootprintRepository};

pub struct MockFootprintRepository {
    pub baselines: Mutex<Vec<BaselineRecord>>,
    pub daily_logs: Mutex<Vec<DailyLogRecord>>,
    pub should_fail: bool,
}

impl MockFootprintRepository {
    pub fn new() -> Self {
        Self {
            baselines: Mutex::new(Vec::new()),
            daily_logs: Mutex::new(Vec::new()),
            should_fail: false,
        }
    }

    pub fn failing() -> Self {
        Self {
            should_fail: true,
            ..Self::new()
        }
    }

    pub fn with_baseline(self, record: BaselineRecord) -> Self {
        self.baselines.lock().unwrap().push(record);
        self
    }

    fn check(&self) -> Result<(), DomainError> {
        if self.should_fail {
            return Err(DomainError::new(ErrorCode::StorageError, "Repository error"));
        }
        Ok(())
    }
}

#[async_trait]
impl FootprintRepository for MockFootprintRepository {
    async fn save_baseline(&self, record: &BaselineRecord) -> Result<(), DomainError> {
        self.check()?;
        let mut baselines = self.baselines.lock().unwrap();
        baselines.retain(|b| b.user_id != record.user_id);
        baselines.push(record.clone());
        Ok(())
    }

    async fn find_baseline(&self, user_id: &UserId) -> Result<Option<BaselineRecord>, DomainError> {
        self.check()?;
        Ok(self
            .baselines
            .lock()
            .unwrap()
            .iter()
            .find(|b| &b.user_id == user_id)
            .cloned())
    }

    async fn save_daily_log(&self, record: &DailyLogRecord) -> Result<(), DomainError> {
        self.check()?;
        self.daily_logs.lock().unwrap().push(record.clone());
        Ok(())
    }

    async fn list_daily_logs(
        &self,
        user_id: &UserId,
        limit: usize,
    ) -> Result<Vec<DailyLogRecord>, DomainError> {
        self.check()?;
        Ok(self
            .daily_logs
            .lock()
            .unwrap()
            .iter()
            .rev()
            .filter(|r| &r.user_id == user_id)
            .take(limit)
            .cloned()
            .collect())
    }
}

pub fn test_user_id() -> UserId {
    UserId::new("user-123").unwrap()
}

/// A complete profile that passes baseline validation.
pub fn complete_profile() -> Profile {
    Profile {
        transport: Some(TransportProfile {
            primary_mode: Some(TravelMode::Bus),
            ..Default::default()
        }),
        diet: Some(DietProfile {
            meals_per_day: Some(3),
            meat_percentage: Some(50.0),
            dairy_percentage: Some(25.0),
            plant_percentage: Some(25.0),
            ..Default::default()
        }),
        electricity: Some(ElectricityProfile {
            monthly_kwh: Some(300.0),
            household_size: Some(3),
            ..Default::default()
        }),
        lifestyle: Some(LifestyleProfile::default()),
    }
}

pub fn stored_baseline(user_id: UserId, profile: Profile) -> BaselineRecord {
    let result: CarbonResult = compute_footprint(&profile).unwrap();
    BaselineRecord {
        user_id,
        category: categorize(result.total),
        result,
        profile,
        recommendations: vec![],
        updated_at: Timestamp::now(),
    }
}
