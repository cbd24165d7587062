//! HTTP DTOs for footprint endpoints.
//!
//! Request bodies reuse the domain input types, which already carry the
//! camelCase wire shape. Responses are flattened views over handler results.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::application::handlers::{FootprintEstimate, LogDailyActivityResult, WhatIfResult};
use crate::domain::footprint::{Breakdown, CarbonResult, DailyLogInput, FootprintEngine, Profile};
use crate::ports::{BaselineRecord, DailyLogRecord};

// ════════════════════════════════════════════════════════════════════════════════
// Request DTOs
// ════════════════════════════════════════════════════════════════════════════════

/// Body of `POST /api/footprint/what-if`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct WhatIfRequest {
    /// Fields replacing the stored baseline's for this computation only.
    #[serde(rename = "override", default)]
    pub over: Profile,
}

/// Query string of `GET /api/footprint/daily-logs`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ListDailyLogsParams {
    pub limit: Option<usize>,
}

// ════════════════════════════════════════════════════════════════════════════════
// Response DTOs
// ════════════════════════════════════════════════════════════════════════════════

/// Standard error response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub code: String,
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
}

impl ErrorResponse {
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: None,
        }
    }

    pub fn unauthorized(message: impl Into<String>) -> Self {
        Self::new("UNAUTHORIZED", message)
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::new("INTERNAL_ERROR", message)
    }

    pub fn with_details(mut self, details: serde_json::Value) -> Self {
        self.details = Some(details);
        self
    }
}

/// Footprint with its category and suggestions.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FootprintResponse {
    pub total: f64,
    pub breakdown: Breakdown,
    pub unit: String,
    pub category: String,
    pub recommendations: Vec<String>,
}

impl From<FootprintEstimate> for FootprintResponse {
    fn from(estimate: FootprintEstimate) -> Self {
        Self {
            total: estimate.result.total,
            breakdown: estimate.result.breakdown,
            unit: estimate.result.unit,
            category: estimate.category_label.to_string(),
            recommendations: estimate.recommendations,
        }
    }
}

/// Stored baseline.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BaselineResponse {
    pub user_id: String,
    pub profile: Profile,
    pub total: f64,
    pub breakdown: Breakdown,
    pub unit: String,
    pub category: String,
    pub recommendations: Vec<String>,
    pub updated_at: DateTime<Utc>,
}

impl BaselineResponse {
    pub fn from_record(record: BaselineRecord, engine: &FootprintEngine) -> Self {
        Self {
            user_id: record.user_id.to_string(),
            category: engine.category_label(record.category).to_string(),
            total: record.result.total,
            breakdown: record.result.breakdown,
            unit: record.result.unit,
            profile: record.profile,
            recommendations: record.recommendations,
            updated_at: *record.updated_at.as_datetime(),
        }
    }
}

/// Baseline versus adjusted footprint.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WhatIfResponse {
    pub baseline: CarbonResult,
    pub adjusted: CarbonResult,
    pub delta: f64,
    pub category: String,
}

impl WhatIfResponse {
    pub fn from_result(result: WhatIfResult, engine: &FootprintEngine) -> Self {
        Self {
            category: engine.category_label(result.category).to_string(),
            baseline: result.baseline,
            adjusted: result.adjusted,
            delta: result.delta,
        }
    }
}

/// One stored daily log.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DailyLogResponse {
    pub id: String,
    pub logged_at: DateTime<Utc>,
    pub input: DailyLogInput,
    pub total: f64,
    pub breakdown: Breakdown,
    pub unit: String,
    pub avoided: f64,
    pub net_total: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub baseline_total: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub difference_from_baseline: Option<f64>,
}

impl From<DailyLogRecord> for DailyLogResponse {
    fn from(record: DailyLogRecord) -> Self {
        Self {
            id: record.id.to_string(),
            logged_at: *record.logged_at.as_datetime(),
            input: record.input,
            total: record.result.total,
            breakdown: record.result.breakdown,
            unit: record.result.unit,
            avoided: record.avoided,
            net_total: record.net_total,
            baseline_total: None,
            difference_from_baseline: None,
        }
    }
}

impl From<LogDailyActivityResult> for DailyLogResponse {
    fn from(result: LogDailyActivityResult) -> Self {
        Self {
            baseline_total: result.baseline_total,
            difference_from_baseline: result.difference_from_baseline,
            ..Self::from(result.record)
        }
    }
}

/// Most recent daily logs first.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DailyLogListResponse {
    pub logs: Vec<DailyLogResponse>,
    pub count: usize,
}

impl From<Vec<DailyLogRecord>> for DailyLogListResponse {
    fn from(records: Vec<DailyLogRecord>) -> Self {
        let logs: Vec<DailyLogResponse> = records.into_iter().map(Into::into).collect();
        Self {
            count: logs.len(),
            logs,
        }
    }
}

/// Body of `GET /health`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
}
