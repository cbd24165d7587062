//! HTTP handlers for footprint endpoints.
//!
//! These handlers connect Axum routes to application layer handlers.

use std::collections::BTreeMap;
use std::sync::Arc;

use axum::extract::{Json, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;

use crate::application::handlers::{
    ComputeWhatIfHandler, ComputeWhatIfQuery, EstimateFootprintHandler, EstimateFootprintQuery,
    GetBaselineHandler, GetBaselineQuery, ListDailyLogsHandler, ListDailyLogsQuery,
    LogDailyActivityCommand, LogDailyActivityHandler, SubmitBaselineCommand,
    SubmitBaselineHandler,
};
use crate::domain::footprint::{DailyLogInput, FootprintEngine, Profile};
use crate::domain::foundation::{DomainError, ErrorCode, UserId};
use crate::ports::FootprintRepository;

use super::dto::{
    BaselineResponse, DailyLogListResponse, DailyLogResponse, ErrorResponse, FootprintResponse,
    ListDailyLogsParams, WhatIfRequest, WhatIfResponse,
};

// ════════════════════════════════════════════════════════════════════════════════
// Error Type
// ════════════════════════════════════════════════════════════════════════════════

/// Footprint API error that implements IntoResponse.
#[derive(Debug)]
pub struct FootprintApiError {
    error: DomainError,
    verbose: bool,
}

impl FootprintApiError {
    pub fn new(error: DomainError, verbose: bool) -> Self {
        Self { error, verbose }
    }

    fn status(&self) -> StatusCode {
        match self.error.code {
            code if code.is_client_error() => StatusCode::BAD_REQUEST,
            ErrorCode::BaselineNotFound => StatusCode::NOT_FOUND,
            ErrorCode::Unauthorized => StatusCode::UNAUTHORIZED,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for FootprintApiError {
    fn into_response(self) -> axum::response::Response {
        let status = self.status();

        let body = if status.is_server_error() && !self.verbose {
            tracing::error!(error = %self.error, "request failed");
            ErrorResponse::internal("An internal error occurred")
        } else {
            let mut body = ErrorResponse::new(self.error.code.to_string(), self.error.message);
            // Client errors always name the field; everything else only when verbose
            if status.is_client_error() || self.verbose {
                if !self.error.details.is_empty() {
                    let details: BTreeMap<String, String> =
                        self.error.details.into_iter().collect();
                    body = body.with_details(serde_json::json!(details));
                }
            }
            body
        };

        (status, Json(body)).into_response()
    }
}

// ════════════════════════════════════════════════════════════════════════════════
// Application State
// ════════════════════════════════════════════════════════════════════════════════

/// Shared application state containing footprint dependencies.
#[derive(Clone)]
pub struct FootprintAppState {
    pub repository: Arc<dyn FootprintRepository>,
    pub engine: FootprintEngine,
    pub verbose_errors: bool,
}

impl FootprintAppState {
    pub fn new(
        repository: Arc<dyn FootprintRepository>,
        engine: FootprintEngine,
        verbose_errors: bool,
    ) -> Self {
        Self {
            repository,
            engine,
            verbose_errors,
        }
    }

    /// Wraps a domain error with this deployment's verbosity.
    pub fn reject(&self, error: DomainError) -> FootprintApiError {
        FootprintApiError::new(error, self.verbose_errors)
    }

    pub fn estimate_handler(&self) -> EstimateFootprintHandler {
        EstimateFootprintHandler::new(self.engine.clone())
    }

    pub fn submit_baseline_handler(&self) -> SubmitBaselineHandler {
        SubmitBaselineHandler::new(self.repository.clone(), self.engine.clone())
    }

    pub fn get_baseline_handler(&self) -> GetBaselineHandler {
        GetBaselineHandler::new(self.repository.clone())
    }

    pub fn what_if_handler(&self) -> ComputeWhatIfHandler {
        ComputeWhatIfHandler::new(self.repository.clone(), self.engine.clone())
    }

    pub fn log_daily_activity_handler(&self) -> LogDailyActivityHandler {
        LogDailyActivityHandler::new(self.repository.clone(), self.engine.clone())
    }

    pub fn list_daily_logs_handler(&self) -> ListDailyLogsHandler {
        ListDailyLogsHandler::new(self.repository.clone())
    }
}

// ════════════════════════════════════════════════════════════════════════════════
// User Context
// ════════════════════════════════════════════════════════════════════════════════

/// Caller identity taken from the `x-user-id` header.
#[derive(Debug, Clone)]
pub struct AuthenticatedUser {
    pub user_id: UserId,
}

/// Rejection type for AuthenticatedUser extraction.
pub struct AuthenticationRequired;

impl IntoResponse for AuthenticationRequired {
    fn into_response(self) -> axum::response::Response {
        let error = ErrorResponse::unauthorized("Authentication is required");
        (StatusCode::UNAUTHORIZED, Json(error)).into_response()
    }
}

impl<S> axum::extract::FromRequestParts<S> for AuthenticatedUser
where
    S: Send + Sync,
{
    type Rejection = AuthenticationRequired;

    fn from_request_parts<'life0, 'life1, 'async_trait>(
        parts: &'life0 mut axum::http::request::Parts,
        _state: &'life1 S,
    ) -> std::pin::Pin<
        Box<dyn std::future::Future<Output = Result<Self, Self::Rejection>> + Send + 'async_trait>,
    >
    where
        'life0: 'async_trait,
        'life1: 'async_trait,
        Self: 'async_trait,
    {
        Box::pin(async move {
            let user_id = parts
                .headers
                .get("x-user-id")
                .and_then(|h| h.to_str().ok())
                .and_then(|s| UserId::new(s).ok())
                .ok_or(AuthenticationRequired)?;

            Ok(AuthenticatedUser { user_id })
        })
    }
}

// ════════════════════════════════════════════════════════════════════════════════
// Handlers
// ════════════════════════════════════════════════════════════════════════════════

/// POST /api/footprint/estimate
///
/// Scores any (possibly partial) profile without storing it.
pub async fn estimate_footprint(
    State(state): State<FootprintAppState>,
    Json(profile): Json<Profile>,
) -> Result<Json<FootprintResponse>, FootprintApiError> {
    let estimate = state
        .estimate_handler()
        .handle(EstimateFootprintQuery { profile })
        .map_err(|e| state.reject(e))?;

    Ok(Json(estimate.into()))
}

/// POST /api/footprint/baseline
///
/// Scores and stores the caller's baseline, replacing any previous one.
pub async fn submit_baseline(
    State(state): State<FootprintAppState>,
    user: AuthenticatedUser,
    Json(profile): Json<Profile>,
) -> Result<(StatusCode, Json<BaselineResponse>), FootprintApiError> {
    let cmd = SubmitBaselineCommand {
        user_id: user.user_id,
        profile,
    };

    let record = state
        .submit_baseline_handler()
        .handle(cmd)
        .await
        .map_err(|e| state.reject(e))?;

    Ok((
        StatusCode::CREATED,
        Json(BaselineResponse::from_record(record, &state.engine)),
    ))
}

/// GET /api/footprint/baseline
pub async fn get_baseline(
    State(state): State<FootprintAppState>,
    user: AuthenticatedUser,
) -> Result<Json<BaselineResponse>, FootprintApiError> {
    let record = state
        .get_baseline_handler()
        .handle(GetBaselineQuery {
            user_id: user.user_id,
        })
        .await
        .map_err(|e| state.reject(e))?;

    Ok(Json(BaselineResponse::from_record(record, &state.engine)))
}

/// POST /api/footprint/what-if
///
/// Scores the stored baseline with the override applied. Nothing is stored.
pub async fn compute_what_if(
    State(state): State<FootprintAppState>,
    user: AuthenticatedUser,
    Json(request): Json<WhatIfRequest>,
) -> Result<Json<WhatIfResponse>, FootprintApiError> {
    let query = ComputeWhatIfQuery {
        user_id: user.user_id,
        over: request.over,
    };

    let result = state
        .what_if_handler()
        .handle(query)
        .await
        .map_err(|e| state.reject(e))?;

    Ok(Json(WhatIfResponse::from_result(result, &state.engine)))
}

/// POST /api/footprint/daily-logs
pub async fn log_daily_activity(
    State(state): State<FootprintAppState>,
    user: AuthenticatedUser,
    Json(input): Json<DailyLogInput>,
) -> Result<(StatusCode, Json<DailyLogResponse>), FootprintApiError> {
    let cmd = LogDailyActivityCommand {
        user_id: user.user_id,
        input,
    };

    let result = state
        .log_daily_activity_handler()
        .handle(cmd)
        .await
        .map_err(|e| state.reject(e))?;

    Ok((StatusCode::CREATED, Json(result.into())))
}

/// GET /api/footprint/daily-logs?limit=N
pub async fn list_daily_logs(
    State(state): State<FootprintAppState>,
    user: AuthenticatedUser,
    Query(params): Query<ListDailyLogsParams>,
) -> Result<Json<DailyLogListResponse>, FootprintApiError> {
    let query = ListDailyLogsQuery {
        user_id: user.user_id,
        limit: params.limit,
    };

    let records = state
        .list_daily_logs_handler()
        .handle(query)
        .await
        .map_err(|e| state.reject(e))?;

    Ok(Json(records.into()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::to_bytes;

    async fn body_json(error: FootprintApiError) -> (StatusCode, serde_json::Value) {
        let response = error.into_response();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[tokio::test]
    async fn client_errors_are_bad_request_with_field() {
        let error = DomainError::validation("diet", "percentages must sum to 100");
        let (status, body) = body_json(FootprintApiError::new(error, false)).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["code"], "VALIDATION_FAILED");
        assert_eq!(body["details"]["field"], "diet");
    }

    #[tokio::test]
    async fn missing_baseline_is_not_found() {
        let error = DomainError::new(ErrorCode::BaselineNotFound, "No baseline");
        let (status, body) = body_json(FootprintApiError::new(error, false)).await;

        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["code"], "BASELINE_NOT_FOUND");
    }

    #[tokio::test]
    async fn server_errors_hidden_unless_verbose() {
        let error = DomainError::new(ErrorCode::StorageError, "disk on fire")
            .with_detail("table", "baselines");

        let (status, body) = body_json(FootprintApiError::new(error.clone(), false)).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body["code"], "INTERNAL_ERROR");
        assert!(body.get("details").is_none());

        let (_, body) = body_json(FootprintApiError::new(error, true)).await;
        assert_eq!(body["code"], "STORAGE_ERROR");
        assert_eq!(body["message"], "disk on fire");
        assert_eq!(body["details"]["table"], "baselines");
    }

    #[tokio::test]
    async fn invalid_profile_field_is_client_error() {
        let error = DomainError::new(ErrorCode::InvalidProfileField, "bad kwh");
        let (status, _) = body_json(FootprintApiError::new(error, false)).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }
}
