//! GetBaseline - Query handler for a user's stored baseline.

use std::sync::Arc;

use crate::domain::foundation::{DomainError, ErrorCode, UserId};
use crate::ports::{BaselineRecord, FootprintRepository};

/// Query for the baseline of one user.
#[derive(Debug, Clone)]
pub struct GetBaselineQuery {
    pub user_id: UserId,
}

/// Handler for baseline lookups.
pub struct GetBaselineHandler {
    repository: Arc<dyn FootprintRepository>,
}

impl GetBaselineHandler {
    pub fn new(repository: Arc<dyn FootprintRepository>) -> Self {
        Self { repository }
    }

    pub async fn handle(&self, query: GetBaselineQuery) -> Result<BaselineRecord, DomainError> {
        self.repository
            .find_baseline(&query.user_id)
            .await?
            .ok_or_else(|| {
                DomainError::new(ErrorCode::BaselineNotFound, "No baseline has been submitted")
                    .with_detail("user_id", query.user_id.as_str())
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::handlers::footprint::testing::{
        complete_profile, stored_baseline, test_user_id, MockFootprintRepository,
    };

    #[tokio::test]
    async fn test_get_baseline_found() {
        let record = stored_baseline(test_user_id(), complete_profile());
        let repo = Arc::new(MockFootprintRepository::new().with_baseline(record.clone()));
        let handler = GetBaselineHandler::new(repo);

        let found = handler
            .handle(GetBaselineQuery {
                user_id: test_user_id(),
            })
            .await
            .unwrap();

        assert_eq!(found, record);
    }

    #[tokio::test]
    async fn test_get_baseline_missing() {
        let handler = GetBaselineHandler::new(Arc::new(MockFootprintRepository::new()));

        let err = handler
            .handle(GetBaselineQuery {
                user_id: test_user_id(),
            })
            .await
            .unwrap_err();

        assert_eq!(err.code, ErrorCode::BaselineNotFound);
        assert_eq!(err.details.get("user_id").unwrap(), "user-123");
    }
}
