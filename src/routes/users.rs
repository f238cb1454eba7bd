use crate::cache::TtlCache;
use crate::error::SdkError;
use crate::fields::UserFields;
use crate::models::{UserInfo, UserLog, UserLogsResponse};
use crate::permissions;
use crate::routes::economy::EconomyRoutes;
use crate::transport::{Executor, RequestSpec};
use chrono::{DateTime, Utc};
use std::sync::Arc;

/// Filters for the user transaction log.
#[derive(Clone, Debug, Default)]
pub struct TransactionFilter {
    pub limit: Option<u32>,
    /// Only entries newer than this instant.
    pub time_limit: Option<DateTime<Utc>>,
}

/// Routes scoped to one user id.
pub struct UserRoutes {
    executor: Arc<Executor>,
    cache: Arc<TtlCache>,
    user_id: String,
}

impl UserRoutes {
    pub(crate) fn new(executor: Arc<Executor>, cache: Arc<TtlCache>, user_id: String) -> Self {
        UserRoutes {
            executor,
            cache,
            user_id,
        }
    }

    pub fn user_id(&self) -> &str {
        &self.user_id
    }

    /// Balance operations (give, receive, current balance) for this user.
    pub fn balance(&self) -> EconomyRoutes {
        EconomyRoutes::new(
            self.executor.clone(),
            self.cache.clone(),
            self.user_id.clone(),
        )
    }

    /// Full user record. `fields` selects which optional sections the
    /// server joins in; everything not selected stays `None` on the result.
    pub async fn info(&self, fields: Option<&UserFields>) -> Result<UserInfo, SdkError> {
        let mut spec = RequestSpec::get(format!("/user/info/{}", self.user_id));
        if let Some(include) = fields.and_then(UserFields::to_query) {
            spec = spec.query("include", include);
        }
        self.executor.send(spec, None, None).await
    }

    /// The user's economy activity log, newest first.
    pub async fn transactions(
        &self,
        filter: Option<&TransactionFilter>,
    ) -> Result<Vec<UserLog>, SdkError> {
        let mut spec = RequestSpec::get(format!("/economy/transactions/{}", self.user_id));
        if let Some(filter) = filter {
            if let Some(limit) = filter.limit {
                spec = spec.query("limit", limit.to_string());
            }
            if let Some(time_limit) = filter.time_limit {
                spec = spec.query("timeLimit", time_limit.to_rfc3339());
            }
        }
        let response: UserLogsResponse = self
            .executor
            .send(spec, Some(permissions::ECONOMY_READ), Some(&self.cache))
            .await?;
        Ok(response.data)
    }
}
