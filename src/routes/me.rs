use crate::cache::TtlCache;
use crate::error::SdkError;
use crate::models::{Balance, VotesResponse};
use crate::permissions;
use crate::transport::{Executor, RequestSpec};
use std::sync::Arc;

/// Routes scoped to the bot's own account.
pub struct MeRoutes {
    executor: Arc<Executor>,
    cache: Arc<TtlCache>,
}

impl MeRoutes {
    pub(crate) fn new(executor: Arc<Executor>, cache: Arc<TtlCache>) -> Self {
        MeRoutes { executor, cache }
    }

    /// The bot's own balance.
    pub async fn balance(&self) -> Result<Balance, SdkError> {
        self.executor
            .send(
                RequestSpec::get("/economy/balance"),
                Some(permissions::ECONOMY_READ),
                Some(&self.cache),
            )
            .await
    }

    /// Botlist votes received, with one entry per vote.
    pub async fn votes(&self) -> Result<VotesResponse, SdkError> {
        self.executor
            .send(RequestSpec::get("/botlist/votes"), None, None)
            .await
    }
}
