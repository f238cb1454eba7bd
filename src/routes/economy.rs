use crate::cache::{MONEY_KEY, MONEY_TTL, TtlCache};
use crate::error::SdkError;
use crate::models::{Balance, ExpiresIn, StxTransactionResponse};
use crate::permissions;
use crate::routes::transaction::TransactionHandle;
use crate::transport::{Executor, RequestSpec};
use log::{debug, info};
use serde::Serialize;
use serde_json::json;
use std::sync::Arc;

/// Parameters shared by the give and take routes. The target member id is
/// supplied by the owning [`crate::routes::UserRoutes`] scope.
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GiveTakeRequest {
    pub guild_id: String,
    pub channel_id: String,
    pub amount: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
    /// How long the member has to confirm before the transaction expires.
    pub expires_at: ExpiresIn,
}

/// Balance operations scoped to one user.
pub struct EconomyRoutes {
    executor: Arc<Executor>,
    cache: Arc<TtlCache>,
    user_id: String,
}

impl EconomyRoutes {
    pub(crate) fn new(executor: Arc<Executor>, cache: Arc<TtlCache>, user_id: String) -> Self {
        EconomyRoutes {
            executor,
            cache,
            user_id,
        }
    }

    /// Gives STX to the user and returns a handle on the created
    /// transaction, usually awaited with
    /// [`TransactionHandle::wait_for_completion`].
    ///
    /// Fails locally, without a network call, on a non-positive amount or
    /// when the cached bot balance already shows insufficient funds (the
    /// cached figure may be up to 20 seconds stale; the server remains
    /// authoritative).
    pub async fn give(&self, request: &GiveTakeRequest) -> Result<TransactionHandle, SdkError> {
        if request.amount < 1 {
            return Err(SdkError::invalid_request("amount must be greater than 0"));
        }
        if let Some(money) = self.cache.get::<i64>(MONEY_KEY).await? {
            if money < request.amount {
                return Err(SdkError::insufficient_funds("not enough money"));
            }
        }

        info!("giving {} STX to user {}", request.amount, self.user_id);
        let response: StxTransactionResponse = self
            .executor
            .send(
                RequestSpec::post("/economy/give-stx").json(self.body(request)?),
                Some(permissions::ECONOMY_WRITE),
                Some(&self.cache),
            )
            .await?;

        self.cache
            .set(MONEY_KEY, &response.bot_balance, MONEY_TTL)
            .await?;
        debug!(
            "transaction {} created, bot balance {}",
            response.transaction_id, response.bot_balance
        );
        Ok(TransactionHandle::new(
            self.executor.clone(),
            self.cache.clone(),
            response.data,
        ))
    }

    /// Requests STX from the user; the member confirms on their side before
    /// the window closes.
    pub async fn receive(&self, request: &GiveTakeRequest) -> Result<TransactionHandle, SdkError> {
        if request.amount < 1 {
            return Err(SdkError::invalid_request("amount must be greater than 0"));
        }

        info!(
            "requesting {} STX from user {}",
            request.amount, self.user_id
        );
        let response: StxTransactionResponse = self
            .executor
            .send(
                RequestSpec::post("/economy/take-stx").json(self.body(request)?),
                Some(permissions::ECONOMY_WRITE),
                Some(&self.cache),
            )
            .await?;

        self.cache
            .set(MONEY_KEY, &response.bot_balance, MONEY_TTL)
            .await?;
        Ok(TransactionHandle::new(
            self.executor.clone(),
            self.cache.clone(),
            response.data,
        ))
    }

    /// The user's current balance.
    pub async fn get(&self) -> Result<Balance, SdkError> {
        self.executor
            .send(
                RequestSpec::get(format!("/economy/balance/{}", self.user_id)),
                Some(permissions::ECONOMY_READ),
                Some(&self.cache),
            )
            .await
    }

    fn body(&self, request: &GiveTakeRequest) -> Result<serde_json::Value, SdkError> {
        let mut body = serde_json::to_value(request)
            .map_err(|e| SdkError::invalid_request(format!("invalid request data: {e}")))?;
        body["memberId"] = json!(self.user_id);
        Ok(body)
    }
}
