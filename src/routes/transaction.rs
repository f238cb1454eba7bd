use crate::cache::TtlCache;
use crate::error::{ErrorKind, SdkError};
use crate::models::{Transaction, TransactionEnvelope, TransactionStatus, WaitResponse};
use crate::permissions;
use crate::transport::{Executor, RequestSpec};
use crate::wait::{
    NearDeadline, TRANSACTION_POLL_INTERVAL, WaitPolicy, WaitTarget, wait_for_outcome,
};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use log::info;
use std::sync::Arc;

/// Handle on one remote transaction. Holds the last-fetched snapshot; an
/// id-only handle stays empty until the first fetch or wait.
pub struct TransactionHandle {
    executor: Arc<Executor>,
    cache: Arc<TtlCache>,
    id: i64,
    snapshot: Option<Transaction>,
}

impl std::fmt::Debug for TransactionHandle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TransactionHandle")
            .field("id", &self.id)
            .field("snapshot", &self.snapshot)
            .finish_non_exhaustive()
    }
}

impl TransactionHandle {
    pub(crate) fn new(
        executor: Arc<Executor>,
        cache: Arc<TtlCache>,
        transaction: Transaction,
    ) -> Self {
        TransactionHandle {
            executor,
            cache,
            id: transaction.id,
            snapshot: Some(transaction),
        }
    }

    /// Reference to a remote transaction without materializing it; no
    /// network call happens until a fetch or action method runs.
    pub(crate) fn by_id(executor: Arc<Executor>, cache: Arc<TtlCache>, id: i64) -> Self {
        TransactionHandle {
            executor,
            cache,
            id,
            snapshot: None,
        }
    }

    pub fn id(&self) -> i64 {
        self.id
    }

    /// Last-fetched snapshot, possibly stale; `None` on an unmaterialized
    /// id-only handle.
    pub fn info(&self) -> Option<&Transaction> {
        self.snapshot.as_ref()
    }

    /// Fetches the current server state and replaces the snapshot wholesale.
    pub async fn fetch_info(&mut self) -> Result<Transaction, SdkError> {
        let envelope: TransactionEnvelope = self
            .executor
            .send(
                RequestSpec::get(format!("/transaction/{}", self.id)),
                Some(permissions::ECONOMY_READ),
                Some(&self.cache),
            )
            .await?;
        self.snapshot = Some(envelope.data.clone());
        Ok(envelope.data)
    }

    /// Waits until the transaction leaves `PENDING` and returns the terminal
    /// status. When the deadline is more than five minutes out the handle
    /// polls every few seconds; closer than that it delegates to the
    /// server-side blocking wait route.
    pub async fn wait_for_completion(&mut self) -> Result<TransactionStatus, SdkError> {
        if self.snapshot.is_none() {
            self.fetch_info().await?;
        }
        let snapshot = self
            .snapshot
            .as_ref()
            .ok_or_else(|| SdkError::transaction_error("transaction snapshot is unavailable"))?;

        if snapshot.status != TransactionStatus::Pending {
            return Err(SdkError::api(
                ErrorKind::TransactionNotPending,
                "transaction is not pending",
            ));
        }
        let expires_at = snapshot
            .expires_at
            .ok_or_else(|| SdkError::transaction_error("transaction never expires"))?;
        if expires_at <= Utc::now() {
            return Err(SdkError::transaction_error(
                "transaction is already expired",
            ));
        }

        info!("waiting for transaction {} to complete", self.id);
        let mut target = TransactionWait {
            handle: self,
            expires_at,
        };
        let status = wait_for_outcome(
            &mut target,
            WaitPolicy {
                poll_interval: TRANSACTION_POLL_INTERVAL,
                near_deadline: NearDeadline::ServerWait,
            },
        )
        .await?;
        info!("transaction {} resolved as {status:?}", self.id);
        Ok(status)
    }

    /// Like [`TransactionHandle::wait_for_completion`] but treats any
    /// terminal status other than `APPROVED` as an error.
    pub async fn wait_for_approval(&mut self) -> Result<TransactionStatus, SdkError> {
        let status = self.wait_for_completion().await?;
        if status != TransactionStatus::Approved {
            return Err(SdkError::api(
                ErrorKind::TransactionNotApproved,
                format!("transaction resolved as {status:?}, not APPROVED"),
            ));
        }
        Ok(status)
    }
}

struct TransactionWait<'a> {
    handle: &'a mut TransactionHandle,
    expires_at: DateTime<Utc>,
}

#[async_trait]
impl WaitTarget for TransactionWait<'_> {
    type Outcome = TransactionStatus;

    fn expires_at(&self) -> DateTime<Utc> {
        self.expires_at
    }

    async fn refresh(&mut self) -> Result<Option<TransactionStatus>, SdkError> {
        let transaction = self.handle.fetch_info().await?;
        if let Some(expires_at) = transaction.expires_at {
            self.expires_at = expires_at;
        }
        Ok(transaction.status.is_terminal().then_some(transaction.status))
    }

    async fn server_wait(&mut self) -> Result<TransactionStatus, SdkError> {
        let response: WaitResponse = self
            .handle
            .executor
            .send(
                RequestSpec::patch(format!("/economy/transaction/wait/{}", self.handle.id)),
                Some(permissions::ECONOMY_WRITE),
                Some(&self.handle.cache),
            )
            .await?;
        Ok(response.status)
    }

    fn latest(&self) -> Result<TransactionStatus, SdkError> {
        Ok(self
            .handle
            .snapshot
            .as_ref()
            .map(|t| t.status)
            .unwrap_or(TransactionStatus::Pending))
    }
}
