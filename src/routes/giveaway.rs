use crate::cache::TtlCache;
use crate::error::{ErrorKind, SdkError};
use crate::models::Giveaway;
use crate::permissions;
use crate::transport::{Executor, RequestSpec};
use crate::wait::{GIVEAWAY_POLL_INTERVAL, NearDeadline, WaitPolicy, WaitTarget, wait_for_outcome};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use log::info;
use std::sync::Arc;

/// Handle on one remote giveaway. Same snapshot discipline as
/// [`crate::routes::TransactionHandle`]: the copy is replaced wholesale on
/// every fetch and an id-only handle stays empty until then.
pub struct GiveawayHandle {
    executor: Arc<Executor>,
    cache: Arc<TtlCache>,
    id: i64,
    snapshot: Option<Giveaway>,
}

impl GiveawayHandle {
    pub(crate) fn by_id(executor: Arc<Executor>, cache: Arc<TtlCache>, id: i64) -> Self {
        GiveawayHandle {
            executor,
            cache,
            id,
            snapshot: None,
        }
    }

    pub fn id(&self) -> i64 {
        self.id
    }

    /// Last-fetched snapshot, possibly stale.
    pub fn info(&self) -> Option<&Giveaway> {
        self.snapshot.as_ref()
    }

    pub async fn fetch_info(&mut self) -> Result<Giveaway, SdkError> {
        let giveaway: Giveaway = self
            .executor
            .send(
                RequestSpec::get(format!("/giveaway/info/{}", self.id)),
                Some(permissions::GIVEAWAY_INFO_READ),
                Some(&self.cache),
            )
            .await?;
        self.snapshot = Some(giveaway.clone());
        Ok(giveaway)
    }

    /// Waits until the giveaway ends and returns its final state. Far from
    /// the deadline the handle refreshes once a minute; inside the last
    /// five minutes it sleeps out the exact remainder and takes one final
    /// snapshot instead of polling tightly against the expiry.
    pub async fn wait_for_completion(&mut self) -> Result<Giveaway, SdkError> {
        if self.snapshot.is_none() {
            self.fetch_info().await?;
        }
        let snapshot = self
            .snapshot
            .as_ref()
            .ok_or_else(|| SdkError::giveaway_error("giveaway snapshot is unavailable"))?;

        if snapshot.ended {
            return Err(SdkError::api(
                ErrorKind::GiveawayAlreadyEnded,
                "giveaway already ended",
            ));
        }
        if snapshot.expires_at <= Utc::now() {
            return Err(SdkError::giveaway_error("giveaway is already expired"));
        }
        let expires_at = snapshot.expires_at;

        info!("waiting for giveaway {} to end", self.id);
        let mut target = GiveawayWait {
            handle: self,
            expires_at,
        };
        let giveaway = wait_for_outcome(
            &mut target,
            WaitPolicy {
                poll_interval: GIVEAWAY_POLL_INTERVAL,
                near_deadline: NearDeadline::SleepUntilExpiry,
            },
        )
        .await?;
        info!("giveaway {} finished (ended: {})", self.id, giveaway.ended);
        Ok(giveaway)
    }
}

struct GiveawayWait<'a> {
    handle: &'a mut GiveawayHandle,
    expires_at: DateTime<Utc>,
}

#[async_trait]
impl WaitTarget for GiveawayWait<'_> {
    type Outcome = Giveaway;

    fn expires_at(&self) -> DateTime<Utc> {
        self.expires_at
    }

    async fn refresh(&mut self) -> Result<Option<Giveaway>, SdkError> {
        let giveaway = self.handle.fetch_info().await?;
        self.expires_at = giveaway.expires_at;
        Ok(giveaway.ended.then_some(giveaway))
    }

    async fn server_wait(&mut self) -> Result<Giveaway, SdkError> {
        // giveaways have no blocking wait route; the policy never selects
        // this strategy for them
        Err(SdkError::giveaway_error(
            "giveaways have no server-side blocking wait",
        ))
    }

    fn latest(&self) -> Result<Giveaway, SdkError> {
        self.handle
            .snapshot
            .clone()
            .ok_or_else(|| SdkError::giveaway_error("giveaway snapshot is unavailable"))
    }
}
