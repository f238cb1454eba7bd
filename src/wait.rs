//! Shared completion-wait engine. Transactions and giveaways both resolve
//! asynchronously on the server; the engine polls while the deadline is far
//! away and switches strategy once less than the near window remains, so a
//! wait never busy-loops and never polls right up against the expiry.

use crate::error::SdkError;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use log::debug;
use std::time::Duration;

/// Inside this window the engine stops polling and lets the near-deadline
/// strategy capture the terminal transition.
pub(crate) const NEAR_WINDOW: Duration = Duration::from_secs(5 * 60);

pub(crate) const TRANSACTION_POLL_INTERVAL: Duration = Duration::from_secs(3);
pub(crate) const GIVEAWAY_POLL_INTERVAL: Duration = Duration::from_secs(60);

/// Strategy applied once the deadline is inside [`NEAR_WINDOW`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum NearDeadline {
    /// One request to the server-side blocking wait route; the server holds
    /// the connection until the entity resolves or expires.
    ServerWait,
    /// Sleep out the remaining time, then take one final snapshot.
    SleepUntilExpiry,
}

#[derive(Clone, Copy, Debug)]
pub(crate) struct WaitPolicy {
    pub poll_interval: Duration,
    pub near_deadline: NearDeadline,
}

/// Entity-specific pieces the engine is parameterized over. Implementations
/// wrap a resource handle; `refresh` goes through the handle's normal fetch
/// so the snapshot replacement discipline is identical to a manual fetch.
#[async_trait]
pub(crate) trait WaitTarget {
    type Outcome;

    fn expires_at(&self) -> DateTime<Utc>;

    /// Refreshes the snapshot; `Some` when a terminal state was observed.
    async fn refresh(&mut self) -> Result<Option<Self::Outcome>, SdkError>;

    /// One call to the server-side blocking wait route.
    async fn server_wait(&mut self) -> Result<Self::Outcome, SdkError>;

    /// Outcome reported when the final post-expiry snapshot still reads as
    /// non-terminal (the server may settle a moment after the deadline).
    fn latest(&self) -> Result<Self::Outcome, SdkError>;
}

/// Runs the wait until a terminal outcome. Transport errors abort
/// immediately; only the still-pending condition is ever retried.
pub(crate) async fn wait_for_outcome<T>(
    target: &mut T,
    policy: WaitPolicy,
) -> Result<T::Outcome, SdkError>
where
    T: WaitTarget + Send,
{
    loop {
        let remaining = remaining_time(target.expires_at());
        if remaining <= NEAR_WINDOW {
            debug!("deadline within {NEAR_WINDOW:?}, applying {:?}", policy.near_deadline);
            return match policy.near_deadline {
                NearDeadline::ServerWait => target.server_wait().await,
                NearDeadline::SleepUntilExpiry => {
                    if !remaining.is_zero() {
                        tokio::time::sleep(remaining).await;
                    }
                    match target.refresh().await? {
                        Some(outcome) => Ok(outcome),
                        None => target.latest(),
                    }
                }
            };
        }

        tokio::time::sleep(policy.poll_interval).await;
        if let Some(outcome) = target.refresh().await? {
            return Ok(outcome);
        }
    }
}

fn remaining_time(expires_at: DateTime<Utc>) -> Duration {
    (expires_at - Utc::now()).to_std().unwrap_or(Duration::ZERO)
}
