use crate::cache::{
    GIVEAWAYS_KEY, GIVEAWAYS_TTL, MONEY_KEY, MONEY_TTL, PERMISSIONS_KEY, PERMISSIONS_TTL, TtlCache,
};
use crate::config::ClientConfig;
use crate::error::SdkError;
use crate::models::Giveaway;
use crate::routes::{GiveawayHandle, MeRoutes, TransactionHandle, TryviaRoutes, UserRoutes};
use crate::transport::{Executor, HttpBackend, ReqwestBackend, RequestSpec};
use log::{info, warn};
use serde::Deserialize;
use std::sync::Arc;

/// Bulk snapshot returned by the cache warm-up route.
#[derive(Clone, Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CacheWarm {
    pub money: i64,
    pub permissions: Vec<String>,
    pub giveaways: Vec<Giveaway>,
}

/// Entry point of the SDK. Owns the shared TTL cache and request executor;
/// every route object and resource handle it spawns references both, so a
/// balance cached by one handle is visible to all of them.
pub struct StxClient {
    executor: Arc<Executor>,
    cache: Arc<TtlCache>,
}

impl StxClient {
    pub fn new(config: ClientConfig) -> Self {
        let backend = Arc::new(ReqwestBackend::new(config.base_url.clone()));
        StxClient::with_backend(config, backend)
    }

    pub fn from_env() -> Result<Self, SdkError> {
        Ok(StxClient::new(ClientConfig::from_env()?))
    }

    pub(crate) fn with_backend(config: ClientConfig, backend: Arc<dyn HttpBackend>) -> Self {
        let executor = Arc::new(Executor::new(backend, config.token.clone(), config.debug));
        StxClient {
            executor,
            cache: Arc::new(TtlCache::new()),
        }
    }

    /// Warms the shared cache with one bulk request: current balance,
    /// granted permissions and the known giveaways. The cache is an
    /// optimization, so a failure here is logged and reported as `None`
    /// rather than an error; every route works without the warm-up, it just
    /// loses the client-side short-circuits.
    pub async fn init_cache(&self) -> Option<CacheWarm> {
        let warm = match self
            .executor
            .send::<CacheWarm>(RequestSpec::get("/cache"), None, None)
            .await
        {
            Ok(warm) => warm,
            Err(err) => {
                warn!("cache warm-up failed: {err}");
                return None;
            }
        };

        if let Err(err) = self.store_warm(&warm).await {
            warn!("cache warm-up could not be stored: {err}");
            return None;
        }

        info!(
            "cache warmed: balance {}, {} permissions, {} giveaways",
            warm.money,
            warm.permissions.len(),
            warm.giveaways.len()
        );
        Some(warm)
    }

    async fn store_warm(&self, warm: &CacheWarm) -> Result<(), SdkError> {
        self.cache.set(MONEY_KEY, &warm.money, MONEY_TTL).await?;
        self.cache
            .set(PERMISSIONS_KEY, &warm.permissions, PERMISSIONS_TTL)
            .await?;
        self.cache
            .set(GIVEAWAYS_KEY, &warm.giveaways, GIVEAWAYS_TTL)
            .await
    }

    /// Routes scoped to one user.
    pub fn user(&self, user_id: impl Into<String>) -> UserRoutes {
        UserRoutes::new(self.executor.clone(), self.cache.clone(), user_id.into())
    }

    /// Routes scoped to the bot's own account.
    pub fn me(&self) -> MeRoutes {
        MeRoutes::new(self.executor.clone(), self.cache.clone())
    }

    /// Quiz session routes.
    pub fn tryvia(&self) -> TryviaRoutes {
        TryviaRoutes::new(self.executor.clone())
    }

    /// Reference to a transaction by id. No network call happens until the
    /// handle fetches or waits.
    pub fn transaction(&self, id: i64) -> TransactionHandle {
        TransactionHandle::by_id(self.executor.clone(), self.cache.clone(), id)
    }

    /// Reference to a giveaway by id, same laziness as
    /// [`StxClient::transaction`].
    pub fn giveaway(&self, id: i64) -> GiveawayHandle {
        GiveawayHandle::by_id(self.executor.clone(), self.cache.clone(), id)
    }

    /// The client's shared cache, mostly useful for inspecting or clearing
    /// cached permission and balance snapshots.
    pub fn cache(&self) -> &TtlCache {
        &self.cache
    }
}
