use crate::error::{ErrorKind, SdkError};
use serde::Serialize;
use serde::de::DeserializeOwned;
use std::collections::HashMap;
use std::time::Duration;
use tokio::sync::RwLock;
use tokio::time::Instant;

/// Cached bot balance, refreshed from every mutating economy response.
pub const MONEY_KEY: &str = "money";
/// Cached bot permission set used for client-side pre-flight checks.
pub const PERMISSIONS_KEY: &str = "permissions";
/// Cached list of currently known giveaways.
pub const GIVEAWAYS_KEY: &str = "giveaways";

/// Balance staleness is accepted inside this window to skip a round trip.
pub const MONEY_TTL: Duration = Duration::from_secs(20);
/// Permissions change rarely, so the snapshot lives for an hour.
pub const PERMISSIONS_TTL: Duration = Duration::from_secs(60 * 60);
pub const GIVEAWAYS_TTL: Duration = Duration::from_secs(2 * 60);

/// Member of the cached permission set that grants every permission.
pub const ALL_PERMISSIONS: &str = "ALL";

struct CacheEntry {
    value: serde_json::Value,
    stored_at: Instant,
    ttl: Duration,
}

impl CacheEntry {
    fn is_live(&self) -> bool {
        self.stored_at.elapsed() < self.ttl
    }
}

/// In-memory key/value store with per-entry TTL expiry.
///
/// Expiry is evaluated on access only; an expired entry is removed by the
/// next `get` or `has` that touches it. There is no background sweep, which
/// is fine for the handful of well-known keys this cache ever holds.
///
/// One instance is created per [`crate::StxClient`] and shared by reference
/// with every handle that client spawns; it is never a process-wide global.
pub struct TtlCache {
    entries: RwLock<HashMap<String, CacheEntry>>,
}

impl TtlCache {
    pub fn new() -> Self {
        TtlCache {
            entries: RwLock::new(HashMap::new()),
        }
    }

    /// Stores `value` under `key`, unconditionally replacing any previous
    /// entry and its TTL.
    pub async fn set<T: Serialize>(
        &self,
        key: &str,
        value: &T,
        ttl: Duration,
    ) -> Result<(), SdkError> {
        let value = serde_json::to_value(value).map_err(|e| {
            SdkError::api(
                ErrorKind::InternalServerError,
                format!("cache serialization failed: {e}"),
            )
        })?;
        let mut entries = self.entries.write().await;
        entries.insert(
            key.to_string(),
            CacheEntry {
                value,
                stored_at: Instant::now(),
                ttl,
            },
        );
        Ok(())
    }

    /// Returns the live value for `key`, or `None` when the key was never
    /// set or its entry has expired. An expired entry is deleted here.
    pub async fn get<T: DeserializeOwned>(&self, key: &str) -> Result<Option<T>, SdkError> {
        let entries = self.entries.read().await;
        let Some(entry) = entries.get(key) else {
            return Ok(None);
        };

        if !entry.is_live() {
            drop(entries); // release read lock before acquiring write lock
            let mut entries = self.entries.write().await;
            entries.remove(key);
            return Ok(None);
        }

        let value = serde_json::from_value(entry.value.clone()).map_err(|e| {
            SdkError::api(
                ErrorKind::InternalServerError,
                format!("cache deserialization failed: {e}"),
            )
        })?;
        Ok(Some(value))
    }

    /// Same liveness rule as [`TtlCache::get`] without returning the value.
    pub async fn has(&self, key: &str) -> bool {
        {
            let entries = self.entries.read().await;
            match entries.get(key) {
                Some(entry) if entry.is_live() => return true,
                Some(_) => {}
                None => return false,
            }
        }
        let mut entries = self.entries.write().await;
        entries.remove(key);
        false
    }

    pub async fn delete(&self, key: &str) {
        let mut entries = self.entries.write().await;
        entries.remove(key);
    }

    pub async fn clear(&self) {
        let mut entries = self.entries.write().await;
        entries.clear();
    }
}

impl Default for TtlCache {
    fn default() -> Self {
        TtlCache::new()
    }
}
