use std::{collections::HashMap, sync::Arc};

use chrono::{DateTime, Duration, Utc};
use log::*;
use tokio::sync::RwLock;

use crate::{
    launch::LaunchContext,
    lti_types::LaunchId,
    traits::{LaunchCache, LaunchCacheError},
};

pub const DEFAULT_LAUNCH_TTL: Duration = Duration::minutes(60);

#[derive(Debug, Clone)]
struct CacheEntry {
    context: LaunchContext,
    expires_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct MemoryLaunchCache {
    entries: Arc<RwLock<HashMap<LaunchId, CacheEntry>>>,
    ttl: Duration,
}

impl Default for MemoryLaunchCache {
    fn default() -> Self {
        Self::new(DEFAULT_LAUNCH_TTL)
    }
}

impl MemoryLaunchCache {
    pub fn new(ttl: Duration) -> Self {
        Self { entries: Arc::new(RwLock::new(HashMap::new())), ttl }
    }

    pub fn ttl(&self) -> Duration {
        self.ttl
    }

    pub async fn len(&self) -> usize {
        self.entries.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.entries.read().await.is_empty()
    }

    /// Stores `context` with an explicit expiry time.
    pub async fn insert_until(&self, context: LaunchContext, expires_at: DateTime<Utc>) {
        let launch_id = context.launch_id.clone();
        self.entries.write().await.insert(launch_id, CacheEntry { context, expires_at });
    }

    /// Removes entries that expired at or before `now`.
    pub async fn remove_expired(&self, now: DateTime<Utc>) -> usize {
        let mut entries = self.entries.write().await;
        let before = entries.len();
        entries.retain(|_, e| e.expires_at > now);
        before - entries.len()
    }
}

impl LaunchCache for MemoryLaunchCache {
    async fn resolve(&self, launch_id: &LaunchId) -> Result<LaunchContext, LaunchCacheError> {
        let now = Utc::now();
        {
            let entries = self.entries.read().await;
            match entries.get(launch_id) {
                Some(entry) if entry.expires_at > now => return Ok(entry.context.clone()),
                Some(_) => trace!("🗃️ Launch {launch_id} has expired"),
                None => return Err(LaunchCacheError::NotFound(launch_id.clone())),
            }
        }
        // Expired. Evict it now rather than waiting for the purge worker.
        self.entries.write().await.remove(launch_id);
        Err(LaunchCacheError::NotFound(launch_id.clone()))
    }

    async fn store(&self, context: LaunchContext) -> Result<(), LaunchCacheError> {
        let expires_at = Utc::now() + self.ttl;
        trace!("🗃️ Caching launch {} until {expires_at}", context.launch_id);
        self.insert_until(context, expires_at).await;
        Ok(())
    }

    async fn purge_expired(&self) -> Result<usize, LaunchCacheError> {
        Ok(self.remove_expired(Utc::now()).await)
    }
}
