use std::time::Duration;

use chrono::Utc;
use log::*;
use tokio::task::JoinHandle;

use crate::cache::MemoryLaunchCache;

/// Starts the launch purge worker, which drops expired launches every `interval`. Do not await the returned
/// JoinHandle, as it will run indefinitely.
pub fn start_cache_purge_worker(cache: MemoryLaunchCache, interval: Duration) -> JoinHandle<()> {
    tokio::spawn(async move {
        let mut timer = tokio::time::interval(interval);
        info!("🕰️ Launch cache purge worker started");
        loop {
            timer.tick().await;
            trace!("🕰️ Running launch cache purge job");
            let removed = cache.remove_expired(Utc::now()).await;
            if removed > 0 {
                info!("🕰️ {removed} expired launches purged");
            }
            debug!("🕰️ {} launches remain in the cache", cache.len().await);
        }
    })
}
