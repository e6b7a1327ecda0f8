use thiserror::Error;

use crate::{launch::LaunchContext, lti_types::LaunchId};

#[derive(Debug, Clone, Error)]
pub enum LaunchCacheError {
    #[error("Launch {0} was not found. It may have expired.")]
    NotFound(LaunchId),
    #[error("Launch cache backend error: {0}")]
    Backend(String),
}

/// Short-lived storage for launch state, keyed by launch id.
///
/// Entries are expected to age out. Once an entry has expired, `resolve` must treat it exactly like a missing one.
#[allow(async_fn_in_trait)]
pub trait LaunchCache {
    /// Fetches the context stored for `launch_id`.
    async fn resolve(&self, launch_id: &LaunchId) -> Result<LaunchContext, LaunchCacheError>;

    /// Stores `context` under its own launch id, replacing any previous entry.
    async fn store(&self, context: LaunchContext) -> Result<(), LaunchCacheError>;

    /// Drops every expired entry and returns how many were removed.
    async fn purge_expired(&self) -> Result<usize, LaunchCacheError>;
}
