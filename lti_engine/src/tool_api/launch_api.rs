//! Registers incoming launches and resolves them again on later requests.

use std::fmt::Debug;

use log::*;

use crate::{
    launch::{LaunchClaims, LaunchContext},
    lti_types::LaunchId,
    tool_api::errors::ToolApiError,
    traits::LaunchCache,
};

pub struct LaunchApi<C> {
    cache: C,
}

impl<C: Debug> Debug for LaunchApi<C> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "LaunchApi ({:?})", self.cache)
    }
}

impl<C> LaunchApi<C>
where C: LaunchCache
{
    pub fn new(cache: C) -> Self {
        Self { cache }
    }

    /// Turns a validated claim set into a [`LaunchContext`] under a freshly minted launch id, and caches it.
    pub async fn register(&self, claims: LaunchClaims) -> Result<LaunchContext, ToolApiError> {
        let context = LaunchContext::from_claims(LaunchId::random(), claims)?;
        self.cache.store(context.clone()).await?;
        debug!("🎓️ Registered launch {} for {} ({:?})", context.launch_id, context.subject, context.message_type);
        Ok(context)
    }

    /// Looks up a previously registered launch. Unknown and expired launches both give [`ToolApiError::NotFound`].
    pub async fn resolve(&self, launch_id: &LaunchId) -> Result<LaunchContext, ToolApiError> {
        self.cache.resolve(launch_id).await.map_err(|e| {
            debug!("🎓️ Could not resolve launch {launch_id}. {e}");
            ToolApiError::from(e)
        })
    }
}
