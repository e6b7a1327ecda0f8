//! Names and Roles Provisioning Service.
use log::*;
use lti_engine::{
    launch::NrpsEndpoint,
    lti_types::RosterMember,
    traits::{RosterService, RosterServiceError},
};

use crate::{
    data_objects::{MembershipContainer, MEMBERSHIP_CONTAINER_CONTENT_TYPE},
    PlatformApiError,
    PlatformClient,
};

impl PlatformClient {
    /// Fetches every member of the context, across all pages.
    pub async fn get_members(&self, endpoint: &NrpsEndpoint) -> Result<Vec<RosterMember>, PlatformApiError> {
        let pages = self
            .get_all_pages::<MembershipContainer>(
                &endpoint.context_memberships_url,
                &[],
                MEMBERSHIP_CONTAINER_CONTENT_TYPE,
            )
            .await?;
        let members = pages.into_iter().flat_map(|p| p.members).collect::<Vec<_>>();
        debug!("🎓️ Fetched {} roster members", members.len());
        Ok(members)
    }
}

impl RosterService for PlatformClient {
    async fn list_members(&self, endpoint: &NrpsEndpoint) -> Result<Vec<RosterMember>, RosterServiceError> {
        Ok(self.get_members(endpoint).await?)
    }
}
