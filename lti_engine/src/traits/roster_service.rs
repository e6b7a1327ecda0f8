use thiserror::Error;

use crate::{launch::NrpsEndpoint, lti_types::RosterMember};

#[derive(Debug, Clone, Error)]
pub enum RosterServiceError {
    #[error("Roster service error: {0}")]
    Backend(String),
}

/// The platform's Names and Roles Provisioning Service.
#[allow(async_fn_in_trait)]
pub trait RosterService {
    async fn list_members(&self, endpoint: &NrpsEndpoint) -> Result<Vec<RosterMember>, RosterServiceError>;
}
