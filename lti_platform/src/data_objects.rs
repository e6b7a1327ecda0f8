use lti_engine::lti_types::RosterMember;
use serde::{Deserialize, Serialize};

pub const LINE_ITEM_CONTENT_TYPE: &str = "application/vnd.ims.lis.v2.lineitem+json";
pub const LINE_ITEM_CONTAINER_CONTENT_TYPE: &str = "application/vnd.ims.lis.v2.lineitemcontainer+json";
pub const SCORE_CONTENT_TYPE: &str = "application/vnd.ims.lis.v1.score+json";
pub const RESULT_CONTAINER_CONTENT_TYPE: &str = "application/vnd.ims.lis.v2.resultcontainer+json";
pub const MEMBERSHIP_CONTAINER_CONTENT_TYPE: &str = "application/vnd.ims.lti-nrps.v2.membershipcontainer+json";

/// A line item as the platform describes it. `id` is the line item's own URL.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LineItem {
    pub id: String,
    #[serde(default)]
    pub tag: Option<String>,
    #[serde(default)]
    pub label: Option<String>,
    #[serde(default)]
    pub score_maximum: Option<f64>,
    #[serde(default)]
    pub resource_id: Option<String>,
    #[serde(default)]
    pub resource_link_id: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MembershipContainer {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub members: Vec<RosterMember>,
}
