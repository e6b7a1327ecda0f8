//! Raw LTI 1.3 id-token claims.
//!
//! The gateway has already validated the token signature by the time these arrive, so this module is only concerned
//! with shape. Claims are keyed by URL-shaped names; [`LaunchContext::from_claims`] turns them into typed fields once,
//! and nothing downstream looks at the raw document again.
//!
//! [`LaunchContext::from_claims`]: crate::launch::LaunchContext::from_claims
use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;

pub const LTI_VERSION: &str = "1.3.0";
pub const MESSAGE_TYPE_RESOURCE_LINK: &str = "LtiResourceLinkRequest";
pub const MESSAGE_TYPE_DEEP_LINKING: &str = "LtiDeepLinkingRequest";

pub const AGS_SCOPE_LINEITEM: &str = "https://purl.imsglobal.org/spec/lti-ags/scope/lineitem";
pub const AGS_SCOPE_LINEITEM_READONLY: &str = "https://purl.imsglobal.org/spec/lti-ags/scope/lineitem.readonly";
pub const AGS_SCOPE_RESULT_READONLY: &str = "https://purl.imsglobal.org/spec/lti-ags/scope/result.readonly";
pub const AGS_SCOPE_SCORE: &str = "https://purl.imsglobal.org/spec/lti-ags/scope/score";

#[derive(Debug, Clone, Error)]
pub enum LaunchClaimsError {
    #[error("Launch claims are not a valid JSON document. {0}")]
    Malformed(String),
    #[error("Launch is missing the required '{0}' claim")]
    MissingClaim(&'static str),
    #[error("Unsupported LTI version: {0}")]
    UnsupportedVersion(String),
    #[error("Unsupported LTI message type: {0}")]
    UnsupportedMessageType(String),
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LaunchClaims {
    #[serde(default)]
    pub sub: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub given_name: Option<String>,
    #[serde(default)]
    pub family_name: Option<String>,
    #[serde(default, rename = "https://purl.imsglobal.org/spec/lti/claim/message_type")]
    pub message_type: Option<String>,
    #[serde(default, rename = "https://purl.imsglobal.org/spec/lti/claim/version")]
    pub version: Option<String>,
    #[serde(default, rename = "https://purl.imsglobal.org/spec/lti/claim/deployment_id")]
    pub deployment_id: Option<String>,
    #[serde(default, rename = "https://purl.imsglobal.org/spec/lti/claim/target_link_uri")]
    pub target_link_uri: Option<String>,
    #[serde(default, rename = "https://purl.imsglobal.org/spec/lti/claim/resource_link")]
    pub resource_link: Option<ResourceLinkClaim>,
    #[serde(default, rename = "https://purl.imsglobal.org/spec/lti/claim/roles")]
    pub roles: Option<Vec<String>>,
    #[serde(default, rename = "https://purl.imsglobal.org/spec/lti/claim/context")]
    pub context: Option<ContextClaim>,
    #[serde(default, rename = "https://purl.imsglobal.org/spec/lti/claim/custom")]
    pub custom: Option<HashMap<String, Value>>,
    #[serde(default, rename = "https://purl.imsglobal.org/spec/lti-ags/claim/endpoint")]
    pub ags: Option<AgsClaim>,
    #[serde(default, rename = "https://purl.imsglobal.org/spec/lti-nrps/claim/namesroleservice")]
    pub nrps: Option<NrpsClaim>,
    #[serde(default, rename = "https://purl.imsglobal.org/spec/lti-dl/claim/deep_linking_settings")]
    pub deep_linking_settings: Option<DeepLinkingSettingsClaim>,
}

impl LaunchClaims {
    pub fn from_json(value: Value) -> Result<Self, LaunchClaimsError> {
        serde_json::from_value(value).map_err(|e| LaunchClaimsError::Malformed(e.to_string()))
    }

    pub fn from_slice(bytes: &[u8]) -> Result<Self, LaunchClaimsError> {
        serde_json::from_slice(bytes).map_err(|e| LaunchClaimsError::Malformed(e.to_string()))
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ResourceLinkClaim {
    pub id: String,
    #[serde(default)]
    pub title: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ContextClaim {
    pub id: String,
    #[serde(default)]
    pub label: Option<String>,
    #[serde(default)]
    pub title: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AgsClaim {
    #[serde(default)]
    pub scope: Vec<String>,
    #[serde(default)]
    pub lineitems: Option<String>,
    #[serde(default)]
    pub lineitem: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NrpsClaim {
    pub context_memberships_url: String,
    #[serde(default)]
    pub service_versions: Vec<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DeepLinkingSettingsClaim {
    pub deep_link_return_url: String,
    #[serde(default)]
    pub accept_types: Vec<String>,
    #[serde(default)]
    pub accept_presentation_document_targets: Vec<String>,
    #[serde(default)]
    pub accept_multiple: Option<bool>,
    #[serde(default)]
    pub data: Option<String>,
}
