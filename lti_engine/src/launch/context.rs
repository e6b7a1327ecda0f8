use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::{
    launch::claims::{
        LaunchClaims,
        LaunchClaimsError,
        AGS_SCOPE_LINEITEM,
        AGS_SCOPE_LINEITEM_READONLY,
        AGS_SCOPE_RESULT_READONLY,
        AGS_SCOPE_SCORE,
        LTI_VERSION,
        MESSAGE_TYPE_DEEP_LINKING,
        MESSAGE_TYPE_RESOURCE_LINK,
    },
    lti_types::{Difficulty, LaunchId},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MessageType {
    ResourceLink,
    DeepLinking,
}

/// Where (and with which scopes) the platform's Assignment and Grade Service can be reached for this launch.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AgsEndpoint {
    pub lineitems: Option<String>,
    pub lineitem: Option<String>,
    pub scopes: Vec<String>,
}

impl AgsEndpoint {
    fn has_scope(&self, scope: &str) -> bool {
        self.scopes.iter().any(|s| s == scope)
    }

    pub fn can_submit_scores(&self) -> bool {
        self.has_scope(AGS_SCOPE_SCORE)
    }

    pub fn can_read_results(&self) -> bool {
        self.has_scope(AGS_SCOPE_RESULT_READONLY)
    }

    pub fn can_create_line_items(&self) -> bool {
        self.has_scope(AGS_SCOPE_LINEITEM)
    }

    pub fn can_find_line_items(&self) -> bool {
        self.has_scope(AGS_SCOPE_LINEITEM) || self.has_scope(AGS_SCOPE_LINEITEM_READONLY)
    }
}

/// The Names and Roles Provisioning Service endpoint for this launch's context.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NrpsEndpoint {
    pub context_memberships_url: String,
    pub service_versions: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeepLinkSettings {
    pub deep_link_return_url: String,
    pub accept_types: Vec<String>,
    pub data: Option<String>,
}

/// Everything the tool knows about one launch.
///
/// Built once from the validated claims when the launch arrives, cached under its [`LaunchId`], and handed out
/// read-only to each request that refers back to the launch.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LaunchContext {
    pub launch_id: LaunchId,
    pub message_type: MessageType,
    pub deployment_id: String,
    /// The platform's user id for the learner (the `sub` claim).
    pub subject: String,
    pub name: String,
    pub roles: Vec<String>,
    pub resource_link_id: Option<String>,
    pub context_id: Option<String>,
    pub context_title: Option<String>,
    pub custom: HashMap<String, String>,
    pub ags: Option<AgsEndpoint>,
    pub nrps: Option<NrpsEndpoint>,
    pub deep_link: Option<DeepLinkSettings>,
}

impl LaunchContext {
    pub fn from_claims(launch_id: LaunchId, claims: LaunchClaims) -> Result<Self, LaunchClaimsError> {
        let version = claims.version.ok_or(LaunchClaimsError::MissingClaim("version"))?;
        if version != LTI_VERSION {
            return Err(LaunchClaimsError::UnsupportedVersion(version));
        }
        let message_type = match claims.message_type.as_deref() {
            Some(MESSAGE_TYPE_RESOURCE_LINK) => MessageType::ResourceLink,
            Some(MESSAGE_TYPE_DEEP_LINKING) => MessageType::DeepLinking,
            Some(other) => return Err(LaunchClaimsError::UnsupportedMessageType(other.to_string())),
            None => return Err(LaunchClaimsError::MissingClaim("message_type")),
        };
        let deployment_id = claims.deployment_id.ok_or(LaunchClaimsError::MissingClaim("deployment_id"))?;
        let subject = claims.sub.filter(|s| !s.is_empty()).ok_or(LaunchClaimsError::MissingClaim("sub"))?;
        if message_type == MessageType::ResourceLink && claims.resource_link.is_none() {
            return Err(LaunchClaimsError::MissingClaim("resource_link"));
        }
        let deep_link = claims.deep_linking_settings.map(|s| DeepLinkSettings {
            deep_link_return_url: s.deep_link_return_url,
            accept_types: s.accept_types,
            data: s.data,
        });
        if message_type == MessageType::DeepLinking && deep_link.is_none() {
            return Err(LaunchClaimsError::MissingClaim("deep_linking_settings"));
        }
        let name = claims.name.unwrap_or_else(|| {
            [claims.given_name, claims.family_name].into_iter().flatten().collect::<Vec<_>>().join(" ")
        });
        let custom = claims
            .custom
            .unwrap_or_default()
            .into_iter()
            .map(|(k, v)| match v {
                Value::String(s) => (k, s),
                other => (k, other.to_string()),
            })
            .collect();
        let (context_id, context_title) = match claims.context {
            Some(c) => (Some(c.id), c.title),
            None => (None, None),
        };
        Ok(Self {
            launch_id,
            message_type,
            deployment_id,
            subject,
            name,
            roles: claims.roles.unwrap_or_default(),
            resource_link_id: claims.resource_link.map(|r| r.id),
            context_id,
            context_title,
            custom,
            ags: claims.ags.map(|a| AgsEndpoint { lineitems: a.lineitems, lineitem: a.lineitem, scopes: a.scope }),
            nrps: claims.nrps.map(|n| NrpsEndpoint {
                context_memberships_url: n.context_memberships_url,
                service_versions: n.service_versions,
            }),
            deep_link,
        })
    }

    pub fn has_grades(&self) -> bool {
        self.ags.is_some()
    }

    pub fn has_roster(&self) -> bool {
        self.nrps.is_some()
    }

    pub fn is_deep_link_launch(&self) -> bool {
        self.message_type == MessageType::DeepLinking
    }

    /// The difficulty to play at. A `difficulty` custom claim set on the resource link wins, then `fallback` (usually
    /// the launch URL's query string), then [`Difficulty::Normal`]. Unrecognised values are skipped.
    pub fn difficulty(&self, fallback: Option<&str>) -> Difficulty {
        self.custom
            .get("difficulty")
            .and_then(|d| d.parse().ok())
            .or_else(|| fallback.and_then(|d| d.parse().ok()))
            .unwrap_or_default()
    }
}
