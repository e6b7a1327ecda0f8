//! Launch state: the raw claim document forwarded by the gateway, and the typed [`LaunchContext`] built from it.
mod claims;
mod context;

pub use claims::{
    AgsClaim,
    ContextClaim,
    DeepLinkingSettingsClaim,
    LaunchClaims,
    LaunchClaimsError,
    NrpsClaim,
    ResourceLinkClaim,
    AGS_SCOPE_LINEITEM,
    AGS_SCOPE_LINEITEM_READONLY,
    AGS_SCOPE_RESULT_READONLY,
    AGS_SCOPE_SCORE,
    LTI_VERSION,
    MESSAGE_TYPE_DEEP_LINKING,
    MESSAGE_TYPE_RESOURCE_LINK,
};
pub use context::{AgsEndpoint, DeepLinkSettings, LaunchContext, MessageType, NrpsEndpoint};
