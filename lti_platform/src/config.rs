use std::time::Duration;

use log::*;
use lti_common::Secret;

pub const DEFAULT_PLATFORM_TIMEOUT: Duration = Duration::from_secs(30);

#[derive(Debug, Clone)]
pub struct PlatformConfig {
    /// Bearer token for the platform's AGS and NRPS endpoints. It is issued by the platform's OAuth2 token endpoint,
    /// outside of this tool.
    pub access_token: Secret<String>,
    pub timeout: Duration,
}

impl Default for PlatformConfig {
    fn default() -> Self {
        Self { access_token: Secret::default(), timeout: DEFAULT_PLATFORM_TIMEOUT }
    }
}

impl PlatformConfig {
    pub fn new_from_env_or_default() -> Self {
        let access_token = Secret::new(std::env::var("LTI_PLATFORM_ACCESS_TOKEN").unwrap_or_else(|_| {
            warn!("🪛️ LTI_PLATFORM_ACCESS_TOKEN not set. Grade and roster requests will be sent unauthenticated.");
            String::default()
        }));
        let timeout = std::env::var("LTI_PLATFORM_TIMEOUT")
            .ok()
            .and_then(|s| {
                s.parse::<u64>()
                    .map_err(|e| warn!("🪛️ Invalid configuration value for LTI_PLATFORM_TIMEOUT. {e}"))
                    .ok()
            })
            .map(Duration::from_secs)
            .unwrap_or(DEFAULT_PLATFORM_TIMEOUT);
        Self { access_token, timeout }
    }
}
