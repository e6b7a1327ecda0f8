use std::env;

use chrono::Duration;
use log::*;
use lti_common::{env_flag, Secret};
use lti_engine::cache::DEFAULT_LAUNCH_TTL;
use lti_platform::PlatformConfig;

const DEFAULT_LTI_HOST: &str = "127.0.0.1";
const DEFAULT_LTI_PORT: u16 = 9001;
const DEFAULT_LAUNCH_URL: &str = "/launch/";
pub const GATEWAY_HMAC_HEADER: &str = "X-LTI-Gateway-Hmac-SHA256";

#[derive(Clone, Debug)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    /// The launch URL of this tool, as registered with the platform. Deep-link resources point here.
    pub launch_url: String,
    /// How long a launch remains usable after the gateway forwards it.
    pub launch_ttl: Duration,
    pub gateway: GatewayConfig,
    pub platform: PlatformConfig,
}

#[derive(Clone, Debug)]
pub struct GatewayConfig {
    /// Shared key used by the gateway to sign forwarded launch claims.
    pub hmac_secret: Secret<String>,
    /// Turning this off accepts unsigned launches from anyone. Never do this in production.
    pub hmac_checks: bool,
}

impl Default for GatewayConfig {
    fn default() -> Self {
        Self { hmac_secret: Secret::default(), hmac_checks: true }
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_LTI_HOST.to_string(),
            port: DEFAULT_LTI_PORT,
            launch_url: DEFAULT_LAUNCH_URL.to_string(),
            launch_ttl: DEFAULT_LAUNCH_TTL,
            gateway: GatewayConfig::default(),
            platform: PlatformConfig::default(),
        }
    }
}

impl ServerConfig {
    pub fn from_env_or_default() -> Self {
        let host = env::var("LTI_HOST").ok().unwrap_or_else(|| DEFAULT_LTI_HOST.into());
        let port = env::var("LTI_PORT")
            .map(|s| {
                s.parse::<u16>().unwrap_or_else(|e| {
                    error!(
                        "🪛️ {s} is not a valid port for LTI_PORT. {e} Using the default, {DEFAULT_LTI_PORT}, instead."
                    );
                    DEFAULT_LTI_PORT
                })
            })
            .ok()
            .unwrap_or(DEFAULT_LTI_PORT);
        let launch_url = env::var("LTI_LAUNCH_URL").ok().unwrap_or_else(|| {
            info!("🪛️ LTI_LAUNCH_URL is not set. Deep links will point to {DEFAULT_LAUNCH_URL}.");
            DEFAULT_LAUNCH_URL.to_string()
        });
        let launch_ttl = configure_launch_ttl();
        let gateway = GatewayConfig::from_env_or_default();
        let platform = PlatformConfig::new_from_env_or_default();
        Self { host, port, launch_url, launch_ttl, gateway, platform }
    }
}

impl GatewayConfig {
    pub fn from_env_or_default() -> Self {
        let hmac_secret = env::var("LTI_GATEWAY_HMAC_SECRET").ok().unwrap_or_else(|| {
            error!(
                "🪛️ LTI_GATEWAY_HMAC_SECRET is not set. Please set it to the key the LTI gateway signs launches with."
            );
            String::default()
        });
        let hmac_checks = env_flag("LTI_GATEWAY_HMAC_CHECKS", true);
        if !hmac_checks {
            warn!("🚨️ Gateway HMAC checks are DISABLED. Anyone can forge a launch. Do not run production like this.");
        }
        Self { hmac_secret: Secret::new(hmac_secret), hmac_checks }
    }
}

fn configure_launch_ttl() -> Duration {
    env::var("LTI_LAUNCH_TTL")
        .map_err(|_| {
            info!(
                "🪛️ LTI_LAUNCH_TTL is not set. Using the default value of {} minutes.",
                DEFAULT_LAUNCH_TTL.num_minutes()
            )
        })
        .and_then(|s| {
            s.parse::<i64>()
                .map_err(|e| warn!("🪛️ Invalid configuration value for LTI_LAUNCH_TTL. {e}"))
                .and_then(|m| {
                    if m > 0 {
                        Ok(Duration::minutes(m))
                    } else {
                        warn!("🪛️ LTI_LAUNCH_TTL must be positive. Got {m}.");
                        Err(())
                    }
                })
        })
        .ok()
        .unwrap_or(DEFAULT_LAUNCH_TTL)
}

//-------------------------------------------------  ToolOptions  ------------------------------------------------------
/// The part of the server configuration that route handlers need. Secrets stay out of it.
#[derive(Clone, Debug)]
pub struct ToolOptions {
    pub launch_url: String,
}

impl ToolOptions {
    pub fn from_config(config: &ServerConfig) -> Self {
        Self { launch_url: config.launch_url.clone() }
    }
}

impl Default for ToolOptions {
    fn default() -> Self {
        Self { launch_url: DEFAULT_LAUNCH_URL.to_string() }
    }
}
