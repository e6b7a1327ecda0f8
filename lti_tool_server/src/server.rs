use std::time::Duration;

use actix_web::{dev::Server, http::KeepAlive, middleware::Logger, web, App, HttpServer};
use log::*;
use lti_engine::{start_cache_purge_worker, GradebookApi, LaunchApi, MemoryLaunchCache, ScoreboardApi};
use lti_platform::PlatformClient;

use crate::{
    config::{ServerConfig, ToolOptions, GATEWAY_HMAC_HEADER},
    errors::ServerError,
    middleware::HmacMiddlewareFactory,
    routes::{health, ConfigureRoute, GameRoute, LaunchRoute, ScoreRoute, ScoreboardRoute},
};

const PURGE_INTERVAL: Duration = Duration::from_secs(60);

pub async fn run_server(config: ServerConfig) -> Result<(), ServerError> {
    let platform =
        PlatformClient::new(config.platform.clone()).map_err(|e| ServerError::InitializeError(e.to_string()))?;
    let cache = MemoryLaunchCache::new(config.launch_ttl);
    let _purge_worker = start_cache_purge_worker(cache.clone(), PURGE_INTERVAL);
    let srv = create_server_instance(config, cache, platform)?;
    srv.await.map_err(|e| ServerError::Unspecified(e.to_string()))
}

pub fn create_server_instance(
    config: ServerConfig,
    cache: MemoryLaunchCache,
    platform: PlatformClient,
) -> Result<Server, ServerError> {
    info!("🚀️ Launches expire after {} minutes", config.launch_ttl.num_minutes());
    let options = ToolOptions::from_config(&config);
    let gateway = config.gateway.clone();
    let srv = HttpServer::new(move || {
        let launch_api = LaunchApi::new(cache.clone());
        let gradebook_api = GradebookApi::new(platform.clone());
        let scoreboard_api = ScoreboardApi::new(platform.clone(), platform.clone());
        let hmac = HmacMiddlewareFactory::new(GATEWAY_HMAC_HEADER, gateway.hmac_secret.clone(), gateway.hmac_checks);
        let api_scope = web::scope("/api")
            .service(ScoreRoute::<MemoryLaunchCache, PlatformClient>::new())
            .service(ScoreboardRoute::<MemoryLaunchCache, PlatformClient, PlatformClient>::new());
        App::new()
            .wrap(Logger::new("%t (%D ms) %s %a %{Host}i %U").log_target("lti::access_log"))
            .app_data(web::Data::new(launch_api))
            .app_data(web::Data::new(gradebook_api))
            .app_data(web::Data::new(scoreboard_api))
            .app_data(web::Data::new(options.clone()))
            .service(health)
            .service(LaunchRoute::<MemoryLaunchCache>::new(hmac))
            .service(GameRoute::<MemoryLaunchCache>::new())
            .service(ConfigureRoute::<MemoryLaunchCache>::new())
            .service(api_scope)
    })
    .keep_alive(KeepAlive::Timeout(Duration::from_secs(600)))
    .bind((config.host.as_str(), config.port))?
    .run();
    Ok(srv)
}
