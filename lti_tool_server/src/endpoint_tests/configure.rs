use actix_web::{http::StatusCode, web, web::ServiceConfig};
use lti_engine::{
    test_utils::launches::{deep_link_context, resource_link_context},
    DeepLinkResponse,
    LaunchApi,
    LaunchCache,
    MemoryLaunchCache,
};

use super::helpers::{get_request, post_request};
use crate::{config::ToolOptions, routes::ConfigureRoute};

#[actix_web::test]
async fn deep_link_response_for_difficulty() {
    let _ = env_logger::try_init().ok();
    let (status, body) = get_request("/configure/launch-dl/hard/", configure(cache().await)).await;
    assert_eq!(status, StatusCode::OK, "was: {body}");
    let response: DeepLinkResponse = serde_json::from_str(&body).unwrap();
    assert_eq!(response.deep_link_return_url, "https://lms.example.com/deep_links");
    assert_eq!(response.data.as_deref(), Some("opaque-data"));
    assert_eq!(response.content_items.len(), 1);
    let item = &response.content_items[0];
    assert_eq!(item.item_type, "ltiResourceLink");
    assert_eq!(item.title, "Breakout hard mode!");
    assert_eq!(item.url, "https://tool.example.com/launch/?difficulty=hard");
}

#[actix_web::test]
async fn configure_accepts_post() {
    let _ = env_logger::try_init().ok();
    let (status, body) = post_request("/configure/launch-dl/easy/", configure(cache().await)).await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.contains(r#""title":"Breakout easy mode!""#), "was: {body}");
}

#[actix_web::test]
async fn difficulty_is_case_insensitive() {
    let _ = env_logger::try_init().ok();
    let (status, body) = get_request("/configure/launch-dl/Normal/", configure(cache().await)).await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("?difficulty=normal"), "was: {body}");
}

#[actix_web::test]
async fn resource_link_launch_cannot_configure() {
    let _ = env_logger::try_init().ok();
    let (status, body) = get_request("/configure/launch-rl/easy/", configure(cache().await)).await;
    assert_eq!(status, StatusCode::FORBIDDEN);
    assert_eq!(body, r#"{"error":"Insufficient Permissions. Must be a deep link!"}"#);
}

#[actix_web::test]
async fn unknown_difficulty_is_a_bad_request() {
    let _ = env_logger::try_init().ok();
    let (status, body) = get_request("/configure/launch-dl/impossible/", configure(cache().await)).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body.contains("impossible"), "was: {body}");
}

#[actix_web::test]
async fn unknown_launch_is_not_found() {
    let _ = env_logger::try_init().ok();
    let (status, _) = get_request("/configure/no-such-launch/easy/", configure(cache().await)).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

async fn cache() -> MemoryLaunchCache {
    let cache = MemoryLaunchCache::default();
    cache.store(deep_link_context("launch-dl", "instructor")).await.unwrap();
    cache.store(resource_link_context("launch-rl", "u1", "Alex")).await.unwrap();
    cache
}

fn configure(cache: MemoryLaunchCache) -> impl FnOnce(&mut ServiceConfig) {
    move |cfg: &mut ServiceConfig| {
        let options = ToolOptions { launch_url: "https://tool.example.com/launch/".to_string() };
        cfg.service(ConfigureRoute::<MemoryLaunchCache>::new())
            .app_data(web::Data::new(LaunchApi::new(cache)))
            .app_data(web::Data::new(options));
    }
}
