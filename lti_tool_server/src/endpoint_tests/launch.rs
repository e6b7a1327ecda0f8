use actix_web::{http::StatusCode, test::TestRequest, web, web::ServiceConfig};
use chrono::{Duration, Utc};
use lti_common::Secret;
use lti_engine::{
    test_utils::launches::{resource_link_claims, resource_link_context},
    LaunchApi,
    LaunchCache,
    MemoryLaunchCache,
};

use super::helpers::{get_request, send_request};
use crate::{
    config::GATEWAY_HMAC_HEADER,
    helpers::calculate_hmac,
    middleware::HmacMiddlewareFactory,
    routes::{GameRoute, LaunchRoute},
};

const SECRET: &str = "gateway-test-secret";

#[actix_web::test]
async fn signed_launch_renders_game_page() {
    let _ = env_logger::try_init().ok();
    let cache = MemoryLaunchCache::default();
    let body = resource_link_claims("u1", "Alex").to_string();
    let req = TestRequest::post()
        .uri("/launch/")
        .insert_header((GATEWAY_HMAC_HEADER, calculate_hmac(SECRET, body.as_bytes())))
        .set_payload(body);
    let (status, html) = send_request(req, configure(cache.clone(), true)).await;
    assert_eq!(status, StatusCode::OK, "was: {html}");
    assert!(html.contains("<title>Game Example</title>"));
    assert!(html.contains("Alex"));
    assert!(html.contains(r#"data-difficulty="normal""#));
    assert_eq!(cache.len().await, 1);
}

#[actix_web::test]
async fn launch_difficulty_from_query() {
    let _ = env_logger::try_init().ok();
    let body = resource_link_claims("u1", "Alex").to_string();
    let req = TestRequest::post()
        .uri("/launch/?difficulty=hard")
        .insert_header((GATEWAY_HMAC_HEADER, calculate_hmac(SECRET, body.as_bytes())))
        .set_payload(body);
    let (status, html) = send_request(req, configure(MemoryLaunchCache::default(), true)).await;
    assert_eq!(status, StatusCode::OK);
    assert!(html.contains(r#"data-difficulty="hard""#));
}

#[actix_web::test]
async fn unsigned_launch_is_forbidden() {
    let _ = env_logger::try_init().ok();
    let cache = MemoryLaunchCache::default();
    let req = TestRequest::post().uri("/launch/").set_payload(resource_link_claims("u1", "Alex").to_string());
    let (status, body) = send_request(req, configure(cache.clone(), true)).await;
    assert_eq!(status, StatusCode::FORBIDDEN);
    assert_eq!(body, "No HMAC signature found.");
    assert!(cache.is_empty().await);
}

#[actix_web::test]
async fn tampered_launch_is_forbidden() {
    let _ = env_logger::try_init().ok();
    let signed = resource_link_claims("u1", "Alex").to_string();
    let tampered = resource_link_claims("admin", "Alex").to_string();
    let req = TestRequest::post()
        .uri("/launch/")
        .insert_header((GATEWAY_HMAC_HEADER, calculate_hmac(SECRET, signed.as_bytes())))
        .set_payload(tampered);
    let (status, body) = send_request(req, configure(MemoryLaunchCache::default(), true)).await;
    assert_eq!(status, StatusCode::FORBIDDEN);
    assert_eq!(body, "Invalid HMAC signature.");
}

#[actix_web::test]
async fn unsigned_launch_allowed_when_checks_are_off() {
    let _ = env_logger::try_init().ok();
    let req = TestRequest::post().uri("/launch/").set_payload(resource_link_claims("u1", "Alex").to_string());
    let (status, _) = send_request(req, configure(MemoryLaunchCache::default(), false)).await;
    assert_eq!(status, StatusCode::OK);
}

#[actix_web::test]
async fn invalid_claims_are_a_bad_request() {
    let _ = env_logger::try_init().ok();
    let body = r#"{"sub":"u1","https://purl.imsglobal.org/spec/lti/claim/version":"1.1"}"#;
    let req = TestRequest::post()
        .uri("/launch/")
        .insert_header((GATEWAY_HMAC_HEADER, calculate_hmac(SECRET, body.as_bytes())))
        .set_payload(body);
    let (status, body) = send_request(req, configure(MemoryLaunchCache::default(), true)).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body.contains("Could not read request body"), "was: {body}");
}

#[actix_web::test]
async fn game_page_for_cached_launch() {
    let _ = env_logger::try_init().ok();
    let cache = MemoryLaunchCache::default();
    cache.store(resource_link_context("launch-1", "u1", "Alex")).await.unwrap();
    let (status, html) = get_request("/launch/launch-1/?difficulty=easy", configure(cache, true)).await;
    assert_eq!(status, StatusCode::OK);
    assert!(html.contains(r#"data-launch-id="launch-1""#));
    assert!(html.contains(r#"data-difficulty="easy""#));
}

#[actix_web::test]
async fn expired_launch_is_not_found() {
    let _ = env_logger::try_init().ok();
    let cache = MemoryLaunchCache::default();
    cache.insert_until(resource_link_context("launch-1", "u1", "Alex"), Utc::now() - Duration::minutes(1)).await;
    let (status, body) = get_request("/launch/launch-1/", configure(cache, true)).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert!(body.starts_with(r#"{"error":"The data was not found."#), "was: {body}");
}

fn configure(cache: MemoryLaunchCache, hmac_checks: bool) -> impl FnOnce(&mut ServiceConfig) {
    move |cfg: &mut ServiceConfig| {
        let hmac = HmacMiddlewareFactory::new(GATEWAY_HMAC_HEADER, Secret::new(SECRET.to_string()), hmac_checks);
        cfg.service(LaunchRoute::<MemoryLaunchCache>::new(hmac))
            .service(GameRoute::<MemoryLaunchCache>::new())
            .app_data(web::Data::new(LaunchApi::new(cache)));
    }
}
