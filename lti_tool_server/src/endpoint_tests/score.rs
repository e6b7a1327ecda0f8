use actix_web::{http::StatusCode, web, web::ServiceConfig};
use lti_engine::{
    launch::LaunchContext,
    lti_types::{LaunchId, SubmissionResult},
    test_utils::launches::{resource_link_context, without_ags},
    traits::{GradeServiceError, LaunchCacheError},
    GradebookApi,
    LaunchApi,
};
use serde_json::json;

use super::{helpers::post_request, mocks::*};
use crate::routes::ScoreRoute;

#[actix_web::test]
async fn submit_score_and_time() {
    let _ = env_logger::try_init().ok();
    let mut grades = MockGradebook::new();
    grades
        .expect_submit_grade()
        .withf(|_, item, grade| item.tag == "score" && grade.score_given == 95.0 && grade.user_id == "u1")
        .times(1)
        .returning(|_, _, _| Ok(SubmissionResult { status: 200, body: json!({"tag": "score"}) }));
    grades
        .expect_submit_grade()
        .withf(|_, item, grade| item.tag == "time" && grade.score_given == 42.0 && item.score_maximum == 999.0)
        .times(1)
        .returning(|_, _, _| Ok(SubmissionResult { status: 200, body: json!({"tag": "time"}) }));
    let (status, body) = post_request("/score/launch-1/95/42/", configure(launch_store(), grades)).await;
    assert_eq!(status, StatusCode::OK, "was: {body}");
    assert_eq!(body, r#"{"success":true,"result":{"tag":"time"},"score_result":{"tag":"score"}}"#);
}

#[actix_web::test]
async fn non_integer_score_is_a_bad_request() {
    let _ = env_logger::try_init().ok();
    let mut grades = MockGradebook::new();
    grades.expect_submit_grade().never();
    let (status, body) = post_request("/score/launch-1/ninety/42/", configure(launch_store(), grades)).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body.contains("earned_score"), "was: {body}");
}

#[actix_web::test]
async fn negative_time_is_a_bad_request() {
    let _ = env_logger::try_init().ok();
    let mut grades = MockGradebook::new();
    grades.expect_submit_grade().never();
    let (status, body) = post_request("/score/launch-1/95/-3/", configure(launch_store(), grades)).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body.contains("time_spent"), "was: {body}");
}

#[actix_web::test]
async fn launch_without_grades_is_forbidden() {
    let _ = env_logger::try_init().ok();
    let mut launches = MockLaunchStore::new();
    launches.expect_resolve().returning(|_| Ok(without_ags(resource_link_context("launch-1", "u1", "Alex"))));
    let mut grades = MockGradebook::new();
    grades.expect_submit_grade().never();
    let (status, body) = post_request("/score/launch-1/95/42/", configure(launches, grades)).await;
    assert_eq!(status, StatusCode::FORBIDDEN);
    assert_eq!(body, r#"{"error":"Insufficient Permissions. Don't have grades!"}"#);
}

#[actix_web::test]
async fn unknown_launch_is_not_found() {
    let _ = env_logger::try_init().ok();
    let mut launches = MockLaunchStore::new();
    launches.expect_resolve().returning(|id| Err(LaunchCacheError::NotFound(id.clone())));
    let (status, _) = post_request("/score/expired/95/42/", configure(launches, MockGradebook::new())).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[actix_web::test]
async fn platform_failure_is_a_bad_gateway() {
    let _ = env_logger::try_init().ok();
    let mut grades = MockGradebook::new();
    grades
        .expect_submit_grade()
        .times(1)
        .returning(|_, _, _| Err(GradeServiceError::Backend("connection reset".to_string())));
    let (status, body) = post_request("/score/launch-1/95/42/", configure(launch_store(), grades)).await;
    assert_eq!(status, StatusCode::BAD_GATEWAY);
    assert!(body.contains("connection reset"), "was: {body}");
}

#[actix_web::test]
async fn score_out_of_range_is_reported() {
    let _ = env_logger::try_init().ok();
    let mut grades = MockGradebook::new();
    grades
        .expect_submit_grade()
        .times(1)
        .returning(|_, item, grade| {
            Err(GradeServiceError::ScoreOutOfRange { given: grade.score_given, maximum: item.score_maximum })
        });
    let (status, body) = post_request("/score/launch-1/150/42/", configure(launch_store(), grades)).await;
    assert_eq!(status, StatusCode::BAD_GATEWAY);
    assert!(body.contains("Score of 150 is outside the allowed range of 0 to 100"), "was: {body}");
}

fn launch_store() -> MockLaunchStore {
    let mut launches = MockLaunchStore::new();
    launches.expect_resolve().returning(|id: &LaunchId| Ok(launch_for(id)));
    launches
}

fn launch_for(id: &LaunchId) -> LaunchContext {
    resource_link_context(id.as_str(), "u1", "Alex")
}

fn configure(launches: MockLaunchStore, grades: MockGradebook) -> impl FnOnce(&mut ServiceConfig) {
    move |cfg: &mut ServiceConfig| {
        cfg.service(ScoreRoute::<MockLaunchStore, MockGradebook>::new())
            .app_data(web::Data::new(LaunchApi::new(launches)))
            .app_data(web::Data::new(GradebookApi::new(grades)));
    }
}
