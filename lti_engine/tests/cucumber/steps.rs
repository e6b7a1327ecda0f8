use cucumber::{given, then, when};
use lti_engine::{
    configure_deep_link,
    lti_types::{Difficulty, GradeResult, RosterMember},
    test_utils::{
        fake_platform::FakePlatform,
        launches::{deep_link_claims, resource_link_claims},
    },
    LaunchCache,
    LaunchClaims,
    ToolApiError,
};
use log::*;

use crate::cucumber::ToolWorld;

//----------------------------------------------   Launches  ----------------------------------------------------
#[given(expr = "learner '{word}' named {string} launches the game")]
async fn learner_launches(world: &mut ToolWorld, sub: String, name: String) {
    let claims = LaunchClaims::from_json(resource_link_claims(&sub, &name)).expect("Invalid claims");
    let context = world.launches().register(claims).await.expect("Launch was not registered");
    debug!("🚀️ Launched {}", context.launch_id);
    world.context = Some(context);
}

#[given(expr = "an instructor starts a deep-linking launch")]
async fn instructor_deep_links(world: &mut ToolWorld) {
    let claims = LaunchClaims::from_json(deep_link_claims("teacher")).expect("Invalid claims");
    let context = world.launches().register(claims).await.expect("Launch was not registered");
    world.context = Some(context);
}

#[given(expr = "the launch has no roster access")]
async fn no_roster_access(world: &mut ToolWorld) {
    world.context_mut().nrps = None;
}

#[given(expr = "the launch has no grade access")]
async fn no_grade_access(world: &mut ToolWorld) {
    world.context_mut().ags = None;
}

#[then(expr = "the launch can be resolved again")]
async fn launch_resolves(world: &mut ToolWorld) {
    let id = world.context().launch_id.clone();
    let found = world.cache.resolve(&id).await.expect("Launch was not cached");
    assert_eq!(&found, world.context());
}

//----------------------------------------------   Platform  ----------------------------------------------------
#[given(expr = "the platform has a score of {int} for '{word}'")]
async fn platform_score(world: &mut ToolWorld, score: u32, user: String) {
    world.platform.add_result("score", GradeResult::new(user, f64::from(score)));
}

#[given(expr = "the platform has a time of {int} for '{word}'")]
async fn platform_time(world: &mut ToolWorld, time: u32, user: String) {
    world.platform.add_result("time", GradeResult::new(user, f64::from(time)));
}

#[given(expr = "the roster lists '{word}' as {string}")]
async fn roster_member(world: &mut ToolWorld, user: String, name: String) {
    world.platform.add_member(RosterMember::new(user, Some(&name)));
}

#[given(expr = "the roster lists '{word}' without a name")]
async fn roster_member_no_name(world: &mut ToolWorld, user: String) {
    world.platform.add_member(RosterMember::new(user, None));
}

#[given(expr = "the platform is unavailable")]
async fn platform_unavailable(world: &mut ToolWorld) {
    world.platform = FakePlatform::new().failing();
}

//----------------------------------------------   Actions  ----------------------------------------------------
#[when(expr = "the learner submits a score of {int} in {int} seconds")]
async fn submit_score(world: &mut ToolWorld, score: u32, time: u32) {
    let result = world.gradebook().submit_grades(world.context(), score, time).await;
    world.submission = Some(result);
}

#[when(expr = "the scoreboard is requested")]
async fn request_scoreboard(world: &mut ToolWorld) {
    let result = world.scoreboard_api().build_scoreboard(world.context()).await;
    world.scoreboard = Some(result);
}

#[when(expr = "the {word} difficulty is chosen")]
async fn choose_difficulty(world: &mut ToolWorld, difficulty: String) {
    let difficulty = difficulty.parse::<Difficulty>().expect("Unknown difficulty");
    let result = configure_deep_link(world.context(), "/launch/", difficulty);
    world.deep_link = Some(result);
}

//----------------------------------------------   Outcomes  ----------------------------------------------------
#[then(expr = "the scoreboard is {string}")]
async fn scoreboard_is(world: &mut ToolWorld, expected: String) {
    let rows = match world.scoreboard.as_ref().expect("No scoreboard was requested") {
        Ok(rows) => rows,
        Err(e) => panic!("Scoreboard failed: {e}"),
    };
    let json = serde_json::to_string(rows).expect("Could not serialize scoreboard");
    assert_eq!(json, expected);
}

#[then(expr = "the submission succeeds")]
async fn submission_succeeds(world: &mut ToolWorld) {
    match world.submission.as_ref().expect("Nothing was submitted") {
        Ok(s) => assert_eq!((s.score.status, s.time.status), (200, 200)),
        Err(e) => panic!("Submission failed: {e}"),
    }
}

#[then(expr = "{int} grades were recorded")]
async fn grades_recorded(world: &mut ToolWorld, count: usize) {
    assert_eq!(world.platform.submissions().len(), count);
}

#[then(expr = "the '{word}' grade is {int} out of {int}")]
async fn grade_recorded(world: &mut ToolWorld, tag: String, score: u32, maximum: u32) {
    let submissions = world.platform.submissions();
    let (item, grade) = submissions.iter().find(|(item, _)| item.tag == tag).expect("No grade with that tag");
    assert_eq!(grade.score_given, f64::from(score));
    assert_eq!(item.score_maximum, f64::from(maximum));
    assert_eq!(item.resource_id.as_deref(), world.context().resource_link_id.as_deref());
}

#[then(expr = "the request is refused as unauthorized")]
async fn refused_unauthorized(world: &mut ToolWorld) {
    assert!(matches!(world.last_error(), ToolApiError::Authorization(_)), "was: {}", world.last_error());
}

#[then(expr = "the request fails upstream")]
async fn fails_upstream(world: &mut ToolWorld) {
    assert!(matches!(world.last_error(), ToolApiError::Upstream(_)), "was: {}", world.last_error());
}

#[then(expr = "the platform was not contacted")]
async fn platform_not_contacted(world: &mut ToolWorld) {
    assert_eq!(world.platform.fetch_count(), 0);
    assert!(world.platform.submissions().is_empty());
}

#[then(expr = "the deep link offers {string} at {string}")]
async fn deep_link_offers(world: &mut ToolWorld, title: String, url: String) {
    let response = match world.deep_link.as_ref().expect("No difficulty was chosen") {
        Ok(r) => r,
        Err(e) => panic!("Deep linking failed: {e}"),
    };
    assert_eq!(response.content_items.len(), 1);
    assert_eq!(response.content_items[0].title, title);
    assert_eq!(response.content_items[0].url, url);
}
