use lti_engine::lti_types::GradeSubmission;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Response to a score submission. `result` is the platform's reply to the time-taken grade; `score_result` the
/// reply to the score grade.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoreResponse {
    pub success: bool,
    pub result: Value,
    pub score_result: Value,
}

impl From<GradeSubmission> for ScoreResponse {
    fn from(submission: GradeSubmission) -> Self {
        Self { success: true, result: submission.time.body, score_result: submission.score.body }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LaunchParams {
    pub difficulty: Option<String>,
}
