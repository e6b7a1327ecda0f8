//! Reports a finished game back to the platform's gradebook.

use std::fmt::Debug;

use chrono::{DateTime, Utc};
use log::*;

use crate::{
    launch::{AgsEndpoint, LaunchContext},
    lti_types::{GradeRecord, GradeSubmission, LineItemSpec},
    tool_api::errors::ToolApiError,
    traits::GradeService,
};

pub struct GradebookApi<G> {
    grades: G,
}

impl<G: Debug> Debug for GradebookApi<G> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "GradebookApi ({:?})", self.grades)
    }
}

impl<G> GradebookApi<G>
where G: GradeService
{
    pub fn new(grades: G) -> Self {
        Self { grades }
    }

    /// Submits the learner's score and time taken as two separate grades, stamped now.
    pub async fn submit_grades(
        &self,
        context: &LaunchContext,
        earned_score: u32,
        time_spent: u32,
    ) -> Result<GradeSubmission, ToolApiError> {
        self.submit_grades_at(context, earned_score, time_spent, Utc::now()).await
    }

    /// Submits the learner's score and time taken as two separate grades.
    ///
    /// Both grades carry the same `timestamp`. The score goes first; if it fails, the time is not submitted. Each line
    /// item is tied to the launch's resource link (when there is one), so replaying the activity updates the same
    /// gradebook columns.
    pub async fn submit_grades_at(
        &self,
        context: &LaunchContext,
        earned_score: u32,
        time_spent: u32,
        timestamp: DateTime<Utc>,
    ) -> Result<GradeSubmission, ToolApiError> {
        let endpoint = require_score_access(context)?;
        let resource_id = context.resource_link_id.as_deref();

        let score_item = LineItemSpec::score(resource_id);
        let score = GradeRecord::completed(&context.subject, f64::from(earned_score), &score_item, timestamp);
        let score_result = self.grades.submit_grade(endpoint, &score_item, &score).await.map_err(|e| {
            debug!("🎓️ Score submission for {} failed. {e}", context.subject);
            ToolApiError::from(e)
        })?;

        let time_item = LineItemSpec::time(resource_id);
        let time = GradeRecord::completed(&context.subject, f64::from(time_spent), &time_item, timestamp);
        let time_result = self.grades.submit_grade(endpoint, &time_item, &time).await.map_err(|e| {
            debug!("🎓️ Time submission for {} failed. {e}", context.subject);
            ToolApiError::from(e)
        })?;

        info!(
            "🎓️ Submitted score {earned_score} and time {time_spent}s for {} on launch {}",
            context.subject, context.launch_id
        );
        Ok(GradeSubmission { score: score_result, time: time_result })
    }
}

fn require_score_access(context: &LaunchContext) -> Result<&AgsEndpoint, ToolApiError> {
    let endpoint = context
        .ags
        .as_ref()
        .ok_or_else(|| ToolApiError::Authorization("Don't have grades!".to_string()))?;
    if !endpoint.can_submit_scores() {
        return Err(ToolApiError::Authorization("The platform did not grant the score scope.".to_string()));
    }
    Ok(endpoint)
}
