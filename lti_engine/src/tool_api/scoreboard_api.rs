//! Builds the class scoreboard from the platform's gradebook and roster.

use std::{collections::HashMap, fmt::Debug};

use futures_util::try_join;
use log::*;

use crate::{
    launch::{AgsEndpoint, LaunchContext, NrpsEndpoint},
    lti_types::{GradeResult, LineItemSpec, RosterMember, ScoreboardRow},
    tool_api::errors::ToolApiError,
    traits::{GradeService, RosterService},
};

pub struct ScoreboardApi<G, R> {
    grades: G,
    roster: R,
}

impl<G: Debug, R: Debug> Debug for ScoreboardApi<G, R> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "ScoreboardApi ({:?}, {:?})", self.grades, self.roster)
    }
}

impl<G, R> ScoreboardApi<G, R>
where
    G: GradeService,
    R: RosterService,
{
    pub fn new(grades: G, roster: R) -> Self {
        Self { grades, roster }
    }

    /// Fetches scores, times and the roster for the launch's context and lines them up by user id.
    ///
    /// The three fetches run concurrently. Any one failing fails the whole scoreboard.
    pub async fn build_scoreboard(&self, context: &LaunchContext) -> Result<Vec<ScoreboardRow>, ToolApiError> {
        let (nrps, ags) = require_scoreboard_access(context)?;
        let resource_id = context.resource_link_id.as_deref();
        let score_item = LineItemSpec::score(resource_id);
        let time_item = LineItemSpec::time(resource_id);
        let (scores, times, members) = try_join!(
            async { self.grades.fetch_grades(ags, &score_item).await.map_err(ToolApiError::from) },
            async { self.grades.fetch_grades(ags, &time_item).await.map_err(ToolApiError::from) },
            async { self.roster.list_members(nrps).await.map_err(ToolApiError::from) },
        )
        .map_err(|e| {
            debug!("🎓️ Could not build scoreboard for launch {}. {e}", context.launch_id);
            e
        })?;
        trace!(
            "🎓️ Scoreboard inputs: {} scores, {} times, {} members",
            scores.len(),
            times.len(),
            members.len()
        );
        Ok(join_scoreboard(&scores, &times, &members))
    }
}

fn require_scoreboard_access(context: &LaunchContext) -> Result<(&NrpsEndpoint, &AgsEndpoint), ToolApiError> {
    let nrps = context
        .nrps
        .as_ref()
        .ok_or_else(|| ToolApiError::Authorization("Don't have names and roles!".to_string()))?;
    let ags = context.ags.as_ref().ok_or_else(|| ToolApiError::Authorization("Don't have grades!".to_string()))?;
    Ok((nrps, ags))
}

/// Left-joins `times` and `members` onto `scores` by user id.
///
/// One row per score, in score order. Where a user has several time results or roster entries, the first one wins. A
/// missing time or member leaves that field empty; a member with no name is shown as "Unknown".
pub fn join_scoreboard(scores: &[GradeResult], times: &[GradeResult], members: &[RosterMember]) -> Vec<ScoreboardRow> {
    let mut times_by_user = HashMap::with_capacity(times.len());
    for t in times {
        times_by_user.entry(t.user_id.as_str()).or_insert(t);
    }
    let mut members_by_user = HashMap::with_capacity(members.len());
    for m in members {
        members_by_user.entry(m.user_id.as_str()).or_insert(m);
    }
    scores
        .iter()
        .map(|s| ScoreboardRow {
            score: s.result_score,
            time: times_by_user.get(s.user_id.as_str()).and_then(|t| t.result_score),
            name: members_by_user.get(s.user_id.as_str()).map(|m| m.display_name().to_string()),
        })
        .collect()
}
