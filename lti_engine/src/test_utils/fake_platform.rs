use std::{
    collections::HashMap,
    sync::{Arc, Mutex, MutexGuard},
};

use serde_json::json;

use crate::{
    launch::{AgsEndpoint, NrpsEndpoint},
    lti_types::{GradeRecord, GradeResult, LineItemSpec, RosterMember, SubmissionResult},
    traits::{GradeService, GradeServiceError, RosterService, RosterServiceError},
};

#[derive(Debug, Default)]
struct PlatformState {
    results: HashMap<String, Vec<GradeResult>>,
    members: Vec<RosterMember>,
    submissions: Vec<(LineItemSpec, GradeRecord)>,
    fetches: usize,
}

/// An in-memory stand-in for a platform's grade and roster services.
///
/// Results are kept per line item tag. Submitting a grade records the submission and replaces that user's result for
/// the tag, so a scoreboard built afterwards reflects it. Clones share state.
#[derive(Debug, Clone, Default)]
pub struct FakePlatform {
    state: Arc<Mutex<PlatformState>>,
    failing: bool,
}

impl FakePlatform {
    pub fn new() -> Self {
        Self::default()
    }

    /// Every call to this platform fails with a backend error.
    pub fn failing(mut self) -> Self {
        self.failing = true;
        self
    }

    pub fn with_result(self, tag: &str, result: GradeResult) -> Self {
        self.add_result(tag, result);
        self
    }

    pub fn with_member(self, member: RosterMember) -> Self {
        self.add_member(member);
        self
    }

    pub fn add_result(&self, tag: &str, result: GradeResult) {
        self.state().results.entry(tag.to_string()).or_default().push(result);
    }

    pub fn add_member(&self, member: RosterMember) {
        self.state().members.push(member);
    }

    pub fn submissions(&self) -> Vec<(LineItemSpec, GradeRecord)> {
        self.state().submissions.clone()
    }

    /// The number of result and roster fetches made so far.
    pub fn fetch_count(&self) -> usize {
        self.state().fetches
    }

    fn state(&self) -> MutexGuard<'_, PlatformState> {
        self.state.lock().expect("Fake platform state is poisoned")
    }
}

impl GradeService for FakePlatform {
    async fn submit_grade(
        &self,
        _endpoint: &AgsEndpoint,
        line_item: &LineItemSpec,
        grade: &GradeRecord,
    ) -> Result<SubmissionResult, GradeServiceError> {
        if self.failing {
            return Err(GradeServiceError::Backend("The platform is unavailable".into()));
        }
        if !grade.is_in_range() || grade.score_given > line_item.score_maximum {
            return Err(GradeServiceError::ScoreOutOfRange {
                given: grade.score_given,
                maximum: line_item.score_maximum,
            });
        }
        let mut state = self.state();
        state.submissions.push((line_item.clone(), grade.clone()));
        let results = state.results.entry(line_item.tag.clone()).or_default();
        let result = GradeResult {
            user_id: grade.user_id.clone(),
            result_score: Some(grade.score_given),
            result_maximum: Some(grade.score_maximum),
        };
        match results.iter_mut().find(|r| r.user_id == grade.user_id) {
            Some(existing) => *existing = result,
            None => results.push(result),
        }
        Ok(SubmissionResult {
            status: 200,
            body: json!({ "userId": grade.user_id, "scoreGiven": grade.score_given, "tag": line_item.tag }),
        })
    }

    async fn fetch_grades(
        &self,
        _endpoint: &AgsEndpoint,
        line_item: &LineItemSpec,
    ) -> Result<Vec<GradeResult>, GradeServiceError> {
        let mut state = self.state();
        state.fetches += 1;
        if self.failing {
            return Err(GradeServiceError::Backend("The platform is unavailable".into()));
        }
        Ok(state.results.get(&line_item.tag).cloned().unwrap_or_default())
    }
}

impl RosterService for FakePlatform {
    async fn list_members(&self, _endpoint: &NrpsEndpoint) -> Result<Vec<RosterMember>, RosterServiceError> {
        let mut state = self.state();
        state.fetches += 1;
        if self.failing {
            return Err(RosterServiceError::Backend("The platform is unavailable".into()));
        }
        Ok(state.members.clone())
    }
}
