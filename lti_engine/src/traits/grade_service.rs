use thiserror::Error;

use crate::{
    launch::AgsEndpoint,
    lti_types::{GradeRecord, GradeResult, LineItemSpec, SubmissionResult},
};

#[derive(Debug, Clone, Error)]
pub enum GradeServiceError {
    #[error("Score of {given} is outside the allowed range of 0 to {maximum}")]
    ScoreOutOfRange { given: f64, maximum: f64 },
    #[error("The platform did not grant the required scope. {0}")]
    MissingScope(String),
    #[error("Grade service error: {0}")]
    Backend(String),
}

/// The platform's Assignment and Grade Service, as seen by the tool.
///
/// Implementations are responsible for locating (or creating) the line item described by a [`LineItemSpec`], and
/// MUST reject a [`GradeRecord`] whose score lies outside `0..=score_maximum` with
/// [`GradeServiceError::ScoreOutOfRange`]. Callers do not clamp.
#[allow(async_fn_in_trait)]
pub trait GradeService {
    async fn submit_grade(
        &self,
        endpoint: &AgsEndpoint,
        line_item: &LineItemSpec,
        grade: &GradeRecord,
    ) -> Result<SubmissionResult, GradeServiceError>;

    /// Fetches every result recorded against the line item, in the order the platform returns them.
    async fn fetch_grades(
        &self,
        endpoint: &AgsEndpoint,
        line_item: &LineItemSpec,
    ) -> Result<Vec<GradeResult>, GradeServiceError>;
}
