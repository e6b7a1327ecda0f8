use thiserror::Error;

use crate::{
    launch::LaunchClaimsError,
    traits::{GradeServiceError, LaunchCacheError, RosterServiceError},
};

/// Failures surfaced by the tool APIs. None of these are retried here.
#[derive(Debug, Clone, Error)]
pub enum ToolApiError {
    /// The launch lacks a platform capability the operation needs.
    #[error("Not authorized. {0}")]
    Authorization(String),
    #[error("Not found. {0}")]
    NotFound(String),
    /// A call to the platform's grade or roster service failed.
    #[error("Platform service failure. {0}")]
    Upstream(String),
    #[error("Invalid launch. {0}")]
    InvalidLaunch(#[from] LaunchClaimsError),
    #[error("Launch storage failure. {0}")]
    Storage(String),
}

impl From<LaunchCacheError> for ToolApiError {
    fn from(e: LaunchCacheError) -> Self {
        match e {
            LaunchCacheError::NotFound(_) => Self::NotFound(e.to_string()),
            LaunchCacheError::Backend(s) => Self::Storage(s),
        }
    }
}

impl From<GradeServiceError> for ToolApiError {
    fn from(e: GradeServiceError) -> Self {
        match e {
            GradeServiceError::MissingScope(_) => Self::Authorization(e.to_string()),
            GradeServiceError::ScoreOutOfRange { .. } | GradeServiceError::Backend(_) => Self::Upstream(e.to_string()),
        }
    }
}

impl From<RosterServiceError> for ToolApiError {
    fn from(e: RosterServiceError) -> Self {
        Self::Upstream(e.to_string())
    }
}
