use lti_engine::traits::{GradeServiceError, RosterServiceError};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum PlatformApiError {
    #[error("Could not initialize client: {0}")]
    Initialization(String),
    #[error("Invalid service URL: {0}")]
    InvalidUrl(String),
    #[error("Request could not be sent: {0}")]
    RequestError(String),
    #[error("Invalid response: {0}")]
    ResponseError(String),
    #[error("Could not deserialize JSON: {0}")]
    JsonError(String),
    #[error("Query failed. Error {status}. {message}")]
    QueryError { status: u16, message: String },
    #[error("Score of {given} is outside the allowed range of 0 to {maximum}")]
    ScoreOutOfRange { given: f64, maximum: f64 },
    #[error("Missing scope: {0}")]
    MissingScope(String),
    #[error("The launch does not provide a line item endpoint")]
    NoLineItemEndpoint,
}

impl From<PlatformApiError> for GradeServiceError {
    fn from(e: PlatformApiError) -> Self {
        match e {
            PlatformApiError::ScoreOutOfRange { given, maximum } => GradeServiceError::ScoreOutOfRange { given, maximum },
            PlatformApiError::MissingScope(s) => GradeServiceError::MissingScope(s),
            other => GradeServiceError::Backend(other.to_string()),
        }
    }
}

impl From<PlatformApiError> for RosterServiceError {
    fn from(e: PlatformApiError) -> Self {
        RosterServiceError::Backend(e.to_string())
    }
}
