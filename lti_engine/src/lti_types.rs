//! Value types shared by the tool APIs and their backends.
//!
//! Everything in here is immutable once built. Line items and grade records are constructed whole via their named
//! constructors; there are no setters.
use std::{fmt::Display, str::FromStr};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;

pub const SCORE_TAG: &str = "score";
pub const SCORE_LABEL: &str = "Score";
pub const SCORE_MAXIMUM: f64 = 100.0;
pub const TIME_TAG: &str = "time";
pub const TIME_LABEL: &str = "Time Taken";
pub const TIME_MAXIMUM: f64 = 999.0;
pub const UNKNOWN_MEMBER_NAME: &str = "Unknown";

//--------------------------------------------------   LaunchId   ------------------------------------------------------
/// Opaque key for a cached launch.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LaunchId(String);

impl LaunchId {
    const PREFIX: &'static str = "lti1p3-launch-";

    /// Mints a new, unguessable launch id.
    pub fn random() -> Self {
        let bytes: [u8; 16] = rand::random();
        let hex = bytes.iter().map(|b| format!("{b:02x}")).collect::<String>();
        Self(format!("{}{hex}", Self::PREFIX))
    }

    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

impl Display for LaunchId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<String> for LaunchId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl From<&str> for LaunchId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

//--------------------------------------------------   LineItemSpec   --------------------------------------------------
/// Describes a gradable column in the platform's gradebook.
///
/// The `tag` together with the `resource_id` identifies the column for an activity, so that repeated launches of the
/// same resource link land in the same column rather than creating duplicates.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LineItemSpec {
    pub tag: String,
    pub score_maximum: f64,
    pub label: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub resource_id: Option<String>,
}

impl LineItemSpec {
    pub fn new<S: Into<String>>(tag: S, score_maximum: f64, label: S, resource_id: Option<&str>) -> Self {
        Self {
            tag: tag.into(),
            score_maximum,
            label: label.into(),
            resource_id: resource_id.map(String::from),
        }
    }

    /// The game score column. Scores run from 0 to 100.
    pub fn score(resource_id: Option<&str>) -> Self {
        Self::new(SCORE_TAG, SCORE_MAXIMUM, SCORE_LABEL, resource_id)
    }

    /// The time-taken column, in seconds. Capped at 999.
    pub fn time(resource_id: Option<&str>) -> Self {
        Self::new(TIME_TAG, TIME_MAXIMUM, TIME_LABEL, resource_id)
    }

    /// True if `tag` and `resource_id` point at the column this spec describes. A spec without a resource id matches
    /// on tag alone.
    pub fn matches(&self, tag: Option<&str>, resource_id: Option<&str>) -> bool {
        if tag != Some(self.tag.as_str()) {
            return false;
        }
        match &self.resource_id {
            Some(id) => resource_id == Some(id.as_str()),
            None => true,
        }
    }
}

//--------------------------------------------------   GradeRecord   ---------------------------------------------------
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ActivityProgress {
    Initialized,
    Started,
    InProgress,
    Submitted,
    Completed,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GradingProgress {
    FullyGraded,
    Pending,
    PendingManual,
    Failed,
    NotReady,
}

/// A single score for a single user, as sent to the platform's score service.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GradeRecord {
    pub user_id: String,
    pub score_given: f64,
    pub score_maximum: f64,
    pub timestamp: DateTime<Utc>,
    pub activity_progress: ActivityProgress,
    pub grading_progress: GradingProgress,
}

impl GradeRecord {
    /// A finished, fully graded attempt against `line_item`. The score is not clamped; backends reject values that
    /// exceed the line item maximum.
    pub fn completed<S: Into<String>>(
        user_id: S,
        score_given: f64,
        line_item: &LineItemSpec,
        timestamp: DateTime<Utc>,
    ) -> Self {
        Self {
            user_id: user_id.into(),
            score_given,
            score_maximum: line_item.score_maximum,
            timestamp,
            activity_progress: ActivityProgress::Completed,
            grading_progress: GradingProgress::FullyGraded,
        }
    }

    pub fn is_in_range(&self) -> bool {
        self.score_given >= 0.0 && self.score_given <= self.score_maximum
    }
}

/// A grade as read back from the platform's result service.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GradeResult {
    pub user_id: String,
    #[serde(default)]
    pub result_score: Option<f64>,
    #[serde(default)]
    pub result_maximum: Option<f64>,
}

impl GradeResult {
    pub fn new<S: Into<String>>(user_id: S, result_score: f64) -> Self {
        Self { user_id: user_id.into(), result_score: Some(result_score), result_maximum: None }
    }
}

/// What the platform said in reply to a score submission.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SubmissionResult {
    pub status: u16,
    pub body: Value,
}

/// The outcome of submitting both the score and the time for an attempt.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GradeSubmission {
    pub score: SubmissionResult,
    pub time: SubmissionResult,
}

//--------------------------------------------------   Roster   --------------------------------------------------------
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RosterMember {
    pub user_id: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub roles: Vec<String>,
    #[serde(default)]
    pub status: Option<String>,
}

impl RosterMember {
    pub fn new<S: Into<String>>(user_id: S, name: Option<&str>) -> Self {
        Self { user_id: user_id.into(), name: name.map(String::from), roles: vec![], status: None }
    }

    pub fn display_name(&self) -> &str {
        self.name.as_deref().unwrap_or(UNKNOWN_MEMBER_NAME)
    }
}

//--------------------------------------------------   Scoreboard   ----------------------------------------------------
/// One line of the scoreboard. `score` is always present, and is `null` when the platform reported no score. `time`
/// and `name` are left out of the JSON when they could not be matched up.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ScoreboardRow {
    #[serde(default)]
    pub score: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub time: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

//--------------------------------------------------   Difficulty   ----------------------------------------------------
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Easy,
    #[default]
    Normal,
    Hard,
}

impl Difficulty {
    pub const ALL: [Difficulty; 3] = [Difficulty::Easy, Difficulty::Normal, Difficulty::Hard];

    pub fn as_str(&self) -> &'static str {
        match self {
            Difficulty::Easy => "easy",
            Difficulty::Normal => "normal",
            Difficulty::Hard => "hard",
        }
    }
}

impl Display for Difficulty {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Error)]
#[error("'{0}' is not a difficulty this tool offers. Choose one of easy, normal or hard.")]
pub struct InvalidDifficulty(pub String);

impl FromStr for Difficulty {
    type Err = InvalidDifficulty;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "easy" => Ok(Difficulty::Easy),
            "normal" => Ok(Difficulty::Normal),
            "hard" => Ok(Difficulty::Hard),
            _ => Err(InvalidDifficulty(s.to_string())),
        }
    }
}
