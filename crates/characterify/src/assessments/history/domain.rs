use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::repository::HistoryError;
use crate::assessments::domain::{AnswerSet, TestId};
use crate::assessments::scoring::ScoreResult;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct HistoryId(pub u64);

impl fmt::Display for HistoryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for HistoryId {
    type Err = std::num::ParseIntError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        raw.trim().parse().map(Self)
    }
}

/// A scored attempt that has not been stored yet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HistoryEntry {
    pub test_type: TestId,
    pub result_type: String,
    pub score_json: String,
    pub answers_json: String,
    pub created_at: DateTime<Utc>,
}

impl HistoryEntry {
    /// Snapshots the full result and the raw answers as JSON blobs.
    pub fn from_result(
        result: &ScoreResult,
        answers: &AnswerSet,
        created_at: DateTime<Utc>,
    ) -> Result<Self, HistoryError> {
        Ok(Self {
            test_type: result.test_id,
            result_type: result.result_type.clone(),
            score_json: serde_json::to_string(result)?,
            answers_json: serde_json::to_string(answers)?,
            created_at,
        })
    }

    pub fn into_record(self, id: HistoryId) -> HistoryRecord {
        HistoryRecord {
            id,
            test_type: self.test_type,
            result_type: self.result_type,
            score_json: self.score_json,
            answers_json: self.answers_json,
            created_at: self.created_at,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryRecord {
    pub id: HistoryId,
    pub test_type: TestId,
    pub result_type: String,
    pub score_json: String,
    pub answers_json: String,
    pub created_at: DateTime<Utc>,
}

impl HistoryRecord {
    /// Restores the stored result without rescoring, so narrative changes never rewrite
    /// past reports.
    pub fn replay(&self) -> Result<ScoreResult, HistoryError> {
        Ok(serde_json::from_str(&self.score_json)?)
    }

    pub fn answers(&self) -> Result<AnswerSet, HistoryError> {
        Ok(serde_json::from_str(&self.answers_json)?)
    }

    pub fn summary_view(&self) -> HistorySummaryView {
        HistorySummaryView {
            id: self.id,
            test_type: self.test_type,
            result_type: self.result_type.clone(),
            created_at: self.created_at,
        }
    }
}

/// Listing entry without the JSON payloads.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HistorySummaryView {
    pub id: HistoryId,
    pub test_type: TestId,
    pub result_type: String,
    pub created_at: DateTime<Utc>,
}
