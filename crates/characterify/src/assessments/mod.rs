//! Questionnaire scoring, narrative reports, and result history.
//!
//! Scoring is a pure pipeline over static tables: answers go through [`Scorer`] into a
//! [`ScoreResult`] whose narrative is composed in [`report`]. Persistence is left to
//! [`HistoryRepository`] and [`SessionStore`] implementations supplied by the host.

pub mod bank;
pub mod chart;
pub mod domain;
pub mod history;
pub mod report;
pub mod router;
pub mod scoring;
pub mod service;
pub mod sessions;
pub mod traits;

#[cfg(test)]
mod tests;

pub use bank::{Question, QuestionBank, TestDefinition, TestSummaryView};
pub use chart::{ChartSeries, StackedRow};
pub use domain::{AnswerSet, AssessmentError, ChartKind, ScaleType, TestId, LIKERT_MAX};
pub use history::{
    HistoryEntry, HistoryError, HistoryId, HistoryRecord, HistoryRepository, HistoryService,
    HistorySummaryView,
};
pub use report::{ReportContent, ReportSection};
pub use router::assessment_router;
pub use scoring::{DimensionSplit, Percentages, ScoreResult, Scorer, TraitShare};
pub use service::{AssessmentService, AssessmentServiceError, ScoreOutcome};
pub use sessions::{SessionError, SessionProgressView, SessionStore, TestSession};
