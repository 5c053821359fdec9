use std::sync::Arc;

use chrono::Utc;
use serde::Serialize;
use tracing::{info, warn};

use super::bank::{QuestionBank, TestDefinition, TestSummaryView};
use super::chart::ChartSeries;
use super::domain::{AnswerSet, AssessmentError, TestId};
use super::history::{HistoryError, HistoryId, HistoryRepository, HistoryService};
use super::scoring::{ScoreResult, Scorer};
use super::sessions::{SessionError, SessionStore, TestSession};

/// Service composing the question bank, scorer, history, and session store.
pub struct AssessmentService<H, S> {
    bank: Arc<QuestionBank>,
    scorer: Scorer,
    history: HistoryService<H>,
    sessions: Arc<S>,
}

/// A scored attempt together with its chart and, when saved, its history id.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScoreOutcome {
    pub result: ScoreResult,
    pub chart: ChartSeries,
    pub history_id: Option<HistoryId>,
}

impl<H, S> AssessmentService<H, S>
where
    H: HistoryRepository + 'static,
    S: SessionStore + 'static,
{
    pub fn new(history: Arc<H>, sessions: Arc<S>) -> Self {
        Self::with_bank(Arc::new(QuestionBank::standard()), history, sessions)
    }

    pub fn with_bank(bank: Arc<QuestionBank>, history: Arc<H>, sessions: Arc<S>) -> Self {
        Self {
            bank,
            scorer: Scorer::new(),
            history: HistoryService::new(history),
            sessions,
        }
    }

    pub fn list_tests(&self) -> Vec<TestSummaryView> {
        self.bank
            .list_tests()
            .iter()
            .map(TestDefinition::summary)
            .collect()
    }

    pub fn test(&self, raw: &str) -> Result<&TestDefinition, AssessmentServiceError> {
        Ok(self.bank.find_test(raw)?)
    }

    /// Scores answers and optionally records the attempt.
    ///
    /// Answers beyond the test's question count are rejected here; the scorer itself
    /// would silently ignore them. Saving clears the in-progress session for that test; a
    /// failure to clear it is logged and does not undo or fail the save.
    pub fn score(
        &self,
        raw: &str,
        answers: &AnswerSet,
        save: bool,
    ) -> Result<ScoreOutcome, AssessmentServiceError> {
        let test = self.bank.find_test(raw)?;
        let count = test.question_count();
        if let Some((index, _)) = answers.iter().find(|(index, _)| *index >= count) {
            return Err(AssessmentError::QuestionOutOfRange { index, count }.into());
        }

        let result = self.scorer.score_test(test.id, answers);
        let chart = result.chart();
        let history_id = if save {
            let record = self.history.record(&result, answers)?;
            match self.sessions.delete(test.id) {
                Ok(true) => info!(test = %test.id, "session closed after save"),
                Ok(false) => {}
                Err(err) => warn!(
                    test = %test.id,
                    id = %record.id,
                    error = %err,
                    "result saved but session could not be cleared"
                ),
            }
            Some(record.id)
        } else {
            None
        };

        Ok(ScoreOutcome {
            result,
            chart,
            history_id,
        })
    }

    pub fn history(&self) -> &HistoryService<H> {
        &self.history
    }

    /// Replays a stored attempt along with its chart.
    pub fn replay(&self, id: HistoryId) -> Result<ScoreOutcome, AssessmentServiceError> {
        let result = self.history.replay(id)?;
        let chart = result.chart();
        Ok(ScoreOutcome {
            result,
            chart,
            history_id: Some(id),
        })
    }

    pub fn get_session(&self, raw: &str) -> Result<Option<TestSession>, AssessmentServiceError> {
        let test: TestId = raw.parse()?;
        Ok(self.sessions.get(test)?)
    }

    /// Merges answers into the stored session, starting one if needed.
    pub fn save_session(
        &self,
        raw: &str,
        answers: &AnswerSet,
        current_index: Option<usize>,
    ) -> Result<TestSession, AssessmentServiceError> {
        let test = self.bank.find_test(raw)?;
        let now = Utc::now();
        let mut session = match self.sessions.get(test.id)? {
            Some(existing) => existing,
            None => TestSession::start(test, now),
        };
        session.merge(answers, current_index, now)?;
        self.sessions.upsert(session.clone())?;
        Ok(session)
    }

    pub fn discard_session(&self, raw: &str) -> Result<bool, AssessmentServiceError> {
        let test: TestId = raw.parse()?;
        Ok(self.sessions.delete(test)?)
    }
}

#[derive(Debug, thiserror::Error)]
pub enum AssessmentServiceError {
    #[error(transparent)]
    Assessment(#[from] AssessmentError),
    #[error(transparent)]
    History(#[from] HistoryError),
    #[error(transparent)]
    Session(SessionError),
}

impl From<SessionError> for AssessmentServiceError {
    fn from(value: SessionError) -> Self {
        match value {
            SessionError::Invalid(err) => Self::Assessment(err),
            other => Self::Session(other),
        }
    }
}
