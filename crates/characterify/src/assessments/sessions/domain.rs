use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::assessments::bank::TestDefinition;
use crate::assessments::domain::{AnswerSet, AssessmentError, TestId};

/// Saved answers for a questionnaire that has not been scored yet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TestSession {
    pub test_type: TestId,
    pub question_count: usize,
    pub current_index: usize,
    pub answers: AnswerSet,
    pub started_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl TestSession {
    pub fn start(test: &TestDefinition, now: DateTime<Utc>) -> Self {
        Self {
            test_type: test.id,
            question_count: test.question_count(),
            current_index: 0,
            answers: AnswerSet::new(),
            started_at: now,
            updated_at: now,
        }
    }

    /// Stores one answer and moves the cursor past it.
    pub fn record_answer(
        &mut self,
        index: usize,
        value: u8,
        now: DateTime<Utc>,
    ) -> Result<(), AssessmentError> {
        self.check_index(index)?;
        self.answers.record(index, value)?;
        self.current_index = (index + 1).min(self.question_count);
        self.updated_at = now;
        Ok(())
    }

    /// Merges a batch of answers, optionally repositioning the cursor.
    ///
    /// The batch is validated up front so a rejected request leaves the session unchanged.
    pub fn merge(
        &mut self,
        answers: &AnswerSet,
        current_index: Option<usize>,
        now: DateTime<Utc>,
    ) -> Result<(), AssessmentError> {
        for (index, _) in answers.iter() {
            self.check_index(index)?;
        }
        if let Some(cursor) = current_index {
            if cursor > self.question_count {
                return Err(AssessmentError::QuestionOutOfRange {
                    index: cursor,
                    count: self.question_count,
                });
            }
        }

        for (index, value) in answers.iter() {
            self.answers.record(index, value)?;
        }
        self.current_index = match current_index {
            Some(cursor) => cursor,
            None => answers
                .iter()
                .map(|(index, _)| index + 1)
                .max()
                .map_or(self.current_index, |next| next.max(self.current_index))
                .min(self.question_count),
        };
        self.updated_at = now;
        Ok(())
    }

    /// Fraction of questions answered with a non-zero value, in `0.0..=1.0`.
    pub fn progress(&self) -> f64 {
        if self.question_count == 0 {
            return 0.0;
        }
        self.answers.answered() as f64 / self.question_count as f64
    }

    pub fn is_complete(&self) -> bool {
        self.answers.answered() >= self.question_count
    }

    pub fn progress_view(&self) -> SessionProgressView {
        SessionProgressView {
            test_type: self.test_type,
            current_index: self.current_index,
            answered: self.answers.answered(),
            question_count: self.question_count,
            progress: self.progress(),
            complete: self.is_complete(),
            updated_at: self.updated_at,
        }
    }

    fn check_index(&self, index: usize) -> Result<(), AssessmentError> {
        if index >= self.question_count {
            return Err(AssessmentError::QuestionOutOfRange {
                index,
                count: self.question_count,
            });
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SessionProgressView {
    pub test_type: TestId,
    pub current_index: usize,
    pub answered: usize,
    pub question_count: usize,
    pub progress: f64,
    pub complete: bool,
    pub updated_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use chrono::{Duration, TimeZone};

    use super::*;
    use crate::assessments::bank::QuestionBank;

    fn started(test: TestId) -> (TestSession, DateTime<Utc>) {
        let now = Utc
            .with_ymd_and_hms(2025, 4, 2, 8, 30, 0)
            .single()
            .expect("valid timestamp");
        let bank = QuestionBank::standard();
        (TestSession::start(bank.get_test(test), now), now)
    }

    #[test]
    fn start_is_empty() {
        let (session, now) = started(TestId::Temperament);
        assert_eq!(session.question_count, 24);
        assert_eq!(session.current_index, 0);
        assert_eq!(session.started_at, now);
        assert_eq!(session.progress(), 0.0);
        assert!(!session.is_complete());
    }

    #[test]
    fn record_answer_advances_cursor() {
        let (mut session, now) = started(TestId::Temperament);
        let later = now + Duration::minutes(3);
        session.record_answer(4, 3, later).expect("valid answer");

        assert_eq!(session.current_index, 5);
        assert_eq!(session.answers.value(4), 3);
        assert_eq!(session.updated_at, later);
        assert!((session.progress() - 1.0 / 24.0).abs() < 1e-12);
    }

    #[test]
    fn record_answer_rejects_bad_input_without_changes() {
        let (mut session, now) = started(TestId::Temperament);
        assert_eq!(
            session.record_answer(24, 3, now),
            Err(AssessmentError::QuestionOutOfRange {
                index: 24,
                count: 24
            })
        );
        assert_eq!(
            session.record_answer(2, 7, now),
            Err(AssessmentError::AnswerOutOfRange { index: 2, value: 7 })
        );
        assert!(session.answers.is_empty());
        assert_eq!(session.current_index, 0);
    }

    #[test]
    fn last_answer_clamps_cursor_and_completes() {
        let (mut session, now) = started(TestId::Temperament);
        for index in 0..24 {
            session.record_answer(index, 4, now).expect("valid answer");
        }
        assert_eq!(session.current_index, 24);
        assert!(session.is_complete());
        assert_eq!(session.progress(), 1.0);
    }

    #[test]
    fn zero_answers_do_not_count_as_progress() {
        let (mut session, now) = started(TestId::Enneagram);
        session.record_answer(0, 0, now).expect("zero is allowed");
        assert_eq!(session.answers.len(), 1);
        assert_eq!(session.progress(), 0.0);
    }

    #[test]
    fn merge_is_all_or_nothing() {
        let (mut session, now) = started(TestId::Ocean);
        let batch = AnswerSet::from_values([3, 4, 5]).expect("valid");
        session.merge(&batch, None, now).expect("merge succeeds");
        assert_eq!(session.current_index, 3);

        let mut bad = AnswerSet::new();
        bad.record(1, 1).expect("valid");
        bad.record(40, 2).expect("valid");
        assert!(session.merge(&bad, None, now).is_err());
        assert_eq!(session.answers.value(1), 4);

        session
            .merge(&AnswerSet::new(), Some(1), now)
            .expect("cursor move succeeds");
        assert_eq!(session.current_index, 1);
        assert!(session.merge(&AnswerSet::new(), Some(41), now).is_err());
    }
}
