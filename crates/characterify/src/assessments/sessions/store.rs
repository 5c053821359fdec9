use super::domain::TestSession;
use crate::assessments::domain::{AssessmentError, TestId};

/// Keeps at most one in-progress session per test.
pub trait SessionStore: Send + Sync {
    fn upsert(&self, session: TestSession) -> Result<(), SessionError>;
    fn get(&self, test: TestId) -> Result<Option<TestSession>, SessionError>;
    /// Returns whether a session was removed.
    fn delete(&self, test: TestId) -> Result<bool, SessionError>;
}

#[derive(Debug, thiserror::Error)]
pub enum SessionError {
    #[error("session store unavailable: {0}")]
    Unavailable(String),
    #[error(transparent)]
    Invalid(#[from] AssessmentError),
}
