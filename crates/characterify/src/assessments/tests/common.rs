use std::collections::{BTreeMap, HashMap};
use std::sync::{Arc, Mutex};

use axum::response::Response;
use axum::Router;
use serde_json::Value;

use crate::assessments::domain::{AnswerSet, TestId};
use crate::assessments::history::{
    newest_first, HistoryEntry, HistoryError, HistoryId, HistoryRecord, HistoryRepository,
};
use crate::assessments::sessions::{SessionError, SessionStore, TestSession};
use crate::assessments::{assessment_router, AssessmentService};

#[derive(Default)]
pub(super) struct MemoryHistory {
    records: Mutex<BTreeMap<HistoryId, HistoryRecord>>,
}

impl MemoryHistory {
    pub(super) fn len(&self) -> usize {
        self.records.lock().expect("history mutex poisoned").len()
    }
}

impl HistoryRepository for MemoryHistory {
    fn insert(&self, entry: HistoryEntry) -> Result<HistoryRecord, HistoryError> {
        let mut guard = self.records.lock().expect("history mutex poisoned");
        let next = guard.keys().next_back().map_or(1, |id| id.0 + 1);
        let record = entry.into_record(HistoryId(next));
        guard.insert(record.id, record.clone());
        Ok(record)
    }

    fn restore(&self, record: HistoryRecord) -> Result<(), HistoryError> {
        let mut guard = self.records.lock().expect("history mutex poisoned");
        if guard.contains_key(&record.id) {
            return Err(HistoryError::Conflict(record.id));
        }
        guard.insert(record.id, record);
        Ok(())
    }

    fn fetch(&self, id: HistoryId) -> Result<Option<HistoryRecord>, HistoryError> {
        Ok(self
            .records
            .lock()
            .expect("history mutex poisoned")
            .get(&id)
            .cloned())
    }

    fn list(&self) -> Result<Vec<HistoryRecord>, HistoryError> {
        let mut records: Vec<HistoryRecord> = self
            .records
            .lock()
            .expect("history mutex poisoned")
            .values()
            .cloned()
            .collect();
        newest_first(&mut records);
        Ok(records)
    }

    fn delete(&self, id: HistoryId) -> Result<(), HistoryError> {
        let mut guard = self.records.lock().expect("history mutex poisoned");
        guard.remove(&id).map(|_| ()).ok_or(HistoryError::NotFound)
    }

    fn clear(&self) -> Result<usize, HistoryError> {
        let mut guard = self.records.lock().expect("history mutex poisoned");
        let removed = guard.len();
        guard.clear();
        Ok(removed)
    }
}

pub(super) struct UnavailableHistory;

impl HistoryRepository for UnavailableHistory {
    fn insert(&self, _entry: HistoryEntry) -> Result<HistoryRecord, HistoryError> {
        Err(HistoryError::Unavailable("history offline".to_string()))
    }

    fn restore(&self, _record: HistoryRecord) -> Result<(), HistoryError> {
        Err(HistoryError::Unavailable("history offline".to_string()))
    }

    fn fetch(&self, _id: HistoryId) -> Result<Option<HistoryRecord>, HistoryError> {
        Err(HistoryError::Unavailable("history offline".to_string()))
    }

    fn list(&self) -> Result<Vec<HistoryRecord>, HistoryError> {
        Err(HistoryError::Unavailable("history offline".to_string()))
    }

    fn delete(&self, _id: HistoryId) -> Result<(), HistoryError> {
        Err(HistoryError::Unavailable("history offline".to_string()))
    }

    fn clear(&self) -> Result<usize, HistoryError> {
        Err(HistoryError::Unavailable("history offline".to_string()))
    }
}

#[derive(Default)]
pub(super) struct MemorySessions {
    sessions: Mutex<HashMap<TestId, TestSession>>,
}

impl SessionStore for MemorySessions {
    fn upsert(&self, session: TestSession) -> Result<(), SessionError> {
        self.sessions
            .lock()
            .expect("session mutex poisoned")
            .insert(session.test_type, session);
        Ok(())
    }

    fn get(&self, test: TestId) -> Result<Option<TestSession>, SessionError> {
        Ok(self
            .sessions
            .lock()
            .expect("session mutex poisoned")
            .get(&test)
            .cloned())
    }

    fn delete(&self, test: TestId) -> Result<bool, SessionError> {
        Ok(self
            .sessions
            .lock()
            .expect("session mutex poisoned")
            .remove(&test)
            .is_some())
    }
}

pub(super) struct UnavailableSessions;

impl SessionStore for UnavailableSessions {
    fn upsert(&self, _session: TestSession) -> Result<(), SessionError> {
        Err(SessionError::Unavailable("sessions offline".to_string()))
    }

    fn get(&self, _test: TestId) -> Result<Option<TestSession>, SessionError> {
        Err(SessionError::Unavailable("sessions offline".to_string()))
    }

    fn delete(&self, _test: TestId) -> Result<bool, SessionError> {
        Err(SessionError::Unavailable("sessions offline".to_string()))
    }
}

pub(super) type MemoryService = AssessmentService<MemoryHistory, MemorySessions>;

pub(super) fn build_service() -> (Arc<MemoryService>, Arc<MemoryHistory>, Arc<MemorySessions>) {
    let history = Arc::new(MemoryHistory::default());
    let sessions = Arc::new(MemorySessions::default());
    let service = Arc::new(AssessmentService::new(history.clone(), sessions.clone()));
    (service, history, sessions)
}

pub(super) fn router_with_service(service: Arc<MemoryService>) -> Router {
    assessment_router(service)
}

/// MBTI answers that max out I, N, T, and P.
pub(super) fn intp_answers() -> AnswerSet {
    let pattern = [5, 1, 5, 1, 5, 1, 5, 1];
    AnswerSet::from_values((0..40).map(|index| pattern[index % pattern.len()]))
        .expect("valid answers")
}

pub(super) fn full_answers(count: usize, value: u8) -> AnswerSet {
    AnswerSet::from_values(std::iter::repeat(value).take(count)).expect("valid answers")
}

pub(super) async fn json_body(response: Response) -> Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("body readable");
    serde_json::from_slice(&bytes).expect("json body")
}

pub(super) async fn text_body(response: Response) -> String {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("body readable");
    String::from_utf8(bytes.to_vec()).expect("utf8 body")
}
