use std::collections::BTreeMap;
use std::sync::{Arc, Mutex};

use chrono::{DateTime, TimeZone, Utc};

use crate::assessments::domain::{AnswerSet, TestId};
use crate::assessments::history::{
    newest_first, HistoryEntry, HistoryError, HistoryId, HistoryRecord, HistoryRepository,
    HistoryService,
};
use crate::assessments::scoring::{ScoreResult, Scorer};

#[derive(Default)]
pub(super) struct MemoryRepository {
    records: Mutex<BTreeMap<HistoryId, HistoryRecord>>,
}

impl HistoryRepository for MemoryRepository {
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
        let guard = self.records.lock().expect("history mutex poisoned");
        Ok(guard.get(&id).cloned())
    }

    fn list(&self) -> Result<Vec<HistoryRecord>, HistoryError> {
        let guard = self.records.lock().expect("history mutex poisoned");
        let mut records: Vec<HistoryRecord> = guard.values().cloned().collect();
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

pub(super) struct OfflineRepository;

impl HistoryRepository for OfflineRepository {
    fn insert(&self, _entry: HistoryEntry) -> Result<HistoryRecord, HistoryError> {
        Err(offline())
    }

    fn restore(&self, _record: HistoryRecord) -> Result<(), HistoryError> {
        Err(offline())
    }

    fn fetch(&self, _id: HistoryId) -> Result<Option<HistoryRecord>, HistoryError> {
        Err(offline())
    }

    fn list(&self) -> Result<Vec<HistoryRecord>, HistoryError> {
        Err(offline())
    }

    fn delete(&self, _id: HistoryId) -> Result<(), HistoryError> {
        Err(offline())
    }

    fn clear(&self) -> Result<usize, HistoryError> {
        Err(offline())
    }
}

fn offline() -> HistoryError {
    HistoryError::Unavailable("disk detached".to_string())
}

pub(super) fn build_service() -> (HistoryService<MemoryRepository>, Arc<MemoryRepository>) {
    let repository = Arc::new(MemoryRepository::default());
    (HistoryService::new(repository.clone()), repository)
}

pub(super) fn at(day: u32, hour: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 3, day, hour, 0, 0)
        .single()
        .expect("valid timestamp")
}

pub(super) fn temperament_answers() -> AnswerSet {
    AnswerSet::from_values([2, 5, 1, 3, 2, 5, 1, 3]).expect("valid answers")
}

pub(super) fn scored(test: TestId, answers: &AnswerSet) -> ScoreResult {
    Scorer::new().score_test(test, answers)
}
