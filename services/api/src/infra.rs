use characterify::assessments::history::newest_first;
use characterify::assessments::{
    HistoryEntry, HistoryError, HistoryId, HistoryRecord, HistoryRepository, SessionError,
    SessionStore, TestId, TestSession,
};
use characterify::config::StorageConfig;
use metrics_exporter_prometheus::PrometheusHandle;
use std::collections::{BTreeMap, HashMap};
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::sync::atomic::AtomicBool;
use std::sync::{Arc, Mutex};
use tracing::debug;

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

#[derive(Default, Clone)]
pub(crate) struct InMemoryHistoryRepository {
    records: Arc<Mutex<BTreeMap<HistoryId, HistoryRecord>>>,
}

impl HistoryRepository for InMemoryHistoryRepository {
    fn insert(&self, entry: HistoryEntry) -> Result<HistoryRecord, HistoryError> {
        let mut guard = self.records.lock().expect("history mutex poisoned");
        let record = entry.into_record(next_id(guard.keys().next_back())?);
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
        match guard.remove(&id) {
            Some(_) => Ok(()),
            None => Err(HistoryError::NotFound),
        }
    }

    fn clear(&self) -> Result<usize, HistoryError> {
        let mut guard = self.records.lock().expect("history mutex poisoned");
        let removed = guard.len();
        guard.clear();
        Ok(removed)
    }
}

/// History kept as a JSON array on disk. Every call reloads the file, so separate
/// processes (the CLI and a running server) see each other's writes.
#[derive(Clone)]
pub(crate) struct JsonFileHistoryRepository {
    path: PathBuf,
    lock: Arc<Mutex<()>>,
}

impl JsonFileHistoryRepository {
    pub(crate) fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            lock: Arc::new(Mutex::new(())),
        }
    }

    pub(crate) fn path(&self) -> &Path {
        &self.path
    }

    fn load(&self) -> Result<Vec<HistoryRecord>, HistoryError> {
        match fs::read(&self.path) {
            Ok(bytes) if bytes.iter().all(u8::is_ascii_whitespace) => Ok(Vec::new()),
            Ok(bytes) => Ok(serde_json::from_slice(&bytes)?),
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(Vec::new()),
            Err(err) => Err(err.into()),
        }
    }

    fn persist(&self, records: &[HistoryRecord]) -> Result<(), HistoryError> {
        if let Some(parent) = self.path.parent().filter(|dir| !dir.as_os_str().is_empty()) {
            fs::create_dir_all(parent)?;
        }
        let staging = self.path.with_extension("json.tmp");
        fs::write(&staging, serde_json::to_vec_pretty(records)?)?;
        fs::rename(&staging, &self.path)?;
        debug!(path = %self.path.display(), rows = records.len(), "history file written");
        Ok(())
    }
}

impl HistoryRepository for JsonFileHistoryRepository {
    fn insert(&self, entry: HistoryEntry) -> Result<HistoryRecord, HistoryError> {
        let _guard = self.lock.lock().expect("history file mutex poisoned");
        let mut records = self.load()?;
        let id = next_id(records.iter().map(|record| &record.id).max())?;
        let record = entry.into_record(id);
        records.push(record.clone());
        self.persist(&records)?;
        Ok(record)
    }

    fn restore(&self, record: HistoryRecord) -> Result<(), HistoryError> {
        let _guard = self.lock.lock().expect("history file mutex poisoned");
        let mut records = self.load()?;
        if records.iter().any(|existing| existing.id == record.id) {
            return Err(HistoryError::Conflict(record.id));
        }
        records.push(record);
        self.persist(&records)
    }

    fn fetch(&self, id: HistoryId) -> Result<Option<HistoryRecord>, HistoryError> {
        let _guard = self.lock.lock().expect("history file mutex poisoned");
        Ok(self.load()?.into_iter().find(|record| record.id == id))
    }

    fn list(&self) -> Result<Vec<HistoryRecord>, HistoryError> {
        let _guard = self.lock.lock().expect("history file mutex poisoned");
        let mut records = self.load()?;
        newest_first(&mut records);
        Ok(records)
    }

    fn delete(&self, id: HistoryId) -> Result<(), HistoryError> {
        let _guard = self.lock.lock().expect("history file mutex poisoned");
        let mut records = self.load()?;
        let before = records.len();
        records.retain(|record| record.id != id);
        if records.len() == before {
            return Err(HistoryError::NotFound);
        }
        self.persist(&records)
    }

    fn clear(&self) -> Result<usize, HistoryError> {
        let _guard = self.lock.lock().expect("history file mutex poisoned");
        let removed = self.load()?.len();
        self.persist(&[])?;
        Ok(removed)
    }
}

/// History backend chosen from `APP_HISTORY_PATH`.
#[derive(Clone)]
pub(crate) enum HistoryStore {
    Memory(InMemoryHistoryRepository),
    File(JsonFileHistoryRepository),
}

impl HistoryStore {
    pub(crate) fn from_config(storage: &StorageConfig) -> Self {
        match &storage.history_path {
            Some(path) => Self::File(JsonFileHistoryRepository::new(path)),
            None => Self::Memory(InMemoryHistoryRepository::default()),
        }
    }

    pub(crate) fn describe(&self) -> String {
        match self {
            Self::Memory(_) => "in-memory".to_string(),
            Self::File(repository) => repository.path().display().to_string(),
        }
    }

    fn backend(&self) -> &dyn HistoryRepository {
        match self {
            Self::Memory(repository) => repository,
            Self::File(repository) => repository,
        }
    }
}

impl HistoryRepository for HistoryStore {
    fn insert(&self, entry: HistoryEntry) -> Result<HistoryRecord, HistoryError> {
        self.backend().insert(entry)
    }

    fn restore(&self, record: HistoryRecord) -> Result<(), HistoryError> {
        self.backend().restore(record)
    }

    fn fetch(&self, id: HistoryId) -> Result<Option<HistoryRecord>, HistoryError> {
        self.backend().fetch(id)
    }

    fn list(&self) -> Result<Vec<HistoryRecord>, HistoryError> {
        self.backend().list()
    }

    fn delete(&self, id: HistoryId) -> Result<(), HistoryError> {
        self.backend().delete(id)
    }

    fn clear(&self) -> Result<usize, HistoryError> {
        self.backend().clear()
    }
}

#[derive(Default, Clone)]
pub(crate) struct InMemorySessionStore {
    sessions: Arc<Mutex<HashMap<TestId, TestSession>>>,
}

impl SessionStore for InMemorySessionStore {
    fn upsert(&self, session: TestSession) -> Result<(), SessionError> {
        let mut guard = self.sessions.lock().expect("session mutex poisoned");
        guard.insert(session.test_type, session);
        Ok(())
    }

    fn get(&self, test: TestId) -> Result<Option<TestSession>, SessionError> {
        let guard = self.sessions.lock().expect("session mutex poisoned");
        Ok(guard.get(&test).cloned())
    }

    fn delete(&self, test: TestId) -> Result<bool, SessionError> {
        let mut guard = self.sessions.lock().expect("session mutex poisoned");
        Ok(guard.remove(&test).is_some())
    }
}

/// Next id after the largest stored one. Imports may carry any id, so the top of the range
/// is reachable.
fn next_id(last: Option<&HistoryId>) -> Result<HistoryId, HistoryError> {
    match last {
        None => Ok(HistoryId(1)),
        Some(id) => id.0.checked_add(1).map(HistoryId).ok_or_else(|| {
            HistoryError::Unavailable(format!("history id space exhausted after {id}"))
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use characterify::assessments::{AnswerSet, Scorer};
    use chrono::{TimeZone, Utc};

    fn scratch_path(name: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!(
            "characterify-infra-{}-{name}",
            std::process::id()
        ));
        let _ = fs::remove_dir_all(&dir);
        dir.join("history.json")
    }

    fn entry(hour: u32) -> HistoryEntry {
        let answers = AnswerSet::from_values([1, 5, 2, 2]).expect("valid answers");
        let result = Scorer::new().score_test(TestId::Temperament, &answers);
        let created_at = Utc
            .with_ymd_and_hms(2025, 5, 1, hour, 0, 0)
            .single()
            .expect("valid timestamp");
        HistoryEntry::from_result(&result, &answers, created_at).expect("entry encodes")
    }

    #[test]
    fn file_repository_survives_reopen() {
        let path = scratch_path("reopen");
        let repository = JsonFileHistoryRepository::new(&path);
        assert!(repository.list().expect("missing file is empty").is_empty());

        let first = repository.insert(entry(8)).expect("insert");
        let second = repository.insert(entry(9)).expect("insert");
        assert_eq!((first.id, second.id), (HistoryId(1), HistoryId(2)));

        let reopened = JsonFileHistoryRepository::new(&path);
        let ids: Vec<HistoryId> = reopened
            .list()
            .expect("list")
            .into_iter()
            .map(|record| record.id)
            .collect();
        assert_eq!(ids, vec![HistoryId(2), HistoryId(1)]);
        assert_eq!(
            reopened.fetch(HistoryId(1)).expect("fetch"),
            Some(first.clone())
        );

        assert!(matches!(
            reopened.restore(first),
            Err(HistoryError::Conflict(HistoryId(1)))
        ));
        reopened.delete(HistoryId(1)).expect("delete");
        assert!(matches!(
            reopened.delete(HistoryId(1)),
            Err(HistoryError::NotFound)
        ));
        assert_eq!(reopened.clear().expect("clear"), 1);
        assert!(repository.list().expect("list").is_empty());
    }

    fn record_with_id(id: HistoryId) -> HistoryRecord {
        entry(6).into_record(id)
    }

    #[test]
    fn insert_after_largest_id_fails_without_poisoning() {
        let repository = InMemoryHistoryRepository::default();
        repository
            .restore(record_with_id(HistoryId(u64::MAX)))
            .expect("imported id accepted");

        assert!(matches!(
            repository.insert(entry(7)),
            Err(HistoryError::Unavailable(_))
        ));
        assert!(matches!(
            repository.insert(entry(8)),
            Err(HistoryError::Unavailable(_))
        ));
        assert_eq!(repository.list().expect("store still usable").len(), 1);
    }

    #[test]
    fn file_insert_after_largest_id_leaves_file_untouched() {
        let path = scratch_path("exhausted");
        let repository = JsonFileHistoryRepository::new(&path);
        repository
            .restore(record_with_id(HistoryId(u64::MAX)))
            .expect("imported id accepted");

        assert!(matches!(
            repository.insert(entry(7)),
            Err(HistoryError::Unavailable(_))
        ));
        let ids: Vec<HistoryId> = repository
            .list()
            .expect("list")
            .into_iter()
            .map(|record| record.id)
            .collect();
        assert_eq!(ids, vec![HistoryId(u64::MAX)]);
    }

    #[test]
    fn next_id_starts_at_one() {
        assert_eq!(next_id(None).expect("first id"), HistoryId(1));
        assert_eq!(next_id(Some(&HistoryId(41))).expect("next id"), HistoryId(42));
    }

    #[test]
    fn corrupted_file_is_a_serialization_error() {
        let path = scratch_path("corrupt");
        fs::create_dir_all(path.parent().expect("parent")).expect("dir");
        fs::write(&path, "not json").expect("write");
        let repository = JsonFileHistoryRepository::new(&path);
        assert!(matches!(
            repository.list(),
            Err(HistoryError::Serialization(_))
        ));
    }

    #[test]
    fn store_selects_backend_from_config() {
        let memory = HistoryStore::from_config(&StorageConfig::default());
        assert_eq!(memory.describe(), "in-memory");
        memory.insert(entry(7)).expect("insert");
        assert_eq!(memory.list().expect("list").len(), 1);

        let path = scratch_path("config");
        let file = HistoryStore::from_config(&StorageConfig {
            history_path: Some(path.clone()),
        });
        assert!(matches!(file, HistoryStore::File(_)));
        assert_eq!(file.describe(), path.display().to_string());
    }

    #[test]
    fn session_store_keeps_one_session_per_test() {
        let store = InMemorySessionStore::default();
        let bank = characterify::assessments::QuestionBank::standard();
        let now = Utc::now();
        let mut session = TestSession::start(bank.get_test(TestId::Ocean), now);
        store.upsert(session.clone()).expect("upsert");
        session.record_answer(0, 4, now).expect("answer");
        store.upsert(session.clone()).expect("upsert");

        assert_eq!(store.get(TestId::Ocean).expect("get"), Some(session));
        assert!(store.get(TestId::Mbti).expect("get").is_none());
        assert!(store.delete(TestId::Ocean).expect("delete"));
        assert!(!store.delete(TestId::Ocean).expect("delete"));
    }
}
