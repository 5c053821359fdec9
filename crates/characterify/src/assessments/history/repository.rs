use super::domain::{HistoryEntry, HistoryId, HistoryRecord};

/// Storage abstraction for scored attempts. Implementations assign ids on insert.
pub trait HistoryRepository: Send + Sync {
    fn insert(&self, entry: HistoryEntry) -> Result<HistoryRecord, HistoryError>;
    /// Stores a record under its existing id, failing with `Conflict` if it is taken.
    fn restore(&self, record: HistoryRecord) -> Result<(), HistoryError>;
    fn fetch(&self, id: HistoryId) -> Result<Option<HistoryRecord>, HistoryError>;
    /// All records, newest first.
    fn list(&self) -> Result<Vec<HistoryRecord>, HistoryError>;
    fn delete(&self, id: HistoryId) -> Result<(), HistoryError>;
    /// Removes every record and returns how many were dropped.
    fn clear(&self) -> Result<usize, HistoryError>;
}

#[derive(Debug, thiserror::Error)]
pub enum HistoryError {
    #[error("history record not found")]
    NotFound,
    #[error("history record {0} already exists")]
    Conflict(HistoryId),
    #[error("history store unavailable: {0}")]
    Unavailable(String),
    #[error("history payload could not be encoded: {0}")]
    Serialization(#[from] serde_json::Error),
    #[error("history csv export failed: {0}")]
    Csv(#[from] csv::Error),
    #[error("history io failure: {0}")]
    Io(#[from] std::io::Error),
}

/// Orders records newest first; equal timestamps fall back to the higher id.
pub fn newest_first(records: &mut [HistoryRecord]) {
    records.sort_by(|a, b| {
        b.created_at
            .cmp(&a.created_at)
            .then_with(|| b.id.cmp(&a.id))
    });
}
