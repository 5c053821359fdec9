use std::collections::BTreeSet;
use std::io::{Read, Write};
use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde::Serialize;
use tracing::info;

use super::domain::{HistoryEntry, HistoryId, HistoryRecord};
use super::repository::{HistoryError, HistoryRepository};
use crate::assessments::domain::{AnswerSet, TestId};
use crate::assessments::scoring::ScoreResult;

/// Records, replays, and exports scored attempts on top of a repository.
pub struct HistoryService<R> {
    repository: Arc<R>,
}

#[derive(Debug, Serialize)]
struct CsvRow<'a> {
    id: HistoryId,
    test_type: TestId,
    result_type: &'a str,
    created_at: String,
}

impl<R> HistoryService<R>
where
    R: HistoryRepository + 'static,
{
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }

    pub fn repository(&self) -> &Arc<R> {
        &self.repository
    }

    pub fn record(
        &self,
        result: &ScoreResult,
        answers: &AnswerSet,
    ) -> Result<HistoryRecord, HistoryError> {
        self.record_at(result, answers, Utc::now())
    }

    pub fn record_at(
        &self,
        result: &ScoreResult,
        answers: &AnswerSet,
        created_at: DateTime<Utc>,
    ) -> Result<HistoryRecord, HistoryError> {
        let entry = HistoryEntry::from_result(result, answers, created_at)?;
        let stored = self.repository.insert(entry)?;
        info!(
            id = %stored.id,
            test = %stored.test_type,
            result_type = %stored.result_type,
            "history entry recorded"
        );
        Ok(stored)
    }

    pub fn list(&self) -> Result<Vec<HistoryRecord>, HistoryError> {
        self.repository.list()
    }

    pub fn get(&self, id: HistoryId) -> Result<HistoryRecord, HistoryError> {
        self.repository.fetch(id)?.ok_or(HistoryError::NotFound)
    }

    pub fn replay(&self, id: HistoryId) -> Result<ScoreResult, HistoryError> {
        self.get(id)?.replay()
    }

    pub fn delete(&self, id: HistoryId) -> Result<(), HistoryError> {
        self.repository.delete(id)?;
        info!(id = %id, "history entry deleted");
        Ok(())
    }

    pub fn clear(&self) -> Result<usize, HistoryError> {
        let removed = self.repository.clear()?;
        info!(removed, "history cleared");
        Ok(removed)
    }

    /// Writes every record, newest first, as a pretty-printed JSON array.
    pub fn export_json<W: Write>(&self, mut writer: W) -> Result<usize, HistoryError> {
        let records = self.repository.list()?;
        serde_json::to_writer_pretty(&mut writer, &records)?;
        writer.write_all(b"\n")?;
        writer.flush()?;
        info!(rows = records.len(), format = "json", "history exported");
        Ok(records.len())
    }

    /// Writes one CSV row per record with columns `id,test_type,result_type,created_at`.
    pub fn export_csv<W: Write>(&self, writer: W) -> Result<usize, HistoryError> {
        let records = self.repository.list()?;
        let mut csv_writer = csv::Writer::from_writer(writer);
        for record in &records {
            csv_writer.serialize(CsvRow {
                id: record.id,
                test_type: record.test_type,
                result_type: &record.result_type,
                created_at: record.created_at.to_rfc3339(),
            })?;
        }
        if records.is_empty() {
            csv_writer.write_record(["id", "test_type", "result_type", "created_at"])?;
        }
        csv_writer.flush()?;
        info!(rows = records.len(), format = "csv", "history exported");
        Ok(records.len())
    }

    /// Restores records from a JSON export, keeping their ids.
    ///
    /// The whole file is checked before anything is written: every payload must decode and
    /// no id may repeat or already be stored.
    pub fn import_json<Rd: Read>(&self, reader: Rd) -> Result<usize, HistoryError> {
        let records: Vec<HistoryRecord> = serde_json::from_reader(reader)?;
        let mut seen = BTreeSet::new();
        for record in &records {
            record.replay()?;
            record.answers()?;
            if !seen.insert(record.id) {
                return Err(HistoryError::Conflict(record.id));
            }
        }
        for record in &records {
            if self.repository.fetch(record.id)?.is_some() {
                return Err(HistoryError::Conflict(record.id));
            }
        }

        let count = records.len();
        for record in records {
            self.repository.restore(record)?;
        }
        info!(rows = count, "history imported");
        Ok(count)
    }
}
