//! Persisted history of scored attempts.
//!
//! Each record keeps the full serialized [`ScoreResult`](crate::assessments::ScoreResult)
//! so replaying an entry never rescores it.

pub mod domain;
pub mod repository;
pub mod service;

#[cfg(test)]
mod tests;

pub use domain::{HistoryEntry, HistoryId, HistoryRecord, HistorySummaryView};
pub use repository::{newest_first, HistoryError, HistoryRepository};
pub use service::HistoryService;
