//! Error types for sp-store.

use thiserror::Error;

use sp_core::{EntryId, RoadmapId, TopicId};

/// Errors that can occur while persisting or loading roadmaps.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("roadmap {0} not found")]
    UnknownRoadmap(RoadmapId),

    #[error("plan entry {0} not found")]
    UnknownEntry(EntryId),

    #[error("topic {0} not found")]
    UnknownTopic(TopicId),

    #[error("corrupt roadmap record: {0}")]
    Corrupt(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV write error: {0}")]
    Csv(#[from] csv::Error),

    #[cfg(feature = "sqlite")]
    #[error("SQLite error: {0}")]
    Sqlite(#[from] rusqlite::Error),
}

/// Alias for `Result<T, StoreError>`.
pub type StoreResult<T> = Result<T, StoreError>;
