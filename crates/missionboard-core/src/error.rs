//! Error types for Mission Board

use thiserror::Error;

use crate::validation::ValidationErrors;

/// Main error type for Mission Board operations
#[derive(Error, Debug)]
pub enum MissionError {
    /// Submitted form data failed validation; nothing was applied
    #[error("Validation failed: {0}")]
    Invalid(ValidationErrors),

    /// Error during key-value storage operations
    #[error("Storage error: {0}")]
    Storage(String),

    /// Database creation/opening error
    #[error("Database error: {0}")]
    Database(#[from] redb::DatabaseError),

    /// Transaction error
    #[error("Transaction error: {0}")]
    Transaction(#[from] redb::TransactionError),

    /// Table error
    #[error("Table error: {0}")]
    Table(#[from] redb::TableError),

    /// Storage operation error
    #[error("Storage operation error: {0}")]
    StorageOp(#[from] redb::StorageError),

    /// Commit error
    #[error("Commit error: {0}")]
    Commit(#[from] redb::CommitError),

    /// Error during serialization/deserialization
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// General I/O error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<serde_json::Error> for MissionError {
    fn from(err: serde_json::Error) -> Self {
        MissionError::Serialization(err.to_string())
    }
}

/// Result type alias using MissionError
pub type MissionResult<T> = Result<T, MissionError>;
