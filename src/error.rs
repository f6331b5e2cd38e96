//! Error types surfaced by the study engine.

use thiserror::Error;

use crate::models::CardId;
use crate::storage::StoreError;

#[derive(Debug, Error)]
pub enum KelimeError {
    /// The storage collaborator failed; the operation was not applied.
    #[error("Storage error: {0}")]
    Storage(#[from] StoreError),

    #[error("Card not found: {0}")]
    NotFound(CardId),

    /// Front or back text was empty after trimming.
    #[error("Invalid card: {0}")]
    InvalidCard(String),

    #[error("Unsupported batch size {0} (allowed: 5, 10)")]
    InvalidBatchSize(usize),

    #[error("Study session is already complete")]
    SessionComplete,

    #[error("Study session has cards left to answer")]
    SessionNotComplete,

    #[error("Configuration error: {0}")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, KelimeError>;
