pub mod clock;
pub mod config;
pub mod engine;
pub mod error;
pub mod models;
pub mod repository;
pub mod storage;

#[cfg(test)]
mod testing;

pub use config::KelimeConfig;
pub use engine::{AnswerOutcome, SessionStart, StudyEngine};
pub use error::{KelimeError, Result};
pub use models::{BatchSize, Card, CardId, CardStatus, StudySession, StudyStats};
pub use repository::CardRepository;
