//! Card is a pair <front, back> (English / Turkish) with its learning progress.
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Opaque card identifier, stable for the card's lifetime.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CardId(String);

impl CardId {
    pub fn generate() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for CardId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl From<String> for CardId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl fmt::Display for CardId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CardStatus {
    #[default]
    Learning,
    Known,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Card {
    pub id: CardId,
    #[serde(alias = "english")]
    pub front: String,
    #[serde(alias = "turkish")]
    pub back: String,
    #[serde(default)]
    pub status: CardStatus,
    pub created_at: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_studied: Option<DateTime<Utc>>,
    #[serde(default)]
    pub study_count: u32,
    #[serde(default)]
    pub success_rate: f64,
}

impl Card {
    /// A fresh card always starts in the learning pool with no history.
    pub fn new(front: impl Into<String>, back: impl Into<String>) -> Self {
        Self {
            id: CardId::generate(),
            front: front.into(),
            back: back.into(),
            status: CardStatus::Learning,
            created_at: Utc::now(),
            last_studied: None,
            study_count: 0,
            success_rate: 0.0,
        }
    }

    pub fn is_learning(&self) -> bool {
        self.status == CardStatus::Learning
    }

    /// Number of past correct answers implied by the stored rate.
    pub fn correct_count(&self) -> u32 {
        let rate = self.success_rate.clamp(0.0, 1.0);
        let correct = (rate * f64::from(self.study_count)).round() as u32;
        correct.min(self.study_count)
    }

    /// Case-insensitive substring match against either side of the card.
    pub fn matches(&self, query: &str) -> bool {
        let needle = query.to_lowercase();
        self.front.to_lowercase().contains(&needle) || self.back.to_lowercase().contains(&needle)
    }
}
