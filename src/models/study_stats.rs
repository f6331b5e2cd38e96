//! Lifetime study statistics, accumulated across finished sessions.
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Snapshot of the most recently finished session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LastSession {
    pub date: DateTime<Utc>,
    pub correct: u32,
    pub incorrect: u32,
    /// Seconds.
    pub duration: u64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StudyStats {
    #[serde(default)]
    pub total_sessions: u32,
    #[serde(default)]
    pub total_correct: u32,
    #[serde(default)]
    pub total_incorrect: u32,
    /// Seconds.
    #[serde(default)]
    pub total_time: u64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_session: Option<LastSession>,
}

impl StudyStats {
    pub fn total_answers(&self) -> u32 {
        self.total_correct.saturating_add(self.total_incorrect)
    }
}
