//! Running counters for one study session and their fold into lifetime stats.

use super::{LastSession, StudyStats};
use chrono::{DateTime, Utc};

/// Answers and elapsed seconds recorded during a session.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SessionTally {
    pub correct_count: u32,
    pub incorrect_count: u32,
    /// Seconds.
    pub duration: u64,
}

impl SessionTally {
    pub fn record_answer(self, correct: bool) -> Self {
        if correct {
            Self {
                correct_count: self.correct_count.saturating_add(1),
                ..self
            }
        } else {
            Self {
                incorrect_count: self.incorrect_count.saturating_add(1),
                ..self
            }
        }
    }

    /// One elapsed second.
    pub fn tick(self) -> Self {
        Self {
            duration: self.duration.saturating_add(1),
            ..self
        }
    }

    pub fn answered(&self) -> u32 {
        self.correct_count.saturating_add(self.incorrect_count)
    }

    /// Folds this session into the lifetime statistics.
    pub fn finalize(&self, stats: &StudyStats, now: DateTime<Utc>) -> StudyStats {
        StudyStats {
            total_sessions: stats.total_sessions.saturating_add(1),
            total_correct: stats.total_correct.saturating_add(self.correct_count),
            total_incorrect: stats.total_incorrect.saturating_add(self.incorrect_count),
            total_time: stats.total_time.saturating_add(self.duration),
            last_session: Some(LastSession {
                date: now,
                correct: self.correct_count,
                incorrect: self.incorrect_count,
                duration: self.duration,
            }),
        }
    }
}

/// Result screen figures for a finished session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionSummary {
    pub correct: u32,
    pub incorrect: u32,
    pub card_count: usize,
    pub duration: u64,
    /// Rounded percentage of the batch answered correctly.
    pub success_percent: u32,
    pub passed: bool,
}

impl SessionSummary {
    pub fn new(tally: &SessionTally, card_count: usize) -> Self {
        let ratio = if card_count == 0 {
            0.0
        } else {
            f64::from(tally.correct_count) / card_count as f64
        };

        Self {
            correct: tally.correct_count,
            incorrect: tally.incorrect_count,
            card_count,
            duration: tally.duration,
            success_percent: (ratio * 100.0).round() as u32,
            passed: ratio >= super::scoring::KNOWN_THRESHOLD,
        }
    }

    pub fn formatted_duration(&self) -> String {
        format_duration(self.duration)
    }
}

/// Renders seconds as `m:ss`.
pub fn format_duration(seconds: u64) -> String {
    format!("{}:{:02}", seconds / 60, seconds % 60)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_record_answer() {
        let tally = SessionTally::default()
            .record_answer(true)
            .record_answer(false)
            .record_answer(true);
        assert_eq!(tally.correct_count, 2);
        assert_eq!(tally.incorrect_count, 1);
        assert_eq!(tally.answered(), 3);
        assert_eq!(tally.duration, 0);
    }

    #[test]
    fn test_tick() {
        let tally = (0..47).fold(SessionTally::default(), |t, _| t.tick());
        assert_eq!(tally.duration, 47);
        assert_eq!(tally.answered(), 0);
    }

    #[test]
    fn test_finalize_adds_session() {
        let tally = SessionTally {
            correct_count: 3,
            incorrect_count: 2,
            duration: 47,
        };
        let lifetime = StudyStats {
            total_sessions: 10,
            total_correct: 50,
            total_incorrect: 20,
            total_time: 600,
            last_session: None,
        };
        let now = Utc.with_ymd_and_hms(2024, 7, 1, 9, 30, 0).unwrap();

        let next = tally.finalize(&lifetime, now);
        assert_eq!(
            next,
            StudyStats {
                total_sessions: 11,
                total_correct: 53,
                total_incorrect: 22,
                total_time: 647,
                last_session: Some(LastSession {
                    date: now,
                    correct: 3,
                    incorrect: 2,
                    duration: 47,
                }),
            }
        );
    }

    #[test]
    fn test_counters_saturate() {
        let full = SessionTally {
            correct_count: u32::MAX,
            incorrect_count: u32::MAX,
            duration: u64::MAX,
        };
        assert_eq!(full.record_answer(true).record_answer(false).tick(), full);
        assert_eq!(full.answered(), u32::MAX);

        let lifetime = StudyStats {
            total_sessions: u32::MAX,
            total_correct: u32::MAX - 1,
            total_incorrect: 5,
            total_time: u64::MAX,
            last_session: None,
        };
        let tally = SessionTally {
            correct_count: 3,
            incorrect_count: 2,
            duration: 47,
        };
        let next = tally.finalize(&lifetime, Utc::now());
        assert_eq!(next.total_sessions, u32::MAX);
        assert_eq!(next.total_correct, u32::MAX);
        assert_eq!(next.total_incorrect, 7);
        assert_eq!(next.total_time, u64::MAX);
    }

    #[test]
    fn test_summary() {
        let tally = SessionTally {
            correct_count: 4,
            incorrect_count: 1,
            duration: 125,
        };
        let summary = SessionSummary::new(&tally, 5);
        assert_eq!(summary.success_percent, 80);
        assert!(summary.passed);
        assert_eq!(summary.formatted_duration(), "2:05");

        let summary = SessionSummary::new(&SessionTally::default().record_answer(true), 3);
        assert_eq!(summary.success_percent, 33);
        assert!(!summary.passed);
    }

    #[test]
    fn test_format_duration() {
        assert_eq!(format_duration(0), "0:00");
        assert_eq!(format_duration(47), "0:47");
        assert_eq!(format_duration(600), "10:00");
    }
}
