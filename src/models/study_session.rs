//! Study session state: a fixed batch of cards answered one at a time.
//! Handles progress through the batch, running counters and the session clock.

use super::{BatchSize, Card, SessionSummary, SessionTally};
use crate::clock::SessionClock;
use chrono::{DateTime, Utc};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionPhase {
    /// Cards left to answer.
    Active,
    /// Every card answered; lifetime stats not yet written.
    AwaitingFinalize,
    /// Folded into lifetime stats.
    Finished,
}

/// A single pass through a shuffled batch of learning cards.
/// The batch is captured at start and its order never changes.
#[derive(Debug)]
pub struct StudySession {
    batch: Vec<Card>,
    batch_size: BatchSize,
    position: usize,
    tally: SessionTally,
    phase: SessionPhase,
    started_at: DateTime<Utc>,
    clock: Option<SessionClock>,
}

impl StudySession {
    /// Creates a session over the given batch with no clock attached.
    pub fn new(batch: Vec<Card>, batch_size: BatchSize) -> Self {
        Self {
            batch,
            batch_size,
            position: 0,
            tally: SessionTally::default(),
            phase: SessionPhase::Active,
            started_at: Utc::now(),
            clock: None,
        }
    }

    pub fn with_clock(mut self, clock: SessionClock) -> Self {
        self.clock = Some(clock);
        self
    }

    pub fn current_card(&self) -> Option<&Card> {
        self.batch.get(self.position)
    }

    pub fn cards(&self) -> &[Card] {
        &self.batch
    }

    pub fn position(&self) -> usize {
        self.position
    }

    pub fn len(&self) -> usize {
        self.batch.len()
    }

    pub fn is_empty(&self) -> bool {
        self.batch.is_empty()
    }

    pub fn batch_size(&self) -> BatchSize {
        self.batch_size
    }

    pub fn started_at(&self) -> DateTime<Utc> {
        self.started_at
    }

    pub fn phase(&self) -> SessionPhase {
        self.phase
    }

    pub fn tally(&self) -> SessionTally {
        self.tally
    }

    /// True once every card in the batch has been answered.
    pub fn is_complete(&self) -> bool {
        self.position >= self.batch.len()
    }

    pub fn has_running_clock(&self) -> bool {
        self.clock.as_ref().is_some_and(SessionClock::is_running)
    }

    /// Folds pending clock ticks into the tally and returns the elapsed seconds.
    pub fn sync_clock(&mut self) -> u64 {
        if let Some(clock) = self.clock.as_mut() {
            let ticks = clock.drain();
            for _ in 0..ticks {
                self.tally = self.tally.tick();
            }
        }
        self.tally.duration
    }

    /// Takes the final reading and cancels the clock.
    pub fn stop_clock(&mut self) {
        self.sync_clock();
        if let Some(mut clock) = self.clock.take() {
            clock.cancel();
        }
    }

    /// "3 / 5" style position, 1-based while cards remain.
    pub fn progress_message(&self) -> String {
        let shown = (self.position + 1).min(self.batch.len());
        format!("{} / {}", shown, self.batch.len())
    }

    pub fn summary(&self) -> SessionSummary {
        SessionSummary::new(&self.tally, self.batch.len())
    }

    /// Records the answer for the current card and moves to the next one.
    /// `scored` replaces the session's copy of the answered card.
    pub(crate) fn record_answer(&mut self, scored: Card, correct: bool) {
        if let Some(slot) = self.batch.get_mut(self.position) {
            *slot = scored;
        }
        self.tally = self.tally.record_answer(correct);
        self.position += 1;

        if self.is_complete() {
            self.stop_clock();
            self.phase = SessionPhase::AwaitingFinalize;
        }
    }

    pub(crate) fn mark_finalized(&mut self) {
        self.phase = SessionPhase::Finished;
    }
}
