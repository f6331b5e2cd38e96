//! Study engine: the operations the presentation layer calls.
//!
//! Answer flow: score the current card, persist it, then advance the session.
//! The session fixes which cards are asked and in what order; scoring always
//! starts from the repository's copy, so overlapping sessions and edits made
//! mid-session are not overwritten. When the last card's write has been
//! accepted, the session is folded into the lifetime stats. Cards and stats are separate documents and are not written
//! atomically; an interruption between the two leaves an updated card with no
//! stats entry for that session.

use std::sync::Arc;

use chrono::Utc;

use crate::clock::SessionClock;
use crate::config::KelimeConfig;
use crate::error::{KelimeError, Result};
use crate::models::scoring;
use crate::models::selection::select_batch;
use crate::models::{
    BatchSize, Card, CardId, CardStatus, CollectionOverview, SessionPhase, StudySession,
    StudyStats,
};
use crate::repository::CardRepository;
use crate::storage::KeyValueStore;

/// Outcome of asking for a new session.
#[derive(Debug)]
pub enum SessionStart {
    Started(StudySession),
    /// The learning pool is empty.
    NoCardsAvailable,
}

#[derive(Debug, Clone, PartialEq)]
pub struct AnswerOutcome {
    pub updated_card: Card,
    pub is_session_complete: bool,
    /// The session is complete but its stats write failed; retry with
    /// [`StudyEngine::finalize_session`].
    pub is_finalize_pending: bool,
}

pub struct StudyEngine {
    repository: CardRepository,
    default_batch_size: BatchSize,
}

impl StudyEngine {
    pub async fn open(store: Arc<dyn KeyValueStore>, config: &KelimeConfig) -> Result<Self> {
        let repository = CardRepository::load(store, config.storage.document_keys()).await?;
        Ok(Self::new(repository, config.study.default_batch_size))
    }

    pub fn new(repository: CardRepository, default_batch_size: BatchSize) -> Self {
        Self {
            repository,
            default_batch_size,
        }
    }

    pub fn repository(&self) -> &CardRepository {
        &self.repository
    }

    // ==================== Cards ====================

    pub fn list_cards(&self) -> &[Card] {
        self.repository.list()
    }

    pub async fn add_card(&mut self, front: &str, back: &str) -> Result<Card> {
        self.repository.add(front, back).await
    }

    pub async fn update_card(&mut self, card: Card) -> Result<()> {
        self.repository.update(card).await
    }

    pub async fn delete_card(&mut self, id: &CardId) -> Result<()> {
        self.repository.delete(id).await
    }

    pub fn search_cards(&self, query: &str, status: CardStatus) -> Vec<&Card> {
        self.repository.search(query, status)
    }

    pub fn overview(&self) -> CollectionOverview {
        self.repository.overview()
    }

    pub fn study_stats(&self) -> &StudyStats {
        self.repository.stats()
    }

    // ==================== Sessions ====================

    /// Starts a timed session over a shuffled batch of learning cards.
    /// Must be called from within a tokio runtime (the session clock is a task).
    pub fn start_session(&self, batch_size: BatchSize) -> SessionStart {
        let Some(batch) = select_batch(self.repository.list(), batch_size) else {
            log::info!("No learning cards available for a session");
            return SessionStart::NoCardsAvailable;
        };

        log::info!(
            "Starting session with {} of {} requested cards",
            batch.len(),
            batch_size.count()
        );
        SessionStart::Started(StudySession::new(batch, batch_size).with_clock(SessionClock::start()))
    }

    pub fn start_default_session(&self) -> SessionStart {
        self.start_session(self.default_batch_size)
    }

    /// Scores and persists the current card, then advances the session.
    ///
    /// Fails with `NotFound` if the card was deleted since the session started.
    /// If the card write fails the session does not move, so the answer can be
    /// retried.
    ///
    /// A failed stats write after the last answer is not an error: the card is
    /// already saved, so the outcome is returned with `is_finalize_pending` set
    /// and the session left awaiting finalize. Call
    /// [`StudyEngine::finalize_session`] to retry it.
    pub async fn answer(&mut self, session: &mut StudySession, correct: bool) -> Result<AnswerOutcome> {
        let Some(current) = session.current_card() else {
            return Err(KelimeError::SessionComplete);
        };
        let stored = self
            .repository
            .get(&current.id)
            .ok_or_else(|| KelimeError::NotFound(current.id.clone()))?;

        let updated_card = scoring::score(stored, correct);
        self.repository.update(updated_card.clone()).await?;
        session.record_answer(updated_card.clone(), correct);

        if session.is_complete() {
            if let Err(e) = self.finalize_session(session).await {
                log::warn!("Session complete but stats not saved, finalize pending: {}", e);
            }
        }

        Ok(AnswerOutcome {
            updated_card,
            is_session_complete: session.is_complete(),
            is_finalize_pending: session.phase() == SessionPhase::AwaitingFinalize,
        })
    }

    /// Folds a completed session into the lifetime stats, once.
    pub async fn finalize_session(&mut self, session: &mut StudySession) -> Result<()> {
        match session.phase() {
            SessionPhase::Active => return Err(KelimeError::SessionNotComplete),
            SessionPhase::Finished => return Ok(()),
            SessionPhase::AwaitingFinalize => {}
        }

        let stats = session.tally().finalize(self.repository.stats(), Utc::now());
        self.repository.save_stats(stats).await?;
        session.mark_finalized();

        let summary = session.summary();
        log::info!(
            "Session finished: {} correct, {} incorrect in {}",
            summary.correct,
            summary.incorrect,
            summary.formatted_duration()
        );
        Ok(())
    }

    /// Ends a session early. Answers already given stay on their cards; the
    /// session itself is not added to lifetime stats.
    pub fn abandon_session(&self, mut session: StudySession) {
        session.stop_clock();
        if session.phase() != SessionPhase::Finished {
            log::info!(
                "Session abandoned after {} of {} cards",
                session.tally().answered(),
                session.len()
            );
        }
    }
}
