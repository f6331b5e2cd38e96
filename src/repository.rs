//! Card repository: the card collection and lifetime stats, persisted through
//! the key-value store.
//!
//! Every mutation builds the new collection, writes the whole document, and only
//! then replaces the in-memory copy. A failed write leaves memory as it was.
//! Mutations take `&mut self`, so at most one write is in flight at a time.

use std::sync::Arc;

use crate::error::{KelimeError, Result};
use crate::models::{Card, CardId, CardStatus, CollectionOverview, StudyStats};
use crate::storage::documents::{load_document, save_document};
use crate::storage::{KeyValueStore, migration};

pub const DEFAULT_KEY_PREFIX: &str = "@kelime_karti";

/// Storage keys of the persisted documents.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocumentKeys {
    pub cards: String,
    pub stats: String,
    pub version: String,
}

impl DocumentKeys {
    pub fn with_prefix(prefix: &str) -> Self {
        Self {
            cards: format!("{prefix}_cards"),
            stats: format!("{prefix}_cards_stats"),
            version: format!("{prefix}_version"),
        }
    }
}

impl Default for DocumentKeys {
    fn default() -> Self {
        Self::with_prefix(DEFAULT_KEY_PREFIX)
    }
}

pub struct CardRepository {
    store: Arc<dyn KeyValueStore>,
    keys: DocumentKeys,
    cards: Vec<Card>,
    stats: StudyStats,
}

impl CardRepository {
    /// Runs the schema migration, then loads both documents.
    ///
    /// Missing or malformed documents load as empty defaults; a failing store is an error.
    pub async fn load(store: Arc<dyn KeyValueStore>, keys: DocumentKeys) -> Result<Self> {
        if let Err(e) = migration::migrate_if_needed(store.as_ref(), &keys.version).await {
            log::warn!("Error during migration: {}", e);
        }

        let cards: Vec<Card> = load_document(store.as_ref(), &keys.cards).await?;
        let stats: StudyStats = load_document(store.as_ref(), &keys.stats).await?;
        log::info!(
            "Loaded {} cards, {} finished sessions",
            cards.len(),
            stats.total_sessions
        );

        Ok(Self {
            store,
            keys,
            cards,
            stats,
        })
    }

    pub fn keys(&self) -> &DocumentKeys {
        &self.keys
    }

    /// All cards in insertion order.
    pub fn list(&self) -> &[Card] {
        &self.cards
    }

    pub fn get(&self, id: &CardId) -> Option<&Card> {
        self.cards.iter().find(|c| &c.id == id)
    }

    pub fn stats(&self) -> &StudyStats {
        &self.stats
    }

    /// Cards with the given status whose front or back contains `query`.
    pub fn search(&self, query: &str, status: CardStatus) -> Vec<&Card> {
        let query = query.trim();
        self.cards
            .iter()
            .filter(|c| c.status == status && c.matches(query))
            .collect()
    }

    pub fn overview(&self) -> CollectionOverview {
        CollectionOverview::from_cards(&self.cards)
    }

    /// Creates a learning card from trimmed text and appends it.
    pub async fn add(&mut self, front: &str, back: &str) -> Result<Card> {
        let (front, back) = (front.trim(), back.trim());
        if front.is_empty() || back.is_empty() {
            return Err(KelimeError::InvalidCard(
                "front and back must not be empty".to_string(),
            ));
        }

        let card = Card::new(front, back);
        let mut cards = self.cards.clone();
        cards.push(card.clone());

        self.persist_cards(cards).await?;
        log::debug!("Added card {}", card.id);
        Ok(card)
    }

    /// Replaces the card with the same id. Fails with `NotFound` without touching storage.
    pub async fn update(&mut self, card: Card) -> Result<()> {
        let Some(index) = self.cards.iter().position(|c| c.id == card.id) else {
            return Err(KelimeError::NotFound(card.id));
        };

        let mut cards = self.cards.clone();
        cards[index] = card;
        self.persist_cards(cards).await
    }

    /// Removes the card if present. An unknown id is a no-op.
    pub async fn delete(&mut self, id: &CardId) -> Result<()> {
        if self.get(id).is_none() {
            log::debug!("Delete of unknown card {} ignored", id);
            return Ok(());
        }

        let cards = self.cards.iter().filter(|c| &c.id != id).cloned().collect();
        self.persist_cards(cards).await
    }

    /// Writes new lifetime stats, replacing the in-memory copy on success.
    pub async fn save_stats(&mut self, stats: StudyStats) -> Result<()> {
        if let Err(e) = save_document(self.store.as_ref(), &self.keys.stats, &stats).await {
            log::warn!("Error updating stats: {}", e);
            return Err(e.into());
        }
        self.stats = stats;
        Ok(())
    }

    async fn persist_cards(&mut self, cards: Vec<Card>) -> Result<()> {
        if let Err(e) = save_document(self.store.as_ref(), &self.keys.cards, &cards).await {
            log::warn!("Error saving cards: {}", e);
            return Err(e.into());
        }
        self.cards = cards;
        Ok(())
    }
}
