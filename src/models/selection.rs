//! Study batch selection from the learning pool.

use super::Card;
use crate::error::KelimeError;
use rand::Rng;
use rand::seq::SliceRandom;
use serde::{Deserialize, Serialize};

/// Allowed study batch sizes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(try_from = "usize", into = "usize")]
pub enum BatchSize {
    #[default]
    Five,
    Ten,
}

impl BatchSize {
    pub fn count(self) -> usize {
        match self {
            BatchSize::Five => 5,
            BatchSize::Ten => 10,
        }
    }
}

impl TryFrom<usize> for BatchSize {
    type Error = KelimeError;

    fn try_from(value: usize) -> Result<Self, Self::Error> {
        match value {
            5 => Ok(BatchSize::Five),
            10 => Ok(BatchSize::Ten),
            other => Err(KelimeError::InvalidBatchSize(other)),
        }
    }
}

impl From<BatchSize> for usize {
    fn from(value: BatchSize) -> Self {
        value.count()
    }
}

/// Picks a study batch using the thread-local RNG.
///
/// Returns `None` when no card is in the learning pool.
pub fn select_batch(cards: &[Card], size: BatchSize) -> Option<Vec<Card>> {
    select_batch_with(cards, size, &mut rand::thread_rng())
}

/// Filters to learning cards, shuffles them uniformly and keeps the first
/// `min(size, pool)` as owned copies. Later repository changes do not reach the batch.
pub fn select_batch_with<R: Rng + ?Sized>(
    cards: &[Card],
    size: BatchSize,
    rng: &mut R,
) -> Option<Vec<Card>> {
    let mut pool: Vec<Card> = cards.iter().filter(|c| c.is_learning()).cloned().collect();
    if pool.is_empty() {
        return None;
    }

    pool.shuffle(rng);
    pool.truncate(size.count());
    Some(pool)
}
