//! Collection-wide counts shown on the statistics screen.
use super::{Card, CardStatus};

#[derive(Debug, Clone, Default, PartialEq)]
pub struct CollectionOverview {
    pub total_cards: usize,
    pub known_cards: usize,
    pub learning_cards: usize,
    /// Mean of every card's success rate, 0 for an empty collection.
    pub average_success_rate: f64,
}

impl CollectionOverview {
    pub fn from_cards(cards: &[Card]) -> Self {
        if cards.is_empty() {
            return Self::default();
        }

        let known_cards = cards
            .iter()
            .filter(|c| c.status == CardStatus::Known)
            .count();
        let rate_sum: f64 = cards.iter().map(|c| c.success_rate).sum();

        Self {
            total_cards: cards.len(),
            known_cards,
            learning_cards: cards.len() - known_cards,
            average_success_rate: rate_sum / cards.len() as f64,
        }
    }
}
