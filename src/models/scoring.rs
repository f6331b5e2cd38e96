//! Answer scoring: running success rate and learning-status promotion.
//!
//! Each answer moves a card forward by one study:
//! - The prior number of correct answers is recovered from the stored rate
//!   (`round(success_rate * study_count)`), since answer history is not kept
//! - The new rate is `correct_answers / study_count` after counting this answer
//! - A card becomes `Known` at a rate of at least 0.8 over two or more studies,
//!   or when its very first answer is correct; otherwise it stays `Learning`
//!
//! Known cards are never selected for study again, so in practice promotion is
//! one-way unless a card is reset from outside the engine.

use super::{Card, CardStatus};
use chrono::{DateTime, Utc};

/// Minimum success rate for a card with at least two studies to count as known.
pub const KNOWN_THRESHOLD: f64 = 0.8;

/// Minimum number of studies before the rate threshold applies.
pub const MIN_STUDIES_FOR_THRESHOLD: u32 = 2;

/// Scores an answer at the current time. See [`score_at`].
pub fn score(card: &Card, correct: bool) -> Card {
    score_at(card, correct, Utc::now())
}

/// Returns the card as it stands after one more answer.
/// The input card is untouched; persisting the result is the caller's job.
pub fn score_at(card: &Card, correct: bool, now: DateTime<Utc>) -> Card {
    let new_study_count = card.study_count.saturating_add(1);
    let new_correct = card.correct_count().saturating_add(u32::from(correct));
    let new_success_rate = f64::from(new_correct) / f64::from(new_study_count);

    Card {
        status: next_status(new_success_rate, new_study_count, correct),
        study_count: new_study_count,
        success_rate: new_success_rate,
        last_studied: Some(now),
        ..card.clone()
    }
}

fn next_status(success_rate: f64, study_count: u32, correct: bool) -> CardStatus {
    let first_try = study_count == 1 && correct;
    let mastered = success_rate >= KNOWN_THRESHOLD && study_count >= MIN_STUDIES_FOR_THRESHOLD;

    if first_try || mastered {
        CardStatus::Known
    } else {
        CardStatus::Learning
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn card_with(study_count: u32, success_rate: f64) -> Card {
        let mut card = Card::new("apple", "elma");
        card.study_count = study_count;
        card.success_rate = success_rate;
        card
    }

    #[test]
    fn test_first_answer_correct_is_known() {
        let next = score(&card_with(0, 0.0), true);
        assert_eq!(next.study_count, 1);
        assert_eq!(next.success_rate, 1.0);
        assert_eq!(next.status, CardStatus::Known);
    }

    #[test]
    fn test_first_answer_wrong_stays_learning() {
        let next = score(&card_with(0, 0.0), false);
        assert_eq!(next.study_count, 1);
        assert_eq!(next.success_rate, 0.0);
        assert_eq!(next.status, CardStatus::Learning);
    }

    #[test]
    fn test_second_answer_below_threshold() {
        let next = score(&card_with(1, 0.0), true);
        assert_eq!(next.study_count, 2);
        assert_eq!(next.success_rate, 0.5);
        assert_eq!(next.status, CardStatus::Learning);
    }

    #[test]
    fn test_reaching_threshold_promotes() {
        let next = score(&card_with(4, 0.75), true);
        assert_eq!(next.study_count, 5);
        assert_eq!(next.success_rate, 0.8);
        assert_eq!(next.status, CardStatus::Known);
    }

    #[test]
    fn test_wrong_answer_demotes() {
        let mut card = card_with(4, 1.0);
        card.status = CardStatus::Known;

        let next = score(&card, false);
        assert_eq!(next.success_rate, 0.8);
        assert_eq!(next.status, CardStatus::Known);

        let next = score(&next, false);
        assert_eq!(next.study_count, 6);
        assert!((next.success_rate - 4.0 / 6.0).abs() < 1e-9);
        assert_eq!(next.status, CardStatus::Learning);
    }

    #[test]
    fn test_sets_last_studied_and_keeps_identity() {
        let card = card_with(2, 0.5);
        let now = Utc.with_ymd_and_hms(2024, 6, 1, 12, 0, 0).unwrap();

        let next = score_at(&card, true, now);
        assert_eq!(next.last_studied, Some(now));
        assert_eq!(next.id, card.id);
        assert_eq!(next.front, card.front);
        assert_eq!(next.created_at, card.created_at);
        assert_eq!(card.study_count, 2);
    }

    #[test]
    fn test_rate_stays_in_bounds_and_counts_are_whole() {
        for study_count in 0..12u32 {
            for correct_before in 0..=study_count {
                let rate = if study_count == 0 {
                    0.0
                } else {
                    f64::from(correct_before) / f64::from(study_count)
                };
                let card = card_with(study_count, rate);

                for correct in [true, false] {
                    let next = score(&card, correct);
                    assert_eq!(next.study_count, study_count + 1);
                    assert!((0.0..=1.0).contains(&next.success_rate));

                    let implied = next.success_rate * f64::from(next.study_count);
                    let expected = correct_before + u32::from(correct);
                    assert!((implied - f64::from(expected)).abs() < 1e-9);
                }
            }
        }
    }

    #[test]
    fn test_study_count_saturates() {
        let next = score(&card_with(u32::MAX, 1.0), true);
        assert_eq!(next.study_count, u32::MAX);
        assert_eq!(next.success_rate, 1.0);
        assert_eq!(next.status, CardStatus::Known);

        let next = score(&card_with(u32::MAX, 0.0), false);
        assert_eq!(next.study_count, u32::MAX);
        assert_eq!(next.success_rate, 0.0);
    }

    #[test]
    fn test_out_of_range_rate_is_clamped() {
        let next = score(&card_with(2, 3.0), true);
        assert_eq!(next.study_count, 3);
        assert_eq!(next.success_rate, 1.0);
    }
}
