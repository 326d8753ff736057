// Copyright 2025 Fernando Borretti
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! The scheduling engine: which cards are due, and how a review moves a
//! card's next due date.

use serde::Serialize;

use crate::types::card::Card;
use crate::types::date::Date;
use crate::types::deck::Deck;
use crate::types::ease::Ease;
use crate::types::quality::Quality;

/// The interval after a failed review, and after the first successful one.
const FIRST_INTERVAL: u32 = 1;

/// The interval after the second consecutive successful review.
const SECOND_INTERVAL: u32 = 6;

/// The minimum interval in days after any review.
const MIN_INTERVAL: u32 = 1;

/// A card's scheduling state.
#[derive(Clone, Copy, PartialEq, Debug, Serialize)]
pub struct Schedule {
    /// Consecutive successful reviews since the last failure.
    pub repetitions: u32,
    /// Days until the next review.
    pub interval: u32,
    pub ease: Ease,
    /// The date on which the card is next due.
    pub due: Date,
}

impl Schedule {
    /// The schedule of a card created on `today`.
    pub fn new(today: Date) -> Self {
        Self {
            repetitions: 0,
            interval: 0,
            ease: Ease::default(),
            due: today,
        }
    }
}

/// The cards in `deck` due on or before `today`, in stored order.
pub fn due_cards(deck: &Deck, today: Date) -> Vec<&Card> {
    deck.cards()
        .iter()
        .filter(|card| card.is_due(today))
        .collect()
}

/// Compute the schedule that follows a review of quality `quality` on `today`.
pub fn review(prior: &Schedule, quality: Quality, today: Date) -> Schedule {
    let (repetitions, interval) = if quality.is_pass() {
        let interval = match prior.repetitions {
            0 => FIRST_INTERVAL,
            1 => SECOND_INTERVAL,
            _ => grow(prior.interval, prior.ease),
        };
        (prior.repetitions.saturating_add(1), interval)
    } else {
        (0, FIRST_INTERVAL)
    };
    Schedule {
        repetitions,
        interval,
        ease: new_ease(prior.ease, quality),
        due: today.add_days(interval),
    }
}

/// Multiply the interval by the ease, rounding half up.
fn grow(interval: u32, ease: Ease) -> u32 {
    let next = (interval as f64 * ease.value()).round();
    // The `as` cast saturates at `u32::MAX`.
    (next as u32).max(MIN_INTERVAL)
}

/// The ease after a review: +0.1 for a perfect recall, with a quadratic
/// penalty as quality drops.
fn new_ease(ease: Ease, quality: Quality) -> Ease {
    let miss = (5 - quality.value()) as f64;
    let delta = 0.1 - miss * (0.08 + miss * 0.02);
    Ease::new(ease.value() + delta)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::date::ymd;
    use crate::types::ease::MIN_EASE;

    fn schedule(repetitions: u32, interval: u32, ease: f64, due: Date) -> Schedule {
        Schedule {
            repetitions,
            interval,
            ease: Ease::new(ease),
            due,
        }
    }

    fn q(value: i64) -> Quality {
        Quality::clamped(value)
    }

    #[test]
    fn test_fresh_card_perfect_recall() {
        let today = ymd(2024, 1, 1);
        let next = review(&Schedule::new(today), q(5), today);
        assert_eq!(next, schedule(1, 1, 2.6, ymd(2024, 1, 2)));
    }

    #[test]
    fn test_second_perfect_recall() {
        let first = review(&Schedule::new(ymd(2024, 1, 1)), q(5), ymd(2024, 1, 1));
        let second = review(&first, q(5), ymd(2024, 1, 2));
        assert_eq!(second, schedule(2, 6, 2.7, ymd(2024, 1, 8)));
    }

    #[test]
    fn test_third_recall_grows_by_ease() {
        let prior = schedule(2, 6, 2.7, ymd(2024, 1, 8));
        let next = review(&prior, q(4), ymd(2024, 1, 8));
        // 6 * 2.7 = 16.2
        assert_eq!(next.interval, 16);
        assert_eq!(next.repetitions, 3);
        assert_eq!(next.ease.value(), 2.7);
        assert_eq!(next.due, ymd(2024, 1, 24));
    }

    #[test]
    fn test_failure_resets() {
        let prior = schedule(2, 6, 2.7, ymd(2024, 1, 8));
        let next = review(&prior, q(1), ymd(2024, 1, 8));
        assert_eq!(next.repetitions, 0);
        assert_eq!(next.interval, 1);
        assert_eq!(next.ease.value(), 2.16);
        assert_eq!(next.due, ymd(2024, 1, 9));
    }

    #[test]
    fn test_failure_ignores_prior_growth() {
        let prior = schedule(12, 400, 3.1, ymd(2025, 6, 1));
        for value in 0..3 {
            let next = review(&prior, q(value), ymd(2025, 6, 3));
            assert_eq!(next.repetitions, 0);
            assert_eq!(next.interval, 1);
            assert_eq!(next.due, ymd(2025, 6, 4));
        }
    }

    #[test]
    fn test_ease_deltas() {
        let today = ymd(2024, 1, 1);
        let prior = schedule(0, 0, 2.5, today);
        let eases: Vec<f64> = Quality::all()
            .map(|quality| review(&prior, quality, today).ease.value())
            .collect();
        assert_eq!(eases, vec![1.7, 1.96, 2.18, 2.36, 2.5, 2.6]);
    }

    #[test]
    fn test_repeated_failures_floor_ease() {
        let mut current = Schedule::new(ymd(2024, 1, 1));
        let mut today = ymd(2024, 1, 1);
        for _ in 0..10 {
            current = review(&current, q(0), today);
            assert!(current.ease.value() >= MIN_EASE);
            today = current.due;
        }
        assert_eq!(current.ease.value(), MIN_EASE);
        assert_eq!(current.interval, 1);
    }

    #[test]
    fn test_quality_out_of_range_is_clamped() {
        let today = ymd(2024, 1, 1);
        let prior = schedule(2, 10, 2.0, today);
        assert_eq!(review(&prior, q(42), today), review(&prior, q(5), today));
        assert_eq!(review(&prior, q(-1), today), review(&prior, q(0), today));
    }

    #[test]
    fn test_interval_rounds_half_up() {
        let today = ymd(2024, 1, 1);
        // 5 * 2.5 = 12.5
        let next = review(&schedule(3, 5, 2.5, today), q(4), today);
        assert_eq!(next.interval, 13);
        // 3 * 1.5 = 4.5
        let next = review(&schedule(3, 3, 1.5, today), q(4), today);
        assert_eq!(next.interval, 5);
        // 7 * 1.3 = 9.1
        let next = review(&schedule(3, 7, 1.3, today), q(4), today);
        assert_eq!(next.interval, 9);
    }

    #[test]
    fn test_interval_floor() {
        let today = ymd(2024, 1, 1);
        // A zero prior interval with repetitions past the second step.
        let next = review(&schedule(2, 0, 2.5, today), q(5), today);
        assert_eq!(next.interval, 1);
        assert_eq!(next.due, ymd(2024, 1, 2));
    }

    #[test]
    fn test_review_invariants() {
        let today = ymd(2024, 3, 1);
        let priors = [
            Schedule::new(today),
            schedule(1, 1, 1.3, today),
            schedule(2, 6, 2.5, today),
            schedule(5, 90, 3.4, today),
            schedule(9, 0, 1.3, today),
        ];
        for prior in priors.iter() {
            for quality in Quality::all() {
                let next = review(prior, quality, today);
                assert!(next.ease.value() >= MIN_EASE);
                assert!(next.interval >= 1);
                assert_eq!(next.due, today.add_days(next.interval));
                if quality.is_pass() {
                    assert_eq!(next.repetitions, prior.repetitions + 1);
                    let expected = match prior.repetitions {
                        0 => 1,
                        1 => 6,
                        _ => ((prior.interval as f64 * prior.ease.value()).round() as u32).max(1),
                    };
                    assert_eq!(next.interval, expected);
                } else {
                    assert_eq!(next.repetitions, 0);
                    assert_eq!(next.interval, 1);
                }
            }
        }
    }

    #[test]
    fn test_due_cards() {
        let today = ymd(2024, 1, 10);
        let mut deck = Deck::new();
        let mut make = |front: &str, created: Date| {
            let card = Card::new(front, "back", created).unwrap();
            deck.push(card);
        };
        make("past", ymd(2024, 1, 1));
        make("future", ymd(2024, 1, 11));
        make("today", today);
        make("also future", ymd(2025, 1, 1));
        make("also past", ymd(2023, 5, 5));
        let fronts: Vec<&str> = due_cards(&deck, today)
            .into_iter()
            .map(|card| card.front())
            .collect();
        assert_eq!(fronts, vec!["past", "today", "also past"]);
    }

    #[test]
    fn test_due_cards_empty_deck() {
        assert!(due_cards(&Deck::new(), ymd(2024, 1, 1)).is_empty());
    }
}
