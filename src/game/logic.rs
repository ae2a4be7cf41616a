use serde::{Deserialize, Serialize};
use std::fmt;

use super::cards::Card;

pub const STARTING_MONEY: i64 = 10_000;
pub const ROUND_STAKE: i64 = 500;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Guess {
    Higher,
    Lower,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Outcome {
    Correct,
    Incorrect,
}

impl Outcome {
    /// Balance change for this outcome
    pub fn delta(&self) -> i64 {
        match self {
            Outcome::Correct => ROUND_STAKE,
            Outcome::Incorrect => -ROUND_STAKE,
        }
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Outcome::Correct => write!(f, "Correct!"),
            Outcome::Incorrect => write!(f, "Incorrect!"),
        }
    }
}

/// Compares ranks only. Equal ranks lose whichever way the player guessed.
pub fn resolve_round(current: &Card, next: &Card, guess: Guess) -> Outcome {
    let correct = match guess {
        Guess::Higher => next.rank > current.rank,
        Guess::Lower => next.rank < current.rank,
    };

    if correct {
        Outcome::Correct
    } else {
        Outcome::Incorrect
    }
}

/// Applies an outcome to a balance. There is no floor, balances can go negative.
/// Saturates at the ends of `i64` so a hand-edited stored balance cannot overflow.
pub fn apply_outcome(balance: i64, outcome: Outcome) -> i64 {
    balance.saturating_add(outcome.delta())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::cards::{Rank, Suit};
    use rstest::rstest;

    fn card(rank: Rank, suit: Suit) -> Card {
        Card::new(rank, suit)
    }

    #[rstest]
    #[case(Rank::Five, Rank::Nine, Guess::Higher, Outcome::Correct)]
    #[case(Rank::Nine, Rank::Five, Guess::Higher, Outcome::Incorrect)]
    #[case(Rank::Nine, Rank::Five, Guess::Lower, Outcome::Correct)]
    #[case(Rank::Five, Rank::Nine, Guess::Lower, Outcome::Incorrect)]
    #[case(Rank::Ace, Rank::King, Guess::Higher, Outcome::Correct)]
    #[case(Rank::King, Rank::Ace, Guess::Lower, Outcome::Correct)]
    fn test_resolve_round(
        #[case] current: Rank,
        #[case] next: Rank,
        #[case] guess: Guess,
        #[case] expected: Outcome,
    ) {
        let outcome = resolve_round(&card(current, Suit::Hearts), &card(next, Suit::Spades), guess);
        assert_eq!(outcome, expected);
    }

    #[rstest]
    #[case(Guess::Higher)]
    #[case(Guess::Lower)]
    fn test_equal_ranks_are_incorrect(#[case] guess: Guess) {
        // Suit does not break the tie
        let current = card(Rank::Seven, Suit::Clubs);
        let next = card(Rank::Seven, Suit::Spades);
        assert_eq!(resolve_round(&current, &next, guess), Outcome::Incorrect);
    }

    #[test]
    fn test_apply_outcome() {
        assert_eq!(apply_outcome(STARTING_MONEY, Outcome::Correct), 10_500);
        assert_eq!(apply_outcome(STARTING_MONEY, Outcome::Incorrect), 9_500);
    }

    #[test]
    fn test_balance_can_go_negative() {
        assert_eq!(apply_outcome(0, Outcome::Incorrect), -500);
        assert_eq!(apply_outcome(-500, Outcome::Incorrect), -1_000);
    }

    #[test]
    fn test_apply_outcome_saturates() {
        assert_eq!(apply_outcome(i64::MAX, Outcome::Correct), i64::MAX);
        assert_eq!(apply_outcome(i64::MIN, Outcome::Incorrect), i64::MIN);
        assert_eq!(apply_outcome(i64::MAX, Outcome::Incorrect), i64::MAX - 500);
    }

    #[test]
    fn test_outcome_display() {
        assert_eq!(Outcome::Correct.to_string(), "Correct!");
        assert_eq!(Outcome::Incorrect.to_string(), "Incorrect!");
    }
}
