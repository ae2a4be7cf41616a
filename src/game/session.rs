// A GameSession is one player's run through a shuffled deck. It holds the
// face-up current card, the face-down next card and the running balance.
//
// A round is driven by explicit transitions instead of animation callbacks:
//   Idle --guess--> Flipping --complete_flip--> Resolved --advance--> Idle
// complete_flip lands in NoCardsLeft instead when there is no next card.
// NoCardsLeft is terminal until the deck is reshuffled or a new game starts.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::cards::Card;
use super::deck::Deck;
use super::errors::GameError;
use super::logic::{apply_outcome, resolve_round, Guess, Outcome};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RoundPhase {
    Idle,
    Flipping { guess: Guess },
    Resolved,
    NoCardsLeft,
}

impl fmt::Display for RoundPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RoundPhase::Idle => write!(f, "idle"),
            RoundPhase::Flipping { .. } => write!(f, "flipping"),
            RoundPhase::Resolved => write!(f, "resolved"),
            RoundPhase::NoCardsLeft => write!(f, "out of cards"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundResult {
    pub guess: Guess,
    pub outcome: Outcome,
    pub previous: Card,
    pub revealed: Card,
    pub balance: i64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlipOutcome {
    Resolved(RoundResult),
    NoCardsLeft,
}

#[derive(Debug, Clone)]
pub struct GameSession {
    player_name: String,
    deck: Deck,
    current_card: Option<Card>,
    next_card: Option<Card>,
    balance: i64,
    phase: RoundPhase,
    last_result: Option<RoundResult>,
}

impl GameSession {
    /// Starts a session with the given balance, dealing the current and next card
    pub fn start(player_name: impl Into<String>, balance: i64, deck: Deck) -> Self {
        let mut session = Self {
            player_name: player_name.into(),
            deck,
            current_card: None,
            next_card: None,
            balance,
            phase: RoundPhase::Idle,
            last_result: None,
        };
        session.deal();
        session
    }

    /// Replaces the deck and redeals both cards. The balance is kept.
    pub fn reshuffle(&mut self) {
        self.reshuffle_with(Deck::new_shuffled());
    }

    pub fn reshuffle_with(&mut self, deck: Deck) {
        self.deck = deck;
        self.deal();
    }

    fn deal(&mut self) {
        self.current_card = self.deck.draw().ok();
        self.next_card = self.deck.draw().ok();
        self.phase = RoundPhase::Idle;
        self.last_result = None;
    }

    /// Idle -> Flipping
    pub fn guess(&mut self, guess: Guess) -> Result<(), GameError> {
        if self.phase != RoundPhase::Idle {
            return Err(GameError::InvalidTransition {
                from: self.phase,
                action: "guess",
            });
        }
        if self.current_card.is_none() {
            return Err(GameError::NoCurrentCard);
        }

        self.phase = RoundPhase::Flipping { guess };
        Ok(())
    }

    /// Flipping -> Resolved, or Flipping -> NoCardsLeft when the next card is missing
    pub fn complete_flip(&mut self) -> Result<FlipOutcome, GameError> {
        let guess = match self.phase {
            RoundPhase::Flipping { guess } => guess,
            from => {
                return Err(GameError::InvalidTransition {
                    from,
                    action: "complete the flip",
                })
            }
        };

        let current = self.current_card.ok_or(GameError::NoCurrentCard)?;
        let next = match self.next_card {
            Some(card) => card,
            None => {
                self.phase = RoundPhase::NoCardsLeft;
                return Ok(FlipOutcome::NoCardsLeft);
            }
        };

        let outcome = resolve_round(&current, &next, guess);
        self.balance = apply_outcome(self.balance, outcome);

        self.current_card = Some(next);
        // An exhausted deck leaves the next slot empty; the following flip ends the game
        self.next_card = self.deck.draw().ok();

        let result = RoundResult {
            guess,
            outcome,
            previous: current,
            revealed: next,
            balance: self.balance,
        };
        self.last_result = Some(result);
        self.phase = RoundPhase::Resolved;

        Ok(FlipOutcome::Resolved(result))
    }

    /// Resolved -> Idle, the next round
    pub fn advance(&mut self) -> Result<(), GameError> {
        if self.phase != RoundPhase::Resolved {
            return Err(GameError::InvalidTransition {
                from: self.phase,
                action: "start the next round",
            });
        }
        self.phase = RoundPhase::Idle;
        Ok(())
    }

    /// Runs guess, flip and advance in order
    pub fn play_round(&mut self, guess: Guess) -> Result<FlipOutcome, GameError> {
        self.guess(guess)?;
        let flip = self.complete_flip()?;
        if let FlipOutcome::Resolved(_) = flip {
            self.advance()?;
        }
        Ok(flip)
    }

    pub fn player_name(&self) -> &str {
        &self.player_name
    }

    pub fn balance(&self) -> i64 {
        self.balance
    }

    pub fn current_card(&self) -> Option<Card> {
        self.current_card
    }

    pub fn next_card(&self) -> Option<Card> {
        self.next_card
    }

    pub fn phase(&self) -> RoundPhase {
        self.phase
    }

    pub fn last_result(&self) -> Option<&RoundResult> {
        self.last_result.as_ref()
    }

    pub fn cards_remaining(&self) -> usize {
        self.deck.remaining()
    }
}
