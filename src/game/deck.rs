use rand::seq::SliceRandom;
use rand::Rng;
use std::collections::VecDeque;

use super::cards::Card;
use super::errors::GameError;

/// The shuffled pool of 52 cards for one game session. Cards only ever leave
/// from the front.
#[derive(Debug, Clone)]
pub struct Deck {
    cards: VecDeque<Card>,
}

impl Deck {
    /// Shuffles a full deck with the thread-local RNG
    pub fn new_shuffled() -> Self {
        Self::from_rng(&mut rand::rng())
    }

    /// Shuffles a full deck with the given RNG; a seeded RNG gives a
    /// reproducible order
    pub fn from_rng<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let mut cards = Card::all_cards();
        cards.shuffle(rng);
        Self {
            cards: cards.into(),
        }
    }

    /// Deck with a predetermined order, first element drawn first
    pub fn with_cards(cards: Vec<Card>) -> Self {
        Self {
            cards: cards.into(),
        }
    }

    pub fn draw(&mut self) -> Result<Card, GameError> {
        self.cards.pop_front().ok_or(GameError::DeckExhausted)
    }

    pub fn remaining(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}
