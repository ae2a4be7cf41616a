use thiserror::Error;

use super::session::RoundPhase;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GameError {
    #[error("No cards left in the deck")]
    DeckExhausted,
    #[error("Cannot {action} while the round is {from}")]
    InvalidTransition {
        from: RoundPhase,
        action: &'static str,
    },
    #[error("No current card on the table")]
    NoCurrentCard,
}
